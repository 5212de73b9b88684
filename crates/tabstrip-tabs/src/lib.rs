//! tabstrip tab model
//!
//! An ordered collection of tabs plus the state machine that tracks which
//! one is active. Tabs are addressed by a stable [`TabId`] assigned when the
//! tab is created; positions shift as tabs are inserted, moved and closed.

mod activation;
mod collection;
mod content;
mod state;
mod tab;

pub use activation::ActivationController;
pub use collection::TabCollection;
pub use content::{Labeled, OnActivate, OnClose, OnDeactivate, TabContent};
pub use state::ActivationState;
pub use tab::{ClickTarget, Clickable, Tab, TabId};
