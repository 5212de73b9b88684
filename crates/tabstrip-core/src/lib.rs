//! tabstrip core
//!
//! The [`Tabbar`] facade is the only surface the rendering layer talks to.
//! Each frame it:
//! 1. applies pending keyboard shortcuts,
//! 2. turns header and close-button clicks into activate/close transitions,
//! 3. hands back the tabs that just became active so the caller can scroll
//!    them into view once.
//!
//! All collection and activation state sits behind a single reader/writer
//! lock owned by the Tabbar.

mod config;
mod error;
mod events;
mod tabbar;

pub use config::{ExtraBinding, ShortcutModifier, TabbarConfig};
pub use error::CoreError;
pub use events::{EventTranslator, TabEvent, TabEvents};
pub use tabbar::{Frame, TabView, Tabbar};

// Re-export the tab model and input types
pub use tabstrip_input::{
    shortcut_table, Chord, InputError, Key, KeyEvent, KeyEventKind, Modifiers, ShortcutAction,
    ShortcutTable,
};
pub use tabstrip_tabs::{
    ActivationController, ActivationState, ClickTarget, Clickable, Labeled, OnActivate, OnClose,
    OnDeactivate, Tab, TabCollection, TabContent, TabId,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "tabstrip_core=info,tabstrip_tabs=info,tabstrip_input=info";

/// Install the global tracing subscriber. Hosts that already install their
/// own subscriber should skip this; a second call returns an error.
///
/// ```no_run
/// use tabstrip_core::{init_logging, Tab, Tabbar};
///
/// init_logging().expect("subscriber already installed");
/// let tabbar: Tabbar<String> = Tabbar::new();
/// tabbar.append(Tab::new("scratch", String::new(), true));
/// ```
pub fn init_logging() -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| CoreError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        assert!(init_logging().is_ok());
        assert!(matches!(init_logging(), Err(CoreError::Logging(_))));

        // Transitions log through the installed subscriber
        let tabbar: Tabbar<()> = Tabbar::new();
        tabbar.append(Tab::new("a", (), true));
        assert!(tabbar.activate_at(0));
    }
}
