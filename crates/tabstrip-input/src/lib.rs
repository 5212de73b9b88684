//! tabstrip input
//!
//! Decoded keyboard events and the fixed shortcut table that maps them to
//! tab navigation:
//! - `Shortcut+Shift+[` / `Shortcut+Shift+{` → previous tab
//! - `Shortcut+Shift+]` / `Shortcut+Shift+}` → next tab
//! - `Shortcut+1` … `Shortcut+8` → tab at that position
//! - `Shortcut+9` → last tab

mod error;
mod key;
mod shortcut;

pub use error::InputError;
pub use key::{Key, KeyEvent, KeyEventKind, Modifiers};
pub use shortcut::{shortcut_table, Chord, ShortcutAction, ShortcutTable};

pub type Result<T> = std::result::Result<T, InputError>;
