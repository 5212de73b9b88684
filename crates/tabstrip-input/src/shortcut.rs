//! Keyboard shortcut table
//!
//! Maps an exact modifier set plus key to a tab navigation action. Anything
//! not in the table, including known keys held with extra modifiers, is
//! ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::key::{Key, KeyEvent, Modifiers};
use crate::Result;

/// Tab navigation triggered by a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    /// Previous tab, wrapping to the last
    Prev,
    /// Next tab, wrapping to the first
    Next,
    /// Tab at a 0-based position, if it exists
    Select(usize),
    /// Last tab, however many there are
    Last,
}

/// A modifier set plus key, e.g. `Ctrl+Shift+[`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Chord {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Parse a chord such as `"Ctrl+Shift+]"` or `"Shortcut+9"`.
    ///
    /// `Shortcut` stands for the platform shortcut modifier. A trailing
    /// `++` names the `+` key itself.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InputError::EmptyChord);
        }

        let (mods, key) = if let Some(head) = input.strip_suffix("++") {
            (head, "+")
        } else if input == "+" {
            ("", "+")
        } else {
            match input.rsplit_once('+') {
                Some((head, key)) => (head, key),
                None => ("", input),
            }
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(InputError::InvalidChord(input.to_string()));
        }

        let mut modifiers = Modifiers::NONE;
        for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            modifiers |= match part.to_lowercase().as_str() {
                "shortcut" => Modifiers::shortcut(),
                "ctrl" | "control" => Modifiers::CTRL,
                "shift" => Modifiers::SHIFT,
                "alt" | "option" => Modifiers::ALT,
                "super" | "cmd" | "command" | "meta" => Modifiers::SUPER,
                _ => return Err(InputError::UnknownModifier(part.to_string())),
            };
        }

        Ok(Self {
            modifiers,
            key: Key::from_name(key),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    bindings: HashMap<Chord, ShortcutAction>,
}

impl ShortcutTable {
    /// A table with no bindings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace a binding
    pub fn bind(&mut self, chord: Chord, action: ShortcutAction) {
        self.bindings.insert(chord, action);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Action for a key event. Only presses match.
    pub fn lookup(&self, event: &KeyEvent) -> Option<ShortcutAction> {
        if !event.is_press() {
            return None;
        }

        let chord = Chord::new(event.modifiers, event.key.clone());
        let action = self.bindings.get(&chord).copied();
        if action.is_none() {
            tracing::trace!(key = %event.key, modifiers = ?event.modifiers, "No shortcut bound");
        }
        action
    }
}

/// Build the fixed tab shortcut table around a shortcut modifier.
pub fn shortcut_table(shortcut: Modifiers) -> ShortcutTable {
    let mut table = ShortcutTable::empty();
    let shifted = shortcut | Modifiers::SHIFT;

    for key in ['[', '{'] {
        table.bind(Chord::new(shifted, Key::Char(key)), ShortcutAction::Prev);
    }
    for key in [']', '}'] {
        table.bind(Chord::new(shifted, Key::Char(key)), ShortcutAction::Next);
    }

    for (position, digit) in ('1'..='8').enumerate() {
        table.bind(
            Chord::new(shortcut, Key::Char(digit)),
            ShortcutAction::Select(position),
        );
    }
    table.bind(Chord::new(shortcut, Key::Char('9')), ShortcutAction::Last);

    table
}
