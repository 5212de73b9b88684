//! Tabbar configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabstrip_input::{shortcut_table, Chord, Modifiers, ShortcutAction, ShortcutTable};

use crate::error::CoreError;
use crate::Result;

/// Modifier that stands in for "Shortcut" in the tab shortcut table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutModifier {
    Ctrl,
    Super,
    Alt,
}

impl ShortcutModifier {
    /// Command on macOS, Ctrl elsewhere
    pub fn platform() -> Self {
        if cfg!(target_os = "macos") {
            ShortcutModifier::Super
        } else {
            ShortcutModifier::Ctrl
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            ShortcutModifier::Ctrl => Modifiers::CTRL,
            ShortcutModifier::Super => Modifiers::SUPER,
            ShortcutModifier::Alt => Modifiers::ALT,
        }
    }
}

impl Default for ShortcutModifier {
    fn default() -> Self {
        Self::platform()
    }
}

/// A binding added on top of the fixed shortcut table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraBinding {
    /// Chord text, e.g. `"Ctrl+Tab"`
    pub chord: String,
    pub action: ShortcutAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabbarConfig {
    /// Modifier used by the built-in shortcuts
    pub shortcut_modifier: ShortcutModifier,
    /// Process keyboard shortcuts at all
    pub keyboard_shortcuts: bool,
    /// Additional chord bindings
    pub extra_bindings: Vec<ExtraBinding>,
}

impl TabbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Build the shortcut table: the fixed bindings plus any extras
    pub fn shortcut_table(&self) -> Result<ShortcutTable> {
        let mut table = shortcut_table(self.shortcut_modifier.modifiers());

        for binding in &self.extra_bindings {
            let chord = Chord::parse(&binding.chord)?;
            if chord.modifiers.is_empty() {
                return Err(CoreError::Config(format!(
                    "binding '{}' has no modifier",
                    binding.chord
                )));
            }
            table.bind(chord, binding.action);
        }

        Ok(table)
    }
}

impl Default for TabbarConfig {
    fn default() -> Self {
        Self {
            shortcut_modifier: ShortcutModifier::platform(),
            keyboard_shortcuts: true,
            extra_bindings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_input::{Key, KeyEvent};

    #[test]
    fn test_defaults() {
        let config = TabbarConfig::default();
        assert!(config.keyboard_shortcuts);
        assert_eq!(config.shortcut_modifier, ShortcutModifier::platform());
        assert_eq!(config.shortcut_table().unwrap().len(), 13);
    }

    #[test]
    fn test_from_json_partial() {
        let config = TabbarConfig::from_json(r#"{"shortcut_modifier": "alt"}"#).unwrap();
        assert_eq!(config.shortcut_modifier, ShortcutModifier::Alt);
        assert!(config.keyboard_shortcuts);

        let table = config.shortcut_table().unwrap();
        let event = KeyEvent::new(Key::Char('2')).with_modifiers(Modifiers::ALT);
        assert_eq!(table.lookup(&event), Some(ShortcutAction::Select(1)));
    }

    #[test]
    fn test_extra_bindings() {
        let config = TabbarConfig::from_json(
            r#"{
                "shortcut_modifier": "ctrl",
                "extra_bindings": [
                    {"chord": "Ctrl+Tab", "action": "next"},
                    {"chord": "Ctrl+Shift+Tab", "action": "prev"}
                ]
            }"#,
        )
        .unwrap();

        let table = config.shortcut_table().unwrap();
        let event = KeyEvent::new(Key::Named("Tab".to_string())).with_modifiers(Modifiers::CTRL);
        assert_eq!(table.lookup(&event), Some(ShortcutAction::Next));
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn test_bad_bindings_rejected() {
        let config = TabbarConfig {
            extra_bindings: vec![ExtraBinding {
                chord: "Hyper+1".to_string(),
                action: ShortcutAction::Last,
            }],
            ..Default::default()
        };
        assert!(matches!(config.shortcut_table(), Err(CoreError::Input(_))));

        let config = TabbarConfig {
            extra_bindings: vec![ExtraBinding {
                chord: "x".to_string(),
                action: ShortcutAction::Last,
            }],
            ..Default::default()
        };
        assert!(matches!(config.shortcut_table(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = TabbarConfig::from_json(r#"{"shortcut_modifier": "hyper"}"#);
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TabbarConfig::load("/nonexistent/tabstrip.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
