//! Activation state machine
//!
//! ```text
//! NoActiveTab
//!   ↓ activate(id)
//! Active(id) ──activate(other)──▶ Active(other)
//!   ↓ close(last remaining tab)
//! NoActiveTab
//! ```

use serde::{Deserialize, Serialize};

use crate::tab::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "tab")]
pub enum ActivationState {
    /// Nothing is selected; only reachable with an empty collection or before
    /// the first activation
    #[default]
    NoActiveTab,
    /// The given tab is selected and present in the collection
    Active(TabId),
}

impl ActivationState {
    pub fn active_id(&self) -> Option<TabId> {
        match self {
            ActivationState::NoActiveTab => None,
            ActivationState::Active(id) => Some(*id),
        }
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active_id() == Some(id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationState::NoActiveTab => "none",
            ActivationState::Active(_) => "active",
        }
    }
}

impl std::fmt::Display for ActivationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivationState::NoActiveTab => write!(f, "{}", self.as_str()),
            ActivationState::Active(id) => write!(f, "{}({})", self.as_str(), id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_active_tab() {
        let state = ActivationState::default();
        assert_eq!(state, ActivationState::NoActiveTab);
        assert_eq!(state.active_id(), None);
        assert_eq!(state.to_string(), "none");
    }

    #[test]
    fn test_active_reports_id() {
        let id = TabId::new();
        let state = ActivationState::Active(id);
        assert!(state.is_active(id));
        assert!(!state.is_active(TabId::new()));
        assert_eq!(state.to_string(), format!("active({})", id));
    }
}
