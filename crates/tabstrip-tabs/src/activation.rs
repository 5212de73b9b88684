//! Activation controller
//!
//! Holds the single active tab reference and drives the hook protocol:
//! the outgoing tab is deactivated before the incoming tab is installed,
//! and the incoming tab's activate hook runs after installation.
//!
//! Tabs must leave the collection through [`ActivationController::close`],
//! which keeps the active reference pointing at a present tab.

use crate::collection::TabCollection;
use crate::content::TabContent;
use crate::state::ActivationState;
use crate::tab::{Tab, TabId};

#[derive(Debug, Clone, Default)]
pub struct ActivationController {
    state: ActivationState,
}

impl ActivationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.state.active_id()
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.state.is_active(id)
    }

    /// Position of the active tab, `None` when nothing is active
    pub fn active_index<C: TabContent>(&self, tabs: &TabCollection<C>) -> Option<usize> {
        self.active_id().and_then(|id| tabs.index_of(id))
    }

    /// Make `id` the active tab. Unknown ids are ignored and return `false`.
    pub fn activate<C: TabContent>(&mut self, tabs: &mut TabCollection<C>, id: TabId) -> bool {
        if !tabs.contains(id) {
            tracing::trace!(tab_id = %id, "Ignoring activation of unknown tab");
            return false;
        }

        let from = self.state;
        if let Some(current) = from.active_id().filter(|current| *current != id) {
            if let Some(outgoing) = tabs.by_id_mut(current) {
                outgoing.fire_deactivate();
            }
        }

        self.state = ActivationState::Active(id);

        let Some(incoming) = tabs.by_id_mut(id) else {
            return false;
        };
        incoming.mark_activated();
        incoming.fire_activate();

        tracing::debug!(from = %from, to = %self.state, "Tab activation transition");

        true
    }

    /// Activate the tab at `position`, if there is one
    pub fn activate_at<C: TabContent>(
        &mut self,
        tabs: &mut TabCollection<C>,
        position: usize,
    ) -> bool {
        match tabs.get(position).map(|t| t.id()) {
            Some(id) => self.activate(tabs, id),
            None => false,
        }
    }

    /// Activate the tab before the active one, wrapping to the last tab
    pub fn prev<C: TabContent>(&mut self, tabs: &mut TabCollection<C>) -> bool {
        let Some(i) = self.active_index(tabs) else {
            return false;
        };
        let target = if i == 0 { tabs.len() - 1 } else { i - 1 };
        self.activate_at(tabs, target)
    }

    /// Activate the tab after the active one, wrapping to the first tab
    pub fn next<C: TabContent>(&mut self, tabs: &mut TabCollection<C>) -> bool {
        let Some(i) = self.active_index(tabs) else {
            return false;
        };
        let target = if i + 1 < tabs.len() { i + 1 } else { 0 };
        self.activate_at(tabs, target)
    }

    /// Close the tab at `position`.
    ///
    /// Closing the active tab hands activation to the tab that slides into
    /// its slot, or to the new last tab when the closed tab was last. Closing
    /// the only tab resets to [`ActivationState::NoActiveTab`]. The closed
    /// content's close hook runs after removal.
    pub fn close<C: TabContent>(
        &mut self,
        tabs: &mut TabCollection<C>,
        position: usize,
    ) -> Option<Tab<C>> {
        let closing = tabs.get(position)?;
        if !closing.closeable {
            tracing::trace!(position, "Ignoring close of non-closeable tab");
            return None;
        }
        let id = closing.id();

        if self.is_active(id) {
            let successor = tabs
                .get(position + 1)
                .or_else(|| position.checked_sub(1).and_then(|p| tabs.get(p)))
                .map(|t| t.id());

            match successor {
                Some(next) => {
                    self.activate(tabs, next);
                }
                None => {
                    if let Some(outgoing) = tabs.by_id_mut(id) {
                        outgoing.fire_deactivate();
                    }
                    self.state = ActivationState::NoActiveTab;
                    tracing::debug!(tab_id = %id, "Last tab closed, no active tab");
                }
            }
        }

        let mut tab = tabs.remove(position)?;
        tab.fire_close();

        tracing::info!(tab_id = %id, position, remaining = tabs.len(), "Closed tab");

        Some(tab)
    }
}
