//! Click-to-event translation
//!
//! One pass per frame over the tabs, in display order. Close clicks are
//! checked before header clicks, so a tab clicked on both in one frame is
//! closed first and its activation then falls through as a no-op.

use serde::{Deserialize, Serialize};

use tabstrip_tabs::{TabCollection, TabContent, TabId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "tab")]
pub enum TabEvent {
    Activate(TabId),
    Close(TabId),
}

impl TabEvent {
    pub fn tab(&self) -> TabId {
        match self {
            TabEvent::Activate(id) | TabEvent::Close(id) => *id,
        }
    }
}

/// One frame's worth of tab events, consumed once
#[derive(Debug)]
pub struct TabEvents {
    inner: std::vec::IntoIter<TabEvent>,
}

impl TabEvents {
    pub(crate) fn new(events: Vec<TabEvent>) -> Self {
        Self {
            inner: events.into_iter(),
        }
    }
}

impl Iterator for TabEvents {
    type Item = TabEvent;

    fn next(&mut self) -> Option<TabEvent> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for TabEvents {}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventTranslator;

impl EventTranslator {
    /// Drain every tab's click state into events.
    ///
    /// Close clicks on tabs that are not closeable are consumed and dropped.
    pub fn translate<C: TabContent>(&self, tabs: &mut TabCollection<C>) -> TabEvents {
        let mut events = Vec::new();

        for tab in tabs.iter_mut() {
            let id = tab.id();
            if tab.close_button().clicked() {
                if tab.closeable {
                    events.push(TabEvent::Close(id));
                } else {
                    tracing::trace!(tab_id = %id, "Dropping close click on non-closeable tab");
                }
            }
            if tab.header().clicked() {
                events.push(TabEvent::Activate(id));
            }
        }

        TabEvents::new(events)
    }
}
