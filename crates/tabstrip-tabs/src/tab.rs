//! Tab data structure
//!
//! A tab pairs a label and an owned content value with its lifecycle flags.
//! Tabs display:
//! - Label (from the content when it is [`Labeled`](crate::Labeled))
//! - Close button, only when closeable
//! - Active underline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::TabContent;

/// Stable identity of a tab, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Click state for one hit area of a tab.
///
/// The rendering layer records decoded clicks; the event pass consumes them
/// once per cycle.
#[derive(Debug, Clone, Default)]
pub struct Clickable {
    pending: u32,
}

impl Clickable {
    /// Record a click on this area
    pub fn click(&mut self) {
        self.pending = self.pending.saturating_add(1);
    }

    /// Whether a click fired since the last call. Consumes all pending clicks.
    pub fn clicked(&mut self) -> bool {
        let fired = self.pending > 0;
        self.pending = 0;
        fired
    }

    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }
}

/// Which hit area of a tab received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Header,
    CloseButton,
}

#[derive(Debug)]
pub struct Tab<C> {
    id: TabId,
    /// Fallback display text
    pub label: String,
    content: C,
    /// Whether the tab offers a close button and accepts close requests
    pub closeable: bool,
    became_active: bool,
    header: Clickable,
    close_button: Clickable,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last time the tab became active
    pub last_activated_at: Option<DateTime<Utc>>,
}

impl<C: TabContent> Tab<C> {
    pub fn new(label: impl Into<String>, content: C, closeable: bool) -> Self {
        Self {
            id: TabId::new(),
            label: label.into(),
            content,
            closeable,
            became_active: false,
            header: Clickable::default(),
            close_button: Clickable::default(),
            created_at: Utc::now(),
            last_activated_at: None,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    /// Get display label (content label wins over the stored one)
    pub fn display_label(&self) -> String {
        match self.content.labeled() {
            Some(labeled) => labeled.label(),
            None => self.label.clone(),
        }
    }

    /// Whether this tab became active since the flag was last taken
    pub fn became_active(&self) -> bool {
        self.became_active
    }

    /// Read and clear the became-active flag
    pub fn take_became_active(&mut self) -> bool {
        std::mem::take(&mut self.became_active)
    }

    pub fn header(&mut self) -> &mut Clickable {
        &mut self.header
    }

    pub fn close_button(&mut self) -> &mut Clickable {
        &mut self.close_button
    }

    /// Record a decoded click on one of the tab's hit areas
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Header => self.header.click(),
            ClickTarget::CloseButton => self.close_button.click(),
        }
    }

    pub(crate) fn mark_activated(&mut self) {
        self.became_active = true;
        self.last_activated_at = Some(Utc::now());
    }

    pub(crate) fn fire_activate(&mut self) {
        if let Some(hook) = self.content.activatable() {
            hook.on_activate();
        }
    }

    pub(crate) fn fire_deactivate(&mut self) {
        if let Some(hook) = self.content.deactivatable() {
            hook.on_deactivate();
        }
    }

    pub(crate) fn fire_close(&mut self) {
        if let Some(hook) = self.content.closable() {
            hook.on_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Labeled;

    struct Document {
        title: String,
    }

    impl Labeled for Document {
        fn label(&self) -> String {
            self.title.clone()
        }
    }

    impl TabContent for Document {
        fn labeled(&self) -> Option<&dyn Labeled> {
            Some(self)
        }
    }

    #[test]
    fn test_new_tab() {
        let tab = Tab::new("Welcome", (), true);
        assert_eq!(tab.label, "Welcome");
        assert!(tab.closeable);
        assert!(!tab.became_active());
        assert!(tab.last_activated_at.is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Tab::new("a", (), true);
        let b = Tab::new("a", (), true);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display_label_prefers_content() {
        let plain = Tab::new("fallback", (), false);
        assert_eq!(plain.display_label(), "fallback");

        let doc = Tab::new(
            "fallback",
            Document {
                title: "notes.md".to_string(),
            },
            true,
        );
        assert_eq!(doc.display_label(), "notes.md");
    }

    #[test]
    fn test_clicks_consumed_once() {
        let mut tab = Tab::new("a", (), true);
        tab.click(ClickTarget::Header);
        tab.click(ClickTarget::Header);
        assert!(tab.header().clicked());
        assert!(!tab.header().clicked());
        assert!(!tab.close_button().clicked());
    }

    #[test]
    fn test_take_became_active() {
        let mut tab = Tab::new("a", (), true);
        tab.mark_activated();
        assert!(tab.became_active());
        assert!(tab.last_activated_at.is_some());
        assert!(tab.take_became_active());
        assert!(!tab.take_became_active());
    }
}
