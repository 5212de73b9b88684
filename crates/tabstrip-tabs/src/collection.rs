//! Ordered tab collection
//!
//! Owns the display order and a reverse index from [`TabId`] to position.
//! Every mutation leaves `index[tab.id()] == position` for all tabs, and
//! removed ids never stay in the index.

use std::collections::HashMap;

use crate::content::TabContent;
use crate::tab::{Tab, TabId};

#[derive(Debug)]
pub struct TabCollection<C> {
    tabs: Vec<Tab<C>>,
    index: HashMap<TabId, usize>,
}

impl<C: TabContent> TabCollection<C> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab<C>> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Tab<C>> {
        self.tabs.iter_mut()
    }

    pub fn get(&self, position: usize) -> Option<&Tab<C>> {
        self.tabs.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Tab<C>> {
        self.tabs.get_mut(position)
    }

    pub fn by_id(&self, id: TabId) -> Option<&Tab<C>> {
        self.index_of(id).and_then(|i| self.tabs.get(i))
    }

    pub fn by_id_mut(&mut self, id: TabId) -> Option<&mut Tab<C>> {
        self.index_of(id).and_then(|i| self.tabs.get_mut(i))
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of a tab, `None` when it is not (or no longer) present
    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Add a tab at the end. Returns its position.
    pub fn append(&mut self, tab: Tab<C>) -> usize {
        self.insert(self.tabs.len(), tab)
    }

    /// Insert a tab at `index`, clamped to `[0, len]`. Returns its position.
    pub fn insert(&mut self, index: usize, tab: Tab<C>) -> usize {
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, tab);
        self.reindex_from(index);
        index
    }

    /// Insert a tab right after `anchor`.
    ///
    /// A missing anchor appends the tab at the end instead of dropping it.
    pub fn insert_after(&mut self, anchor: TabId, tab: Tab<C>) -> usize {
        match self.index_of(anchor) {
            Some(i) => self.insert(i + 1, tab),
            None => {
                tracing::warn!(
                    anchor = %anchor,
                    tab_id = %tab.id(),
                    "Anchor tab not found, appending"
                );
                self.append(tab)
            }
        }
    }

    /// Remove the tab at `position`.
    ///
    /// Returns `None` without touching the collection when the position is
    /// out of range or the tab is not closeable. Outside this crate tabs are
    /// removed through [`ActivationController::close`](crate::ActivationController::close),
    /// so the active reference can never outlive its tab.
    pub(crate) fn remove(&mut self, position: usize) -> Option<Tab<C>> {
        if !self.tabs.get(position)?.closeable {
            return None;
        }

        let tab = self.tabs.remove(position);
        self.index.remove(&tab.id());
        self.reindex_from(position);
        Some(tab)
    }

    /// Move the tab at `from` to `to`, both clamped to the last position.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() {
            return false;
        }
        let to = to.min(self.tabs.len() - 1);
        if from == to {
            return false;
        }

        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.reindex_from(from.min(to));
        true
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, tab) in self.tabs.iter().enumerate().skip(start) {
            self.index.insert(tab.id(), i);
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.tabs.len(), "stale index entries");
        for (i, tab) in self.tabs.iter().enumerate() {
            assert_eq!(self.index.get(&tab.id()), Some(&i), "index out of sync");
        }
    }
}

impl<C: TabContent> Default for TabCollection<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TabContent> FromIterator<Tab<C>> for TabCollection<C> {
    fn from_iter<I: IntoIterator<Item = Tab<C>>>(iter: I) -> Self {
        let mut collection = Self::new();
        for tab in iter {
            collection.append(tab);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(c: &TabCollection<()>) -> Vec<&str> {
        c.iter().map(|t| t.label.as_str()).collect()
    }

    fn abc() -> TabCollection<()> {
        ["A", "B", "C"]
            .into_iter()
            .map(|l| Tab::new(l, (), true))
            .collect()
    }

    #[test]
    fn test_append_then_index_of() {
        let mut c = abc();
        let tab = Tab::new("D", (), true);
        let id = tab.id();
        c.append(tab);
        assert_eq!(c.index_of(id), Some(c.len() - 1));
        c.assert_consistent();
    }

    #[test]
    fn test_insert_clamps() {
        let mut c = abc();
        let pos = c.insert(99, Tab::new("D", (), true));
        assert_eq!(pos, 3);
        let pos = c.insert(0, Tab::new("E", (), true));
        assert_eq!(pos, 0);
        assert_eq!(labels(&c), ["E", "A", "B", "C", "D"]);
        c.assert_consistent();
    }

    #[test]
    fn test_insert_after() {
        let mut c = abc();
        let b = c.get(1).unwrap().id();
        c.insert_after(b, Tab::new("D", (), true));
        assert_eq!(labels(&c), ["A", "B", "D", "C"]);
        c.assert_consistent();
    }

    #[test]
    fn test_insert_after_missing_anchor_appends() {
        let mut c = abc();
        let ghost = TabId::new();
        let pos = c.insert_after(ghost, Tab::new("D", (), true));
        assert_eq!(pos, 3);
        assert_eq!(labels(&c), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_remove() {
        let mut c = abc();
        let b = c.get(1).unwrap().id();
        let removed = c.remove(1).unwrap();
        assert_eq!(removed.label, "B");
        assert!(!c.contains(b));
        assert_eq!(c.index_of(b), None);
        assert_eq!(labels(&c), ["A", "C"]);
        c.assert_consistent();
    }

    #[test]
    fn test_remove_invalid_is_noop() {
        let mut c = abc();
        assert!(c.remove(3).is_none());
        assert!(c.remove(3).is_none());
        assert_eq!(c.len(), 3);
        c.assert_consistent();
    }

    #[test]
    fn test_remove_not_closeable_is_noop() {
        let mut c = abc();
        c.insert(0, Tab::new("Pinned", (), false));
        assert!(c.remove(0).is_none());
        assert_eq!(labels(&c), ["Pinned", "A", "B", "C"]);
    }

    #[test]
    fn test_move_tab() {
        let mut c = abc();
        assert!(c.move_tab(0, 2));
        assert_eq!(labels(&c), ["B", "C", "A"]);
        assert!(c.move_tab(2, 0));
        assert_eq!(labels(&c), ["A", "B", "C"]);
        assert!(c.move_tab(1, 50));
        assert_eq!(labels(&c), ["A", "C", "B"]);
        assert!(!c.move_tab(1, 1));
        assert!(!c.move_tab(7, 0));
        c.assert_consistent();
    }

    #[test]
    fn test_index_consistent_over_mixed_ops() {
        let mut c: TabCollection<()> = TabCollection::new();
        let mut removed = Vec::new();
        for round in 0..24usize {
            c.insert(round * 7 % (c.len() + 1), Tab::new(format!("t{round}"), (), true));
            if round % 3 == 2 {
                let victim = round % c.len();
                let id = c.get(victim).unwrap().id();
                c.remove(victim);
                removed.push(id);
            }
            c.assert_consistent();
        }
        for id in removed {
            assert_eq!(c.index_of(id), None);
        }
    }
}
