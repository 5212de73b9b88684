//! Tabbar facade
//!
//! Composes the tab collection, the activation controller, the event
//! translator and the shortcut table behind one `parking_lot::RwLock`.
//! Mutations take the write lock, reads take the read lock.
//!
//! Content hooks run while the write lock is held, so a hook must not call
//! back into the same `Tabbar`. That includes asking whether its own tab is
//! active: the new tab is installed before `on_activate` runs, but the hook
//! can only observe that through state it receives itself, not through
//! `Tabbar::active_id`, which would deadlock.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use tabstrip_input::{shortcut_table, KeyEvent, ShortcutAction, ShortcutTable};
use tabstrip_tabs::{
    ActivationController, ActivationState, ClickTarget, Tab, TabCollection, TabContent, TabId,
};

use crate::config::{ShortcutModifier, TabbarConfig};
use crate::events::{EventTranslator, TabEvent, TabEvents};
use crate::Result;

/// Read-only snapshot of one tab, for painting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub id: TabId,
    pub position: usize,
    /// Content label if it has one, otherwise the tab label
    pub label: String,
    pub closeable: bool,
    pub active: bool,
    pub became_active: bool,
}

/// What one [`Tabbar::update`] call did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Shortcuts that matched, in key order
    pub shortcuts: Vec<ShortcutAction>,
    /// Click events in tab order; each was applied, stale ones as no-ops
    pub events: Vec<TabEvent>,
    /// Positions of tabs that became active, flags now cleared
    pub became_active: Vec<usize>,
}

impl Frame {
    /// Tab to scroll into view, if any became active
    pub fn scroll_to(&self) -> Option<usize> {
        self.became_active.first().copied()
    }
}

struct TabbarState<C> {
    tabs: TabCollection<C>,
    activation: ActivationController,
}

impl<C: TabContent> TabbarState<C> {
    fn view(&self, position: usize) -> Option<TabView> {
        let tab = self.tabs.get(position)?;
        Some(TabView {
            id: tab.id(),
            position,
            label: tab.display_label(),
            closeable: tab.closeable,
            active: self.activation.is_active(tab.id()),
            became_active: tab.became_active(),
        })
    }

    fn apply(&mut self, event: TabEvent) -> bool {
        match event {
            TabEvent::Activate(id) => self.activation.activate(&mut self.tabs, id),
            TabEvent::Close(id) => match self.tabs.index_of(id) {
                Some(position) => self.activation.close(&mut self.tabs, position).is_some(),
                None => false,
            },
        }
    }

    fn apply_shortcut(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Prev => self.activation.prev(&mut self.tabs),
            ShortcutAction::Next => self.activation.next(&mut self.tabs),
            ShortcutAction::Select(position) => {
                self.activation.activate_at(&mut self.tabs, position)
            }
            ShortcutAction::Last => match self.tabs.len().checked_sub(1) {
                Some(last) => self.activation.activate_at(&mut self.tabs, last),
                None => false,
            },
        }
    }

    fn take_became_active(&mut self) -> Vec<usize> {
        self.tabs
            .iter_mut()
            .enumerate()
            .filter_map(|(i, tab)| tab.take_became_active().then_some(i))
            .collect()
    }
}

pub struct Tabbar<C> {
    state: Arc<RwLock<TabbarState<C>>>,
    shortcuts: Arc<ShortcutTable>,
    keyboard_shortcuts: bool,
    translator: EventTranslator,
}

impl<C: TabContent> Tabbar<C> {
    /// An empty tabbar with the default shortcut table
    pub fn new() -> Self {
        let table = shortcut_table(ShortcutModifier::platform().modifiers());
        Self::from_parts(TabCollection::new(), table, true)
    }

    pub fn with_config(config: &TabbarConfig) -> Result<Self> {
        let table = config.shortcut_table()?;
        Ok(Self::from_parts(
            TabCollection::new(),
            table,
            config.keyboard_shortcuts,
        ))
    }

    /// A tabbar over existing tabs. Nothing is active until the first
    /// activation.
    pub fn with_tabs<I>(tabs: I) -> Self
    where
        I: IntoIterator<Item = Tab<C>>,
    {
        let table = shortcut_table(ShortcutModifier::platform().modifiers());
        Self::from_parts(tabs.into_iter().collect(), table, true)
    }

    fn from_parts(tabs: TabCollection<C>, shortcuts: ShortcutTable, keyboard: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(TabbarState {
                tabs,
                activation: ActivationController::new(),
            })),
            shortcuts: Arc::new(shortcuts),
            keyboard_shortcuts: keyboard,
            translator: EventTranslator,
        }
    }

    // Reads

    pub fn len(&self) -> usize {
        self.state.read().tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().tabs.is_empty()
    }

    /// Snapshot of all tabs in display order
    pub fn tabs(&self) -> Vec<TabView> {
        let state = self.state.read();
        (0..state.tabs.len())
            .filter_map(|i| state.view(i))
            .collect()
    }

    /// Borrow the tabs in display order, e.g. to lay out their content
    pub fn read_tabs<R>(&self, f: impl FnOnce(&[Tab<C>]) -> R) -> R {
        f(self.state.read().tabs.tabs())
    }

    pub fn active(&self) -> Option<TabView> {
        let state = self.state.read();
        state
            .activation
            .active_index(&state.tabs)
            .and_then(|i| state.view(i))
    }

    /// Borrow the active tab
    pub fn read_active<R>(&self, f: impl FnOnce(Option<&Tab<C>>) -> R) -> R {
        let state = self.state.read();
        let active = state.activation.active_id().and_then(|id| state.tabs.by_id(id));
        f(active)
    }

    /// Mutably borrow the active tab, e.g. to lay out content that needs
    /// `&mut self`
    pub fn write_active<R>(&self, f: impl FnOnce(Option<&mut Tab<C>>) -> R) -> R {
        let mut guard = self.state.write();
        let state = &mut *guard;
        let active = match state.activation.active_id() {
            Some(id) => state.tabs.by_id_mut(id),
            None => None,
        };
        f(active)
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.state.read().activation.active_id()
    }

    pub fn active_index(&self) -> Option<usize> {
        let state = self.state.read();
        state.activation.active_index(&state.tabs)
    }

    pub fn activation_state(&self) -> ActivationState {
        self.state.read().activation.state()
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.state.read().tabs.index_of(id)
    }

    // Mutations

    pub fn append(&self, tab: Tab<C>) -> usize {
        self.state.write().tabs.append(tab)
    }

    pub fn insert(&self, index: usize, tab: Tab<C>) -> usize {
        self.state.write().tabs.insert(index, tab)
    }

    /// Insert after `anchor`; appends when the anchor is gone
    pub fn insert_after(&self, anchor: TabId, tab: Tab<C>) -> usize {
        self.state.write().tabs.insert_after(anchor, tab)
    }

    pub fn move_tab(&self, from: usize, to: usize) -> bool {
        self.state.write().tabs.move_tab(from, to)
    }

    pub fn activate(&self, id: TabId) -> bool {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.activation.activate(&mut state.tabs, id)
    }

    pub fn activate_at(&self, position: usize) -> bool {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.activation.activate_at(&mut state.tabs, position)
    }

    pub fn prev(&self) -> bool {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.activation.prev(&mut state.tabs)
    }

    pub fn next(&self) -> bool {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.activation.next(&mut state.tabs)
    }

    /// Close the tab at `position`, returning it. Closing the active tab
    /// activates its neighbour.
    pub fn close(&self, position: usize) -> Option<Tab<C>> {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.activation.close(&mut state.tabs, position)
    }

    // Input

    /// Record a decoded click. Returns `false` for unknown tabs.
    pub fn click(&self, id: TabId, target: ClickTarget) -> bool {
        match self.state.write().tabs.by_id_mut(id) {
            Some(tab) => {
                tab.click(target);
                true
            }
            None => false,
        }
    }

    /// Apply one key event through the shortcut table
    pub fn handle_key(&self, event: &KeyEvent) -> Option<ShortcutAction> {
        if !self.keyboard_shortcuts {
            return None;
        }
        let action = self.shortcuts.lookup(event)?;
        self.state.write().apply_shortcut(action);
        Some(action)
    }

    /// Drain pending clicks into events without applying them
    pub fn events(&self) -> TabEvents {
        self.translator.translate(&mut self.state.write().tabs)
    }

    pub fn apply(&self, event: TabEvent) -> bool {
        self.state.write().apply(event)
    }

    /// Take every tab's became-active flag, returning the positions that
    /// had it set
    pub fn take_became_active(&self) -> Vec<usize> {
        self.state.write().take_became_active()
    }

    /// Run one frame: shortcuts, then clicks, then became-active flags.
    /// The whole frame runs under one write lock.
    pub fn update(&self, keys: &[KeyEvent]) -> Frame {
        let mut state = self.state.write();
        let mut frame = Frame::default();

        if self.keyboard_shortcuts {
            for key in keys {
                if let Some(action) = self.shortcuts.lookup(key) {
                    state.apply_shortcut(action);
                    frame.shortcuts.push(action);
                }
            }
        }

        for event in self.translator.translate(&mut state.tabs) {
            state.apply(event);
            frame.events.push(event);
        }

        frame.became_active = state.take_became_active();
        frame
    }
}

impl<C: TabContent> Default for Tabbar<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Tabbar<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            shortcuts: Arc::clone(&self.shortcuts),
            keyboard_shortcuts: self.keyboard_shortcuts,
            translator: self.translator,
        }
    }
}
