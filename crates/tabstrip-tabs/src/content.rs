//! Content capabilities
//!
//! A tab's content may opt into any of the hooks below. The collection and
//! the activation controller only call a hook when the content hands out the
//! matching capability; a missing capability is skipped, never an error.

/// Content that supplies its own label, overriding [`crate::Tab::label`].
pub trait Labeled {
    fn label(&self) -> String;
}

/// Called after the tab has been installed as the active tab.
///
/// Runs while the owner (e.g. a `Tabbar`) holds its write lock; the hook must
/// not call back into that owner.
pub trait OnActivate {
    fn on_activate(&mut self);
}

/// Called on the outgoing active tab, before the next tab is installed.
pub trait OnDeactivate {
    fn on_deactivate(&mut self);
}

/// Called once the tab has been removed from its collection.
pub trait OnClose {
    fn on_close(&mut self);
}

/// The content owned by a tab.
///
/// Every accessor defaults to `None`. A content type advertises a capability
/// by overriding the accessor to return `Some(self)`:
///
/// ```
/// use tabstrip_tabs::{OnActivate, TabContent};
///
/// struct Editor {
///     focused: bool,
/// }
///
/// impl OnActivate for Editor {
///     fn on_activate(&mut self) {
///         self.focused = true;
///     }
/// }
///
/// impl TabContent for Editor {
///     fn activatable(&mut self) -> Option<&mut dyn OnActivate> {
///         Some(self)
///     }
/// }
/// ```
pub trait TabContent: Send + Sync {
    fn labeled(&self) -> Option<&dyn Labeled> {
        None
    }

    fn activatable(&mut self) -> Option<&mut dyn OnActivate> {
        None
    }

    fn deactivatable(&mut self) -> Option<&mut dyn OnDeactivate> {
        None
    }

    fn closable(&mut self) -> Option<&mut dyn OnClose> {
        None
    }
}

impl<T: TabContent + ?Sized> TabContent for Box<T> {
    fn labeled(&self) -> Option<&dyn Labeled> {
        (**self).labeled()
    }

    fn activatable(&mut self) -> Option<&mut dyn OnActivate> {
        (**self).activatable()
    }

    fn deactivatable(&mut self) -> Option<&mut dyn OnDeactivate> {
        (**self).deactivatable()
    }

    fn closable(&mut self) -> Option<&mut dyn OnClose> {
        (**self).closable()
    }
}

impl TabContent for String {}

impl TabContent for &'static str {}

impl TabContent for () {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Titled(&'static str);

    impl Labeled for Titled {
        fn label(&self) -> String {
            self.0.to_string()
        }
    }

    impl TabContent for Titled {
        fn labeled(&self) -> Option<&dyn Labeled> {
            Some(self)
        }
    }

    #[test]
    fn test_capabilities_default_to_none() {
        let mut plain = ();
        assert!(plain.labeled().is_none());
        assert!(plain.activatable().is_none());
        assert!(plain.deactivatable().is_none());
        assert!(plain.closable().is_none());
    }

    #[test]
    fn test_boxed_content_forwards_capabilities() {
        let boxed: Box<dyn TabContent> = Box::new(Titled("Inbox"));
        let label = boxed.labeled().map(|l| l.label());
        assert_eq!(label.as_deref(), Some("Inbox"));
    }
}
