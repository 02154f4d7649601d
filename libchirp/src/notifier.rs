//! Action notification between a post cell and its owning screen
//!
//! A post cell owns an [`ActionNotifier`]; the screen that owns the cell
//! registers itself as the notifier's [`ActionObserver`]. Each tap on one of
//! the cell's four buttons becomes exactly one call on the observer.
//!
//! # Ownership
//!
//! The screen owns its cells, so the cell must not own the screen back. The
//! notifier holds the observer as a [`Weak`] reference: dropping the screen
//! leaves the notifier in the same silent-drop state as never registering.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use libchirp::notifier::{ActionNotifier, ActionObserver};
//!
//! #[derive(Default)]
//! struct LikeCounter {
//!     likes: Cell<usize>,
//! }
//!
//! impl ActionObserver for LikeCounter {
//!     fn on_reply(&self) {}
//!     fn on_retweet(&self) {}
//!     fn on_like(&self) {
//!         self.likes.set(self.likes.get() + 1);
//!     }
//!     fn on_share(&self) {}
//! }
//!
//! let counter = Rc::new(LikeCounter::default());
//! let mut notifier = ActionNotifier::new();
//!
//! // Nobody listening yet: dropped silently
//! assert!(!notifier.tap_like());
//!
//! notifier.observe(&counter);
//! assert!(notifier.tap_like());
//! assert_eq!(counter.likes.get(), 1);
//! ```

use std::rc::{Rc, Weak};

use crate::types::ActionEvent;

/// Receiver of post-cell actions
///
/// Handlers take `&self`; observers that need to record something use
/// interior mutability. Handlers run synchronously on the caller's thread.
pub trait ActionObserver {
    fn on_reply(&self);
    fn on_retweet(&self);
    fn on_like(&self);
    fn on_share(&self);
}

/// Route an event to the matching handler on `observer`
pub fn dispatch(observer: &dyn ActionObserver, event: ActionEvent) {
    match event {
        ActionEvent::Reply => observer.on_reply(),
        ActionEvent::Retweet => observer.on_retweet(),
        ActionEvent::Like => observer.on_like(),
        ActionEvent::Share => observer.on_share(),
    }
}

/// Single-observer registration slot for a post cell's buttons
#[derive(Default)]
pub struct ActionNotifier {
    observer: Option<Weak<dyn ActionObserver>>,
}

impl ActionNotifier {
    /// Create a notifier with no observer registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registered observer; `None` clears the slot
    pub fn set_observer(&mut self, observer: Option<Weak<dyn ActionObserver>>) {
        self.observer = observer;
    }

    /// Register `observer` without taking ownership of it
    pub fn observe<O: ActionObserver + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<O> = Rc::downgrade(observer);
        self.set_observer(Some(weak));
    }

    /// Clear the observer slot
    pub fn clear_observer(&mut self) {
        self.set_observer(None);
    }

    /// Whether a live observer is registered
    pub fn has_observer(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|observer| observer.strong_count() > 0)
    }

    /// Deliver `event` to the observer, if one is registered and alive
    ///
    /// Returns `true` when a handler ran. An absent or dropped observer is
    /// not an error; the activation is simply discarded.
    pub fn activate(&self, event: ActionEvent) -> bool {
        match self.observer.as_ref().and_then(Weak::upgrade) {
            Some(observer) => {
                dispatch(observer.as_ref(), event);
                true
            }
            None => {
                tracing::trace!(action = %event, "No observer registered, dropping action");
                false
            }
        }
    }

    pub fn tap_reply(&self) -> bool {
        self.activate(ActionEvent::Reply)
    }

    pub fn tap_retweet(&self) -> bool {
        self.activate(ActionEvent::Retweet)
    }

    pub fn tap_like(&self) -> bool {
        self.activate(ActionEvent::Like)
    }

    pub fn tap_share(&self) -> bool {
        self.activate(ActionEvent::Share)
    }
}

impl std::fmt::Debug for ActionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionNotifier")
            .field("has_observer", &self.has_observer())
            .finish()
    }
}
