//! Post cell: one timeline row
//!
//! Holds the mock post it shows and the notifier its four buttons report
//! through. The cell never knows the concrete type of the screen observing it.

use std::rc::Weak;

use libchirp::mock::MockPost;
use libchirp::notifier::{ActionNotifier, ActionObserver};
use libchirp::ActionEvent;

#[derive(Debug)]
pub struct PostCell {
    post: MockPost,
    notifier: ActionNotifier,
}

impl PostCell {
    pub fn new(post: MockPost) -> Self {
        Self {
            post,
            notifier: ActionNotifier::new(),
        }
    }

    pub fn post(&self) -> &MockPost {
        &self.post
    }

    /// Register (or clear) the screen notified of button taps
    pub fn set_observer(&mut self, observer: Option<Weak<dyn ActionObserver>>) {
        self.notifier.set_observer(observer);
    }

    pub fn has_observer(&self) -> bool {
        self.notifier.has_observer()
    }

    /// Press one of the cell's buttons; returns whether anyone heard it
    pub fn press(&self, event: ActionEvent) -> bool {
        self.notifier.activate(event)
    }
}
