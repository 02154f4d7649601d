//! Action notifier contract
//!
//! Each tap reaches exactly one handler on exactly one observer, and a
//! missing observer is a silent no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use libchirp::notifier::{ActionNotifier, ActionObserver};
use libchirp::ActionEvent;

#[derive(Default)]
struct RecordingObserver {
    events: RefCell<Vec<ActionEvent>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<ActionEvent> {
        self.events.borrow().clone()
    }
}

impl ActionObserver for RecordingObserver {
    fn on_reply(&self) {
        self.events.borrow_mut().push(ActionEvent::Reply);
    }

    fn on_retweet(&self) {
        self.events.borrow_mut().push(ActionEvent::Retweet);
    }

    fn on_like(&self) {
        self.events.borrow_mut().push(ActionEvent::Like);
    }

    fn on_share(&self) {
        self.events.borrow_mut().push(ActionEvent::Share);
    }
}

#[test]
fn test_reply_reaches_registered_observer_once() {
    let observer = Rc::new(RecordingObserver::default());
    let mut notifier = ActionNotifier::new();
    notifier.observe(&observer);

    assert!(notifier.tap_reply());

    assert_eq!(observer.events(), vec![ActionEvent::Reply]);
}

#[test]
fn test_each_kind_invokes_only_its_handler() {
    for kind in ActionEvent::ALL {
        let observer = Rc::new(RecordingObserver::default());
        let mut notifier = ActionNotifier::new();
        notifier.observe(&observer);

        notifier.activate(kind);

        assert_eq!(observer.events(), vec![kind], "wrong handler for {}", kind);
    }
}

#[test]
fn test_like_without_observer_is_silent() {
    let notifier = ActionNotifier::new();

    assert!(!notifier.tap_like());
    assert!(!notifier.has_observer());
}

#[test]
fn test_every_kind_without_observer_is_silent() {
    let notifier = ActionNotifier::new();

    for kind in ActionEvent::ALL {
        assert!(!notifier.activate(kind));
    }
}

#[test]
fn test_reregistering_routes_to_new_observer_only() {
    let first = Rc::new(RecordingObserver::default());
    let second = Rc::new(RecordingObserver::default());
    let mut notifier = ActionNotifier::new();

    notifier.observe(&first);
    notifier.observe(&second);
    notifier.tap_share();

    assert!(first.events().is_empty());
    assert_eq!(second.events(), vec![ActionEvent::Share]);
}

#[test]
fn test_registering_none_returns_to_silent_drop() {
    let observer = Rc::new(RecordingObserver::default());
    let mut notifier = ActionNotifier::new();

    notifier.observe(&observer);
    notifier.tap_retweet();
    notifier.set_observer(None);
    notifier.tap_retweet();
    notifier.tap_like();

    assert_eq!(observer.events(), vec![ActionEvent::Retweet]);
    assert!(!notifier.has_observer());
}

#[test]
fn test_full_sequence_arrives_in_order() {
    let observer = Rc::new(RecordingObserver::default());
    let mut notifier = ActionNotifier::new();
    notifier.observe(&observer);

    notifier.tap_reply();
    notifier.tap_retweet();
    notifier.tap_like();
    notifier.tap_share();

    assert_eq!(
        observer.events(),
        vec![
            ActionEvent::Reply,
            ActionEvent::Retweet,
            ActionEvent::Like,
            ActionEvent::Share,
        ]
    );
}

#[test]
fn test_set_observer_accepts_trait_object_weak() {
    let observer = Rc::new(RecordingObserver::default());
    let weak: Weak<dyn ActionObserver> = Rc::downgrade(&observer) as Weak<dyn ActionObserver>;
    let mut notifier = ActionNotifier::new();

    notifier.set_observer(Some(weak));
    notifier.tap_like();

    assert_eq!(observer.events(), vec![ActionEvent::Like]);
}

#[test]
fn test_dropped_observer_is_silent_drop() {
    let observer = Rc::new(RecordingObserver::default());
    let mut notifier = ActionNotifier::new();
    notifier.observe(&observer);
    drop(observer);

    assert!(!notifier.tap_reply());
    assert!(!notifier.has_observer());
}

/// A screen that owns its notifiers and is their observer
struct OwningScreen {
    cells: Vec<ActionNotifier>,
    taps: RefCell<usize>,
}

impl ActionObserver for OwningScreen {
    fn on_reply(&self) {
        *self.taps.borrow_mut() += 1;
    }
    fn on_retweet(&self) {
        *self.taps.borrow_mut() += 1;
    }
    fn on_like(&self) {
        *self.taps.borrow_mut() += 1;
    }
    fn on_share(&self) {
        *self.taps.borrow_mut() += 1;
    }
}

#[test]
fn test_owner_cycle_does_not_leak() {
    let screen = Rc::new_cyclic(|weak: &Weak<OwningScreen>| {
        let cells = (0..3)
            .map(|_| {
                let mut notifier = ActionNotifier::new();
                let observer: Weak<dyn ActionObserver> = weak.clone();
                notifier.set_observer(Some(observer));
                notifier
            })
            .collect();
        OwningScreen {
            cells,
            taps: RefCell::new(0),
        }
    });

    for cell in &screen.cells {
        assert!(cell.tap_like());
    }
    assert_eq!(*screen.taps.borrow(), 3);

    // Cells only hold weak references back to the screen
    assert_eq!(Rc::strong_count(&screen), 1);
    let weak = Rc::downgrade(&screen);
    drop(screen);
    assert!(weak.upgrade().is_none());
}
