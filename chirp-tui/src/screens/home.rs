//! Home timeline screen
//!
//! Owns a fixed list of post cells and observes every one of them.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use libchirp::mock::{self, HOME_TIMELINE_ROWS};
use libchirp::notifier::ActionObserver;
use libchirp::ActionEvent;

use super::post_cell::PostCell;

pub struct HomeScreen {
    cells: Vec<PostCell>,
    last_action: Cell<Option<ActionEvent>>,
}

impl HomeScreen {
    /// Build the screen with each cell pointing back at it
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|screen: &Weak<HomeScreen>| {
            let cells = (0..HOME_TIMELINE_ROWS)
                .map(|row| {
                    let mut cell = PostCell::new(mock::post_at(row));
                    let observer: Weak<dyn ActionObserver> = screen.clone();
                    cell.set_observer(Some(observer));
                    cell
                })
                .collect();

            HomeScreen {
                cells,
                last_action: Cell::new(None),
            }
        })
    }

    pub fn cells(&self) -> &[PostCell] {
        &self.cells
    }

    /// Most recent action heard since the last call
    pub fn take_last_action(&self) -> Option<ActionEvent> {
        self.last_action.take()
    }

    fn heard(&self, event: ActionEvent) {
        tracing::info!(target: "chirp::actions", action = %event, "{} tapped", event);
        self.last_action.set(Some(event));
    }
}

impl ActionObserver for HomeScreen {
    fn on_reply(&self) {
        self.heard(ActionEvent::Reply);
    }

    fn on_retweet(&self) {
        self.heard(ActionEvent::Retweet);
    }

    fn on_like(&self) {
        self.heard(ActionEvent::Like);
    }

    fn on_share(&self) {
        self.heard(ActionEvent::Share);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_observed() {
        let screen = HomeScreen::new();

        assert_eq!(screen.cells().len(), HOME_TIMELINE_ROWS);
        assert!(screen.cells().iter().all(PostCell::has_observer));
    }

    #[test]
    fn test_cells_do_not_keep_screen_alive() {
        let screen = HomeScreen::new();
        assert_eq!(Rc::strong_count(&screen), 1);

        let weak = Rc::downgrade(&screen);
        drop(screen);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_press_records_last_action() {
        let screen = HomeScreen::new();

        assert!(screen.cells()[2].press(ActionEvent::Retweet));
        assert_eq!(screen.take_last_action(), Some(ActionEvent::Retweet));
        assert_eq!(screen.take_last_action(), None);
    }
}
