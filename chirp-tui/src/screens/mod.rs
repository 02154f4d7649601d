//! Screens that own post cells
//!
//! The reducer state only tracks selection; the cells themselves, and the
//! screens observing them, live here for the whole session.

pub mod home;
pub mod post_cell;
pub mod profile;

use std::rc::Rc;

use libchirp::ActionEvent;

use crate::app::Route;

pub use home::HomeScreen;
pub use post_cell::PostCell;
pub use profile::ProfileScreen;

/// Every cell-hosting screen in the tab shell
pub struct Shell {
    home: Rc<HomeScreen>,
    profile: ProfileScreen,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            home: HomeScreen::new(),
            profile: ProfileScreen::new(),
        }
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn profile(&self) -> &ProfileScreen {
        &self.profile
    }

    pub fn cells(&self, route: Route) -> &[PostCell] {
        match route {
            Route::Timeline => self.home.cells(),
            Route::Profile => self.profile.cells(),
        }
    }

    /// Press a button on the cell at `row` of `route`
    ///
    /// Returns a status message when an observer handled the tap.
    pub fn activate(&self, route: Route, row: usize, event: ActionEvent) -> Option<String> {
        let Some(cell) = self.cells(route).get(row) else {
            tracing::warn!(?route, row, "Activation for a row that does not exist");
            return None;
        };

        if !cell.press(event) {
            return None;
        }

        match route {
            Route::Timeline => self
                .home
                .take_last_action()
                .map(|heard| format!("{} tapped on post {}", heard, row + 1)),
            Route::Profile => None,
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
