//! Profile screen
//!
//! A header followed by a short list of post cells. Nothing registers as
//! the cells' observer, so their buttons are inert.

use libchirp::mock::{self, ProfileHeader, PROFILE_TIMELINE_ROWS};

use super::post_cell::PostCell;

pub struct ProfileScreen {
    header: ProfileHeader,
    cells: Vec<PostCell>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            header: ProfileHeader::default(),
            cells: (0..PROFILE_TIMELINE_ROWS)
                .map(|row| PostCell::new(mock::post_at(row)))
                .collect(),
        }
    }

    pub fn header(&self) -> &ProfileHeader {
        &self.header
    }

    pub fn cells(&self) -> &[PostCell] {
        &self.cells
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}
