//! Hard-coded mock content
//!
//! There is no data source behind Chirp. Every timeline row shows the same
//! post and every list has a fixed length.

use serde::{Deserialize, Serialize};

/// Rows in the home timeline
pub const HOME_TIMELINE_ROWS: usize = 10;

/// Rows under the profile header
pub const PROFILE_TIMELINE_ROWS: usize = 4;

/// Content of one post cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockPost {
    pub display_name: String,
    pub username: String,
    pub text: String,
}

impl Default for MockPost {
    fn default() -> Self {
        Self {
            display_name: "Amin Bagheri".to_string(),
            username: "@aminbagheridev".to_string(),
            text: "This is a mock tweet, I want this label to take multiple lines. \
                   SwiftUI is inferiour to UIKit."
                .to_string(),
        }
    }
}

/// Content of the profile screen header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHeader {
    pub display_name: String,
    pub username: String,
    pub bio: String,
    pub joined: String,
    pub following: u32,
    pub followers: u32,
}

impl Default for ProfileHeader {
    fn default() -> Self {
        let post = MockPost::default();
        Self {
            display_name: post.display_name,
            username: post.username,
            bio: "iOS Developer".to_string(),
            joined: "Joined August 2022".to_string(),
            following: 314,
            followers: 1_024,
        }
    }
}

/// The post shown at `row`; every row is identical
pub fn post_at(_row: usize) -> MockPost {
    MockPost::default()
}
