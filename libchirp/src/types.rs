//! Core types shared between the notifier and its front ends

use serde::{Deserialize, Serialize};

/// A discrete user action on a post cell
///
/// Events carry no payload. They are built at the moment a control is
/// activated and handed straight to the observer; nothing stores them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionEvent {
    Reply,
    Retweet,
    Like,
    Share,
}

impl ActionEvent {
    /// Every action kind, in the order the buttons appear on a cell
    pub const ALL: [ActionEvent; 4] = [
        ActionEvent::Reply,
        ActionEvent::Retweet,
        ActionEvent::Like,
        ActionEvent::Share,
    ];

    /// Human-readable label used for button captions and status messages
    pub fn label(&self) -> &'static str {
        match self {
            ActionEvent::Reply => "Reply",
            ActionEvent::Retweet => "Retweet",
            ActionEvent::Like => "Like",
            ActionEvent::Share => "Share",
        }
    }

    /// Button glyph; `unicode` false selects the ASCII fallback
    pub fn icon(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (ActionEvent::Reply, true) => "💬",
            (ActionEvent::Retweet, true) => "🔁",
            (ActionEvent::Like, true) => "♡",
            (ActionEvent::Share, true) => "⇪",
            (ActionEvent::Reply, false) => "[r]",
            (ActionEvent::Retweet, false) => "[t]",
            (ActionEvent::Like, false) => "[f]",
            (ActionEvent::Share, false) => "[s]",
        }
    }

    /// Position of this action on the button row
    pub fn index(&self) -> usize {
        match self {
            ActionEvent::Reply => 0,
            ActionEvent::Retweet => 1,
            ActionEvent::Like => 2,
            ActionEvent::Share => 3,
        }
    }

    /// Action at a button-row position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
