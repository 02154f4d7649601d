//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};
use libchirp::ActionEvent;

/// Actions that trigger state transitions
///
/// Actions are plain data describing what should happen. The reducer
/// (see `reducer.rs`) applies them to state; the event loop performs any
/// side effects they imply.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (when enabled)
    Mouse(MouseEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Switch to a tab
    SelectTab(Tab),

    /// Switch to the tab on the right, wrapping around
    NextTab,

    /// Switch to the tab on the left, wrapping around
    PreviousTab,

    /// Push the profile screen onto the home navigation stack
    OpenProfile,

    /// Pop the top screen off the home navigation stack
    NavigateBack,

    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Timeline ===
    /// Move the row selection down
    SelectNext,

    /// Move the row selection up
    SelectPrevious,

    /// Move button focus right on the selected row
    FocusNextAction,

    /// Move button focus left on the selected row
    FocusPreviousAction,

    /// A post cell button was activated
    ///
    /// The reducer moves selection and focus to the button; the event loop
    /// forwards the tap to the cell's notifier.
    ActivatePostAction {
        route: Route,
        row: usize,
        event: ActionEvent,
    },

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),
}

/// Tab bar entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Search,
    Notifications,
    Messages,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Notifications, Tab::Messages];

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Search => 1,
            Tab::Notifications => 2,
            Tab::Messages => 3,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Notifications => "Notifications",
            Tab::Messages => "Messages",
        }
    }

    /// Tab bar glyph; selected tabs use the filled variant where one exists
    pub fn icon(&self, selected: bool) -> &'static str {
        match (self, selected) {
            (Tab::Home, false) => "⌂",
            (Tab::Home, true) => "🏠",
            (Tab::Search, _) => "🔍",
            (Tab::Notifications, false) => "🕭",
            (Tab::Notifications, true) => "🔔",
            (Tab::Messages, false) => "🖂",
            (Tab::Messages, true) => "✉",
        }
    }

    /// Tab bar caption; ASCII mode drops the glyph
    pub fn title(&self, unicode: bool, selected: bool) -> String {
        if unicode {
            format!("{} {}", self.icon(selected), self.label())
        } else {
            self.label().to_string()
        }
    }
}

/// Screens that host post cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Home timeline (root of the Home tab)
    Timeline,

    /// Profile screen (pushed over the home timeline)
    Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Messages.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Messages);
        assert_eq!(Tab::Search.next(), Tab::Notifications);
    }

    #[test]
    fn test_tab_title_ascii() {
        assert_eq!(Tab::Notifications.title(false, true), "Notifications");
        assert!(Tab::Home.title(true, true).ends_with("Home"));
    }

    #[test]
    fn test_search_has_no_filled_variant() {
        assert_eq!(Tab::Search.icon(true), Tab::Search.icon(false));
        assert_ne!(Tab::Home.icon(true), Tab::Home.icon(false));
    }
}
