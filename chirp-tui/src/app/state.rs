//! Application state
//!
//! Plain-data state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use libchirp::config::UiConfig;
use libchirp::mock::{HOME_TIMELINE_ROWS, PROFILE_TIMELINE_ROWS};
use libchirp::ActionEvent;

use super::actions::{Route, Tab};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current tab
    pub current_tab: Tab,

    /// Profile pushed on the home navigation stack?
    pub profile_open: bool,

    /// Mouse capture enabled?
    pub mouse_enabled: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Home timeline selection
    pub home: TimelineState,

    /// Profile timeline selection
    pub profile: TimelineState,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Selection within a list of post cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineState {
    /// Fixed number of rows
    pub rows: usize,

    /// Selected row
    pub selected: usize,

    /// Focused button on the selected row
    pub focused_action: ActionEvent,
}

impl TimelineState {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            selected: 0,
            focused_action: ActionEvent::Reply,
        }
    }

    pub fn select_next(self) -> Self {
        let last = self.rows.saturating_sub(1);
        Self {
            selected: (self.selected + 1).min(last),
            ..self
        }
    }

    pub fn select_previous(self) -> Self {
        Self {
            selected: self.selected.saturating_sub(1),
            ..self
        }
    }

    pub fn focus_next(self) -> Self {
        let index = (self.focused_action.index() + 1) % ActionEvent::ALL.len();
        Self {
            focused_action: ActionEvent::ALL[index],
            ..self
        }
    }

    pub fn focus_previous(self) -> Self {
        let len = ActionEvent::ALL.len();
        let index = (self.focused_action.index() + len - 1) % len;
        Self {
            focused_action: ActionEvent::ALL[index],
            ..self
        }
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state from loaded UI configuration
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            current_tab: Tab::Home,
            profile_open: false,
            mouse_enabled: config.mouse_enabled,
            help_visible: false,
            home: TimelineState::new(HOME_TIMELINE_ROWS),
            profile: TimelineState::new(PROFILE_TIMELINE_ROWS),
            status: StatusBarState::default(),
            error: None,
            config,
        }
    }

    /// The post-cell screen currently on top, if the current tab has one
    pub fn active_route(&self) -> Option<Route> {
        match self.current_tab {
            Tab::Home if self.profile_open => Some(Route::Profile),
            Tab::Home => Some(Route::Timeline),
            _ => None,
        }
    }

    pub fn timeline(&self, route: Route) -> &TimelineState {
        match route {
            Route::Timeline => &self.home,
            Route::Profile => &self.profile,
        }
    }

    /// Is an overlay capturing input?
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }
}
