//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`.
//!
//! It has NO side effects. Delivering a tap to a post cell's observer and
//! toggling terminal mouse capture happen in the event loop.

use super::actions::{Action, Route};
use super::keymap::map_key;
use super::state::{AppState, StatusBarState, TimelineState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No terminal I/O
/// - No observer callbacks
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Mouse(_) => state, // Hit testing needs the frame area, done in the event loop
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        // Status messages belong to the screen they came from
        Action::SelectTab(tab) => AppState {
            current_tab: tab,
            status: StatusBarState::default(),
            ..state
        },

        Action::NextTab => AppState {
            current_tab: state.current_tab.next(),
            status: StatusBarState::default(),
            ..state
        },

        Action::PreviousTab => AppState {
            current_tab: state.current_tab.previous(),
            status: StatusBarState::default(),
            ..state
        },

        Action::OpenProfile => {
            // Each push shows a fresh profile screen
            let rows = state.profile.rows;
            AppState {
                profile_open: true,
                profile: TimelineState::new(rows),
                status: StatusBarState::default(),
                ..state
            }
        }

        Action::NavigateBack => AppState {
            profile_open: false,
            status: StatusBarState::default(),
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => AppState {
            mouse_enabled: !state.mouse_enabled,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Timeline ===
        Action::SelectNext => update_active_timeline(state, TimelineState::select_next),
        Action::SelectPrevious => update_active_timeline(state, TimelineState::select_previous),
        Action::FocusNextAction => update_active_timeline(state, TimelineState::focus_next),
        Action::FocusPreviousAction => update_active_timeline(state, TimelineState::focus_previous),

        Action::ActivatePostAction { route, row, event } => {
            let timeline = state.timeline(route).clone();
            if row >= timeline.rows {
                return state;
            }
            let timeline = TimelineState {
                selected: row,
                focused_action: event,
                ..timeline
            };
            match route {
                Route::Timeline => AppState { home: timeline, ..state },
                Route::Profile => AppState { profile: timeline, ..state },
            }
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },
    }
}

/// Undo a mouse toggle the terminal refused, then report why
///
/// Keeps `mouse_enabled` in line with the terminal's actual capture mode.
pub fn revert_mouse_toggle(state: AppState, error: &dyn std::fmt::Display) -> AppState {
    let state = reduce(state, Action::ToggleMouse);
    reduce(state, Action::ShowError(format!("Failed to toggle mouse: {}", error)))
}

/// Apply `update` to the timeline on top of the current tab, if any
fn update_active_timeline(state: AppState, update: fn(TimelineState) -> TimelineState) -> AppState {
    match state.active_route() {
        Some(Route::Timeline) => AppState {
            home: update(state.home.clone()),
            ..state
        },
        Some(Route::Profile) => AppState {
            profile: update(state.profile.clone()),
            ..state
        },
        None => state,
    }
}
