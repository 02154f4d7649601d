//! Keybindings
//!
//! Maps key presses to high-level actions given the current state. Kept
//! separate from the reducer so the event loop can see which action a key
//! produced and perform its side effects.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libchirp::ActionEvent;

use super::actions::{Action, Tab};
use super::state::AppState;

/// Map a key press to an action, or `None` when the key does nothing here
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),

        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            return Some(if state.help_visible { Action::HideHelp } else { Action::ShowHelp });
        }

        (KeyCode::Char('m'), KeyModifiers::NONE) => return Some(Action::ToggleMouse),

        (KeyCode::Esc, _) if state.error.is_some() => return Some(Action::DismissError),
        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),

        _ => {}
    }

    // Overlays swallow everything else
    if state.overlay_visible() {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            return Some(Action::SelectTab(Tab::ALL[index]));
        }
        (KeyCode::Tab, _) => return Some(Action::NextTab),
        (KeyCode::BackTab, _) => return Some(Action::PreviousTab),

        (KeyCode::Esc, _) | (KeyCode::Backspace, _) if state.profile_open && state.current_tab == Tab::Home => {
            return Some(Action::NavigateBack);
        }

        (KeyCode::Char('p'), KeyModifiers::NONE)
            if state.current_tab == Tab::Home && !state.profile_open =>
        {
            return Some(Action::OpenProfile);
        }

        _ => {}
    }

    // Timeline keybindings
    let route = state.active_route()?;
    let timeline = state.timeline(route);
    let activate = |event: ActionEvent| Action::ActivatePostAction {
        route,
        row: timeline.selected,
        event,
    };

    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Some(Action::SelectNext),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Some(Action::SelectPrevious),
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Some(Action::FocusNextAction),
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Some(Action::FocusPreviousAction),

        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            Some(activate(timeline.focused_action))
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(activate(ActionEvent::Reply)),
        (KeyCode::Char('t'), KeyModifiers::NONE) => Some(activate(ActionEvent::Retweet)),
        (KeyCode::Char('f'), KeyModifiers::NONE) => Some(activate(ActionEvent::Like)),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(activate(ActionEvent::Share)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Route;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_unbound_key_maps_to_nothing() {
        let state = AppState::new();
        assert!(map_key(&state, press(KeyCode::Char('z'))).is_none());
    }

    #[test]
    fn test_enter_activates_focused_button() {
        let mut state = AppState::new();
        state.home.selected = 3;
        state.home.focused_action = ActionEvent::Like;

        match map_key(&state, press(KeyCode::Enter)) {
            Some(Action::ActivatePostAction { route, row, event }) => {
                assert_eq!(route, Route::Timeline);
                assert_eq!(row, 3);
                assert_eq!(event, ActionEvent::Like);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_timeline_keys_ignored_on_placeholder_tabs() {
        let mut state = AppState::new();
        state.current_tab = Tab::Messages;

        assert!(map_key(&state, press(KeyCode::Char('j'))).is_none());
        assert!(map_key(&state, press(KeyCode::Char('r'))).is_none());
    }

    #[test]
    fn test_help_overlay_swallows_timeline_keys() {
        let mut state = AppState::new();
        state.help_visible = true;

        assert!(map_key(&state, press(KeyCode::Char('f'))).is_none());
        assert!(matches!(map_key(&state, press(KeyCode::Esc)), Some(Action::HideHelp)));
    }
}
