//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer.

use chirp_tui::app::{reduce, Action, AppState, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libchirp::ActionEvent;

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

#[test]
fn test_q_quits_application() {
    let state = press(AppState::new(), KeyCode::Char('q'));

    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_application() {
    let key = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let state = reduce(AppState::new(), Action::Key(key));

    assert!(state.should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = press(AppState::new(), KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_question_mark_shows_help() {
    let state = press(AppState::new(), KeyCode::Char('?'));

    assert!(state.help_visible);
}

#[test]
fn test_number_keys_select_tabs() {
    let state = press(AppState::new(), KeyCode::Char('3'));
    assert_eq!(state.current_tab, Tab::Notifications);

    let state = press(state, KeyCode::Char('4'));
    assert_eq!(state.current_tab, Tab::Messages);

    let state = press(state, KeyCode::Char('1'));
    assert_eq!(state.current_tab, Tab::Home);
}

#[test]
fn test_tab_key_cycles_tabs() {
    let state = press(AppState::new(), KeyCode::Tab);
    assert_eq!(state.current_tab, Tab::Search);

    let state = press(state, KeyCode::BackTab);
    let state = press(state, KeyCode::BackTab);
    assert_eq!(state.current_tab, Tab::Messages);
}

#[test]
fn test_j_and_k_move_selection() {
    let state = press(AppState::new(), KeyCode::Char('j'));
    let state = press(state, KeyCode::Down);
    assert_eq!(state.home.selected, 2);

    let state = press(state, KeyCode::Char('k'));
    assert_eq!(state.home.selected, 1);
}

#[test]
fn test_selection_stops_at_last_row() {
    let mut state = AppState::new();
    for _ in 0..20 {
        state = press(state, KeyCode::Char('j'));
    }

    assert_eq!(state.home.selected, state.home.rows - 1);
}

#[test]
fn test_h_and_l_move_button_focus() {
    let state = press(AppState::new(), KeyCode::Char('l'));
    assert_eq!(state.home.focused_action, ActionEvent::Retweet);

    let state = press(state, KeyCode::Right);
    assert_eq!(state.home.focused_action, ActionEvent::Like);

    let state = press(state, KeyCode::Char('h'));
    assert_eq!(state.home.focused_action, ActionEvent::Retweet);
}

#[test]
fn test_letter_shortcut_focuses_button() {
    let state = press(AppState::new(), KeyCode::Char('s'));

    assert_eq!(state.home.focused_action, ActionEvent::Share);
}

#[test]
fn test_m_toggles_mouse() {
    let state = press(AppState::new(), KeyCode::Char('m'));
    assert!(state.mouse_enabled);

    let state = press(state, KeyCode::Char('m'));
    assert!(!state.mouse_enabled);
}

#[test]
fn test_esc_dismisses_error() {
    let mut state = AppState::new();
    state.error = Some("Test error".to_string());

    let state = press(state, KeyCode::Esc);
    assert!(state.error.is_none());
}

#[test]
fn test_esc_hides_help() {
    let mut state = AppState::new();
    state.help_visible = true;

    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn test_error_overlay_blocks_navigation() {
    let mut state = AppState::new();
    state.error = Some("Test error".to_string());

    let state = press(state, KeyCode::Char('2'));
    assert_eq!(state.current_tab, Tab::Home);
}
