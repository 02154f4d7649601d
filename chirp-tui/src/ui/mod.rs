//! UI rendering
//!
//! Rendering functions that draw state into terminal frames. They read the
//! reducer state and the screens' cells and never change either.

pub mod timeline;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};
use libchirp::mock::ProfileHeader;

use crate::app::{Action, AppState, Route, Tab};
use crate::screens::Shell;

/// Height of the profile header view, borders included
pub const PROFILE_HEADER_HEIGHT: u16 = 7;

/// Top-level regions of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
    pub tabs: Rect,
}

pub fn shell_layout(area: Rect) -> ShellLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Tab bar
        ])
        .split(area);

    ShellLayout {
        nav: chunks[0],
        body: chunks[1],
        status: chunks[2],
        tabs: chunks[3],
    }
}

/// Split the profile body into header and timeline
fn profile_layout(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PROFILE_HEADER_HEIGHT), Constraint::Min(0)])
        .split(body);
    (chunks[0], chunks[1])
}

/// Where the active list of post cells is drawn, if the current screen has one
pub fn timeline_area(area: Rect, state: &AppState) -> Option<Rect> {
    let body = shell_layout(area).body;
    match state.active_route()? {
        Route::Timeline => Some(body),
        Route::Profile => Some(profile_layout(body).1),
    }
}

/// Translate a left click on a post cell button into an activation
pub fn mouse_action(area: Rect, state: &AppState, mouse: MouseEvent) -> Option<Action> {
    if !state.mouse_enabled || state.overlay_visible() {
        return None;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let route = state.active_route()?;
    let list = timeline_area(area, state)?;
    let (row, event) = timeline::hit_test(list, state.timeline(route), mouse.column, mouse.row)?;

    Some(Action::ActivatePostAction { route, row, event })
}

/// Foreground color, or no styling when colors are disabled
pub(crate) fn paint(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState, shell: &Shell) {
    let area = frame.area();
    let layout = shell_layout(area);

    render_nav_bar(frame, layout.nav, state);

    match state.current_tab {
        Tab::Home if state.profile_open => {
            let (header, list) = profile_layout(layout.body);
            render_profile_header(frame, header, state, shell.profile().header());
            timeline::render_timeline(
                frame,
                list,
                state,
                &state.profile,
                shell.profile().cells(),
            );
        }
        Tab::Home => {
            timeline::render_timeline(
                frame,
                layout.body,
                state,
                &state.home,
                shell.home().cells(),
            );
        }
        Tab::Search => render_placeholder(frame, layout.body, state, "Nothing to search yet"),
        Tab::Notifications => render_placeholder(frame, layout.body, state, "No notifications"),
        Tab::Messages => render_placeholder(frame, layout.body, state, "No messages"),
    }

    render_status_line(frame, layout.status, state);
    render_tab_bar(frame, layout.tabs, state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Navigation bar: back/profile button on the left, title centered
fn render_nav_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let unicode = state.config.unicode_enabled;

    let (left, title) = match state.current_tab {
        Tab::Home if state.profile_open => ("< Back", "Profile".to_string()),
        Tab::Home => (
            if unicode { "👤 [p]" } else { "[p] Profile" },
            if unicode { "🐦 Chirp".to_string() } else { "Chirp".to_string() },
        ),
        tab => ("", tab.label().to_string()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(paint(state, Color::DarkGray))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            paint(state, Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center);

    let button = Paragraph::new(Span::styled(left, paint(state, Color::Cyan))).block(block);
    frame.render_widget(button, area);
}

fn render_profile_header(frame: &mut Frame, area: Rect, state: &AppState, header: &ProfileHeader) {
    let avatar = if state.config.unicode_enabled { "👤" } else { "(@)" };

    let lines = vec![
        Line::from(vec![
            Span::raw(avatar),
            Span::raw(" "),
            Span::styled(&header.display_name, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(&header.username, paint(state, Color::Gray))),
        Line::from(header.bio.as_str()),
        Line::from(Span::styled(&header.joined, paint(state, Color::Gray))),
        Line::from(vec![
            Span::styled(header.following.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Following  "),
            Span::styled(header.followers.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Followers"),
        ]),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(paint(state, Color::DarkGray)),
    );
    frame.render_widget(widget, area);
}

/// Status line: last action heard, or key hints
fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.status.message {
        Some(ref message) => Line::from(Span::styled(message.as_str(), paint(state, Color::Green))),
        None => {
            let hints = match state.active_route() {
                Some(Route::Timeline) => "j/k: Move | h/l: Button | Enter: Press | p: Profile | F1: Help | q: Quit",
                Some(Route::Profile) => "j/k: Move | h/l: Button | Enter: Press | Esc: Back | F1: Help | q: Quit",
                None => "1-4/Tab: Switch tab | F1: Help | q: Quit",
            };
            Line::from(Span::styled(hints, paint(state, Color::Gray)))
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let unicode = state.config.unicode_enabled;
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(tab.title(unicode, *tab == state.current_tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.current_tab.index())
        .block(Block::default().borders(Borders::ALL).border_style(paint(state, Color::DarkGray)))
        .style(paint(state, Color::Gray))
        .highlight_style(paint(state, Color::Cyan).add_modifier(Modifier::BOLD))
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render placeholder screen for tabs without content
fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", state.current_tab.label()))
        .borders(Borders::ALL)
        .border_style(paint(state, Color::DarkGray));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, paint(state, Color::Yellow))),
        Line::from(""),
        Line::from("Press 1 to return Home, F1 for help, q to quit"),
    ])
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit"),
        Line::from("  F1 / ?     - Toggle help"),
        Line::from("  1-4 / Tab  - Switch tab"),
        Line::from("  m          - Toggle mouse"),
        Line::from(""),
        Line::from("Timeline:"),
        Line::from("  j/k        - Select post"),
        Line::from("  h/l        - Focus button"),
        Line::from("  Enter      - Press focused button"),
        Line::from("  r/t/f/s    - Reply / Retweet / Like / Share"),
        Line::from("  p          - Open profile"),
        Line::from("  Esc        - Back / dismiss overlays"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(paint(state, Color::Cyan)))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled("Error", paint(state, Color::Red).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(paint(state, Color::Red)))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
