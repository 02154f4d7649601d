//! Post cell rendering and layout arithmetic
//!
//! Every cell has the same fixed height:
//!
//! ```text
//!  (@)  Amin Bagheri @aminbagheridev
//!       This is a mock tweet, I want this label to
//!       take multiple lines. SwiftUI is inferiour
//!       to UIKit.
//!       [r] Reply    [t] Retweet  [f] Like     [s] Share
//! ──────────────────────────────────────────────────────
//! ```
//!
//! Rendering and mouse hit testing share the functions below so a click
//! always lands on the button that was drawn there.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use libchirp::ActionEvent;

use crate::app::{AppState, TimelineState};
use crate::screens::PostCell;
use super::paint;

/// Columns reserved for the avatar on the left of every cell
pub const AVATAR_WIDTH: u16 = 6;

/// Lines of post text below the name line
pub const TEXT_LINES: u16 = 3;

/// Line offset of the button row inside a cell
pub const ACTION_LINE: u16 = 1 + TEXT_LINES;

/// Cell height including the bottom separator
pub const CELL_HEIGHT: u16 = ACTION_LINE + 2;

/// Clickable width of one button
pub const BUTTON_WIDTH: u16 = 12;

/// Gap between buttons
pub const ACTION_SPACING: u16 = 3;

/// How many whole cells fit in `height` rows (at least one)
pub fn visible_rows(height: u16) -> usize {
    usize::from(height / CELL_HEIGHT).max(1)
}

/// First row to draw so that `selected` stays on screen
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

/// Area of the `slot`-th visible cell
pub fn cell_area(area: Rect, slot: usize) -> Rect {
    let y = area.y.saturating_add((slot as u16).saturating_mul(CELL_HEIGHT));
    Rect::new(area.x, y, area.width, CELL_HEIGHT).intersection(area)
}

/// Area of one button inside a cell
pub fn button_area(cell: Rect, event: ActionEvent) -> Rect {
    let x = cell.x + AVATAR_WIDTH + event.index() as u16 * (BUTTON_WIDTH + ACTION_SPACING);
    Rect::new(x, cell.y + ACTION_LINE, BUTTON_WIDTH, 1).intersection(cell)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Which row and button sit under (`column`, `row`), if any
pub fn hit_test(area: Rect, timeline: &TimelineState, column: u16, row: u16) -> Option<(usize, ActionEvent)> {
    if !contains(area, column, row) {
        return None;
    }

    let visible = visible_rows(area.height);
    let slot = usize::from((row - area.y) / CELL_HEIGHT);
    let index = scroll_offset(timeline.selected, visible) + slot;
    if slot >= visible || index >= timeline.rows {
        return None;
    }

    let cell = cell_area(area, slot);
    ActionEvent::ALL
        .into_iter()
        .find(|event| contains(button_area(cell, *event), column, row))
        .map(|event| (index, event))
}

/// Render a list of post cells, highlighting the selection and button focus
pub fn render_timeline(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    timeline: &TimelineState,
    cells: &[PostCell],
) {
    let visible = visible_rows(area.height);
    let offset = scroll_offset(timeline.selected, visible);

    for (slot, (index, cell)) in cells.iter().enumerate().skip(offset).take(visible).enumerate() {
        let selected = index == timeline.selected;
        let focus = selected.then_some(timeline.focused_action);
        render_cell(frame, cell_area(area, slot), state, cell, focus);
    }
}

fn render_cell(frame: &mut Frame, area: Rect, state: &AppState, cell: &PostCell, focus: Option<ActionEvent>) {
    if area.height == 0 {
        return;
    }

    let separator = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(if focus.is_some() {
            paint(state, Color::Cyan)
        } else {
            paint(state, Color::DarkGray)
        });
    let inner = separator.inner(area);
    frame.render_widget(separator, area);

    let post = cell.post();
    let unicode = state.config.unicode_enabled;
    let content_x = inner.x + AVATAR_WIDTH;
    let content_width = inner.width.saturating_sub(AVATAR_WIDTH);

    // Avatar
    let avatar = if unicode { " 👤" } else { " (@)" };
    frame.render_widget(
        Paragraph::new(avatar),
        Rect::new(inner.x, inner.y, AVATAR_WIDTH, 1).intersection(inner),
    );

    // Display name + username on one line
    let name_line = Line::from(vec![
        Span::styled(&post.display_name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(&post.username, paint(state, Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(name_line),
        Rect::new(content_x, inner.y, content_width, 1).intersection(inner),
    );

    // Post text, wrapped
    frame.render_widget(
        Paragraph::new(post.text.as_str()).wrap(Wrap { trim: true }),
        Rect::new(content_x, inner.y + 1, content_width, TEXT_LINES).intersection(inner),
    );

    // Buttons
    for event in ActionEvent::ALL {
        let caption = format!("{} {}", event.icon(unicode), event.label());
        let style = if focus == Some(event) {
            paint(state, Color::Cyan).add_modifier(Modifier::REVERSED)
        } else {
            paint(state, Color::Gray)
        };
        frame.render_widget(Paragraph::new(caption).style(style), button_area(area, event));
    }
}
