//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod chat;
mod input;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{App, InputState};

/// Height of the bordered input box.
pub(crate) const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar.
pub(crate) const STATUS_HEIGHT: u16 = 1;
/// Rows consumed by the chat block's top and bottom borders.
const CHAT_BORDER: u16 = 2;

/// Message rows visible on a terminal with `rows` total rows.
///
/// Returns 0 on a terminal too small to show any messages; the log treats a
/// zero capacity as "keep nothing" rather than faulting.
pub fn chat_capacity(rows: u16) -> usize {
    rows.saturating_sub(INPUT_HEIGHT + STATUS_HEIGHT + CHAT_BORDER) as usize
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input: &InputState) {
    const CHAT_MIN_HEIGHT: u16 = 3;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CHAT_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [chat_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, app, *chat_area);
    input::render(frame, input, *input_area);
    status::render(frame, app, *status_area);
}
