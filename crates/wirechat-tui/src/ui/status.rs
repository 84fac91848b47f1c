//! Status bar
//!
//! Displays the session state and feed statistics.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use wirechat_core::SessionState;

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session_status = match app.session() {
        SessionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        SessionState::Connected => Span::styled(
            format!("Connected as {}", app.nickname()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        SessionState::Closed => Span::styled("Left chat", Style::default().fg(Color::Gray)),
        SessionState::Failed { reason } => Span::styled(
            format!("Disconnected: {reason}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let feed_info = format!(" | {} | {} messages", app.server_addr(), app.log().len());

    let status_line = Line::from(vec![
        Span::raw(" "),
        session_status,
        Span::styled(feed_info, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
