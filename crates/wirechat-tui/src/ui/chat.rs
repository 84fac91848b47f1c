//! Message feed
//!
//! Displays the log with a distinct style per message origin, truncated to
//! the most recent rows that fit.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use wirechat_core::MessageKind;

use crate::App;

const BORDER_SIZE: u16 = 2;

/// Render the message feed.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", app.server_addr()));

    let items: Vec<ListItem> = app
        .log()
        .iter()
        .map(|msg| {
            let style = match msg.kind {
                MessageKind::Remote => Style::default().fg(Color::Green),
                MessageKind::Local => Style::default().fg(Color::Cyan),
                MessageKind::Notice => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                },
            };
            ListItem::new(Line::from(Span::styled(msg.text.clone(), style)))
        })
        .collect();

    // Truncate to the rows that fit, keeping the most recent.
    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
