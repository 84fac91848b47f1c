//! Application state machine.
//!
//! Pure state machine, decoupled from I/O: it consumes [`AppEvent`] inputs
//! and produces [`AppAction`] instructions for the runtime to execute. Owns
//! the message log and the session state, so there is exactly one writer for
//! both.

mod action;
mod event;

pub use action::AppAction;
pub use event::AppEvent;
use wirechat_core::{Message, MessageLog, SessionState, wire};

use crate::ui;

/// Application state machine.
///
/// No I/O dependencies; fully testable without a terminal or a socket.
#[derive(Debug, Clone)]
pub struct App {
    /// Nickname sent as the handshake and prefixed to outgoing frames.
    nickname: String,
    /// Server address, for the chat title and status bar.
    server_addr: String,
    /// Session lifecycle; sends are only valid while Connected.
    session: SessionState,
    /// Bounded feed of displayed lines, capacity = visible chat rows.
    log: MessageLog,
}

impl App {
    /// Create an App sized for a terminal with `rows` visible rows.
    pub fn new(nickname: String, server_addr: String, rows: u16) -> Self {
        Self {
            nickname,
            server_addr,
            session: SessionState::Connecting,
            log: MessageLog::new(ui::chat_capacity(rows)),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Resize(_, rows) => {
                self.log.set_capacity(ui::chat_capacity(rows));
                vec![AppAction::Render]
            },
            AppEvent::LineReceived { text } => {
                self.log.append(Message::remote(text));
                vec![AppAction::Render]
            },
            AppEvent::Garbled => {
                self.log.append(Message::notice("received unreadable data"));
                vec![AppAction::Render]
            },
            AppEvent::Disconnected { reason } => {
                // One error line per fatal failure, then one final repaint.
                self.session.fail(reason.clone());
                self.log.append(Message::notice(format!("connection lost: {reason}")));
                vec![AppAction::Render]
            },
        }
    }

    /// Submit one line of user input.
    ///
    /// Short-circuits with [`AppAction::SessionClosed`] when the session is
    /// no longer connected, so nothing is ever written to a dead socket.
    /// Otherwise formats the outgoing frame, echoes it locally, and hands it
    /// to the runtime to send.
    pub fn submit(&mut self, text: &str) -> Vec<AppAction> {
        if text.is_empty() {
            return vec![];
        }
        if !self.session.can_send() {
            return vec![AppAction::SessionClosed];
        }

        let frame = wire::outgoing_frame(&self.nickname, text);
        self.log.append(Message::local(frame.clone()));
        vec![AppAction::SendLine { line: frame }, AppAction::Render]
    }

    /// User asked to leave the chat.
    pub fn leave(&self) -> Vec<AppAction> {
        vec![AppAction::Leave]
    }

    /// Mark the session Connected after a successful handshake send.
    pub fn connected(&mut self) {
        self.session.connected();
    }

    /// Mark the session Closed on deliberate shutdown.
    pub fn close(&mut self) {
        self.session.close();
    }

    /// Current session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The message feed, oldest first.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Nickname chosen at session start.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Server address (host:port).
    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }
}

#[cfg(test)]
mod tests {
    use wirechat_core::MessageKind;

    use super::*;

    fn connected_app() -> App {
        let mut app = App::new("rae".into(), "127.0.0.1:5000".into(), 24);
        app.connected();
        app
    }

    #[test]
    fn received_line_is_appended_and_rendered() {
        let mut app = connected_app();
        let actions = app.handle(AppEvent::LineReceived { text: "tim: hi".into() });

        assert_eq!(actions, vec![AppAction::Render]);
        let snap = app.log().snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].kind, MessageKind::Remote);
        assert_eq!(snap[0].text, "tim: hi");
    }

    #[test]
    fn submit_formats_frame_and_echoes_locally() {
        let mut app = connected_app();
        let actions = app.submit("hello");

        assert_eq!(actions, vec![
            AppAction::SendLine { line: "rae: hello".into() },
            AppAction::Render
        ]);
        let snap = app.log().snapshot();
        assert_eq!(snap[0].kind, MessageKind::Local);
        assert_eq!(snap[0].text, "rae: hello");
    }

    #[test]
    fn submit_empty_line_does_nothing() {
        let mut app = connected_app();
        assert!(app.submit("").is_empty());
        assert!(app.log().is_empty());
    }

    #[test]
    fn submit_after_failure_signals_session_closed_without_send() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Disconnected { reason: "connection reset".into() });

        let actions = app.submit("doomed");
        assert_eq!(actions, vec![AppAction::SessionClosed]);

        // Only the single error line is in the log; no local echo happened.
        let snap = app.log().snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].kind, MessageKind::Notice);
    }

    #[test]
    fn disconnect_appends_exactly_one_error_line() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Disconnected { reason: "connection reset".into() });

        assert_eq!(app.log().len(), 1);
        assert!(matches!(app.session(), SessionState::Failed { .. }));
    }

    #[test]
    fn garbled_read_is_a_notice_not_a_failure() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Garbled);

        let snap = app.log().snapshot();
        assert_eq!(snap[0].text, "received unreadable data");
        assert!(app.session().can_send());
    }

    #[test]
    fn resize_shrinks_log_capacity() {
        let mut app = connected_app();
        for i in 0..20 {
            let _ = app.handle(AppEvent::LineReceived { text: format!("m{i}") });
        }
        let before = app.log().len();

        let _ = app.handle(AppEvent::Resize(80, 10));
        assert!(app.log().len() <= before);
        assert!(app.log().len() <= app.log().capacity());
    }

    #[test]
    fn degenerate_terminal_keeps_log_empty() {
        let mut app = App::new("rae".into(), "127.0.0.1:5000".into(), 3);
        app.connected();

        let _ = app.handle(AppEvent::LineReceived { text: "dropped".into() });
        assert!(app.log().is_empty());
    }

    #[test]
    fn close_after_failure_preserves_failure_reason() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Disconnected { reason: "reset".into() });
        app.close();

        assert!(matches!(app.session(), SessionState::Failed { .. }));
    }
}
