//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine and the transport. Uses `tokio::select!` to handle terminal
//! events and server events concurrently, so arriving messages repaint
//! immediately even while the user is typing.
//!
//! This task is the single owner of the terminal and the message log; the
//! transport reader and the keyboard both feed it through channels, which
//! serializes all repaints and log mutations without locks.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use wirechat_client::{ConnectedClient, ServerEvent, transport};
use wirechat_core::{ChatConfig, ChatError};

use crate::{
    app::{App, AppAction, AppEvent},
    input::{InputState, KeyInput},
    ui,
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Chat transport error.
    #[error("chat error: {0}")]
    Chat(#[from] ChatError),
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown and the main event loop. Whatever ends
/// the session (user leave, send on a dead socket, or a receive failure),
/// the transport is stopped and the terminal restored exactly once.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    input: InputState,
    client: Option<ConnectedClient>,
    config: ChatConfig,
}

impl Runtime {
    /// Create a new runtime, taking over the terminal.
    pub fn new(config: ChatConfig, nickname: String) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let rows = terminal.size()?.height;

        let app = App::new(nickname, config.addr(), rows);
        let input = InputState::new(config.max_input_chars);

        Ok(Self { terminal, app, input, client: None, config })
    }

    /// Run the main event loop until the session ends.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;
        self.connect().await?;

        let mut event_stream = EventStream::new();

        loop {
            let mut receiver_done = false;

            let should_quit = if let Some(ref mut client) = self.client {
                tokio::select! {
                    // Terminal events
                    maybe_event = event_stream.next() => {
                        self.handle_terminal_event(maybe_event).await?
                    }

                    // Decoded events from the server
                    maybe_server = client.from_server.recv() => {
                        match maybe_server {
                            Some(event) => {
                                let actions = self.app.handle(Self::server_event(event));
                                self.process_actions(actions).await?
                            },
                            // Channel closed after the final Closed event.
                            None => {
                                receiver_done = true;
                                false
                            },
                        }
                    }
                }
            } else {
                // No live connection (connect failed or receiver finished):
                // keep showing the error until the user leaves.
                let maybe_event = event_stream.next().await;
                self.handle_terminal_event(maybe_event).await?
            };

            if receiver_done {
                self.client = None;
            }
            if should_quit {
                break;
            }
        }

        // Scoped teardown: stop the transport exactly once on every exit.
        if let Some(ref mut client) = self.client {
            client.stop();
        }
        Ok(())
    }

    /// Connect, send the handshake, and transition to Connected.
    ///
    /// A failure is not returned: it is surfaced as a single error line and
    /// a Failed session, and the UI stays up so the user can read it.
    async fn connect(&mut self) -> Result<(), RuntimeError> {
        match transport::connect(&self.config, self.app.nickname()).await {
            Ok(client) => {
                self.client = Some(client);
                self.app.connected();
                self.render()?;
            },
            Err(e) => {
                tracing::warn!("connect failed: {e}");
                let actions = self.app.handle(AppEvent::Disconnected { reason: e.to_string() });
                let _ = self.process_actions(actions).await?;
            },
        }
        Ok(())
    }

    /// Map a transport event onto an App event.
    fn server_event(event: ServerEvent) -> AppEvent {
        match event {
            ServerEvent::Line(text) => AppEvent::LineReceived { text },
            ServerEvent::Garbled => AppEvent::Garbled,
            ServerEvent::Closed(err) => AppEvent::Disconnected { reason: err.to_string() },
        }
    }

    /// Handle a terminal event and return whether to quit.
    async fn handle_terminal_event(
        &mut self,
        maybe_event: Option<io::Result<Event>>,
    ) -> Result<bool, RuntimeError> {
        let actions = match maybe_event {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                match Self::convert_key(key.code) {
                    Some(key_input) => self.input.handle_key(key_input, &mut self.app),
                    None => vec![],
                }
            },
            Some(Ok(Event::Resize(cols, rows))) => self.app.handle(AppEvent::Resize(cols, rows)),
            Some(Ok(_)) => vec![],
            Some(Err(e)) => return Err(RuntimeError::Io(e)),
            None => return Ok(true),
        };

        self.process_actions(actions).await
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    /// Process actions returned by the app. Returns true on quit.
    ///
    /// Iterative so a failed send can feed its Disconnected actions back in
    /// without async recursion.
    async fn process_actions(
        &mut self,
        initial_actions: Vec<AppAction>,
    ) -> Result<bool, RuntimeError> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Leave => {
                        self.app.close();
                        return Ok(true);
                    },
                    // Discrete stop signal: the session is over, return to
                    // the caller instead of attempting a doomed send.
                    AppAction::SessionClosed => return Ok(true),
                    AppAction::SendLine { line } => {
                        let result = match &self.client {
                            Some(client) => client.send(line).await,
                            None => Err(ChatError::SessionClosed),
                        };
                        if let Err(e) = result {
                            tracing::warn!("send failed: {e}");
                            pending_actions.extend(
                                self.app
                                    .handle(AppEvent::Disconnected { reason: e.to_string() }),
                            );
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Repaint the full screen.
    fn render(&mut self) -> Result<(), RuntimeError> {
        let app = &self.app;
        let input = &self.input;
        self.terminal.draw(|frame| {
            ui::render(frame, app, input);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Some(ref mut client) = self.client {
            client.stop();
        }

        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
