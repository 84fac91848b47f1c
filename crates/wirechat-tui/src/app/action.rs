//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Repaint the full screen.
    Render,

    /// Write this already-formatted frame to the server.
    SendLine {
        /// The frame, `"<nickname>: <text>"`.
        line: String,
    },

    /// User asked to leave the chat; close the session and return.
    Leave,

    /// A send was attempted while the session is no longer connected.
    ///
    /// A discrete stop signal, not a fault: the runtime stops prompting and
    /// tears down. No network write happens.
    SessionClosed,
}
