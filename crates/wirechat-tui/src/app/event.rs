//! UI events
//!
//! Events fed into the App state machine from the terminal and the
//! transport. Keyboard input is handled by `InputState` before it reaches
//! the App, so there is no key event here.

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// One message received from the server, displayed verbatim.
    LineReceived {
        /// The received line.
        text: String,
    },

    /// A read produced bytes that could not be decoded.
    Garbled,

    /// The connection ended with an error. Sent at most once per session.
    Disconnected {
        /// Human-readable reason for display.
        reason: String,
    },
}
