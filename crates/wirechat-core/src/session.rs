//! Session lifecycle state machine.
//!
//! Tracks whether sending is still possible. Pure: transitions are driven by
//! the transport and runtime, which execute the actual I/O.
//!
//! ```text
//! ┌────────────┐  handshake sent  ┌───────────┐  close()  ┌────────┐
//! │ Connecting │─────────────────>│ Connected │──────────>│ Closed │
//! └────────────┘                  └───────────┘           └────────┘
//!       │                               │ socket error
//!       │ socket error                  ↓
//!       └────────────────────────>┌────────┐
//!                                 │ Failed │
//!                                 └────────┘
//! ```
//!
//! Closed and Failed are terminal: no transition leaves them.

/// Lifecycle status of the underlying connection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Connection attempt in progress.
    #[default]
    Connecting,
    /// Handshake sent; sends and receives are valid.
    Connected,
    /// Deliberately shut down by the user. Terminal.
    Closed,
    /// Ended by a socket error. Terminal.
    Failed {
        /// Human-readable reason for display.
        reason: String,
    },
}

impl SessionState {
    /// Whether a send is currently valid.
    pub fn can_send(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Whether the session has ended (Closed or Failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Failed { .. })
    }

    /// Transition to Connected after a successful handshake send.
    ///
    /// Ignored from terminal states.
    pub fn connected(&mut self) {
        if !self.is_terminal() {
            *self = Self::Connected;
        }
    }

    /// Transition to Failed with a reason. Ignored from terminal states.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if !self.is_terminal() {
            *self = Self::Failed { reason: reason.into() };
        }
    }

    /// Transition to Closed on deliberate shutdown.
    ///
    /// Ignored from terminal states, so a user quit after a failure does not
    /// mask the failure reason.
    pub fn close(&mut self) {
        if !self.is_terminal() {
            *self = Self::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_connect_then_close() {
        let mut state = SessionState::default();
        assert_eq!(state, SessionState::Connecting);
        assert!(!state.can_send());

        state.connected();
        assert!(state.can_send());
        assert!(!state.is_terminal());

        state.close();
        assert_eq!(state, SessionState::Closed);
        assert!(!state.can_send());
        assert!(state.is_terminal());
    }

    #[test]
    fn failure_records_reason() {
        let mut state = SessionState::Connected;
        state.fail("connection reset");

        assert_eq!(state, SessionState::Failed { reason: "connection reset".into() });
        assert!(!state.can_send());
    }

    #[test]
    fn terminal_states_are_absorbing() {
        let mut closed = SessionState::Closed;
        closed.connected();
        closed.fail("late error");
        assert_eq!(closed, SessionState::Closed);

        let mut failed = SessionState::Failed { reason: "reset".into() };
        failed.close();
        failed.connected();
        assert_eq!(failed, SessionState::Failed { reason: "reset".into() });
    }

    #[test]
    fn connecting_can_fail_directly() {
        let mut state = SessionState::Connecting;
        state.fail("connection refused");
        assert!(state.is_terminal());
    }
}
