//! Error types for the wirechat client.
//!
//! Strongly-typed errors so callers can distinguish a refused connection
//! from a reset, a timeout, or garbled data instead of collapsing everything
//! into one opaque failure. `std::io::Error` is converted at the transport
//! boundary; internally we carry `ChatError`.

use std::{io, time::Duration};

use thiserror::Error;

/// Errors raised by connection and session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The server actively refused the connection.
    #[error("connection refused by {addr}")]
    Refused {
        /// Address the connection was attempted against.
        addr: String,
    },

    /// The connection was reset or closed by the peer.
    #[error("connection reset: {0}")]
    Reset(String),

    /// An operation did not complete within its deadline.
    #[error("timed out after {elapsed:?}")]
    Timeout {
        /// How long we waited.
        elapsed: Duration,
    },

    /// Received bytes that are not valid UTF-8.
    #[error("received unreadable data")]
    Decode,

    /// A send was attempted while the session is no longer connected.
    ///
    /// This is a recoverable signal to stop prompting, not a fault.
    #[error("session closed")]
    SessionClosed,

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ChatError {
    /// Returns true if this error ends the session.
    ///
    /// Everything except [`ChatError::Decode`] is fatal: a decode failure is
    /// displayed as a log entry and the session continues, while network
    /// failures terminate the receive loop.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Decode)
    }
}

/// Convert `io::Error` into the tagged taxonomy (transport boundary only).
impl From<io::Error> for ChatError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => Self::Refused { addr: err.to_string() },
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => Self::Reset(err.to_string()),
            io::ErrorKind::TimedOut => Self::Timeout { elapsed: Duration::ZERO },
            io::ErrorKind::NotConnected => Self::SessionClosed,
            _ => Self::Io(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_not_fatal() {
        assert!(!ChatError::Decode.is_fatal());
    }

    #[test]
    fn network_errors_are_fatal() {
        assert!(ChatError::Refused { addr: "127.0.0.1:5000".into() }.is_fatal());
        assert!(ChatError::Reset("peer".into()).is_fatal());
        assert!(ChatError::Timeout { elapsed: Duration::from_secs(5) }.is_fatal());
        assert!(ChatError::SessionClosed.is_fatal());
        assert!(ChatError::Io("disk on fire".into()).is_fatal());
    }

    #[test]
    fn io_error_kinds_map_to_taxonomy() {
        let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(ChatError::from(refused), ChatError::Refused { .. }));

        let reset = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(ChatError::from(reset), ChatError::Reset(_)));

        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(ChatError::from(eof), ChatError::Reset(_)));

        let timeout = io::Error::new(io::ErrorKind::TimedOut, "slow");
        assert!(matches!(ChatError::from(timeout), ChatError::Timeout { .. }));

        let other = io::Error::other("weird");
        assert!(matches!(ChatError::from(other), ChatError::Io(_)));
    }
}
