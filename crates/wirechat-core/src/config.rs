//! Client configuration.
//!
//! An explicit value passed into the session at construction, replacing the
//! compiled-in server address of the original client.

use std::time::Duration;

use crate::wire::{MAX_INPUT_CHARS, RECV_BUFFER_SIZE};

/// Default chat server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for one chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Server hostname or IP address.
    pub host: String,
    /// Server TCP port.
    pub port: u16,
    /// Deadline for establishing the connection. `None` blocks indefinitely.
    pub connect_timeout: Option<Duration>,
    /// Size of one read from the server, in bytes.
    pub recv_buffer: usize,
    /// Maximum user input length, in characters.
    pub max_input_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            connect_timeout: None,
            recv_buffer: RECV_BUFFER_SIZE,
            max_input_chars: MAX_INPUT_CHARS,
        }
    }
}

impl ChatConfig {
    /// Server address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
