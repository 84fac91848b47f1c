//! Bounded message log.
//!
//! FIFO-evicting buffer of display lines. Capacity tracks the visible chat
//! viewport, so the log never holds more lines than the terminal can show.
//! A single owner (the TUI runtime) mutates it; readers get a snapshot or
//! iterate in arrival order.

use std::collections::VecDeque;

/// Where a displayed line came from, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Received from the server, displayed verbatim.
    Remote,
    /// Local echo of a line this client sent.
    Local,
    /// Synthetic line produced by the client itself (errors, notices).
    Notice,
}

/// One displayed line. The text is opaque; nothing is parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Origin of the line.
    pub kind: MessageKind,
    /// The line itself.
    pub text: String,
}

impl Message {
    /// A line received from the server.
    pub fn remote(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Remote, text: text.into() }
    }

    /// A local echo of an outgoing line.
    pub fn local(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Local, text: text.into() }
    }

    /// A synthetic client-generated line.
    pub fn notice(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Notice, text: text.into() }
    }
}

/// Bounded, ordered, FIFO-evicting buffer of [`Message`] lines.
///
/// Invariant: `len() <= capacity()` at all times. When a message arrives at
/// capacity, the oldest entry is evicted first. A capacity of zero (degenerate
/// terminal) makes [`MessageLog::append`] a no-op.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    /// Create an empty log holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Maximum number of lines retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of lines currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no lines.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a line, evicting the oldest first if at capacity.
    ///
    /// No-op when capacity is zero.
    pub fn append(&mut self, message: Message) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    /// Change the capacity, evicting the oldest entries if shrinking.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
    }

    /// Lines in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// Owned copy of the current lines, oldest first.
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a Message;
    type IntoIter = std::collections::vec_deque::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
