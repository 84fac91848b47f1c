//! Wire format helpers.
//!
//! The protocol is raw UTF-8 text with no framing: no length prefix, no
//! delimiter, no acknowledgment, no version. The client sends the nickname
//! bytes once as a handshake, then exchanges message lines. Each read of up
//! to [`RECV_BUFFER_SIZE`] bytes is assumed to carry exactly one logical
//! message; the transport never reassembles partial reads or splits multiple
//! messages arriving together. That assumption is not guaranteed by TCP and
//! is preserved only for compatibility with the existing server.

/// Maximum length of one read from the server, in bytes.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Maximum length of user-typed input, in characters.
pub const MAX_INPUT_CHARS: usize = 50;

/// Handshake bytes: the literal nickname, no delimiter or length prefix.
///
/// There is no acknowledgment, so delivery cannot be confirmed; a nickname
/// near the peer's buffer boundary could in principle be truncated on the
/// server side.
pub fn handshake(nickname: &str) -> &[u8] {
    nickname.as_bytes()
}

/// Format one outgoing message frame: `"<nickname>: <text>"`.
pub fn outgoing_frame(nickname: &str, text: &str) -> String {
    format!("{nickname}: {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handshake_is_literal_nickname_bytes() {
        assert_eq!(handshake("rae"), b"rae");
        assert_eq!(handshake(""), b"");
    }

    #[test]
    fn outgoing_frame_matches_wire_format() {
        assert_eq!(outgoing_frame("rae", "hello").as_bytes(), b"rae: hello");
    }

    #[test]
    fn outgoing_frame_does_not_escape_text() {
        // The protocol has no framing; colons in the body pass through.
        assert_eq!(outgoing_frame("a", "b: c"), "a: b: c");
    }
}
