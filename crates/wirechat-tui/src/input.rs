//! Input state and key handling for the TUI.
//!
//! Owns the text input buffer and cursor and handles character-level key
//! events. Enter submits the line to the App; Esc leaves the chat.

use crate::app::{App, AppAction};

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Input state for the TUI.
///
/// Manages the text buffer and cursor position. The buffer is capped at a
/// fixed number of characters, matching the wire protocol's input limit.
#[derive(Debug)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer, in characters.
    cursor: usize,
    /// Maximum buffer length, in characters.
    max_chars: usize,
}

impl InputState {
    /// Create an empty input state capped at `max_chars` characters.
    pub fn new(max_chars: usize) -> Self {
        Self { buffer: String::new(), cursor: 0, max_chars }
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the cursor in the buffer.
    fn byte_index(&self) -> usize {
        self.buffer.char_indices().nth(self.cursor).map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for input-only keys).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                if self.buffer.chars().count() < self.max_chars {
                    let at = self.byte_index();
                    self.buffer.insert(at, c);
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.cursor < self.buffer.chars().count() {
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.buffer.chars().count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.chars().count();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.handle_enter(app),
            KeyInput::Esc => app.leave(),
        }
    }

    /// Handle Enter: take the buffer, clear the prompt row, submit.
    fn handle_enter(&mut self, app: &mut App) -> Vec<AppAction> {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        app.submit(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new("rae".into(), "127.0.0.1:5000".into(), 24);
        app.connected();
        app
    }

    #[test]
    fn char_input_adds_to_buffer() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        input.handle_key(KeyInput::Char('h'), &mut app);
        input.handle_key(KeyInput::Char('i'), &mut app);

        assert_eq!(input.buffer(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        input.handle_key(KeyInput::Char('a'), &mut app);
        input.handle_key(KeyInput::Char('b'), &mut app);
        input.handle_key(KeyInput::Backspace, &mut app);

        assert_eq!(input.buffer(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn buffer_caps_at_max_chars() {
        let mut input = InputState::new(3);
        let mut app = test_app();

        for c in "abcdef".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }

        assert_eq!(input.buffer(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn enter_clears_buffer_and_submits() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        for c in "test".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }
        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert!(input.buffer().is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(actions.contains(&AppAction::SendLine { line: "rae: test".into() }));
    }

    #[test]
    fn enter_on_empty_buffer_is_noop() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        let actions = input.handle_key(KeyInput::Enter, &mut app);
        assert!(actions.is_empty());
    }

    #[test]
    fn esc_leaves_the_chat() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        let actions = input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(actions, vec![AppAction::Leave]);
    }

    #[test]
    fn cursor_movement() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        for c in "abc".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }

        input.handle_key(KeyInput::Home, &mut app);
        assert_eq!(input.cursor(), 0);

        input.handle_key(KeyInput::End, &mut app);
        assert_eq!(input.cursor(), 3);

        input.handle_key(KeyInput::Left, &mut app);
        assert_eq!(input.cursor(), 2);

        input.handle_key(KeyInput::Right, &mut app);
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn multibyte_input_edits_cleanly() {
        let mut input = InputState::new(50);
        let mut app = test_app();

        input.handle_key(KeyInput::Char('é'), &mut app);
        input.handle_key(KeyInput::Char('o'), &mut app);
        input.handle_key(KeyInput::Home, &mut app);
        input.handle_key(KeyInput::Delete, &mut app);

        assert_eq!(input.buffer(), "o");
    }
}
