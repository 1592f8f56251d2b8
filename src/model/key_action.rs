//! Domain-level keyboard actions independent of key bindings.

/// Actions that a bound key can trigger.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Keys without a binding fall through to query editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the table cursor one row up. Default: ↑
    SelectPrevious,
    /// Move the table cursor one row down. Default: ↓
    SelectNext,
    /// End the session. Default: Enter/Esc/Ctrl+c
    Quit,
}

/// Edits that a key applies to the query input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor. Default: Backspace
    DeleteBackward,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Delete from the start of the line to the cursor. Default: Ctrl+u
    DeleteToStart,
    /// Delete from the cursor to the end of the line. Default: Ctrl+k
    DeleteToEnd,
    /// Move the cursor one char left. Default: ←/Ctrl+b
    CursorLeft,
    /// Move the cursor one char right. Default: →/Ctrl+f
    CursorRight,
    /// Move the cursor to the start. Default: Home/Ctrl+a
    CursorHome,
    /// Move the cursor to the end. Default: End/Ctrl+e
    CursorEnd,
    /// Key has no editing meaning.
    Ignore,
}

impl EditAction {
    /// Translate an unbound key into a query edit.
    pub fn from_key(key: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => Self::DeleteToStart,
                KeyCode::Char('k') => Self::DeleteToEnd,
                KeyCode::Char('a') => Self::CursorHome,
                KeyCode::Char('e') => Self::CursorEnd,
                KeyCode::Char('b') => Self::CursorLeft,
                KeyCode::Char('f') => Self::CursorRight,
                KeyCode::Char('h') => Self::DeleteBackward,
                _ => Self::Ignore,
            };
        }

        match key.code {
            KeyCode::Char(ch) => Self::Insert(ch),
            KeyCode::Backspace => Self::DeleteBackward,
            KeyCode::Delete => Self::DeleteForward,
            KeyCode::Left => Self::CursorLeft,
            KeyCode::Right => Self::CursorRight,
            KeyCode::Home => Self::CursorHome,
            KeyCode::End => Self::CursorEnd,
            _ => Self::Ignore,
        }
    }
}
