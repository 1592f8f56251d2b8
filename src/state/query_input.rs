//! Query input view-state (pure).
//!
//! Holds the single-line query and its edit cursor. The cursor is a char index,
//! so every edit is UTF-8 safe. Inserts past the capacity are dropped silently.

use crate::model::EditAction;

/// Default maximum query length in chars.
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 156;

/// Editable query text.
///
/// # Invariants
/// - `value.chars().count() <= max_len`
/// - `cursor <= value.chars().count()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    value: String,
    cursor: usize,
    max_len: usize,
}

impl QueryInput {
    /// Create an empty input holding at most `max_len` chars.
    pub fn new(max_len: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            max_len,
        }
    }

    /// Current query text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Maximum number of chars the query can hold.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of chars in the query.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// True when the query is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert `ch` at the cursor. No-op at capacity or for control chars.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() || self.len() >= self.max_len {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert as much of `text` as fits. Line breaks and other control chars
    /// are skipped.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            if self.len() >= self.max_len {
                break;
            }
            self.insert_char(ch);
        }
    }

    /// Delete the char before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    /// Delete the char under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete everything before the cursor.
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.value.replace_range(..at, "");
        self.cursor = 0;
    }

    /// Delete everything from the cursor on.
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.value.truncate(at);
    }

    /// Move the cursor one char left, saturating at 0.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right, saturating at the end.
    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Move the cursor before the first char.
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor after the last char.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply a key edit.
    pub fn apply(&mut self, edit: &EditAction) {
        match edit {
            EditAction::Insert(ch) => self.insert_char(*ch),
            EditAction::DeleteBackward => self.delete_char(),
            EditAction::DeleteForward => self.delete_forward(),
            EditAction::DeleteToStart => self.delete_to_start(),
            EditAction::DeleteToEnd => self.delete_to_end(),
            EditAction::CursorLeft => self.move_cursor_left(),
            EditAction::CursorRight => self.move_cursor_right(),
            EditAction::CursorHome => self.move_cursor_home(),
            EditAction::CursorEnd => self.move_cursor_end(),
            EditAction::Ignore => {}
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUERY_LENGTH)
    }
}

#[cfg(test)]
#[path = "query_input_tests.rs"]
mod tests;
