//! Table view-state (pure).
//!
//! A passive holder driven by the app state: rows, cursor, columns, and how many
//! rows fit on screen. No modes and no knowledge of the query.

use crate::model::VisibleRow;
use crate::view_state::Column;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0.
    Up,
    /// Toward the last row.
    Down,
}

/// Rows currently shown by the table plus selection and layout.
///
/// # Invariants
/// - `cursor` is `None` iff `rows` is empty, otherwise `Some(i)` with `i < rows.len()`
/// - `offset <= cursor < offset + height` whenever a row is selected
/// - `height >= 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    columns: Vec<Column>,
    rows: Vec<VisibleRow>,
    cursor: Option<usize>,
    offset: usize,
    height: u16,
}

impl TableState {
    /// Create a table with the given layout and rows. The cursor starts on the
    /// first row, if any.
    pub fn new(columns: Vec<Column>, rows: Vec<VisibleRow>, height: u16) -> Self {
        let cursor = if rows.is_empty() { None } else { Some(0) };
        Self {
            columns,
            rows,
            cursor,
            offset: 0,
            height: height.max(1),
        }
    }

    /// Replace the row set.
    ///
    /// The cursor keeps its index, clamped to the last row. It is not moved to
    /// follow the previously selected record, so after a filter change the same
    /// index can point at a different record. An empty row set clears the
    /// selection; rows reappearing after that select index 0.
    pub fn set_rows(&mut self, rows: Vec<VisibleRow>) {
        self.rows = rows;
        self.cursor = match (self.cursor, self.rows.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.scroll_to_cursor();
    }

    /// Move the cursor one row, stopping at either end. No-op without a
    /// selection.
    pub fn move_cursor(&mut self, direction: Direction) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = self.rows.len().saturating_sub(1);
        let next = match direction {
            Direction::Up => cursor.saturating_sub(1),
            Direction::Down => (cursor + 1).min(last),
        };
        self.cursor = Some(next);
        self.scroll_to_cursor();
    }

    /// The row under the cursor, or `None` when the table is empty.
    pub fn selected_row(&self) -> Option<&VisibleRow> {
        self.cursor.and_then(|i| self.rows.get(i))
    }

    /// Replace the column layout.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Set how many rows fit on screen (at least 1).
    pub fn set_height(&mut self, height: u16) {
        self.height = height.max(1);
        self.scroll_to_cursor();
    }

    /// Current columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Current rows.
    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    /// Cursor index, or `None` for "no selection".
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of rows shown at once.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Index of the first row shown.
    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    /// Rows inside the viewport.
    pub fn visible_rows(&self) -> &[VisibleRow] {
        let start = self.offset.min(self.rows.len());
        let end = (start + self.height as usize).min(self.rows.len());
        &self.rows[start..end]
    }

    fn scroll_to_cursor(&mut self) {
        let Some(cursor) = self.cursor else {
            self.offset = 0;
            return;
        };
        let height = self.height as usize;
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }
        // Don't leave blank space below the last row when rows shrink.
        let max_offset = self.rows.len().saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
