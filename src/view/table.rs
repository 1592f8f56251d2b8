//! History table widget.
//!
//! Draws only the rows inside the viewport; the cursor and scroll offset come
//! from [`TableState`](crate::state::TableState).

use crate::state::TableState;
use crate::view::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{
        Block, Borders, HighlightSpacing, Row, StatefulWidget, Table,
        TableState as SelectionState, Widget,
    },
};

/// Symbol drawn in front of the selected row.
pub const HIGHLIGHT_SYMBOL: &str = "> ";
/// Blank cells between adjacent columns.
pub const COLUMN_SPACING: u16 = 2;
/// Lines the table adds around its rows: two borders, header, header margin.
pub const TABLE_CHROME_LINES: u16 = 4;

/// Bordered table of visible rows.
pub struct HistoryTable<'a> {
    table: &'a TableState,
    theme: &'a Theme,
}

impl<'a> HistoryTable<'a> {
    /// Create the widget.
    pub fn new(table: &'a TableState, theme: &'a Theme) -> Self {
        Self { table, theme }
    }
}

impl Widget for HistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.table.columns();

        let header = Row::new(columns.iter().map(|c| c.label))
            .style(self.theme.header)
            .bottom_margin(1);

        let rows = self
            .table
            .visible_rows()
            .iter()
            .map(|row| Row::new(row.cells()));

        let widths = columns.iter().map(|c| Constraint::Length(c.width));

        let widget = Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(self.theme.selected)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border),
            );

        let selected = self
            .table
            .cursor()
            .map(|cursor| cursor.saturating_sub(self.table.scroll_offset()));
        let mut selection = SelectionState::default().with_selected(selected);

        StatefulWidget::render(widget, area, buf, &mut selection);
    }
}
