//! Frame composition.
//!
//! Pure layout logic: stacks the header text, query input, table, and status
//! lines top to bottom. State flows one way into the frame.

use crate::state::AppState;
use crate::view::query_input::QueryInputView;
use crate::view::table::{HistoryTable, TABLE_CHROME_LINES};
use crate::view::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Left margin of every text line.
pub const INDENT: u16 = 4;

const HEADER: &str = "Hi. Type to search your shell history.";
const INSTRUCTIONS: &str = "Use ↑/↓ to pick a command, enter to confirm.";
const PROMPT: &str = "What are you looking for?";
const QUIT_HINT: &str = "(esc to quit)";

/// Text lines above the table, including blank spacers.
const LINES_ABOVE_TABLE: u16 = 13;
/// Text lines below the table, including blank spacers.
const LINES_BELOW_TABLE: u16 = 4;

/// Vertical space the frame uses outside the table rows.
///
/// Matches [`ChromeOverhead::DEFAULT_ROWS`](crate::view_state::ChromeOverhead::DEFAULT_ROWS).
pub const FRAME_CHROME_LINES: u16 = LINES_ABOVE_TABLE + TABLE_CHROME_LINES + LINES_BELOW_TABLE;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    /// Greeting line.
    pub header: Rect,
    /// Key help line.
    pub instructions: Rect,
    /// Mouse debug line (blank until a mouse event arrives).
    pub mouse: Rect,
    /// Query prompt line.
    pub prompt: Rect,
    /// Query input line.
    pub input: Rect,
    /// Quit hint line.
    pub quit_hint: Rect,
    /// Bordered table.
    pub table: Rect,
    /// Selected-command line.
    pub selection: Rect,
    /// Diagnostics line.
    pub diagnostics: Rect,
}

/// Split `area` into the frame regions for a table showing `table_rows` rows.
pub fn calculate_areas(area: Rect, table_rows: u16) -> FrameAreas {
    let line = Constraint::Length(1);
    let [_, header, _, instructions, _, mouse, _, prompt, _, input, _, quit_hint, _, table, _, selection, _, diagnostics, _] =
        Layout::vertical([
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            line,
            Constraint::Length(table_rows.saturating_add(TABLE_CHROME_LINES)),
            line,
            line,
            line,
            line,
            Constraint::Min(0),
        ])
        .areas(area);

    FrameAreas {
        header,
        instructions,
        mouse,
        prompt,
        input,
        quit_hint,
        table,
        selection,
        diagnostics,
    }
}

fn indented(text: impl Into<String>) -> Line<'static> {
    Line::from(format!("{}{}", " ".repeat(INDENT as usize), text.into()))
}

/// Render the whole frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let areas = calculate_areas(frame.area(), state.table.height());

    frame.render_widget(Paragraph::new(indented(HEADER)), areas.header);
    frame.render_widget(Paragraph::new(indented(INSTRUCTIONS)), areas.instructions);

    if let Some(mouse) = &state.mouse {
        frame.render_widget(Paragraph::new(indented(mouse.to_string())), areas.mouse);
    }

    frame.render_widget(Paragraph::new(indented(PROMPT)), areas.prompt);
    frame.render_widget(QueryInputView::new(&state.query, theme, INDENT), areas.input);
    frame.render_widget(Paragraph::new(indented(QUIT_HINT)), areas.quit_hint);

    frame.render_widget(HistoryTable::new(&state.table, theme), areas.table);

    let selected = state.selected_command().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(indented(format!("Let's go to {}! (selected)", selected))),
        areas.selection,
    );

    if let Some(error) = &state.last_error {
        let line = Line::from(vec![
            Span::raw(" ".repeat(INDENT as usize)),
            Span::styled(format!("error: {}", error), theme.error),
        ]);
        frame.render_widget(Paragraph::new(line), areas.diagnostics);
    }
}
