//! Query input widget.

use crate::state::QueryInput;
use crate::view::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hint shown while the query is empty.
pub const PLACEHOLDER: &str = "Search commands";

/// Prompt drawn before the query text.
pub const PROMPT: &str = "> ";

/// Renders the query on one line with a block cursor.
pub struct QueryInputView<'a> {
    input: &'a QueryInput,
    theme: &'a Theme,
    indent: u16,
}

impl<'a> QueryInputView<'a> {
    /// Create the widget. `indent` blank cells precede the prompt.
    pub fn new(input: &'a QueryInput, theme: &'a Theme, indent: u16) -> Self {
        Self {
            input,
            theme,
            indent,
        }
    }

    fn spans(&self, width: u16) -> Vec<Span<'a>> {
        let mut spans = vec![
            Span::raw(" ".repeat(self.indent as usize)),
            Span::raw(PROMPT),
        ];

        if self.input.is_empty() {
            // Cursor sits on the first placeholder char.
            let mut chars = PLACEHOLDER.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            spans.push(Span::styled(first, self.theme.cursor));
            spans.push(Span::styled(chars.as_str(), self.theme.placeholder));
            return spans;
        }

        let prefix = self.indent as usize + PROMPT.width();
        let available = (width as usize).saturating_sub(prefix).max(1);

        let cursor = self.input.cursor();
        let value = self.input.value();
        let skip = scroll_start(value, cursor, available);

        let before: String = value.chars().skip(skip).take(cursor - skip).collect();
        let mut rest = value.chars().skip(cursor);
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        spans.push(Span::raw(before));
        spans.push(Span::styled(under, self.theme.cursor));
        spans.push(Span::raw(after));
        spans
    }
}

/// First char to draw so the cursor cell fits in `available` columns.
fn scroll_start(value: &str, cursor: usize, available: usize) -> usize {
    let widths: Vec<usize> = value
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .collect();

    // One column for the cursor cell itself
    let mut used: usize = widths.iter().sum::<usize>() + 1;
    let mut start = 0;
    while used > available && start < widths.len() {
        used -= widths[start];
        start += 1;
    }
    start
}

impl Widget for QueryInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans(area.width))).render(area, buf);
    }
}
