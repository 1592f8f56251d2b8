//! Column and viewport layout (pure).
//!
//! Recomputed from scratch on every resize event; nothing here is incremental.

/// Width of the Time column.
pub const TIME_WIDTH: u16 = 4;
/// Width of the Directory column.
pub const DIRECTORY_WIDTH: u16 = 20;

/// Label of the Time column.
pub const TIME_LABEL: &str = "Time";
/// Label of the Directory column.
pub const DIRECTORY_LABEL: &str = "Directory";
/// Label of the Command column.
pub const COMMAND_LABEL: &str = "Command";

/// A table column: header label and width in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header label.
    pub label: &'static str,
    /// Width in terminal cells. Always at least 1.
    pub width: u16,
}

impl Column {
    /// Create a column.
    pub const fn new(label: &'static str, width: u16) -> Self {
        Self { label, width }
    }
}

/// Space taken by borders, padding, and surrounding text.
///
/// `columns` is subtracted from the terminal width before sizing the Command
/// column; `rows` is subtracted from the terminal height to get the number of
/// table rows shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeOverhead {
    /// Horizontal overhead in cells.
    pub columns: u16,
    /// Vertical overhead in lines.
    pub rows: u16,
}

impl ChromeOverhead {
    /// Default horizontal overhead: two border cells, the highlight symbol,
    /// and two gaps of column spacing.
    pub const DEFAULT_COLUMNS: u16 = 8;
    /// Default vertical overhead: header text, query input, help line,
    /// table borders and header, selection line, diagnostics line.
    pub const DEFAULT_ROWS: u16 = 21;

    /// Create an overhead.
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

impl Default for ChromeOverhead {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLUMNS, Self::DEFAULT_ROWS)
    }
}

/// Compute the three table columns for a terminal `width`.
///
/// Time and Directory have fixed widths; Command takes what is left after
/// `chrome.columns`, clamped to at least 1.
pub fn compute_columns(width: u16, chrome: ChromeOverhead) -> [Column; 3] {
    let command_width = width
        .saturating_sub(TIME_WIDTH)
        .saturating_sub(DIRECTORY_WIDTH)
        .saturating_sub(chrome.columns)
        .max(1);

    [
        Column::new(TIME_LABEL, TIME_WIDTH),
        Column::new(DIRECTORY_LABEL, DIRECTORY_WIDTH),
        Column::new(COMMAND_LABEL, command_width),
    ]
}

/// Number of table rows shown for a terminal `height`, at least 1.
pub fn compute_viewport_height(height: u16, chrome: ChromeOverhead) -> u16 {
    height.saturating_sub(chrome.rows).max(1)
}

/// Smallest width at which the columns plus chrome fill the terminal exactly.
pub fn min_exact_width(chrome: ChromeOverhead) -> u16 {
    TIME_WIDTH + DIRECTORY_WIDTH + chrome.columns + 1
}
