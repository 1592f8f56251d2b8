//! Application state and event dispatch (pure).
//!
//! `AppState` owns the query input and the table, and is the only place where
//! events turn into state changes. It never touches the terminal: the view layer
//! converts crossterm events into [`AppEvent`]s, calls [`AppState::handle_event`],
//! and acts on the returned [`Control`].

use crate::config::BrowserConfig;
use crate::filter;
use crate::model::{Dataset, EditAction, KeyAction, VisibleRow};
use crate::state::query_input::QueryInput;
use crate::state::table::{Direction, TableState};
use crate::view_state::{compute_columns, compute_viewport_height};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::fmt;
use tracing::{debug, warn};

// ===== Events =====

/// Domain events fed to the app state, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Terminal was resized.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in lines.
        height: u16,
    },
    /// A bound key was pressed.
    Action(KeyAction),
    /// An unbound key was pressed; it edits the query.
    Edit(EditAction),
    /// Text was pasted into the terminal.
    Paste(String),
    /// A mouse event arrived.
    Mouse(MouseSnapshot),
    /// Reading events failed. Stored for display; the session goes on.
    Error(String),
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Draw the next frame.
    Redraw,
    /// Clear the screen, then draw the next frame.
    ClearAndRedraw,
    /// Leave the event loop.
    Quit,
}

// ===== Mouse debug info =====

/// Last mouse event, kept only to show it on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseSnapshot {
    /// Column of the pointer.
    pub column: u16,
    /// Row of the pointer.
    pub row: u16,
    /// Human-readable event kind, e.g. "left press".
    pub kind: String,
}

impl MouseSnapshot {
    /// Capture a crossterm mouse event.
    pub fn from_event(event: &MouseEvent) -> Self {
        Self {
            column: event.column,
            row: event.row,
            kind: describe_mouse_kind(event.kind),
        }
    }
}

impl fmt::Display for MouseSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(X: {}, Y: {}) {}", self.column, self.row, self.kind)
    }
}

fn describe_mouse_kind(kind: MouseEventKind) -> String {
    fn button(b: MouseButton) -> &'static str {
        match b {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        }
    }

    match kind {
        MouseEventKind::Down(b) => format!("{} press", button(b)),
        MouseEventKind::Up(b) => format!("{} release", button(b)),
        MouseEventKind::Drag(b) => format!("{} drag", button(b)),
        MouseEventKind::Moved => "motion".to_string(),
        MouseEventKind::ScrollDown => "wheel down".to_string(),
        MouseEventKind::ScrollUp => "wheel up".to_string(),
        MouseEventKind::ScrollLeft => "wheel left".to_string(),
        MouseEventKind::ScrollRight => "wheel right".to_string(),
    }
}

// ===== AppState =====

/// Everything the browser shows, owned by a single controller.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Dataset,
    config: BrowserConfig,
    /// Query being typed.
    pub query: QueryInput,
    /// Filtered rows and selection.
    pub table: TableState,
    /// Last terminal size seen, as (width, height).
    pub terminal_size: (u16, u16),
    /// Last mouse event; `Some` once any mouse event was observed.
    pub mouse: Option<MouseSnapshot>,
    /// Last runtime error, shown in the diagnostics line.
    pub last_error: Option<String>,
}

impl AppState {
    /// Create the initial state for a terminal of `width` × `height`.
    ///
    /// The table starts with the unfiltered dataset.
    pub fn new(dataset: Dataset, config: BrowserConfig, width: u16, height: u16) -> Self {
        let rows = filter::filter(&dataset, "", config.empty_result);
        let table = TableState::new(
            compute_columns(width, config.chrome).to_vec(),
            rows,
            compute_viewport_height(height, config.chrome),
        );

        Self {
            dataset,
            query: QueryInput::new(config.max_query_length),
            config,
            table,
            terminal_size: (width, height),
            mouse: None,
            last_error: None,
        }
    }

    /// The dataset being browsed.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Behavior settings this state was built with.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Command text of the selected row, if any.
    pub fn selected_command(&self) -> Option<&str> {
        self.table.selected_row().map(VisibleRow::command)
    }

    /// Process one event to completion.
    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::Resize { width, height } => {
                self.resize(width, height);
                Control::ClearAndRedraw
            }
            AppEvent::Action(KeyAction::Quit) => Control::Quit,
            AppEvent::Action(KeyAction::SelectPrevious) => {
                self.table.move_cursor(Direction::Up);
                Control::Redraw
            }
            AppEvent::Action(KeyAction::SelectNext) => {
                self.table.move_cursor(Direction::Down);
                Control::Redraw
            }
            AppEvent::Edit(edit) => {
                self.query.apply(&edit);
                self.refilter();
                Control::Redraw
            }
            AppEvent::Paste(text) => {
                self.query.insert_str(&text);
                self.refilter();
                Control::Redraw
            }
            AppEvent::Mouse(snapshot) => {
                self.mouse = Some(snapshot);
                Control::Redraw
            }
            AppEvent::Error(message) => {
                warn!(error = %message, "Runtime event error");
                self.last_error = Some(message);
                Control::Redraw
            }
        }
    }

    /// Recompute columns and viewport height for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Relayout after resize");
        self.terminal_size = (width, height);
        self.table
            .set_columns(compute_columns(width, self.config.chrome).to_vec());
        self.table
            .set_height(compute_viewport_height(height, self.config.chrome));
    }

    /// Re-run the filter for the current query and hand the rows to the table.
    fn refilter(&mut self) {
        let rows = filter::filter(&self.dataset, self.query.value(), self.config.empty_result);
        debug!(query = self.query.value(), matches = rows.len(), "Refiltered");
        self.table.set_rows(rows);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
