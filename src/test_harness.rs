//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::BrowserConfig;
use crate::model::Dataset;
use crate::state::{AppEvent, AppState};
use crate::view::{ColorConfig, Theme, TuiApp, TuiError};
use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Fixed clock so rendered ages are stable.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The three-command dataset most scenarios use.
pub fn three_commands() -> Dataset {
    Dataset::from_commands(
        [("~", "git push"), ("~", "git pull"), ("~", "top")],
        fixed_now(),
    )
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Three-command dataset, default config, 80x24 terminal
    pub fn new() -> Result<Self, TuiError> {
        Self::with_dataset(three_commands(), BrowserConfig::default(), 80, 24)
    }

    /// Custom dataset, config and terminal size
    ///
    /// Colors are disabled so rendered strings carry no style noise.
    pub fn with_dataset(
        dataset: Dataset,
        config: BrowserConfig,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let app_state = AppState::new(dataset, config, width, height);
        let theme = Theme::new(ColorConfig::new(false));

        Ok(Self {
            app: TuiApp::new_for_test(terminal, app_state, theme),
            running: true,
        })
    }

    fn send(&mut self, event: Event) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self
            .app
            .handle_event_test(event)
            .expect("TestBackend drawing should not fail");

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.send(Event::Key(KeyEvent::new(key, mods)))
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Paste text as one bracketed-paste event
    pub fn paste(&mut self, text: &str) {
        self.send(Event::Paste(text.to_string()));
    }

    /// Resize the terminal and deliver the resize event
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.send(Event::Resize(width, height));
    }

    /// Send a mouse event at the specified coordinates
    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.send(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Send a left-button press at the specified coordinates
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Deliver an event-read failure
    pub fn read_error(&mut self, message: &str) {
        if !self.running {
            return;
        }
        let quit = self
            .app
            .handle_app_event_test(AppEvent::Error(message.to_string()))
            .expect("TestBackend drawing should not fail");
        if quit {
            self.running = false;
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Commands in the table, in display order
    pub fn commands(&self) -> Vec<&str> {
        self.state()
            .table
            .rows()
            .iter()
            .map(|row| row.command())
            .collect()
    }

    /// Check if app is still running (didn't crash/quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
