//! TUI rendering and terminal management (impure shell)

pub mod layout;
pub mod query_input;
pub mod styles;
pub mod table;

pub use query_input::QueryInputView;
pub use styles::{ColorConfig, Theme};
pub use table::HistoryTable;

use crate::config::{BrowserConfig, KeyBindings};
use crate::model::{Dataset, EditAction};
use crate::state::{AppEvent, AppState, Control, MouseSnapshot};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyEvent, KeyEventKind,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Window title set at startup.
pub const WINDOW_TITLE: &str = "RESH | Your Shell History";

/// Size assumed when the terminal cannot report one.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// bracketed paste.
    pub fn new(dataset: Dataset, config: BrowserConfig, theme: Theme) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableBracketedPaste)?;
        stdout.execute(SetTitle(WINDOW_TITLE))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let (width, height) = match terminal.size() {
            Ok(size) if size.width > 0 && size.height > 0 => (size.width, size.height),
            _ => FALLBACK_SIZE,
        };
        info!(records = dataset.len(), width, height, "Starting browser");

        let app_state = AppState::new(dataset, config, width, height);

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme,
        })
    }

    /// Run the main event loop
    ///
    /// Blocks on the next terminal event, processes it to completion, then
    /// redraws. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = match event::read() {
                Ok(event) => self.translate_event(event),
                Err(err) => Some(AppEvent::Error(err.to_string())),
            };

            let Some(event) = event else {
                continue;
            };

            if self.apply(event)? {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Convert a crossterm event into a domain event.
    ///
    /// Key releases and focus changes yield `None`.
    fn translate_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) => self.translate_key(key),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(MouseSnapshot::from_event(&mouse))),
            Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
            Event::Paste(text) => Some(AppEvent::Paste(text)),
            Event::FocusGained | Event::FocusLost => None,
        }
    }

    fn translate_key(&self, key: KeyEvent) -> Option<AppEvent> {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return None;
        }

        match self.key_bindings.get(key) {
            Some(action) => Some(AppEvent::Action(action)),
            None => match EditAction::from_key(key) {
                EditAction::Ignore => {
                    debug!(?key, "Ignoring unbound key");
                    None
                }
                edit => Some(AppEvent::Edit(edit)),
            },
        }
    }

    /// Hand one event to the app state and act on the result.
    ///
    /// Returns true if app should quit
    fn apply(&mut self, event: AppEvent) -> Result<bool, TuiError> {
        match self.app_state.handle_event(event) {
            Control::Quit => Ok(true),
            Control::ClearAndRedraw => {
                self.terminal.clear()?;
                self.draw()?;
                Ok(false)
            }
            Control::Redraw => {
                self.draw()?;
                Ok(false)
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, theme);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal mode setup. Used by acceptance test harness.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState, theme: Theme) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Feed one crossterm event through translation and dispatch (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_event_test(&mut self, event: Event) -> Result<bool, TuiError> {
        match self.translate_event(event) {
            Some(event) => self.apply(event),
            None => Ok(false),
        }
    }

    /// Feed a domain event directly (test-only accessor)
    pub(crate) fn handle_app_event_test(&mut self, event: AppEvent) -> Result<bool, TuiError> {
        self.apply(event)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, also when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(
    dataset: Dataset,
    config: BrowserConfig,
    theme: Theme,
) -> Result<(), TuiError> {
    let result = TuiApp::new(dataset, config, theme).and_then(|mut app| app.run());

    // Always restore terminal state
    let restored = restore_terminal();
    if let Err(err) = &restored {
        warn!(error = %err, "Failed to restore terminal");
    }

    result?;
    restored
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture and bracketed paste, and leaves the
/// alternate screen.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableBracketedPaste)?;
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}
