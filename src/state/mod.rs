//! UI state machine (pure).
//!
//! All state transitions are plain methods testable without a terminal.

pub mod app_state;
pub mod query_input;
pub mod table;

// Re-export for convenience
pub use app_state::{AppEvent, AppState, Control, MouseSnapshot};
pub use query_input::{QueryInput, DEFAULT_MAX_QUERY_LENGTH};
pub use table::{Direction, TableState};
