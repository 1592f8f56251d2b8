//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::AppError;
pub use key_action::{EditAction, KeyAction};
pub use record::{format_age, Dataset, Record, VisibleRow};
