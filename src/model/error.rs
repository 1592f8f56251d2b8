//! Error types for cmdhist.
//!
//! Errors are split by when they can happen:
//!
//! - [`AppError`] covers startup failures. They are fatal: `main` prints the cause to
//!   stderr, logs it, and exits non-zero.
//! - Runtime event errors never become an `AppError`. The event loop converts them into
//!   [`crate::state::AppEvent::Error`], which is stored on the app state and rendered in the
//!   diagnostics line while the session keeps running.
//!
//! Nothing in the filtering or editing core can fail: inserting past capacity or moving the
//! cursor past a boundary is a silent no-op.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level startup error.
///
/// All domain-specific error types convert into `AppError` via `From`, so `main`
/// can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file or tracing subscriber could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal could not be initialized or drawn to (no TTY, unsupported terminal).
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn app_error_from_config_error() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("/tmp/config.toml"),
            reason: "expected `=`".to_string(),
        };
        let app_err: AppError = err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("/tmp/config.toml"));
    }

    #[test]
    fn app_error_from_logging_error() {
        let app_err: AppError = LoggingError::SubscriberAlreadySet.into();
        assert!(app_err.to_string().contains("Logging setup failed"));
    }

    #[test]
    fn app_error_nested_io_through_tui_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no tty");
        let tui_err: TuiError = io_err.into();
        let app_err: AppError = tui_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("no tty"));
    }
}
