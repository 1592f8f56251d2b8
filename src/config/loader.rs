//! Configuration file loading with precedence handling.

use crate::filter::EmptyResultPolicy;
use crate::state::DEFAULT_MAX_QUERY_LENGTH;
use crate::view_state::ChromeOverhead;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CMDHIST_CONFIG";
/// Environment variable overriding the empty-result policy.
pub const EMPTY_RESULT_ENV_VAR: &str = "CMDHIST_EMPTY_RESULT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cmdhist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// What to show when a query matches nothing: "placeholder" or "omit".
    #[serde(default)]
    pub empty_result: Option<EmptyResultPolicy>,

    /// Maximum query length in chars.
    #[serde(default)]
    pub max_query_length: Option<usize>,

    /// Horizontal space reserved for borders and padding.
    #[serde(default)]
    pub chrome_columns: Option<u16>,

    /// Vertical space reserved for text around the table.
    #[serde(default)]
    pub chrome_rows: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Empty-result policy.
    pub empty_result: EmptyResultPolicy,
    /// Maximum query length in chars. Always at least 1.
    pub max_query_length: usize,
    /// Horizontal chrome overhead.
    pub chrome_columns: u16,
    /// Vertical chrome overhead.
    pub chrome_rows: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            empty_result: EmptyResultPolicy::default(),
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
            chrome_columns: ChromeOverhead::DEFAULT_COLUMNS,
            chrome_rows: ChromeOverhead::DEFAULT_ROWS,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cmdhist/cmdhist.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cmdhist").join("cmdhist.log")
    } else {
        PathBuf::from("cmdhist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/cmdhist/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cmdhist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CMDHIST_CONFIG` environment variable
/// 3. Default path `~/.config/cmdhist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{} is empty", CONFIG_ENV_VAR)));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// A `max_query_length` of 0 is raised to 1. Chrome overhead is never below the
/// space the frame itself draws, so the table viewport always fits on screen.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        empty_result: config.empty_result.unwrap_or(defaults.empty_result),
        max_query_length: config
            .max_query_length
            .unwrap_or(defaults.max_query_length)
            .max(1),
        chrome_columns: config
            .chrome_columns
            .unwrap_or(defaults.chrome_columns)
            .max(ChromeOverhead::DEFAULT_COLUMNS),
        chrome_rows: config
            .chrome_rows
            .unwrap_or(defaults.chrome_rows)
            .max(ChromeOverhead::DEFAULT_ROWS),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CMDHIST_EMPTY_RESULT`: "placeholder" or "omit". Other values are ignored
///   with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(EMPTY_RESULT_ENV_VAR) {
        match EmptyResultPolicy::from_name(&value) {
            Some(policy) => config.empty_result = policy,
            None => warn!(
                value = %value,
                "Ignoring unknown {} value", EMPTY_RESULT_ENV_VAR
            ),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    empty_result_override: Option<EmptyResultPolicy>,
    max_query_length_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(policy) = empty_result_override {
        config.empty_result = policy;
    }

    if let Some(max_len) = max_query_length_override {
        config.max_query_length = max_len.max(1);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
