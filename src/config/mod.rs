//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError,
    ConfigFile, ResolvedConfig,
};

use crate::filter::EmptyResultPolicy;
use crate::state::DEFAULT_MAX_QUERY_LENGTH;
use crate::view_state::ChromeOverhead;

/// Behavior settings for the browser itself.
///
/// Built once at startup from [`ResolvedConfig`] and handed to the app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    /// What the table shows when nothing matches.
    pub empty_result: EmptyResultPolicy,
    /// Space reserved around the table.
    pub chrome: ChromeOverhead,
    /// Maximum query length in chars.
    pub max_query_length: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            empty_result: EmptyResultPolicy::default(),
            chrome: ChromeOverhead::default(),
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
        }
    }
}

impl From<&ResolvedConfig> for BrowserConfig {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            empty_result: config.empty_result,
            chrome: ChromeOverhead::new(config.chrome_columns, config.chrome_rows),
            max_query_length: config.max_query_length,
        }
    }
}
