//! Color and text styling.
//!
//! Styles are an immutable [`Theme`] value built once at startup and passed to
//! the render functions. There is no process-wide style state.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for every part of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Table border.
    pub border: Style,
    /// Table header row.
    pub header: Style,
    /// Row under the cursor.
    pub selected: Style,
    /// Edit cursor in the query input.
    pub cursor: Style,
    /// Hint text shown while the query is empty.
    pub placeholder: Style,
    /// Diagnostics line.
    pub error: Style,
}

impl Theme {
    /// Build the theme for the given color configuration.
    ///
    /// Without colors, the selection and cursor fall back to reverse video so
    /// they stay visible.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::Indexed(240)),
                header: Style::default().add_modifier(Modifier::UNDERLINED),
                selected: Style::default()
                    .fg(Color::Indexed(229))
                    .bg(Color::Indexed(57)),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                placeholder: Style::default().fg(Color::Indexed(240)),
                error: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                border: Style::default(),
                header: Style::default().add_modifier(Modifier::UNDERLINED),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                placeholder: Style::default(),
                error: Style::default(),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::new(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn colored_selection_uses_palette() {
        let theme = Theme::new(ColorConfig::new(true));
        assert_eq!(theme.selected.fg, Some(Color::Indexed(229)));
        assert_eq!(theme.selected.bg, Some(Color::Indexed(57)));
        assert_eq!(theme.border.fg, Some(Color::Indexed(240)));
    }

    #[test]
    fn monochrome_theme_has_no_colors() {
        let theme = Theme::new(ColorConfig::new(false));
        for style in [
            theme.border,
            theme.header,
            theme.selected,
            theme.cursor,
            theme.placeholder,
            theme.error,
        ] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
        assert!(theme.selected.add_modifier.contains(Modifier::REVERSED));
    }
}
