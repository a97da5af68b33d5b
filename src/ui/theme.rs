//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the client, supporting
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences, and maps
//! status emphasis to concrete accent colors.
//!
//! # Built-in Themes
//!
//! - `deck-dark`: Dark theme (default)
//! - `deck-light`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! notice_error_fg = "#f38ba8"
//! notice_confirm_fg = "#f9e2af"
//! accent_primary = "#89b4fa"
//! accent_success = "#a6e3a1"
//! accent_warning = "#f9e2af"
//! accent_neutral = "#9399b2"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::Emphasis;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from
/// built-in themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g. "#cdd6f4"). The optional
/// header background defaults to `None`, letting themes opt out.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, field labels, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Error notice color.
    pub notice_error_fg: String,
    /// Delete confirmation prompt color.
    pub notice_confirm_fg: String,

    /// Accent for in-progress status.
    pub accent_primary: String,
    /// Accent for completed status.
    pub accent_success: String,
    /// Accent for paused status.
    pub accent_warning: String,
    /// Accent for unrecognized status.
    pub accent_neutral: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `deck-dark`, `deck-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use eventdeck::ui::Theme;
    ///
    /// let theme = Theme::from_name("deck-dark").unwrap();
    /// assert_eq!(theme.name, "deck-dark");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "deck-dark" => include_str!("../../themes/deck-dark.toml"),
            "deck-light" => include_str!("../../themes/deck-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content
    /// cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Returns the accent color for a status emphasis.
    #[must_use]
    pub fn emphasis_fg(&self, emphasis: Emphasis) -> &str {
        match emphasis {
            Emphasis::Primary => &self.colors.accent_primary,
            Emphasis::Success => &self.colors.accent_success,
            Emphasis::Warning => &self.colors.accent_warning,
            Emphasis::Neutral => &self.colors.accent_neutral,
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`deck-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("deck-dark").expect("Built-in deck-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("deck-dark").unwrap().name, "deck-dark");
        assert_eq!(Theme::from_name("deck-light").unwrap().name, "deck-light");
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn emphasis_maps_to_accent_colors() {
        let theme = Theme::default();
        assert_eq!(
            theme.emphasis_fg(Emphasis::Primary),
            theme.colors.accent_primary
        );
        assert_eq!(
            theme.emphasis_fg(Emphasis::Success),
            theme.colors.accent_success
        );
        assert_eq!(
            theme.emphasis_fg(Emphasis::Warning),
            theme.colors.accent_warning
        );
        assert_eq!(
            theme.emphasis_fg(Emphasis::Neutral),
            theme.colors.accent_neutral
        );
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::fg("#0000ff"), "\u{001b}[38;2;0;0;255m");
        assert_eq!(Theme::fg("garbage"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#ff0000"), "\u{001b}[48;2;255;0;0m");
    }

    #[test]
    fn theme_loads_from_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            include_str!("../../themes/deck-light.toml")
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "deck-light");
    }

    #[test]
    fn unreadable_theme_file_reports_an_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(err.contains("Failed to read theme file"));
    }
}
