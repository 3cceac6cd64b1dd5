//! Theme management and ANSI escape sequence generation.
//!
//! The plugin keeps two themes at all times, one for light mode and one for
//! dark mode; the dark-mode toggle only switches which one the renderer uses.
//! Themes are built in (Catppuccin variants) or loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme (default light)
//! - `catppuccin-mocha`: Dark theme (default dark)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! dark = true
//!
//! [colors]
//! background = "#1e1e2e"        # optional
//! header_fg = "#cdd6f4"
//! header_bg = "#181825"         # optional
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! category_fg = "#cba6f7"
//! overlay_bg = "#181825"        # optional
//! overlay_border = "#89b4fa"
//! input_focus_fg = "#f5c2e7"
//! error_fg = "#f38ba8"
//! banner_fg = "#1e1e2e"
//! banner_bg = "#a6e3a1"
//! ```

use crate::domain::{Result, ZeventsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in theme used in light mode unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Built-in theme used in dark mode unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Whether the palette is meant for dark mode.
    #[serde(default)]
    pub dark: bool,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (`"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Pane background. Terminal default when unset.
    #[serde(default)]
    pub background: Option<String>,

    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (footer, placeholders, date lines).
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,
    pub empty_state_fg: String,
    pub category_fg: String,

    /// Add-event overlay background. Falls back to `background`.
    #[serde(default)]
    pub overlay_bg: Option<String>,
    pub overlay_border: String,
    /// Label color of the focused form field.
    pub input_focus_fg: String,
    /// Validation error text.
    pub error_fg: String,

    pub banner_fg: String,
    pub banner_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zevents::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert!(theme.dark);
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZeventsError::Io`] when the file can't be read and
    /// [`ZeventsError::Theme`] when its contents don't parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ZeventsError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Default light theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse (should never occur).
    #[must_use]
    pub fn builtin_light() -> Self {
        Self::from_name(DEFAULT_LIGHT_THEME).expect("built-in light theme should always parse")
    }

    /// Default dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse (should never occur).
    #[must_use]
    pub fn builtin_dark() -> Self {
        Self::from_name(DEFAULT_DARK_THEME).expect("built-in dark theme should always parse")
    }

    /// Overlay background, falling back to the pane background.
    #[must_use]
    pub fn overlay_bg(&self) -> Option<&str> {
        self.colors
            .overlay_bg
            .as_deref()
            .or(self.colors.background.as_deref())
    }

    /// Parses `#rrggbb` (or `rrggbb`). Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    ///
    /// ```rust
    /// use zevents::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Background escape for an optional color; empty when unset.
    #[must_use]
    pub fn bg_opt(hex: Option<&str>) -> String {
        hex.map(Self::bg).unwrap_or_default()
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha, same as [`Theme::builtin_dark`].
    fn default() -> Self {
        Self::builtin_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn light_and_dark_defaults() {
        assert!(!Theme::builtin_light().dark);
        assert!(Theme::builtin_dark().dark);
        assert_eq!(Theme::default(), Theme::builtin_dark());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Theme::hex_to_rgb("#1e1e2e"), (0x1e, 0x1e, 0x2e));
        assert_eq!(Theme::hex_to_rgb("cdd6f4"), (0xcd, 0xd6, 0xf4));
        assert_eq!(Theme::hex_to_rgb("#fff"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#zz0000"), (255, 0, 0));
        assert_eq!(Theme::hex_to_rgb("#ééé"), (255, 255, 255));
    }

    #[test]
    fn bg_opt_is_empty_without_color() {
        assert_eq!(Theme::bg_opt(None), "");
        assert_eq!(Theme::bg_opt(Some("#000000")), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn overlay_bg_falls_back_to_background() {
        let mut theme = Theme::builtin_light();
        theme.colors.overlay_bg = None;
        assert_eq!(theme.overlay_bg(), theme.colors.background.as_deref());
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme {
            name: "custom".to_string(),
            ..Theme::builtin_dark()
        })
        .unwrap();
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert!(theme.dark);
    }

    #[test]
    fn theme_file_errors() {
        let missing = Theme::from_file("/nonexistent/zevents-theme.toml");
        assert!(matches!(missing, Err(ZeventsError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(ZeventsError::Theme(_))));
    }
}
