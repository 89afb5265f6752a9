//! Terminal styling and color utilities.
//!
//! ANSI escape codes and capability detection used by the text renderers.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for titles.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for axis labels and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for banner borders and headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for the highest value on a surface.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for the lowest value on a surface.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode box-drawing characters.
///
/// Looks for a UTF locale in `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    for key in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            if value.to_uppercase().contains("UTF") {
                return true;
            }
        }
    }
    cfg!(windows)
}

/// Format a whole number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use lenscap_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1093), "1,093");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Round a non-negative quantity to whole units and add separators.
#[must_use]
pub fn format_units(value: f64) -> String {
    format_with_separators(value.max(0.0).round() as u64)
}
