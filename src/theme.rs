//! Terminal color palette
//!
//! The only module that owns escape sequences. Each segment of the
//! status line uses a fixed color from the 256-color palette; the
//! minimal scheme bypasses coloring entirely.

use crate::config::ColorScheme;

const RESET: &str = "\x1b[0m";

/// Named palette entries for status line segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Soft sky blue, used for the model segment
    SkyBlue,
    /// Soft pink/mauve, used for the output style segment
    Mauve,
    /// Soft light blue, used for the directory segment
    LightBlue,
    /// Soft green, used for the git branch segment
    Green,
    /// Medium gray, used for the "no git" placeholder
    Gray,
}

impl Color {
    /// The 256-color escape sequence for this palette entry.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SkyBlue => "\x1b[38;5;75m",
            Self::Mauve => "\x1b[38;5;176m",
            Self::LightBlue => "\x1b[38;5;110m",
            Self::Green => "\x1b[38;5;114m",
            Self::Gray => "\x1b[38;5;245m",
        }
    }
}

/// Wrap `text` in the escape sequence for `color`, unless the scheme
/// is minimal, in which case the text passes through unchanged.
#[must_use]
pub fn paint(scheme: ColorScheme, color: Color, text: &str) -> String {
    if scheme.is_colored() {
        format!("{}{text}{RESET}", color.code())
    } else {
        text.to_string()
    }
}
