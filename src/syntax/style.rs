//! Style types for terminal rendering
//!
//! Categories map to these styles when snippets are printed to a
//! terminal instead of being rendered to HTML.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Map onto crossterm's palette (`None` keeps the terminal default)
    fn to_term(self) -> Option<TermColor> {
        match self {
            Color::Default => None,
            Color::Black => Some(TermColor::Black),
            Color::Red => Some(TermColor::DarkRed),
            Color::Green => Some(TermColor::DarkGreen),
            Color::Yellow => Some(TermColor::DarkYellow),
            Color::Blue => Some(TermColor::DarkBlue),
            Color::Magenta => Some(TermColor::DarkMagenta),
            Color::Cyan => Some(TermColor::DarkCyan),
            Color::White => Some(TermColor::Grey),
            Color::BrightBlack => Some(TermColor::DarkGrey),
            Color::BrightRed => Some(TermColor::Red),
            Color::BrightGreen => Some(TermColor::Green),
            Color::BrightYellow => Some(TermColor::Yellow),
            Color::BrightBlue => Some(TermColor::Blue),
            Color::BrightMagenta => Some(TermColor::Magenta),
            Color::BrightCyan => Some(TermColor::Cyan),
            Color::BrightWhite => Some(TermColor::White),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Convert to a crossterm content style
    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.to_term();
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        style
    }
}
