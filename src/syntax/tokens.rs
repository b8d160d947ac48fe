//! Token categories for syntax highlighting
//!
//! This module defines the lexical categories a span of Levython
//! source can be tagged with, and their default terminal styles.

use super::style::{Color, Style};

/// Lexical categories, declared in precedence order
///
/// Earlier categories claim text first and are never overridden
/// by later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// `#` line comments
    Comment,
    /// Single- or double-quoted string literals
    String,
    /// Language keywords (fun, if, while, etc.)
    Keyword,
    /// Builtin function names in call position
    Builtin,
    /// Decimal, hex and binary literals
    Number,
    /// Arrow, word and symbolic operators
    Operator,
}

impl Category {
    /// All categories in precedence order (highest first)
    pub const ALL: [Category; 6] = [
        Category::Comment,
        Category::String,
        Category::Keyword,
        Category::Builtin,
        Category::Number,
        Category::Operator,
    ];

    /// Get the default terminal style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Comment => Style::fg(Color::BrightBlack).with_italic(),
            Category::String => Style::fg(Color::Green),
            Category::Keyword => Style::fg(Color::Magenta).with_bold(),
            Category::Builtin => Style::fg(Color::Blue),
            Category::Number => Style::fg(Color::Cyan),
            Category::Operator => Style::fg(Color::BrightWhite),
        }
    }

    /// Get the lowercase name used in rendered markup
    pub fn name(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Builtin => "builtin",
            Category::Number => "number",
            Category::Operator => "operator",
        }
    }

    /// Parse a category from its markup name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(Category::Comment),
            "string" => Some(Category::String),
            "keyword" => Some(Category::Keyword),
            "builtin" => Some(Category::Builtin),
            "number" => Some(Category::Number),
            "operator" => Some(Category::Operator),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(Category::Comment < Category::String);
        assert!(Category::String < Category::Keyword);
        assert!(Category::Keyword < Category::Builtin);
        assert!(Category::Builtin < Category::Number);
        assert!(Category::Number < Category::Operator);

        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Category::from_name("function"), None);
        assert_eq!(Category::from_name("Comment"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_default_styles_not_empty() {
        for category in Category::ALL {
            assert!(!category.default_style().is_default());
        }
    }
}
