//! Syntax highlighting module
//!
//! This module provides the Levython tokenizer:
//! - HTML escaping of snippet text
//! - Precedence-ordered classification into non-overlapping spans
//! - Terminal styles for each category

mod escape;
mod language;
mod levython;
mod manager;
mod rules;
mod span;
mod style;
mod tokens;

pub use escape::{escape, is_already_escaped, text_content, unescape};
pub use language::LanguageDefinition;
pub use levython::{levython_language, BUILTINS, KEYWORDS, WORD_OPERATORS};
pub use manager::{Highlighted, Highlighter};
pub use rules::PatternRule;
pub use span::{Span, TokenSet};
pub use style::{Color, Style};
pub use tokens::Category;
