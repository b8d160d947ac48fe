//! levython-highlight - syntax highlighting for Levython snippets
//!
//! Snippets are HTML-escaped, classified into comment, string, keyword,
//! builtin, number and operator spans in a fixed precedence order, and
//! rendered as `<span class="...">` markup or as styled terminal text.

pub mod config;
pub mod document;
pub mod error;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use document::{
    highlight_all, highlight_element, mark_processed, should_process, CodeBlock, CodeElement,
    HighlightReport, HtmlPage, PageBlock,
};
pub use error::{HighlightError, Result};
pub use render::{render_ansi, render_html, RenderOptions};
pub use syntax::{Category, Highlighter, Span, TokenSet};
