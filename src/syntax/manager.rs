//! Syntax highlighting manager
//!
//! The Highlighter owns the compiled Levython definition and the
//! settings that shape its output, and runs escape, classify and render
//! for one snippet at a time.

use std::borrow::Cow;

use super::escape::escape;
use super::language::LanguageDefinition;
use super::levython::levython_language;
use super::span::TokenSet;
use crate::config::Config;
use crate::error::Result;
use crate::render::{render_ansi, render_html, RenderOptions};

/// An escaped snippet together with its claimed spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    /// Escaped snippet text; span offsets index into this
    pub text: Cow<'a, str>,
    /// Spans claimed by the classifier
    pub tokens: TokenSet,
}

/// Main syntax highlighter
pub struct Highlighter {
    language: LanguageDefinition,
    options: RenderOptions,
    marker_class: String,
    /// Whether syntax highlighting is enabled
    pub enabled: bool,
}

impl Highlighter {
    /// Create a highlighter with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Create a highlighter from configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            language: levython_language()?,
            options: RenderOptions {
                class_prefix: config.class_prefix.clone(),
            },
            marker_class: config.marker_class.clone(),
            enabled: config.enabled,
        })
    }

    /// Class that marks an element as already highlighted
    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    /// Escape a snippet and classify it
    ///
    /// Yields no spans when highlighting is disabled.
    pub fn highlight<'a>(&self, source: &'a str) -> Highlighted<'a> {
        let text = escape(source);
        let tokens = if self.enabled {
            self.language.classify(&text)
        } else {
            TokenSet::new()
        };
        Highlighted { text, tokens }
    }

    /// Highlight a snippet to HTML markup
    pub fn to_html(&self, source: &str) -> String {
        let highlighted = self.highlight(source);
        render_html(&highlighted.text, highlighted.tokens.spans(), &self.options)
    }

    /// Highlight a snippet for terminal display
    pub fn to_ansi(&self, source: &str) -> String {
        let highlighted = self.highlight(source);
        render_ansi(&highlighted.text, highlighted.tokens.spans())
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}
