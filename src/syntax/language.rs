//! Language definitions for syntax highlighting
//!
//! A LanguageDefinition holds pattern rules in precedence order and
//! classifies text by letting each rule claim matches in the ranges
//! no earlier rule has claimed.

use super::rules::PatternRule;
use super::span::{Span, TokenSet};

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Language name (e.g., "Levython")
    pub name: String,
    /// Pattern rules, sorted by category precedence
    pub rules: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Add a pattern rule
    ///
    /// Rules of the same category keep their insertion order.
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
        self.rules.sort_by_key(|r| r.category);
    }

    /// Classify text into sorted, non-overlapping spans
    ///
    /// Each rule sees only the gaps left by the rules before it, so a
    /// lower-precedence category can never claim text inside a
    /// higher-precedence span.
    pub fn classify(&self, text: &str) -> TokenSet {
        let mut tokens = TokenSet::new();
        if text.is_empty() {
            return tokens;
        }

        for rule in &self.rules {
            for gap in tokens.gaps(text.len()) {
                for range in rule.matches_in(text, gap) {
                    tokens.claim(Span::new(range.start, range.end, rule.category));
                }
            }
        }

        tokens
    }
}
