//! Pattern rules for syntax highlighting
//!
//! A rule pairs a compiled regex with the category it claims. Rules
//! only ever search inside unclaimed gaps of the text.

use std::ops::Range;

use regex::Regex;

use super::tokens::Category;
use crate::error::Result;

/// A single pattern rule
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category to assign to matches
    pub category: Category,
    /// Capture group holding the claimed text (0 = whole match)
    pub group: usize,
}

impl PatternRule {
    /// Create a new pattern rule claiming the whole match
    pub fn new(name: &str, pattern: &str, category: Category) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: Regex::new(pattern)?,
            category,
            group: 0,
        })
    }

    /// Create a rule that claims only one capture group of each match
    ///
    /// Used where the pattern needs trailing context that must stay
    /// unclaimed, e.g. the `(` after a builtin name.
    pub fn with_group(name: &str, pattern: &str, category: Category, group: usize) -> Result<Self> {
        let mut rule = Self::new(name, pattern, category)?;
        rule.group = group;
        Ok(rule)
    }

    /// Find all non-overlapping matches inside `gap`, leftmost first
    ///
    /// Text before the gap is visible to anchors and word boundaries,
    /// but no match may run past `gap.end`.
    pub fn matches_in(&self, text: &str, gap: Range<usize>) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        if gap.start >= gap.end || gap.end > text.len() {
            return found;
        }

        let haystack = &text[..gap.end];
        let mut pos = gap.start;
        while pos < gap.end {
            let Some(caps) = self.pattern.captures_at(haystack, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if let Some(claimed) = caps.get(self.group) {
                if !claimed.is_empty() {
                    found.push(claimed.start()..claimed.end());
                }
            }

            pos = if whole.end() > whole.start() {
                whole.end()
            } else {
                // Empty match: step over one character
                whole.end() + haystack[whole.end()..].chars().next().map_or(1, char::len_utf8)
            };
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", Category::Number).unwrap();
        assert_eq!(rule.matches_in("abc 123 def 45", 0..14), vec![4..7, 12..14]);
        assert_eq!(rule.matches_in("abc 123 def", 5..11), vec![5..7]);
        assert!(rule.matches_in("no numbers", 0..10).is_empty());
    }

    #[test]
    fn test_match_stops_at_gap_end() {
        let rule = PatternRule::new("number", r"\d+", Category::Number).unwrap();
        // "12345" with only the first three bytes unclaimed
        assert_eq!(rule.matches_in("12345", 0..3), vec![0..3]);
    }

    #[test]
    fn test_word_boundary_sees_preceding_text() {
        let rule = PatternRule::new("keyword", r"\bif\b", Category::Keyword).unwrap();
        // "xif": the gap starts at 'i' but 'x' still blocks the boundary
        assert!(rule.matches_in("xif", 1..3).is_empty());
        assert_eq!(rule.matches_in(" if", 1..3), vec![1..3]);
    }

    #[test]
    fn test_group_rule() {
        let rule =
            PatternRule::with_group("builtin", r"\b(say)\s*\(", Category::Builtin, 1).unwrap();
        assert_eq!(rule.matches_in("say (1)", 0..7), vec![0..3]);
        assert!(rule.matches_in("say 1", 0..5).is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new("broken", r"(unclosed", Category::Operator).is_err());
    }
}
