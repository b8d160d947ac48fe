//! Levython language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Category;

/// Reserved words
pub const KEYWORDS: &[&str] = &[
    "fun", "act", "if", "then", "else", "elif", "for", "while", "do", "in", "range", "end",
    "true", "false", "null", "return", "break", "continue", "ask",
];

/// Builtin functions, highlighted only in call position
pub const BUILTINS: &[&str] = &[
    "say", "str", "len", "append", "read_file", "write_file", "file_exists", "mem_alloc",
    "mem_free", "mem_read32", "mem_write32", "tensor", "tensor_dot", "tensor_mean", "bit_and",
    "bit_or", "shift_left", "simd_add_f32", "int", "float", "type", "abs", "round", "min", "max",
    "sum", "print", "println", "upper", "lower", "trim", "split", "join", "replace", "sorted",
    "reversed", "sqrt", "pow", "floor", "ceil", "contains", "find", "startswith", "endswith",
    "time", "gc", "memory", "clear", "remove", "popcount",
];

/// Operators spelled as words
pub const WORD_OPERATORS: &[&str] = &["and", "or", "not"];

/// Create the Levython language definition
///
/// Rules run over HTML-escaped text, so `<`, `>` and `&` are matched
/// in their entity forms as well as raw.
pub fn levython_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Levython");

    // Comments, up to but not including any line terminator
    lang.add_rule(PatternRule::new("comment", r"#[^\r\n]*", Category::Comment)?);

    // Strings (with escape support)
    lang.add_rule(PatternRule::new(
        "string",
        r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
        Category::String,
    )?);

    // Keywords
    lang.add_rule(PatternRule::new("keyword", &word_pattern(KEYWORDS), Category::Keyword)?);

    // Builtins: the name only, the call paren stays unclaimed
    let builtins = format!(r"\b({})\s*\(", BUILTINS.join("|"));
    lang.add_rule(PatternRule::with_group("builtin", &builtins, Category::Builtin, 1)?);

    // Numbers
    lang.add_rule(PatternRule::new(
        "number",
        r"\b(?:0x[0-9a-fA-F]+|0b[01]+|[0-9]+\.?[0-9]*)\b",
        Category::Number,
    )?);

    // Operators: arrows before anything containing a bare dash
    lang.add_rule(PatternRule::new("arrow", r"&lt;-|<-|-&gt;|->", Category::Operator)?);
    lang.add_rule(PatternRule::new(
        "word_operator",
        &word_pattern(WORD_OPERATORS),
        Category::Operator,
    )?);
    lang.add_rule(PatternRule::new(
        "operator",
        r"&lt;&lt;|&gt;&gt;|&lt;=|&gt;=|<<|>>|<=|>=|==|!=|\+=|-=|\*=|/=|\+|-|\*|/|%|&amp;|\||\^|~",
        Category::Operator,
    )?);

    Ok(lang)
}

/// Build a whole-word alternation
fn word_pattern(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::span::Span;

    fn spans(text: &str) -> Vec<(&str, Category)> {
        let lang = levython_language().unwrap();
        lang.classify(text)
            .iter()
            .map(|s| (&text[s.start..s.end], s.category))
            .collect()
    }

    #[test]
    fn test_language_builds() {
        let lang = levython_language().unwrap();
        assert_eq!(lang.name, "Levython");
    }

    #[test]
    fn test_comment_stops_before_crlf() {
        assert_eq!(
            spans("# c\r\nif 1\r\n"),
            vec![
                ("# c", Category::Comment),
                ("if", Category::Keyword),
                ("1", Category::Number),
            ]
        );
        assert_eq!(spans("x # lone cr\ry"), vec![("# lone cr", Category::Comment)]);
    }

    #[test]
    fn test_comment_covers_line() {
        let lang = levython_language().unwrap();
        let tokens = lang.classify("# hello");
        assert_eq!(tokens.spans(), &[Span::new(0, 7, Category::Comment)]);
    }

    #[test]
    fn test_keyword_inside_string() {
        assert_eq!(spans(r#""if""#), vec![(r#""if""#, Category::String)]);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let text = r#"say("a \" if") + 'b\'c'"#;
        assert_eq!(
            spans(text),
            vec![
                ("say", Category::Builtin),
                (r#""a \" if""#, Category::String),
                ("+", Category::Operator),
                (r"'b\'c'", Category::String),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_is_plain() {
        assert_eq!(
            spans(r#"x = "open if 1"#),
            vec![("if", Category::Keyword), ("1", Category::Number)]
        );
    }

    #[test]
    fn test_builtin_needs_call() {
        assert_eq!(spans("say(1)"), vec![("say", Category::Builtin), ("1", Category::Number)]);
        assert_eq!(spans("say 1"), vec![("1", Category::Number)]);
        assert_eq!(spans("len  (x)"), vec![("len", Category::Builtin)]);
        // Part of a longer identifier
        assert!(spans("essay(x)").is_empty());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            spans("0x1F + 2"),
            vec![
                ("0x1F", Category::Number),
                ("+", Category::Operator),
                ("2", Category::Number),
            ]
        );
        assert_eq!(
            spans("3.14 0b101 10"),
            vec![
                ("3.14", Category::Number),
                ("0b101", Category::Number),
                ("10", Category::Number),
            ]
        );
        assert!(spans("x1").is_empty());
    }

    #[test]
    fn test_arrow_not_split() {
        assert_eq!(spans("x -&gt; y"), vec![("-&gt;", Category::Operator)]);
        assert_eq!(spans("x &lt;- y"), vec![("&lt;-", Category::Operator)]);
        assert_eq!(spans("a - b"), vec![("-", Category::Operator)]);
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(
            spans("a += b &lt;&lt; 2"),
            vec![
                ("+=", Category::Operator),
                ("&lt;&lt;", Category::Operator),
                ("2", Category::Number),
            ]
        );
        assert_eq!(spans("a &amp; b"), vec![("&amp;", Category::Operator)]);
    }

    #[test]
    fn test_word_operators() {
        assert_eq!(
            spans("not a and b or c"),
            vec![
                ("not", Category::Operator),
                ("and", Category::Operator),
                ("or", Category::Operator),
            ]
        );
        assert!(spans("order").is_empty());
    }

    #[test]
    fn test_hash_in_string_starts_comment() {
        // Comments claim text before strings do
        assert_eq!(
            spans(r#"say("a # b")"#),
            vec![("say", Category::Builtin), (r#"# b")"#, Category::Comment)]
        );
    }

    #[test]
    fn test_function_definition() {
        let text = "fun add(a, b) -&gt; a + b  # sum\nend";
        assert_eq!(
            spans(text),
            vec![
                ("fun", Category::Keyword),
                ("-&gt;", Category::Operator),
                ("+", Category::Operator),
                ("# sum", Category::Comment),
                ("end", Category::Keyword),
            ]
        );
    }
}
