//! HTML escaping for snippet text
//!
//! Snippets are escaped before classification so that wrapping spans in
//! markup later can never be confused with the snippet's own `<`, `>`
//! and `&` characters.

use std::borrow::Cow;

/// Check whether text looks like it was already escaped
///
/// This only looks for literal `&lt;` / `&gt;`. Source text that
/// genuinely contains those sequences is misdetected.
pub fn is_already_escaped(text: &str) -> bool {
    text.contains("&lt;") || text.contains("&gt;")
}

/// Escape `&`, `<` and `>` as entities
///
/// Returns the input unchanged when it already contains `&lt;` or `&gt;`.
pub fn escape(text: &str) -> Cow<'_, str> {
    if is_already_escaped(text) || !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Reverse `escape`
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    // &amp; last so "&amp;lt;" comes back as "&lt;"
    Cow::Owned(
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Text content of an HTML fragment
///
/// Drops tags and decodes character references, the way a browser
/// reports an element's text. Unknown or malformed references are
/// kept literally.
pub fn text_content(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(idx) = rest.find(['<', '&']) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        if rest.starts_with('<') {
            match rest.find('>') {
                Some(close) => rest = &rest[close + 1..],
                None => {
                    out.push_str(rest);
                    rest = "";
                }
            }
            continue;
        }

        match decode_entity(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode one character reference at the start of `text`
///
/// Returns the character and the number of bytes consumed.
fn decode_entity(text: &str) -> Option<(char, usize)> {
    // Longest reference we recognise is "&#x10FFFF;"
    let end = text.char_indices().take(11).find(|&(_, c)| c == ';')?.0;
    let name = &text[1..end];

    let ch = match name {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            // Digits only: the integer parsers would also take a sign
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                u32::from_str_radix(hex, 16).ok()?
            } else {
                let digits = name.strip_prefix('#')?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.parse::<u32>().ok()?
            };
            char::from_u32(code)?
        }
    };

    Some((ch, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape("x <- y"), "x &lt;- y");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape("say(1)"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_ampersand_first() {
        // A literal entity in the source is escaped, not preserved
        assert_eq!(escape("&amp; <"), "&amp;amp; &lt;");
    }

    #[test]
    fn test_escape_skips_already_escaped() {
        let text = "a &lt; b & c";
        assert!(is_already_escaped(text));
        assert_eq!(escape(text), text);
        assert_eq!(escape(&escape("1 -> 2")), "1 -&gt; 2");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("x -&gt; y &amp;&amp; a &lt;- b"), "x -> y && a <- b");
        assert_eq!(unescape("&amp;lt;"), "&lt;");
        assert_eq!(unescape(&escape("if a < b & c")), "if a < b & c");
    }

    #[test]
    fn test_text_content() {
        assert_eq!(text_content("a &lt; b"), "a < b");
        assert_eq!(
            text_content(r#"<span class="keyword">if</span> x &amp;&amp; y"#),
            "if x && y"
        );
        assert_eq!(text_content("&quot;hi&#39; &#x41;"), "\"hi' A");
        assert_eq!(text_content("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_text_content_malformed() {
        assert_eq!(text_content("a & b"), "a & b");
        assert_eq!(text_content("&bogus; x"), "&bogus; x");
        // Unclosed tag is kept as text
        assert_eq!(text_content("1 < 2"), "1 < 2");
        assert_eq!(text_content("&#xZZ;"), "&#xZZ;");
    }

    #[test]
    fn test_text_content_signed_reference_kept() {
        assert_eq!(text_content("&#+65;"), "&#+65;");
        assert_eq!(text_content("&#x+41;"), "&#x+41;");
        assert_eq!(text_content("&#65;"), "A");
    }
}
