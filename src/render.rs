//! Rendering of classified snippets
//!
//! Rendering happens in two passes: the text and its spans are first
//! walked into fragments (category, text) in document order, then each
//! fragment is written out as HTML or as styled terminal text.

use crate::syntax::{unescape, Category, Span};

/// Options for HTML rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepended to the category name in each span's class attribute
    pub class_prefix: String,
}

/// Split text into fragments following the spans
///
/// Unclaimed runs come back with `None`. Spans are expected sorted and
/// disjoint; a span that starts before the end of the previous one, is
/// empty, or lies outside the text is dropped, and offsets that are not
/// on a char boundary are moved inwards to the nearest one.
pub fn fragments<'t>(text: &'t str, spans: &[Span]) -> Vec<(Option<Category>, &'t str)> {
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;

    for span in spans {
        let start = find_safe_boundary(text, span.start, true);
        let end = find_safe_boundary(text, span.end, false);
        if start < pos || start >= end {
            continue;
        }
        if start > pos {
            out.push((None, &text[pos..start]));
        }
        out.push((Some(span.category), &text[start..end]));
        pos = end;
    }

    if pos < text.len() {
        out.push((None, &text[pos..]));
    }
    out
}

/// Render escaped text as HTML with one `<span>` per claimed range
///
/// The text is written verbatim; it must already be escaped.
pub fn render_html(text: &str, spans: &[Span], options: &RenderOptions) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 32);

    for (category, fragment) in fragments(text, spans) {
        match category {
            Some(category) => {
                out.push_str("<span class=\"");
                out.push_str(&options.class_prefix);
                out.push_str(category.name());
                out.push_str("\">");
                out.push_str(fragment);
                out.push_str("</span>");
            }
            None => out.push_str(fragment),
        }
    }

    out
}

/// Render escaped text for a terminal
///
/// Entities are decoded back to plain characters and each claimed range
/// gets its category's default style.
pub fn render_ansi(text: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 16);

    for (category, fragment) in fragments(text, spans) {
        let plain = unescape(fragment);
        match category {
            Some(category) => {
                let styled = category.default_style().to_content_style().apply(plain);
                out.push_str(&styled.to_string());
            }
            None => out.push_str(&plain),
        }
    }

    out
}

/// Find a safe UTF-8 boundary near the given byte offset
/// If forward is true, search forward; otherwise search backward
fn find_safe_boundary(s: &str, offset: usize, forward: bool) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    let mut pos = offset;
    if forward {
        while pos < s.len() && !s.is_char_boundary(pos) {
            pos += 1;
        }
    } else {
        while pos > 0 && !s.is_char_boundary(pos) {
            pos -= 1;
        }
    }
    pos
}
