//! Code elements and the page-level entry point
//!
//! A code element holds one snippet and may carry a marker class saying
//! it has already been highlighted. `highlight_all` processes every
//! unmarked element once; an element that fails is logged and left as
//! it was, and the rest carry on.

use std::ops::Range;

use regex::Regex;

use crate::error::{HighlightError, Result};
use crate::syntax::{escape, text_content, Highlighter};

/// A display element holding one code snippet
pub trait CodeElement {
    /// Text of the snippet as a reader sees it
    fn text_content(&self) -> String;

    /// Check for a class on the element
    fn has_class(&self, class: &str) -> bool;

    /// Add a class to the element
    fn add_class(&mut self, class: &str);

    /// Replace the element's content with rendered markup
    fn replace_content(&mut self, markup: String) -> Result<()>;
}

/// Outcome of one `highlight_all` pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightReport {
    /// Elements highlighted in this pass
    pub processed: usize,
    /// Elements already carrying the marker class
    pub skipped: usize,
    /// Elements whose content could not be replaced
    pub failed: usize,
}

/// Check whether an element still needs highlighting
pub fn should_process<E: CodeElement + ?Sized>(element: &E, marker_class: &str) -> bool {
    !element.has_class(marker_class)
}

/// Mark an element as highlighted
pub fn mark_processed<E: CodeElement + ?Sized>(element: &mut E, marker_class: &str) {
    if !element.has_class(marker_class) {
        element.add_class(marker_class);
    }
}

/// Highlight one element and mark it
///
/// The marker is only set once the new content is in place.
pub fn highlight_element<E: CodeElement + ?Sized>(
    element: &mut E,
    highlighter: &Highlighter,
) -> Result<()> {
    let markup = highlighter.to_html(&element.text_content());
    element.replace_content(markup)?;
    mark_processed(element, highlighter.marker_class());
    Ok(())
}

/// Highlight every element that has not been highlighted yet
///
/// Does nothing when the highlighter is disabled.
pub fn highlight_all<'e, E, I>(elements: I, highlighter: &Highlighter) -> HighlightReport
where
    E: CodeElement + ?Sized + 'e,
    I: IntoIterator<Item = &'e mut E>,
{
    let mut report = HighlightReport::default();
    if !highlighter.enabled {
        tracing::debug!("Highlighting disabled, leaving code elements untouched");
        return report;
    }

    for (idx, element) in elements.into_iter().enumerate() {
        if !should_process(&*element, highlighter.marker_class()) {
            report.skipped += 1;
            continue;
        }
        match highlight_element(element, highlighter) {
            Ok(()) => {
                tracing::debug!("Highlighted code element {}", idx);
                report.processed += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping code element {}: {}", idx, e);
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        "Highlighted {} code element(s), {} already done, {} failed",
        report.processed,
        report.skipped,
        report.failed
    );
    report
}

/// An in-memory code element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    text: String,
    html: Option<String>,
    classes: Vec<String>,
}

impl CodeBlock {
    /// Create an element holding raw snippet text
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            html: None,
            classes: Vec::new(),
        }
    }

    /// Builder: add a class
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Current markup of the element
    pub fn inner_html(&self) -> String {
        match &self.html {
            Some(html) => html.clone(),
            None => escape(&self.text).into_owned(),
        }
    }

    /// Classes on the element
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl CodeElement for CodeBlock {
    fn text_content(&self) -> String {
        self.text.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        self.classes.push(class.to_string());
    }

    fn replace_content(&mut self, markup: String) -> Result<()> {
        self.html = Some(markup);
        Ok(())
    }
}

/// A `<pre><code>` block found in an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlock {
    /// `<pre ...> <code` up to the code element's attributes
    open: String,
    /// Attributes of the `<code>` tag, leading whitespace included
    attrs: String,
    inner_html: String,
    /// Closing tag as written in the source
    close: String,
}

impl PageBlock {
    /// Current markup inside the `<code>` element
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    fn class_attr(&self) -> Option<ClassAttr> {
        find_class_attr(&self.attrs)
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(&self.open);
        out.push_str(&self.attrs);
        out.push('>');
        out.push_str(&self.inner_html);
        out.push_str(&self.close);
    }
}

impl CodeElement for PageBlock {
    fn text_content(&self) -> String {
        text_content(&self.inner_html)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_attr()
            .is_some_and(|attr| self.attrs[attr.value].split_whitespace().any(|c| c == class))
    }

    fn add_class(&mut self, class: &str) {
        let Some(attr) = self.class_attr() else {
            self.attrs.push_str(&format!(" class=\"{}\"", class));
            return;
        };
        let current = self.attrs[attr.value.clone()].trim();
        if attr.quoted {
            let insert = if current.is_empty() {
                class.to_string()
            } else {
                format!(" {}", class)
            };
            self.attrs.insert_str(attr.value.end, &insert);
        } else {
            // Rewrite unquoted or missing values in quoted form
            let value = if current.is_empty() {
                format!("=\"{}\"", class)
            } else {
                format!("=\"{} {}\"", current, class)
            };
            self.attrs.replace_range(attr.name_end..attr.end, &value);
        }
    }

    fn replace_content(&mut self, markup: String) -> Result<()> {
        if markup.to_ascii_lowercase().contains("</code") {
            return Err(HighlightError::Element(
                "rendered markup would close the code element early".to_string(),
            ));
        }
        self.inner_html = markup;
        Ok(())
    }
}

/// Where the `class` attribute sits in a tag's attribute text
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassAttr {
    /// End of the attribute name
    name_end: usize,
    /// Value, quotes excluded
    value: Range<usize>,
    quoted: bool,
    /// End of the whole attribute, closing quote included
    end: usize,
}

/// Find the first `class` attribute in a tag's attribute text
///
/// Follows HTML attribute syntax: whitespace may surround `=`, values
/// may be double quoted, single quoted or bare, and a name may appear
/// with no value at all. Text inside another attribute's value is
/// never taken for a name.
fn find_class_attr(attrs: &str) -> Option<ClassAttr> {
    let bytes = attrs.as_bytes();
    let len = bytes.len();
    let skip_space = |mut pos: usize| {
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        pos
    };

    let mut pos = 0;
    while pos < len {
        pos = skip_space(pos);
        let name_start = pos;
        while pos < len
            && !bytes[pos].is_ascii_whitespace()
            && bytes[pos] != b'='
            && bytes[pos] != b'/'
        {
            pos += 1;
        }
        let name_end = pos;
        if name_start == name_end {
            // Stray '=' or '/'
            pos += 1;
            continue;
        }

        let after_name = skip_space(name_end);
        let (value, quoted, end) = if bytes.get(after_name) == Some(&b'=') {
            let start = skip_space(after_name + 1);
            match bytes.get(start) {
                Some(&quote) if quote == b'"' || quote == b'\'' => {
                    let close = attrs[start + 1..]
                        .find(quote as char)
                        .map_or(len, |idx| start + 1 + idx);
                    (start + 1..close, true, (close + 1).min(len))
                }
                _ => {
                    let mut end = start;
                    while end < len && !bytes[end].is_ascii_whitespace() {
                        end += 1;
                    }
                    (start..end, false, end)
                }
            }
        } else {
            (name_end..name_end, false, name_end)
        };

        if attrs[name_start..name_end].eq_ignore_ascii_case("class") {
            return Some(ClassAttr {
                name_end,
                value,
                quoted,
                end,
            });
        }
        pos = end;
    }
    None
}

/// An HTML document split around its `<pre><code>` blocks
///
/// Text outside the blocks is kept byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    /// Literal text around the blocks; always one more than `blocks`
    between: Vec<String>,
    blocks: Vec<PageBlock>,
}

impl HtmlPage {
    /// Split a document into literal text and code blocks
    pub fn parse(source: &str) -> Result<Self> {
        let pattern = Regex::new(r"(?is)(<pre\b[^>]*>\s*<code)(\b[^>]*)>(.*?)(</code>)")?;

        let mut between = Vec::new();
        let mut blocks = Vec::new();
        let mut pos = 0;
        for caps in pattern.captures_iter(source) {
            let (Some(whole), Some(open), Some(attrs), Some(inner), Some(close)) = (
                caps.get(0),
                caps.get(1),
                caps.get(2),
                caps.get(3),
                caps.get(4),
            ) else {
                continue;
            };
            between.push(source[pos..whole.start()].to_string());
            blocks.push(PageBlock {
                open: open.as_str().to_string(),
                attrs: attrs.as_str().to_string(),
                inner_html: inner.as_str().to_string(),
                close: close.as_str().to_string(),
            });
            pos = whole.end();
        }
        between.push(source[pos..].to_string());

        tracing::debug!("Found {} code block(s) in page", blocks.len());
        Ok(Self { between, blocks })
    }

    /// Code blocks in document order
    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    /// Mutable code blocks in document order
    pub fn blocks_mut(&mut self) -> &mut [PageBlock] {
        &mut self.blocks
    }

    /// Highlight every code block not yet marked
    pub fn highlight(&mut self, highlighter: &Highlighter) -> HighlightReport {
        highlight_all(self.blocks.iter_mut(), highlighter)
    }

    /// Reassemble the document
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (idx, text) in self.between.iter().enumerate() {
            out.push_str(text);
            if let Some(block) = self.blocks.get(idx) {
                block.write_to(&mut out);
            }
        }
        out
    }
}
