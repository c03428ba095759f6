//! Text normalization hooks
//!
//! Literal `w:t` content passes through a [`TextNormalizer`] before it is
//! placed in HTML. The default [`HtmlEscaper`] only escapes markup
//! characters; callers that fold Unicode or apply their own entity policy
//! plug in a closure instead.

/// Non-breaking space entity used for empty runs and blank cells
pub const NBSP: &str = "&#160;";

/// Turns raw document text into HTML-safe text
pub trait TextNormalizer {
    fn normalize(&self, text: &str) -> String;
}

impl<F> TextNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}

/// Escapes `&`, `<` and `>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl TextNormalizer for HtmlEscaper {
    fn normalize(&self, text: &str) -> String {
        escape_html(text)
    }
}

/// Escape markup characters in text content
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a value placed inside a double-quoted attribute
pub(crate) fn escape_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Numeric entities for en and em dashes in table cells
pub(crate) fn encode_dashes(html: &str) -> String {
    html.replace('\u{2013}', "&#8211;")
        .replace('\u{2014}', "&#8212;")
}

/// Rendered HTML with tags removed and `&#160;` read as a space
pub(crate) fn visible_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace(NBSP, " ")
}

/// Whether rendered cell HTML shows nothing but whitespace
pub(crate) fn is_blank(html: &str) -> bool {
    visible_text(html).trim().is_empty()
}
