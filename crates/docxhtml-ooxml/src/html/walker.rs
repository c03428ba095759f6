//! Body walk
//!
//! Direct body children are visited in document order. Tables go to the
//! table serializer, ordinary paragraphs become `<p>` elements, and list
//! paragraphs drive a [`ListContext`] that opens and closes nested list
//! scopes as the indent level changes.
//!
//! A table or an ordinary paragraph closes every open list, so a list never
//! spans a table.

use super::inline::render_paragraph_content;
use super::table::render_table;
use super::{RenderContext, FRAGMENT_SEPARATOR};
use crate::document::{Block, Body, Paragraph};
use crate::style::paragraph_style;

/// Deepest list level honored; deeper items are clamped
pub const MAX_LIST_LEVEL: u32 = 8;

/// HTML list element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    Unordered,
    Ordered,
}

impl ListTag {
    /// Tag for a numbered paragraph
    ///
    /// Always unordered: numbering definitions are not among the inputs.
    pub fn for_paragraph(_paragraph: &Paragraph) -> Self {
        ListTag::Unordered
    }

    pub fn open(self) -> &'static str {
        match self {
            ListTag::Unordered => "<ul>",
            ListTag::Ordered => "<ol>",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            ListTag::Unordered => "</ul>",
            ListTag::Ordered => "</ol>",
        }
    }
}

/// Append-only sequence of rendered body fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFragments(Vec<String>);

impl RenderedFragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: impl Into<String>) {
        self.0.push(fragment.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Join the fragments with a blank line
    pub fn into_html(self) -> String {
        self.0.join(FRAGMENT_SEPARATOR)
    }
}

/// Stack of open list scopes
///
/// Each entry is the tag and level of one open scope. Inside a list the
/// depth is always the current level plus one; outside it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContext {
    stack: Vec<(ListTag, u32)>,
}

impl ListContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Level of the innermost open scope
    pub fn current_level(&self) -> Option<u32> {
        self.stack.last().map(|(_, level)| *level)
    }

    /// Move to `level` with `tag`, emitting the list tags this requires
    pub fn enter(&mut self, level: u32, tag: ListTag, out: &mut RenderedFragments) {
        let target = level.min(MAX_LIST_LEVEL);
        if target != level {
            log::debug!("clamping list level {} to {}", level, target);
        }
        let depth = target as usize + 1;

        while self.stack.len() < depth {
            let level = self.stack.len() as u32;
            log::debug!("opening list scope at level {}", level);
            self.stack.push((tag, level));
            out.push(tag.open());
        }
        while self.stack.len() > depth {
            self.close_innermost(out);
        }
        if let Some(&(current, level)) = self.stack.last() {
            if current != tag {
                self.close_innermost(out);
                self.stack.push((tag, level));
                out.push(tag.open());
            }
        }
    }

    /// Close every open scope, innermost first
    pub fn flush(&mut self, out: &mut RenderedFragments) {
        while !self.stack.is_empty() {
            self.close_innermost(out);
        }
    }

    fn close_innermost(&mut self, out: &mut RenderedFragments) {
        if let Some((tag, level)) = self.stack.pop() {
            log::debug!("closing list scope at level {}", level);
            out.push(tag.close());
        }
    }
}

/// Render the body with paragraphs, lists and tables interleaved
pub fn render_body(body: &Body, ctx: &RenderContext<'_>) -> String {
    let mut out = RenderedFragments::new();
    let mut lists = ListContext::new();

    for block in &body.children {
        match block {
            Block::Table(table) => {
                lists.flush(&mut out);
                out.push(render_table(table, ctx));
            }
            Block::Paragraph(paragraph) => match paragraph.numbering() {
                Some(numbering) => {
                    lists.enter(numbering.ilvl, ListTag::for_paragraph(paragraph), &mut out);
                    out.push(format!(
                        "<li>{}</li>",
                        render_paragraph_content(paragraph, ctx)
                    ));
                }
                None => {
                    lists.flush(&mut out);
                    out.push(render_paragraph(paragraph, ctx));
                }
            },
        }
    }
    lists.flush(&mut out);

    out.into_html()
}

/// Render every table in the body, outer tables before nested ones
pub fn render_tables(body: &Body, ctx: &RenderContext<'_>) -> String {
    let mut out = RenderedFragments::new();
    for table in body.tables() {
        out.push(render_table(table, ctx));
    }
    out.into_html()
}

/// Render every paragraph in the body, including those in table cells
pub fn render_paragraphs(body: &Body, ctx: &RenderContext<'_>) -> String {
    let mut out = RenderedFragments::new();
    for paragraph in body.paragraphs() {
        out.push(render_paragraph(paragraph, ctx));
    }
    out.into_html()
}

fn render_paragraph(paragraph: &Paragraph, ctx: &RenderContext<'_>) -> String {
    format!(
        r#"<p style="{}">{}</p>"#,
        paragraph_style(paragraph.properties.as_ref()),
        render_paragraph_content(paragraph, ctx)
    )
}
