//! Runs, hyperlinks and cell text

use super::RenderContext;
use crate::document::{Hyperlink, Paragraph, ParagraphChild, Run, RunChild, TableCell};
use crate::normalize::{encode_dashes, escape_attribute, is_blank, TextNormalizer, NBSP};
use crate::style::{is_bold, run_style};

const LINE_BREAK: &str = "<br/>";

/// Render a run as styled inline HTML
///
/// An empty run becomes `&#160;`. Bold runs are wrapped in `<b>`, and any
/// run with declarations in a `<span style>`.
pub fn render_run(run: &Run, normalizer: &dyn TextNormalizer) -> String {
    let mut text = run_text(run, normalizer);
    if text.is_empty() {
        text.push_str(NBSP);
    }

    let Some(props) = run.properties.as_ref() else {
        return text;
    };

    if is_bold(props) {
        text = format!("<b>{}</b>", text);
    }
    let style = run_style(props);
    if !style.is_empty() {
        text = format!(r#"<span style="{}">{}</span>"#, style, text);
    }
    text
}

/// Render a hyperlink and its runs as an anchor
///
/// An external target that cannot be resolved leaves `href` empty.
pub fn render_hyperlink(link: &Hyperlink, ctx: &RenderContext<'_>) -> String {
    let href = hyperlink_target(link, ctx);
    let content: String = link
        .runs
        .iter()
        .map(|run| render_run(run, ctx.normalizer))
        .collect();
    format!(r#"<a href="{}">{}</a>"#, escape_attribute(&href), content)
}

/// Inline HTML for a paragraph's runs and hyperlinks, in order
pub fn render_paragraph_content(paragraph: &Paragraph, ctx: &RenderContext<'_>) -> String {
    paragraph
        .children
        .iter()
        .map(|child| match child {
            ParagraphChild::Run(run) => render_run(run, ctx.normalizer),
            ParagraphChild::Hyperlink(link) => render_hyperlink(link, ctx),
        })
        .collect()
}

/// Rendered cell content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    /// HTML placed inside the `<td>`
    pub html: String,
    /// Whether the cell shows no visible text
    pub blank: bool,
}

/// Render the paragraphs directly inside a table cell
///
/// Cells use a lighter form than body text: runs get a span only when they
/// carry declarations and real text, hyperlinks contribute their runs
/// without an anchor, and a blank cell renders as `&#160;`. A line break
/// counts as content.
pub fn render_cell_content(cell: &TableCell, normalizer: &dyn TextNormalizer) -> CellContent {
    let mut html = String::new();
    let mut visible = String::new();
    let mut has_break = false;

    for run in cell.paragraphs().flat_map(|p| p.runs()) {
        let text = run_text(run, normalizer);
        visible.push_str(&text);
        has_break |= run.children.contains(&RunChild::Break);

        if text.is_empty() {
            html.push_str(NBSP);
            continue;
        }
        let style = run.properties.as_ref().map(run_style).unwrap_or_default();
        if style.is_empty() || text.trim() == NBSP {
            html.push_str(&text);
        } else {
            html.push_str(&format!(r#"<span style="{}">{}</span>"#, style, text));
        }
    }

    if !has_break && is_blank(&visible) {
        return CellContent {
            html: NBSP.to_string(),
            blank: true,
        };
    }
    CellContent {
        html: encode_dashes(&html),
        blank: false,
    }
}

fn run_text(run: &Run, normalizer: &dyn TextNormalizer) -> String {
    let mut text = String::new();
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&normalizer.normalize(t)),
            RunChild::Break => text.push_str(LINE_BREAK),
        }
    }
    text
}

fn hyperlink_target(link: &Hyperlink, ctx: &RenderContext<'_>) -> String {
    let fragment = link.anchor.as_deref().filter(|a| !a.is_empty());

    match link.rel_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => match ctx.resolver.resolve(id) {
            Some(target) => match fragment {
                Some(anchor) => format!("{}#{}", target, anchor),
                None => target.to_string(),
            },
            None => {
                log::warn!("hyperlink relationship {} not found; rendering empty target", id);
                String::new()
            }
        },
        None => fragment.map(|a| format!("#{}", a)).unwrap_or_default(),
    }
}
