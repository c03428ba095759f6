//! HTML serialization of the typed document model
//!
//! - [`inline`]: runs and hyperlinks
//! - [`table`]: tables, rows and cells
//! - [`walker`]: the body walk with list scopes
//!
//! Every serializer takes a [`RenderContext`] bundling the relationship
//! resolver, the text normalizer and caller options.

pub mod inline;
pub mod table;
pub mod walker;

pub use inline::{
    render_cell_content, render_hyperlink, render_paragraph_content, render_run, CellContent,
};
pub use table::render_table;
pub use walker::{
    render_body, render_paragraphs, render_tables, ListContext, ListTag, RenderedFragments,
};

use std::fmt;

use crate::normalize::{HtmlEscaper, TextNormalizer};
use crate::relationships::RelationshipResolver;

/// Font shorthand applied to every rendered table
pub const DEFAULT_TABLE_FONT: &str = "10pt Times New Roman, Times, Serif";

/// Separator between body-level fragments
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

static DEFAULT_ESCAPER: HtmlEscaper = HtmlEscaper;

/// Caller-tunable rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// CSS `font` shorthand for `<table>` elements
    pub table_font: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_font: DEFAULT_TABLE_FONT.to_string(),
        }
    }
}

/// Shared inputs for one conversion pass
pub struct RenderContext<'a> {
    pub resolver: &'a RelationshipResolver<'a>,
    pub normalizer: &'a dyn TextNormalizer,
    pub options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        resolver: &'a RelationshipResolver<'a>,
        normalizer: &'a dyn TextNormalizer,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            resolver,
            normalizer,
            options,
        }
    }

    /// Context using [`HtmlEscaper`] for text
    pub fn with_defaults(
        resolver: &'a RelationshipResolver<'a>,
        options: &'a RenderOptions,
    ) -> Self {
        Self::new(resolver, &DEFAULT_ESCAPER, options)
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("resolver", &self.resolver)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
