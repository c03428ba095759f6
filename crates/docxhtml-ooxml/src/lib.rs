//! # docxhtml-ooxml
//!
//! WordprocessingML body to HTML with inline CSS.
//!
//! This crate provides functionality to:
//! - Read the main document part of a DOCX package (zipped or extracted)
//! - Parse the body into paragraphs, lists, tables, runs and hyperlinks
//! - Translate run, paragraph, row and cell properties into CSS
//! - Emit an HTML fragment, either interleaved or restricted to tables or text
//!
//! ## Example: Converting a Package
//!
//! ```no_run
//! use docxhtml_ooxml::{ConversionMode, Converter, OoxmlArchive};
//!
//! let archive = OoxmlArchive::open("report.docx")?;
//! let html = Converter::new(ConversionMode::Auto).convert_archive(&archive)?;
//! println!("{}", html);
//! # Ok::<(), docxhtml_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod convert;
pub mod document;
pub mod error;
pub mod html;
pub mod namespaces;
pub mod normalize;
pub mod relationships;
pub mod style;
pub mod xml;

#[cfg(test)]
mod test_utils;

pub use archive::OoxmlArchive;
pub use convert::{convert, ConversionMode, Converter};
pub use document::{
    Block, Body, Hyperlink, NumberingRef, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCell, TableRow,
};
pub use error::{OoxmlError, Result};
pub use html::{RenderContext, RenderOptions};
pub use namespaces::Namespaces;
pub use normalize::{HtmlEscaper, TextNormalizer};
pub use relationships::{RelationshipResolver, Relationships};
pub use style::Declarations;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
