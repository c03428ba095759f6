//! Conversion entry points
//!
//! Ties the pieces together: parse the main document part, build a lazy
//! relationship resolver, and hand the body to the serializer selected by
//! [`ConversionMode`].

use std::fmt;
use std::str::FromStr;

use crate::archive::OoxmlArchive;
use crate::document::Body;
use crate::error::{OoxmlError, Result};
use crate::html::{render_body, render_paragraphs, render_tables, RenderContext, RenderOptions};
use crate::namespaces::Namespaces;
use crate::normalize::{HtmlEscaper, TextNormalizer};
use crate::relationships::RelationshipResolver;

/// Which parts of the body to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversionMode {
    /// Paragraphs, lists and tables interleaved in document order
    #[default]
    Auto,
    /// Every table anywhere in the body
    TableOnly,
    /// Every paragraph anywhere in the body
    TextOnly,
}

impl ConversionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionMode::Auto => "auto",
            ConversionMode::TableOnly => "table-only",
            ConversionMode::TextOnly => "text-only",
        }
    }
}

impl FromStr for ConversionMode {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ConversionMode::Auto),
            "table-only" => Ok(ConversionMode::TableOnly),
            "text-only" => Ok(ConversionMode::TextOnly),
            other => Err(OoxmlError::InvalidArgument(format!(
                "unknown conversion mode '{}' (expected auto, table-only or text-only)",
                other
            ))),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured document-to-HTML converter
///
/// ```
/// use docxhtml_ooxml::{ConversionMode, Converter};
///
/// let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body>
/// </w:document>"#;
///
/// let html = Converter::new(ConversionMode::Auto).convert(xml, None)?;
/// assert_eq!(html, r#"<p style="text-align: justify;">Hello</p>"#);
/// # Ok::<(), docxhtml_ooxml::OoxmlError>(())
/// ```
pub struct Converter {
    mode: ConversionMode,
    options: RenderOptions,
    namespaces: Namespaces,
    normalizer: Box<dyn TextNormalizer>,
}

impl Converter {
    /// Converter with default options and the HTML escaper
    pub fn new(mode: ConversionMode) -> Self {
        Self {
            mode,
            options: RenderOptions::default(),
            namespaces: Namespaces::default(),
            normalizer: Box::new(HtmlEscaper),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    /// Replace the text normalizer applied to literal run text
    pub fn with_normalizer(mut self, normalizer: impl TextNormalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Convert a main document part to an HTML fragment
    ///
    /// `rels_xml` is read only if a hyperlink needs it. A malformed
    /// document part fails the whole conversion.
    pub fn convert(&self, document_xml: &[u8], rels_xml: Option<&[u8]>) -> Result<String> {
        let body = Body::parse(document_xml, &self.namespaces)?;
        log::debug!(
            "parsed body with {} top-level blocks, mode {}",
            body.children.len(),
            self.mode
        );

        let resolver = RelationshipResolver::new(rels_xml);
        let ctx = RenderContext::new(&resolver, self.normalizer.as_ref(), &self.options);

        Ok(match self.mode {
            ConversionMode::Auto => render_body(&body, &ctx),
            ConversionMode::TableOnly => render_tables(&body, &ctx),
            ConversionMode::TextOnly => render_paragraphs(&body, &ctx),
        })
    }

    /// Convert the main document part of an opened package
    pub fn convert_archive(&self, archive: &OoxmlArchive) -> Result<String> {
        self.convert(archive.document_xml()?, archive.document_rels_xml())
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("mode", &self.mode)
            .field("options", &self.options)
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

/// Convert with a mode given by name
///
/// The mode is checked before any XML is read.
pub fn convert(document_xml: &[u8], rels_xml: Option<&[u8]>, mode: &str) -> Result<String> {
    let mode: ConversionMode = mode.parse()?;
    Converter::new(mode).convert(document_xml, rels_xml)
}
