//! Document content parsing (word/document.xml)
//!
//! The main document part is parsed into a namespace-resolved element tree
//! and then lifted into a closed set of typed nodes: paragraphs, tables,
//! rows, cells, runs, hyperlinks, text and breaks. Property nodes are kept
//! as raw [`XmlElement`]s for the style mapper.

use crate::error::{OoxmlError, Result};
use crate::namespaces::Namespaces;
use crate::xml::XmlElement;

/// Property sub-node of a paragraph, run, table, row or cell
pub type Properties = XmlElement;

/// A parsed document body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    /// Direct block children in document order
    pub children: Vec<Block>,
}

/// Block-level elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A paragraph (possibly a list item)
    Paragraph(Paragraph),
    /// A table
    Table(Table),
}

/// A paragraph with its properties and inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// `w:pPr`
    pub properties: Option<Properties>,
    /// Runs and hyperlinks
    pub children: Vec<ParagraphChild>,
}

/// Child elements of a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphChild {
    /// A text run
    Run(Run),
    /// A hyperlink
    Hyperlink(Hyperlink),
}

/// A hyperlink with its target reference and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Relationship ID for external targets (`r:id`)
    pub rel_id: Option<String>,
    /// Internal bookmark name (`w:anchor`)
    pub anchor: Option<String>,
    /// Child runs inside the hyperlink
    pub runs: Vec<Run>,
}

/// A text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// `w:rPr`
    pub properties: Option<Properties>,
    /// Text and break children in order
    pub children: Vec<RunChild>,
}

/// Child content of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunChild {
    /// Literal text from `w:t`
    Text(String),
    /// A line break (`w:br` or `w:cr`)
    Break,
}

/// List membership read from `w:numPr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    /// Indent level (0-based)
    pub ilvl: u32,
}

/// A table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// `w:tblPr`
    pub properties: Option<Properties>,
    /// Table rows
    pub rows: Vec<TableRow>,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// `w:trPr`
    pub properties: Option<Properties>,
    /// Cells in this row
    pub cells: Vec<TableCell>,
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// `w:tcPr`
    pub properties: Option<Properties>,
    /// Paragraphs and nested tables in this cell
    pub content: Vec<Block>,
}

impl Body {
    /// Parse the body of a main document part
    pub fn parse(xml: &[u8], namespaces: &Namespaces) -> Result<Self> {
        let root = XmlElement::parse(xml, namespaces)?;
        if !root.is("document") {
            return Err(OoxmlError::InvalidStructure(format!(
                "expected <w:document> root, found <{}>",
                root.local
            )));
        }
        let body = root.child("body").ok_or_else(|| {
            OoxmlError::InvalidStructure("document has no <w:body>".to_string())
        })?;

        Ok(Body {
            children: blocks(body),
        })
    }

    /// Every table in the body, outer tables before the tables nested in them
    pub fn tables(&self) -> Vec<&Table> {
        let mut out = Vec::new();
        collect_tables(&self.children, &mut out);
        out
    }

    /// Every paragraph in the body in document order, including those in cells
    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        let mut out = Vec::new();
        collect_paragraphs(&self.children, &mut out);
        out
    }
}

impl Paragraph {
    /// Numbering reference when this paragraph is a list item
    pub fn numbering(&self) -> Option<NumberingRef> {
        let num_pr = self.properties.as_ref()?.child("numPr")?;
        let ilvl = num_pr
            .child("ilvl")
            .and_then(|e| e.attr("val"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        Some(NumberingRef { ilvl })
    }

    /// Justification value from `w:pPr/w:jc`
    pub fn justification(&self) -> Option<&str> {
        self.properties.as_ref()?.child("jc")?.attr("val")
    }

    /// Get all runs (flattening hyperlinks)
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.children.iter().flat_map(|child| match child {
            ParagraphChild::Run(run) => std::slice::from_ref(run).iter(),
            ParagraphChild::Hyperlink(link) => link.runs.iter(),
        })
    }
}

impl TableCell {
    /// Paragraphs directly inside the cell
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }
}

fn blocks(container: &XmlElement) -> Vec<Block> {
    let mut out = Vec::new();
    push_blocks(container, &mut out);
    out
}

fn push_blocks(container: &XmlElement, out: &mut Vec<Block>) {
    for element in container.elements() {
        if element.is("p") {
            out.push(Block::Paragraph(paragraph(element)));
        } else if element.is("tbl") {
            out.push(Block::Table(table(element)));
        } else if element.is("sdt") {
            // Content controls wrap ordinary blocks
            if let Some(content) = element.child("sdtContent") {
                push_blocks(content, out);
            }
        } else if !element.is("sectPr") {
            log::debug!("skipping body child <{}>", element.local);
        }
    }
}

fn paragraph(p: &XmlElement) -> Paragraph {
    let mut children = Vec::new();
    for element in p.elements() {
        if element.is("r") {
            children.push(ParagraphChild::Run(run(element)));
        } else if element.is("hyperlink") {
            children.push(ParagraphChild::Hyperlink(Hyperlink {
                rel_id: element.rel_attr("id").map(str::to_string),
                anchor: element.attr("anchor").map(str::to_string),
                runs: element.children_named("r").map(run).collect(),
            }));
        }
    }
    Paragraph {
        properties: p.child("pPr").cloned(),
        children,
    }
}

fn run(r: &XmlElement) -> Run {
    let mut children = Vec::new();
    for element in r.elements() {
        if element.is("t") {
            children.push(RunChild::Text(element.text()));
        } else if element.is("br") || element.is("cr") {
            children.push(RunChild::Break);
        }
    }
    Run {
        properties: r.child("rPr").cloned(),
        children,
    }
}

fn table(tbl: &XmlElement) -> Table {
    let rows = tbl
        .children_named("tr")
        .map(|tr| TableRow {
            properties: tr.child("trPr").cloned(),
            cells: tr
                .children_named("tc")
                .map(|tc| TableCell {
                    properties: tc.child("tcPr").cloned(),
                    content: blocks(tc),
                })
                .collect(),
        })
        .collect();
    Table {
        properties: tbl.child("tblPr").cloned(),
        rows,
    }
}

fn collect_tables<'a>(blocks: &'a [Block], out: &mut Vec<&'a Table>) {
    for block in blocks {
        if let Block::Table(table) = block {
            out.push(table);
            for cell in table.rows.iter().flat_map(|r| r.cells.iter()) {
                collect_tables(&cell.content, out);
            }
        }
    }
}

fn collect_paragraphs<'a>(blocks: &'a [Block], out: &mut Vec<&'a Paragraph>) {
    for block in blocks {
        match block {
            Block::Paragraph(p) => out.push(p),
            Block::Table(table) => {
                for cell in table.rows.iter().flat_map(|r| r.cells.iter()) {
                    collect_paragraphs(&cell.content, out);
                }
            }
        }
    }
}
