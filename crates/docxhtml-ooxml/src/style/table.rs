//! Table, row and cell properties (`w:tblPr`, `w:trPr`, `w:tcPr`)

use super::{
    border_value, border_color, digits, justification, shading_fill, twips_to_pt, Declarations,
    Side, BORDER_SIDES,
};
use crate::document::TableCell;
use crate::normalize::visible_text;
use crate::xml::XmlElement;

/// Thickness forced onto double cell borders
pub const DOUBLE_BORDER_WIDTH: &str = "2.5pt";

/// Minimum height given to rows whose cells are all blank
pub const EMPTY_ROW_MIN_HEIGHT: &str = "12pt";

/// Default cell margins declared on a table (`w:tblCellMar`), in twips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMargins {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl CellMargins {
    fn from_element(mar: &XmlElement) -> Self {
        let side = |names: &[&str]| {
            names
                .iter()
                .find_map(|n| mar.child(n))
                .and_then(|e| digits(e.attr("w")))
        };
        Self {
            top: side(&["top"]),
            bottom: side(&["bottom"]),
            left: side(&["left", "start"]),
            right: side(&["right", "end"]),
        }
    }
}

/// Per-table metrics needed to style its cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableGeometry {
    /// Declared table width in twips, when given as a fixed (`dxa`) width
    pub total_width: Option<u32>,
    /// Table-wide default cell margins
    pub default_margins: CellMargins,
}

impl TableGeometry {
    /// Read geometry from `w:tblPr`
    pub fn from_properties(props: Option<&XmlElement>) -> Self {
        let Some(props) = props else {
            return Self::default();
        };
        let total_width = props
            .child("tblW")
            .filter(|w| w.attr("type") == Some("dxa"))
            .and_then(|w| digits(w.attr("w")))
            .filter(|w| *w > 0);
        let default_margins = props
            .child("tblCellMar")
            .map(CellMargins::from_element)
            .unwrap_or_default();
        Self {
            total_width,
            default_margins,
        }
    }
}

/// Computed style of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub declarations: Declarations,
    pub colspan: u32,
}

/// Cell declarations, one slot per property group
///
/// [`CellSlots::into_declarations`] is the single place that fixes the
/// emitted order: width, background, alignment, borders, bottom padding.
#[derive(Debug, Default)]
struct CellSlots {
    width: Option<String>,
    background: Option<String>,
    align: Option<&'static str>,
    borders: Vec<(Side, String)>,
    padding_bottom: Option<String>,
}

impl CellSlots {
    fn into_declarations(self) -> Declarations {
        let mut decls = Declarations::new();
        if let Some(width) = self.width {
            decls.push("width", width);
        }
        if let Some(background) = self.background {
            decls.push("background-color", background);
        }
        if let Some(align) = self.align {
            decls.push("text-align", align);
        }
        for (side, value) in self.borders {
            decls.push(side.border_property(), value);
        }
        if let Some(padding) = self.padding_bottom {
            decls.push("padding-bottom", padding);
        }
        decls
    }
}

/// Compute a cell's style and colspan
///
/// `cell_text` is the cell's rendered HTML; it only matters when no
/// alignment is declared, to pick the column default.
pub fn cell_style(
    cell: &TableCell,
    geometry: &TableGeometry,
    column_index: usize,
    cell_text: &str,
) -> CellStyle {
    let props = cell.properties.as_ref();
    let mut slots = CellSlots::default();

    let colspan = props
        .and_then(|p| p.child("gridSpan"))
        .and_then(|g| digits(g.attr("val")))
        .filter(|span| *span > 0)
        .unwrap_or(1);

    if let Some(props) = props {
        slots.width = cell_width(props, geometry.total_width);
        slots.background = shading_fill(props);
        slots.align = props
            .child("jc")
            .and_then(|jc| jc.attr("val"))
            .and_then(justification);
        if let Some(borders) = props.child("tcBorders") {
            slots.borders = cell_borders(borders);
        }
        slots.padding_bottom = props
            .child("tcMar")
            .and_then(|m| m.child("bottom"))
            .and_then(|b| digits(b.attr("w")))
            .filter(|w| *w > 0)
            .map(twips_to_pt);
    }

    if slots.padding_bottom.is_none() {
        slots.padding_bottom = geometry
            .default_margins
            .bottom
            .filter(|w| *w > 0)
            .map(twips_to_pt);
    }

    if slots.align.is_none() {
        slots.align = cell
            .paragraphs()
            .next()
            .and_then(|p| p.justification())
            .and_then(justification);
    }

    if slots.align.is_none() {
        slots.align = Some(default_alignment(column_index, cell_text));
    }

    CellStyle {
        declarations: slots.into_declarations(),
        colspan,
    }
}

/// Whether a cell's bottom border is double
pub fn has_double_bottom(cell: &TableCell) -> bool {
    cell.properties
        .as_ref()
        .and_then(|p| p.child("tcBorders"))
        .and_then(|b| b.child("bottom"))
        .and_then(|b| b.attr("val"))
        == Some("double")
}

/// Row declarations: bottom vertical alignment, shading, declared height,
/// and a minimum height for rows with no visible content
pub fn row_style(props: Option<&XmlElement>, all_blank: bool) -> Declarations {
    let mut decls = Declarations::new();
    decls.push("vertical-align", "bottom");

    if let Some(props) = props {
        if let Some(fill) = shading_fill(props) {
            decls.push("background-color", fill);
        }
        if let Some(height) = digits(props.child("trHeight").and_then(|h| h.attr("val"))) {
            decls.push("min-height", twips_to_pt(height));
        }
    }

    if all_blank {
        decls.push("min-height", EMPTY_ROW_MIN_HEIGHT);
    }
    decls
}

fn cell_width(props: &XmlElement, total_width: Option<u32>) -> Option<String> {
    let tcw = props.child("tcW")?;
    let width = digits(tcw.attr("w")).filter(|w| *w > 0)?;
    let width = f64::from(width);

    Some(match (tcw.attr("type"), total_width) {
        (Some("pct"), _) => format!("{}%", (width / 50.0).round()),
        (Some("dxa"), Some(total)) => format!("{}%", (100.0 * width / f64::from(total)).round()),
        _ => format!("{:.1}pt", width / 20.0),
    })
}

fn cell_borders(borders: &XmlElement) -> Vec<(Side, String)> {
    let mut out = Vec::new();
    for side in BORDER_SIDES {
        let Some(edge) = borders.child(side.name()) else {
            continue;
        };
        match edge.attr("val") {
            None => {}
            Some("double") => out.push((
                side,
                format!("{} double {}", DOUBLE_BORDER_WIDTH, border_color(edge)),
            )),
            Some(_) => {
                if let Some(value) = border_value(edge) {
                    out.push((side, value));
                }
            }
        }
    }
    out
}

/// Column default: currency and closing-paren cells hug the left edge, the
/// first column reads left, figures in later columns align right
fn default_alignment(column_index: usize, cell_text: &str) -> &'static str {
    let text = visible_text(cell_text);
    match text.trim() {
        "$" | ")" => "left",
        _ if column_index == 0 => "left",
        _ => "right",
    }
}
