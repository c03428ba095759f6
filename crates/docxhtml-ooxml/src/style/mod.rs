//! OOXML property → CSS translation
//!
//! Three pure entry points, one per property-node kind:
//!
//! - [`run_style`] for `w:rPr`
//! - [`paragraph_style`] for `w:pPr`
//! - [`cell_style`] / [`row_style`] for `w:tcPr` / `w:trPr`
//!
//! Each returns [`Declarations`], an ordered list of CSS property/value
//! pairs serialized in one place. Values that do not parse are dropped one
//! declaration at a time; nothing here can fail.

mod paragraph;
mod run;
mod table;

pub use paragraph::{paragraph_style, DEFAULT_PARAGRAPH_ALIGN};
pub use run::{is_bold, run_style};
pub use table::{
    cell_style, has_double_bottom, row_style, CellMargins, CellStyle, TableGeometry,
    DOUBLE_BORDER_WIDTH, EMPTY_ROW_MIN_HEIGHT,
};

use std::fmt;

use crate::xml::XmlElement;

/// An ordered sequence of CSS declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }

    /// Append every declaration of `other`, keeping its order
    pub fn extend(&mut self, other: Declarations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Value of the first declaration of `property`
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `property` is declared at all
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

impl fmt::Display for Declarations {
    /// `prop: value; prop: value;`, ready for a double-quoted `style`
    /// attribute
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let value = html_escape::encode_double_quoted_attribute(value);
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Parse a non-empty string of ASCII digits
pub(crate) fn digits(value: Option<&str>) -> Option<u32> {
    let value = value?;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Twentieths of a point → `12.0pt`
pub(crate) fn twips_to_pt(twips: u32) -> String {
    format!("{:.1}pt", f64::from(twips) / 20.0)
}

/// Evaluate an on/off property such as `<w:b/>` or `<w:b w:val="0"/>`
pub(crate) fn is_on(props: &XmlElement, name: &str) -> bool {
    match props.child(name) {
        Some(element) => !matches!(element.attr("val"), Some("0" | "false" | "off")),
        None => false,
    }
}

/// A fill from `w:shd`, skipping the "auto" and white sentinels
pub(crate) fn shading_fill(props: &XmlElement) -> Option<String> {
    let fill = props.child("shd")?.attr("fill")?;
    match fill {
        "" | "auto" | "FFFFFF" => None,
        color => Some(format!("#{}", color)),
    }
}

/// Map a `w:jc` value to a CSS `text-align` value
pub(crate) fn justification(value: &str) -> Option<&'static str> {
    match value {
        "center" => Some("center"),
        "left" => Some("left"),
        "right" => Some("right"),
        "both" | "distribute" => Some("justify"),
        "start" => Some("start"),
        "end" => Some("end"),
        _ => None,
    }
}

/// The four border sides, in emission order
pub(crate) const BORDER_SIDES: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub(crate) fn border_property(self) -> &'static str {
        match self {
            Side::Top => "border-top",
            Side::Bottom => "border-bottom",
            Side::Left => "border-left",
            Side::Right => "border-right",
        }
    }

    pub(crate) fn margin_property(self) -> &'static str {
        match self {
            Side::Top => "margin-top",
            Side::Bottom => "margin-bottom",
            Side::Left => "margin-left",
            Side::Right => "margin-right",
        }
    }
}

/// CSS line style for a border `w:val`; `None` means no border
pub(crate) fn border_line(value: &str) -> Option<&'static str> {
    match value {
        "none" | "nil" | "" => None,
        "single" | "thick" => Some("solid"),
        "double" => Some("double"),
        "dotted" => Some("dotted"),
        "dashed" | "dashSmallGap" | "dotDash" | "dotDotDash" => Some("dashed"),
        _ => Some("solid"),
    }
}

/// Border color, with "auto" rendered as black
pub(crate) fn border_color(edge: &XmlElement) -> String {
    match edge.attr("color") {
        None | Some("auto") | Some("") => "#000000".to_string(),
        Some(color) => format!("#{}", color),
    }
}

/// `{sz/8}pt {line} #{color}` for a border edge; `None` when the edge is off
/// or its size does not parse
pub(crate) fn border_value(edge: &XmlElement) -> Option<String> {
    let line = border_line(edge.attr("val").unwrap_or("single"))?;
    let size = match edge.attr("sz") {
        None => 0,
        Some(sz) => digits(Some(sz))?,
    };
    Some(format!(
        "{:.2}pt {} {}",
        f64::from(size) / 8.0,
        line,
        border_color(edge)
    ))
}
