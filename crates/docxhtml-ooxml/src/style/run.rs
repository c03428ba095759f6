//! Run properties (`w:rPr`)

use super::{digits, is_on, Declarations};
use crate::xml::XmlElement;

/// Translate run properties into CSS declarations
pub fn run_style(props: &XmlElement) -> Declarations {
    let mut decls = Declarations::new();

    if is_on(props, "vanish") {
        decls.push("display", "none");
    }

    if let Some(fonts) = props.child("rFonts") {
        if let Some(ascii) = fonts.attr("ascii").filter(|f| !f.is_empty()) {
            decls.push("font-family", ascii);
        }
        if let Some(east_asia) = fonts.attr("eastAsia").filter(|f| !f.is_empty()) {
            decls.push("font-variant-east-asian", east_asia);
        }
    }

    if let Some(size) = digits(props.child("sz").and_then(|e| e.attr("val"))) {
        decls.push("font-size", format!("{:.1}pt", f64::from(size) / 2.0));
    }

    if let Some(color) = props.child("color").and_then(|e| e.attr("val")) {
        if !color.is_empty() && color != "auto" {
            decls.push("color", format!("#{}", color));
        }
    }

    if is_on(props, "caps") {
        decls.push("text-transform", "uppercase");
    }
    if is_on(props, "smallCaps") {
        decls.push("font-variant", "small-caps");
    }
    if is_on(props, "strike") {
        decls.push("text-decoration", "line-through");
    }
    if is_on(props, "dstrike") {
        decls.push("text-decoration", "line-through double");
    }

    if is_on(props, "outline") {
        decls.push("text-shadow", "-1px -1px 0 #000, 1px 1px 0 #000");
    }
    if is_on(props, "shadow") {
        decls.push("text-shadow", "1px 1px 2px #888888");
    }
    if is_on(props, "emboss") {
        decls.push("text-shadow", "1px 1px 0 #fff, 2px 2px 2px #888");
    }
    if is_on(props, "imprint") {
        decls.push("text-shadow", "1px 1px 0 #fff, -1px -1px 1px #888");
    }

    let position = props
        .child("vertAlign")
        .or_else(|| props.child("vAlign"))
        .and_then(|e| e.attr("val"));
    match position {
        Some("superscript" | "top") => decls.push("vertical-align", "top"),
        Some("center") => decls.push("vertical-align", "middle"),
        Some("subscript" | "bottom") => decls.push("vertical-align", "bottom"),
        _ => {}
    }

    if is_on(props, "b") {
        decls.push("font-weight", "bold");
    }
    if is_on(props, "i") {
        decls.push("font-style", "italic");
    }

    if let Some(underline) = props.child("u") {
        match underline.attr("val") {
            Some("none") => {}
            Some("double") => decls.push("text-decoration", "underline double"),
            _ => decls.push("text-decoration", "underline"),
        }
    }

    decls
}

/// Whether the run properties switch bold on
pub fn is_bold(props: &XmlElement) -> bool {
    is_on(props, "b")
}
