//! Paragraph properties (`w:pPr`)

use super::{
    border_value, digits, is_on, justification, run_style, shading_fill, twips_to_pt,
    Declarations, BORDER_SIDES,
};
use crate::xml::XmlElement;

/// Alignment used when a paragraph does not say otherwise
pub const DEFAULT_PARAGRAPH_ALIGN: &str = "justify";

/// Translate paragraph properties into CSS declarations
///
/// Always yields a `text-align` declaration; a paragraph without `w:pPr`
/// renders as justified.
pub fn paragraph_style(props: Option<&XmlElement>) -> Declarations {
    let mut decls = Declarations::new();

    let Some(props) = props else {
        decls.push("text-align", DEFAULT_PARAGRAPH_ALIGN);
        return decls;
    };

    // Paragraph-mark run properties lead
    if let Some(mark) = props.child("rPr") {
        decls.extend(run_style(mark));
    }

    let align = props
        .child("jc")
        .and_then(|jc| jc.attr("val"))
        .and_then(justification)
        .unwrap_or(DEFAULT_PARAGRAPH_ALIGN);
    decls.push("text-align", align);

    if let Some(spacing) = props.child("spacing") {
        if let Some(before) = digits(spacing.attr("before")) {
            decls.push("margin-top", twips_to_pt(before));
        }
        if let Some(after) = digits(spacing.attr("after")) {
            decls.push("margin-bottom", twips_to_pt(after));
        }
        if let Some(line) = digits(spacing.attr("line")) {
            match spacing.attr("lineRule") {
                Some("exact") => decls.push("line-height", twips_to_pt(line)),
                Some("atLeast") => decls.push("min-height", twips_to_pt(line)),
                _ => decls.push("line-height", format!("{:.1}", f64::from(line) / 240.0)),
            }
        }
    }

    if let Some(ind) = props.child("ind") {
        let left = ind.attr("left").or_else(|| ind.attr("start"));
        let right = ind.attr("right").or_else(|| ind.attr("end"));
        if let Some(left) = digits(left) {
            decls.push("margin-left", twips_to_pt(left));
        }
        if let Some(right) = digits(right) {
            decls.push("margin-right", twips_to_pt(right));
        }
        if let Some(first_line) = digits(ind.attr("firstLine")) {
            decls.push("text-indent", twips_to_pt(first_line));
        }
        if let Some(hanging) = digits(ind.attr("hanging")) {
            decls.push("text-indent", format!("-{}", twips_to_pt(hanging)));
            decls.push("margin-left", twips_to_pt(hanging));
        }
    }

    if is_on(props, "contextualSpacing") {
        decls.push("margin-top", "0");
        decls.push("margin-bottom", "0");
    }

    if is_on(props, "pageBreakBefore") {
        decls.push("page-break-before", "always");
    }

    if let Some(borders) = props.child("pBdr") {
        for side in BORDER_SIDES {
            let Some(edge) = borders.child(side.name()) else {
                continue;
            };
            if let Some(value) = border_value(edge) {
                decls.push(side.border_property(), value);
            }
            if let Some(space) = digits(edge.attr("space")).filter(|s| *s > 0) {
                decls.push(side.margin_property(), format!("{}pt", space));
            }
        }
    }

    if let Some(fill) = shading_fill(props) {
        decls.push("background-color", fill);
    }

    if is_on(props, "suppressAutoHyphens") {
        decls.push("hyphens", "none");
    }

    decls
}
