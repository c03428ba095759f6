//! Table serialization

use super::inline::render_cell_content;
use super::RenderContext;
use crate::normalize::escape_attribute;
use crate::document::{Table, TableRow};
use crate::style::{cell_style, has_double_bottom, row_style, TableGeometry, DOUBLE_BORDER_WIDTH};

/// Render a table with one line per row and cell tag
pub fn render_table(table: &Table, ctx: &RenderContext<'_>) -> String {
    let geometry = TableGeometry::from_properties(table.properties.as_ref());

    let mut lines = vec![format!(
        r#"<table cellpadding="0" cellspacing="0" style="font: {}; border-collapse: collapse; width: 100%">"#,
        escape_attribute(&ctx.options.table_font)
    )];
    for row in &table.rows {
        render_row(row, &geometry, ctx, &mut lines);
    }
    lines.push("</table>".to_string());
    lines.join("\n")
}

fn render_row(
    row: &TableRow,
    geometry: &TableGeometry,
    ctx: &RenderContext<'_>,
    lines: &mut Vec<String>,
) {
    // Blankness needs every cell before the row tag is written
    let contents: Vec<_> = row
        .cells
        .iter()
        .map(|cell| render_cell_content(cell, ctx.normalizer))
        .collect();
    let all_blank = contents.iter().all(|c| c.blank);

    lines.push(format!(
        r#"<tr style="{}">"#,
        row_style(row.properties.as_ref(), all_blank)
    ));

    for (index, (cell, content)) in row.cells.iter().zip(&contents).enumerate() {
        let style = cell_style(cell, geometry, index, &content.html);
        let colspan = if style.colspan > 1 {
            format!(r#" colspan="{}""#, style.colspan)
        } else {
            String::new()
        };
        lines.push(format!(
            r#"<td{} style="{}">{}</td>"#,
            colspan, style.declarations, content.html
        ));
    }

    if row.cells.last().is_some_and(has_double_bottom) {
        lines.push(format!(
            r#"<td style="border-bottom: Black {} double;"></td>"#,
            DOUBLE_BORDER_WIDTH
        ));
    }
    lines.push("</tr>".to_string());
}
