//! End-to-end conversion scenarios
//!
//! Drives `Converter` through the public API on hand-written document parts.

use docxhtml_ooxml::{convert, ConversionMode, Converter, OoxmlError, RenderOptions};

fn document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
            xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <w:body>{}<w:sectPr/></w:body>
</w:document>"#,
        body
    )
}

fn auto(body: &str) -> String {
    Converter::new(ConversionMode::Auto)
        .convert(document(body).as_bytes(), None)
        .unwrap()
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_cell_width_percentage_and_default_alignment() {
    let html = auto(
        r#"<w:tbl>
            <w:tblPr><w:tblW w:w="5000" w:type="dxa"/></w:tblPr>
            <w:tr>
                <w:tc>
                    <w:tcPr><w:tcW w:w="2500" w:type="dxa"/></w:tcPr>
                    <w:p><w:r><w:t>Assets</w:t></w:r></w:p>
                </w:tc>
                <w:tc><w:p/></w:tc>
            </w:tr>
        </w:tbl>"#,
    );
    assert!(html.contains(r#"<td style="width: 50%; text-align: left;">Assets</td>"#));
    assert!(html.contains(r#"<td style="text-align: right;">&#160;</td>"#));
}

#[test]
fn test_cell_width_in_points_without_table_width() {
    let html = auto(
        r#"<w:tbl><w:tr>
            <w:tc><w:tcPr><w:tcW w:w="1440" w:type="dxa"/></w:tcPr><w:p><w:r><w:t>x</w:t></w:r></w:p></w:tc>
        </w:tr></w:tbl>"#,
    );
    assert!(html.contains("width: 72.0pt;"));
}

#[test]
fn test_width_percentages_follow_rounding() {
    for (cell, total, expected) in [(1000, 3000, "33%"), (2000, 3000, "67%"), (4680, 9360, "50%")] {
        let html = auto(&format!(
            r#"<w:tbl>
                <w:tblPr><w:tblW w:w="{total}" w:type="dxa"/></w:tblPr>
                <w:tr><w:tc><w:tcPr><w:tcW w:w="{cell}" w:type="dxa"/></w:tcPr><w:p/></w:tc></w:tr>
            </w:tbl>"#
        ));
        assert!(
            html.contains(&format!("width: {};", expected)),
            "{}/{} should give {}: {}",
            cell,
            total,
            expected,
            html
        );
    }
}

#[test]
fn test_empty_row_is_kept_visible() {
    let html = auto(
        r#"<w:tbl>
            <w:tr>
                <w:tc><w:p><w:r><w:t>Name</w:t></w:r></w:p></w:tc>
                <w:tc><w:p><w:r><w:t>Value</w:t></w:r></w:p></w:tc>
            </w:tr>
            <w:tr>
                <w:tc><w:p/></w:tc>
                <w:tc><w:p><w:r><w:t xml:space="preserve">  </w:t></w:r></w:p></w:tc>
            </w:tr>
        </w:tbl>"#,
    );
    let rows: Vec<_> = html.lines().filter(|l| l.starts_with("<tr")).collect();
    assert_eq!(rows[0], r#"<tr style="vertical-align: bottom;">"#);
    assert_eq!(
        rows[1],
        r#"<tr style="vertical-align: bottom; min-height: 12pt;">"#
    );
    assert!(html.contains(r#"<td style="text-align: left;">&#160;</td>"#));
    assert!(html.contains(r#"<td style="text-align: right;">&#160;</td>"#));
}

#[test]
fn test_shading_sentinels() {
    for (fill, expected) in [
        ("auto", None),
        ("FFFFFF", None),
        ("DDEEFF", Some("background-color: #DDEEFF;")),
        ("000000", Some("background-color: #000000;")),
    ] {
        let html = auto(&format!(
            r#"<w:p><w:pPr><w:shd w:val="clear" w:fill="{fill}"/></w:pPr><w:r><w:t>p</w:t></w:r></w:p>
               <w:tbl><w:tr>
                   <w:trPr><w:shd w:val="clear" w:fill="{fill}"/></w:trPr>
                   <w:tc><w:tcPr><w:shd w:val="clear" w:fill="{fill}"/></w:tcPr><w:p/></w:tc>
               </w:tr></w:tbl>"#
        ));
        match expected {
            None => assert!(!html.contains("background-color"), "{}", html),
            Some(decl) => assert_eq!(html.matches(decl).count(), 3, "{}", html),
        }
    }
}

#[test]
fn test_tables_are_separated_by_blank_line() {
    let html = auto(
        r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
           <w:tbl><w:tr><w:tc><w:p><w:r><w:t>2</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
    );
    assert_eq!(html.matches("</table>\n\n<table ").count(), 1);
}

// =============================================================================
// Paragraphs and runs
// =============================================================================

#[test]
fn test_justification_default_and_both() {
    let html = auto(
        r#"<w:p><w:pPr><w:jc w:val="both"/></w:pPr><w:r><w:t>one</w:t></w:r></w:p>
           <w:p><w:r><w:t>two</w:t></w:r></w:p>"#,
    );
    assert_eq!(
        html,
        "<p style=\"text-align: justify;\">one</p>\n\n<p style=\"text-align: justify;\">two</p>"
    );
}

#[test]
fn test_empty_run_placeholder() {
    let html = auto(r#"<w:p><w:r><w:rPr><w:sz w:val="24"/></w:rPr></w:r></w:p>"#);
    assert_eq!(
        html,
        r#"<p style="text-align: justify;"><span style="font-size: 12.0pt;">&#160;</span></p>"#
    );
}

#[test]
fn test_rich_paragraph() {
    let html = auto(
        r#"<w:p>
            <w:pPr>
                <w:jc w:val="center"/>
                <w:spacing w:before="120" w:after="0"/>
                <w:ind w:left="720"/>
            </w:pPr>
            <w:r>
                <w:rPr><w:rFonts w:ascii="Arial"/><w:b/><w:color w:val="C00000"/></w:rPr>
                <w:t>Warning</w:t>
            </w:r>
            <w:r><w:t xml:space="preserve">: a &lt; b</w:t></w:r>
        </w:p>"#,
    );
    assert_eq!(
        html,
        "<p style=\"text-align: center; margin-top: 6.0pt; margin-bottom: 0.0pt; margin-left: 36.0pt;\">\
         <span style=\"font-family: Arial; color: #C00000; font-weight: bold;\"><b>Warning</b></span>\
         : a &lt; b</p>"
    );
}

#[test]
fn test_non_digit_values_drop_only_their_declaration() {
    let html = auto(
        r#"<w:p>
            <w:pPr><w:spacing w:before="12pt" w:after="240"/></w:pPr>
            <w:r><w:rPr><w:sz w:val="large"/><w:i/></w:rPr><w:t>t</w:t></w:r>
        </w:p>"#,
    );
    assert_eq!(
        html,
        r#"<p style="text-align: justify; margin-bottom: 12.0pt;"><span style="font-style: italic;">t</span></p>"#
    );
}

#[test]
fn test_quoted_property_values_stay_inside_style() {
    let html = auto(
        r#"<w:p><w:r>
            <w:rPr><w:rFonts w:ascii="Evil&quot; onmouseover=&quot;alert(1)"/></w:rPr>
            <w:t>a</w:t>
        </w:r></w:p>
        <w:tbl><w:tr>
            <w:tc><w:tcPr><w:shd w:val="clear" w:fill="F00&quot; onclick=&quot;x"/></w:tcPr><w:p><w:r><w:t>c</w:t></w:r></w:p></w:tc>
        </w:tr></w:tbl>"#,
    );
    assert!(!html.contains("\" onmouseover=\""), "{}", html);
    assert!(!html.contains("\" onclick=\""), "{}", html);
    assert!(html.contains(r#"font-family: Evil&quot; onmouseover=&quot;alert(1);"#));
    assert!(html.contains(r#"background-color: #F00&quot; onclick=&quot;x;"#));
}

// =============================================================================
// Hyperlinks
// =============================================================================

#[test]
fn test_hyperlinks_resolve_through_relationships() {
    let rels = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
    <Relationship Id="rId8" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://www.rust-lang.org/" TargetMode="External"/>
</Relationships>"#;
    let doc = document(
        r#"<w:p>
            <w:hyperlink r:id="rId8"><w:r><w:t>Rust</w:t></w:r></w:hyperlink>
            <w:r><w:t xml:space="preserve"> and </w:t></w:r>
            <w:hyperlink r:id="rId404"><w:r><w:t>nothing</w:t></w:r></w:hyperlink>
        </w:p>"#,
    );
    let html = Converter::new(ConversionMode::Auto)
        .convert(doc.as_bytes(), Some(rels.as_bytes()))
        .unwrap();
    assert_eq!(
        html,
        r#"<p style="text-align: justify;"><a href="https://www.rust-lang.org/">Rust</a> and <a href="">nothing</a></p>"#
    );
}

#[test]
fn test_malformed_relationships_do_not_abort() {
    let doc = document(r#"<w:p><w:hyperlink r:id="rId1"><w:r><w:t>x</w:t></w:r></w:hyperlink></w:p>"#);
    let html = Converter::new(ConversionMode::Auto)
        .convert(doc.as_bytes(), Some(&b"<Relationships"[..]))
        .unwrap();
    assert!(html.contains(r#"<a href="">x</a>"#));
}

// =============================================================================
// Modes
// =============================================================================

const MIXED: &str = r#"
    <w:p><w:r><w:t>Before</w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p><w:r><w:t>After</w:t></w:r></w:p>"#;

#[test]
fn test_auto_interleaves_in_document_order() {
    let html = auto(MIXED);
    let before = html.find("Before").unwrap();
    let cell = html.find(">Cell</td>").unwrap();
    let after = html.find("After").unwrap();
    assert!(before < cell && cell < after);
}

#[test]
fn test_table_only_mode() {
    let html = convert(document(MIXED).as_bytes(), None, "table-only").unwrap();
    assert!(html.starts_with("<table "));
    assert!(html.ends_with("</table>"));
    assert!(!html.contains("Before"));
}

#[test]
fn test_text_only_mode() {
    let html = convert(document(MIXED).as_bytes(), None, "text-only").unwrap();
    assert_eq!(
        html,
        "<p style=\"text-align: justify;\">Before</p>\n\n\
         <p style=\"text-align: justify;\">Cell</p>\n\n\
         <p style=\"text-align: justify;\">After</p>"
    );
}

#[test]
fn test_text_only_ignores_list_scopes() {
    let html = convert(
        document(r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>item</w:t></w:r></w:p>"#)
            .as_bytes(),
        None,
        "text-only",
    )
    .unwrap();
    assert_eq!(html, r#"<p style="text-align: justify;">item</p>"#);
}

#[test]
fn test_custom_table_font() {
    let html = Converter::new(ConversionMode::TableOnly)
        .with_options(RenderOptions {
            table_font: "11pt Georgia, serif".to_string(),
        })
        .convert(document(MIXED).as_bytes(), None)
        .unwrap();
    assert!(html.contains("style=\"font: 11pt Georgia, serif; border-collapse: collapse; width: 100%\""));
}

// =============================================================================
// Errors and determinism
// =============================================================================

#[test]
fn test_invalid_mode_is_rejected() {
    let err = convert(b"", None, "html").unwrap_err();
    assert!(matches!(err, OoxmlError::InvalidArgument(_)));
}

#[test]
fn test_malformed_document_aborts() {
    let truncated = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p>"#;
    assert!(convert(truncated.as_bytes(), None, "auto").is_err());

    let no_body = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
    let err = convert(no_body.as_bytes(), None, "auto").unwrap_err();
    assert!(matches!(err, OoxmlError::InvalidStructure(_)));
}

#[test]
fn test_conversion_is_deterministic() {
    let body = format!(
        r#"{}<w:p><w:pPr><w:numPr><w:ilvl w:val="1"/><w:numId w:val="3"/></w:numPr></w:pPr><w:r><w:t>i</w:t></w:r></w:p>
           <w:tbl>
               <w:tblPr><w:tblW w:w="9000" w:type="dxa"/></w:tblPr>
               <w:tr><w:tc><w:tcPr><w:tcW w:w="3000" w:type="dxa"/><w:tcBorders><w:bottom w:val="double"/></w:tcBorders></w:tcPr><w:p/></w:tc></w:tr>
           </w:tbl>"#,
        MIXED
    );
    let doc = document(&body);
    let converter = Converter::new(ConversionMode::Auto);
    let first = converter.convert(doc.as_bytes(), None).unwrap();
    let second = converter.convert(doc.as_bytes(), None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_strict_namespace_documents() {
    let doc = r#"<w:document xmlns:w="http://purl.oclc.org/ooxml/wordprocessingml/main">
        <w:body><w:p><w:pPr><w:jc w:val="right"/></w:pPr><w:r><w:t>strict</w:t></w:r></w:p></w:body>
    </w:document>"#;
    let html = convert(doc.as_bytes(), None, "auto").unwrap();
    assert_eq!(html, r#"<p style="text-align: right;">strict</p>"#);
}
