//! Shared test utilities for docxhtml-ooxml
//!
//! Fixture builders for WordprocessingML snippets and in-memory packages.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

/// A relationships part with no entries
pub const EMPTY_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
</Relationships>"#;

/// Wrap body content in a `w:document` with the usual prefixes declared
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <w:body>{}</w:body>
</w:document>"#,
        body
    )
}

/// Parse body content into the typed model
pub fn parse_body(body: &str) -> crate::document::Body {
    crate::document::Body::parse(document_xml(body).as_bytes(), &crate::Namespaces::default())
        .expect("fixture must be a valid document")
}

/// Build a relationships part with hyperlink entries
pub fn rels_xml(entries: &[(&str, &str)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, target) in entries {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="{}" TargetMode="External"/>"#,
            id, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Parse a single `<w:xxx>` property fragment into an element
pub fn props(fragment: &str) -> crate::xml::XmlElement {
    let xml = format!(
        r#"<w:wrap xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{}</w:wrap>"#,
        fragment
    );
    let root = crate::xml::XmlElement::parse(xml.as_bytes(), &crate::Namespaces::default())
        .expect("fixture must be well-formed");
    let first = root
        .elements()
        .next()
        .cloned()
        .expect("fixture must contain an element");
    first
}

/// Create a minimal DOCX package in memory
pub fn build_docx(document: &str, rels: Option<&str>) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();

    if let Some(rels) = rels {
        zip.start_file("word/_rels/document.xml.rels", options)
            .unwrap();
        zip.write_all(rels.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer.into_inner()
}
