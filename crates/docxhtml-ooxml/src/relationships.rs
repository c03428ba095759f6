//! Relationships parsing for OOXML documents
//!
//! OOXML uses relationship files (_rels/*.rels) to map IDs to targets.
//! The converter only needs them to turn `w:hyperlink r:id="..."` into an
//! `href`, so the manifest is read lazily by [`RelationshipResolver`] the
//! first time a hyperlink asks for it.
//!
//! # Example
//!
//! ```
//! use docxhtml_ooxml::relationships::RelationshipResolver;
//!
//! let rels = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
//!     <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink"
//!                   Target="https://example.com" TargetMode="External"/>
//! </Relationships>"#;
//!
//! let resolver = RelationshipResolver::new(Some(&rels[..]));
//! assert_eq!(resolver.resolve("rId1"), Some("https://example.com"));
//! assert_eq!(resolver.resolve("rId9"), None);
//! ```

use std::cell::OnceCell;
use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};

/// Parsed relationships from a .rels file
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Map of relationship ID to target
    map: HashMap<String, String>,
}

impl Relationships {
    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse relationships from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut map = HashMap::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() == b"Relationship" {
                        let mut id = None;
                        let mut target = None;

                        for attr in e.attributes().filter_map(|a| a.ok()) {
                            let value = attr.unescape_value().ok().map(|s| s.to_string());
                            match attr.key.as_ref() {
                                b"Id" => id = value,
                                b"Target" => target = value,
                                _ => {}
                            }
                        }

                        if let (Some(id), Some(target)) = (id, target) {
                            // First definition wins on duplicate IDs
                            map.entry(id).or_insert(target);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { map })
    }

    /// Get the target for a relationship ID
    pub fn get(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(String::as_str)
    }

    /// Get the number of relationships
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if there are no relationships
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Lazily-loaded relationship table for one conversion
///
/// The manifest bytes are parsed at most once, on the first lookup. A
/// missing or malformed manifest behaves like an empty one so a broken
/// link never aborts the conversion.
#[derive(Debug)]
pub struct RelationshipResolver<'a> {
    source: Option<&'a [u8]>,
    loaded: OnceCell<Relationships>,
}

impl<'a> RelationshipResolver<'a> {
    /// Create a resolver over the raw `document.xml.rels` bytes, if any
    pub fn new(source: Option<&'a [u8]>) -> Self {
        Self {
            source,
            loaded: OnceCell::new(),
        }
    }

    /// Map a relationship ID to its target URI
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.relationships().get(id)
    }

    /// Whether the manifest has been read yet
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn relationships(&self) -> &Relationships {
        self.loaded.get_or_init(|| match self.source {
            Some(bytes) => Relationships::parse(bytes).unwrap_or_else(|e| {
                log::warn!("ignoring unreadable relationships part: {}", e);
                Relationships::new()
            }),
            None => {
                log::debug!("no relationships part; hyperlinks resolve to empty targets");
                Relationships::new()
            }
        })
    }
}
