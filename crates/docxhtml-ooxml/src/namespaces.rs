//! Namespace resolution context
//!
//! WordprocessingML parts bind their elements to a small set of namespace
//! URIs. The parser resolves every qualified name against a [`Namespaces`]
//! value once, so later lookups compare a closed [`Ns`] tag instead of
//! prefixes or URI strings.

/// Transitional WordprocessingML main namespace
pub const WORDML_MAIN_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Transitional office-document relationships namespace (`r:id` attributes)
pub const OFFICE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Strict (ISO 29500) WordprocessingML main namespace
pub const STRICT_WORDML_MAIN_NS: &str = "http://purl.oclc.org/ooxml/wordprocessingml/main";

/// Strict (ISO 29500) office-document relationships namespace
pub const STRICT_OFFICE_RELATIONSHIPS_NS: &str =
    "http://purl.oclc.org/ooxml/officeDocument/relationships";

/// Classification of a resolved namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ns {
    /// The WordprocessingML main namespace (`w:`)
    Main,
    /// The office-document relationships namespace (`r:`)
    Relationships,
    /// Any other bound namespace
    Other,
    /// No namespace (unprefixed attributes, undeclared prefixes)
    None,
}

/// Immutable namespace-resolution context threaded through parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    main: Vec<String>,
    relationships: Vec<String>,
}

impl Default for Namespaces {
    /// Accepts both the transitional and the strict URIs
    fn default() -> Self {
        Self {
            main: vec![WORDML_MAIN_NS.to_string(), STRICT_WORDML_MAIN_NS.to_string()],
            relationships: vec![
                OFFICE_RELATIONSHIPS_NS.to_string(),
                STRICT_OFFICE_RELATIONSHIPS_NS.to_string(),
            ],
        }
    }
}

impl Namespaces {
    /// Context recognising only the transitional URIs
    pub fn transitional() -> Self {
        Self::with_uris(WORDML_MAIN_NS, OFFICE_RELATIONSHIPS_NS)
    }

    /// Context recognising explicit main and relationships URIs
    pub fn with_uris(main: impl Into<String>, relationships: impl Into<String>) -> Self {
        Self {
            main: vec![main.into()],
            relationships: vec![relationships.into()],
        }
    }

    /// Classify a resolved namespace URI
    pub fn classify(&self, uri: &[u8]) -> Ns {
        if self.main.iter().any(|u| u.as_bytes() == uri) {
            Ns::Main
        } else if self.relationships.iter().any(|u| u.as_bytes() == uri) {
            Ns::Relationships
        } else {
            Ns::Other
        }
    }
}
