//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur while reading a package or converting its body
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required part not found in the package
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Invalid document structure
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),

    /// A caller-supplied argument was rejected (e.g. an unknown conversion mode)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(quick_xml::Error::InvalidAttr(err))
    }
}
