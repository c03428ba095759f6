//! Package access for DOCX files
//!
//! A DOCX file is a ZIP archive of XML parts. The converter only reads the
//! main document part and its relationships, either straight from the
//! archive or from a directory the package was already extracted to.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::Path;

use zip::read::ZipArchive;

use crate::error::{OoxmlError, Result};

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Path of the main document's relationships part
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Parts of an OOXML package held in memory
#[derive(Debug, Default)]
pub struct OoxmlArchive {
    /// Part contents keyed by package path
    files: HashMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Open a `.docx` file, or a directory holding an extracted package
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::open_dir(path)
        } else {
            let file = File::open(path)?;
            Self::from_reader(file)
        }
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        log::debug!("read {} parts from archive", files.len());
        Ok(Self { files })
    }

    /// Read the parts the converter needs from an extracted package directory
    pub fn open_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files = HashMap::new();

        for part in [DOCUMENT_PART, DOCUMENT_RELS_PART] {
            let path = part.split('/').fold(dir.to_path_buf(), |p, seg| p.join(seg));
            if path.is_file() {
                files.insert(part.to_string(), fs::read(&path)?);
            }
        }

        Ok(Self { files })
    }

    /// Get a part's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.get(DOCUMENT_PART)
            .ok_or_else(|| OoxmlError::MissingFile(DOCUMENT_PART.to_string()))
    }

    /// Get the document relationships (word/_rels/document.xml.rels)
    pub fn document_rels_xml(&self) -> Option<&[u8]> {
        self.get(DOCUMENT_RELS_PART)
    }

    /// Check if a part exists
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// List all part paths, sorted
    pub fn file_list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.files.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_docx, document_xml, EMPTY_RELS};
    use std::io::Cursor;

    #[test]
    fn test_read_parts_from_zip() {
        let doc = document_xml("<w:p/>");
        let bytes = build_docx(&doc, Some(EMPTY_RELS));
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.document_xml().unwrap(), doc.as_bytes());
        assert!(archive.document_rels_xml().is_some());
        assert!(archive.contains("[Content_Types].xml"));
        assert!(archive.file_list().contains(&DOCUMENT_PART));
    }

    #[test]
    fn test_missing_document_part() {
        let archive = OoxmlArchive::default();
        let err = archive.document_xml().unwrap_err();
        assert!(matches!(err, OoxmlError::MissingFile(ref p) if p == DOCUMENT_PART));
    }

    #[test]
    fn test_open_extracted_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let word = dir.path().join("word");
        fs::create_dir_all(word.join("_rels")).unwrap();
        fs::write(word.join("document.xml"), document_xml("<w:p/>")).unwrap();

        let archive = OoxmlArchive::open(dir.path()).unwrap();
        assert!(archive.document_xml().is_ok());
        assert!(archive.document_rels_xml().is_none());
    }

    #[test]
    fn test_not_a_zip() {
        let result = OoxmlArchive::from_reader(Cursor::new(b"plain text".to_vec()));
        assert!(matches!(result, Err(OoxmlError::Archive(_))));
    }
}
