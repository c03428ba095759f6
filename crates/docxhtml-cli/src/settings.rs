//! Configuration file (`docxhtml.toml`)
//!
//! ```toml
//! [convert]
//! mode = "auto"
//!
//! [render]
//! table_font = "10pt Times New Roman, Times, Serif"
//!
//! [output]
//! standalone = false
//! title = "Converted document"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use docxhtml_ooxml::html::DEFAULT_TABLE_FONT;

/// File name looked up next to the input when no `--config` is given
pub const SETTINGS_FILE: &str = "docxhtml.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub convert: ConvertSettings,
    pub render: RenderSettings,
    pub output: OutputSettings,
}

/// `[convert]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertSettings {
    /// auto, table-only or text-only
    pub mode: String,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            mode: "auto".to_string(),
        }
    }
}

/// `[render]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// CSS `font` shorthand for tables
    pub table_font: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            table_font: DEFAULT_TABLE_FONT.to_string(),
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Wrap the fragment in a complete HTML document
    pub standalone: bool,
    /// `<title>` of the standalone document
    pub title: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "Converted document".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Settings from an explicit path, else from `docxhtml.toml` beside the
    /// input, else defaults
    pub fn resolve(explicit: Option<&Path>, input: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match discover(input) {
            Some(path) => {
                tracing::debug!("using settings from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

fn discover(input: &Path) -> Option<PathBuf> {
    let candidate = input.parent()?.join(SETTINGS_FILE);
    candidate.is_file().then_some(candidate)
}
