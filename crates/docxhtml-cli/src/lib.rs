//! docxhtml CLI - Command-line interface library
//!
//! This library provides the CLI functionality for docxhtml:
//! - Convert: DOCX body to an HTML fragment or standalone document
//!
//! # Library Usage
//!
//! ```ignore
//! use docxhtml_cli::{convert_command, run_cli, ConvertOverrides};
//!
//! // Run the full CLI
//! run_cli();
//!
//! // Or use the command programmatically
//! convert_command(&input, Some(&output), &ConvertOverrides::default())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Interleaved paragraphs, lists and tables
//! docxhtml convert report.docx --output report.html
//!
//! # Only the tables, as a complete page
//! docxhtml convert report.docx --mode table-only --standalone
//! ```

pub mod app;
pub mod settings;

// Re-export main entry point and types
pub use app::{convert_command, run_cli, standalone_document, ConvertOverrides};
pub use settings::Settings;
