//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use docxhtml_ooxml::normalize::escape_html;
use docxhtml_ooxml::{ConversionMode, Converter, OoxmlArchive, RenderOptions};

use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "docxhtml")]
#[command(author, version, about = "DOCX body to HTML with inline CSS", long_about = None)]
struct Cli {
    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DOCX file (or extracted package directory) to HTML
    Convert {
        /// Input DOCX file or extracted package directory
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Conversion mode: auto, table-only or text-only
        #[arg(short, long)]
        mode: Option<String>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Wrap the fragment in a complete HTML document
        #[arg(long)]
        standalone: bool,

        /// Title of the standalone document
        #[arg(long)]
        title: Option<String>,

        /// CSS font shorthand for tables
        #[arg(long)]
        table_font: Option<String>,
    },
}

/// Command-line values that take precedence over the settings file
#[derive(Debug, Clone, Default)]
pub struct ConvertOverrides {
    pub mode: Option<String>,
    pub config: Option<PathBuf>,
    pub standalone: bool,
    pub title: Option<String>,
    pub table_font: Option<String>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            mode,
            config,
            standalone,
            title,
            table_font,
        } => {
            let overrides = ConvertOverrides {
                mode,
                config,
                standalone,
                title,
                table_font,
            };
            convert_command(&input, output.as_deref(), &overrides)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Also installs the bridge for the library's `log` records
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the convert command
pub fn convert_command(
    input: &Path,
    output: Option<&Path>,
    overrides: &ConvertOverrides,
) -> Result<()> {
    let settings = Settings::resolve(overrides.config.as_deref(), input)?;

    let mode_name = overrides
        .mode
        .as_deref()
        .unwrap_or(settings.convert.mode.as_str());
    let mode: ConversionMode = mode_name
        .parse()
        .with_context(|| format!("Invalid conversion mode: {}", mode_name))?;

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    info!("Converting {} ({})", input.display(), mode);

    let archive = OoxmlArchive::open(input)
        .with_context(|| format!("Failed to open DOCX package: {}", input.display()))?;
    debug!("package parts: {:?}", archive.file_list());

    let options = RenderOptions {
        table_font: overrides
            .table_font
            .clone()
            .unwrap_or(settings.render.table_font),
    };
    let fragment = Converter::new(mode)
        .with_options(options)
        .convert_archive(&archive)
        .with_context(|| format!("Failed to convert document: {}", input.display()))?;

    let html = if overrides.standalone || settings.output.standalone {
        let title = overrides
            .title
            .as_deref()
            .unwrap_or(settings.output.title.as_str());
        standalone_document(title, &fragment)
    } else {
        fragment
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write HTML file: {}", path.display()))?;
            info!("Created {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Wrap a fragment in a minimal UTF-8 HTML document
pub fn standalone_document(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        fragment
    )
}
