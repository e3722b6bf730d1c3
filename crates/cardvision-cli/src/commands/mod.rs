//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod issuers;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::debug;

use cardvision_core::models::config::CardVisionConfig;
use cardvision_core::{read_document_text, StatementAssembler, StatementParser};

use crate::export::DocumentRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardvision")
        .join("config.json")
}

/// Load the configuration named on the command line, else the default file
/// when present, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardVisionConfig> {
    if let Some(path) = config_path {
        return Ok(CardVisionConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using configuration from {}", path.display());
        Ok(CardVisionConfig::from_file(&path)?)
    } else {
        Ok(CardVisionConfig::default())
    }
}

/// Whether a path names a document the pipeline can read.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "pdf" | "txt"))
        .unwrap_or(false)
}

/// Read, extract and tag one document.
pub fn process_document(path: &Path, config: &CardVisionConfig) -> anyhow::Result<DocumentRecord> {
    let text = read_document_text(path, config)?;
    let result = StatementAssembler::from_config(&config.extraction).parse(&text)?;

    debug!(
        "{}: {} in {}ms",
        path.display(),
        result.record.issuer,
        result.processing_time_ms
    );

    Ok(DocumentRecord::from_result(display_name(path), result))
}

/// File name used to identify a document in exports.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
