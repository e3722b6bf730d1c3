//! Configuration structures for the statement pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{CardVisionError, Result};

/// Main configuration for the cardvision pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardVisionConfig {
    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// Statement extraction configuration.
    pub extraction: ExtractionConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum trimmed text length for a document to count as readable.
    pub min_text_length: usize,

    /// Try an empty password on encrypted PDFs.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 1,
            decrypt_empty_password: true,
        }
    }
}

/// Statement extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Keep the raw text on extraction results.
    pub keep_raw_text: bool,

    /// Maximum characters shown when previewing raw text.
    pub raw_text_preview_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            keep_raw_text: false,
            raw_text_preview_chars: 2000,
        }
    }
}

/// Export file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name prefix for aggregate batch exports.
    pub file_prefix: String,

    /// Append a `_YYYYmmdd_HHMMSS` timestamp to export file names.
    pub timestamped: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: "cardvision_analysis".to_string(),
            timestamped: true,
        }
    }
}

impl CardVisionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CardVisionError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CardVisionError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl ExtractionConfig {
    /// Truncate text for display, marking the cut with `...`.
    pub fn preview<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        match text.char_indices().nth(self.raw_text_preview_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]).into(),
            None => text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CardVisionConfig =
            serde_json::from_str(r#"{"pdf": {"min_text_length": 20}}"#).unwrap();

        assert_eq!(config.pdf.min_text_length, 20);
        assert!(config.pdf.decrypt_empty_password);
        assert_eq!(config.extraction.raw_text_preview_chars, 2000);
        assert_eq!(config.export.file_prefix, "cardvision_analysis");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CardVisionConfig::default();
        config.export.timestamped = false;
        config.save(&path).unwrap();

        assert_eq!(CardVisionConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = CardVisionConfig::from_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CardVisionError::Io(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let broken = CardVisionConfig::from_file(&path);
        assert!(matches!(broken, Err(CardVisionError::Config(_))));
    }

    #[test]
    fn test_preview_truncates() {
        let config = ExtractionConfig {
            raw_text_preview_chars: 5,
            ..Default::default()
        };

        assert_eq!(config.preview("Statement"), "State...");
        assert_eq!(config.preview("Short"), "Short");
    }
}
