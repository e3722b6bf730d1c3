//! Core library for credit card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction (the upstream text source)
//! - Issuer classification for the supported card issuers
//! - Rule-based field extraction (card suffix, dates, amounts, customer identity)
//! - Transaction parsing with a strict primary and a permissive fallback grammar
//! - Statement record models with stable field names and sentinel conventions

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{CardVisionError, Result};
pub use models::config::CardVisionConfig;
pub use models::statement::{
    Issuer, StatementPeriod, StatementRecord, Transaction, TransactionKind, NOT_FOUND,
};
pub use pdf::{extract_document_text, PdfContent, PdfExtractor, PdfProcessor, PdfType};
pub use statement::{ExtractionResult, StatementAssembler, StatementParser};

use std::path::Path;

/// Parse a single statement text blob into a record with default settings.
pub fn parse_statement(text: &str) -> Result<StatementRecord> {
    Ok(StatementAssembler::new().assemble(text)?)
}

/// Text of a statement document: extracted from a PDF, or read as-is from
/// a `.txt` file.
pub fn read_document_text(path: &Path, config: &CardVisionConfig) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let data = std::fs::read(path)?;
            Ok(extract_document_text(&data, &config.pdf)?)
        }
        "txt" => Ok(std::fs::read_to_string(path)?),
        _ => Err(CardVisionError::UnsupportedFormat(extension)),
    }
}
