//! Assembles the classifier, field extractors and transaction parser into
//! one statement record.

use std::time::Instant;

use tracing::{debug, info};

use super::rules::{
    CardLast4Extractor, CustomerIdExtractor, CustomerNameExtractor, DueDateExtractor,
    FieldExtractor, IssuerClassifier, MinimumDueExtractor, StatementDateExtractor,
    StatementPeriodExtractor, TotalDueExtractor, TransactionParser,
};
use super::{Result, StatementParser};
use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::statement::{StatementRecord, NOT_FOUND};

/// Result of statement extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted statement record.
    pub record: StatementRecord,
    /// Raw extracted text, when requested.
    pub raw_text: Option<String>,
    /// One warning per field that fell back to the sentinel.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Builds a [`StatementRecord`] from statement text.
///
/// Holds no per-document state: a single assembler can be shared across
/// threads and documents.
pub struct StatementAssembler {
    keep_raw_text: bool,
}

impl StatementAssembler {
    /// Create a new assembler with default settings.
    pub fn new() -> Self {
        Self {
            keep_raw_text: false,
        }
    }

    /// Create an assembler from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_raw_text(config.keep_raw_text)
    }

    /// Keep the raw text on extraction results.
    pub fn with_raw_text(mut self, keep: bool) -> Self {
        self.keep_raw_text = keep;
        self
    }

    /// Extract the record for one text blob.
    ///
    /// Empty or whitespace-only text is treated as unavailable and yields
    /// [`ExtractionError::NoText`] instead of an all-sentinel record.
    pub fn assemble(&self, text: &str) -> Result<StatementRecord> {
        if text.trim().is_empty() {
            return Err(ExtractionError::NoText);
        }

        let transactions = TransactionParser::new().parse(text);

        Ok(StatementRecord {
            issuer: IssuerClassifier::new().classify(text),
            card_last_4: or_not_found(CardLast4Extractor::new().extract(text)),
            statement_date: or_not_found(StatementDateExtractor::new().extract(text)),
            statement_period: or_not_found(
                StatementPeriodExtractor::new()
                    .extract(text)
                    .map(|period| period.to_string()),
            ),
            total_due: or_not_found(TotalDueExtractor::new().extract(text)),
            minimum_due: or_not_found(MinimumDueExtractor::new().extract(text)),
            due_date: or_not_found(DueDateExtractor::new().extract(text)),
            sample_transaction: transactions.sample,
            transaction_count: transactions.count,
            customer_name: CustomerNameExtractor::new().extract(text),
            customer_id: CustomerIdExtractor::new().extract(text),
        })
    }
}

fn or_not_found(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_FOUND.to_string())
}

impl Default for StatementAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for StatementAssembler {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        info!("Parsing statement from {} characters of text", text.len());

        let record = self.assemble(text)?;

        let warnings: Vec<String> = record
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        for warning in &warnings {
            debug!("{}", warning);
        }

        debug!(
            "Extracted statement from {} with {} transactions, {} fields missing",
            record.issuer,
            record.transaction_count,
            warnings.len()
        );

        Ok(ExtractionResult {
            record,
            raw_text: self.keep_raw_text.then(|| text.to_string()),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
