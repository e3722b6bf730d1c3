//! Statement field extraction engine.

mod assembler;
pub mod rules;

pub use assembler::{ExtractionResult, StatementAssembler};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for statement parsing.
pub trait StatementParser {
    /// Parse one statement text blob.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}
