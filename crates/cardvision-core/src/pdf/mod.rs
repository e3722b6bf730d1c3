//! PDF text extraction, the upstream text source for the statement engine.

mod extractor;

pub use extractor::{extract_document_text, PdfContent, PdfExtractor};

use crate::error::PdfError;

/// Type of PDF content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// Contains only images (scanned document).
    Scanned,
    /// Empty or unreadable.
    Empty,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}
