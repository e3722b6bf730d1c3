//! Error types for the cardvision-core library.

use thiserror::Error;

/// Main error type for the cardvision library.
#[derive(Error, Debug)]
pub enum CardVisionError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// Document type the pipeline cannot read.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF only contains scanned images; OCR is not supported.
    #[error("PDF contains only scanned images")]
    Scanned,

    /// The PDF yielded no usable text.
    #[error("no text could be extracted from the PDF")]
    NoText,
}

/// Errors related to statement field extraction.
///
/// A field that cannot be found is not an error: it is reported as the
/// `"Not found"` sentinel on the record.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No text was available for the document.
    #[error("no text available for extraction")]
    NoText,
}

/// Result type for the cardvision library.
pub type Result<T> = std::result::Result<T, CardVisionError>;
