//! PDF text extraction using lopdf and pdf-extract.

use lopdf::{Document, Object};
use tracing::{debug, trace};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    decrypt_empty_password: bool,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Type of PDF content.
    pub pdf_type: PdfType,
    /// Number of pages.
    pub page_count: u32,
    /// Extracted text (empty for scanned documents).
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            decrypt_empty_password: true,
        }
    }

    /// Set whether encrypted PDFs are retried with an empty password.
    pub fn with_empty_password_decryption(mut self, enabled: bool) -> Self {
        self.decrypt_empty_password = enabled;
        self
    }

    /// Extract text and classify the loaded document.
    pub fn extract_all(&self) -> Result<PdfContent> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = self.extract_text().unwrap_or_default();
        let pdf_type = self.classify(&text);

        Ok(PdfContent {
            pdf_type,
            page_count: self.page_count(),
            text,
        })
    }

    /// Whether any object in the document is an image XObject.
    pub fn has_image_objects(&self) -> bool {
        let Some(doc) = self.document.as_ref() else {
            return false;
        };

        let count = doc
            .objects
            .values()
            .filter(|object| is_image_object(object))
            .count();

        trace!("Found {} image objects in document", count);
        count > 0
    }

    fn classify(&self, text: &str) -> PdfType {
        let has_text = !text.trim().is_empty();
        let has_images = self.has_image_objects();

        let pdf_type = match (has_text, has_images) {
            (true, _) => PdfType::Text,
            (false, true) => PdfType::Scanned,
            (false, false) => PdfType::Empty,
        };

        debug!(
            "PDF analysis: has_text={}, has_images={} -> {:?}",
            has_text, has_images, pdf_type
        );
        pdf_type
    }
}

fn is_image_object(object: &Object) -> bool {
    match object {
        Object::Stream(stream) => stream
            .dict
            .get(b"Subtype")
            .and_then(|subtype| subtype.as_name())
            .map(|name| name == b"Image")
            .unwrap_or(false),
        _ => false,
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.raw_data.is_empty() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

/// Obtain the single text blob for a PDF document.
///
/// Returns an error instead of empty text so that callers never run the
/// engine on a document with nothing to read.
pub fn extract_document_text(data: &[u8], config: &PdfConfig) -> Result<String> {
    let mut extractor =
        PdfExtractor::new().with_empty_password_decryption(config.decrypt_empty_password);
    extractor.load(data)?;

    let content = extractor.extract_all()?;
    let readable = content.text.trim().chars().count();

    if readable >= config.min_text_length.max(1) {
        debug!(
            "Extracted {} characters from {} pages",
            content.text.len(),
            content.page_count
        );
        return Ok(content.text);
    }

    match content.pdf_type {
        PdfType::Scanned => Err(PdfError::Scanned),
        PdfType::Text | PdfType::Empty => Err(PdfError::NoText),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(!extractor.has_image_objects());
    }

    #[test]
    fn test_extract_all_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_all(), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_garbage_input_is_parse_error() {
        let result = extract_document_text(b"not a pdf", &PdfConfig::default());
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
