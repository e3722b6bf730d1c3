//! Card suffix extraction.
//!
//! Accepts the last four digits after any of the masking notations issuers
//! print (`XXXX-XXXX-XXXX-1234`, `xx1234`, "card ending with 1234"). The
//! digits are returned as-is; there is no Luhn or length cross-check.

use super::patterns::CARD_LAST_4_RULES;
use super::{FieldExtractor, PatternExtractor};

/// Card suffix extractor.
pub struct CardLast4Extractor;

impl CardLast4Extractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, CARD_LAST_4_RULES.as_slice())
    }
}

impl Default for CardLast4Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CardLast4Extractor {
    type Output = String;

    const FIELD: &'static str = "card_last_4";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

/// Extract the last four card digits from statement text.
pub fn extract_card_last_4(text: &str) -> Option<String> {
    CardLast4Extractor::new().extract(text)
}
