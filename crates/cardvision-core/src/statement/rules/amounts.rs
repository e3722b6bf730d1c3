//! Total and minimum amount due extraction.
//!
//! Amounts keep their original digit grouping and decimal punctuation; the
//! only formatting applied is the `"INR "` prefix.

use super::patterns::{MINIMUM_DUE_RULES, TOTAL_DUE_RULES};
use super::{FieldExtractor, PatternExtractor};

/// Total amount due extractor.
pub struct TotalDueExtractor;

impl TotalDueExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, TOTAL_DUE_RULES.as_slice())
    }
}

impl Default for TotalDueExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TotalDueExtractor {
    type Output = String;

    const FIELD: &'static str = "total_due";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

/// Minimum amount due extractor.
pub struct MinimumDueExtractor;

impl MinimumDueExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, MINIMUM_DUE_RULES.as_slice())
    }
}

impl Default for MinimumDueExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MinimumDueExtractor {
    type Output = String;

    const FIELD: &'static str = "minimum_due";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

pub fn extract_total_due(text: &str) -> Option<String> {
    TotalDueExtractor::new().extract(text)
}

pub fn extract_minimum_due(text: &str) -> Option<String> {
    MinimumDueExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_due_preserves_grouping() {
        assert_eq!(
            extract_total_due("Total Amount Due INR 12,345.67"),
            Some("INR 12,345.67".to_string())
        );
        assert_eq!(
            extract_total_due("Total Amount Due ₹ 1,23,456"),
            Some("INR 1,23,456".to_string())
        );
    }

    #[test]
    fn test_total_due_loose_phrases() {
        assert_eq!(
            extract_total_due("Total Due: Rs. 5,000.00"),
            Some("INR 5,000.00".to_string())
        );
        assert_eq!(
            extract_total_due("Outstanding Balance: 7,250.50"),
            Some("INR 7,250.50".to_string())
        );
    }

    #[test]
    fn test_minimum_due() {
        let text = "Total Amount Due INR 12,345.67\nMinimum Amount Due INR 617.28";

        assert_eq!(extract_minimum_due(text), Some("INR 617.28".to_string()));
        assert_eq!(extract_total_due(text), Some("INR 12,345.67".to_string()));
    }

    #[test]
    fn test_minimum_due_loose() {
        let found = MinimumDueExtractor::new()
            .patterns()
            .find("minimum due: inr 500")
            .unwrap();

        assert_eq!(found.value, "INR 500");
        assert_eq!(found.rule, "minimum_due");
    }

    #[test]
    fn test_not_found() {
        assert_eq!(extract_total_due("No dues pending"), None);
        assert_eq!(extract_minimum_due("No dues pending"), None);
    }
}
