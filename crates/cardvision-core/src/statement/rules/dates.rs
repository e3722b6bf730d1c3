//! Statement date and payment due date extraction.
//!
//! Textual-month and numeric notations are both accepted. The captured
//! substring is returned verbatim; dates are never normalized or parsed.

use super::patterns::{DUE_DATE_RULES, STATEMENT_DATE_RULES};
use super::{FieldExtractor, PatternExtractor};

/// Statement generation date extractor.
pub struct StatementDateExtractor;

impl StatementDateExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, STATEMENT_DATE_RULES.as_slice())
    }
}

impl Default for StatementDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for StatementDateExtractor {
    type Output = String;

    const FIELD: &'static str = "statement_date";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

/// Payment due date extractor.
pub struct DueDateExtractor;

impl DueDateExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, DUE_DATE_RULES.as_slice())
    }
}

impl Default for DueDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DueDateExtractor {
    type Output = String;

    const FIELD: &'static str = "due_date";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

pub fn extract_statement_date(text: &str) -> Option<String> {
    StatementDateExtractor::new().extract(text)
}

pub fn extract_due_date(text: &str) -> Option<String> {
    DueDateExtractor::new().extract(text)
}
