//! Customer identity extraction.
//!
//! Both fields are optional. A layout without a name or id label simply has
//! no value; callers must not turn this into the `"Not found"` sentinel.

use super::patterns::{CUSTOMER_ID_RULES, CUSTOMER_NAME_RULES};
use super::{FieldExtractor, PatternExtractor};

/// Customer name extractor.
pub struct CustomerNameExtractor;

impl CustomerNameExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, CUSTOMER_NAME_RULES.as_slice())
    }
}

impl Default for CustomerNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CustomerNameExtractor {
    type Output = String;

    const FIELD: &'static str = "customer_name";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

/// Customer id extractor.
pub struct CustomerIdExtractor;

impl CustomerIdExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<String> {
        PatternExtractor::new(Self::FIELD, CUSTOMER_ID_RULES.as_slice())
    }
}

impl Default for CustomerIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CustomerIdExtractor {
    type Output = String;

    const FIELD: &'static str = "customer_id";

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns().find(text).map(|m| m.value)
    }
}

pub fn extract_customer_name(text: &str) -> Option<String> {
    CustomerNameExtractor::new().extract(text)
}

pub fn extract_customer_id(text: &str) -> Option<String> {
    CustomerIdExtractor::new().extract(text)
}
