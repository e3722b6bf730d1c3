//! Statement period extraction.
//!
//! Two grammars exist: a single upper bound ("date range: upto 15 Mar 2024")
//! and a from/to range. The matched rule decides the variant, so open and
//! closed billing windows stay distinguishable downstream.

use super::patterns::STATEMENT_PERIOD_RULES;
use super::{FieldExtractor, PatternExtractor};
use crate::models::statement::StatementPeriod;

/// Statement period extractor.
pub struct StatementPeriodExtractor;

impl StatementPeriodExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn patterns(&self) -> PatternExtractor<StatementPeriod> {
        PatternExtractor::new(Self::FIELD, STATEMENT_PERIOD_RULES.as_slice())
    }
}

impl Default for StatementPeriodExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for StatementPeriodExtractor {
    type Output = StatementPeriod;

    const FIELD: &'static str = "statement_period";

    fn extract(&self, text: &str) -> Option<StatementPeriod> {
        self.patterns().find(text).map(|m| m.value)
    }
}

/// Extract the billing cycle window from statement text.
pub fn extract_statement_period(text: &str) -> Option<StatementPeriod> {
    StatementPeriodExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labelled_month_range() {
        let period = extract_statement_period("Statement Period 01 Jan 2024 - 31 Jan 2024").unwrap();
        assert_eq!(
            period,
            StatementPeriod::Range("01 Jan 2024".to_string(), "31 Jan 2024".to_string())
        );
        assert_eq!(period.to_string(), "01 Jan 2024 to 31 Jan 2024");
    }

    #[test]
    fn test_single_bound() {
        let period = extract_statement_period("date range: upto 15 Mar 2024").unwrap();
        assert_eq!(period, StatementPeriod::SingleBound("15 Mar 2024".to_string()));
        assert_eq!(period.to_string(), "Upto 15 Mar 2024");
    }

    #[test]
    fn test_single_bound_with_comma() {
        let period = extract_statement_period("Date Range 5 Apr, 2024").unwrap();
        assert_eq!(period.to_string(), "Upto 5 Apr, 2024");
    }

    #[test]
    fn test_labelled_dashed_range() {
        let period =
            extract_statement_period("Statement Period 01-Feb-2024 to 29-Feb-2024").unwrap();
        assert_eq!(period.to_string(), "01-Feb-2024 to 29-Feb-2024");
    }

    #[test]
    fn test_numeric_ranges() {
        assert_eq!(
            extract_statement_period("Billing Cycle: 01/03/2024 - 31/03/2024")
                .unwrap()
                .to_string(),
            "01/03/2024 to 31/03/2024"
        );
        assert_eq!(
            extract_statement_period("for transactions from 01-04-2024 to 30-04-2024")
                .unwrap()
                .to_string(),
            "01-04-2024 to 30-04-2024"
        );
    }

    #[test]
    fn test_range_rule_precedes_single_bound() {
        let text = "date range: upto 15 Mar 2024\nStatement Period 16 Feb 2024 - 15 Mar 2024";
        let found = StatementPeriodExtractor::new().patterns().find(text).unwrap();

        assert_eq!(found.rule, "labelled_month_range");
        assert!(matches!(found.value, StatementPeriod::Range(_, _)));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(extract_statement_period("Statement Period unknown"), None);
    }
}
