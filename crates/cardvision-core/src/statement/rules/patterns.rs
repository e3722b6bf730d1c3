//! Ordered rule tables for card statement extraction.
//!
//! Order inside every table is significant: earlier rules are more specific
//! and win even when a later rule would match earlier in the text.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{group1, group1_inr, group1_trimmed, ExtractionRule};
use crate::models::statement::StatementPeriod;

fn period_range(caps: &Captures<'_>) -> StatementPeriod {
    StatementPeriod::Range(caps[1].to_string(), caps[2].to_string())
}

fn period_upto(caps: &Captures<'_>) -> StatementPeriod {
    StatementPeriod::SingleBound(caps[1].to_string())
}

lazy_static! {
    // Card suffix after a masked card number
    pub static ref CARD_LAST_4_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "card_product_masked",
            r"Card\s+[A-Za-z\s]+\(XXXX-XXXX-XXXX-(\d{4})\)",
            group1,
        ),
        ExtractionRule::new("masked_dashed", r"XXXX-XXXX-XXXX-(\d{4})", group1),
        ExtractionRule::new("card_ending_with", r"card\s*ending\s*with\s*\d*(\d{4})", group1),
        ExtractionRule::new("xx_prefix", r"xx\s*(\d{4})", group1),
        ExtractionRule::new("card_then_xx", r"card.*?xx.*?(\d{4})", group1),
        ExtractionRule::new("masked_spaced", r"xxxx\s*xxxx\s*xxxx\s*(\d{4})", group1),
    ];

    // Billing cycle: ranges and single upper bounds
    pub static ref STATEMENT_PERIOD_RULES: Vec<ExtractionRule<StatementPeriod>> = vec![
        ExtractionRule::new(
            "labelled_month_range",
            r"Statement Period\s+(\d{2}\s+[A-Za-z]{3}\s+\d{4})\s*-\s*(\d{2}\s+[A-Za-z]{3}\s+\d{4})",
            period_range,
        ),
        ExtractionRule::new(
            "labelled_dashed_range",
            r"Statement Period\s+(\d{2}-[A-Za-z]{3}-\d{4})\s*to\s*(\d{2}-[A-Za-z]{3}-\d{4})",
            period_range,
        ),
        ExtractionRule::new(
            "date_range_upto",
            r"date\s*range[:\s]*(?:upto\s*)?(\d{1,2}\s+[A-Za-z]{3},?\s+\d{4})",
            period_upto,
        ),
        ExtractionRule::new(
            "statement_numeric_range",
            r"statement\s*(?:period|date|cycle)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})\s*(?:to|-)\s*(\d{2}[/-]\d{2}[/-]\d{4})",
            period_range,
        ),
        ExtractionRule::new(
            "billing_numeric_range",
            r"billing\s*(?:period|cycle)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})\s*(?:to|-)\s*(\d{2}[/-]\d{2}[/-]\d{4})",
            period_range,
        ),
        ExtractionRule::new(
            "from_to_range",
            r"from\s*(\d{2}[/-]\d{2}[/-]\d{4})\s*to\s*(\d{2}[/-]\d{2}[/-]\d{4})",
            period_range,
        ),
    ];

    // Statement generation date
    pub static ref STATEMENT_DATE_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "labelled_month",
            r"Statement Date\s+(\d{2}\s+[A-Za-z]{3}\s+\d{4})",
            group1,
        ),
        ExtractionRule::new(
            "labelled_dashed",
            r"Statement Date\s+(\d{2}-[A-Za-z]{3}-\d{4})",
            group1,
        ),
        ExtractionRule::new(
            "numeric",
            r"statement\s*date[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})",
            group1,
        ),
    ];

    // Payment due date
    pub static ref DUE_DATE_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "labelled_month",
            r"Payment Due Date\s+(\d{2}\s+[A-Za-z]{3}\s+\d{4})",
            group1,
        ),
        ExtractionRule::new(
            "labelled_dashed",
            r"Payment Due Date\s+(\d{2}-[A-Za-z]{3}-\d{4})",
            group1,
        ),
        ExtractionRule::new(
            "due_numeric",
            r"due\s*(?:date|by)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})",
            group1,
        ),
        ExtractionRule::new(
            "payment_due_numeric",
            r"payment\s*due\s*(?:date|by)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})",
            group1,
        ),
        ExtractionRule::new("pay_by_numeric", r"pay\s*by[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})", group1),
    ];

    // Total amount due
    pub static ref TOTAL_DUE_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "labelled_inr",
            r"Total Amount Due\s+INR\s+([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "labelled_rupee",
            r"Total Amount Due\s+(?:Rs\.?|₹)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "total_due",
            r"total\s*(?:amount\s*)?due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "amount_due",
            r"amount\s*due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "payment_due",
            r"payment\s*due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "outstanding",
            r"outstanding\s*(?:amount|balance)[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
    ];

    // Minimum amount due
    pub static ref MINIMUM_DUE_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "labelled_inr",
            r"Minimum Amount Due\s+INR\s+([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "labelled_rupee",
            r"Minimum Amount Due\s+(?:Rs\.?|₹)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
        ExtractionRule::new(
            "minimum_due",
            r"minimum\s*(?:amount\s*)?due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            group1_inr,
        ),
    ];

    // Customer identity
    pub static ref CUSTOMER_NAME_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "labelled_name",
            r"(?:Name|Customer Name)[:\s]+([A-Z][A-Za-z\s]+?)(?:\n|Customer|Card)",
            group1_trimmed,
        ),
    ];

    pub static ref CUSTOMER_ID_RULES: Vec<ExtractionRule<String>> = vec![
        ExtractionRule::new(
            "labelled_id",
            r"(?:Customer ID|Account Number)[:\s]+(\d+)",
            group1,
        ),
    ];

    // Transaction lines: <date> <DEBIT|CREDIT> <description> <amount>.
    // Case-sensitive so summary tables in prose case do not count.
    pub static ref PRIMARY_TRANSACTION: Regex = Regex::new(
        r"(\d{2}-[A-Za-z]{3}-\d{4})\s+(DEBIT|CREDIT)\s+([A-Za-z\s]+?)\s+([\d,]+\.?\d*)"
    ).unwrap();

    // Typeless transaction lines: <date> <UPPERCASE DESCRIPTION> <amount>
    pub static ref FALLBACK_TRANSACTION: Regex = Regex::new(
        r"(?i)(\d{2}[/-]\d{2}[/-]\d{4})\s+([A-Z\s&\-\.]+?)\s+(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T>(rules: &[ExtractionRule<T>]) -> Vec<&'static str> {
        rules.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_rule_tables_compile_with_unique_names() {
        let tables = [
            names(&CARD_LAST_4_RULES),
            names(&STATEMENT_PERIOD_RULES),
            names(&STATEMENT_DATE_RULES),
            names(&DUE_DATE_RULES),
            names(&TOTAL_DUE_RULES),
            names(&MINIMUM_DUE_RULES),
            names(&CUSTOMER_NAME_RULES),
            names(&CUSTOMER_ID_RULES),
        ];

        for table in tables {
            assert!(!table.is_empty());
            let mut sorted = table.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len(), "duplicate rule name in {:?}", table);
        }
    }

    #[test]
    fn test_primary_transaction_is_case_sensitive() {
        assert!(PRIMARY_TRANSACTION.is_match("05-Jan-2024 DEBIT Coffee Shop 250.00"));
        assert!(!PRIMARY_TRANSACTION.is_match("05-Jan-2024 debit Coffee Shop 250.00"));
    }

    #[test]
    fn test_fallback_transaction_shape() {
        let caps = FALLBACK_TRANSACTION
            .captures("12/01/2024 AMAZON PAY INDIA Rs. 1,499.00")
            .unwrap();
        assert_eq!(&caps[1], "12/01/2024");
        assert_eq!(&caps[2], "AMAZON PAY INDIA");
        assert_eq!(&caps[3], "1,499.00");
    }
}
