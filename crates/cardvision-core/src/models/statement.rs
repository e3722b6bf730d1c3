//! Statement data models.
//!
//! Every scalar field on a [`StatementRecord`] holds either the captured
//! substring or the exact [`NOT_FOUND`] sentinel. The two customer fields are
//! optional and are omitted from serialized output when absent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel for a field whose rules were all tried without a match.
pub const NOT_FOUND: &str = "Not found";

/// Known card issuers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Issuer {
    #[serde(rename = "Axis Bank")]
    AxisBank,

    #[serde(rename = "HDFC Bank")]
    HdfcBank,

    #[serde(rename = "ICICI Bank")]
    IciciBank,

    #[serde(rename = "SBI Card")]
    SbiCard,

    #[serde(rename = "IDFC FIRST Bank")]
    IdfcFirstBank,

    /// No issuer signature was found in the text.
    #[serde(rename = "Unknown Issuer")]
    Unknown,
}

impl Issuer {
    /// Issuers the classifier can recognize, in evaluation order.
    pub const SUPPORTED: [Issuer; 5] = [
        Issuer::AxisBank,
        Issuer::HdfcBank,
        Issuer::IciciBank,
        Issuer::SbiCard,
        Issuer::IdfcFirstBank,
    ];

    /// Display name used in records and exports.
    pub fn name(&self) -> &'static str {
        match self {
            Issuer::AxisBank => "Axis Bank",
            Issuer::HdfcBank => "HDFC Bank",
            Issuer::IciciBank => "ICICI Bank",
            Issuer::SbiCard => "SBI Card",
            Issuer::IdfcFirstBank => "IDFC FIRST Bank",
            Issuer::Unknown => "Unknown Issuer",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Issuer::Unknown
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A billing cycle window as it appeared in the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementPeriod {
    /// Only an upper bound was printed ("date range: upto 15 Mar 2024").
    SingleBound(String),
    /// Both ends of the cycle were printed.
    Range(String, String),
}

impl fmt::Display for StatementPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementPeriod::SingleBound(upto) => write!(f, "Upto {}", upto),
            StatementPeriod::Range(from, to) => write!(f, "{} to {}", from, to),
        }
    }
}

/// Transaction direction token from the primary transaction grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "DEBIT")]
    Debit,
    #[serde(rename = "CREDIT")]
    Credit,
}

impl TransactionKind {
    /// Parse the exact upper-case token used in statements.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DEBIT" => Some(TransactionKind::Debit),
            "CREDIT" => Some(TransactionKind::Credit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "DEBIT",
            TransactionKind::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transaction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date substring exactly as captured.
    pub date: String,

    /// Only set by the primary grammar.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,

    /// Trimmed free text.
    pub description: String,

    /// Amount formatted as `"INR <amount>"`.
    pub amount: String,
}

impl Transaction {
    /// Placeholder used when no transaction grammar matched.
    pub fn placeholder() -> Self {
        Self {
            date: NOT_FOUND.to_string(),
            kind: None,
            description: NOT_FOUND.to_string(),
            amount: NOT_FOUND.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind.is_none()
            && self.date == NOT_FOUND
            && self.description == NOT_FOUND
            && self.amount == NOT_FOUND
    }
}

/// Structured record extracted from one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub issuer: Issuer,

    /// Last four digits of the card number.
    pub card_last_4: String,

    pub statement_date: String,

    /// `"Upto <date>"` or `"<date> to <date>"`.
    pub statement_period: String,

    pub total_due: String,

    pub minimum_due: String,

    pub due_date: String,

    pub sample_transaction: Transaction,

    /// Number of primary-grammar transaction matches.
    pub transaction_count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl StatementRecord {
    /// Scalar fields by their serialized name, in record order.
    pub fn scalar_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("issuer", self.issuer.name()),
            ("card_last_4", &self.card_last_4),
            ("statement_date", &self.statement_date),
            ("statement_period", &self.statement_period),
            ("total_due", &self.total_due),
            ("minimum_due", &self.minimum_due),
            ("due_date", &self.due_date),
        ]
    }

    /// Names of scalar fields that fell back to the sentinel.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.scalar_fields()
            .into_iter()
            .filter(|(_, value)| *value == NOT_FOUND)
            .map(|(name, _)| name)
            .collect()
    }

    /// A record counts as a successful extraction when the card suffix was found.
    pub fn is_successful(&self) -> bool {
        self.card_last_4 != NOT_FOUND
    }
}
