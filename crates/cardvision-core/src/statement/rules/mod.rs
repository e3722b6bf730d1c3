//! Rule-based field extractors for card statements.
//!
//! Each scalar field is backed by an ordered table of [`ExtractionRule`]s
//! (see [`patterns`]). A [`PatternExtractor`] walks its table in priority
//! order and returns the first rule that matches; the issuer-tailored,
//! labelled rules sit before the loose contextual ones.

pub mod amounts;
pub mod card;
pub mod customer;
pub mod dates;
pub mod issuer;
pub mod patterns;
pub mod period;
pub mod transactions;

pub use amounts::{extract_minimum_due, extract_total_due, MinimumDueExtractor, TotalDueExtractor};
pub use card::{extract_card_last_4, CardLast4Extractor};
pub use customer::{extract_customer_id, extract_customer_name, CustomerIdExtractor, CustomerNameExtractor};
pub use dates::{extract_due_date, extract_statement_date, DueDateExtractor, StatementDateExtractor};
pub use issuer::{detect_issuer, IssuerClassifier, ISSUER_SIGNATURES};
pub use period::{extract_statement_period, StatementPeriodExtractor};
pub use transactions::{TransactionGrammar, TransactionParser, TransactionSummary};

use regex::{Captures, Regex, RegexBuilder};
use tracing::trace;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Serialized name of the field this extractor fills.
    const FIELD: &'static str;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Maps the captures of a matched rule to the field value.
pub type CaptureFn<T> = fn(&Captures<'_>) -> T;

/// One pattern in a field's ordered rule table.
pub struct ExtractionRule<T> {
    /// Short identifier used in logs and tests.
    pub name: &'static str,
    /// Case-insensitive pattern.
    pub pattern: Regex,
    /// Formats the captured groups into the field value.
    pub capture: CaptureFn<T>,
}

impl<T> ExtractionRule<T> {
    /// Compile a rule. Patterns are static literals, so a bad one is a bug.
    pub fn new(name: &'static str, pattern: &str, capture: CaptureFn<T>) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("invalid pattern for rule {}: {}", name, e));
        Self {
            name,
            pattern,
            capture,
        }
    }

    /// Apply this rule alone to the text.
    pub fn apply(&self, text: &str) -> Option<ExtractionMatch<T>> {
        let caps = self.pattern.captures(text)?;
        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new((self.capture)(&caps), self.name, full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

impl<T> std::fmt::Debug for ExtractionRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// A value together with the rule and text that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the rule that matched.
    pub rule: &'static str,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// First-match-wins evaluation over an ordered rule table.
pub struct PatternExtractor<T: 'static> {
    field: &'static str,
    rules: &'static [ExtractionRule<T>],
}

impl<T> PatternExtractor<T> {
    pub fn new(field: &'static str, rules: &'static [ExtractionRule<T>]) -> Self {
        Self { field, rules }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The rule table in evaluation order.
    pub fn rules(&self) -> &'static [ExtractionRule<T>] {
        self.rules
    }

    /// Evaluate the rules in order, returning the first match.
    pub fn find(&self, text: &str) -> Option<ExtractionMatch<T>> {
        let found = self.rules.iter().find_map(|rule| rule.apply(text));

        match &found {
            Some(m) => trace!("{}: rule '{}' matched {:?}", self.field, m.rule, m.source),
            None => trace!("{}: no rule matched", self.field),
        }

        found
    }
}

/// Capture group 1 verbatim.
pub(crate) fn group1(caps: &Captures<'_>) -> String {
    caps[1].to_string()
}

/// Capture group 1 trimmed of surrounding whitespace.
pub(crate) fn group1_trimmed(caps: &Captures<'_>) -> String {
    caps[1].trim().to_string()
}

/// Capture group 1 as an `"INR <amount>"` string, digit grouping preserved.
pub(crate) fn group1_inr(caps: &Captures<'_>) -> String {
    format_inr(&caps[1])
}

/// Prefix an amount substring with the currency code.
pub fn format_inr(amount: &str) -> String {
    format!("INR {}", amount)
}
