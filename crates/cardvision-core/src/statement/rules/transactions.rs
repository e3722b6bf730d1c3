//! Transaction line parsing.
//!
//! The primary grammar (`<date> <DEBIT|CREDIT> <description> <amount>`) is
//! strict and every match counts. Only when it finds nothing is the typeless
//! fallback grammar consulted, and then just for a sample transaction.

use tracing::debug;

use super::format_inr;
use super::patterns::{FALLBACK_TRANSACTION, PRIMARY_TRANSACTION};
use crate::models::statement::{Transaction, TransactionKind};

/// Which grammar produced the sample transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionGrammar {
    Primary,
    Fallback,
    /// Neither grammar matched; the sample is the placeholder.
    None,
}

/// Result of parsing the transactions of one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub sample: Transaction,
    /// Number of primary-grammar matches.
    pub count: usize,
    pub grammar: TransactionGrammar,
}

/// Transaction parser.
pub struct TransactionParser;

impl TransactionParser {
    pub fn new() -> Self {
        Self
    }

    /// All primary-grammar transactions, in document order.
    pub fn extract_all(&self, text: &str) -> Vec<Transaction> {
        PRIMARY_TRANSACTION
            .captures_iter(text)
            .filter_map(|caps| {
                Some(Transaction {
                    date: caps[1].to_string(),
                    kind: Some(TransactionKind::from_token(&caps[2])?),
                    description: caps[3].trim().to_string(),
                    amount: format_inr(&caps[4]),
                })
            })
            .collect()
    }

    /// First transaction in the typeless fallback grammar.
    pub fn extract_fallback(&self, text: &str) -> Option<Transaction> {
        let caps = FALLBACK_TRANSACTION.captures(text)?;
        Some(Transaction {
            date: caps[1].to_string(),
            kind: None,
            description: caps[2].trim().to_string(),
            amount: format_inr(&caps[3]),
        })
    }

    /// Count the transactions and pick the sample.
    pub fn parse(&self, text: &str) -> TransactionSummary {
        let transactions = self.extract_all(text);
        let count = transactions.len();

        if let Some(first) = transactions.into_iter().next() {
            return TransactionSummary {
                sample: first,
                count,
                grammar: TransactionGrammar::Primary,
            };
        }

        debug!("No typed transaction lines, trying fallback grammar");

        match self.extract_fallback(text) {
            Some(sample) => TransactionSummary {
                sample,
                count: 0,
                grammar: TransactionGrammar::Fallback,
            },
            None => TransactionSummary {
                sample: Transaction::placeholder(),
                count: 0,
                grammar: TransactionGrammar::None,
            },
        }
    }
}

impl Default for TransactionParser {
    fn default() -> Self {
        Self::new()
    }
}
