//! Export formats for extracted statements.
//!
//! The engine's records carry no document identity; here the file name is
//! attached, records are aggregated, and the sample transaction is flattened
//! into sibling columns for CSV.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use cardvision_core::models::config::ExportConfig;
use cardvision_core::{ExtractionResult, StatementRecord};

/// Rendering for missing sample transaction subfields in flat exports.
const NOT_APPLICABLE: &str = "N/A";

/// A statement record tagged with the document it came from.
///
/// Serializes the record keys first, then `filename`, then `raw_text` when
/// the raw text was kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(flatten)]
    pub record: StatementRecord,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl DocumentRecord {
    pub fn new(filename: impl Into<String>, record: StatementRecord) -> Self {
        Self {
            record,
            filename: filename.into(),
            raw_text: None,
        }
    }

    /// Tag an extraction result, carrying its raw text if the assembler kept it.
    pub fn from_result(filename: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            record: result.record,
            filename: filename.into(),
            raw_text: result.raw_text,
        }
    }
}

/// Aggregate figures for a processed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub documents: usize,
    pub unique_institutions: usize,
    /// Documents whose card suffix was found.
    pub successful: usize,
    /// Whole percentage of successful documents, truncated.
    pub success_rate: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        let documents = records.len();
        let unique_institutions = records
            .iter()
            .map(|r| r.record.issuer)
            .collect::<BTreeSet<_>>()
            .len();
        let successful = records.iter().filter(|r| r.record.is_successful()).count();
        let success_rate = if documents > 0 {
            successful * 100 / documents
        } else {
            0
        };

        Self {
            documents,
            unique_institutions,
            successful,
            success_rate,
        }
    }
}

/// File name for an aggregate export, e.g. `cardvision_analysis_20240115_093000.json`.
pub fn export_file_name(config: &ExportConfig, extension: &str, now: NaiveDateTime) -> String {
    if config.timestamped {
        format!(
            "{}_{}.{}",
            config.file_prefix,
            now.format("%Y%m%d_%H%M%S"),
            extension
        )
    } else {
        format!("{}.{}", config.file_prefix, extension)
    }
}

pub fn to_json(records: &[DocumentRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn to_csv(records: &[DocumentRecord]) -> anyhow::Result<String> {
    let with_name = records.iter().any(|r| r.record.customer_name.is_some());
    let with_id = records.iter().any(|r| r.record.customer_id.is_some());

    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec![
        "Document",
        "Institution",
        "Account_Last4",
        "Statement_Date",
        "Statement_Period",
        "Total_Due",
        "Minimum_Due",
        "Due_Date",
        "Transaction_Count",
        "Sample_Transaction_Date",
        "Sample_Transaction_Type",
        "Sample_Transaction_Description",
        "Sample_Transaction_Amount",
    ];
    if with_name {
        header.push("Customer_Name");
    }
    if with_id {
        header.push("Customer_ID");
    }
    wtr.write_record(&header)?;

    for doc in records {
        let record = &doc.record;
        let sample = &record.sample_transaction;

        let mut row = vec![
            doc.filename.clone(),
            record.issuer.to_string(),
            record.card_last_4.clone(),
            record.statement_date.clone(),
            record.statement_period.clone(),
            record.total_due.clone(),
            record.minimum_due.clone(),
            record.due_date.clone(),
            record.transaction_count.to_string(),
            sample.date.clone(),
            sample
                .kind
                .map(|k| k.to_string())
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            sample.description.clone(),
            sample.amount.clone(),
        ];
        if with_name {
            row.push(record.customer_name.clone().unwrap_or_default());
        }
        if with_id {
            row.push(record.customer_id.clone().unwrap_or_default());
        }
        wtr.write_record(&row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn to_text(doc: &DocumentRecord) -> String {
    let record = &doc.record;
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", doc.filename));

    if record.customer_name.is_some() || record.customer_id.is_some() {
        output.push_str("\nAccount Holder:\n");
        if let Some(name) = &record.customer_name {
            output.push_str(&format!("  Name:        {}\n", name));
        }
        if let Some(id) = &record.customer_id {
            output.push_str(&format!("  Customer ID: {}\n", id));
        }
    }

    output.push_str("\nFinancial Summary:\n");
    output.push_str(&format!("  Institution:      {}\n", record.issuer));
    output.push_str(&format!("  Account Number:   XXXX-{}\n", record.card_last_4));
    output.push_str(&format!("  Statement Date:   {}\n", record.statement_date));
    output.push_str(&format!("  Statement Period: {}\n", record.statement_period));
    output.push_str(&format!("  Total Due:        {}\n", record.total_due));
    output.push_str(&format!("  Minimum Due:      {}\n", record.minimum_due));
    output.push_str(&format!("  Payment Due Date: {}\n", record.due_date));
    output.push_str(&format!("  Transactions:     {}\n", record.transaction_count));

    let sample = &record.sample_transaction;
    output.push_str("\nSample Transaction:\n");
    output.push_str(&format!("  Date:        {}\n", sample.date));
    if let Some(kind) = sample.kind {
        output.push_str(&format!("  Type:        {}\n", kind));
    }
    output.push_str(&format!("  Description: {}\n", sample.description));
    output.push_str(&format!("  Amount:      {}\n", sample.amount));

    output
}
