//! Batch processing command for multiple statement files.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use cardvision_core::models::config::CardVisionConfig;

use super::{display_name, is_supported, load_config, process_document, OutputFormat};
use crate::export::{self, BatchSummary, DocumentRecord};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of input files (PDF or plain text)
    #[arg(required = true)]
    input: String,

    /// Output directory for the aggregate export (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Aggregate export format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Number of documents processed concurrently
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    outcome: anyhow::Result<DocumentRecord>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = Arc::new(load_config(config_path)?);

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // buffered keeps input order while running up to `jobs` documents at once
    let joined = stream::iter(files)
        .map(|path| {
            let config = Arc::clone(&config);
            let pb = pb.clone();
            tokio::task::spawn_blocking(move || {
                let outcome = process_document(&path, &config);
                pb.inc(1);
                ProcessResult { path, outcome }
            })
        })
        .buffered(args.jobs.max(1))
        .collect::<Vec<_>>()
        .await;

    pb.finish_and_clear();

    let mut records = Vec::with_capacity(joined.len());
    let mut failed = Vec::new();

    for result in joined {
        let ProcessResult { path, outcome } = result?;
        match outcome {
            Ok(record) => records.push(record),
            Err(e) if args.continue_on_error => {
                warn!("Failed to process {}: {}", path.display(), e);
                failed.push((display_name(&path), e.to_string()));
            }
            Err(e) => {
                error!("Failed to process {}: {}", path.display(), e);
                anyhow::bail!("Processing failed for {}: {}", path.display(), e);
            }
        }
    }

    if !records.is_empty() {
        let output_path = write_export(&records, &args, &config)?;
        println!(
            "{} Results written to {}",
            style("✓").green(),
            output_path.display()
        );
    }

    let summary = BatchSummary::from_records(&records);

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        records.len() + failed.len(),
        start.elapsed()
    );
    println!("   Documents processed:    {}", summary.documents);
    println!("   Unique institutions:    {}", summary.unique_institutions);
    println!(
        "   Successful extractions: {}",
        style(summary.successful).green()
    );
    println!("   Success rate:           {}%", summary.success_rate);

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (name, reason) in &failed {
            println!("  - {}: {}", name, reason);
        }
    }

    Ok(())
}

fn write_export(
    records: &[DocumentRecord],
    args: &BatchArgs,
    config: &CardVisionConfig,
) -> anyhow::Result<PathBuf> {
    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let file_name = export::export_file_name(
        &config.export,
        args.format.extension(),
        chrono::Local::now().naive_local(),
    );
    let output_path = output_dir.join(file_name);

    let content = match args.format {
        OutputFormat::Json => export::to_json(records)?,
        OutputFormat::Csv => export::to_csv(records)?,
        OutputFormat::Text => records
            .iter()
            .map(export::to_text)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    fs::write(&output_path, content)?;
    Ok(output_path)
}
