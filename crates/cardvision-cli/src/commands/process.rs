//! Process command - extract data from a single statement.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardvision_core::{read_document_text, StatementAssembler, StatementParser};

use super::{display_name, load_config, OutputFormat};
use crate::export::{self, DocumentRecord};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print a preview of the extracted text to stderr
    #[arg(long)]
    show_text: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Reading document...");
    pb.set_position(10);
    let text = read_document_text(&args.input, &config)?;

    pb.set_message("Extracting statement data...");
    pb.set_position(60);
    let result = StatementAssembler::from_config(&config.extraction).parse(&text)?;

    pb.set_position(100);
    pb.finish_and_clear();

    if args.show_text {
        eprintln!("{}", style("Extracted text:").bold());
        eprintln!("{}", config.extraction.preview(&text));
        eprintln!();
    }

    let document = DocumentRecord::from_result(display_name(&args.input), result);
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
        OutputFormat::Csv => export::to_csv(std::slice::from_ref(&document))?,
        OutputFormat::Text => export::to_text(&document),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
