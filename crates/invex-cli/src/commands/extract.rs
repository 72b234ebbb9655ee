//! Extract command - extract data from a single invoice.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use invex_core::TextFieldExtractor;

use super::config::load_config;
use crate::output::{format_record, OutputFormat};
use crate::source::Source;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file or http(s) URL
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// List labeled fields that were not found
    #[arg(long)]
    show_missing: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let source = Source::parse(&args.input);
    info!("Processing {}", source.name());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Loading PDF...");
    let data = source.load(&config.fetch, &pb).await?;
    debug!("Loaded {} bytes", data.len());

    pb.set_message("Extracting invoice data...");
    let extractor = TextFieldExtractor::from_config(&config);
    let result = extractor
        .parse_pdf(&data)
        .with_context(|| format!("failed to process {}", source.name()))?;

    pb.finish_and_clear();

    if args.show_missing && !result.missing_fields.is_empty() {
        eprintln!("{}", style("Fields not found:").yellow());
        for field in &result.missing_fields {
            eprintln!("  - {}", field);
        }
    }

    let output = format_record(&result.record, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
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
