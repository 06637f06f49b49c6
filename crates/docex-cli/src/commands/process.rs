//! Process command - extract fields from a single document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use docex_core::models::config::DocexConfig;
use docex_core::{DocumentPipeline, ExtractionMode, ExtractionRecord};

use super::{format_record_text, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Extraction mode: model (alias llm) or rules [default: from config]
    #[arg(short, long)]
    mode: Option<ExtractionMode>,

    /// Fall back to the rule cascade when model extraction fails
    #[arg(long)]
    fallback: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON record
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Check input before touching configuration or services
    check_input(&args.input)?;

    let config = load_config(config_path)?;
    let mode = args.mode.unwrap_or(config.extraction.mode);

    info!("Processing file: {} ({} mode)", args.input.display(), mode);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Extracting fields ({} mode)...", mode));

    let result = process_file(&args.input, &config, mode, args.fallback);
    pb.finish_and_clear();
    let record = result?;

    let output = format_record(&record, args.format)?;

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

/// Reject paths that do not exist or are not PDFs.
pub fn check_input(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {} (expected pdf)", extension);
    }

    Ok(())
}

/// Read `path` and run the pipeline over it.
pub fn process_file(
    path: &Path,
    config: &DocexConfig,
    mode: ExtractionMode,
    fallback: bool,
) -> anyhow::Result<ExtractionRecord> {
    let data = fs::read(path)?;
    let pipeline = DocumentPipeline::from_config(config)?;

    let record = if fallback {
        pipeline.process_with_fallback(&data, mode)?
    } else {
        pipeline.process(&data, mode)?
    };

    Ok(record)
}

fn format_record(record: &ExtractionRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}
