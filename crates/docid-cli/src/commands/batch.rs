//! Batch command - extract identifiers from many OCR text dumps.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use docid_core::{DocumentType, ExtractionResult, IdentifierExtractor};

use super::extract::DocKind;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (raw OCR text dumps)
    #[arg(required = true)]
    input: String,

    /// Document type to extract for
    #[arg(short, long, value_enum, default_value = "registration")]
    doc_type: DocKind,

    /// Write a summary CSV to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Result of processing a single dump.
struct BatchRow {
    path: PathBuf,
    result: ExtractionResult,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

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
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let document_type = DocumentType::from(args.doc_type);
    let extractor = IdentifierExtractor::new(document_type);
    let mut rows = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => rows.push(BatchRow {
                result: extractor.extract(&text),
                path,
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    for row in &rows {
        match &row.result.identifier {
            Some(identifier) => {
                println!("{} {}: {}", style("✓").green(), row.path.display(), identifier);
            }
            None => {
                println!("{} {}: no identifier", style("✗").red(), row.path.display());
            }
        }
    }

    let found = rows.iter().filter(|r| r.result.is_found()).count();
    println!();
    println!(
        "{} {}/{} extracted in {:.1}s",
        style("ℹ").blue(),
        found,
        rows.len(),
        start.elapsed().as_secs_f32()
    );

    if let Some(output) = &args.output {
        write_summary_csv(output, &rows)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            output.display()
        );
    }

    Ok(())
}

fn write_summary_csv(path: &PathBuf, rows: &[BatchRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "document_type", "identifier", "source", "ocr_attempts"])?;

    for row in rows {
        wtr.write_record([
            row.path.display().to_string(),
            row.result.document_type.to_string(),
            row.result.identifier.clone().unwrap_or_default(),
            format!("{:?}", row.result.source),
            row.result.ocr_attempts.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
