//! Extract command - recover an identifier from a single file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use docid_core::{DocumentType, ExtractionResult, IdentifierExtractor, RetryConfig};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (raw OCR text dump, or a document image with --image)
    #[arg(required = true)]
    input: PathBuf,

    /// Document type to extract for
    #[arg(short, long, value_enum, default_value = "registration")]
    doc_type: DocKind,

    /// Treat the input as a document image and run OCR on it
    /// (requires a build with the `tesseract` feature)
    #[arg(long)]
    image: bool,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DocKind {
    /// Driving licence
    License,
    /// Vehicle registration certificate
    Registration,
}

impl From<DocKind> for DocumentType {
    fn from(kind: DocKind) -> Self {
        match kind {
            DocKind::License => DocumentType::DrivingLicense,
            DocKind::Registration => DocumentType::VehicleRegistration,
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let retry = load_retry(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let document_type = DocumentType::from(args.doc_type);

    let result = if args.image {
        extract_from_image(&args.input, document_type, retry).await?
    } else {
        let text = fs::read_to_string(&args.input)?;
        debug!(chars = text.len(), "loaded OCR dump");
        IdentifierExtractor::new(document_type).extract(&text)
    };

    print_result(&result, args.json)
}

fn load_retry(config_path: Option<&str>) -> anyhow::Result<RetryConfig> {
    match config_path {
        Some(path) => Ok(RetryConfig::from_file(Path::new(path))?),
        None => Ok(RetryConfig::default()),
    }
}

#[cfg(feature = "tesseract")]
async fn extract_from_image(
    path: &Path,
    document_type: DocumentType,
    retry: RetryConfig,
) -> anyhow::Result<ExtractionResult> {
    use docid_core::{ExtractionSession, TesseractRecognizer};

    let bytes = fs::read(path)?;
    let session = ExtractionSession::new(TesseractRecognizer::new()).with_retry(retry);
    Ok(session.extract(&bytes, document_type).await)
}

#[cfg(not(feature = "tesseract"))]
async fn extract_from_image(
    _path: &Path,
    _document_type: DocumentType,
    _retry: RetryConfig,
) -> anyhow::Result<ExtractionResult> {
    anyhow::bail!("--image requires a build with the `tesseract` feature")
}

fn print_result(result: &ExtractionResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    match &result.identifier {
        Some(identifier) => {
            println!("{} {}", style("✓").green(), style(identifier).bold());
            println!(
                "  source: {:?}, ocr passes: {}",
                result.source, result.ocr_attempts
            );
        }
        None => {
            println!(
                "{} no identifier found - manual entry required",
                style("✗").red()
            );
        }
    }

    Ok(())
}
