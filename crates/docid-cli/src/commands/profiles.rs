//! Profiles command - dump the built-in extraction profiles.
//!
//! The window sizes and length bounds are tuned constants; this output is
//! the reference point when calibrating them against a document corpus.

use clap::Args;
use serde_json::json;

use docid_core::{DocumentType, ExtractionConfig, RetryConfig};

use super::extract::DocKind;

/// Arguments for the profiles command.
#[derive(Args)]
pub struct ProfilesArgs {
    /// Show a single document type only
    #[arg(short, long, value_enum)]
    doc_type: Option<DocKind>,
}

pub async fn run(args: ProfilesArgs) -> anyhow::Result<()> {
    let types = match args.doc_type {
        Some(kind) => vec![DocumentType::from(kind)],
        None => vec![
            DocumentType::DrivingLicense,
            DocumentType::VehicleRegistration,
        ],
    };

    let profiles: Vec<_> = types.into_iter().map(profile_json).collect();
    let doc = json!({
        "profiles": profiles,
        "retry": RetryConfig::default(),
    });

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn profile_json(document_type: DocumentType) -> serde_json::Value {
    let config = ExtractionConfig::for_document(document_type);

    json!({
        "document_type": document_type,
        "keywords": config.keywords,
        "window_size": config.window_size,
        "patterns": config.patterns.iter().map(|p| json!({
            "name": p.name,
            "expr": p.regex.as_str(),
        })).collect::<Vec<_>>(),
        "token_pattern": config.token_pattern.as_str(),
        "global_pattern": config.global_pattern.as_str(),
        "min_length": config.min_length,
        "max_length": config.max_length,
    })
}
