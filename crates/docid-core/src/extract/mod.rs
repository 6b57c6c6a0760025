//! Identifier extraction module.

pub mod pipeline;
pub mod rules;
pub mod session;

pub use pipeline::IdentifierExtractor;
pub use session::{extract_identifier, should_retry, ExtractionSession};

use serde::{Deserialize, Serialize};

use crate::models::DocumentType;

/// Which tier of the matcher produced the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// A pattern matched inside an anchor keyword's window.
    KeywordAnchor,
    /// A whitespace-delimited token matched the strict canonical shape.
    WordTokenScan,
    /// The loose global pattern matched somewhere in the full text.
    GlobalRegexScan,
    /// No candidate passed validation.
    NotFound,
}

/// Outcome of an identifier extraction.
///
/// Created fresh for each upload attempt and never mutated afterwards. The
/// caller pre-fills a form field when `identifier` is present and falls back
/// to manual entry when it is not; no error state exists beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The canonical identifier, present only when validation passed.
    pub identifier: Option<String>,

    /// The tier that produced (or failed to produce) the identifier.
    pub source: ExtractionSource,

    /// The document type the extraction ran against.
    pub document_type: DocumentType,

    /// OCR passes the session ran; 0 when text was supplied directly.
    pub ocr_attempts: u8,
}

impl ExtractionResult {
    /// An empty outcome for the given document type.
    pub fn not_found(document_type: DocumentType) -> Self {
        Self {
            identifier: None,
            source: ExtractionSource::NotFound,
            document_type,
            ocr_attempts: 0,
        }
    }

    /// Whether an identifier was extracted.
    pub fn is_found(&self) -> bool {
        self.identifier.is_some()
    }
}
