//! Error types for the docid-core library.

use thiserror::Error;

/// Main error type for the docid library.
#[derive(Error, Debug)]
pub enum DocidError {
    /// OCR recognizer error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// A pattern rule failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by an OCR recognizer.
///
/// These never escape the extraction session: a failed recognition pass is
/// treated as an empty pass, and the session resolves to `NotFound`.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognizer backend could not be initialized.
    #[error("recognizer init failed: {0}")]
    Init(String),

    /// Text recognition failed.
    #[error("recognition failed: {0}")]
    Recognition(String),

    /// The document bytes could not be handed to the recognizer.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for the docid library.
pub type Result<T> = std::result::Result<T, DocidError>;
