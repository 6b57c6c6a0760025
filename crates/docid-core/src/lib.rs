//! Core library for document identifier extraction.
//!
//! This crate recovers canonical identifier strings (driving licence
//! numbers, vehicle registration numbers) from noisy OCR text:
//! - text normalization and digit/letter confusion correction
//! - keyword-anchored, pattern-driven matching with looser fallback tiers
//! - per-document-type extraction profiles with centralized validation
//! - a two-pass retry session around an asynchronous OCR recognizer,
//!   with per-session cancellation

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;

pub use error::{DocidError, OcrError, Result};
pub use extract::{
    extract_identifier, should_retry, ExtractionResult, ExtractionSession, ExtractionSource,
    IdentifierExtractor,
};
pub use models::{DocumentType, ExtractionConfig, PatternRule, RetryConfig};
pub use ocr::{OcrRecognizer, RecognitionMode, IDENTIFIER_ALPHABET};

#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
