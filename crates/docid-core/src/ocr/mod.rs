//! OCR collaborator boundary.
//!
//! The engine never recognizes pixels itself; it drives an external
//! recognizer through [`OcrRecognizer`] and only consumes its raw text.

#[cfg(feature = "tesseract")]
mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::TesseractRecognizer;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Characters a document identifier can contain, plus the separators that
/// survive normalization. Passed to the recognizer as a whitelist on the
/// first pass.
pub const IDENTIFIER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789- ";

/// Recognition configuration selected per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionMode {
    /// Restrict recognition to [`IDENTIFIER_ALPHABET`]. Sharper on clean
    /// document crops, blind to everything else.
    IdentifierAlphabet,
    /// No character whitelist.
    Unrestricted,
}

impl RecognitionMode {
    /// The character whitelist for this mode, if any.
    pub fn char_whitelist(&self) -> Option<&'static str> {
        match self {
            RecognitionMode::IdentifierAlphabet => Some(IDENTIFIER_ALPHABET),
            RecognitionMode::Unrestricted => None,
        }
    }
}

impl std::fmt::Display for RecognitionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionMode::IdentifierAlphabet => f.write_str("identifier_alphabet"),
            RecognitionMode::Unrestricted => f.write_str("unrestricted"),
        }
    }
}

/// Contract for the external OCR collaborator.
///
/// `recognize` turns a document image or PDF into raw text under the given
/// mode. It may take seconds and it may fail; the extraction session treats
/// a failure as an empty pass and never propagates it.
pub trait OcrRecognizer {
    fn recognize(
        &self,
        document: &[u8],
        mode: RecognitionMode,
    ) -> impl Future<Output = Result<String, OcrError>> + Send;
}

impl<R: OcrRecognizer + Sync> OcrRecognizer for &R {
    fn recognize(
        &self,
        document: &[u8],
        mode: RecognitionMode,
    ) -> impl Future<Output = Result<String, OcrError>> + Send {
        (**self).recognize(document, mode)
    }
}
