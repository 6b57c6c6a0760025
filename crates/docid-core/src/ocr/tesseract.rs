//! Tesseract-backed OCR recognizer.

use std::future::Future;
use std::io::Write;

use tempfile::NamedTempFile;
use tesseract::Tesseract;
use tracing::debug;

use crate::error::OcrError;

use super::{OcrRecognizer, RecognitionMode};

/// Recognizer driving a local Tesseract installation.
///
/// The binding is synchronous, so each pass runs on the blocking pool.
pub struct TesseractRecognizer {
    language: String,
}

impl TesseractRecognizer {
    pub fn new() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }

    /// Set the recognition language (Tesseract language code).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrRecognizer for TesseractRecognizer {
    fn recognize(
        &self,
        document: &[u8],
        mode: RecognitionMode,
    ) -> impl Future<Output = Result<String, OcrError>> + Send {
        let language = self.language.clone();
        let bytes = document.to_vec();
        async move {
            tokio::task::spawn_blocking(move || run_tesseract(&language, &bytes, mode))
                .await
                .map_err(|e| OcrError::Recognition(e.to_string()))?
        }
    }
}

fn run_tesseract(language: &str, document: &[u8], mode: RecognitionMode) -> Result<String, OcrError> {
    // Tesseract wants a file path, not a byte slice.
    let mut temp = NamedTempFile::new().map_err(|e| OcrError::InvalidDocument(e.to_string()))?;
    temp.write_all(document)
        .map_err(|e| OcrError::InvalidDocument(e.to_string()))?;
    let path = temp
        .path()
        .to_str()
        .ok_or_else(|| OcrError::InvalidDocument("non-utf8 temp path".to_string()))?;

    let mut tess = Tesseract::new(None, Some(language))
        .map_err(|e| OcrError::Init(e.to_string()))?
        .set_image(path)
        .map_err(|e| OcrError::Recognition(e.to_string()))?;

    if let Some(whitelist) = mode.char_whitelist() {
        tess = tess
            .set_variable("tessedit_char_whitelist", whitelist)
            .map_err(|e| OcrError::Recognition(e.to_string()))?;
    }

    let text = tess
        .get_text()
        .map_err(|e| OcrError::Recognition(e.to_string()))?;

    debug!(%mode, chars = text.len(), "tesseract pass complete");
    Ok(text)
}
