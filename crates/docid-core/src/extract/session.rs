//! Two-pass extraction session around an OCR recognizer.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::models::{DocumentType, ExtractionConfig, RetryConfig};
use crate::ocr::{OcrRecognizer, RecognitionMode};

use super::pipeline::IdentifierExtractor;
use super::ExtractionResult;

/// Retry states. The first pass runs the recognizer restricted to the
/// identifier alphabet; the second, only reached when [`should_retry`] says
/// so, reruns it unrestricted. There is no third pass.
#[derive(Debug)]
enum SessionState {
    Idle,
    FirstPass,
    SecondPass,
    Done(ExtractionResult),
}

/// The single retry predicate.
///
/// A second OCR pass is only worth its cost when the first found nothing
/// *and* produced so little text that the recognizer likely ran in the
/// wrong mode for the image.
pub fn should_retry(result: &ExtractionResult, raw_text: &str, retry: &RetryConfig) -> bool {
    !result.is_found() && raw_text.trim().len() < retry.min_text_length
}

/// One extraction session per upload.
///
/// Owns the recognizer handle, the retry policy, and the session's
/// cancellation token. Recognizer failures are downgraded to empty passes;
/// the caller only ever sees an [`ExtractionResult`].
pub struct ExtractionSession<R> {
    recognizer: R,
    retry: RetryConfig,
    cancel: CancellationToken,
}

impl<R: OcrRecognizer> ExtractionSession<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            retry: RetryConfig::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Token the owning UI context can use to abandon in-flight recognition
    /// when it is torn down. A late OCR result is then discarded instead of
    /// being applied.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Extract an identifier from a document image or PDF using the
    /// built-in profile for `document_type`.
    pub async fn extract(&self, document: &[u8], document_type: DocumentType) -> ExtractionResult {
        self.run(document, IdentifierExtractor::new(document_type))
            .await
    }

    /// Extract with a caller-supplied profile.
    pub async fn extract_with_config(
        &self,
        document: &[u8],
        document_type: DocumentType,
        config: ExtractionConfig,
    ) -> ExtractionResult {
        self.run(document, IdentifierExtractor::with_config(document_type, config))
            .await
    }

    async fn run(&self, document: &[u8], extractor: IdentifierExtractor) -> ExtractionResult {
        let document_type = extractor.document_type();
        let mut attempts: u8 = 0;
        let mut state = SessionState::Idle;

        let result = loop {
            state = match state {
                SessionState::Idle => SessionState::FirstPass,

                SessionState::FirstPass => {
                    let Some(raw) = self
                        .recognize_pass(document, RecognitionMode::IdentifierAlphabet)
                        .await
                    else {
                        break ExtractionResult::not_found(document_type);
                    };
                    attempts += 1;

                    let result = extractor.extract(&raw);
                    if result.is_found() {
                        SessionState::Done(result)
                    } else if should_retry(&result, &raw, &self.retry) {
                        debug!(
                            raw_len = raw.trim().len(),
                            threshold = self.retry.min_text_length,
                            "first pass inconclusive, rerunning unrestricted"
                        );
                        SessionState::SecondPass
                    } else {
                        SessionState::Done(result)
                    }
                }

                SessionState::SecondPass => {
                    let Some(raw) = self
                        .recognize_pass(document, RecognitionMode::Unrestricted)
                        .await
                    else {
                        break ExtractionResult::not_found(document_type);
                    };
                    attempts += 1;

                    SessionState::Done(extractor.extract(&raw))
                }

                SessionState::Done(result) => break result,
            };
        };

        info!(
            %document_type,
            found = result.is_found(),
            attempts,
            "extraction session finished"
        );
        ExtractionResult {
            ocr_attempts: attempts,
            ..result
        }
    }

    /// One recognizer call. Returns `None` when the session was cancelled
    /// (before or during the call); a recognizer error becomes an empty
    /// pass so the retry predicate can still fire.
    async fn recognize_pass(&self, document: &[u8], mode: RecognitionMode) -> Option<String> {
        if self.cancel.is_cancelled() {
            debug!(%mode, "session cancelled, skipping recognition");
            return None;
        }

        let outcome = tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!(%mode, "session cancelled mid-recognition, discarding pass");
                return None;
            }
            outcome = self.recognizer.recognize(document, mode) => outcome,
        };

        match outcome {
            Ok(text) => {
                debug!(%mode, chars = text.len(), "recognition pass complete");
                Some(text)
            }
            Err(e) => {
                warn!(%mode, error = %e, "recognition failed, treating as empty pass");
                Some(String::new())
            }
        }
    }
}

/// Extract an identifier from a document with a fresh single-use session.
///
/// The engine entry point for callers that do not need cancellation or a
/// custom retry policy.
pub async fn extract_identifier<R: OcrRecognizer>(
    recognizer: R,
    document: &[u8],
    document_type: DocumentType,
) -> ExtractionResult {
    ExtractionSession::new(recognizer)
        .extract(document, document_type)
        .await
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::OcrError;
    use crate::extract::ExtractionSource;

    /// Recognizer that replays scripted pass outcomes and records the
    /// modes it was called with.
    struct ScriptedOcr {
        passes: Mutex<VecDeque<Result<String, OcrError>>>,
        modes: Mutex<Vec<RecognitionMode>>,
        calls: AtomicUsize,
    }

    impl ScriptedOcr {
        fn new(passes: Vec<Result<String, OcrError>>) -> Self {
            Self {
                passes: Mutex::new(passes.into()),
                modes: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn modes(&self) -> Vec<RecognitionMode> {
            self.modes.lock().unwrap().clone()
        }
    }

    impl OcrRecognizer for ScriptedOcr {
        fn recognize(
            &self,
            _document: &[u8],
            mode: RecognitionMode,
        ) -> impl std::future::Future<Output = Result<String, OcrError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.modes.lock().unwrap().push(mode);
            let outcome = self
                .passes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()));
            async move { outcome }
        }
    }

    #[tokio::test]
    async fn test_first_pass_success_stops() {
        let ocr = ScriptedOcr::new(vec![Ok("REG NO KL07AB1234".to_string())]);
        let session = ExtractionSession::new(&ocr);

        let result = session
            .extract(b"jpg", DocumentType::VehicleRegistration)
            .await;

        assert_eq!(result.identifier.as_deref(), Some("KL07AB1234"));
        assert_eq!(result.ocr_attempts, 1);
        assert_eq!(ocr.calls(), 1);
        assert_eq!(ocr.modes(), vec![RecognitionMode::IdentifierAlphabet]);
    }

    #[tokio::test]
    async fn test_short_inconclusive_first_pass_retries_unrestricted() {
        let ocr = ScriptedOcr::new(vec![
            Ok("smudge".to_string()),
            Ok("REGN NO AN01J8844".to_string()),
        ]);
        let session = ExtractionSession::new(&ocr);

        let result = session
            .extract(b"jpg", DocumentType::VehicleRegistration)
            .await;

        assert_eq!(result.identifier.as_deref(), Some("AN01J8844"));
        assert_eq!(result.source, ExtractionSource::KeywordAnchor);
        assert_eq!(result.ocr_attempts, 2);
        assert_eq!(
            ocr.modes(),
            vec![
                RecognitionMode::IdentifierAlphabet,
                RecognitionMode::Unrestricted
            ]
        );
    }

    #[tokio::test]
    async fn test_long_inconclusive_first_pass_does_not_retry() {
        let ocr = ScriptedOcr::new(vec![Ok(
            "a long page of perfectly readable prose with no identifier anywhere".to_string(),
        )]);
        let session = ExtractionSession::new(&ocr);

        let result = session
            .extract(b"jpg", DocumentType::DrivingLicense)
            .await;

        assert_eq!(result.identifier, None);
        assert_eq!(result.source, ExtractionSource::NotFound);
        assert_eq!(result.ocr_attempts, 1);
        assert_eq!(ocr.calls(), 1);
    }

    #[tokio::test]
    async fn test_full_failure_runs_exactly_two_passes() {
        let ocr = ScriptedOcr::new(vec![
            Ok("illegible smudge".to_string()),
            Ok("illegible smudge".to_string()),
        ]);
        let session = ExtractionSession::new(&ocr);

        let result = session
            .extract(b"jpg", DocumentType::VehicleRegistration)
            .await;

        assert_eq!(result.identifier, None);
        assert_eq!(result.source, ExtractionSource::NotFound);
        assert_eq!(result.ocr_attempts, 2);
        assert_eq!(ocr.calls(), 2);
    }

    #[tokio::test]
    async fn test_recognizer_error_counts_as_empty_pass_and_retries() {
        let ocr = ScriptedOcr::new(vec![
            Err(OcrError::Recognition("engine crashed".to_string())),
            Ok("REG NO MH12AB1234".to_string()),
        ]);
        let session = ExtractionSession::new(&ocr);

        let result = session
            .extract(b"jpg", DocumentType::VehicleRegistration)
            .await;

        assert_eq!(result.identifier.as_deref(), Some("MH12AB1234"));
        assert_eq!(result.ocr_attempts, 2);
    }

    #[tokio::test]
    async fn test_cancelled_session_resolves_not_found() {
        let ocr = ScriptedOcr::new(vec![Ok("REG NO KL07AB1234".to_string())]);
        let session = ExtractionSession::new(&ocr);

        session.cancellation_token().cancel();
        let result = session
            .extract(b"jpg", DocumentType::VehicleRegistration)
            .await;

        assert_eq!(result.identifier, None);
        assert_eq!(result.source, ExtractionSource::NotFound);
        assert_eq!(ocr.calls(), 0);
    }

    #[test]
    fn test_should_retry_predicate() {
        let retry = RetryConfig::default();
        let found = ExtractionResult {
            identifier: Some("KL07AB1234".to_string()),
            source: ExtractionSource::KeywordAnchor,
            document_type: DocumentType::VehicleRegistration,
            ocr_attempts: 1,
        };
        let missed = ExtractionResult::not_found(DocumentType::VehicleRegistration);

        assert!(!should_retry(&found, "short", &retry));
        assert!(!should_retry(&found, &"long ".repeat(50), &retry));
        assert!(should_retry(&missed, "short", &retry));
        assert!(!should_retry(&missed, &"long ".repeat(50), &retry));
        // whitespace padding does not count as recognized text
        assert!(should_retry(&missed, "      \n\t   ", &retry));
    }
}
