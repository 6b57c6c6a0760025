//! Tiered identifier extraction over corrected OCR text.

use tracing::{debug, info};

use crate::models::{DocumentType, ExtractionConfig};

use super::rules::{correct_confusions, locate_keyword, normalize, validate_candidate};
use super::{ExtractionResult, ExtractionSource};

/// The synchronous extraction engine: normalize, correct, then run the
/// matcher tiers in order until a candidate survives validation.
///
/// Holds no mutable state; one instance can serve concurrent extractions.
pub struct IdentifierExtractor {
    document_type: DocumentType,
    config: ExtractionConfig,
}

impl IdentifierExtractor {
    /// Create an extractor with the built-in profile for `document_type`.
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            config: ExtractionConfig::for_document(document_type),
        }
    }

    /// Create an extractor with a caller-supplied profile.
    pub fn with_config(document_type: DocumentType, config: ExtractionConfig) -> Self {
        Self {
            document_type,
            config,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Run the full tier stack on raw OCR text.
    pub fn extract(&self, raw_text: &str) -> ExtractionResult {
        let normalized = normalize(raw_text);
        let corrected = correct_confusions(&normalized);

        debug!(
            document_type = %self.document_type,
            chars = corrected.len(),
            "running extraction tiers"
        );

        if let Some(identifier) = self.anchored_scan(&corrected) {
            return self.found(ExtractionSource::KeywordAnchor, identifier);
        }
        if let Some(identifier) = self.word_token_scan(&corrected) {
            return self.found(ExtractionSource::WordTokenScan, identifier);
        }
        if let Some(identifier) = self.global_scan(&corrected) {
            return self.found(ExtractionSource::GlobalRegexScan, identifier);
        }

        debug!(document_type = %self.document_type, "no candidate passed validation");
        ExtractionResult::not_found(self.document_type)
    }

    /// Anchored tier: ordered patterns against the top-priority keyword
    /// window. A pattern hit that fails validation is logged and skipped;
    /// exhausting the patterns falls through to the fallback tiers.
    fn anchored_scan(&self, corrected: &str) -> Option<String> {
        let hit = locate_keyword(corrected, &self.config.keywords, self.config.window_size)?;
        debug!(keyword = %hit.keyword, offset = hit.offset, "anchor keyword located");

        let window = hit.window.to_ascii_uppercase();
        for rule in &self.config.patterns {
            let Some(m) = rule.regex.find(&window) else {
                continue;
            };
            match validate_candidate(m.as_str(), self.config.min_length, self.config.max_length) {
                Some(identifier) => {
                    debug!(pattern = %rule.name, "anchored pattern validated");
                    return Some(identifier);
                }
                None => {
                    debug!(
                        pattern = %rule.name,
                        candidate = m.as_str(),
                        "anchored candidate rejected by validator"
                    );
                }
            }
        }

        None
    }

    /// First fallback: every whitespace-delimited token against the strict
    /// canonical shape.
    fn word_token_scan(&self, corrected: &str) -> Option<String> {
        for token in corrected.split_ascii_whitespace() {
            let upper = token.to_ascii_uppercase();
            if self.config.token_pattern.is_match(&upper) {
                if let Some(identifier) =
                    validate_candidate(&upper, self.config.min_length, self.config.max_length)
                {
                    return Some(identifier);
                }
            }
        }
        None
    }

    /// Last fallback: the loose global pattern over the whole text.
    fn global_scan(&self, corrected: &str) -> Option<String> {
        let upper = corrected.to_ascii_uppercase();
        for m in self.config.global_pattern.find_iter(&upper) {
            if let Some(identifier) =
                validate_candidate(m.as_str(), self.config.min_length, self.config.max_length)
            {
                return Some(identifier);
            }
        }
        None
    }

    fn found(&self, source: ExtractionSource, identifier: String) -> ExtractionResult {
        info!(
            document_type = %self.document_type,
            source = ?source,
            "identifier extracted"
        );
        ExtractionResult {
            identifier: Some(identifier),
            source,
            document_type: self.document_type,
            ocr_attempts: 0,
        }
    }
}
