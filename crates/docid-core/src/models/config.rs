//! Configuration structures for the extraction engine.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::rules::patterns;

/// The kind of document an identifier is extracted from.
///
/// Selects the keyword list, pattern list, window size, and length bounds
/// that apply during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Driving licence, e.g. `KL0720110012345`.
    DrivingLicense,
    /// Vehicle registration certificate (RC book), e.g. `KL07AB1234`.
    VehicleRegistration,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::DrivingLicense => "driving_license",
            DocumentType::VehicleRegistration => "vehicle_registration",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named identifier pattern, tried in list order against keyword windows.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Short name used in trace output.
    pub name: String,
    /// Compiled pattern. The original source is available via `regex.as_str()`.
    pub regex: Regex,
}

impl PatternRule {
    /// Compile a pattern rule from a regex source string.
    pub fn new(name: impl Into<String>, expr: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(expr)?,
        })
    }

    fn from_regex(name: &str, regex: &Regex) -> Self {
        Self {
            name: name.to_string(),
            regex: regex.clone(),
        }
    }
}

/// Per-document-type extraction profile.
///
/// The built-in profiles carry the empirically tuned constants of the
/// production system (window sizes, length bounds). They are defaults, not
/// gospel; `docid profiles` dumps them for calibration and callers can build
/// their own profile from scratch.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Anchor keywords, most specific first. Priority order decides which
    /// anchor wins when several keywords occur in the same text.
    pub keywords: Vec<String>,

    /// Characters of corrected text scanned after a keyword hit.
    pub window_size: usize,

    /// Ordered identifier patterns for the anchored tier.
    pub patterns: Vec<PatternRule>,

    /// Strict canonical shape a whitespace-delimited token must match in the
    /// word-token fallback tier.
    pub token_pattern: Regex,

    /// Loosest accepted shape, run over the whole text as the last tier.
    pub global_pattern: Regex,

    /// Minimum canonical identifier length (after separator stripping).
    pub min_length: usize,

    /// Maximum canonical identifier length.
    pub max_length: usize,
}

impl ExtractionConfig {
    /// Built-in profile for a document type.
    pub fn for_document(document_type: DocumentType) -> Self {
        match document_type {
            DocumentType::DrivingLicense => Self::driving_license(),
            DocumentType::VehicleRegistration => Self::vehicle_registration(),
        }
    }

    /// Driving licence profile: state code + RTO code + issue year + serial,
    /// 15-16 significant characters.
    pub fn driving_license() -> Self {
        Self {
            keywords: [
                "DL NO",
                "DL NUMBER",
                "LICENCE NO",
                "LICENSE NO",
                "DRIVING LICENCE",
                "DRIVING LICENSE",
            ]
            .map(String::from)
            .to_vec(),
            window_size: 300,
            patterns: vec![
                PatternRule::from_regex("dl-canonical", &patterns::DL_CANONICAL),
                PatternRule::from_regex("dl-compact", &patterns::DL_COMPACT),
            ],
            token_pattern: patterns::DL_TOKEN.clone(),
            global_pattern: patterns::DL_GLOBAL.clone(),
            min_length: 15,
            max_length: 16,
        }
    }

    /// Vehicle registration profile: state code + district code + series
    /// letters + serial, 8-11 significant characters.
    pub fn vehicle_registration() -> Self {
        Self {
            keywords: [
                "REGN NO",
                "REG NO",
                "REGISTRATION NO",
                "REGISTRATION NUMBER",
                "VEHICLE NO",
            ]
            .map(String::from)
            .to_vec(),
            window_size: 150,
            patterns: vec![
                PatternRule::from_regex("rc-series", &patterns::RC_SERIES),
                PatternRule::from_regex("rc-plain", &patterns::RC_PLAIN),
            ],
            token_pattern: patterns::RC_TOKEN.clone(),
            global_pattern: patterns::RC_GLOBAL.clone(),
            min_length: 8,
            max_length: 11,
        }
    }
}

/// Retry policy for the two-pass extraction session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// A `NotFound` first pass only triggers the second, unrestricted OCR
    /// pass when the raw text is shorter than this. Longer text means the
    /// recognizer saw the document fine and a rerun will not help.
    pub min_text_length: usize,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            min_text_length: 20,
        }
    }
}

impl RetryConfig {
    /// Load retry configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| crate::error::DocidError::Config(e.to_string()))
    }

    /// Save retry configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::DocidError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
