//! Data models for document identifier extraction.

pub mod config;

pub use config::{DocumentType, ExtractionConfig, PatternRule, RetryConfig};
