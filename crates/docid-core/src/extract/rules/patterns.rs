//! Common regex patterns for identifier extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Driving licence patterns (state code + RTO code + issue year + serial)
    pub static ref DL_CANONICAL: Regex = Regex::new(
        r"\b[A-Z]{2}[-\s]?\d{2}[-\s]?\d{4}[-\s]?\d{7}\b"
    ).unwrap();

    pub static ref DL_COMPACT: Regex = Regex::new(
        r"\b[A-Z]{2}\d{13,14}\b"
    ).unwrap();

    // Strict token shape for the word-token fallback tier
    pub static ref DL_TOKEN: Regex = Regex::new(
        r"^[A-Z]{2}-?\d{13,14}$"
    ).unwrap();

    // Loosest accepted licence shape, scanned over the whole text
    pub static ref DL_GLOBAL: Regex = Regex::new(
        r"\b[A-Z]{2}[\d\s-]{13,19}"
    ).unwrap();

    // Registration patterns (state code + district code + series + serial)
    pub static ref RC_SERIES: Regex = Regex::new(
        r"\b[A-Z]{2}[-\s]?\d{1,2}[-\s]?[A-Z]{1,3}[-\s]?\d{4}\b"
    ).unwrap();

    // Older plates without a series letter block
    pub static ref RC_PLAIN: Regex = Regex::new(
        r"\b[A-Z]{2}[-\s]?\d{1,2}[-\s]?\d{4}\b"
    ).unwrap();

    pub static ref RC_TOKEN: Regex = Regex::new(
        r"^[A-Z]{2}\d{1,2}[A-Z]{0,3}\d{4}$"
    ).unwrap();

    pub static ref RC_GLOBAL: Regex = Regex::new(
        r"\b[A-Z]{2}[-\s]?\d{1,2}[-\s]?[A-Z]{0,3}[-\s]?\d{3,4}"
    ).unwrap();
}
