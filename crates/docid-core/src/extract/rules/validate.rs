//! Candidate validation.
//!
//! The single place length/format policy lives. Every matcher tier hands its
//! candidates here instead of inlining length checks.

/// Canonicalize and validate a raw candidate.
///
/// Strips whitespace, hyphens, and any other separator residue, uppercases,
/// and enforces `min_length ..= max_length`. Returns the canonical
/// identifier, or `None` for a candidate outside the bounds.
pub fn validate_candidate(raw: &str, min_length: usize, max_length: usize) -> Option<String> {
    let canonical: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if canonical.is_empty() || canonical.len() < min_length || canonical.len() > max_length {
        return None;
    }

    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_separators_and_uppercases() {
        assert_eq!(
            validate_candidate(" kl-07 ab 1234 ", 8, 11),
            Some("KL07AB1234".to_string())
        );
    }

    #[test]
    fn test_undersized_rejected() {
        // matches a loose letter+digit shape but is far below the licence minimum
        assert_eq!(validate_candidate("AB12", 15, 16), None);
    }

    #[test]
    fn test_oversized_rejected() {
        assert_eq!(validate_candidate("KL0720110012345999", 15, 16), None);
    }

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(
            validate_candidate("KL0720110012345", 15, 16),
            Some("KL0720110012345".to_string())
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(validate_candidate("--  --", 1, 10), None);
    }
}
