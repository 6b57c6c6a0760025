//! Raw OCR text normalization.

/// Normalize raw OCR text for downstream matching.
///
/// Whitespace runs collapse to a single space, leading/trailing whitespace is
/// dropped, and every character that is not ASCII alphanumeric and not a
/// hyphen becomes a space so tokens do not fuse across punctuation. The
/// output is pure ASCII, which keeps all later byte-offset arithmetic on
/// char boundaries.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("DL  NO \t KL07\n\nAB1234"), "DL NO KL07 AB1234");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  REG NO MH12AB1234  "), "REG NO MH12AB1234");
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(normalize("DL No.: KL07/2011"), "DL No KL07 2011");
    }

    #[test]
    fn test_hyphen_preserved() {
        assert_eq!(normalize("KL-07-AB-1234"), "KL-07-AB-1234");
    }

    #[test]
    fn test_control_chars_and_unicode_stripped() {
        assert_eq!(normalize("REG\u{0007}NO\u{00a0}KA01\u{2014}9999"), "REG NO KA01 9999");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n"), "");
    }
}
