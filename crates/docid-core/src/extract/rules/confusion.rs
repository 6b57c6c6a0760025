//! Digit/letter confusion correction for OCR output.
//!
//! OCR engines routinely misread characters of alphanumeric identifiers:
//! `0` comes back as `O`, `1` as `I`, `5` as `S`. The corrections here only
//! fire in digit-adjacent context so legitimate alphabetic runs (names,
//! labels) are never rewritten.

/// Context a confusion rule requires before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionContext {
    /// The character is immediately preceded or followed by a digit.
    DigitAdjacent,
    /// The character sits between two digits.
    DigitSandwiched,
}

impl CorrectionContext {
    fn applies(&self, chars: &[char], i: usize) -> bool {
        let prev = i.checked_sub(1).map(|p| chars[p].is_ascii_digit());
        let next = chars.get(i + 1).map(|c| c.is_ascii_digit());
        match self {
            CorrectionContext::DigitAdjacent => {
                prev.unwrap_or(false) || next.unwrap_or(false)
            }
            CorrectionContext::DigitSandwiched => {
                prev.unwrap_or(false) && next.unwrap_or(false)
            }
        }
    }
}

/// A single deterministic 1-for-1 character substitution.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionRule {
    pub from: char,
    pub to: char,
    pub context: CorrectionContext,
}

/// The confusion rules, in their fixed application order.
pub const CORRECTION_RULES: [CorrectionRule; 6] = [
    CorrectionRule { from: 'O', to: '0', context: CorrectionContext::DigitAdjacent },
    CorrectionRule { from: 'I', to: '1', context: CorrectionContext::DigitAdjacent },
    CorrectionRule { from: 'S', to: '5', context: CorrectionContext::DigitSandwiched },
    CorrectionRule { from: 'B', to: '8', context: CorrectionContext::DigitSandwiched },
    CorrectionRule { from: 'Z', to: '2', context: CorrectionContext::DigitSandwiched },
    CorrectionRule { from: 'G', to: '6', context: CorrectionContext::DigitSandwiched },
];

/// Apply the confusion rules to `text`.
///
/// Substitutions are 1-for-1, so the output has the same character count as
/// the input. A substitution can create the digit context a rule listed
/// earlier needs (`"OI2"`: the `I` becomes `1`, which then qualifies the
/// `O`), so the ordered rule list is swept repeatedly until a full sweep
/// changes nothing. Rules only ever turn letters into digits, which bounds
/// the number of sweeps by the input length and makes the whole pass
/// idempotent: running it on its own output is a no-op.
pub fn correct_confusions(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    loop {
        let mut changed = false;
        for rule in &CORRECTION_RULES {
            for i in 0..chars.len() {
                if chars[i] == rule.from && rule.context.applies(&chars, i) {
                    chars[i] = rule.to;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_o_and_i_adjacent_to_digits() {
        assert_eq!(correct_confusions("KLO7ABI234"), "KL07AB1234");
        assert_eq!(correct_confusions("O7"), "07");
        assert_eq!(correct_confusions("7O"), "70");
    }

    #[test]
    fn test_sandwiched_rules() {
        assert_eq!(correct_confusions("1S2"), "152");
        assert_eq!(correct_confusions("4B2"), "482");
        assert_eq!(correct_confusions("0Z9"), "029");
        assert_eq!(correct_confusions("7G3"), "763");
    }

    #[test]
    fn test_sandwich_requires_digits_on_both_sides() {
        // neither S has two digit neighbours
        assert_eq!(correct_confusions("1SS2"), "1SS2");
        assert_eq!(correct_confusions("S2"), "S2");
    }

    #[test]
    fn test_plain_words_untouched() {
        assert_eq!(correct_confusions("DRIVING LICENCE"), "DRIVING LICENCE");
        assert_eq!(correct_confusions("ROBOT OIL SIZE"), "ROBOT OIL SIZE");
    }

    #[test]
    fn test_cascade_across_rule_order() {
        // I -> 1 creates the digit context the O rule needs
        assert_eq!(correct_confusions("OI2"), "012");
        // O -> 0 enables the sandwich for S
        assert_eq!(correct_confusions("O5S5"), "0555");
    }

    #[test]
    fn test_idempotence() {
        for s in [
            "KLO7ABI234",
            "OI2",
            "1OOO2",
            "OO1",
            "DL NO KLO7ABI234",
            "REG NO MH I2 AB I234",
            "illegible smudge",
            "",
        ] {
            let once = correct_confusions(s);
            assert_eq!(correct_confusions(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_length_preserved() {
        for s in ["KLO7ABI234", "O", "1OOO2", "ABC 123 OIS"] {
            assert_eq!(correct_confusions(s).chars().count(), s.chars().count());
        }
    }
}
