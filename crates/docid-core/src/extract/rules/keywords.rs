//! Anchor keyword location.

/// A keyword hit plus the window of trailing text to scan for patterns.
#[derive(Debug, Clone)]
pub struct KeywordHit<'t> {
    /// The configured keyword that matched.
    pub keyword: String,
    /// Byte offset of the match in the corrected text.
    pub offset: usize,
    /// Up to `window_size` characters of the corrected text, starting at the
    /// match, in original case.
    pub window: &'t str,
}

/// Find the highest-priority anchor keyword in `text`.
///
/// Keywords are tried in list order with a case-insensitive substring
/// search; the first keyword that matches anywhere wins, even if a
/// later-listed keyword would have matched earlier in the text. Returns
/// `None` when no keyword is present, which sends the matcher to its
/// fallback tiers.
pub fn locate_keyword<'t>(
    text: &'t str,
    keywords: &[String],
    window_size: usize,
) -> Option<KeywordHit<'t>> {
    let upper = text.to_ascii_uppercase();

    for keyword in keywords {
        let needle = keyword.to_ascii_uppercase();
        if needle.is_empty() {
            continue;
        }
        if let Some(offset) = upper.find(&needle) {
            let mut end = (offset + window_size).min(text.len());
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            return Some(KeywordHit {
                keyword: keyword.clone(),
                offset,
                window: &text[offset..end],
            });
        }
    }

    None
}
