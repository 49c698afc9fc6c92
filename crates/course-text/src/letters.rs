//! Letter counting.

/// Count non-overlapping, case-insensitive occurrences of `letter` in `word`.
///
/// `letter` may be longer than one character; it is matched as a
/// substring. An empty `letter` counts nothing.
pub fn count_letter(word: &str, letter: &str) -> usize {
    if letter.is_empty() {
        return 0;
    }
    word.to_lowercase().matches(&letter.to_lowercase()).count()
}
