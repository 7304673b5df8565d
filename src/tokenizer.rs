//! Tokenization: raw text in, a set of normalized words out.
//!
//! `extract_words` does case folding, punctuation stripping, and the
//! length filter. Stop-word filtering deliberately does NOT happen here:
//! the index store applies it when populating the content/title maps, and
//! skips it entirely for tags (tags are indexed verbatim, lowercased).

use crate::utils::normalize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words excluded from content/title indexing.
///
/// These words are:
/// 1. Too common to be useful for search ranking
/// 2. A source of false positives in fuzzy matching (e.g. "land" → "and")
/// 3. A waste of index space
///
/// The list is part of the engine's contract and is fixed here rather than
/// loaded from data.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Extract the deduplicated word set from raw text.
///
/// Lowercases, replaces punctuation with spaces, splits on whitespace, and
/// drops tokens of length ≤ 2 (measured in characters, not bytes). Order is
/// irrelevant: callers get set semantics.
pub fn extract_words(text: &str) -> HashSet<String> {
    normalize(text)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
