//! Fuzzy matching: typo tolerance via edit distance.
//!
//! `find_fuzzy_matches` scans the entire content vocabulary per query word.
//! That is O(vocabulary × word length²) per word, which is fine for a
//! personal note collection and a known cliff for anything much larger.
//! A length-difference pre-filter skips candidates that provably cannot
//! reach the threshold, but the scan itself stays linear in vocabulary size.

use std::cmp::Ordering;

/// Classic dynamic-programming edit distance (insert, delete, substitute at
/// cost 1 each). O(len(a) · len(b)).
///
/// Counts characters, not bytes, for Unicode correctness.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are defined as identical (1.0) to avoid dividing by
/// zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Scan a vocabulary for words within `threshold` similarity of `word`,
/// sorted by similarity descending.
///
/// The length difference between two strings is a lower bound on their edit
/// distance, so candidates whose best possible similarity already falls
/// below the threshold are skipped without running the DP. This cannot
/// change the result set, only the work done.
pub fn find_fuzzy_matches<'a, I>(word: &str, vocabulary: I, threshold: f64) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let word_len = word.chars().count();
    let mut matches: Vec<(String, f64)> = Vec::new();

    for candidate in vocabulary {
        let candidate_len = candidate.chars().count();
        let max_len = word_len.max(candidate_len);

        if max_len > 0 {
            let best_possible = 1.0 - word_len.abs_diff(candidate_len) as f64 / max_len as f64;
            if best_possible < threshold {
                continue;
            }
        }

        let sim = similarity(word, candidate);
        if sim >= threshold {
            matches.push((candidate.to_string(), sim));
        }
    }

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    matches
}
