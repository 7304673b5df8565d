//! Relevance weights for query scoring.
//!
//! The scoring model is a fixed, explicitly weighted heuristic, not
//! TF-IDF/BM25. Scores accumulate per document across all query words.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! - A title-word hit is worth exactly twice a content-word hit.
//! - A fuzzy hit contributes `FUZZY_MATCH_WEIGHT × similarity`, so its
//!   ceiling (0.5 at similarity 1.0) stays below a single content hit.
//! - Fuzzy contributions are additive with exact contributions for the
//!   same document; nothing deduplicates them.
//!
//! Changing any weight changes documented ranking behavior and the scoring
//! composition tests.

/// Score for an exact content-word hit.
pub const CONTENT_WORD_SCORE: f64 = 1.0;

/// Score for an exact title-word hit (2× content).
pub const TITLE_WORD_SCORE: f64 = 2.0;

/// Multiplier applied to similarity for a fuzzy content hit.
pub const FUZZY_MATCH_WEIGHT: f64 = 0.5;

/// Minimum similarity for a fuzzy candidate to count at all.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;
