//! In-process document search and indexing engine for note collections.
//!
//! Full-text, title, and tag lookup over a mutable set of short text
//! documents, with fuzzy (edit-distance) matching, fixed-weight relevance
//! scoring, and highlight/snippet extraction. The index lives entirely in
//! memory and is rebuilt from the authoritative document collection on
//! demand; there is no on-disk format and no error taxonomy, because every
//! operation is a total function over its inputs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ tokenizer.rs │────▶│  index.rs   │────▶│  search.rs  │
//! │(extract_words│     │ (NoteIndex, │     │ (search,    │
//! │  stop words) │     │  4 maps)    │     │  tag/title) │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │                    │                   │
//!        │              ┌─────┴──────┐     ┌──────┴──────┐
//!        │              │ fuzzy.rs   │     │ snippet.rs  │
//!        │              │(levenshtein│     │ (highlights,│
//!        │              │ vocabulary │     │  previews)  │
//!        │              │   scan)    │     └─────────────┘
//!        ▼              └────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │                     service.rs                       │
//! │   (SearchService: one worker thread serializing      │
//! │    every mutation and query over a request channel)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use notedex::{Document, SearchService};
//!
//! let service = SearchService::new();
//! service.index_document(Document {
//!     id: "n1".to_string(),
//!     title: "Rust Guide".to_string(),
//!     content: "Learn systems programming in rust today".to_string(),
//!     tags: vec!["rust".to_string(), "tutorial".to_string()],
//!     modified_at: 0,
//! });
//!
//! let results = service.search("rust");
//! assert_eq!(results.len(), 1);
//! ```
//!
//! For single-threaded embedders, `NoteIndex` plus the free functions in
//! `search` offer the same engine without the worker thread.

mod fuzzy;
mod index;
mod scoring;
mod search;
mod service;
mod snippet;
mod tokenizer;
mod types;
mod utils;

// Re-exports for public API
pub use fuzzy::{find_fuzzy_matches, levenshtein_distance, similarity};
pub use index::NoteIndex;
pub use scoring::{
    CONTENT_WORD_SCORE, FUZZY_MATCH_WEIGHT, FUZZY_SIMILARITY_THRESHOLD, TITLE_WORD_SCORE,
};
pub use search::{search, search_by_tag, search_by_title};
pub use service::SearchService;
pub use snippet::{find_highlights, generate_snippet, SNIPPET_MAX_LEN};
pub use tokenizer::{extract_words, is_stop_word};
pub use types::{Document, Highlight, IndexStats, IndexedDocument, MatchType, SearchResult};
pub use utils::normalize;

#[cfg(test)]
mod tests {
    //! Crate-level property tests.
    //!
    //! Unit tests live next to their modules; these cover invariants that
    //! span modules, checked against randomly generated inputs.

    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // STRATEGIES
    // =========================================================================

    /// Random word-like strings.
    fn word_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-z0-9]{1,8}").unwrap()
    }

    /// Random text with punctuation and mixed case.
    fn text_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[A-Za-z0-9 ,.!?;:()\n\t'\"-]{0,120}").unwrap()
    }

    /// Random documents.
    fn document_strategy() -> impl Strategy<Value = Document> {
        (
            "[a-z0-9]{1,12}",
            text_strategy(),
            text_strategy(),
            prop::collection::vec(word_strategy(), 0..4),
        )
            .prop_map(|(id, title, content, tags)| Document {
                id,
                title,
                content,
                tags,
                modified_at: 0,
            })
    }

    // =========================================================================
    // TOKENIZER PROPERTIES
    // =========================================================================

    proptest! {
        #[test]
        fn prop_tokens_are_long_enough_and_clean(text in text_strategy()) {
            for word in extract_words(&text) {
                prop_assert!(word.chars().count() > 2);
                prop_assert!(word.chars().all(char::is_alphanumeric));
                prop_assert_eq!(word.to_lowercase(), word.clone());
            }
        }

        #[test]
        fn prop_tokenizer_deterministic(text in text_strategy()) {
            prop_assert_eq!(extract_words(&text), extract_words(&text));
        }
    }

    // =========================================================================
    // SIMILARITY PROPERTIES
    // =========================================================================

    proptest! {
        #[test]
        fn prop_similarity_bounds(a in word_strategy(), b in word_strategy()) {
            let sim = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&sim));
        }

        #[test]
        fn prop_similarity_identity(a in word_strategy()) {
            prop_assert!((similarity(&a, &a) - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn prop_similarity_symmetric(a in word_strategy(), b in word_strategy()) {
            prop_assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < f64::EPSILON);
        }

        /// Oracle: agree with strsim on the exact distance.
        #[test]
        fn prop_levenshtein_matches_strsim(a in word_strategy(), b in word_strategy()) {
            prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
        }
    }

    // =========================================================================
    // INDEX PROPERTIES
    // =========================================================================

    proptest! {
        #[test]
        fn prop_index_well_formed_after_mutations(
            docs in prop::collection::vec(document_strategy(), 1..6),
        ) {
            let mut index = NoteIndex::new();
            for doc in &docs {
                index.index_document(doc.clone());
                prop_assert!(index.is_well_formed());
            }

            // Re-index everything once more (exercises evict-then-insert).
            for doc in &docs {
                index.index_document(doc.clone());
                prop_assert!(index.is_well_formed());
            }

            for doc in &docs {
                index.remove_document(&doc.id);
                index.remove_document(&doc.id); // idempotent
                prop_assert!(index.is_well_formed());
            }

            let stats = index.stats();
            prop_assert_eq!(stats.document_count, 0);
            prop_assert_eq!(stats.content_word_count, 0);
            prop_assert_eq!(stats.tag_count, 0);
        }

        #[test]
        fn prop_search_scores_positive_and_sorted(
            docs in prop::collection::vec(document_strategy(), 1..6),
            query in text_strategy(),
        ) {
            let mut index = NoteIndex::new();
            for doc in docs {
                index.index_document(doc);
            }

            let results = search(&index, &query);
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for result in &results {
                prop_assert!(result.score > 0.0);
                prop_assert!(index.document(&result.document_id).is_some());
            }
        }
    }
}
