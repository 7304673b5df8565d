//! The query engine: full-text, tag, and title lookup over a `NoteIndex`.
//!
//! `search` accumulates a per-document score across all query words
//! (exact content hits, exact title hits, fuzzy content hits), classifies
//! the match, and attaches highlights plus a snippet built from the raw
//! content and the original query string.

use crate::fuzzy::{find_fuzzy_matches, similarity};
use crate::index::NoteIndex;
use crate::scoring::{
    CONTENT_WORD_SCORE, FUZZY_MATCH_WEIGHT, FUZZY_SIMILARITY_THRESHOLD, TITLE_WORD_SCORE,
};
use crate::snippet::{find_highlights, generate_snippet, SNIPPET_MAX_LEN};
use crate::tokenizer::{extract_words, is_stop_word};
use crate::types::{Highlight, IndexedDocument, MatchType, SearchResult};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Full-text search.
///
/// Per query word, a document earns 1.0 for an exact content-word hit, 2.0
/// for an exact title-word hit, and 0.5 × similarity for each fuzzy content
/// hit (additive with exact hits for the same document). Results are sorted
/// by score descending; equal scores order by ascending document id so the
/// output is deterministic.
///
/// Empty or stop-word-only queries return an empty list.
pub fn search(index: &NoteIndex, query: &str) -> Vec<SearchResult> {
    let query_words: Vec<String> = extract_words(query)
        .into_iter()
        .filter(|w| !is_stop_word(w))
        .collect();
    if query_words.is_empty() {
        return Vec::new();
    }

    let mut scores: HashMap<String, f64> = HashMap::new();
    for word in &query_words {
        if let Some(doc_ids) = index.content_word_docs(word) {
            for id in doc_ids {
                *scores.entry(id.clone()).or_insert(0.0) += CONTENT_WORD_SCORE;
            }
        }
        if let Some(doc_ids) = index.title_word_docs(word) {
            for id in doc_ids {
                *scores.entry(id.clone()).or_insert(0.0) += TITLE_WORD_SCORE;
            }
        }

        // Full-vocabulary scan per query word; see fuzzy module docs for the
        // cost model. An exact vocabulary hit also appears here at
        // similarity 1.0, on top of its exact-match contribution.
        for (matched, sim) in
            find_fuzzy_matches(word, index.content_vocabulary(), FUZZY_SIMILARITY_THRESHOLD)
        {
            if let Some(doc_ids) = index.content_word_docs(&matched) {
                for id in doc_ids {
                    *scores.entry(id.clone()).or_insert(0.0) += FUZZY_MATCH_WEIGHT * sim;
                }
            }
        }
    }

    let query_lower = query.to_lowercase();
    let mut results: Vec<SearchResult> = scores
        .into_iter()
        .filter_map(|(doc_id, score)| {
            index.document(&doc_id).map(|doc| {
                let match_type = classify_match(doc, &query_lower);
                let highlights = find_highlights(query, &doc.content);
                let snippet = generate_snippet(&doc.content, &highlights, SNIPPET_MAX_LEN);
                make_result(doc, score, match_type, snippet, highlights)
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.document_id.cmp(&b.document_id))
    });

    debug!(query = %query, results = results.len(), "search complete");
    results
}

/// Tag lookup. Exact (lowercased) key match, score 1.0, alphabetical by
/// title.
pub fn search_by_tag(index: &NoteIndex, tag: &str) -> Vec<SearchResult> {
    let Some(doc_ids) = index.tag_docs(&tag.to_lowercase()) else {
        return Vec::new();
    };

    let mut results: Vec<SearchResult> = doc_ids
        .iter()
        .filter_map(|id| index.document(id))
        .map(|doc| {
            make_result(
                doc,
                1.0,
                MatchType::Tag,
                format!("Tagged with #{tag}"),
                Vec::new(),
            )
        })
        .collect();

    results.sort_by(|a, b| a.title.cmp(&b.title));
    results
}

/// Title search: union of title-word postings for the tokenized query,
/// scored by Levenshtein similarity between the raw query and each
/// document's raw title.
pub fn search_by_title(index: &NoteIndex, title: &str) -> Vec<SearchResult> {
    let title_words: Vec<String> = extract_words(title)
        .into_iter()
        .filter(|w| !is_stop_word(w))
        .collect();
    if title_words.is_empty() {
        return Vec::new();
    }

    let mut candidates: HashSet<&String> = HashSet::new();
    for word in &title_words {
        if let Some(doc_ids) = index.title_word_docs(word) {
            candidates.extend(doc_ids);
        }
    }

    let mut results: Vec<SearchResult> = candidates
        .into_iter()
        .filter_map(|id| index.document(id))
        .map(|doc| {
            make_result(
                doc,
                similarity(title, &doc.title),
                MatchType::Title,
                "Title match".to_string(),
                Vec::new(),
            )
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.document_id.cmp(&b.document_id))
    });
    results
}

/// Classify how a document matched, checked in order: full query inside the
/// title, whole-content equality, full query inside the content, else fuzzy.
fn classify_match(doc: &IndexedDocument, query_lower: &str) -> MatchType {
    if doc.title.to_lowercase().contains(query_lower) {
        return MatchType::Title;
    }
    let content_lower = doc.content.to_lowercase();
    if content_lower.contains(query_lower) {
        if content_lower == query_lower {
            MatchType::ExactMatch
        } else {
            MatchType::Content
        }
    } else {
        MatchType::FuzzyMatch
    }
}

fn make_result(
    doc: &IndexedDocument,
    score: f64,
    match_type: MatchType,
    snippet: String,
    highlights: Vec<Highlight>,
) -> SearchResult {
    SearchResult {
        id: format!("{}:{}", doc.id, match_type.as_str()),
        document_id: doc.id.clone(),
        title: doc.title.clone(),
        snippet,
        score,
        match_type,
        highlights,
    }
}
