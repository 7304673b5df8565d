//! The building blocks of the note index.
//!
//! `Document` is what the outside world hands us, `IndexedDocument` is what
//! the index store keeps, and `SearchResult`/`IndexStats` are what callers
//! get back. Result payloads serialize as camelCase JSON so embedders can
//! pass them straight through to a UI layer.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **IndexedDocument**: `content_words` and `title_words` contain exactly
//!   the non-stop tokens of the content and title. Every word here has a
//!   matching posting in the corresponding inverted map, and vice versa.
//! - **Highlight**: `start` and `length` are *character* offsets into the
//!   original content, not byte offsets. Byte offsets would land mid-codepoint
//!   on non-ASCII notes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A note as supplied by the document collaborator.
///
/// Read-only input: the engine takes a snapshot and never writes back.
/// Tags are treated case-insensitively (lowercased at indexing time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Last modification time, milliseconds since the Unix epoch.
    pub modified_at: u64,
}

/// A document as held by the index store.
///
/// Owned exclusively by `NoteIndex`. Created on `index_document`, replaced
/// wholesale on re-index (old entry fully evicted first), destroyed on
/// removal or rebuild.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Lowercased tag set, indexed verbatim (no stop-word filtering).
    pub tags: HashSet<String>,
    /// Non-stop content tokens; mirrors the content-word inverted map.
    pub content_words: HashSet<String>,
    /// Non-stop title tokens; mirrors the title-word inverted map.
    pub title_words: HashSet<String>,
    pub modified_at: u64,
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// How a document matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    Title,
    Content,
    Tag,
    ExactMatch,
    FuzzyMatch,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Title => "title",
            MatchType::Content => "content",
            MatchType::Tag => "tag",
            MatchType::ExactMatch => "exactMatch",
            MatchType::FuzzyMatch => "fuzzyMatch",
        }
    }
}

/// A single occurrence of the query inside document content.
///
/// Character offsets into the original (unmodified) content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub start: usize,
    pub length: usize,
}

/// What users see when they get a search result.
///
/// Ephemeral: the engine does not keep these around. The `id` is
/// deterministic (`"<document_id>:<match_type>"`): a query produces at most
/// one result per document, so the pair is unique within a result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub document_id: String,
    pub title: String,
    pub snippet: String,
    /// Non-negative relevance score. Higher is better.
    pub score: f64,
    pub match_type: MatchType,
    /// Ordered left-to-right, non-overlapping.
    pub highlights: Vec<Highlight>,
}

// =============================================================================
// STATS
// =============================================================================

/// Read-only snapshot of index size.
///
/// `estimated_size_bytes` sums content/title character counts plus key
/// character counts across the inverted maps. It is an approximation for
/// dashboards, not a memory measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub document_count: usize,
    pub content_word_count: usize,
    pub tag_count: usize,
    pub estimated_size_bytes: usize,
}
