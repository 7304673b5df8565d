//! The mutable index store: document store plus three inverted maps.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TWO_WAY_CONSISTENCY**: for every word `w` in a stored document's
//!    `content_words`, `content_words[w]` contains that document's id, and
//!    vice versa. Same for `title_words` and `tags`. No posting may
//!    reference an id absent from the document store.
//! 2. **NO_EMPTY_POSTINGS**: a key whose posting set becomes empty is
//!    removed, not left empty. Churn must not grow the maps.
//! 3. **EVICT_THEN_INSERT**: re-indexing an existing id fully evicts the
//!    old entry from all three maps before the new entry is inserted. No
//!    partial overlap between old and new token sets may persist.
//!
//! `is_well_formed` checks all of these and backs the test suite.

use crate::tokenizer::{extract_words, is_stop_word};
use crate::types::{Document, IndexStats, IndexedDocument};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// In-memory index over a mutable note collection.
///
/// Owns its four maps exclusively; all access goes through these methods.
/// Not internally synchronized: `SearchService` serializes access through a
/// single worker, and that boundary is what makes evict-then-insert atomic
/// with respect to readers.
#[derive(Debug, Default)]
pub struct NoteIndex {
    documents: HashMap<String, IndexedDocument>,
    content_words: HashMap<String, HashSet<String>>,
    title_words: HashMap<String, HashSet<String>>,
    tags: HashMap<String, HashSet<String>>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a document, replacing any previous entry for the same id.
    ///
    /// Always succeeds: no I/O, no failure mode.
    pub fn index_document(&mut self, doc: Document) {
        if self.documents.contains_key(&doc.id) {
            self.evict(&doc.id);
        }

        let entry = build_entry(doc);

        for word in &entry.content_words {
            self.content_words
                .entry(word.clone())
                .or_default()
                .insert(entry.id.clone());
        }
        for word in &entry.title_words {
            self.title_words
                .entry(word.clone())
                .or_default()
                .insert(entry.id.clone());
        }
        for tag in &entry.tags {
            self.tags
                .entry(tag.clone())
                .or_default()
                .insert(entry.id.clone());
        }

        debug!(
            id = %entry.id,
            content_words = entry.content_words.len(),
            title_words = entry.title_words.len(),
            tags = entry.tags.len(),
            "indexed document"
        );
        self.documents.insert(entry.id.clone(), entry);
    }

    /// Remove a document. A missing id is a no-op, not an error, so removal
    /// is idempotent.
    pub fn remove_document(&mut self, id: &str) {
        if self.documents.contains_key(id) {
            self.evict(id);
            self.documents.remove(id);
            debug!(id = %id, "removed document");
        }
    }

    /// Clear all four structures.
    ///
    /// Does not re-ingest anything: the document collaborator is the source
    /// of truth and must call `index_document` for each current document
    /// afterwards.
    pub fn rebuild(&mut self) {
        self.documents.clear();
        self.content_words.clear();
        self.title_words.clear();
        self.tags.clear();
        debug!("index cleared for rebuild");
    }

    /// Size snapshot: counts plus an estimated byte size (character counts
    /// of stored titles/contents and of every key in the inverted maps).
    pub fn stats(&self) -> IndexStats {
        let stored: usize = self
            .documents
            .values()
            .map(|d| d.title.chars().count() + d.content.chars().count())
            .sum();
        let keys: usize = self
            .content_words
            .keys()
            .chain(self.title_words.keys())
            .chain(self.tags.keys())
            .map(|k| k.chars().count())
            .sum();

        IndexStats {
            document_count: self.documents.len(),
            content_word_count: self.content_words.len(),
            tag_count: self.tags.len(),
            estimated_size_bytes: stored + keys,
        }
    }

    /// Drop all postings for `id` from the three inverted maps, pruning any
    /// key whose set becomes empty.
    fn evict(&mut self, id: &str) {
        let Some(entry) = self.documents.get(id) else {
            return;
        };

        for word in &entry.content_words {
            remove_posting(&mut self.content_words, word, id);
        }
        for word in &entry.title_words {
            remove_posting(&mut self.title_words, word, id);
        }
        for tag in &entry.tags {
            remove_posting(&mut self.tags, tag, id);
        }
    }
}

/// Read accessors used by the query engine.
impl NoteIndex {
    pub fn document(&self, id: &str) -> Option<&IndexedDocument> {
        self.documents.get(id)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn content_word_docs(&self, word: &str) -> Option<&HashSet<String>> {
        self.content_words.get(word)
    }

    pub fn title_word_docs(&self, word: &str) -> Option<&HashSet<String>> {
        self.title_words.get(word)
    }

    pub fn tag_docs(&self, tag: &str) -> Option<&HashSet<String>> {
        self.tags.get(tag)
    }

    /// Every distinct word currently in the content-word map. This is the
    /// vocabulary the fuzzy matcher scans in full.
    pub fn content_vocabulary(&self) -> impl Iterator<Item = &str> {
        self.content_words.keys().map(String::as_str)
    }
}

/// Build the stored entry: tokenize title and content independently, filter
/// stop words, lowercase tags.
fn build_entry(doc: Document) -> IndexedDocument {
    let content_words: HashSet<String> = extract_words(&doc.content)
        .into_iter()
        .filter(|w| !is_stop_word(w))
        .collect();
    let title_words: HashSet<String> = extract_words(&doc.title)
        .into_iter()
        .filter(|w| !is_stop_word(w))
        .collect();
    let tags: HashSet<String> = doc.tags.iter().map(|t| t.to_lowercase()).collect();

    IndexedDocument {
        id: doc.id,
        title: doc.title,
        content: doc.content,
        tags,
        content_words,
        title_words,
        modified_at: doc.modified_at,
    }
}

fn remove_posting(map: &mut HashMap<String, HashSet<String>>, key: &str, id: &str) {
    if let Some(ids) = map.get_mut(key) {
        ids.remove(id);
        if ids.is_empty() {
            map.remove(key);
        }
    }
}

/// Check the store/index consistency invariants (debug assertion).
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
impl NoteIndex {
    pub fn is_well_formed(&self) -> bool {
        let forward = |words: &HashSet<String>,
                       map: &HashMap<String, HashSet<String>>,
                       id: &str| {
            words
                .iter()
                .all(|w| map.get(w).is_some_and(|ids| ids.contains(id)))
        };

        // Every stored word has a posting.
        for (id, entry) in &self.documents {
            if !forward(&entry.content_words, &self.content_words, id)
                || !forward(&entry.title_words, &self.title_words, id)
                || !forward(&entry.tags, &self.tags, id)
            {
                return false;
            }
        }

        // Every posting points at a stored document that has the word, and
        // no posting set is empty.
        let backward = |map: &HashMap<String, HashSet<String>>,
                        field: fn(&IndexedDocument) -> &HashSet<String>| {
            map.iter().all(|(key, ids)| {
                !ids.is_empty()
                    && ids.iter().all(|id| {
                        self.documents
                            .get(id)
                            .is_some_and(|entry| field(entry).contains(key))
                    })
            })
        };

        backward(&self.content_words, |e| &e.content_words)
            && backward(&self.title_words, |e| &e.title_words)
            && backward(&self.tags, |e| &e.tags)
    }
}
