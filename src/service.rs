//! Serialized access to the index: one worker thread, one request at a time.
//!
//! External callers can hold clones of `SearchService` on as many threads as
//! they like. Every operation sends a request down a channel to a dedicated
//! worker that owns the `NoteIndex`, then blocks on the reply. Because the
//! worker processes requests strictly in order, no reader ever observes a
//! document store that is inconsistent with the inverted maps, and
//! evict-then-insert during re-indexing is atomic with respect to every
//! other operation.
//!
//! This is a producer/consumer queue against a single consumer, not a
//! reader/writer lock: read parallelism is traded away for correctness. A
//! dequeued request runs to completion (there is no cancellation), and a
//! rebuild followed by bulk re-indexing monopolizes the worker for its
//! duration. No timeouts are imposed here; timeout policy belongs to the
//! caller.
//!
//! Engine operations are total, so none of these methods return errors. The
//! only way a call can fail is the worker thread having panicked, which is a
//! bug in the engine itself; that case panics the caller too rather than
//! returning made-up data.

use crate::index::NoteIndex;
use crate::search::{search, search_by_tag, search_by_title};
use crate::types::{Document, IndexStats, SearchResult};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::debug;

enum Request {
    Index(Document, Sender<()>),
    Remove(String, Sender<()>),
    Search(String, Sender<Vec<SearchResult>>),
    SearchByTag(String, Sender<Vec<SearchResult>>),
    SearchByTitle(String, Sender<Vec<SearchResult>>),
    Rebuild(Sender<()>),
    Stats(Sender<IndexStats>),
}

/// Thread-safe handle to the serialized search worker.
///
/// Cheap to clone. The worker thread exits when the last handle is dropped
/// (its request channel disconnects), so no explicit shutdown is needed.
#[derive(Clone)]
pub struct SearchService {
    requests: Sender<Request>,
}

impl SearchService {
    /// Start the worker thread with an empty index.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("notedex-worker".to_string())
            .spawn(move || worker(rx))
            .expect("failed to spawn search worker thread");
        Self { requests: tx }
    }

    /// Index a document (replacing any previous entry for the same id).
    /// Returns once the worker has applied the change.
    pub fn index_document(&self, doc: Document) {
        self.call(|reply| Request::Index(doc, reply));
    }

    /// Remove a document; a missing id is a no-op.
    pub fn remove_document(&self, id: impl Into<String>) {
        self.call(|reply| Request::Remove(id.into(), reply));
    }

    /// Full-text search. Empty or whitespace-only queries return an empty
    /// list.
    pub fn search(&self, query: impl Into<String>) -> Vec<SearchResult> {
        self.call(|reply| Request::Search(query.into(), reply))
    }

    /// Exact (case-insensitive) tag lookup.
    pub fn search_by_tag(&self, tag: impl Into<String>) -> Vec<SearchResult> {
        self.call(|reply| Request::SearchByTag(tag.into(), reply))
    }

    /// Title search scored by string similarity.
    pub fn search_by_title(&self, title: impl Into<String>) -> Vec<SearchResult> {
        self.call(|reply| Request::SearchByTitle(title.into(), reply))
    }

    /// Clear the whole index. The caller owns re-population: submit every
    /// current document via `index_document` afterwards.
    pub fn rebuild_index(&self) {
        self.call(Request::Rebuild);
    }

    /// Snapshot of index size.
    pub fn stats(&self) -> IndexStats {
        self.call(Request::Stats)
    }

    fn call<T>(&self, make: impl FnOnce(Sender<T>) -> Request) -> T {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.requests
            .send(make(reply_tx))
            .expect("search worker terminated");
        reply_rx.recv().expect("search worker terminated")
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}

fn worker(requests: Receiver<Request>) {
    let mut index = NoteIndex::new();
    debug!("search worker started");

    // A reply can only fail to send if the caller gave up waiting; the
    // operation itself has already been applied, so that is fine.
    while let Ok(request) = requests.recv() {
        match request {
            Request::Index(doc, reply) => {
                index.index_document(doc);
                let _ = reply.send(());
            }
            Request::Remove(id, reply) => {
                index.remove_document(&id);
                let _ = reply.send(());
            }
            Request::Search(query, reply) => {
                let _ = reply.send(search(&index, &query));
            }
            Request::SearchByTag(tag, reply) => {
                let _ = reply.send(search_by_tag(&index, &tag));
            }
            Request::SearchByTitle(title, reply) => {
                let _ = reply.send(search_by_title(&index, &title));
            }
            Request::Rebuild(reply) => {
                index.rebuild();
                let _ = reply.send(());
            }
            Request::Stats(reply) => {
                let _ = reply.send(index.stats());
            }
        }
    }

    debug!("search worker stopped");
}
