//! Integration tests for the note search engine.
//!
//! These drive the public `SearchService` boundary end to end, using the
//! JSON note fixture under `fixtures/`.

mod common;

use common::{load_fixture, make_doc};
use notedex::{MatchType, SearchService};

fn fixture_service() -> SearchService {
    let service = SearchService::new();
    for doc in load_fixture() {
        service.index_document(doc);
    }
    service
}

// ============================================================================
// FIXTURE-BASED TESTS
// ============================================================================

#[test]
fn test_fixture_search_ranks_title_match_first() {
    let service = fixture_service();
    let results = service.search("rust");

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].document_id, "rust-guide");
    assert_eq!(results[0].match_type, MatchType::Title);
    assert!(results[0].score >= 3.0);

    // The remaining two are content matches with equal scores; ties order
    // by ascending document id.
    assert_eq!(results[1].document_id, "reading-list");
    assert_eq!(results[2].document_id, "sourdough");
    assert_eq!(results[1].match_type, MatchType::Content);
    assert!((results[1].score - results[2].score).abs() < f64::EPSILON);
}

#[test]
fn test_fixture_tag_search_sorted_by_title() {
    let service = fixture_service();
    let results = service.search_by_tag("tutorial");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Reading list");
    assert_eq!(results[1].title, "Rust Guide");
    for result in &results {
        assert_eq!(result.match_type, MatchType::Tag);
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.snippet, "Tagged with #tutorial");
        assert!(result.highlights.is_empty());
    }
}

#[test]
fn test_fixture_title_search() {
    let service = fixture_service();
    let results = service.search_by_title("rust guide");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document_id, "rust-guide");
    assert_eq!(results[0].snippet, "Title match");
    // "rust guide" vs "Rust Guide": two case edits over ten characters.
    assert!((results[0].score - 0.8).abs() < 1e-9);
}

#[test]
fn test_fixture_phrase_highlights_and_snippet() {
    let service = fixture_service();
    let results = service.search("fuzzy matcher");

    let hit = results
        .iter()
        .find(|r| r.document_id == "weekly-sync")
        .expect("weekly-sync should match");
    assert_eq!(hit.match_type, MatchType::Content);
    assert_eq!(hit.highlights.len(), 1);
    assert!(hit.snippet.contains("fuzzy matcher"));
    // The first highlight sits past the 50-char lead, so the window is
    // clipped on the left.
    assert!(hit.snippet.starts_with('…'));
}

#[test]
fn test_fixture_stats() {
    let service = fixture_service();
    let stats = service.stats();

    assert_eq!(stats.document_count, 4);
    assert_eq!(stats.tag_count, 6);
    assert!(stats.content_word_count > 0);
    assert!(stats.estimated_size_bytes > 0);
}

// ============================================================================
// LIFECYCLE
// ============================================================================

#[test]
fn test_removal_then_search_returns_empty() {
    let service = fixture_service();
    service.remove_document("rust-guide");
    service.remove_document("sourdough");
    service.remove_document("reading-list");

    assert!(service.search("rust").is_empty());
    // Idempotent: removing again changes nothing.
    service.remove_document("rust-guide");
    assert_eq!(service.stats().document_count, 1);
}

#[test]
fn test_rebuild_contract() {
    let service = fixture_service();
    service.rebuild_index();

    assert_eq!(service.stats().document_count, 0);
    assert!(service.search("rust").is_empty());

    // The caller owns re-population.
    for doc in load_fixture() {
        service.index_document(doc);
    }
    assert_eq!(service.stats().document_count, 4);
    assert_eq!(service.search("rust").len(), 3);
}

#[test]
fn test_reindex_replaces_previous_version() {
    let service = fixture_service();
    service.index_document(make_doc(
        "rust-guide",
        "Gardening Notes",
        "tomatoes peppers basil",
        &["garden"],
    ));

    // Old unique words and tags are gone; new ones are live.
    assert!(service
        .search("systems")
        .iter()
        .all(|r| r.document_id != "rust-guide"));
    assert!(service.search_by_tag("rust").is_empty());
    assert_eq!(service.search_by_tag("garden").len(), 1);
    assert_eq!(service.stats().document_count, 4);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_empty_and_stop_word_queries() {
    let service = fixture_service();

    assert!(service.search("").is_empty());
    assert!(service.search("   \n\t ").is_empty());
    assert!(service.search("the and or").is_empty());
    assert!(service.search_by_title("").is_empty());
    assert!(service.search_by_tag("").is_empty());
}

#[test]
fn test_fuzzy_only_match() {
    let service = fixture_service();
    // One edit away from "sourdough"; the word never appears in any title
    // or as a literal substring of the typo.
    let results = service.search("sourdogh");

    let hit = results
        .iter()
        .find(|r| r.document_id == "sourdough")
        .expect("typo should still reach the sourdough note");
    assert_eq!(hit.match_type, MatchType::FuzzyMatch);
    assert!(hit.highlights.is_empty());
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_result_json_shape() {
    let service = fixture_service();
    let results = service.search("rust");
    let json = serde_json::to_value(&results[0]).expect("results serialize");

    assert_eq!(json["documentId"], "rust-guide");
    assert_eq!(json["matchType"], "title");
    assert!(json["highlights"].is_array());
    assert!(json["score"].as_f64().unwrap() >= 3.0);

    let stats = serde_json::to_value(service.stats()).expect("stats serialize");
    assert_eq!(stats["documentCount"], 4);
}
