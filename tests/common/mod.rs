//! Shared test utilities and fixtures.

#![allow(dead_code)]

use notedex::Document;
use std::fs;

/// Path to the JSON note fixture used by integration tests.
pub const FIXTURE_PATH: &str = "fixtures/test_notes.json";

/// Build a document with a fixed timestamp.
pub fn make_doc(id: &str, title: &str, content: &str, tags: &[&str]) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        modified_at: 0,
    }
}

/// Load the note fixture.
pub fn load_fixture() -> Vec<Document> {
    let content = fs::read_to_string(FIXTURE_PATH).expect("failed to read fixture");
    serde_json::from_str(&content).expect("invalid fixture JSON")
}
