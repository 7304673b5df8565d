//! Highlight extraction and snippet generation.
//!
//! Both work on the raw document content and the original query string;
//! neither touches the index. Offsets are character offsets, not byte
//! offsets, so they survive non-ASCII content.

use crate::types::Highlight;

/// Maximum snippet length in characters.
pub const SNIPPET_MAX_LEN: usize = 150;

/// Characters of context shown before the first highlight.
const SNIPPET_LEAD: usize = 50;

/// Case-fold a single character.
///
/// Per-char folding keeps the mapping 1:1 with the original text so highlight
/// offsets line up; `str::to_lowercase` can change the character count.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Find every literal occurrence of `query` in `content`, case-insensitive,
/// non-overlapping, left to right.
///
/// Matches only the full query string, never individual tokens.
pub fn find_highlights(query: &str, content: &str) -> Vec<Highlight> {
    let needle: Vec<char> = query.chars().map(fold_char).collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack: Vec<char> = content.chars().map(fold_char).collect();

    let mut highlights = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            highlights.push(Highlight {
                start: i,
                length: needle.len(),
            });
            i += needle.len();
        } else {
            i += 1;
        }
    }

    highlights
}

/// Build a preview window around the first highlight.
///
/// No highlights: the first `max_length` characters verbatim. Otherwise the
/// window runs from `max(0, first.start - 50)` to
/// `min(len, first.start + max_length)`, with `…` marking a clipped edge.
pub fn generate_snippet(content: &str, highlights: &[Highlight], max_length: usize) -> String {
    let chars: Vec<char> = content.chars().collect();

    let Some(first) = highlights.first() else {
        return chars.iter().take(max_length).collect();
    };

    // Clamp against the content length: highlights are caller-supplied and
    // may not have come from `find_highlights` on this content.
    let start = first.start.saturating_sub(SNIPPET_LEAD).min(chars.len());
    let end = (first.start + max_length).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push('…');
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push('…');
    }
    snippet
}
