//! Longest-anagram lookup against a loaded index.

use crate::canonical::canonical_key;
use crate::index::DictionaryIndex;

/// Rendered in place of a result when no anagram qualifies.
pub const NOT_FOUND: &str = "not found here";

/// Find the longest anagram of `word` in the index.
///
/// The query word itself is excluded, compared case-insensitively, so a
/// dictionary entry that is merely a case-variant of the same spelling never
/// matches. Among the remaining candidates the longest wins; equal lengths
/// are broken by insertion order, earliest first. Total for any input,
/// including the empty string — `None` means no qualifying anagram exists.
pub fn search_anagram<'a>(index: &'a DictionaryIndex, word: &str) -> Option<&'a str> {
    let key = canonical_key(word);
    let candidates = index.bucket(&key).unwrap_or(&[]);

    let mut best: Option<&str> = None;
    for candidate in candidates {
        if candidate.eq_ignore_ascii_case(word) {
            continue;
        }
        // Strictly-greater keeps the earliest-inserted candidate on ties.
        if best.map_or(true, |b| candidate.chars().count() > b.chars().count()) {
            best = Some(candidate.as_str());
        }
    }
    best
}
