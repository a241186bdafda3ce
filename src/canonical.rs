//! Canonical-key computation for words.
//!
//! Two words are anagrams of each other exactly when their canonical keys
//! are equal, so the key doubles as the index's bucket key.

/// Compute the canonical key of a word: its characters sorted into ascending
/// code-point order.
///
/// Case is not folded — `'E'` and `'e'` are distinct sort keys, so `"Eat"`
/// and `"tea"` do not share a key. Total and deterministic; the empty string
/// maps to itself.
pub fn canonical_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
