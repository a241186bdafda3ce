//! # Anagram Finder
//!
//! Builds an in-memory index of words from a directory of dictionary files,
//! then answers queries for the longest word that is an anagram of a given
//! word.
//!
//! Words are grouped by their canonical key (characters sorted into
//! code-point order); two words are anagrams exactly when their canonical
//! keys are equal. The index is built once from the dictionary directory and
//! is read-only afterwards.

pub mod canonical;
pub mod index;
pub mod query;

pub use canonical::canonical_key;
pub use index::{DictionaryIndex, IndexError};
pub use query::{search_anagram, NOT_FOUND};
