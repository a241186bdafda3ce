//! The in-memory dictionary index.
//!
//! Maps canonical keys to ordered buckets of the words sharing that key.
//! The index is populated by a single pass over a dictionary directory and
//! is only read afterwards. Bucket order is encounter order: files in
//! directory-listing order, lines top to bottom within a file — queries rely
//! on this for deterministic tie-breaking, so buckets are vectors, never
//! sets.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::canonical::canonical_key;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised while loading the dictionary directory.
///
/// Any error aborts the whole load; a partially loaded index is never
/// returned.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The dictionary directory does not exist or cannot be listed.
    #[error("cannot list dictionary directory {path:?}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dictionary file could not be opened or read to completion.
    #[error("cannot read dictionary file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Index of dictionary words keyed by canonical key.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file directly inside `dir` as a dictionary file, one word
    /// per line.
    ///
    /// The directory is not recursed into; a subdirectory entry is opened as
    /// if it were a file and fails the load. There is no skip-and-continue:
    /// the first enumeration or read error aborts the entire load.
    pub fn load(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|source| IndexError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut index = Self::new();
        for entry in entries {
            let entry = entry.map_err(|source| IndexError::DirectoryAccess {
                path: dir.to_path_buf(),
                source,
            })?;
            index.load_file(&entry.path())?;
        }
        Ok(index)
    }

    /// Read one dictionary file line by line into the index. The file handle
    /// is dropped when this returns, whether or not reading succeeded.
    fn load_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|source| IndexError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        for line in BufReader::new(file).lines() {
            let word = line.map_err(|source| IndexError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            self.insert(word);
        }
        Ok(())
    }

    /// Append a word to the bucket for its canonical key. Duplicate words
    /// produce duplicate bucket entries.
    pub fn insert(&mut self, word: String) {
        self.buckets
            .entry(canonical_key(&word))
            .or_default()
            .push(word);
    }

    /// The bucket for a canonical key, in insertion order.
    pub fn bucket(&self, key: &str) -> Option<&[String]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Total number of words across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
