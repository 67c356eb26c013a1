//! The dictionary facade.
//!
//! [`Dictionary`] owns the trie and is the type external collaborators talk
//! to: it is built once from a sequence of words and then only queried.

mod pages;

use std::path::Path;

use tracing::info;

use crate::data_structures::prefix_search::{LookupRequest, LookupResult, PrefixSearch};
use crate::data_structures::trie_store::TrieStore;
use crate::error::ingest::IngestError;
use crate::ingest::{self, IngestOptions};

pub use pages::{Page, Pages};

/// An in-memory prefix dictionary.
///
/// Lookups borrow the dictionary immutably, so a built dictionary can be
/// shared between threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: TrieStore,
}

impl Dictionary {
    /// Builds a dictionary from a finite, possibly lazy, sequence of words.
    ///
    /// Insertion order does not affect the result.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_trie(words.into_iter().collect())
    }

    /// Builds a dictionary from a fallible sequence, stopping at the first error.
    pub fn try_build<I, S, E>(words: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut trie = TrieStore::new();
        for word in words {
            trie.insert(word?.as_ref());
        }
        Ok(Self::from_trie(trie))
    }

    /// Streams a one-word-per-line file into a new dictionary.
    pub fn from_path<P: AsRef<Path>>(path: P, options: IngestOptions) -> Result<Self, IngestError> {
        Self::try_build(ingest::read_words(path, options)?)
    }

    fn from_trie(trie: TrieStore) -> Self {
        info!(
            words = trie.len(),
            nodes = trie.node_count(),
            "Loading the dictionary completed"
        );
        Self { trie }
    }

    /// Returns one page of words for `request`.
    ///
    /// See [`PrefixSearch::lookup`] for the exact contract.
    pub fn lookup(&self, request: &LookupRequest) -> LookupResult<Vec<String>> {
        self.search().lookup(request)
    }

    /// Iterates over successive pages of words starting with `prefix`.
    pub fn pages<P: Into<String>>(&self, prefix: P, page_size: usize) -> Pages<'_> {
        Pages::new(self.search(), prefix.into(), page_size)
    }

    /// Returns `true` if exactly `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &TrieStore {
        &self.trie
    }

    fn search(&self) -> PrefixSearch<'_> {
        PrefixSearch::new(&self.trie)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::build(words)
    }
}
