// Copyright (c) 2025 Prefix Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Paginated prefix search over a [`TrieStore`].
//!
//! A lookup locates the subtree for the requested prefix and walks it depth
//! first in ascending character order. Two closures steer the walk:
//!
//! - the prune test refuses every subtree whose path already sorts before the
//!   cursor, so resumed pages do not rescan what earlier pages returned;
//! - the visit callback keeps words strictly after the cursor and breaks the
//!   walk as soon as the page is full.
//!
//! No state survives between calls. The caller resumes by passing the last
//! word of a page as the cursor of the next request.

mod error;
mod request;

use std::ops::ControlFlow;

use tracing::debug;

use crate::data_structures::trie_store::{visitor_fn, TrieStore};

pub use error::{InvalidRequestReason, LookupError, LookupResult};
pub use request::{LookupRequest, ValidatedRequest};

/// Read-only search view over a trie.
#[derive(Debug, Clone, Copy)]
pub struct PrefixSearch<'t> {
    trie: &'t TrieStore,
}

impl<'t> PrefixSearch<'t> {
    /// Creates a search view borrowing `trie`.
    pub fn new(trie: &'t TrieStore) -> Self {
        Self { trie }
    }

    /// Returns the next page of words for a request.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Up to `limit` words, in ascending order, each starting
    ///   with the prefix and sorting strictly after the cursor. Empty when the prefix
    ///   is unknown or the cursor is past every match.
    /// * `Err(LookupError)` - If the request failed validation.
    pub fn lookup(&self, request: &LookupRequest) -> LookupResult<Vec<String>> {
        debug!(
            prefix = %request.prefix,
            cursor = ?request.cursor,
            limit = request.limit,
            "Lookup request"
        );
        let request = request.validate()?;
        Ok(self.collect_page(request))
    }

    /// Runs the bounded walk for an already validated request.
    pub fn collect_page(&self, request: ValidatedRequest<'_>) -> Vec<String> {
        let ValidatedRequest {
            prefix,
            cursor,
            limit,
        } = request;

        if limit == 0 {
            return Vec::new();
        }
        let Some(subtree) = self.trie.navigate(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::with_capacity(limit.min(64));
        let mut path = String::from(prefix);
        let _ = self.trie.walk(
            subtree,
            &mut path,
            &mut visitor_fn(
                |path: &str| !cursor_passed(cursor, path),
                |word: &str| {
                    if cursor < word {
                        words.push(word.to_owned());
                    }
                    if words.len() >= limit {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                },
            ),
        );
        words
    }
}

/// Prune test: `true` when every word under `path` sorts before `cursor`.
///
/// The cursor is truncated to the length of `path` and compared with it. If
/// the truncated cursor is already greater, the two differ at a position
/// inside `path`, so any extension of `path` stays below the cursor.
/// Truncating by bytes gives the same answer as truncating by characters
/// because UTF-8 byte order matches codepoint order and the first differing
/// byte always falls inside the encoding of `path`.
pub(crate) fn cursor_passed(cursor: &str, path: &str) -> bool {
    let end = cursor.len().min(path.len());
    cursor.as_bytes()[..end] > *path.as_bytes()
}
