//! Prefix Dictionary Library
//!
//! An in-memory dictionary answering "all words starting with P" queries,
//! with stable-order, cursor-based pagination.
//!
//! # Architecture
//!
//! - [`data_structures::trie_store`]: ordered character trie in a node arena
//! - [`data_structures::prefix_search`]: pruned, early-stopping paginated lookup
//! - [`dictionary`]: the facade external callers build and query
//! - [`ingest`], [`session`]: word list streaming and the interactive loop
//! - [`config`], [`error`]: configuration loading and error types
//!
//! ```
//! use prefix_dict_lib::data_structures::LookupRequest;
//! use prefix_dict_lib::dictionary::Dictionary;
//!
//! let dict = Dictionary::build(["tablet", "tablets", "tableting", "tabletting"]);
//! let first = dict.lookup(&LookupRequest::first_page("tab", 2)).unwrap();
//! assert_eq!(first, vec!["tablet", "tableting"]);
//!
//! let next = dict.lookup(&LookupRequest::after("tab", "tableting", 2)).unwrap();
//! assert_eq!(next, vec!["tablets", "tabletting"]);
//! ```

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod ingest;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the prefix dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
