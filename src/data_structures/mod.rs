//! Data structures for the prefix dictionary.
//!
//! - [`trie_store`]: the ordered character trie and its policy-driven walk
//! - [`prefix_search`]: paginated, cursor-bounded prefix enumeration on top of it

pub mod prefix_search;
pub mod trie_store;

// Re-export common data structures
pub use prefix_search::{LookupError, LookupRequest, LookupResult, PrefixSearch};
pub use trie_store::{NodeId, TrieStore, TrieVisitor};
