//! Traversal policy contract for [`TrieStore::walk`](super::TrieStore::walk).
//!
//! A visitor decides which subtrees are entered and when the whole walk
//! stops. Stopping is signalled with [`ControlFlow::Break`], which the walk
//! propagates up through every level of the recursion.

use std::ops::ControlFlow;

/// Policy driving a depth-first walk over a trie subtree.
#[cfg_attr(test, mockall::automock)]
pub trait TrieVisitor {
    /// Called before a node is entered, with the path leading to it.
    ///
    /// Returning `false` skips the node and its whole subtree.
    fn should_enter(&mut self, path: &str) -> bool;

    /// Called for every terminal node that was entered, with the full word.
    fn visit(&mut self, word: &str) -> ControlFlow<()>;
}

/// A [`TrieVisitor`] assembled from a prune test and a visit callback.
#[derive(Debug, Clone, Copy)]
pub struct FnVisitor<P, V> {
    should_enter: P,
    visit: V,
}

/// Builds a visitor from two closures.
///
/// ```
/// use std::ops::ControlFlow;
/// use prefix_dict_lib::data_structures::trie_store::{visitor_fn, TrieStore};
///
/// let trie: TrieStore = ["ant", "bee", "cat"].into_iter().collect();
/// let mut seen = Vec::new();
/// let mut path = String::new();
/// let _ = trie.walk(
///     trie.root(),
///     &mut path,
///     &mut visitor_fn(
///         |path: &str| path <= "b" || path.starts_with('b'),
///         |word: &str| {
///             seen.push(word.to_owned());
///             ControlFlow::Continue(())
///         },
///     ),
/// );
/// assert_eq!(seen, vec!["ant", "bee"]);
/// ```
pub fn visitor_fn<P, V>(should_enter: P, visit: V) -> FnVisitor<P, V>
where
    P: FnMut(&str) -> bool,
    V: FnMut(&str) -> ControlFlow<()>,
{
    FnVisitor { should_enter, visit }
}

impl<P, V> TrieVisitor for FnVisitor<P, V>
where
    P: FnMut(&str) -> bool,
    V: FnMut(&str) -> ControlFlow<()>,
{
    fn should_enter(&mut self, path: &str) -> bool {
        (self.should_enter)(path)
    }

    fn visit(&mut self, word: &str) -> ControlFlow<()> {
        (self.visit)(word)
    }
}
