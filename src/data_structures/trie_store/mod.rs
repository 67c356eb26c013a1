//! Trie Store Implementation
//!
//! This module provides an ordered character trie backed by a node arena.
//! Children of every node are kept in ascending character order, which is
//! what makes ordered enumeration and cursor-based pagination possible on
//! top of it. The store itself knows nothing about pagination: it offers
//! insertion, prefix navigation and a policy-driven depth-first walk.

mod node;
mod visitor;

use std::ops::ControlFlow;

pub use node::{NodeId, TrieNode};
pub use visitor::{visitor_fn, FnVisitor, TrieVisitor};

#[cfg(test)]
pub use visitor::MockTrieVisitor;

/// Ordered character trie.
///
/// Key features:
/// * Arena allocation: every node lives in one `Vec`, addressed by [`NodeId`]
/// * Children iterate in ascending codepoint order
/// * Idempotent insertion
/// * Read-only after construction, so a built store can be shared between threads
#[derive(Debug, Clone)]
pub struct TrieStore {
    /// Node arena, the root is at index 0
    nodes: Vec<TrieNode>,

    /// Number of distinct stored words
    words: usize,
}

impl TrieStore {
    /// Creates a new trie containing only the root node.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates a new trie with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.max(1));
        arena.push(TrieNode::new());
        Self {
            nodes: arena,
            words: 0,
        }
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this store.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Inserts a word into the trie.
    ///
    /// Walks the path character by character, creating missing nodes, and
    /// marks the last node terminal. The empty string marks the root.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it already was.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for letter in word.chars() {
            current = match self.nodes[current.index()].child(letter) {
                Some(next) => next,
                None => {
                    let next = self.alloc_node();
                    self.nodes[current.index()].add_child(letter, next);
                    next
                }
            };
        }

        let is_new = self.nodes[current.index()].mark_terminal();
        if is_new {
            self.words += 1;
        }
        is_new
    }

    /// Follows one edge per character of `prefix`.
    ///
    /// # Returns
    ///
    /// The root of the subtree holding every word that starts with `prefix`,
    /// or `None` as soon as a character has no matching edge.
    pub fn navigate(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(self.root(), |id, letter| self.node(id).child(letter))
    }

    /// Returns `true` if exactly `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.navigate(word)
            .is_some_and(|id| self.node(id).is_terminal())
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word (not even the empty one) is stored.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the arena, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first walk of the subtree rooted at `start`.
    ///
    /// `path` must hold the string spelled by the path to `start`; it is
    /// extended while descending and restored before returning. Children are
    /// visited in ascending character order, so terminal nodes are reported in
    /// lexicographic order. The visitor is asked before every node (the
    /// subtree root included) whether to enter it.
    ///
    /// The walk keeps its own stack, so word length does not bound it by the
    /// thread stack.
    ///
    /// # Returns
    ///
    /// `ControlFlow::Break(())` if the visitor stopped the walk.
    pub fn walk<V>(&self, start: NodeId, path: &mut String, visitor: &mut V) -> ControlFlow<()>
    where
        V: TrieVisitor + ?Sized,
    {
        let base = path.len();
        let flow = self.walk_from(start, path, visitor);
        path.truncate(base);
        flow
    }

    fn walk_from<V>(&self, start: NodeId, path: &mut String, visitor: &mut V) -> ControlFlow<()>
    where
        V: TrieVisitor + ?Sized,
    {
        if !visitor.should_enter(path) {
            return ControlFlow::Continue(());
        }
        if self.node(start).is_terminal() {
            visitor.visit(path)?;
        }

        // (node, index of the next child to descend into, path length at node)
        let mut stack = vec![(start, 0usize, path.len())];
        while let Some(frame) = stack.last_mut() {
            let (id, next, depth) = *frame;
            let Some((letter, child)) = self.node(id).child_at(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            path.truncate(depth);
            path.push(letter);
            if !visitor.should_enter(path) {
                continue;
            }
            if self.node(child).is_terminal() {
                visitor.visit(path)?;
            }
            stack.push((child, 0, path.len()));
        }

        ControlFlow::Continue(())
    }

    fn alloc_node(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TrieNode::new());
        id
    }
}

impl Default for TrieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for TrieStore {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieStore {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
