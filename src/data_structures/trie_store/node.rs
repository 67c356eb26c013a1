//! Node implementation for the trie store.
//!
//! Nodes live in the arena owned by [`TrieStore`](super::TrieStore) and refer
//! to their children through [`NodeId`] handles, so the arena is the only
//! owner and no pointer cycles can exist.

/// Handle to a node inside a [`TrieStore`](super::TrieStore) arena.
///
/// Handles are only minted by the store that owns the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the trie.
///
/// Each node represents one character position in the vocabulary. Children are
/// kept as an association list sorted by character so that iteration always
/// yields them in ascending codepoint order.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Edges to child nodes, sorted by character
    children: Vec<(char, NodeId)>,

    /// Whether the path from the root to this node spells a stored word
    is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            is_terminal: false,
        }
    }

    /// Returns `true` if the path to this node is a complete word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child reached through `letter`, if any.
    #[inline]
    pub fn child(&self, letter: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&letter, |&(c, _)| c)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Iterates over the children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, NodeId)> + ExactSizeIterator + '_ {
        self.children.iter().copied()
    }

    /// The `index`-th child in ascending character order.
    #[inline]
    pub fn child_at(&self, index: usize) -> Option<(char, NodeId)> {
        self.children.get(index).copied()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Inserts a new edge at its sorted position.
    pub(crate) fn add_child(&mut self, letter: char, child: NodeId) {
        let pos = self.children.partition_point(|&(c, _)| c < letter);
        debug_assert!(
            self.children.get(pos).map_or(true, |&(c, _)| c != letter),
            "add_child: letter already exists"
        );
        self.children.insert(pos, (letter, child));
    }

    /// Marks the node terminal, returning `true` if it was not terminal before.
    pub(crate) fn mark_terminal(&mut self) -> bool {
        let is_new = !self.is_terminal;
        self.is_terminal = true;
        is_new
    }
}
