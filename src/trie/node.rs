//! Node implementation for the Kapu Trie.
//!
//! This module provides the TrieNode structure used in the Kapu Trie
//! implementation. Nodes are the fundamental building blocks of the trie,
//! each holding a terminal marker and the children reachable by consuming
//! one more character.

use fnv::FnvHashMap;

/// A node in the Kapu Trie.
///
/// Each node represents one character position along a stored word. The path
/// from the root to a node spells a prefix; terminal nodes mark the end of a
/// complete stored word.
#[derive(Debug)]
pub struct TrieNode {
    /// Map of folded characters to child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// Whether this node represents the end of a stored word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_terminal: false,
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
