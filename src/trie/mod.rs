//! Kapu Trie Implementation
//!
//! This module provides a case-insensitive trie (prefix tree) over Unicode
//! code points for storing a word list and answering membership and
//! containment queries against it. Optimized for denylist screening use
//! cases where per-query cost must stay proportional to the query length,
//! independent of dictionary size.

mod error;
mod node;

pub use error::{KapuTrieError, KapuTrieResult};
use node::TrieNode;

/// Folds an input string into the character sequence the trie operates on.
///
/// All storage and matching works on lowercased text, which is what makes
/// every operation case-insensitive by construction.
fn fold_chars(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

/// Kapu Trie is a case-insensitive trie over Unicode code points for fast
/// membership and substring containment testing against a word list.
///
/// Key features:
/// * Case-insensitive lookups by construction (inputs are folded before walking)
/// * Exact membership checks in O(length of query)
/// * Substring containment scanning with a minimum-depth threshold
/// * Bulk loading of an ordered word list
///
/// The trie is a plain owned structure with no interior locking; callers that
/// share one across threads must wrap it in their own exclusive lock or
/// freeze it after a build phase.
#[derive(Debug)]
pub struct KapuTrie {
    /// The root node of the trie; spells the empty prefix.
    root: TrieNode,

    /// Running tally of `add` calls minus successful `delete` calls.
    count: isize,
}

impl KapuTrie {
    /// Creates a new empty `KapuTrie`.
    ///
    /// # Returns
    ///
    /// A new `KapuTrie` instance with a fresh root and a zero count.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            count: 0,
        }
    }

    /// Adds a word to the trie, creating any nodes it needs.
    ///
    /// The word is folded to lowercase before being walked; each character
    /// that has no child yet gets a fresh node, and the node where the word
    /// ends is marked terminal.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word was added. Adding never fails today; the
    ///   `Result` reserves error signaling for character classes a future
    ///   revision may refuse to index.
    ///
    /// Re-adding a word that is already present marks the same node terminal
    /// again and still bumps the count: the counter tracks `add` calls, not
    /// distinct words. See [`count`](Self::count).
    pub fn add(&mut self, word: &str) -> KapuTrieResult<()> {
        let mut node = &mut self.root;
        for c in fold_chars(word) {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
        }
        node.is_terminal = true;
        self.count += 1;
        Ok(())
    }

    /// Loads a word list by performing [`add`](Self::add) on each entry in order.
    ///
    /// # Arguments
    ///
    /// * `words` - The word list to load.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Every word was added.
    /// * `Err(KapuTrieError::EmptyWordList)` - The list was empty; nothing
    ///   was loaded.
    ///
    /// The first `add` error aborts the load and is returned as-is; entries
    /// added before the failure stay in the trie.
    pub fn load<S: AsRef<str>>(&mut self, words: &[S]) -> KapuTrieResult<()> {
        if words.is_empty() {
            return Err(KapuTrieError::EmptyWordList);
        }

        for word in words {
            self.add(word.as_ref())?;
        }

        Ok(())
    }

    /// Determines whether an input string exactly matches a word in the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The string to look up.
    ///
    /// # Returns
    ///
    /// `true` iff the folded input walks to a terminal node. A dead end
    /// anywhere along the walk, or ending on a node that is only a prefix of
    /// stored words, returns `false`. The empty string returns `false`: it
    /// has no characters to consume and the root never counts as a match.
    pub fn find(&self, word: &str) -> bool {
        let chars = fold_chars(word);
        if chars.is_empty() {
            return false;
        }

        let mut node = &self.root;
        for c in chars {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return false,
            }
        }

        node.is_terminal
    }

    /// Searches `text` for the first stored word contained in it, honoring a
    /// minimum-depth threshold.
    ///
    /// Every starting offset of the folded text is scanned left to right.
    /// From each offset the trie is walked character by character with a
    /// remaining-depth counter starting at `min`: once the counter has
    /// reached zero, every node reached is checked for terminality, and the
    /// first terminal hit wins. The matched word is reconstructed from the
    /// walk, so it is reported in its folded (lowercase) form.
    ///
    /// `min` is the number of characters consumed before terminal checks
    /// begin firing, not a strict minimum match length: a stored word of
    /// length `min + 1` is the shortest one that can be reported, because
    /// consuming its full length is what brings the counter to zero on its
    /// own terminal node. With `min = 0` every consumed character is checked,
    /// so the shortest stored word along the walk wins.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to scan.
    /// * `min` - Characters to consume at each offset before terminal checks
    ///   start.
    ///
    /// # Returns
    ///
    /// * `Some(word)` - The folded form of the first contained word, from the
    ///   left-most offset that produced a hit.
    /// * `None` - No stored word is contained in `text` at or beyond the
    ///   threshold.
    pub fn contained(&self, text: &str, min: usize) -> Option<String> {
        let chars = fold_chars(text);

        for start in 0..chars.len() {
            if let Some(word) = self.scan_suffix(&chars[start..], min) {
                return Some(word);
            }
        }

        None
    }

    /// Determines whether any stored word is contained in `text`.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to scan.
    /// * `min` - Depth threshold, as for [`contained`](Self::contained).
    ///
    /// # Returns
    ///
    /// `true` iff [`contained`](Self::contained) reports a match.
    pub fn is_contained(&self, text: &str, min: usize) -> bool {
        self.contained(text, min).is_some()
    }

    /// Walks one suffix of the folded text, reporting the first terminal
    /// node reached once the depth counter is spent.
    fn scan_suffix(&self, suffix: &[char], min: usize) -> Option<String> {
        let mut node = &self.root;
        let mut remaining = min;
        let mut walked = String::new();

        for &c in suffix {
            let child = node.children.get(&c)?;
            walked.push(c);

            if remaining == 0 {
                if child.is_terminal {
                    return Some(walked);
                }
            } else {
                remaining -= 1;
            }

            node = child;
        }

        None
    }

    /// Removes a word from the trie.
    ///
    /// The walk only clears the terminal flag on the node where the folded
    /// word ends; nodes and child entries are never removed, so sibling
    /// words sharing the prefix keep their paths intact and a cleared leaf
    /// stays allocated as dead weight.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The full path existed; the terminal flag was cleared
    ///   (even if it was already clear) and the count decremented.
    /// * `Err(KapuTrieError::NotFound)` - The path diverged before the input
    ///   was exhausted; the trie and count are unchanged.
    ///
    /// A word that was never added but is a bare prefix of stored words
    /// still walks to completion, so deleting it "succeeds" and decrements
    /// the count without removing any real entry. See [`count`](Self::count).
    pub fn delete(&mut self, word: &str) -> KapuTrieResult<()> {
        let mut node = &mut self.root;
        for c in fold_chars(word) {
            node = node
                .children
                .get_mut(&c)
                .ok_or_else(|| KapuTrieError::NotFound(word.to_string()))?;
        }

        node.is_terminal = false;
        self.count -= 1;
        Ok(())
    }

    /// Returns the bookkeeping count of words in the trie.
    ///
    /// The counter tallies `add` calls and successful `delete` calls
    /// verbatim; it is not recomputed from the tree. Degenerate sequences
    /// make it drift from the number of distinct stored words: re-adding a
    /// present word inflates it, deleting a bare prefix deflates it, and
    /// enough prefix deletes can drive it negative.
    pub fn count(&self) -> isize {
        self.count
    }

    /// Checks whether the trie is structurally empty.
    ///
    /// # Returns
    ///
    /// `true` iff the root has no children and carries no terminal mark.
    /// This reads the tree, not the drift-prone count.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_terminal
    }

    /// Clears all words from the trie, resetting it to a fresh root and a
    /// zero count.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.count = 0;
    }
}

impl Default for KapuTrie {
    fn default() -> Self {
        Self::new()
    }
}
