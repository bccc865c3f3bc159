//! Kapu Trie Library
//!
//! This library provides a case-insensitive trie (prefix tree) over Unicode
//! code points for screening text against a word list — a denylist, a
//! forbidden-term list, or any dictionary where membership and containment
//! checks must stay fast regardless of dictionary size.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries: the trie core consumes ordered sequences
//!   of strings and never touches I/O; the loader decodes persisted word
//!   lists and feeds the core
//! - Explicit error types per component, wrapped at the crate level
//! - Comprehensive error handling and propagation
//! - Iterative tree walks with cost proportional to input length

// Re-export public modules
pub mod error;
pub mod loader;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use error::{KapuError, KapuResult};
pub use trie::{KapuTrie, KapuTrieError, KapuTrieResult};

/// Version information for the Kapu Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
