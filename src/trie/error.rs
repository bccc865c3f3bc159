//! Error types for the Kapu Trie.
//!
//! This module defines the error types that can occur during Kapu Trie
//! operations.

/// Errors that can occur in Kapu Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KapuTrieError {
    /// A bulk load was handed an empty word list.
    #[error("cannot load an empty word list")]
    EmptyWordList,

    /// A delete was asked for a word whose path does not exist in the trie.
    #[error("word not found: {0}")]
    NotFound(String),
}

/// Result type for Kapu Trie operations
pub type KapuTrieResult<T> = Result<T, KapuTrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KapuTrieError::EmptyWordList;
        assert_eq!(err.to_string(), "cannot load an empty word list");

        let err = KapuTrieError::NotFound("copper".to_string());
        assert_eq!(err.to_string(), "word not found: copper");
    }

    #[test]
    fn test_error_equality() {
        let err1 = KapuTrieError::NotFound("cop".to_string());
        let err2 = KapuTrieError::NotFound("cop".to_string());
        let err3 = KapuTrieError::EmptyWordList;

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
