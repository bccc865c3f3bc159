//! Error module for the Kapu Trie library.
//!
//! This module provides the crate-level error type, following Rust's
//! idiomatic error handling patterns with explicit component error types and
//! proper error propagation. Component modules define their own error enums;
//! this one wraps them for callers that drive the trie and the loader
//! together.

use thiserror::Error;

/// Result type alias used across the Kapu Trie library.
pub type KapuResult<T> = Result<T, KapuError>;

/// Core error enum for the Kapu Trie library.
#[derive(Error, Debug)]
pub enum KapuError {
    /// Errors surfaced by the trie core.
    #[error("Trie error: {0}")]
    Trie(#[from] crate::trie::KapuTrieError),

    /// Errors surfaced while reading or decoding a word list file.
    #[error("Loader error: {0}")]
    Loader(#[from] crate::loader::LoaderError),
}
