// Copyright (c) 2025 Kapu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the word list loader.

use std::path::PathBuf;

/// Errors that can occur while reading and decoding a word list file.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The word list file could not be read.
    #[error("cannot read word list file {}: {source}", .path.display())]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file contents were not a JSON array of strings.
    #[error("cannot parse word list file {} as a JSON array of strings: {source}", .path.display())]
    Parse {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying decoding error.
        source: serde_json::Error,
    },
}

/// Result type for word list loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;
