// Copyright (c) 2025 Kapu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list loading for the Kapu Trie.
//!
//! This module reads a persisted word list — a file containing a JSON array
//! of strings — and hands the decoded sequence to a trie. It is a
//! collaborator of the trie core, not part of it: the trie consumes an
//! ordered sequence of strings and does not care how it was produced, and
//! any decoding failure here surfaces as a [`LoaderError`] without ever
//! reaching the trie.

mod error;

use std::fs;
use std::path::Path;

pub use error::{LoaderError, LoaderResult};

use crate::error::KapuResult;
use crate::trie::KapuTrie;

/// Reads a word list file and decodes it into an ordered list of words.
///
/// # Arguments
///
/// * `path` - Path to a file holding a JSON array of strings.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The decoded word list, in file order.
/// * `Err(LoaderError)` - The file could not be read or was not a JSON
///   array of strings.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> LoaderResult<Vec<String>> {
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = serde_json::from_slice(&data).map_err(|source| LoaderError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), words = words.len(), "read word list");

    Ok(words)
}

/// Loads the contents of a word list file into a trie.
///
/// Reads and decodes the file with [`read_word_list`], then bulk-loads the
/// result with [`KapuTrie::load`]. An empty array in the file is reported as
/// the trie's empty-word-list error.
///
/// # Arguments
///
/// * `trie` - The trie to load into.
/// * `path` - Path to a file holding a JSON array of strings.
///
/// # Returns
///
/// * `Ok(())` - Every word in the file was added to the trie.
/// * `Err(KapuError)` - Reading, decoding, or loading failed.
pub fn load_file<P: AsRef<Path>>(trie: &mut KapuTrie, path: P) -> KapuResult<()> {
    let words = read_word_list(path)?;
    trie.load(&words)?;
    Ok(())
}
