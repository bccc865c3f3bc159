//! Tests for crate-level error wrapping and display.

use std::path::PathBuf;

use crate::error::KapuError;
use crate::loader::LoaderError;
use crate::trie::KapuTrieError;

#[test]
fn test_trie_error_wrapping() {
    let err = KapuError::from(KapuTrieError::EmptyWordList);

    assert!(matches!(err, KapuError::Trie(KapuTrieError::EmptyWordList)));
    assert_eq!(err.to_string(), "Trie error: cannot load an empty word list");
}

#[test]
fn test_not_found_display_carries_the_word() {
    let err = KapuError::from(KapuTrieError::NotFound("copper".to_string()));

    assert_eq!(err.to_string(), "Trie error: word not found: copper");
}

#[test]
fn test_loader_error_wrapping() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = KapuError::from(LoaderError::Read {
        path: PathBuf::from("dict.json"),
        source,
    });

    assert!(matches!(err, KapuError::Loader(LoaderError::Read { .. })));
    let rendered = err.to_string();
    assert!(rendered.starts_with("Loader error: cannot read word list file"));
    assert!(rendered.contains("dict.json"));
}
