//! Test modules for the Kapu Trie library.
//!
//! This module contains the cross-component testing infrastructure:
//! - Table-driven tests ported from real word-list screening scenarios
//! - Property-based tests using proptest
//! - Loader tests exercising the file-to-trie path end to end
//! - Test fixtures and utilities
//!
//! Component-local unit tests live next to the code they cover, in
//! `#[cfg(test)]` modules inside `trie/` and `loader/`.

pub mod error_tests;
