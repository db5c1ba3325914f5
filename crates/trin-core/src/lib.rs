//! Brahmic script transliteration by Unicode block-offset arithmetic.
//!
//! The supported scripts occupy structurally parallel 128-code-point
//! Unicode blocks, so a word moves from one script to another by adding
//! the difference of the block starts to every code point. Heuristic
//! word-final rules then patch the artifacts this leaves where the two
//! scripts disagree on inherent-vowel conventions.

pub mod classify;
pub mod detect;
pub mod registry;
pub mod script;
pub mod segment;
pub mod translit;
