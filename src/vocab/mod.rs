//! Vocabulary modules.
//!
//! Each sub-module encodes one ontology's term table as static Rust data
//! and exposes a `vocabulary()` accessor plus one named accessor per term.

pub mod ore;
