//! Shared types for the Sanskrit analysis crates.
//!
//! This crate holds the pieces every other crate needs: SLP1 character
//! classification ([`character`]) and the token types produced by the
//! tokenizers ([`token`]). It is a Rust port of the shared parts of the
//! BDRC `lucene-sa` analyzer.

pub mod character;
pub mod token;
