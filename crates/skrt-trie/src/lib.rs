//! Dictionary automaton for the Sanskrit analyzer.
//!
//! A prefix trie over dictionary surface forms, stored as a flat arena of
//! states so a frozen trie is two `Vec`s of plain-old-data rows plus a
//! command string pool. The scanner only ever asks two questions per input
//! character: is there an outgoing edge for it ([`Trie::transition`]), and
//! does taking that edge complete a dictionary key ([`Trie::command`]).
//!
//! # Architecture
//!
//! - [`builder`] -- Incremental construction from `(key, command)` pairs
//! - [`format`] -- Binary header parsing and validation
//! - [`trie`] -- Frozen arena layout, queries, binary load/store

pub mod builder;
pub mod format;
pub mod trie;

pub use builder::TrieBuilder;
pub use trie::Trie;

/// Index of a trie state. The root is always [`ROOT`].
pub type StateId = u32;

/// The root state of every trie.
pub const ROOT: StateId = 0;

/// Error type for trie construction and binary loading.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    #[error("invalid magic number in trie header")]
    InvalidMagic,
    #[error("unsupported trie format version {0}")]
    UnsupportedVersion(u32),
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("transition {transition} points at out-of-range {what} {index}")]
    IndexOutOfRange {
        transition: usize,
        what: &'static str,
        index: u32,
    },
    #[error("state {state} has an out-of-range transition span")]
    SpanOutOfRange { state: u32 },
    #[error("command {0} is not valid UTF-8")]
    InvalidUtf8(usize),
    #[error("duplicate key in trie: {0}")]
    DuplicateKey(String),
    #[error("empty key in trie")]
    EmptyKey,
}
