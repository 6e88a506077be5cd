// Lexicon loading and compiled artifacts
// Origin: SkrtWordTokenizer.java (init), BuildCompiledTrie.java

use std::io::BufRead;

use skrt_trie::{Trie, TrieBuilder, TrieError};
use thiserror::Error;

use crate::sandhi::cmd::{CmdError, parse_cmd};
use crate::tokenizer::WordTokenizer;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("line {line}: missing ',' separator in {text:?}")]
    MissingSeparator { line: usize, text: String },
    #[error("line {line}: empty entry key")]
    EmptyKey { line: usize },
    #[error("line {line}: invalid command for {key:?}: {source}")]
    InvalidCommand {
        line: usize,
        key: String,
        source: CmdError,
    },
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A compiled sandhi lexicon: the dictionary trie with one command string
/// per entry.
///
/// Built either from the textual `key,command` source format or from a
/// previously compiled binary artifact. Loading from source validates every
/// command and fails on the first bad line; the binary path trusts the
/// commands (they were validated when the artifact was compiled) and only
/// checks the structural integrity of the tables.
#[derive(Debug)]
pub struct Lexicon {
    trie: Trie,
}

impl Lexicon {
    /// Load from the textual source format: one `key,command` entry per
    /// line, the key separated from the command by the first comma. Blank
    /// lines are skipped. Line numbers in errors are 1-based.
    pub fn from_text(text: &str) -> Result<Self, LexiconError> {
        let mut builder = TrieBuilder::new();
        for (idx, line) in text.lines().enumerate() {
            Self::load_line(&mut builder, idx + 1, line)?;
        }
        Ok(Self {
            trie: builder.freeze(),
        })
    }

    /// Load the textual source format from a reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LexiconError> {
        let mut builder = TrieBuilder::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            Self::load_line(&mut builder, idx + 1, &line)?;
        }
        Ok(Self {
            trie: builder.freeze(),
        })
    }

    /// Load a compiled binary artifact produced by [`Lexicon::to_bytes`].
    pub fn from_compiled(bytes: &[u8]) -> Result<Self, LexiconError> {
        Ok(Self {
            trie: Trie::from_bytes(bytes)?,
        })
    }

    fn load_line(
        builder: &mut TrieBuilder,
        line_no: usize,
        line: &str,
    ) -> Result<(), LexiconError> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let Some((key, command)) = line.split_once(',') else {
            return Err(LexiconError::MissingSeparator {
                line: line_no,
                text: line.to_string(),
            });
        };
        if key.is_empty() {
            return Err(LexiconError::EmptyKey { line: line_no });
        }
        parse_cmd(key, command).map_err(|source| LexiconError::InvalidCommand {
            line: line_no,
            key: key.to_string(),
            source,
        })?;
        builder.insert(key, command)?;
        Ok(())
    }

    /// Serialize to the compiled binary artifact format.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.trie.to_bytes()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of dictionary entries.
    pub fn len(&self) -> usize {
        self.trie.command_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tokenize a text against this lexicon. The returned iterator borrows
    /// the lexicon; several may run concurrently over the same one.
    pub fn tokenizer<'t>(&'t self, text: &str) -> WordTokenizer<'t> {
        WordTokenizer::new(&self.trie, text)
    }
}
