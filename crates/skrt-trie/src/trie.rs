// Frozen trie arena: POD state/transition tables, queries, binary load/store
// Origin: the Lucene stemmer Trie/Row storage used by SkrtWordTokenizer.java
// (getRef/getCmd per edge) and BuildCompiledTrie.java

use bytemuck::{Pod, Zeroable};

use crate::format::{self, HEADER_SIZE, TrieHeader};
use crate::{ROOT, StateId, TrieError};

/// Per-state slice of the transition table (8 bytes).
///
/// A state's outgoing edges occupy `transitions[first..first + len]`, sorted
/// by label for binary search.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct NodeSpan {
    pub first: u32,
    pub len: u32,
}

/// A single labeled edge (12 bytes).
///
/// `label` is the edge character as a code point. `command` indexes the
/// command pool, or [`NO_COMMAND`] when taking this edge does not complete a
/// dictionary key.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Transition {
    pub label: u32,
    pub target: u32,
    pub command: u32,
}

/// Sentinel for a transition that completes no dictionary key.
pub const NO_COMMAND: u32 = u32::MAX;

// Static assertions for the on-disk row sizes
const _: () = assert!(size_of::<NodeSpan>() == 8);
const _: () = assert!(size_of::<Transition>() == 12);

/// Frozen dictionary trie.
///
/// Built with [`crate::TrieBuilder`] or loaded from a compiled binary image
/// with [`Trie::from_bytes`]. Immutable once frozen; lookups take `&self`, so
/// a trie can be shared freely across threads.
pub struct Trie {
    spans: Vec<NodeSpan>,
    transitions: Vec<Transition>,
    commands: Vec<String>,
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("state_count", &self.spans.len())
            .field("transition_count", &self.transitions.len())
            .field("command_count", &self.commands.len())
            .finish()
    }
}

impl Trie {
    pub(crate) fn from_parts(
        spans: Vec<NodeSpan>,
        transitions: Vec<Transition>,
        commands: Vec<String>,
    ) -> Self {
        Self {
            spans,
            transitions,
            commands,
        }
    }

    /// Number of states in the arena.
    pub fn state_count(&self) -> usize {
        self.spans.len()
    }

    /// Number of stored commands (equals the number of dictionary keys).
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    fn edge(&self, state: StateId, c: char) -> Option<&Transition> {
        let span = self.spans.get(state as usize)?;
        let edges = &self.transitions[span.first as usize..(span.first + span.len) as usize];
        let label = c as u32;
        edges
            .binary_search_by(|t| t.label.cmp(&label))
            .ok()
            .map(|i| &edges[i])
    }

    /// Follow the edge labeled `c` out of `state`.
    ///
    /// Returns the successor state, or `None` when no dictionary key has the
    /// walked prefix extended by `c`.
    pub fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        self.edge(state, c).map(|t| t.target)
    }

    /// The command stored on the edge labeled `c` out of `state`.
    ///
    /// `Some` exactly when taking that edge completes a dictionary key;
    /// the payload is the key's command string.
    pub fn command(&self, state: StateId, c: char) -> Option<&str> {
        let t = self.edge(state, c)?;
        if t.command == NO_COMMAND {
            return None;
        }
        Some(&self.commands[t.command as usize])
    }

    /// Convenience: walk a whole key from the root and return its command.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut state = ROOT;
        let mut chars = key.chars().peekable();
        while let Some(c) = chars.next() {
            if chars.peek().is_none() {
                return self.command(state, c);
            }
            state = self.transition(state, c)?;
        }
        None
    }

    /// Serialize into the compiled binary image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = TrieHeader {
            state_count: self.spans.len() as u32,
            transition_count: self.transitions.len() as u32,
            command_count: self.commands.len() as u32,
        };

        let mut buf = Vec::with_capacity(
            HEADER_SIZE
                + self.spans.len() * size_of::<NodeSpan>()
                + self.transitions.len() * size_of::<Transition>(),
        );
        buf.extend_from_slice(&header.to_bytes());
        buf.extend_from_slice(bytemuck::cast_slice(&self.spans));
        buf.extend_from_slice(bytemuck::cast_slice(&self.transitions));
        for cmd in &self.commands {
            buf.extend_from_slice(&(cmd.len() as u32).to_le_bytes());
            buf.extend_from_slice(cmd.as_bytes());
        }
        buf
    }

    /// Load a trie from a compiled binary image.
    ///
    /// The state and transition tables are copied into owned aligned `Vec`s
    /// (the source slice carries no alignment guarantee). Every table index
    /// is bounds-checked, so lookups on the loaded trie cannot go out of
    /// range even on a corrupt file.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TrieError> {
        let header = format::parse_header(data)?;
        let span_bytes = header.state_count as usize * size_of::<NodeSpan>();
        let transition_bytes = header.transition_count as usize * size_of::<Transition>();

        let tables_end = HEADER_SIZE + span_bytes + transition_bytes;
        if data.len() < tables_end {
            return Err(TrieError::TooShort {
                expected: tables_end,
                actual: data.len(),
            });
        }

        let mut spans = vec![NodeSpan::zeroed(); header.state_count as usize];
        bytemuck::cast_slice_mut::<NodeSpan, u8>(&mut spans)
            .copy_from_slice(&data[HEADER_SIZE..HEADER_SIZE + span_bytes]);

        let mut transitions = vec![Transition::zeroed(); header.transition_count as usize];
        bytemuck::cast_slice_mut::<Transition, u8>(&mut transitions)
            .copy_from_slice(&data[HEADER_SIZE + span_bytes..tables_end]);

        let mut commands = Vec::with_capacity(header.command_count as usize);
        let mut pos = tables_end;
        for i in 0..header.command_count as usize {
            if data.len() < pos + 4 {
                return Err(TrieError::TooShort {
                    expected: pos + 4,
                    actual: data.len(),
                });
            }
            let len =
                u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
                    as usize;
            pos += 4;
            if data.len() < pos + len {
                return Err(TrieError::TooShort {
                    expected: pos + len,
                    actual: data.len(),
                });
            }
            let cmd = std::str::from_utf8(&data[pos..pos + len])
                .map_err(|_| TrieError::InvalidUtf8(i))?;
            commands.push(cmd.to_string());
            pos += len;
        }

        let trie = Self {
            spans,
            transitions,
            commands,
        };
        trie.validate(&header)?;
        Ok(trie)
    }

    fn validate(&self, header: &TrieHeader) -> Result<(), TrieError> {
        for (state, span) in self.spans.iter().enumerate() {
            let end = span.first as u64 + span.len as u64;
            if end > header.transition_count as u64 {
                return Err(TrieError::SpanOutOfRange {
                    state: state as u32,
                });
            }
        }
        for (i, t) in self.transitions.iter().enumerate() {
            if t.target >= header.state_count {
                return Err(TrieError::IndexOutOfRange {
                    transition: i,
                    what: "state",
                    index: t.target,
                });
            }
            if t.command != NO_COMMAND && t.command >= header.command_count {
                return Err(TrieError::IndexOutOfRange {
                    transition: i,
                    what: "command",
                    index: t.command,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrieBuilder;

    fn build(entries: &[(&str, &str)]) -> Trie {
        let mut builder = TrieBuilder::new();
        for &(key, cmd) in entries {
            builder.insert(key, cmd).unwrap();
        }
        builder.freeze()
    }

    #[test]
    fn transition_and_command() {
        let trie = build(&[("mA", "$/- +a=1"), ("me", "$/=0")]);
        let s = trie.transition(ROOT, 'm').unwrap();
        assert_eq!(trie.command(s, 'A'), Some("$/- +a=1"));
        assert_eq!(trie.command(s, 'e'), Some("$/=0"));
        assert_eq!(trie.command(ROOT, 'm'), None);
        assert!(trie.transition(ROOT, 'x').is_none());
    }

    #[test]
    fn prefix_key_and_longer_key() {
        let trie = build(&[("aba", "A"), ("ababi", "B")]);
        assert_eq!(trie.lookup("aba"), Some("A"));
        assert_eq!(trie.lookup("ababi"), Some("B"));
        assert_eq!(trie.lookup("abab"), None);
        assert_eq!(trie.lookup("ab"), None);
    }

    #[test]
    fn binary_roundtrip() {
        let trie = build(&[("rAmo", "g:G:d:D$-1+aH/- +=6"), ("gacCati", "$/=0")]);
        let bytes = trie.to_bytes();
        let loaded = Trie::from_bytes(&bytes).unwrap();
        assert_eq!(loaded.lookup("rAmo"), Some("g:G:d:D$-1+aH/- +=6"));
        assert_eq!(loaded.lookup("gacCati"), Some("$/=0"));
        assert_eq!(loaded.lookup("rAm"), None);
        assert_eq!(loaded.state_count(), trie.state_count());
    }

    #[test]
    fn from_bytes_rejects_truncated_tables() {
        let trie = build(&[("a", "X")]);
        let bytes = trie.to_bytes();
        let err = Trie::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, TrieError::TooShort { .. }));
    }

    #[test]
    fn from_bytes_rejects_bad_target() {
        let trie = build(&[("ab", "X")]);
        let mut bytes = trie.to_bytes();
        // Corrupt the first transition's target to an out-of-range state.
        let offset = HEADER_SIZE + trie.state_count() * size_of::<NodeSpan>() + 4;
        bytes[offset..offset + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        let err = Trie::from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            TrieError::IndexOutOfRange { what: "state", .. }
        ));
    }

    #[test]
    fn from_bytes_rejects_bad_utf8_command() {
        let trie = build(&[("a", "ok")]);
        let mut bytes = trie.to_bytes();
        let len = bytes.len();
        bytes[len - 1] = 0xFF;
        bytes[len - 2] = 0xFE;
        let err = Trie::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, TrieError::InvalidUtf8(0)));
    }
}
