// Incremental trie construction
// Origin: BuildCompiledTrie.java (storeTrie path)

use hashbrown::HashMap;

use crate::trie::{NO_COMMAND, NodeSpan, Transition, Trie};
use crate::TrieError;

#[derive(Debug, Clone, Copy)]
struct BuilderEdge {
    target: u32,
    command: Option<u32>,
}

#[derive(Debug, Default)]
struct BuilderNode {
    edges: HashMap<char, BuilderEdge>,
}

/// Builds a [`Trie`] from `(key, command)` pairs.
///
/// Keys may be inserted in any order; shared prefixes share states. Inserting
/// the same key twice is an error (the lexicon format keeps one command per
/// surface form).
#[derive(Debug)]
pub struct TrieBuilder {
    nodes: Vec<BuilderNode>,
    commands: Vec<String>,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuilderNode::default()],
            commands: Vec::new(),
        }
    }

    /// Number of keys inserted so far.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Insert a key with its command string.
    pub fn insert(&mut self, key: &str, command: &str) -> Result<(), TrieError> {
        let mut chars = key.chars().peekable();
        if chars.peek().is_none() {
            return Err(TrieError::EmptyKey);
        }

        let mut node = 0usize;
        while let Some(c) = chars.next() {
            let last = chars.peek().is_none();
            let next_id = self.nodes.len() as u32;
            let mut created = false;
            let edge = self.nodes[node].edges.entry(c).or_insert_with(|| {
                created = true;
                BuilderEdge {
                    target: next_id,
                    command: None,
                }
            });
            if last {
                if edge.command.is_some() {
                    return Err(TrieError::DuplicateKey(key.to_string()));
                }
                edge.command = Some(self.commands.len() as u32);
            }
            node = edge.target as usize;
            if created {
                self.nodes.push(BuilderNode::default());
            }
        }
        self.commands.push(command.to_string());
        Ok(())
    }

    /// Freeze into the flat arena representation.
    pub fn freeze(self) -> Trie {
        let mut spans = Vec::with_capacity(self.nodes.len());
        let mut transitions = Vec::new();

        for node in &self.nodes {
            let first = transitions.len() as u32;
            let mut edges: Vec<(&char, &BuilderEdge)> = node.edges.iter().collect();
            edges.sort_by_key(|(c, _)| **c as u32);
            for (c, edge) in edges {
                transitions.push(Transition {
                    label: *c as u32,
                    target: edge.target,
                    command: edge.command.unwrap_or(NO_COMMAND),
                });
            }
            spans.push(NodeSpan {
                first,
                len: transitions.len() as u32 - first,
            });
        }

        Trie::from_parts(spans, transitions, self.commands)
    }
}
