// Compiled trie binary format: header layout, parsing, validation

use crate::TrieError;

/// Magic number at the start of a compiled trie file ("SKRT", little-endian).
const MAGIC: u32 = u32::from_le_bytes(*b"SKRT");

/// Current format version.
pub const VERSION: u32 = 1;

/// Size of the binary header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Parsed trie file header.
///
/// The header occupies the first 24 bytes of a compiled trie file:
/// - bytes 0..4: magic number
/// - bytes 4..8: format version
/// - bytes 8..12: state count
/// - bytes 12..16: transition count
/// - bytes 16..20: command count
/// - bytes 20..24: reserved (zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieHeader {
    pub state_count: u32,
    pub transition_count: u32,
    pub command_count: u32,
}

impl TrieHeader {
    /// Serialize the header into its 24-byte wire form.
    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..4].copy_from_slice(&MAGIC.to_le_bytes());
        buf[4..8].copy_from_slice(&VERSION.to_le_bytes());
        buf[8..12].copy_from_slice(&self.state_count.to_le_bytes());
        buf[12..16].copy_from_slice(&self.transition_count.to_le_bytes());
        buf[16..20].copy_from_slice(&self.command_count.to_le_bytes());
        buf
    }
}

/// Parses and validates the 24-byte trie binary header.
pub fn parse_header(data: &[u8]) -> Result<TrieHeader, TrieError> {
    if data.len() < HEADER_SIZE {
        return Err(TrieError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let word = |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);

    if word(0) != MAGIC {
        return Err(TrieError::InvalidMagic);
    }
    let version = word(4);
    if version != VERSION {
        return Err(TrieError::UnsupportedVersion(version));
    }

    Ok(TrieHeader {
        state_count: word(8),
        transition_count: word(12),
        command_count: word(16),
    })
}
