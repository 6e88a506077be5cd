// Sandhi rule types and reconstruction table
// Origin: CmdParser.java (DiffStruct, sandhi type codes, findSandhiedFinals)

pub mod cmd;
pub mod combination;

use std::collections::{BTreeMap, BTreeSet};

/// The nine sandhi rule classes the dictionary encodes, plus zero-change.
///
/// The code determines how many trailing characters of the matched surface
/// form take part in the sandhied fragment, and which offset windows the
/// context matcher probes.
///
/// Origin: CmdParser.java (sandhiType codes 0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SandhiType {
    ZeroChange = 0,
    Vowel = 1,
    Consonant1 = 2,
    Consonant1Vowels = 3,
    Consonant2 = 4,
    Visarga1 = 5,
    Visarga2 = 6,
    AbsoluteFinals = 7,
    CcDoubling = 8,
    Punar = 9,
}

impl SandhiType {
    /// Decode a numeric type code from a command string.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::ZeroChange,
            1 => Self::Vowel,
            2 => Self::Consonant1,
            3 => Self::Consonant1Vowels,
            4 => Self::Consonant2,
            5 => Self::Visarga1,
            6 => Self::Visarga2,
            7 => Self::AbsoluteFinals,
            8 => Self::CcDoubling,
            9 => Self::Punar,
            _ => return None,
        })
    }

    /// The trailing part of the matched surface form that takes part in the
    /// sandhied fragment.
    ///
    /// Two characters for the classes whose rules reach back past the final
    /// sound, the whole form for zero-change and punar (punar rules match
    /// against the full word), one character otherwise.
    ///
    /// Origin: CmdParser.java (findSandhiedFinals)
    pub fn sandhied_final<'a>(&self, form: &'a str) -> &'a str {
        let n = match self {
            Self::Consonant1Vowels | Self::Visarga1 | Self::Visarga2 => 2,
            Self::ZeroChange | Self::Punar => return form,
            _ => 1,
        };
        match form.char_indices().nth_back(n - 1) {
            Some((i, _)) => &form[i..],
            None => form,
        }
    }
}

/// One reconstruction directive attached to a sandhied fragment.
///
/// `to_delete` characters are stripped from the end of the matched surface
/// form and `to_add` appended to yield the lemma. `context_initial`, when
/// present, is the attested initial of the following word that this rule
/// presupposes (already folded into the fragment key). `new_initial`, when
/// present, is the original pre-sandhi spelling of the following word's
/// initial, offered as an alternative start for the next scan walk.
///
/// Origin: CmdParser.java (DiffStruct)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SandhiDiff {
    pub to_delete: usize,
    pub to_add: String,
    pub context_initial: Option<String>,
    pub new_initial: Option<String>,
    pub sandhi_type: SandhiType,
}

impl SandhiDiff {
    /// Apply the final diff to a matched surface form.
    pub fn apply(&self, surface: &str) -> String {
        let keep = surface.chars().count().saturating_sub(self.to_delete);
        let mut lemma: String = surface.chars().take(keep).collect();
        lemma.push_str(&self.to_add);
        lemma
    }
}

/// Reconstruction table: literal sandhied fragment to the directives that
/// predict it. Built fresh per scan event, longest fragments first so the
/// most specific hypothesis is probed first.
pub type SandhiTable = BTreeMap<FragmentKey, BTreeSet<SandhiDiff>>;

/// Fragment key ordered by descending length, then lexicographically.
///
/// Origin: CommonHelpers.java (LengthComp)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentKey(pub String);

impl Ord for FragmentKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .0
            .len()
            .cmp(&self.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for FragmentKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
