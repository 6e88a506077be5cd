// Sandhi-aware word scanner and lemmatizer
// Origin: SkrtWordTokenizer.java

use std::collections::VecDeque;

use skrt_core::character::{is_slp_modifier, is_slp_phoneme};
use skrt_core::token::{Token, TokenKind};
use skrt_trie::{ROOT, Trie};

use crate::sandhi::SandhiType;
use crate::sandhi::cmd::parse_cmd;
use crate::sandhi::combination::contains_sandhied;

/// Hard cap on the length of a single walk. Forces a commit on pathological
/// input instead of growing without bound.
///
/// Origin: SkrtSyllableTokenizer.java (DEFAULT_MAX_WORD_LEN)
pub const MAX_WORD_LEN: usize = 255;

/// A completed automaton walk: the committed end position, the matched
/// surface form (modifier characters dropped), and the command found at the
/// last accepting state.
struct Walk<'t> {
    end: usize,
    text: String,
    command: &'t str,
}

/// Streaming sandhi-aware word tokenizer.
///
/// Walks the input against the dictionary trie with a maximal-munch policy:
/// the walk keeps going as long as transitions exist, remembers the last
/// point where a command was available, and rewinds there when the walk
/// dies. On each committed match the attached command is compiled into a
/// reconstruction table, every predicted fragment is verified against the
/// literal text around the boundary, and the confirmed lemmas are emitted as
/// alternatives stacked on the surface token.
///
/// The pull operation is [`Iterator::next`] and is infallible: text outside
/// the SLP1 alphabet becomes non-word tokens, unverified hypotheses are
/// dropped. One instance owns its cursor and queue exclusively; the trie is
/// shared read-only.
pub struct WordTokenizer<'t> {
    trie: &'t Trie,
    buf: Vec<char>,
    cursor: usize,
    queue: VecDeque<Token>,
    /// Pre-sandhi spellings of the next word's initial, registered by the
    /// previous scan event and consumed by the next walk.
    pending_initials: Vec<String>,
    /// Set when a one-character vowel-sandhi fragment was confirmed: the
    /// fused vowel serves both words, so a pending initial is inserted in
    /// front of the attested text instead of substituted over it.
    merge_initials: bool,
}

impl<'t> WordTokenizer<'t> {
    pub fn new(trie: &'t Trie, text: &str) -> Self {
        Self {
            trie,
            buf: text.chars().collect(),
            cursor: 0,
            queue: VecDeque::new(),
            pending_initials: Vec::new(),
            merge_initials: false,
        }
    }

    /// Advance the scanner far enough to enqueue at least one token.
    /// Returns `false` at end of input.
    fn scan_event(&mut self) -> bool {
        if self.cursor >= self.buf.len() {
            return false;
        }
        if self.pending_initials.is_empty() {
            self.merge_initials = false;
            self.plain_event()
        } else {
            self.overlay_event()
        }
    }

    /// Scan from the cursor with no alternative initials in play:
    /// accumulate non-word text until a walk commits or input ends.
    fn plain_event(&mut self) -> bool {
        let nonword_start = self.cursor;
        let mut q = self.cursor;
        loop {
            while q < self.buf.len() && !is_slp_phoneme(self.buf[q]) {
                q += 1;
            }
            if q >= self.buf.len() {
                break;
            }
            if let Some(walk) = self.walk(q, &[], false) {
                if q > nonword_start {
                    self.push_nonword(nonword_start, q);
                }
                self.commit(walk, q);
                return true;
            }
            // Nothing in the dictionary starts here; the char joins the
            // non-word run and the walk restarts at the next one.
            q += 1;
        }
        self.cursor = q;
        if q > nonword_start {
            self.push_nonword(nonword_start, q);
            return true;
        }
        false
    }

    /// Scan with the initials registered by the previous event: try the
    /// attested text and each pre-sandhi spelling overlaid on it, commit the
    /// longest accepted walk and emit the others as stacked alternatives.
    fn overlay_event(&mut self) -> bool {
        let initials = std::mem::take(&mut self.pending_initials);
        let merge = std::mem::replace(&mut self.merge_initials, false);

        let span_start = self.cursor;
        let mut start = self.cursor;
        // one optional space at the sandhi boundary
        if start < self.buf.len() && self.buf[start] == ' ' {
            start += 1;
        }

        let mut walks: Vec<Walk<'t>> = Vec::new();
        if let Some(w) = self.walk(start, &[], false) {
            walks.push(w);
        }
        for initial in &initials {
            let overlay: Vec<char> = initial.chars().collect();
            if let Some(w) = self.walk(start, &overlay, merge) {
                // a merged overlay may accept without consuming any input
                if w.end > span_start {
                    walks.push(w);
                }
            }
        }

        if walks.is_empty() {
            return self.plain_event();
        }

        let mut primary = 0;
        for i in 1..walks.len() {
            if walks[i].end > walks[primary].end {
                primary = i;
            }
        }
        let chosen = walks.swap_remove(primary);
        let span = (span_start, chosen.end);
        self.queue
            .push_back(Token::new(TokenKind::Word, chosen.text.clone(), span.0, span.1));
        self.cursor = chosen.end;
        self.reconstruct_lemmas(chosen.command, &chosen.text, chosen.end - 1, span);
        for other in walks {
            if other.text != chosen.text {
                self.queue
                    .push_back(Token::stacked(TokenKind::Lemma, other.text, span.0, span.1));
            }
        }
        true
    }

    /// Walk the trie from `start`, trying `overlay` characters first.
    ///
    /// With an empty overlay this is the plain maximal-munch walk. A
    /// non-empty overlay is substituted over the attested text character for
    /// character, or, when `merge` is set, inserted in front of it without
    /// consuming input. Modifier characters consume input but neither
    /// advance the trie nor join the matched text.
    fn walk(&self, start: usize, overlay: &[char], merge: bool) -> Option<Walk<'t>> {
        let mut state = ROOT;
        let mut text = String::new();
        let mut best: Option<(usize, usize, &'t str)> = None;
        let mut p = start;
        let mut dead = false;

        for &c in overlay {
            if !merge && p >= self.buf.len() {
                dead = true;
                break;
            }
            if let Some(cmd) = self.trie.command(state, c) {
                let end = if merge { p } else { p + 1 };
                best = Some((end, text.len() + c.len_utf8(), cmd));
            }
            match self.trie.transition(state, c) {
                Some(next) => {
                    state = next;
                    text.push(c);
                    if !merge {
                        p += 1;
                    }
                }
                None => {
                    dead = true;
                    break;
                }
            }
        }

        if !dead {
            while p < self.buf.len() && text.len() < MAX_WORD_LEN {
                let c = self.buf[p];
                if is_slp_modifier(c) {
                    p += 1;
                    continue;
                }
                if !is_slp_phoneme(c) {
                    break;
                }
                if let Some(cmd) = self.trie.command(state, c) {
                    best = Some((p + 1, text.len() + c.len_utf8(), cmd));
                }
                match self.trie.transition(state, c) {
                    Some(next) => {
                        state = next;
                        text.push(c);
                        p += 1;
                    }
                    None => break,
                }
            }
        }

        let (end, text_len, command) = best?;
        text.truncate(text_len);
        Some(Walk { end, text, command })
    }

    /// Enqueue the surface token for a committed walk and everything derived
    /// from its command.
    fn commit(&mut self, walk: Walk<'t>, span_start: usize) {
        let span = (span_start, walk.end);
        self.queue
            .push_back(Token::new(TokenKind::Word, walk.text.clone(), span.0, span.1));
        self.cursor = walk.end;
        self.reconstruct_lemmas(walk.command, &walk.text, walk.end - 1, span);
    }

    /// Compile the command, verify each predicted fragment against the text
    /// around `anchor`, and enqueue the confirmed lemmas. Directives with a
    /// replacement initial register it for the next walk.
    ///
    /// Origin: SkrtWordTokenizer.java (reconstructLemmas)
    fn reconstruct_lemmas(
        &mut self,
        command: &str,
        surface: &str,
        anchor: usize,
        span: (usize, usize),
    ) {
        // commands are validated at load time; a failure here drops the
        // hypotheses for this event only
        let Ok(table) = parse_cmd(surface, command) else {
            return;
        };

        let mut lemmas: Vec<String> = Vec::new();
        for (fragment, diffs) in &table {
            for diff in diffs {
                if !contains_sandhied(&self.buf, anchor, &fragment.0, diff.sandhi_type) {
                    continue;
                }
                if diff.sandhi_type == SandhiType::Vowel && fragment.0.chars().count() == 1 {
                    self.merge_initials = true;
                }
                let lemma = diff.apply(surface);
                if !lemmas.contains(&lemma) {
                    lemmas.push(lemma);
                }
                if let Some(initial) = &diff.new_initial {
                    if !initial.is_empty() && !self.pending_initials.contains(initial) {
                        self.pending_initials.push(initial.clone());
                    }
                }
            }
        }
        for lemma in lemmas {
            self.queue
                .push_back(Token::stacked(TokenKind::Lemma, lemma, span.0, span.1));
        }
    }

    fn push_nonword(&mut self, start: usize, end: usize) {
        let text: String = self.buf[start..end].iter().collect();
        self.queue
            .push_back(Token::new(TokenKind::NonWord, text, start, end));
    }
}

impl Iterator for WordTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if !self.scan_event() {
                return None;
            }
        }
    }
}
