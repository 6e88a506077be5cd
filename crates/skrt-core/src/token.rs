// Token public API types
// Origin: SkrtWordTokenizer.java (term/offset/type/position-increment attributes)

/// Kind of token emitted by the word tokenizer.
///
/// Origin: SkrtWordTokenizer.java (TypeAttribute values "word", "lemma",
/// "non-word")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A dictionary-attested surface form.
    Word,
    /// A reconstructed pre-sandhi form, stacked on its surface token.
    Lemma,
    /// A maximal run of input that matched nothing in the dictionary.
    NonWord,
}

/// A token produced by the word tokenizer.
///
/// Offsets are character offsets into the input. Every input character lies
/// in the span of exactly one `Word` or `NonWord` token; `Lemma` tokens share
/// the span of the surface token they annotate and carry
/// `position_increment == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text content. For `Word` tokens this is the matched surface form
    /// with modifier characters removed, so it may be shorter than the span.
    pub text: String,

    /// Character offset of the first input character covered by this token.
    pub start: usize,

    /// Character offset one past the last input character covered.
    pub end: usize,

    /// The kind of this token.
    pub kind: TokenKind,

    /// Position increment relative to the previous token: 1 for a token at a
    /// new position, 0 for an alternative stacked on the previous one.
    pub position_increment: u32,
}

impl Token {
    /// Create a token at a new position (increment 1).
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
            position_increment: 1,
        }
    }

    /// Create a stacked alternative token (increment 0).
    pub fn stacked(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
            position_increment: 0,
        }
    }
}
