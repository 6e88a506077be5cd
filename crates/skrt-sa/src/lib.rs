//! Sanskrit sandhi-aware word tokenizer and lemmatizer.
//!
//! Tokenizes continuous SLP1 text into dictionary words while undoing
//! *sandhi*, the phonetic fusion that alters word boundaries when Sanskrit
//! words are written together ("rAmaH gacCati" is commonly written
//! "rAmo gacCati"). Given only the fused surface text, the tokenizer
//! recovers both the unfused token boundaries and the dictionary headword
//! of each token. It is a Rust port of the word-tokenization core of the
//! BDRC `lucene-sa` analyzer.
//!
//! # Architecture
//!
//! - [`sandhi`] -- Sandhi rule compiler and context matcher
//! - [`lexicon`] -- Lexicon loading, validation, compiled artifacts
//! - [`tokenizer`] -- The streaming maximal-munch word scanner
//!
//! # Example
//!
//! ```
//! use skrt_sa::Lexicon;
//! use skrt_core::token::TokenKind;
//!
//! let lexicon = Lexicon::from_text("rAmo,g:G:d:D$-1+aH/- +=6\ngacCati,$/=0\n").unwrap();
//! let tokens: Vec<_> = lexicon.tokenizer("rAmo gacCati").collect();
//! assert_eq!(tokens[0].text, "rAmo");
//! assert_eq!(tokens[1].text, "rAmaH");
//! assert_eq!(tokens[1].kind, TokenKind::Lemma);
//! ```

pub mod lexicon;
pub mod sandhi;
pub mod tokenizer;

pub use lexicon::{Lexicon, LexiconError};
pub use sandhi::cmd::CmdError;
pub use tokenizer::WordTokenizer;
