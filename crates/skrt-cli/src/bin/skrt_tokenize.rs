// skrt-tokenize: Tokenize SLP1 text from stdin.
//
// Reads text from stdin and prints tokens with their kinds, spans and
// reconstructed lemmas.
//
// Usage:
//   skrt-tokenize [-l LEXICON_PATH] [OPTIONS]
//
// Options:
//   -l, --lexicon PATH   Lexicon file (.txt source or .trie artifact)
//   --words-only          Print word and lemma texts only, one per line
//   -h, --help            Print help

use std::io::{self, Read, Write};

use skrt_core::token::TokenKind;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = skrt_cli::parse_lexicon_path(&args);

    if skrt_cli::wants_help(&args) {
        println!("skrt-tokenize: Tokenize Sanskrit text in SLP1 transliteration.");
        println!();
        println!("Usage: skrt-tokenize [-l LEXICON_PATH] [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with kinds:");
        println!("  WORD:     a dictionary-attested surface form");
        println!("  LEMMA:    a reconstructed pre-sandhi form (stacked)");
        println!("  NON-WORD: text matching no dictionary entry");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file (.txt source or .trie artifact)");
        println!("  --words-only          Print word and lemma texts only, one per line");
        println!("  -h, --help            Print this help");
        return;
    }

    let words_only = args.iter().any(|a| a == "--words-only");

    let lexicon =
        skrt_cli::load_lexicon(lexicon_path.as_deref()).unwrap_or_else(|e| skrt_cli::fatal(&e));

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| skrt_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in lexicon.tokenizer(&input) {
        if words_only {
            if token.kind != TokenKind::NonWord {
                let _ = writeln!(out, "{}", token.text);
            }
            continue;
        }
        let kind_str = match token.kind {
            TokenKind::Word => "WORD",
            TokenKind::Lemma => "LEMMA",
            TokenKind::NonWord => "NON-WORD",
        };
        let display_text = token
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let _ = writeln!(
            out,
            "{kind_str:9} [{:>4}..{:>4}]: {display_text}",
            token.start, token.end
        );
    }
}
