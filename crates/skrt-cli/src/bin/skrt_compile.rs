// skrt-compile: Compile a lexicon source file into the binary trie artifact.
//
// Validates every entry, builds the trie and writes the compiled form,
// which loads without re-parsing the commands.
//
// Usage:
//   skrt-compile INPUT.txt OUTPUT.trie
//
// Options:
//   -h, --help   Print help

use skrt_sa::Lexicon;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if skrt_cli::wants_help(&args) || args.len() != 2 {
        println!("skrt-compile: Compile a lexicon into a binary trie artifact.");
        println!();
        println!("Usage: skrt-compile INPUT.txt OUTPUT.trie");
        println!();
        println!("The input is the textual lexicon format, one `key,command`");
        println!("entry per line. Every command is validated; compilation");
        println!("stops at the first malformed line.");
        if args.len() != 2 && !skrt_cli::wants_help(&args) {
            std::process::exit(1);
        }
        return;
    }

    let source = std::fs::read_to_string(&args[0])
        .unwrap_or_else(|e| skrt_cli::fatal(&format!("failed to read {}: {}", args[0], e)));

    let lexicon =
        Lexicon::from_text(&source).unwrap_or_else(|e| skrt_cli::fatal(&format!("{e}")));

    std::fs::write(&args[1], lexicon.to_bytes())
        .unwrap_or_else(|e| skrt_cli::fatal(&format!("failed to write {}: {}", args[1], e)));

    eprintln!("compiled {} entries to {}", lexicon.len(), args[1]);
}
