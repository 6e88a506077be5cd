// skrt-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use skrt_sa::Lexicon;

/// Default lexicon source file name.
const LEXICON_TXT: &str = "lexicon.txt";

/// Compiled lexicon artifact file name.
const LEXICON_TRIE: &str = "lexicon.trie";

/// Search for a lexicon and load it.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `SKRT_LEXICON_PATH` environment variable
/// 3. Current working directory (looks for `lexicon.trie`, then
///    `lexicon.txt`)
///
/// A path ending in `.trie` is loaded as a compiled artifact, anything else
/// as the textual source format. A directory is searched for both.
pub fn load_lexicon(lexicon_path: Option<&str>) -> Result<Lexicon, String> {
    let search_paths = build_search_paths(lexicon_path);

    for path in &search_paths {
        if path.is_file() {
            return load_file(path);
        }
        if path.is_dir() {
            let compiled = path.join(LEXICON_TRIE);
            if compiled.is_file() {
                return load_file(&compiled);
            }
            let source = path.join(LEXICON_TXT);
            if source.is_file() {
                return load_file(&source);
            }
        }
    }

    Err(format!(
        "could not find {} or {} in any of the search paths:\n{}",
        LEXICON_TRIE,
        LEXICON_TXT,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn load_file(path: &std::path::Path) -> Result<Lexicon, String> {
    if path.extension().is_some_and(|e| e == "trie") {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Lexicon::from_compiled(&bytes)
            .map_err(|e| format!("failed to load {}: {}", path.display(), e))
    } else {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Lexicon::from_text(&text).map_err(|e| format!("failed to load {}: {}", path.display(), e))
    }
}

/// Build the list of paths to search for a lexicon.
fn build_search_paths(lexicon_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = lexicon_path {
        paths.push(PathBuf::from(p));
    }

    // 2. SKRT_LEXICON_PATH environment variable
    if let Ok(env_path) = std::env::var("SKRT_LEXICON_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Parse a `--lexicon=PATH` or `-l PATH` argument from command line args.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-l" {
            if i + 1 < args.len() {
                lexicon_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lexicon_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
