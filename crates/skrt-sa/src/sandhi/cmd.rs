// Sandhi rule compiler: command string -> reconstruction table
// Origin: CmdParser.java
//
// A command is a '|'-separated list of entries, each `<body>=<sandhiType>`.
// A body is `<initials>$<finalDiffs>/<initialDiff>`:
//
//     rAmo,g:G:d:D$-1+aH/- +=6
//          [initials ]$[finals]/[initialDiff]=[type]
//
// Final diffs are ';'-separated `-<deleteCount>+<toAdd>`. The initial diff
// `-<sandhiedInitial>+<originalInitial>` records how the following word's
// initial was altered; `- +` and `-+` are the "unchanged" shorthands. The
// bodies `$/` and `$/- +` mean "no modification at all" and compile to
// nothing.

use super::{FragmentKey, SandhiDiff, SandhiTable, SandhiType};

/// Error type for malformed command strings.
///
/// These indicate a corrupt lexicon build artifact; the loader reports them
/// with the offending line and aborts.
#[derive(Debug, thiserror::Error)]
pub enum CmdError {
    #[error("entry `{0}` is missing the `=<sandhiType>` suffix")]
    MissingType(String),
    #[error("entry `{0}` has an invalid sandhi type code")]
    InvalidType(String),
    #[error("entry `{0}` is missing the `$` separator")]
    MissingDiffs(String),
    #[error("invalid final diff `{0}`: bad delete count")]
    InvalidFinalDiff(String),
    #[error("invalid initial diff `{0}`: missing `+`")]
    InvalidInitialDiff(String),
    #[error("entry `{0}` resolves to no expansion case")]
    UnresolvedBody(String),
}

/// Compile the command attached to `surface` into a reconstruction table.
///
/// The table maps the literal sandhied fragment each rule predicts to the
/// directives that reconstruct the lemma when the fragment is confirmed
/// present in the text. No-op entries contribute nothing, so a command made
/// solely of them yields the empty table.
///
/// Origin: CmdParser.java (parse)
pub fn parse_cmd(surface: &str, cmd: &str) -> Result<SandhiTable, CmdError> {
    let mut table = SandhiTable::new();
    for entry in cmd.split('|') {
        if entry.is_empty() {
            continue;
        }
        parse_entry(surface, entry, &mut table)?;
    }
    Ok(table)
}

fn parse_entry(surface: &str, entry: &str, table: &mut SandhiTable) -> Result<(), CmdError> {
    let (body, type_str) = entry
        .rsplit_once('=')
        .ok_or_else(|| CmdError::MissingType(entry.to_string()))?;
    let code: u8 = type_str
        .trim()
        .parse()
        .map_err(|_| CmdError::InvalidType(entry.to_string()))?;
    let sandhi_type =
        SandhiType::from_code(code).ok_or_else(|| CmdError::InvalidType(entry.to_string()))?;

    // "unchanged word" / "unchanged word followed by a space"
    if body == "$/" || body.contains("$/- +") {
        return Ok(());
    }

    let (initials_str, diffs_str) = body
        .split_once('$')
        .ok_or_else(|| CmdError::MissingDiffs(entry.to_string()))?;
    let initials: Vec<&str> = if initials_str.is_empty() {
        Vec::new()
    } else {
        initials_str.split(':').collect()
    };

    let (finals_str, initial_diff_str) = match diffs_str.split_once('/') {
        Some((f, i)) => (f, Some(i)),
        None => (diffs_str, None),
    };
    let final_diffs: Vec<(usize, &str)> = if finals_str.is_empty() {
        Vec::new()
    } else {
        finals_str
            .split(';')
            .map(parse_final_diff)
            .collect::<Result<_, _>>()?
    };
    let initial_diff = match initial_diff_str {
        None | Some("") | Some("- +") | Some("-+") => None,
        Some(raw) => Some(parse_initial_diff(raw)?),
    };

    let sandhied_final = sandhi_type.sandhied_final(surface);
    let mut add = |key: String, diff: SandhiDiff| {
        table.entry(FragmentKey(key)).or_default().insert(diff);
    };

    match (&final_diffs[..], &initial_diff) {
        // Diff on the initial only.
        ([], Some((sandhied_initial, original_initial))) => {
            add(
                format!("{sandhied_final}{sandhied_initial}"),
                SandhiDiff {
                    to_delete: 0,
                    to_add: String::new(),
                    context_initial: None,
                    new_initial: Some(original_initial.clone()),
                    sandhi_type,
                },
            );
        }

        // Diff on finals only: cross with the context initials.
        (finals, None) if !finals.is_empty() => {
            for &(to_delete, to_add) in finals {
                if initials.is_empty() {
                    add(
                        sandhied_final.to_string(),
                        SandhiDiff {
                            to_delete,
                            to_add: to_add.to_string(),
                            context_initial: None,
                            new_initial: None,
                            sandhi_type,
                        },
                    );
                } else {
                    for initial in &initials {
                        add(
                            format!("{sandhied_final}{initial}"),
                            SandhiDiff {
                                to_delete,
                                to_add: to_add.to_string(),
                                context_initial: Some(initial.to_string()),
                                new_initial: None,
                                sandhi_type,
                            },
                        );
                    }
                }
            }
        }

        // Diff on both finals and initial.
        (finals, Some((sandhied_initial, original_initial))) => {
            for &(to_delete, to_add) in finals {
                if sandhied_initial.is_empty() && initials.len() > 1 {
                    // The initial diff names no sandhied form: the listed
                    // initials are the attested spellings it applies under.
                    for initial in &initials {
                        add(
                            format!("{sandhied_final}{initial}"),
                            SandhiDiff {
                                to_delete,
                                to_add: to_add.to_string(),
                                context_initial: Some(initial.to_string()),
                                new_initial: Some(original_initial.clone()),
                                sandhi_type,
                            },
                        );
                    }
                } else {
                    add(
                        format!("{sandhied_final}{sandhied_initial}"),
                        SandhiDiff {
                            to_delete,
                            to_add: to_add.to_string(),
                            context_initial: None,
                            new_initial: Some(original_initial.clone()),
                            sandhi_type,
                        },
                    );
                }
            }
        }

        _ => return Err(CmdError::UnresolvedBody(entry.to_string())),
    }
    Ok(())
}

/// `-<deleteCount>+<toAdd>`; the leading `-`, the count and the `+<toAdd>`
/// part may each be absent.
fn parse_final_diff(raw: &str) -> Result<(usize, &str), CmdError> {
    let diff = trim_diff(raw);
    if diff.is_empty() {
        return Err(CmdError::InvalidFinalDiff(raw.to_string()));
    }
    let (count_str, to_add) = diff.split_once('+').unwrap_or((diff, ""));
    let to_delete = if count_str.is_empty() {
        0
    } else {
        count_str
            .parse()
            .map_err(|_| CmdError::InvalidFinalDiff(raw.to_string()))?
    };
    Ok((to_delete, to_add))
}

/// `-<sandhiedInitial>+<originalInitial>`.
fn parse_initial_diff(raw: &str) -> Result<(String, String), CmdError> {
    let diff = trim_diff(raw);
    let (sandhied, original) = diff
        .split_once('+')
        .ok_or_else(|| CmdError::InvalidInitialDiff(raw.to_string()))?;
    Ok((sandhied.to_string(), original.to_string()))
}

/// Strip the first `-` and surrounding space from a diff.
///
/// Origin: CmdParser.java (trimDiff)
fn trim_diff(diff: &str) -> &str {
    match diff.split_once('-') {
        Some((before, after)) if before.trim().is_empty() => after.trim_matches(' '),
        _ => diff.trim_matches(' '),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diffs_for<'a>(table: &'a SandhiTable, key: &str) -> Vec<&'a SandhiDiff> {
        table
            .get(&FragmentKey(key.to_string()))
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }

    #[test]
    fn no_op_command_yields_empty_table() {
        assert!(parse_cmd("gacCati", "$/=0").unwrap().is_empty());
        assert!(parse_cmd("iti", "$/- +=0").unwrap().is_empty());
        assert!(parse_cmd("iti", "$/=0|$/- +=2").unwrap().is_empty());
    }

    #[test]
    fn visarga_finals_with_context_initials() {
        let table = parse_cmd("rAmo", "g:G:d:D$-1+aH/- +=6").unwrap();
        assert_eq!(table.len(), 4);
        let diffs = diffs_for(&table, "mog");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].to_delete, 1);
        assert_eq!(diffs[0].to_add, "aH");
        assert_eq!(diffs[0].context_initial.as_deref(), Some("g"));
        assert_eq!(diffs[0].new_initial, None);
        assert_eq!(diffs[0].apply("rAmo"), "rAmaH");
        assert!(!diffs_for(&table, "moG").is_empty());
    }

    #[test]
    fn consonant_doubling() {
        let table = parse_cmd("tal", "l$-1+t/- +=2").unwrap();
        let diffs = diffs_for(&table, "ll");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].apply("tal"), "tat");
    }

    #[test]
    fn vowel_merge_initial_only() {
        // The sandhied initial is empty: 'a' merged into the final 'A'.
        let table = parse_cmd("mA", "$/-+a=1").unwrap();
        let diffs = diffs_for(&table, "A");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].to_delete, 0);
        assert_eq!(diffs[0].new_initial.as_deref(), Some("a"));
        assert_eq!(diffs[0].apply("mA"), "mA");
    }

    #[test]
    fn both_finals_and_initial() {
        let table = parse_cmd("te", "'$-1+ad/- '+a=4").unwrap();
        let diffs = diffs_for(&table, "e'");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].to_delete, 1);
        assert_eq!(diffs[0].to_add, "ad");
        assert_eq!(diffs[0].new_initial.as_deref(), Some("a"));
        assert_eq!(diffs[0].apply("te"), "tad");
    }

    #[test]
    fn multiple_final_diffs_share_a_key() {
        let table = parse_cmd("DarmA", "$-1+a;-1+an/-+a=1").unwrap();
        let diffs = diffs_for(&table, "A");
        assert_eq!(diffs.len(), 2);
        let lemmas: Vec<String> = diffs.iter().map(|d| d.apply("DarmA")).collect();
        assert!(lemmas.contains(&"Darma".to_string()));
        assert!(lemmas.contains(&"Darman".to_string()));
    }

    #[test]
    fn multiple_entries() {
        let table = parse_cmd("rAmo", "g:G$-1+aH/- +=6|$/=0").unwrap();
        assert_eq!(table.len(), 2);
        assert!(!diffs_for(&table, "mog").is_empty());
        assert!(!diffs_for(&table, "moG").is_empty());
    }

    #[test]
    fn punar_keys_on_full_form() {
        let table = parse_cmd("punar", "g:G$-1+H/- +=9").unwrap();
        assert!(!diffs_for(&table, "punarg").is_empty());
        assert_eq!(diffs_for(&table, "punarg")[0].apply("punar"), "punaH");
    }

    #[test]
    fn missing_type_is_error() {
        assert!(matches!(
            parse_cmd("a", "$-1+x/").unwrap_err(),
            CmdError::MissingType(_)
        ));
    }

    #[test]
    fn bad_type_code_is_error() {
        assert!(matches!(
            parse_cmd("a", "$-1+x/=17").unwrap_err(),
            CmdError::InvalidType(_)
        ));
        assert!(matches!(
            parse_cmd("a", "$-1+x/=x").unwrap_err(),
            CmdError::InvalidType(_)
        ));
    }

    #[test]
    fn bad_delete_count_is_error() {
        assert!(matches!(
            parse_cmd("a", "$-z+x/- +=2").unwrap_err(),
            CmdError::InvalidFinalDiff(_)
        ));
    }

    #[test]
    fn body_without_dollar_is_error() {
        assert!(matches!(
            parse_cmd("a", "nodollar=2").unwrap_err(),
            CmdError::MissingDiffs(_)
        ));
    }

    #[test]
    fn empty_body_that_is_not_a_marker_is_error() {
        assert!(matches!(
            parse_cmd("a", "$-  /=2"),
            Err(CmdError::UnresolvedBody(_) | CmdError::InvalidFinalDiff(_))
        ));
    }

    #[test]
    fn longest_fragment_iterates_first() {
        let table = parse_cmd("rAmo", "g$-1+aH/- +=6|$/-+a=1").unwrap();
        let keys: Vec<&str> = table.keys().map(|k| k.0.as_str()).collect();
        assert_eq!(keys, ["mog", "o"]);
    }
}
