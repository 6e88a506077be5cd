// Sandhi context matcher: is a predicted fragment literally in the text?
// Origin: SkrtWordTokenizer.java (containsSandhiedCombination,
// isSandhiedCombination)

use super::SandhiType;

/// Offset windows per sandhi type, relative to the anchor (the index of the
/// last character of the matched surface form). Each `(lo, hi)` pair is the
/// half-open char range `[anchor+lo, anchor+hi)` a fragment may occupy; the
/// spread covers an optional single space at the boundary.
fn windows(sandhi_type: SandhiType) -> &'static [(isize, isize)] {
    match sandhi_type {
        SandhiType::ZeroChange => &[],
        SandhiType::Vowel => &[(0, 3), (0, 2), (0, 1)],
        SandhiType::Consonant1 => &[(0, 2), (0, 1)],
        SandhiType::Consonant1Vowels => &[(-1, 2), (-1, 3), (-1, 4)],
        SandhiType::Consonant2 => &[(0, 4), (0, 3), (0, 2)],
        // The rules of both visarga classes reach one char behind the final
        SandhiType::Visarga1 | SandhiType::Visarga2 => &[(-1, 3), (-1, 2), (-1, 1)],
        // consonant clusters are always reduced to the first consonant
        SandhiType::AbsoluteFinals => &[(0, 1)],
        SandhiType::CcDoubling => &[(0, 4), (0, 3)],
        // punar rules match the whole five-character word
        SandhiType::Punar => &[(-4, 3), (-4, 2)],
    }
}

/// Check whether `fragment` is literally present in `buffer` around `anchor`.
///
/// Extracts each window for the sandhi type, strips spaces, and compares for
/// exact equality. Windows reaching before the start of the buffer are
/// skipped; windows reaching past the end are clamped. An anchor near either
/// edge of the buffer yields no match, never an error.
pub fn contains_sandhied(
    buffer: &[char],
    anchor: usize,
    fragment: &str,
    sandhi_type: SandhiType,
) -> bool {
    for &(lo, hi) in windows(sandhi_type) {
        let start = anchor as isize + lo;
        if start < 0 {
            continue;
        }
        let start = start as usize;
        let end = ((anchor as isize + hi) as usize).min(buffer.len());
        if start >= end {
            continue;
        }
        let window = &buffer[start..end];
        if window.iter().copied().eq(fragment.chars()) {
            return true;
        }
        if window
            .iter()
            .copied()
            .filter(|&c| c != ' ')
            .eq(fragment.chars())
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn zero_change_never_matches() {
        let buf = chars("gacCati");
        assert!(!contains_sandhied(&buf, 6, "gacCati", SandhiType::ZeroChange));
    }

    #[test]
    fn visarga_across_a_space() {
        // "rAmo gacCati": the fragment "mog" spans the final "mo" and the
        // following initial with the space stripped.
        let buf = chars("rAmo gacCati");
        assert!(contains_sandhied(&buf, 3, "mog", SandhiType::Visarga2));
        assert!(!contains_sandhied(&buf, 3, "mod", SandhiType::Visarga2));
    }

    #[test]
    fn doubled_consonant_without_space() {
        let buf = chars("tallokaH");
        assert!(contains_sandhied(&buf, 2, "ll", SandhiType::Consonant1));
        assert!(!contains_sandhied(&buf, 2, "lt", SandhiType::Consonant1));
    }

    #[test]
    fn merged_vowel_single_char() {
        let buf = chars("mAstu");
        assert!(contains_sandhied(&buf, 1, "A", SandhiType::Vowel));
    }

    #[test]
    fn elision_with_avagraha() {
        // "te 'pi": fragment "e'" with the boundary space stripped.
        let buf = chars("te 'pi");
        assert!(contains_sandhied(&buf, 1, "e'", SandhiType::Consonant2));
    }

    #[test]
    fn punar_lookbehind() {
        let buf = chars("punar gacCati");
        assert!(contains_sandhied(&buf, 4, "punarg", SandhiType::Punar));
        assert!(!contains_sandhied(&buf, 4, "punard", SandhiType::Punar));
    }

    #[test]
    fn window_before_buffer_start_is_skipped() {
        // Anchor 0 with punar windows would reach to -4.
        let buf = chars("ab");
        assert!(!contains_sandhied(&buf, 0, "ab", SandhiType::Punar));
    }

    #[test]
    fn window_past_buffer_end_is_clamped() {
        // Anchor at the last char: the (0, 3) window is clamped to one char.
        let buf = chars("mA");
        assert!(contains_sandhied(&buf, 1, "A", SandhiType::Vowel));
    }

    #[test]
    fn space_only_stripped_not_other_chars() {
        let buf = chars("ta-l");
        assert!(!contains_sandhied(&buf, 1, "al", SandhiType::Consonant1));
    }
}
