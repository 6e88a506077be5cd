// SLP1 character classification
// Origin: SkrtSyllableTokenizer.java (charType map)

/// SLP1 character class.
///
/// The SLP1 transliteration scheme is case-sensitive and maps each Sanskrit
/// phoneme to exactly one ASCII character. Anything outside the four classes
/// below is not part of the alphabet and ends a word.
///
/// Origin: SkrtSyllableTokenizer.java:61-64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlpCharType {
    Vowel,
    SpecialPhoneme,
    Consonant,
    Modifier,
    NonSlp,
}

/// Returns the SLP1 class of a character.
///
/// Origin: SkrtSyllableTokenizer.java:101-176 (createMap)
pub fn slp_char_type(c: char) -> SlpCharType {
    match c {
        'a' | 'A' | 'i' | 'I' | 'u' | 'U' | 'f' | 'F' | 'x' | 'X' | 'e' | 'E' | 'o' | 'O' => {
            SlpCharType::Vowel
        }
        // anusvara, visarga, jihvamuliya, upadhmaniya, candrabindu
        'M' | 'H' | 'V' | 'Z' | '~' => SlpCharType::SpecialPhoneme,
        'k' | 'K' | 'g' | 'G' | 'N' | 'c' | 'C' | 'j' | 'J' | 'Y' | 'w' | 'W' | 'q' | 'Q'
        | 'R' | 't' | 'T' | 'd' | 'D' | 'n' | 'p' | 'P' | 'b' | 'B' | 'm' | 'y' | 'r' | 'l'
        | 'v' | 'L' | '|' | 'S' | 'z' | 's' | 'h' => SlpCharType::Consonant,
        '_' | '=' | '!' | '#' | '1' | '2' | '3' | '4' | '/' | '\\' | '^' | '6' | '7' | '8'
        | '9' | '+' => SlpCharType::Modifier,
        _ => SlpCharType::NonSlp,
    }
}

/// Check whether a character is a phoneme, i.e. can appear in the text of a
/// dictionary entry (vowel, special phoneme or consonant).
pub fn is_slp_phoneme(c: char) -> bool {
    matches!(
        slp_char_type(c),
        SlpCharType::Vowel | SlpCharType::SpecialPhoneme | SlpCharType::Consonant
    )
}

/// Check whether a character is an SLP1 modifier (accents, vedic annotations).
/// Modifiers occupy a position in the input but carry no lexical content.
pub fn is_slp_modifier(c: char) -> bool {
    slp_char_type(c) == SlpCharType::Modifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels() {
        for c in "aAiIuUfFxXeEoO".chars() {
            assert_eq!(slp_char_type(c), SlpCharType::Vowel, "{c}");
        }
    }

    #[test]
    fn special_phonemes() {
        for c in "MHVZ~".chars() {
            assert_eq!(slp_char_type(c), SlpCharType::SpecialPhoneme, "{c}");
        }
    }

    #[test]
    fn consonants() {
        for c in "kKgGNcCjJYwWqQRtTdDnpPbBmyrlvL|Szsh".chars() {
            assert_eq!(slp_char_type(c), SlpCharType::Consonant, "{c}");
        }
    }

    #[test]
    fn modifiers() {
        for c in "_=!#1234/\\^6789+".chars() {
            assert_eq!(slp_char_type(c), SlpCharType::Modifier, "{c}");
        }
    }

    #[test]
    fn case_matters() {
        // SLP1 is case sensitive: 'z' is a consonant, 'Z' a special phoneme.
        assert_eq!(slp_char_type('z'), SlpCharType::Consonant);
        assert_eq!(slp_char_type('Z'), SlpCharType::SpecialPhoneme);
    }

    #[test]
    fn non_slp() {
        assert_eq!(slp_char_type(' '), SlpCharType::NonSlp);
        assert_eq!(slp_char_type('.'), SlpCharType::NonSlp);
        assert_eq!(slp_char_type(','), SlpCharType::NonSlp);
        assert_eq!(slp_char_type('5'), SlpCharType::NonSlp);
        assert_eq!(slp_char_type('\''), SlpCharType::NonSlp);
        assert_eq!(slp_char_type('\u{0915}'), SlpCharType::NonSlp); // devanagari ka
    }

    #[test]
    fn phoneme_predicate() {
        assert!(is_slp_phoneme('a'));
        assert!(is_slp_phoneme('H'));
        assert!(is_slp_phoneme('k'));
        assert!(!is_slp_phoneme('_'));
        assert!(!is_slp_phoneme(' '));
    }

    #[test]
    fn modifier_predicate() {
        assert!(is_slp_modifier('^'));
        assert!(!is_slp_modifier('a'));
        // '5' is not a modifier even though 1-4 and 6-9 are
        assert!(!is_slp_modifier('5'));
    }
}
