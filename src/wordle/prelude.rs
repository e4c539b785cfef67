// This file allows you to configure some of the constants that define a solving session.
//
// The word length is not a constant here (unlike the classic 5 letter game) because the guesser
// supports any length. These are just the defaults used when nobody asks for something else.


// how many characters are in a word when the user doesn't say otherwise?
pub const DEFAULT_WORD_LENGTH: usize = 6;
// how many rounds does a session get before we give up?
pub const DEFAULT_GUESS_BUDGET: usize = 20;
// how many letters are in the english alphabet? (don't change this lol)
pub const ALPHABET_SIZE: usize = (('z' as usize) - ('a' as usize)) + 1;

/// Per-letter counts, indexed by the position of the letter in the alphabet.
pub type LetterCounts = [usize; ALPHABET_SIZE];

/// Returns the number of times each letter of the alphabet occurs in the argument. The &str should
/// be in lowercase. The output is indexed by the position of the letter in the alphabet.
pub fn count_letters(word: &str) -> LetterCounts {
    count_letters_bytes(word.as_bytes())
}

/// Returns the number of times each letter of the alphabet occurs in the argument. The bytes should
/// represent only lowercase ASCII letters. The output is indexed by the position of the letter in
/// the alphabet... like 'a' = 0, 'b' = 1, etc...
pub fn count_letters_bytes(word: &[u8]) -> LetterCounts {
    debug_assert!(word.iter().all(is_normal_word_char));
    let mut out = [0; ALPHABET_SIZE];
    for &letter in word {
        out[letter_idx(letter)] += 1;
    }

    out
}

/// Returns the index of the given letter within the alphabet (like 'a' = 0, 'b' = 1, etc...)
pub fn letter_idx(letter: u8) -> usize {
    ((letter as isize) - ('a' as isize)) as usize
}

/// Checks whether the passed string is a non-empty run of lowercase ASCII letters (any length)
pub fn is_word(v: &str) -> bool {
    !v.is_empty() && v.bytes().all(|b| is_normal_word_char(&b))
}

/// Checks whether the passed string is a word of exactly `len` letters
pub fn is_word_of_len(v: &str, len: usize) -> bool {
    v.len() == len && is_word(v)
}

/// Given some input &str, try to clean it up such that it might be a word.
///
/// This function does not trim the length of a word or remove non alpha characters. It simply
/// cleans up words that are already valid by removing any spacing and converting to all
/// lowercase.
///
/// You should always verify that the output of this function passes is_word.
pub fn normalize_word(str: &str) -> String {
    str.trim().to_lowercase()
}

/// Verifies that a byte represents a lowercase alphabetic character
pub fn is_normal_word_char(v: &u8) -> bool {
    v.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_count_letters_handles_repeats() {
        let counts = count_letters("abca");
        assert_eq!(counts[letter_idx(b'a')], 2);
        assert_eq!(counts[letter_idx(b'b')], 1);
        assert_eq!(counts[letter_idx(b'c')], 1);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }

    #[test_case("trace", 5, true)]
    #[test_case("trace", 6, false)]
    #[test_case("Trace", 5, false)]
    #[test_case("tr4ce", 5, false)]
    #[test_case("", 0, false)]
    fn test_is_word_of_len(word: &str, len: usize, expected: bool) {
        assert_eq!(is_word_of_len(word, len), expected, "word={:?} len={}", word, len);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  GraPe\n"), "grape");
    }
}
