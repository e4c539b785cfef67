/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;
use self::LetterOutcome::*;
use super::prelude::*;

///
/// The three different results a guessed letter can get...
///   * NotPresent = the letter is not in the answer (also indicates no further instances of a
///                  letter when another square with the same letter is present/correct)
///   * PresentWrongPosition = the letter is in the answer, but not in this position
///   * CorrectPosition = the letter is in the answer at this position
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    NotPresent,
    PresentWrongPosition,
    CorrectPosition,
}

impl LetterOutcome {
    /// All three outcomes
    pub const ALL: [LetterOutcome; 3] = [NotPresent, PresentWrongPosition, CorrectPosition];

    /// The character a human types to report this outcome
    pub fn code(&self) -> char {
        match self {
            NotPresent => '1',
            PresentWrongPosition => '2',
            CorrectPosition => '3',
        }
    }

    /// Converts a human typed character (usually from .code()) back to an outcome
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '1' => NotPresent,
            '2' => PresentWrongPosition,
            '3' => CorrectPosition,
            _ => return None,
        })
    }

    /// Whether the letter was found in the answer at all (at this position or elsewhere)
    pub fn is_used(&self) -> bool {
        matches!(self, PresentWrongPosition | CorrectPosition)
    }

    /// Gives the best emoji to represent the outcome
    pub fn emoji(&self) -> &'static str {
        match self {
            NotPresent => "⬛",
            PresentWrongPosition => "🟨",
            CorrectPosition => "🟩",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcomesErr {
    #[error("expected {expected} result codes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("'{0}' is not a result code (use 1, 2 or 3)")]
    UnknownCode(char),
}

/// One LetterOutcome for each letter in a guess.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Outcomes(pub Vec<LetterOutcome>);

impl From<Vec<LetterOutcome>> for Outcomes {
    fn from(v: Vec<LetterOutcome>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[LetterOutcome; N]> for Outcomes {
    fn from(arr: [LetterOutcome; N]) -> Self {
        Self(arr.to_vec())
    }
}

/// Delegate indexing of the struct to it's inner value
impl Index<usize> for Outcomes {
    type Output = LetterOutcome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Outcomes {
    ///
    /// Compute the outcomes for some guess against a known target. For example if the guess was
    /// "tares" and the target was "scare" we should compute
    /// [NotPresent, PresentWrongPosition, PresentWrongPosition, PresentWrongPosition, PresentWrongPosition]
    ///
    /// This is implemented by:
    /// * computing a "budget" for each letter in the alphabet (based on their frequency in the target)
    /// * performing a "GREEN pass" which marks all correctly positioned letters (and updates the budget)
    /// * performing a "YELLOW pass" which marks the remaining letters present or not present, based on
    ///   the budget left over after the green pass
    ///
    /// Exact matches must claim their budget first, otherwise a repeated letter earlier in the
    /// guess could steal the budget of an exact match later in the guess.
    ///
    pub fn score(target: &str, guess: &str) -> Self {
        assert_eq!(target.len(), guess.len(), "target and guess must be the same length");
        assert!(is_word(target), "target '{}' must be lowercase letters", target);
        assert!(is_word(guess), "guess '{}' must be lowercase letters", guess);

        let mut target_letter_counts = count_letters(target);
        let target_bytes = target.as_bytes();
        let guess_bytes = guess.as_bytes();
        let mut marked: Vec<Option<LetterOutcome>> = vec![None; guess_bytes.len()];

        // GREEN pass
        for (i, (&gc, &tc)) in guess_bytes.iter().zip(target_bytes).enumerate() {
            if gc == tc {
                target_letter_counts[letter_idx(gc)] -= 1;
                marked[i] = Some(CorrectPosition);
            }
        }

        // YELLOW pass
        for (i, &gc) in guess_bytes.iter().enumerate() {
            if marked[i].is_none() {
                let counter = &mut target_letter_counts[letter_idx(gc)];
                marked[i] = Some(if *counter > 0 {
                    *counter -= 1;
                    PresentWrongPosition
                } else {
                    NotPresent
                });
            }
        }

        Self(marked.into_iter().map(|m| m.unwrap_or(NotPresent)).collect())
    }

    ///
    /// Parses what a human typed after looking at the real puzzle, such as "13321". The input must
    /// have exactly `word_length` codes. Surrounding whitespace is ignored.
    ///
    pub fn parse_codes(input: &str, word_length: usize) -> Result<Self, ParseOutcomesErr> {
        let input = input.trim();
        let actual = input.chars().count();
        if actual != word_length {
            return Err(ParseOutcomesErr::WrongLength { expected: word_length, actual });
        }

        input.chars()
            .map(|c| LetterOutcome::from_code(c).ok_or(ParseOutcomesErr::UnknownCode(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Whether every letter is in the correct position (the guess was the answer)
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|v| v == &CorrectPosition)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&LetterOutcome> {
        self.0.iter()
    }

    /// The outcomes as the human typed codes (inverse of parse_codes)
    pub fn to_codes(&self) -> String {
        self.0.iter().map(LetterOutcome::code).collect()
    }
}

impl FromStr for Outcomes {
    type Err = ParseOutcomesErr;

    /// Parses codes without a known word length (the length is whatever was typed)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_codes(s, s.trim().chars().count())
    }
}

impl Display for Outcomes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.0 {
            f.write_str(outcome.emoji())?;
        }

        Ok(())
    }
}
