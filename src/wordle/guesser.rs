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

use std::collections::BTreeMap;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use thiserror::Error;
use super::{prelude::*, outcome::*};

///
/// Performs the core task of this crate- narrowing down which words could still be the answer.
///
/// This struct holds &str items borrowed from whoever owns the dictionary (usually a Dictionary
/// owned by the Session). The candidate set only ever shrinks, so there's no reason for the guesser
/// to own copies of the words.
///
pub struct Guesser<'a> {
    word_length: usize,

    /// Words which are still consistent with every piece of feedback seen so far, along with their
    /// letter counts (computed once up front so filtering doesn't recount every round). A BTreeMap
    /// keeps iteration order stable, which keeps seeded sessions reproducible.
    candidates: BTreeMap<&'a str, LetterCounts>,

    positions: PositionConstraints,
    letters: LetterCountConstraints,

    /// Picks among the candidates. Seed it to replay a session.
    rng: StdRng,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuesserErr {
    #[error("ran out of words to guess")]
    NoCandidates,
    #[error("'{guess}' is not a {expected} letter word")]
    InvalidGuess { guess: String, expected: usize },
    #[error("expected {expected} letter outcomes, got {actual}")]
    OutcomeLengthMismatch { expected: usize, actual: usize },
}

///
/// What we know about each position in the answer:
///   * solved = the letter at this position is known (and never changes once known)
///   * wrong = letters which are in the answer, but definitely not at this position
///
#[derive(Clone, Debug)]
struct PositionConstraints {
    solved: Vec<Option<u8>>,
    wrong: Vec<[bool; ALPHABET_SIZE]>,
}

impl PositionConstraints {
    fn new(word_length: usize) -> Self {
        Self {
            solved: vec![None; word_length],
            wrong: vec![[false; ALPHABET_SIZE]; word_length],
        }
    }

    fn record(&mut self, guess: &[u8], outcomes: &Outcomes) {
        for (idx, (&letter, outcome)) in guess.iter().zip(outcomes.iter()).enumerate() {
            match outcome {
                LetterOutcome::CorrectPosition => {
                    let slot = &mut self.solved[idx];
                    match *slot {
                        None => *slot = Some(letter),
                        Some(known) if known != letter => log::warn!(
                            "position {} is already solved as '{}', ignoring '{}'",
                            idx,
                            known as char,
                            letter as char,
                        ),
                        Some(_) => {}
                    }
                }
                LetterOutcome::PresentWrongPosition => {
                    self.wrong[idx][letter_idx(letter)] = true;
                }
                LetterOutcome::NotPresent => {}
            }
        }
    }

    fn allows(&self, word: &[u8]) -> bool {
        word.iter().enumerate().all(|(idx, &letter)| {
            if let Some(known) = self.solved[idx] {
                if known != letter {
                    return false;
                }
            }

            !self.wrong[idx][letter_idx(letter)]
        })
    }

    fn answer(&self) -> Option<String> {
        self.solved.iter().map(|s| s.map(char::from)).collect()
    }
}

///
/// What we know about how many times each letter shows up in the answer:
///   * min_count = at least this many (taken from the most recent guess using the letter)
///   * max_count = at most this many (only known once a guess has an excess copy marked NotPresent)
///
#[derive(Clone, Debug)]
struct LetterCountConstraints {
    min_count: [Option<usize>; ALPHABET_SIZE],
    max_count: [Option<usize>; ALPHABET_SIZE],
}

impl LetterCountConstraints {
    fn new() -> Self {
        Self {
            min_count: [None; ALPHABET_SIZE],
            max_count: [None; ALPHABET_SIZE],
        }
    }

    fn record(&mut self, guess: &[u8], outcomes: &Outcomes) {
        let mut in_guess = [false; ALPHABET_SIZE];
        let mut used = [0usize; ALPHABET_SIZE];
        let mut maxed = [false; ALPHABET_SIZE];

        for (&letter, outcome) in guess.iter().zip(outcomes.iter()) {
            let idx = letter_idx(letter);
            in_guess[idx] = true;
            if outcome.is_used() {
                used[idx] += 1;
            } else {
                maxed[idx] = true;
            }
        }

        for idx in (0..ALPHABET_SIZE).filter(|idx| in_guess[*idx]) {
            // overwritten, not accumulated: the latest guess of a letter sets its minimum
            self.min_count[idx] = Some(used[idx]);

            // if one copy of the letter was NotPresent, the answer has no more copies than the ones
            // which were matched
            if maxed[idx] {
                let bound = &mut self.max_count[idx];
                *bound = Some(bound.map_or(used[idx], |prev| prev.min(used[idx])));
            }
        }
    }

    fn allows(&self, counts: &LetterCounts) -> bool {
        counts.iter().zip(self.min_count.iter().zip(self.max_count.iter()))
            .all(|(&count, (min, max))| {
                min.map_or(true, |min| count >= min) && max.map_or(true, |max| count <= max)
            })
    }
}

impl<'a> Guesser<'a> {
    /// Creates a guesser over every `word_length` letter word in `words`, picking guesses with a
    /// generator seeded from the OS.
    pub fn new<I>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item=&'a str>,
    {
        Self::with_rng(words, word_length, StdRng::from_entropy())
    }

    /// Same as new, but every session with the same words & seed picks the same guesses.
    pub fn with_seed<I>(words: I, word_length: usize, seed: u64) -> Self
    where
        I: IntoIterator<Item=&'a str>,
    {
        Self::with_rng(words, word_length, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<I>(words: I, word_length: usize, rng: StdRng) -> Self
    where
        I: IntoIterator<Item=&'a str>,
    {
        // words of the wrong length (or with characters we can't count) simply never become
        // candidates
        let candidates: BTreeMap<&'a str, LetterCounts> = words
            .into_iter()
            .filter(|word| is_word_of_len(word, word_length))
            .map(|word| (word, count_letters(word)))
            .collect();

        log::debug!("guesser has {} candidates of length {}", candidates.len(), word_length);

        Self {
            word_length,
            candidates,
            positions: PositionConstraints::new(word_length),
            letters: LetterCountConstraints::new(),
            rng,
        }
    }

    ///
    /// Picks any word which is still a candidate. There is no ranking, every remaining candidate is
    /// equally good.
    ///
    /// Returns GuesserErr::NoCandidates when the feedback so far has ruled out every word. This
    /// means the feedback was inconsistent or the answer isn't in the dictionary.
    ///
    pub fn next_guess(&mut self) -> Result<&'a str, GuesserErr> {
        self.candidates
            .keys()
            .copied()
            .choose(&mut self.rng)
            .ok_or(GuesserErr::NoCandidates)
    }

    ///
    /// Feeds the outcomes of a guess back into the guesser. This updates the letter count bounds,
    /// then the per-position knowledge, then drops every candidate which no longer fits.
    ///
    /// The guess doesn't have to be a candidate (or even in the dictionary), it only has to be a
    /// word of the right length.
    ///
    pub fn update_guesses(&mut self, guess: &str, outcomes: &Outcomes) -> Result<(), GuesserErr> {
        let guess = normalize_word(guess);
        if !is_word_of_len(&guess, self.word_length) {
            return Err(GuesserErr::InvalidGuess { guess, expected: self.word_length });
        }

        if outcomes.len() != self.word_length {
            return Err(GuesserErr::OutcomeLengthMismatch {
                expected: self.word_length,
                actual: outcomes.len(),
            });
        }

        let guess_bytes = guess.as_bytes();
        self.letters.record(guess_bytes, outcomes);
        self.positions.record(guess_bytes, outcomes);

        let before = self.candidates.len();
        self.recompute_candidates();
        log::debug!(
            "guess '{}' ({}) narrowed candidates {} -> {}",
            guess,
            outcomes,
            before,
            self.candidates.len(),
        );

        Ok(())
    }

    fn recompute_candidates(&mut self) {
        // retain removes items from the map when the closure returns false
        let positions = &self.positions;
        let letters = &self.letters;
        self.candidates.retain(|word, counts|
            positions.allows(word.as_bytes()) && letters.allows(counts));
    }

    ///
    /// Returns the answer once every position has been solved, otherwise None.
    ///
    pub fn solved_answer(&self) -> Option<String> {
        self.positions.answer()
    }

    pub fn is_solved(&self) -> bool {
        self.positions.solved.iter().all(Option::is_some)
    }

    ///
    /// Tests whether some word fits everything learned so far. Every word in candidates() passes
    /// this, and a word which didn't start as a candidate may pass too.
    ///
    pub fn permits(&self, word: &str) -> bool {
        is_word_of_len(word, self.word_length)
            && self.positions.allows(word.as_bytes())
            && self.letters.allows(&count_letters(word))
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// The remaining candidates, in alphabetical order
    pub fn candidates<'b>(&'b self) -> impl Iterator<Item=&'a str> + 'b where 'a: 'b {
        self.candidates.keys().copied()
    }

    /// The known letter at some position, if solved
    pub fn solved_letter(&self, position: usize) -> Option<char> {
        self.positions.solved.get(position).copied().flatten().map(char::from)
    }

    /// The current lower bound on how many times `letter` appears in the answer
    pub fn min_count(&self, letter: char) -> Option<usize> {
        alphabet_slot(letter).and_then(|idx| self.letters.min_count[idx])
    }

    /// The current upper bound on how many times `letter` appears in the answer
    pub fn max_count(&self, letter: char) -> Option<usize> {
        alphabet_slot(letter).and_then(|idx| self.letters.max_count[idx])
    }
}

fn alphabet_slot(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter_idx(letter as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::LetterOutcome::*;

    const WORDS: [&str; 4] = ["crane", "slate", "trace", "grape"];

    fn outcomes<const N: usize>(arr: [LetterOutcome; N]) -> Outcomes {
        arr.into()
    }

    #[test]
    fn test_only_matching_length_words_are_candidates() {
        let words = ["crane", "cranes", "Crane", "cr4ne", "slate", "slate", "ox"];
        let guesser = Guesser::with_seed(words, 5, 7);
        let candidates: Vec<&str> = guesser.candidates().collect();
        assert_eq!(candidates, vec!["crane", "slate"]);
    }

    #[test]
    fn test_next_guess_without_candidates() {
        let mut guesser = Guesser::with_seed(WORDS, 6, 1);
        assert_eq!(guesser.next_guess(), Err(GuesserErr::NoCandidates));
    }

    #[test]
    fn test_seeded_guessers_agree() {
        let mut a = Guesser::with_seed(WORDS, 5, 42);
        let mut b = Guesser::with_seed(WORDS, 5, 42);
        for _ in 0..8 {
            assert_eq!(a.next_guess(), b.next_guess());
        }
    }

    #[test]
    fn test_next_guess_is_a_candidate() {
        let mut guesser = Guesser::new(WORDS, 5);
        let guess = guesser.next_guess().expect("should have candidates");
        assert!(WORDS.contains(&guess));
    }

    #[test]
    fn test_update_rejects_bad_shapes() {
        let mut guesser = Guesser::with_seed(WORDS, 5, 3);
        assert_eq!(
            guesser.update_guesses("cranes", &outcomes([NotPresent; 6])),
            Err(GuesserErr::InvalidGuess { guess: "cranes".to_string(), expected: 5 }),
        );
        assert_eq!(
            guesser.update_guesses("crane", &outcomes([NotPresent; 4])),
            Err(GuesserErr::OutcomeLengthMismatch { expected: 5, actual: 4 }),
        );
        assert_eq!(guesser.num_candidates(), WORDS.len());
    }

    #[test]
    fn test_update_narrows_to_consistent_words() {
        let mut guesser = Guesser::with_seed(WORDS, 5, 3);
        guesser
            .update_guesses("crane", &Outcomes::score("trace", "crane"))
            .expect("valid update");

        // 'n' is out, 'c' is in but not first, r/a/e are fixed
        let candidates: Vec<&str> = guesser.candidates().collect();
        assert_eq!(candidates, vec!["trace"]);
        assert_eq!(guesser.solved_letter(1), Some('r'));
        assert_eq!(guesser.solved_letter(0), None);
        assert_eq!(guesser.max_count('n'), Some(0));
        assert_eq!(guesser.min_count('c'), Some(1));
    }

    #[test]
    fn test_candidates_shrink_monotonically_and_refilter_is_stable() {
        let words = [
            "crane", "slate", "trace", "grape", "crate", "react", "cater", "caret", "carte", "trade",
        ];
        let mut guesser = Guesser::with_seed(words, 5, 11);
        let mut previous = guesser.num_candidates();

        for guess in ["slate", "grape", "cater", "react"] {
            guesser
                .update_guesses(guess, &Outcomes::score("trace", guess))
                .expect("valid update");
            assert!(guesser.num_candidates() <= previous);
            assert!(guesser.candidates().all(|w| guesser.permits(w)));

            let snapshot: Vec<&str> = guesser.candidates().collect();
            guesser.recompute_candidates();
            let again: Vec<&str> = guesser.candidates().collect();
            assert_eq!(snapshot, again);

            previous = guesser.num_candidates();
        }

        assert!(guesser.candidates().any(|w| w == "trace"));
    }

    #[test]
    fn test_solved_position_is_never_overwritten() {
        let mut guesser = Guesser::with_seed(WORDS, 5, 5);
        guesser
            .update_guesses("trace", &outcomes([CorrectPosition, NotPresent, NotPresent, NotPresent, NotPresent]))
            .expect("valid update");
        assert_eq!(guesser.solved_letter(0), Some('t'));

        guesser
            .update_guesses("crane", &outcomes([CorrectPosition, NotPresent, NotPresent, NotPresent, NotPresent]))
            .expect("valid update");
        assert_eq!(guesser.solved_letter(0), Some('t'));
    }

    #[test]
    fn test_max_count_never_loosens() {
        let mut guesser = Guesser::with_seed(WORDS, 5, 5);
        guesser
            .update_guesses("sassy", &outcomes([CorrectPosition, NotPresent, NotPresent, NotPresent, NotPresent]))
            .expect("valid update");
        assert_eq!(guesser.max_count('s'), Some(1));

        // a later round matching two 's' while still marking one NotPresent must not raise it
        guesser
            .update_guesses("sissy", &outcomes([CorrectPosition, NotPresent, CorrectPosition, NotPresent, NotPresent]))
            .expect("valid update");
        assert_eq!(guesser.max_count('s'), Some(1));
        assert_eq!(guesser.min_count('s'), Some(2));
    }

    #[test]
    fn test_min_count_is_overwritten_by_latest_guess() {
        let mut guesser = Guesser::with_seed(WORDS, 5, 5);
        guesser
            .update_guesses("eerie", &outcomes([PresentWrongPosition, PresentWrongPosition, NotPresent, NotPresent, NotPresent]))
            .expect("valid update");
        assert_eq!(guesser.min_count('e'), Some(2));

        guesser
            .update_guesses("slate", &outcomes([NotPresent, NotPresent, NotPresent, NotPresent, CorrectPosition]))
            .expect("valid update");
        assert_eq!(guesser.min_count('e'), Some(1));
        assert_eq!(guesser.min_count('q'), None);
    }

    #[test]
    fn test_solves_when_target_is_in_dictionary() {
        let mut guesser = Guesser::with_seed(WORDS, 5, 99);
        let mut answer = None;
        for _ in 0..20 {
            let guess = guesser.next_guess().expect("target is always a candidate");
            guesser
                .update_guesses(guess, &Outcomes::score("trace", guess))
                .expect("valid update");
            assert!(guesser.num_candidates() > 0);
            if let Some(found) = guesser.solved_answer() {
                answer = Some(found);
                break;
            }
        }

        assert_eq!(answer.as_deref(), Some("trace"));
        assert!(guesser.is_solved());
    }

    #[test]
    fn test_exhausts_when_target_is_missing() {
        let mut guesser = Guesser::with_seed(["crane", "slate", "grape"], 5, 17);
        let mut result = Ok("");
        for _ in 0..10 {
            result = guesser.next_guess();
            match result {
                Ok(guess) => guesser
                    .update_guesses(guess, &Outcomes::score("trace", guess))
                    .expect("valid update"),
                Err(_) => break,
            }
        }

        assert_eq!(result, Err(GuesserErr::NoCandidates));
        assert_eq!(guesser.solved_answer(), None);
    }
}
