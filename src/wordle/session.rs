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

use thiserror::Error;
use super::{prelude::*, dictionary::*, guesser::*, oracle::*, outcome::*};

/// Everything a solving session can be configured with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_length: usize,
    /// maximum number of rounds before giving up
    pub guess_budget: usize,
    /// None = seed from the OS
    pub seed: Option<u64>,
    /// played in round 1 instead of asking the guesser
    pub first_guess: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            guess_budget: DEFAULT_GUESS_BUDGET,
            seed: None,
            first_guess: None,
        }
    }
}

/// One played round, handed to the caller as soon as the guesser has absorbed it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// 1-based
    pub number: usize,
    pub guess: String,
    pub outcomes: Outcomes,
    pub remaining_candidates: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Solved { answer: String, rounds: usize },
    /// every dictionary word has been ruled out (inconsistent feedback, or the answer isn't known)
    CandidatesExhausted { rounds: usize },
    BudgetExhausted { rounds: usize },
}

impl SessionOutcome {
    pub fn answer(&self) -> Option<&str> {
        match self {
            SessionOutcome::Solved { answer, .. } => Some(answer),
            _ => None,
        }
    }

    pub fn rounds(&self) -> usize {
        match self {
            SessionOutcome::Solved { rounds, .. }
            | SessionOutcome::CandidatesExhausted { rounds }
            | SessionOutcome::BudgetExhausted { rounds } => *rounds,
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionErr {
    #[error(transparent)]
    Guesser(#[from] GuesserErr),
    #[error(transparent)]
    Oracle(#[from] OracleErr),
}

///
/// Drives the round loop: ask the guesser for a word, ask the oracle how it did, feed that back,
/// and stop once the answer is known, the candidates run out, or the budget is used up.
///
pub struct Session<'a> {
    config: SessionConfig,
    guesser: Guesser<'a>,
}

impl<'a> Session<'a> {
    pub fn new(dictionary: &'a Dictionary, config: SessionConfig) -> Self {
        let words = dictionary.iter_len(config.word_length);
        let guesser = match config.seed {
            Some(seed) => Guesser::with_seed(words, config.word_length, seed),
            None => Guesser::new(words, config.word_length),
        };

        Self { config, guesser }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn guesser(&self) -> &Guesser<'a> {
        &self.guesser
    }

    ///
    /// Plays until the session ends. `on_round` sees every round after it's been applied, which is
    /// where callers print progress.
    ///
    /// Running out of candidates is a normal ending (SessionOutcome::CandidatesExhausted), while a
    /// failing oracle or a malformed first guess is an error.
    ///
    pub fn run<O, F>(&mut self, oracle: &mut O, mut on_round: F) -> Result<SessionOutcome, SessionErr>
    where
        O: Oracle + ?Sized,
        F: FnMut(&Round),
    {
        let mut first_guess = self.config.first_guess.clone();

        for number in 1..=self.config.guess_budget {
            let guess = match first_guess.take() {
                Some(guess) => normalize_word(&guess),
                None => match self.guesser.next_guess() {
                    Ok(guess) => guess.to_string(),
                    Err(GuesserErr::NoCandidates) => {
                        log::info!("no candidates remain after {} rounds", number - 1);
                        return Ok(SessionOutcome::CandidatesExhausted { rounds: number - 1 });
                    }
                    Err(err) => return Err(err.into()),
                },
            };

            let outcomes = oracle.respond(&guess)?;
            self.guesser.update_guesses(&guess, &outcomes)?;

            on_round(&Round {
                number,
                guess,
                outcomes,
                remaining_candidates: self.guesser.num_candidates(),
            });

            if let Some(answer) = self.guesser.solved_answer() {
                log::info!("solved '{}' in {} rounds", answer, number);
                return Ok(SessionOutcome::Solved { answer, rounds: number });
            }
        }

        log::info!("guess budget of {} exhausted", self.config.guess_budget);
        Ok(SessionOutcome::BudgetExhausted { rounds: self.config.guess_budget })
    }
}
