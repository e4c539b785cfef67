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

use std::io::{self, BufRead, Write};
use thiserror::Error;
use super::{prelude::*, outcome::*};

///
/// Anything which can tell us how a guess did. The guesser never knows the answer, it only ever
/// sees what an Oracle says about each guess.
///
pub trait Oracle {
    fn respond(&mut self, guess: &str) -> Result<Outcomes, OracleErr>;
}

#[derive(Error, Debug)]
pub enum OracleErr {
    #[error("guess '{guess}' has {actual} letters but the answer has {expected}")]
    LengthMismatch { guess: String, expected: usize, actual: usize },
    #[error("'{0}' is not a word")]
    InvalidGuess(String),
    #[error("input closed before a result was entered")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Scores guesses against an answer we already know (self-play)
#[derive(Clone, Debug)]
pub struct TargetOracle {
    target: String,
}

impl TargetOracle {
    pub fn new(target: &str) -> Self {
        Self { target: normalize_word(target) }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Oracle for TargetOracle {
    fn respond(&mut self, guess: &str) -> Result<Outcomes, OracleErr> {
        if guess.len() != self.target.len() {
            return Err(OracleErr::LengthMismatch {
                guess: guess.to_string(),
                expected: self.target.len(),
                actual: guess.len(),
            });
        }

        if !is_word(guess) || !is_word(&self.target) {
            return Err(OracleErr::InvalidGuess(guess.to_string()));
        }

        Ok(Outcomes::score(&self.target, guess))
    }
}

///
/// Asks a person (who is looking at the real puzzle) what happened to each guess. They type one
/// code per letter: 1 = not in the word, 2 = in the word somewhere else, 3 = right spot.
///
/// Malformed input is explained and asked for again, so the guesser only ever sees well-formed
/// outcomes.
///
pub struct HumanOracle<R, W> {
    input: R,
    output: W,
    word_length: usize,
}

impl<R: BufRead, W: Write> HumanOracle<R, W> {
    pub fn new(input: R, output: W, word_length: usize) -> Self {
        Self { input, output, word_length }
    }

    fn read_line(&mut self) -> Result<String, OracleErr> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(OracleErr::InputClosed);
        }

        Ok(line)
    }
}

impl HumanOracle<io::StdinLock<'static>, io::Stdout> {
    /// A human oracle talking over the terminal
    pub fn stdio(word_length: usize) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), word_length)
    }
}

impl<R: BufRead, W: Write> Oracle for HumanOracle<R, W> {
    fn respond(&mut self, guess: &str) -> Result<Outcomes, OracleErr> {
        loop {
            write!(self.output, "I guess {}. Enter result: ", console::style(guess).bold())?;
            self.output.flush()?;

            let line = self.read_line()?;
            match Outcomes::parse_codes(&line, self.word_length) {
                Ok(outcomes) => return Ok(outcomes),
                Err(err) => {
                    log::debug!("rejected result input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::LetterOutcome::*;

    #[test]
    fn test_target_oracle_scores() {
        let mut oracle = TargetOracle::new("Trace");
        assert_eq!(oracle.target(), "trace");
        assert_eq!(
            oracle.respond("crane").expect("same length"),
            Outcomes::from([PresentWrongPosition, CorrectPosition, CorrectPosition, NotPresent, CorrectPosition]),
        );
        assert!(oracle.respond("trace").expect("same length").is_solved());
    }

    #[test]
    fn test_target_oracle_rejects_other_lengths() {
        let mut oracle = TargetOracle::new("trace");
        let err = oracle.respond("traces").unwrap_err();
        assert!(matches!(err, OracleErr::LengthMismatch { expected: 5, actual: 6, .. }), "got {:?}", err);
    }

    #[test]
    fn test_human_oracle_reprompts_until_valid() {
        let input = "12\n12x33\n12233\n";
        let mut output = Vec::new();
        let outcomes = HumanOracle::new(input.as_bytes(), &mut output, 5)
            .respond("crane")
            .expect("third line is valid");

        assert_eq!(outcomes.to_codes(), "12233");

        let printed = String::from_utf8(output).expect("utf8 output");
        assert_eq!(printed.matches("Enter result: ").count(), 3);
        assert!(printed.contains("expected 5 result codes, got 2"));
        assert!(printed.contains("'x' is not a result code"));
    }

    #[test]
    fn test_human_oracle_input_closed() {
        let mut output = Vec::new();
        let err = HumanOracle::new("".as_bytes(), &mut output, 5)
            .respond("crane")
            .unwrap_err();
        assert!(matches!(err, OracleErr::InputClosed), "got {:?}", err);
    }
}
