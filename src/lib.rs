pub mod wordle;

pub use wordle::{Dictionary, Guesser, GuesserErr, LetterOutcome, Oracle, Outcomes};
