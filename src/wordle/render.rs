use console::{style, StyledObject};
use super::outcome::{LetterOutcome, Outcomes};

/// Styles one guessed letter according to how it did
pub fn style_letter(letter: char, outcome: LetterOutcome) -> StyledObject<String> {
    let cell = style(format!("{} ", letter));
    match outcome {
        LetterOutcome::NotPresent => cell.black().bright().reverse(),
        LetterOutcome::PresentWrongPosition => cell.yellow().reverse(),
        LetterOutcome::CorrectPosition => cell.green().reverse(),
    }
}

/// Renders a guess with each letter colored by its outcome, like the squares in the real game
pub fn render_round(guess: &str, outcomes: &Outcomes) -> String {
    guess.chars()
        .zip(outcomes.iter())
        .map(|(letter, outcome)| style_letter(letter, *outcome).to_string())
        .collect()
}

/// Explains the codes a person types in interactive mode
pub fn legend() -> String {
    format!(
        "{} for not used, {} for used in wrong place, and {} for correct guess.",
        style_letter('1', LetterOutcome::NotPresent),
        style_letter('2', LetterOutcome::PresentWrongPosition),
        style_letter('3', LetterOutcome::CorrectPosition),
    )
}
