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

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use anyhow::{bail, Context};
use clap::Parser;
use wordle_guesser::wordle::*;

#[derive(Parser)]
#[command(name = "wordle-guesser", about = "Guesses the hidden word one round at a time", version)]
struct Cli {
    /// A word length (you report results for a real puzzle) or a target word (self-play).
    /// Defaults to interactive mode with 6 letter words.
    target_or_length: Option<String>,

    /// Word list with one word per line (defaults to the bundled list)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Maximum number of rounds
    #[arg(short, long, default_value_t = DEFAULT_GUESS_BUDGET)]
    budget: usize,

    /// Seed for picking among candidates, to replay a session
    #[arg(long)]
    seed: Option<u64>,

    /// Your own opening guess instead of the solver's
    #[arg(long)]
    first_guess: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

enum Mode {
    Interactive { word_length: usize },
    SelfPlay { target: String },
}

impl Cli {
    fn mode(&self) -> anyhow::Result<Mode> {
        let Some(raw) = self.target_or_length.as_deref() else {
            return Ok(Mode::Interactive { word_length: DEFAULT_WORD_LENGTH });
        };

        if let Ok(word_length) = raw.parse::<usize>() {
            if word_length == 0 {
                bail!("word length must be at least 1");
            }
            return Ok(Mode::Interactive { word_length });
        }

        let target = normalize_word(raw);
        if !is_word(&target) {
            bail!("'{}' is neither a word length nor a word", raw);
        }

        Ok(Mode::SelfPlay { target })
    }
}

fn init_logger(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn load_dictionary(cli: &Cli) -> anyhow::Result<Dictionary> {
    let start_at = Instant::now();
    let dictionary = match &cli.dictionary {
        Some(path) => Dictionary::from_path(path)
            .with_context(|| format!("failed to load dictionary {}", path.display()))?,
        None => Dictionary::bundled().context("failed to load bundled dictionary")?,
    };
    log::debug!("dictionary loaded in {:.02}s", start_at.elapsed().as_secs_f64());

    Ok(dictionary)
}

fn run(cli: Cli) -> anyhow::Result<SessionOutcome> {
    let mode = cli.mode()?;
    let dictionary = load_dictionary(&cli)?;

    let word_length = match &mode {
        Mode::Interactive { word_length } => *word_length,
        Mode::SelfPlay { target } => target.len(),
    };

    if let Mode::SelfPlay { target } = &mode {
        if !dictionary.contains(target) {
            log::warn!("'{}' is not in the dictionary, the solver can't find it", target);
        }
    }

    let config = SessionConfig {
        word_length,
        guess_budget: cli.budget,
        seed: cli.seed,
        first_guess: cli.first_guess.clone(),
    };
    let mut session = Session::new(&dictionary, config);
    log::info!("{} candidate words of length {}", session.guesser().num_candidates(), word_length);

    let mut oracle: Box<dyn Oracle> = match mode {
        Mode::Interactive { word_length } => {
            println!("{}", legend());
            Box::new(HumanOracle::stdio(word_length))
        }
        Mode::SelfPlay { target } => Box::new(TargetOracle::new(&target)),
    };

    let outcome = session.run(oracle.as_mut(), |round| {
        println!("{}", render_round(&round.guess, &round.outcomes));
        log::debug!(
            "round {}: {} candidates remain",
            round.number,
            round.remaining_candidates,
        );
    })?;

    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&cli);

    match run(cli) {
        Ok(SessionOutcome::Solved { answer, rounds }) => {
            println!("the answer is: {} ({} guesses)", console::style(answer).bold(), rounds);
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::CandidatesExhausted { rounds }) => {
            eprintln!("ran out of words to guess after {} rounds", rounds);
            ExitCode::FAILURE
        }
        Ok(SessionOutcome::BudgetExhausted { rounds }) => {
            eprintln!("no answer found within {} guesses", rounds);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
