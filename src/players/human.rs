//! Human player at a text terminal
//!
//! Prompts on the writer and reads one line per answer. Input is passed on
//! untouched apart from trimming; the session decides what is valid.

use super::GuessProducer;
use crate::core::GameError;
use crate::session::{ContinueDecider, Continuation, GuessContext, RoundView};
use std::io::{BufRead, Write};

/// Line-based prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// # Errors
    /// Returns `InputClosed` at end of input, or `Io` if reading or writing
    /// fails.
    pub fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; only "y" or "yes" count as yes
    ///
    /// # Errors
    /// Same as [`Prompter::ask`].
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, GameError> {
        let answer = self.ask(&format!("{prompt} (y/n)"))?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> GuessProducer for Prompter<R, W> {
    fn produce_guess(&mut self, context: &GuessContext<'_>) -> Result<String, GameError> {
        match context.view {
            RoundView::Code {
                palette,
                code_length,
                ..
            } => {
                let colors: Vec<String> = palette.iter().map(|c| c.symbol().to_string()).collect();
                self.ask(&format!(
                    "Enter a guess of {code_length} colors ({})",
                    colors.join(", ")
                ))
            }
            RoundView::Phrase {
                buffer, guessed, ..
            } => {
                let letters: String = guessed.letters().iter().collect();
                writeln!(self.output, "Already guessed: {letters}")?;
                writeln!(self.output, "{buffer}")?;
                self.ask("Guess a letter")
            }
        }
    }
}

impl<R: BufRead, W: Write> ContinueDecider for Prompter<R, W> {
    fn play_again(&mut self) -> Result<bool, GameError> {
        self.confirm("Would you like to play another game?")
    }

    fn continuation(&mut self) -> Result<Continuation, GameError> {
        // Anything but an explicit "n" keeps the current player
        let answer = self.ask("Continue as the same player? (y/n)")?.to_lowercase();
        Ok(if matches!(answer.as_str(), "n" | "no") {
            Continuation::NewPlayer
        } else {
            Continuation::SamePlayer
        })
    }
}
