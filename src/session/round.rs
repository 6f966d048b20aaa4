//! Per-round state for each game variant
//!
//! Both variants expose the same capability: evaluate a raw guess, report
//! whether the round is won, and report the remaining budget. The session
//! picks the variant when it is built and never changes it.

use crate::config::{MastermindRules, WheelRules};
use crate::core::{Code, Color, Feedback, GameError, GuessHistory, RevealBuffer, SecretPhrase};

/// Result of one validated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Code { guess: Code, feedback: Feedback },
    Letter { letter: char, hit: bool },
}

/// Read-only view of the round handed to guess producers
#[derive(Debug, Clone, Copy)]
pub enum RoundView<'a> {
    Code {
        palette: &'a [Color],
        code_length: usize,
        attempts_left: u32,
        history: &'a [(Code, Feedback)],
    },
    Phrase {
        buffer: &'a RevealBuffer,
        guessed: &'a GuessHistory,
        wrong_answers_left: u32,
    },
}

/// Mastermind round: secret code and attempt budget
#[derive(Debug, Clone)]
pub struct CodeRound {
    secret: Code,
    attempts_left: u32,
    /// Set once the current turn has consumed an attempt
    turn_charged: bool,
    history: Vec<(Code, Feedback)>,
}

impl CodeRound {
    pub(crate) const fn new(secret: Code, rules: &MastermindRules) -> Self {
        Self {
            secret,
            attempts_left: rules.max_attempts,
            turn_charged: false,
            history: Vec::new(),
        }
    }

    /// Charge the turn, then validate and score the guess
    ///
    /// Every turn costs one attempt as soon as its first guess is submitted,
    /// valid or not. Invalid resubmissions within the same turn are free.
    pub(crate) fn evaluate(&mut self, raw: &str) -> Result<Evaluation, GameError> {
        if !self.turn_charged {
            self.attempts_left = self.attempts_left.saturating_sub(1);
            self.turn_charged = true;
        }

        let guess = Code::parse(raw, self.secret.len())?;
        let feedback = Feedback::score(&self.secret, &guess)?;

        self.turn_charged = false;
        self.history.push((guess.clone(), feedback));
        Ok(Evaluation::Code { guess, feedback })
    }

    pub(crate) fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_win(self.secret.len()))
    }

    pub(crate) const fn remaining(&self) -> u32 {
        self.attempts_left
    }

    pub(crate) fn secret(&self) -> &Code {
        &self.secret
    }

    pub(crate) fn view(&self) -> RoundView<'_> {
        RoundView::Code {
            palette: &Color::ALL,
            code_length: self.secret.len(),
            attempts_left: self.attempts_left,
            history: &self.history,
        }
    }
}

/// Wheel of Fortune round: phrase, reveal buffer, guessed letters, miss budget
#[derive(Debug, Clone)]
pub struct WheelRound {
    phrase: SecretPhrase,
    buffer: RevealBuffer,
    guessed: GuessHistory,
    wrong_answers_left: u32,
}

impl WheelRound {
    pub(crate) fn new(phrase: SecretPhrase, rules: &WheelRules) -> Self {
        let buffer = RevealBuffer::initial_mask(&phrase);
        Self {
            phrase,
            buffer,
            guessed: GuessHistory::new(),
            wrong_answers_left: rules.wrong_answer_budget,
        }
    }

    /// Validate the letter, reveal it, and charge the budget only on a miss
    pub(crate) fn evaluate(&mut self, raw: &str) -> Result<Evaluation, GameError> {
        let letter = self.guessed.accept(raw)?;
        let hit = self.buffer.apply_guess(&self.phrase, letter);
        if !hit {
            self.wrong_answers_left = self.wrong_answers_left.saturating_sub(1);
        }
        Ok(Evaluation::Letter { letter, hit })
    }

    pub(crate) fn is_won(&self) -> bool {
        self.buffer.is_solved(&self.phrase)
    }

    pub(crate) const fn remaining(&self) -> u32 {
        self.wrong_answers_left
    }

    pub(crate) const fn phrase(&self) -> &SecretPhrase {
        &self.phrase
    }

    pub(crate) const fn buffer(&self) -> &RevealBuffer {
        &self.buffer
    }

    pub(crate) fn view(&self) -> RoundView<'_> {
        RoundView::Phrase {
            buffer: &self.buffer,
            guessed: &self.guessed,
            wrong_answers_left: self.wrong_answers_left,
        }
    }
}
