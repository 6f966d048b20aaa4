//! Game rules and run configuration
//!
//! Defaults match the classic games: a four-color code with ten attempts and
//! no repeated colors, five wrong answers for a human Wheel of Fortune player
//! and ten for an automated one.

use crate::core::{Color, GameError};

/// Largest attempt or wrong-answer budget a round may have
pub const MAX_BUDGET: u32 = 100;

/// Longest Mastermind code a round may use
pub const MAX_CODE_LENGTH: usize = 20;

fn check_budget(name: &str, budget: u32) -> Result<(), GameError> {
    if budget == 0 {
        return Err(GameError::InvalidConfig(format!("{name} must be at least 1")));
    }
    if budget > MAX_BUDGET {
        return Err(GameError::InvalidConfig(format!(
            "{name} must be at most {MAX_BUDGET}, got {budget}"
        )));
    }
    Ok(())
}

/// Rules for one Mastermind round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MastermindRules {
    pub code_length: usize,
    pub max_attempts: u32,
    pub allow_duplicates: bool,
}

impl MastermindRules {
    /// Check that a secret can be generated and the game can be played
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a length or attempt count of zero or above
    /// its limit, or a code longer than the palette when duplicates are not
    /// allowed.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(GameError::InvalidConfig(format!(
                "code length must be between 1 and {MAX_CODE_LENGTH}, got {}",
                self.code_length
            )));
        }
        check_budget("attempts", self.max_attempts)?;
        if !self.allow_duplicates && self.code_length > Color::ALL.len() {
            return Err(GameError::InvalidConfig(format!(
                "a code of {} distinct colors needs duplicates (palette has {})",
                self.code_length,
                Color::ALL.len()
            )));
        }
        Ok(())
    }
}

impl Default for MastermindRules {
    fn default() -> Self {
        Self {
            code_length: 4,
            max_attempts: 10,
            allow_duplicates: false,
        }
    }
}

/// Rules for one Wheel of Fortune round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelRules {
    pub wrong_answer_budget: u32,
}

impl WheelRules {
    /// Default budget for a person at the keyboard
    pub const HUMAN: Self = Self {
        wrong_answer_budget: 5,
    };

    /// Default budget for an automated letter strategy
    pub const AUTOMATED: Self = Self {
        wrong_answer_budget: 10,
    };

    /// # Errors
    /// Returns `InvalidConfig` for a budget of zero or above [`MAX_BUDGET`].
    pub fn validate(&self) -> Result<(), GameError> {
        check_budget("wrong answer budget", self.wrong_answer_budget)
    }
}

/// Everything a run needs, assembled from command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mastermind: MastermindRules,
    pub human_wheel: WheelRules,
    pub automated_wheel: WheelRules,
    /// How many games the score report lists
    pub top_n: usize,
    /// Fixed RNG seed for reproducible secrets and automated players
    pub seed: Option<u64>,
}

impl GameConfig {
    /// # Errors
    /// Returns the first rule set that fails validation.
    pub fn validate(&self) -> Result<(), GameError> {
        self.mastermind.validate()?;
        self.human_wheel.validate()?;
        self.automated_wheel.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mastermind: MastermindRules::default(),
            human_wheel: WheelRules::HUMAN,
            automated_wheel: WheelRules::AUTOMATED,
            top_n: 3,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mastermind.code_length, 4);
        assert_eq!(config.mastermind.max_attempts, 10);
        assert!(!config.mastermind.allow_duplicates);
        assert_eq!(config.human_wheel.wrong_answer_budget, 5);
        assert_eq!(config.automated_wheel.wrong_answer_budget, 10);
    }

    #[test]
    fn long_code_needs_duplicates() {
        let mut rules = MastermindRules {
            code_length: 7,
            ..MastermindRules::default()
        };
        assert!(matches!(rules.validate(), Err(GameError::InvalidConfig(_))));

        rules.allow_duplicates = true;
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn zero_values_rejected() {
        let rules = MastermindRules {
            code_length: 0,
            ..MastermindRules::default()
        };
        assert!(rules.validate().is_err());

        let rules = MastermindRules {
            max_attempts: 0,
            ..MastermindRules::default()
        };
        assert!(rules.validate().is_err());

        let wheel = WheelRules {
            wrong_answer_budget: 0,
        };
        assert!(wheel.validate().is_err());
    }

    #[test]
    fn budgets_are_capped() {
        let rules = MastermindRules {
            max_attempts: 500_000_000,
            ..MastermindRules::default()
        };
        assert!(matches!(rules.validate(), Err(GameError::InvalidConfig(_))));

        let rules = MastermindRules {
            max_attempts: MAX_BUDGET,
            ..MastermindRules::default()
        };
        assert!(rules.validate().is_ok());

        let wheel = WheelRules {
            wrong_answer_budget: u32::MAX,
        };
        assert!(matches!(wheel.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            human_wheel: WheelRules {
                wrong_answer_budget: MAX_BUDGET + 1,
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn code_length_is_capped() {
        let rules = MastermindRules {
            code_length: MAX_CODE_LENGTH + 1,
            allow_duplicates: true,
            ..MastermindRules::default()
        };
        assert!(matches!(rules.validate(), Err(GameError::InvalidConfig(_))));
    }
}
