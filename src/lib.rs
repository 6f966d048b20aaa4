//! Guessing Games
//!
//! Mastermind and Wheel of Fortune with a shared, append-only score record.
//!
//! # Quick Start
//!
//! ```rust
//! use guessing_games::config::MastermindRules;
//! use guessing_games::core::{Code, PlayerIdentity};
//! use guessing_games::records::RecordStore;
//! use guessing_games::session::{RoundState, Session};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut ids = PlayerIdentity::new();
//! let mut store = RecordStore::new();
//! let secret = Code::parse("RGBY", 4).unwrap();
//! let mut session = Session::mastermind_with_secret(
//!     MastermindRules::default(),
//!     ids.next(),
//!     secret,
//!     StdRng::seed_from_u64(1),
//! )
//! .unwrap();
//!
//! let report = session.submit("GRYB", &mut store).unwrap();
//! println!("Feedback: {:?}", report.evaluation);
//!
//! let report = session.submit("RGBY", &mut store).unwrap();
//! assert_eq!(report.state, RoundState::Won { score: 80 });
//! assert_eq!(store.len(), 1);
//! ```

// Core domain types
pub mod core;

// Game rules and run settings
pub mod config;

// Score records and aggregates
pub mod records;

// Round state machine and driver
pub mod session;

// Human and automated guess producers
pub mod players;

// Phrase lists
pub mod phrases;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
