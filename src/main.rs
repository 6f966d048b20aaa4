//! Guessing Games - CLI
//!
//! Mastermind and Wheel of Fortune at the terminal, with automated players
//! and a score report shared across every game of the run.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guessing_games::{
    commands::{
        Arcade, play_code_breaker, play_strategy, run_mastermind, run_menu, run_tournament,
        run_wheel, show_report,
    },
    config::{GameConfig, MastermindRules, WheelRules},
    core::SecretPhrase,
    output::{EventPrinter, print_tournament},
    phrases::{PHRASES, loader::phrases_from_slice},
    players::Prompter,
    session::SessionEvent,
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guessing_games",
    about = "Mastermind and Wheel of Fortune with shared score records",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors in a Mastermind code
    #[arg(long, global = true, default_value = "4")]
    code_length: usize,

    /// Mastermind attempts per round
    #[arg(short, long, global = true, default_value = "10")]
    attempts: u32,

    /// Allow repeated colors in Mastermind secrets
    #[arg(long, global = true)]
    duplicates: bool,

    /// Wrong answers allowed per Wheel of Fortune round (default: 5 human, 10 automated)
    #[arg(long, global = true)]
    wrong_answers: Option<u32>,

    /// Phrase list: 'all' (default, embedded list) or path to a file
    #[arg(short, long, global = true, default_value = "all")]
    phrases: String,

    /// Number of best games listed in reports
    #[arg(short, long, global = true, default_value = "3")]
    top: usize,

    /// Seed for reproducible secrets and automated players
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Play Mastermind as a human or watch an automated code breaker
    Mastermind {
        /// Who guesses: human, random or consistent
        #[arg(long, default_value = "human")]
        player: String,

        /// Rounds an automated code breaker plays
        #[arg(short = 'n', long, default_value = "10")]
        rounds: u32,
    },

    /// Play Wheel of Fortune as a human or watch an automated player
    Wheel {
        /// Who guesses: human, random, vowel or common
        #[arg(long, default_value = "human")]
        player: String,
    },

    /// Every automated letter strategy plays the whole phrase list
    Tournament,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        let wheel = |fallback: WheelRules| {
            self.wrong_answers
                .map_or(fallback, |budget| WheelRules {
                    wrong_answer_budget: budget,
                })
        };

        GameConfig {
            mastermind: MastermindRules {
                code_length: self.code_length,
                max_attempts: self.attempts,
                allow_duplicates: self.duplicates,
            },
            human_wheel: wheel(defaults.human_wheel),
            automated_wheel: wheel(defaults.automated_wheel),
            top_n: self.top,
            seed: self.seed,
        }
    }
}

/// Logs go to stderr so they never mix with the game on stdout
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load phrases based on the -p flag
///
/// - "all": the embedded list
/// - "<path>": one phrase per line; unusable lines are skipped
fn load_phrases(mode: &str) -> Result<Vec<SecretPhrase>> {
    use guessing_games::phrases::loader::load_from_file;

    match mode {
        "all" => Ok(phrases_from_slice(PHRASES)),
        path => {
            let phrases = load_from_file(path)?;
            tracing::info!(path, count = phrases.len(), "loaded phrase file");
            Ok(phrases)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let phrases = load_phrases(&cli.phrases)?;
    let mut arcade = Arcade::new(cli.config(), phrases)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    // Default to the menu if no command given
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => return run_menu(&mut arcade, &mut prompter),
        Commands::Mastermind { player, .. } if player == "human" => {
            run_mastermind(&mut arcade, &mut prompter)?;
        }
        Commands::Mastermind { player, rounds } => {
            let mut printer = EventPrinter::new();
            let entry = play_code_breaker(
                &mut arcade,
                &player,
                rounds,
                &mut |event: &SessionEvent| printer.show(event),
            )?;
            print_tournament(std::slice::from_ref(&entry));
        }
        Commands::Wheel { player } if player == "human" => {
            run_wheel(&mut arcade, &mut prompter)?;
        }
        Commands::Wheel { player } => {
            let mut printer = EventPrinter::new();
            let entry = play_strategy(
                &mut arcade,
                &player,
                &mut |event: &SessionEvent| printer.show(event),
            )?;
            print_tournament(std::slice::from_ref(&entry));
        }
        Commands::Tournament => {
            let entries = run_tournament(&mut arcade)?;
            print_tournament(&entries);
        }
    }

    show_report(&arcade);
    Ok(())
}
