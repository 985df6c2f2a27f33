//! Wordle - CLI
//!
//! Play Wordle in a terminal UI or a line-based mode, score single guesses,
//! or run self-play simulations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use wordle_game::{
    commands::{SimulationConfig, run_simple, run_simulation, score_words},
    game::Session,
    interactive::{App, run_tui},
    log::init_logger,
    output::{print_score_result, print_simulation_result},
    wordlists::{Dictionary, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for secret selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Play many rounds automatically and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Info lines on stderr would tear the TUI unless they go to a file
    let default_level = match command {
        Commands::Play if cli.log_file.is_none() => LevelFilter::Warn,
        _ => LevelFilter::Info,
    };
    init_logger(cli.debug, default_level, cli.log_file.as_deref())?;

    let dictionary = load_dictionary(&cli.wordlist)?;
    log::info!("Loaded {} words from '{}'", dictionary.len(), cli.wordlist);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.seed),
        Commands::Simple => run_simple_command(&dictionary, cli.seed),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret, &dictionary),
        Commands::Simulate { count } => {
            run_simulate_command(&dictionary, count, cli.seed);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let app = App::new(dictionary, make_rng(seed));
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(dictionary, make_rng(seed));
    run_simple(&mut session)
}

fn run_score_command(guess: &str, secret: &str, dictionary: &Dictionary) -> Result<()> {
    let result = score_words(guess, secret, dictionary)?;
    print_score_result(&result);
    Ok(())
}

fn run_simulate_command(dictionary: &Dictionary, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    println!("Simulating {count} rounds (seed {seed})...");

    let result = run_simulation(dictionary, &SimulationConfig::new(count, seed));
    print_simulation_result(&result);
}
