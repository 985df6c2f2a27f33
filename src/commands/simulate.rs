//! Self-play simulation
//!
//! Plays many rounds with an automatic player that picks a random
//! dictionary word consistent with all feedback so far. Every guess goes
//! through the round's input handling, so the simulation exercises the same
//! state machine as interactive play.

use crate::config::ROWS;
use crate::core::{Score, Word};
use crate::game::{Input, Phase, Round};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    /// Round `i` is seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: u64) -> Self {
        Self {
            rounds,
            seed,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub secret: Word,
    pub guesses: Vec<Word>,
    pub won: bool,
}

/// Aggregate over all simulated rounds
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub won: usize,
    /// Wins by number of guesses; index 0 is a first-guess win
    pub distribution: [usize; ROWS],
    pub average_guesses: f64,
    pub duration: Duration,
    /// Secrets that were not found, in round order
    pub missed: Vec<Word>,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Play one round to completion with the consistent-candidate player
#[must_use]
pub fn play_automatically<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> RoundOutcome {
    let mut round = Round::new(dictionary, rng);

    'play: while !round.is_finished() {
        let history: Vec<(Word, Score)> = round.guesses().collect();
        let candidates: Vec<&Word> = dictionary
            .words()
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|&(guess, score)| Score::calculate(guess, **candidate) == score)
            })
            .collect();

        // The secret is always consistent with its own feedback
        let Some(&&guess) = candidates.choose(rng) else {
            log::warn!("No consistent candidates for {}", round.secret());
            break;
        };

        for input in Input::for_word(guess.as_str()) {
            if let Err(e) = round.apply(input) {
                log::warn!("Simulated guess {guess} rejected: {e}");
                break 'play;
            }
        }
    }

    RoundOutcome {
        secret: round.secret(),
        guesses: round.guesses().map(|(word, _)| word).collect(),
        won: round.phase() == Phase::Won,
    }
}

/// Run the simulation on the rayon pool
pub fn run_simulation(dictionary: &Dictionary, config: &SimulationConfig) -> SimulationResult {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    log::info!(
        "Simulating {} rounds from seed {}",
        config.rounds,
        config.seed
    );
    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let outcome = play_automatically(dictionary, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&outcomes, start.elapsed())
}

fn summarize(outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let mut distribution = [0; ROWS];
    let mut total_guesses = 0;
    let mut missed = Vec::new();

    for outcome in outcomes {
        if outcome.won {
            total_guesses += outcome.guesses.len();
            if let Some(slot) = outcome
                .guesses
                .len()
                .checked_sub(1)
                .and_then(|i| distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            missed.push(outcome.secret);
        }
    }

    let won = outcomes.len() - missed.len();
    SimulationResult {
        rounds: outcomes.len(),
        won,
        distribution,
        average_guesses: if won > 0 {
            total_guesses as f64 / won as f64
        } else {
            0.0
        },
        duration,
        missed,
    }
}
