//! A sequence of rounds sharing a random source, a message bar and statistics

use super::{Event, Input, Phase, Round, RoundError};
use crate::config::{MESSAGE_TTL, RESULT_MESSAGE_TTL, ROWS};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::time::{Duration, Instant};

/// Message tone, used for colouring and auto-hide timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Win,
    Lose,
}

impl Tone {
    /// How long a message of this tone stays visible
    #[must_use]
    pub const fn ttl(self) -> Duration {
        match self {
            Self::Win | Self::Lose => RESULT_MESSAGE_TTL,
            Self::Info | Self::Warn => MESSAGE_TTL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
    posted: Instant,
}

impl Message {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            posted: Instant::now(),
        }
    }

    /// Whether the message should still be shown at `now`
    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted) < self.tone.ttl()
    }
}

/// Results across the rounds of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of guesses; index 0 is a first-guess win
    pub distribution: [usize; ROWS],
}

impl Statistics {
    /// Count a finished round
    pub fn record(&mut self, phase: Phase, attempts: usize) {
        match phase {
            Phase::Entering => return,
            Phase::Won => {
                self.won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            Phase::Lost => self.current_streak = 0,
        }
        self.played += 1;
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

/// Game session: the current round plus everything that outlives it
pub struct Session<'a, R: Rng> {
    rng: R,
    round: Round<'a>,
    message: Message,
    stats: Statistics,
}

impl<'a, R: Rng> Session<'a, R> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut rng: R) -> Self {
        let round = Round::new(dictionary, &mut rng);
        Self {
            rng,
            round,
            message: Message::new("Type or tap to guess the 5-letter word.", Tone::Info),
            stats: Statistics::default(),
        }
    }

    /// Feed one input to the current round and update the message bar
    ///
    /// # Errors
    /// Passes through the round's `RoundError`; the message bar shows it as a warning.
    pub fn handle(&mut self, input: Input) -> Result<Event, RoundError> {
        let outcome = self.round.apply(input);

        match &outcome {
            Err(e) => self.message = Message::new(e.to_string(), Tone::Warn),
            Ok(Event::Scored { .. }) => {
                self.message = Message::new("Nice try. Keep going.", Tone::Info);
            }
            Ok(Event::Won { row, .. }) => {
                self.message = Message::new(
                    format!("You solved it in {}/{ROWS}!", row + 1),
                    Tone::Win,
                );
                self.stats.record(Phase::Won, row + 1);
            }
            Ok(Event::Lost { secret, row, .. }) => {
                self.message =
                    Message::new(format!("Out of tries. The word was {secret}."), Tone::Lose);
                self.stats.record(Phase::Lost, row + 1);
            }
            Ok(Event::Ignored | Event::Typed { .. } | Event::Erased { .. }) => {}
        }

        outcome
    }

    /// Replace the current round with a fresh one
    ///
    /// Grid, scores and keyboard reset together since they all live in the round.
    pub fn reset(&mut self) {
        self.round = self.round.reset(&mut self.rng);
        self.message = Message::new("New word loaded. Start guessing!", Tone::Info);
        log::info!("Round reset");
    }

    #[must_use]
    pub const fn round(&self) -> &Round<'a> {
        &self.round
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// The message if its auto-hide timer has not expired
    #[must_use]
    pub fn visible_message(&self, now: Instant) -> Option<&Message> {
        self.message.is_visible_at(now).then_some(&self.message)
    }
}
