//! Round state machine
//!
//! A round holds the secret, the letter grid and the feedback of every
//! submitted row. It only changes through [`Round::apply`], which takes one
//! [`Input`] at a time:
//!
//! - `Entering(row, col)`: letters fill the current row, delete clears the
//!   last one, submit scores a full row
//! - a scored row either wins, loses (last row), or moves to `Entering(row + 1, 0)`
//! - `Won` and `Lost` are terminal; every later input is ignored

use super::Input;
use crate::config::{COLS, ROWS};
use crate::core::{KeyboardState, LetterStatus, Score, Word};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::fmt;

/// Where the round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Won,
    Lost,
}

/// What an accepted input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Input had no effect (invalid character, full row, empty row, finished round)
    Ignored,
    Typed { row: usize, col: usize, letter: char },
    Erased { row: usize, col: usize },
    /// Row scored without ending the round
    Scored { row: usize, score: Score },
    Won { row: usize, score: Score },
    Lost { row: usize, score: Score, secret: Word },
}

/// Rejected submission; the round is left unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Submit before all five letters were entered
    IncompleteRow { filled: usize },
    /// Submitted word is not in the dictionary
    NotInDictionary(Word),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow { .. } => write!(f, "Need a 5-letter word."),
            Self::NotInDictionary(_) => write!(f, "Not in the word list."),
        }
    }
}

impl std::error::Error for RoundError {}

/// Read-only view of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    /// Set once the cell's row has been scored
    pub status: Option<LetterStatus>,
}

/// One play-through from secret selection to win or loss
#[derive(Debug, Clone)]
pub struct Round<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    grid: [[Option<u8>; COLS]; ROWS],
    scores: Vec<Score>,
    keyboard: KeyboardState,
    row: usize,
    col: usize,
    phase: Phase,
}

impl<'a> Round<'a> {
    /// Start a round with a secret picked at random from `dictionary`
    #[must_use]
    pub fn new<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        Self::with_secret(dictionary, dictionary.pick_secret(rng))
    }

    /// Start a round with a known secret
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Input, Phase, Round};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// let mut round = Round::with_secret(&dictionary, Word::new("crane").unwrap());
    ///
    /// for input in Input::for_word("crane") {
    ///     round.apply(input).unwrap();
    /// }
    /// assert_eq!(round.phase(), Phase::Won);
    /// ```
    #[must_use]
    pub fn with_secret(dictionary: &'a Dictionary, secret: Word) -> Self {
        log::debug!("New round ({} words in dictionary)", dictionary.len());
        Self {
            dictionary,
            secret,
            grid: [[None; COLS]; ROWS],
            scores: Vec::with_capacity(ROWS),
            keyboard: KeyboardState::new(),
            row: 0,
            col: 0,
            phase: Phase::Entering,
        }
    }

    /// Replacement round over the same dictionary with a fresh secret
    ///
    /// Grid, scores and keyboard all start empty again.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.dictionary, rng)
    }

    /// Apply one input
    ///
    /// # Errors
    /// Returns `RoundError` when a submission is rejected. The round is not
    /// modified in that case.
    pub fn apply(&mut self, input: Input) -> Result<Event, RoundError> {
        if self.is_finished() {
            return Ok(Event::Ignored);
        }

        match input {
            Input::Letter(c) => Ok(self.type_letter(c)),
            Input::Delete => Ok(self.erase()),
            Input::Submit => self.submit(),
        }
    }

    fn type_letter(&mut self, c: char) -> Event {
        if !c.is_ascii_alphabetic() || self.col >= COLS {
            return Event::Ignored;
        }

        let letter = c.to_ascii_uppercase();
        let (row, col) = (self.row, self.col);
        // ASCII checked above
        self.grid[row][col] = Some(letter as u8);
        self.col += 1;
        Event::Typed { row, col, letter }
    }

    fn erase(&mut self) -> Event {
        if self.col == 0 {
            return Event::Ignored;
        }

        self.col -= 1;
        self.grid[self.row][self.col] = None;
        Event::Erased {
            row: self.row,
            col: self.col,
        }
    }

    fn submit(&mut self) -> Result<Event, RoundError> {
        if self.col < COLS {
            return Err(RoundError::IncompleteRow { filled: self.col });
        }

        let Some(guess) = self.current_guess() else {
            return Ok(Event::Ignored);
        };

        if !self.dictionary.contains(guess) {
            log::debug!("Rejected {guess}: not in dictionary");
            return Err(RoundError::NotInDictionary(guess));
        }

        let row = self.row;
        let score = Score::calculate(guess, self.secret);
        self.scores.push(score);
        self.keyboard.record(guess, score);

        if score.is_perfect() {
            self.phase = Phase::Won;
            log::debug!("Round won on row {}", row + 1);
            return Ok(Event::Won { row, score });
        }

        if row == ROWS - 1 {
            self.phase = Phase::Lost;
            log::debug!("Round lost; secret was {}", self.secret);
            return Ok(Event::Lost {
                row,
                score,
                secret: self.secret,
            });
        }

        self.row += 1;
        self.col = 0;
        Ok(Event::Scored { row, score })
    }

    fn current_guess(&self) -> Option<Word> {
        let mut letters = [0u8; COLS];
        for (slot, cell) in letters.iter_mut().zip(&self.grid[self.row]) {
            *slot = (*cell)?;
        }
        Word::from_letters(letters).ok()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase != Phase::Entering
    }

    /// The hidden target; front ends should only show it once the round is over
    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    /// Current `(row, col)` cursor
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Number of scored rows
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Submitted guesses paired with their scores, oldest first
    pub fn guesses(&self) -> impl Iterator<Item = (Word, Score)> + '_ {
        self.grid
            .iter()
            .zip(&self.scores)
            .filter_map(|(cells, score)| {
                let letters: [u8; COLS] = std::array::from_fn(|i| cells[i].unwrap_or(b'?'));
                Word::from_letters(letters).ok().map(|w| (w, *score))
            })
    }

    /// # Panics
    /// Panics if `row >= ROWS` or `col >= COLS`
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell {
            letter: self.grid[row][col].map(char::from),
            status: self.scores.get(row).map(|s| s.status_at(col)),
        }
    }
}

/// Pure form of [`Round::apply`]: returns the next round and the outcome
///
/// The input round is left untouched.
pub fn apply_input<'a>(round: &Round<'a>, input: Input) -> (Round<'a>, Result<Event, RoundError>) {
    let mut next = round.clone();
    let outcome = next.apply(input);
    (next, outcome)
}
