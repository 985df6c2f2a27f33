//! Formatting utilities for terminal output

use crate::core::{KeyStatus, KeyboardState, LetterStatus, Score, Word};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile, e.g. ` A ` on green
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ").black().bold();
    match status {
        LetterStatus::Correct => text.on_green(),
        LetterStatus::Present => text.on_yellow(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn tile_row(guess: Word, score: Score) -> String {
    guess
        .letters()
        .iter()
        .zip(score.statuses())
        .map(|(&letter, &status)| tile(char::from(letter), status).to_string())
        .collect()
}

/// Keyboard summary: every letter coloured by its best status
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardState) -> String {
    keyboard
        .iter()
        .map(|(letter, status)| {
            let letter = char::from(letter).to_string();
            let key = match status {
                KeyStatus::Unused => letter.normal(),
                KeyStatus::Absent => letter.bright_black().strikethrough(),
                KeyStatus::Present => letter.yellow().bold(),
                KeyStatus::Correct => letter.green().bold(),
            };
            key.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_row_contains_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let row = tile_row(guess, Score::PERFECT);
        assert_eq!(row, " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_line_lists_alphabet() {
        colored::control::set_override(false);
        let line = keyboard_line(&KeyboardState::new());
        assert!(line.starts_with("A B C"));
        assert!(line.ends_with("X Y Z"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
