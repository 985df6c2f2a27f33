//! Fixed game constants
//!
//! Board geometry, presentation timings and the on-screen keyboard layout.

use std::time::Duration;

/// Attempts per round
pub const ROWS: usize = 6;
/// Letters per guess
pub const COLS: usize = crate::core::WORD_LEN;

/// Delay between revealing consecutive cells of a submitted row
pub const REVEAL_DELAY: Duration = Duration::from_millis(130);
/// Extra pause after the last cell before the keyboard catches up
pub const REVEAL_SETTLE: Duration = Duration::from_millis(80);
/// How long a pressed key stays highlighted
pub const KEY_FLASH: Duration = Duration::from_millis(120);

/// Message lifetime for info and warning messages
pub const MESSAGE_TTL: Duration = Duration::from_millis(2600);
/// Message lifetime for win and loss messages
pub const RESULT_MESSAGE_TTL: Duration = Duration::from_millis(4200);

/// Event poll interval for the terminal UI; bounds animation frame time
pub const TICK: Duration = Duration::from_millis(30);

/// Label of the submit key
pub const ENTER_KEY: &str = "ENTER";
/// Label of the delete key
pub const DELETE_KEY: &str = "DEL";

/// On-screen keyboard rows
pub const KEY_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &[ENTER_KEY, "Z", "X", "C", "V", "B", "N", "M", DELETE_KEY],
];

/// Total time for a row reveal, from submit until the keyboard updates
#[must_use]
pub fn reveal_duration() -> Duration {
    REVEAL_DELAY * COLS as u32 + REVEAL_SETTLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_covers_alphabet_once() {
        let mut letters: Vec<&str> = KEY_ROWS
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|k| k.len() == 1)
            .collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn reveal_takes_five_cells_plus_settle() {
        assert_eq!(reveal_duration(), Duration::from_millis(730));
    }
}
