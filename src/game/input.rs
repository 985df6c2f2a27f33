//! Discrete input events accepted by a round

use crate::config::{DELETE_KEY, ENTER_KEY};

/// One input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A typed character; anything outside `A`-`Z` (either case) is ignored
    Letter(char),
    /// Remove the last letter of the current row
    Delete,
    /// Submit the current row
    Submit,
}

impl Input {
    /// Map a key name to an input
    ///
    /// Accepts single letters, the on-screen labels `ENTER`/`DEL`, and the
    /// browser-style names `Enter`/`Backspace`. Other keys map to `None`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Input;
    ///
    /// assert_eq!(Input::from_key("q"), Some(Input::Letter('Q')));
    /// assert_eq!(Input::from_key("Backspace"), Some(Input::Delete));
    /// assert_eq!(Input::from_key("ENTER"), Some(Input::Submit));
    /// assert_eq!(Input::from_key("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c
                .is_ascii_alphabetic()
                .then(|| Self::Letter(c.to_ascii_uppercase()));
        }

        if key.eq_ignore_ascii_case(ENTER_KEY) {
            Some(Self::Submit)
        } else if key.eq_ignore_ascii_case(DELETE_KEY) || key.eq_ignore_ascii_case("Backspace") {
            Some(Self::Delete)
        } else {
            None
        }
    }

    /// Inputs that type `word` and submit it
    pub fn for_word(word: &str) -> impl Iterator<Item = Self> + '_ {
        word.chars()
            .map(Self::Letter)
            .chain(std::iter::once(Self::Submit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(Input::from_key("a"), Some(Input::Letter('A')));
        assert_eq!(Input::from_key("Z"), Some(Input::Letter('Z')));
    }

    #[test]
    fn non_letters_are_not_inputs() {
        assert_eq!(Input::from_key("1"), None);
        assert_eq!(Input::from_key(" "), None);
        assert_eq!(Input::from_key("é"), None);
        assert_eq!(Input::from_key(""), None);
        assert_eq!(Input::from_key("Tab"), None);
    }

    #[test]
    fn control_keys() {
        assert_eq!(Input::from_key("Enter"), Some(Input::Submit));
        assert_eq!(Input::from_key("DEL"), Some(Input::Delete));
        assert_eq!(Input::from_key("backspace"), Some(Input::Delete));
    }

    #[test]
    fn for_word_ends_with_submit() {
        let inputs: Vec<Input> = Input::for_word("ab").collect();
        assert_eq!(
            inputs,
            [Input::Letter('a'), Input::Letter('b'), Input::Submit]
        );
    }
}
