//! Guess scoring
//!
//! A score is the per-position feedback for one guess against one secret.

use super::word::WORD_LEN;
use super::{LetterStatus, Word};
use std::fmt;

/// Feedback for a submitted guess, one status per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([LetterStatus; WORD_LEN]);

impl Score {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LEN]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret
    /// 2. First pass: mark exact matches correct and consume their letter
    /// 3. Second pass: mark remaining positions present while unconsumed
    ///    copies of the letter are left, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterStatus::*, Score, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let score = Score::calculate(guess, secret);
    ///
    /// assert_eq!(score.statuses(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: Word, secret: Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LEN];
        let mut remaining = secret.letter_counts();

        for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (status, letter) in statuses.iter_mut().zip(guess.letters()) {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.0
    }

    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(self, position: usize) -> LetterStatus {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Parse a score from notation like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Score;
    ///
    /// let a = Score::parse("GY-GY").unwrap();
    /// let b = Score::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Score::parse("GYG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut statuses = [LetterStatus::Absent; WORD_LEN];
        let mut chars = s.trim().chars();

        for slot in &mut statuses {
            *slot = LetterStatus::from_symbol(chars.next()?)?;
        }

        chars.next().is_none().then_some(Self(statuses))
    }

    /// Render as a row of coloured squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().copied().map(LetterStatus::emoji).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn score(guess: &str, secret: &str) -> Score {
        Score::calculate(Word::new(guess).unwrap(), Word::new(secret).unwrap())
    }

    fn random_word(rng: &mut StdRng) -> Word {
        // Small alphabet so duplicate letters are common
        let letters = [0u8; WORD_LEN].map(|_| b'A' + rng.random_range(0..6u8));
        Word::from_letters(letters).unwrap()
    }

    #[test]
    fn trace_against_crane() {
        assert_eq!(
            score("trace", "crane").statuses(),
            &[Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn speed_against_erase_uses_both_secret_es() {
        // ERASE has two E's, neither at positions 2 or 3, so both guessed E's are present
        let s = score("speed", "erase");
        assert_eq!(s.statuses(), &[Present, Absent, Present, Present, Absent]);
        assert_eq!(s.count(Present), 3);
    }

    #[test]
    fn correct_takes_priority_over_present() {
        // ROBOT vs FLOOR: second O is in place, first O still finds the other O
        assert_eq!(
            score("robot", "floor").statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn extra_guess_copies_are_absent() {
        // Only one E in CRANE; the exact match consumes it first
        assert_eq!(
            score("geese", "crane").statuses(),
            &[Absent, Absent, Absent, Absent, Correct]
        );
        // One L in ALOFT, three in LOLLY
        assert_eq!(
            score("lolly", "aloft").statuses(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn identical_words_are_perfect() {
        for word in ["crane", "aaaaa", "erase", "floor"] {
            assert!(score(word, word).is_perfect());
        }
        assert_eq!(Score::PERFECT.count(Correct), 5);
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        let s = score("abcde", "fghij");
        assert_eq!(s.count(Absent), 5);
        assert!(!s.is_perfect());
    }

    #[test]
    fn correct_iff_same_letter_in_place() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let guess = random_word(&mut rng);
            let secret = random_word(&mut rng);
            let s = Score::calculate(guess, secret);
            for i in 0..WORD_LEN {
                assert_eq!(
                    s.status_at(i) == Correct,
                    guess.letter_at(i) == secret.letter_at(i),
                    "{guess} vs {secret} at {i}"
                );
            }
        }
    }

    #[test]
    fn hits_never_exceed_secret_letter_count() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2_000 {
            let guess = random_word(&mut rng);
            let secret = random_word(&mut rng);
            let s = Score::calculate(guess, secret);
            for &letter in guess.letters() {
                let hits = guess
                    .letters()
                    .iter()
                    .zip(s.statuses())
                    .filter(|&(&l, &st)| l == letter && st != Absent)
                    .count();
                assert!(hits <= secret.occurrences(letter), "{guess} vs {secret}");
            }
        }
    }

    #[test]
    fn rescoring_is_stable() {
        let guess = Word::new("speed").unwrap();
        let secret = Word::new("erase").unwrap();
        assert_eq!(
            Score::calculate(guess, secret),
            Score::calculate(guess, secret)
        );
    }

    #[test]
    fn parse_and_display() {
        let s = Score::parse("gy-_G").unwrap();
        assert_eq!(s.statuses(), &[Correct, Present, Absent, Absent, Correct]);
        assert_eq!(s.to_string(), "GY--G");
        assert_eq!(s.to_emoji(), "🟩🟨⬜⬜🟩");

        assert!(Score::parse("GYGGYX").is_none());
        assert!(Score::parse("GXGGY").is_none());
        assert!(Score::parse("").is_none());
    }
}
