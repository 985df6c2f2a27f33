//! Per-letter feedback classification

use std::fmt;

/// Feedback for a single letter of a submitted guess
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter does not occur (or all occurrences are already accounted for)
    Absent,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter is in the right position
    Correct,
}

impl LetterStatus {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character notation used by `Score` parsing: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
