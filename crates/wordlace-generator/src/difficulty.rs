//! Difficulty profiles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How words may be written backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReversePolicy {
    /// Words are always read in the canonical direction.
    Never,
    /// Each placement tosses a coin.
    Random,
    /// Words are always written backwards.
    Always,
}

/// Generation parameters bundled under a difficulty name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Shortest word accepted when sampling a subset.
    pub min_length: usize,
    /// Longest word accepted when sampling a subset.
    pub max_length: usize,
    /// Reversal policy for placed words.
    pub reverse: ReversePolicy,
    /// Share of crossings revealed as hints in fill-in puzzles, in percent.
    pub hint_percentage: usize,
}

impl DifficultyProfile {
    /// Returns `true` if a word of `len` letters respects the length bounds.
    #[must_use]
    pub fn accepts_length(&self, len: usize) -> bool {
        (self.min_length..=self.max_length).contains(&len)
    }
}

/// Named difficulty levels.
///
/// # Examples
///
/// ```
/// use wordlace_generator::{Difficulty, ReversePolicy};
///
/// let difficulty: Difficulty = "hard".parse()?;
/// assert_eq!(difficulty.profile().reverse, ReversePolicy::Random);
/// assert!("impossible".parse::<Difficulty>().is_err());
/// # Ok::<(), wordlace_generator::ParseDifficultyError>(())
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Short words, never reversed, many hints.
    #[display("easy")]
    Easy,
    /// The default level.
    #[default]
    #[display("medium")]
    Medium,
    /// Longer words, fewer hints.
    #[display("hard")]
    Hard,
    /// Long words, always reversed, few hints.
    #[display("expert")]
    Expert,
}

impl Difficulty {
    /// All levels from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the parameters of this level.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                min_length: 3,
                max_length: 8,
                reverse: ReversePolicy::Never,
                hint_percentage: 50,
            },
            Self::Medium => DifficultyProfile {
                min_length: 3,
                max_length: 10,
                reverse: ReversePolicy::Random,
                hint_percentage: 35,
            },
            Self::Hard => DifficultyProfile {
                min_length: 4,
                max_length: 12,
                reverse: ReversePolicy::Random,
                hint_percentage: 20,
            },
            Self::Expert => DifficultyProfile {
                min_length: 5,
                max_length: 15,
                reverse: ReversePolicy::Always,
                hint_percentage: 10,
            },
        }
    }
}

/// Error returned when a difficulty key is unknown.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty `{key}` (expected one of: easy, medium, hard, expert)")]
pub struct ParseDifficultyError {
    key: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError { key: s.to_owned() })
    }
}
