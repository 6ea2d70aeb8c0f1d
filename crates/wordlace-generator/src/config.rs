//! Generation settings.

use serde::{Deserialize, Serialize};
use wordlace_core::{LetterFolding, Orientation};

use crate::{Difficulty, PuzzleSeed};

/// Number of words used when the caller does not ask for a specific count.
pub const DEFAULT_WORD_CAP: usize = 30;

/// The two puzzle variants.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleKind {
    /// Words hidden among filler letters, in four orientations.
    #[default]
    #[display("word-search")]
    WordSearch,
    /// Crossword-style grid where each word hangs off exactly one earlier word.
    #[display("fill-in")]
    FillIn,
}

impl PuzzleKind {
    /// Returns the orientations words may take.
    #[must_use]
    pub fn orientations(self) -> &'static [Orientation] {
        match self {
            Self::WordSearch => &Orientation::WORD_SEARCH,
            Self::FillIn => &Orientation::FILL_IN,
        }
    }

    /// Returns how many distinct orientations a puzzle of `word_count` words needs.
    ///
    /// Word search asks for all four orientations as soon as four words are
    /// placed. Fill-in asks for both as soon as two words are placed.
    #[must_use]
    pub fn required_orientations(self, word_count: usize) -> usize {
        let all = self.orientations().len();
        if word_count >= all { all } else { 1 }
    }
}

/// Retry bounds of the placement engine.
///
/// Every loop of the engine is bounded by one of these values, so generation
/// always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Ordering attempts per word set before the longest word is dropped.
    pub puzzle_tries: usize,
    /// Position attempts per word in a word-search puzzle.
    pub word_search_tries: usize,
    /// Position attempts per word in a fill-in puzzle, per grid cell.
    pub fill_in_tries_factor: usize,
    /// Draws per sampled word before the sampler gives up on that pick.
    pub sample_tries: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            puzzle_tries: 100,
            word_search_tries: 100,
            fill_in_tries_factor: 5,
            sample_tries: 100,
        }
    }
}

impl GenerationLimits {
    /// Returns the position attempts per word for `kind` on a `rows × columns` grid.
    #[must_use]
    pub fn word_tries(&self, kind: PuzzleKind, rows: usize, columns: usize) -> usize {
        match kind {
            PuzzleKind::WordSearch => self.word_search_tries,
            PuzzleKind::FillIn => self.fill_in_tries_factor * rows * columns,
        }
    }
}

/// Error returned by [`PuzzleConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfigError {
    /// The grid has no cells.
    #[display("grid dimensions must be positive (got {rows}x{columns})")]
    EmptyGrid {
        /// Configured rows.
        rows: usize,
        /// Configured columns.
        columns: usize,
    },
    /// A word search needs at least one filler letter.
    #[display("filler alphabet must not be empty")]
    EmptyFillerAlphabet,
}

/// Settings of a generation run.
///
/// Field names deserialize in kebab-case and every field is optional, so a
/// pipeline can load a partial configuration and rely on the defaults.
///
/// # Examples
///
/// ```
/// use wordlace_generator::{Difficulty, PuzzleConfig, PuzzleKind};
///
/// let config = PuzzleConfig {
///     kind: PuzzleKind::FillIn,
///     difficulty: Difficulty::Easy,
///     ..PuzzleConfig::default()
/// };
/// assert_eq!((config.rows, config.columns), (15, 15));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PuzzleConfig {
    /// Puzzle variant.
    pub kind: PuzzleKind,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub columns: usize,
    /// Words to sample from the input; `0` uses all of them up to
    /// [`DEFAULT_WORD_CAP`].
    pub number_of_words: usize,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Letters used to fill empty word-search cells.
    pub filler_alphabet: String,
    /// Accented letters kept as-is during normalization.
    pub preserved_letters: Vec<char>,
    /// Fixed seed; a random one is drawn when unset.
    pub seed: Option<PuzzleSeed>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            kind: PuzzleKind::default(),
            rows: 15,
            columns: 15,
            number_of_words: 0,
            difficulty: Difficulty::default(),
            filler_alphabet: ('A'..='Z').collect(),
            preserved_letters: LetterFolding::DEFAULT_PRESERVED.to_vec(),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Checks the settings that would make generation meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigError::EmptyGrid`] if either dimension is zero.
    /// Returns [`InvalidConfigError::EmptyFillerAlphabet`] for a word search
    /// without filler letters.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(InvalidConfigError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.kind == PuzzleKind::WordSearch && self.filler_alphabet.trim().is_empty() {
            return Err(InvalidConfigError::EmptyFillerAlphabet);
        }
        Ok(())
    }

    /// Returns the folding rules built from [`PuzzleConfig::preserved_letters`].
    #[must_use]
    pub fn letter_folding(&self) -> LetterFolding {
        LetterFolding::new(self.preserved_letters.iter().copied())
    }

    /// Returns the filler letters, without whitespace.
    #[must_use]
    pub fn filler_letters(&self) -> Vec<char> {
        self.filler_alphabet
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(PuzzleConfig::default().validate(), Ok(()));

        let config = PuzzleConfig {
            rows: 0,
            ..PuzzleConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InvalidConfigError::EmptyGrid {
                rows: 0,
                columns: 15
            })
        );

        let config = PuzzleConfig {
            filler_alphabet: " ".to_owned(),
            ..PuzzleConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InvalidConfigError::EmptyFillerAlphabet)
        );

        // Fill-in puzzles never use filler letters.
        let config = PuzzleConfig {
            kind: PuzzleKind::FillIn,
            filler_alphabet: String::new(),
            ..PuzzleConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_word_tries() {
        let limits = GenerationLimits::default();
        assert_eq!(limits.word_tries(PuzzleKind::WordSearch, 15, 15), 100);
        assert_eq!(limits.word_tries(PuzzleKind::FillIn, 15, 15), 1125);
    }

    #[test]
    fn test_required_orientations() {
        assert_eq!(PuzzleKind::WordSearch.required_orientations(3), 1);
        assert_eq!(PuzzleKind::WordSearch.required_orientations(4), 4);
        assert_eq!(PuzzleKind::FillIn.required_orientations(1), 1);
        assert_eq!(PuzzleKind::FillIn.required_orientations(2), 2);
    }

    #[test]
    fn test_filler_letters() {
        let config = PuzzleConfig {
            filler_alphabet: "A B\tC".to_owned(),
            ..PuzzleConfig::default()
        };
        assert_eq!(config.filler_letters(), ['A', 'B', 'C']);
        assert_eq!(PuzzleConfig::default().filler_letters().len(), 26);
    }
}
