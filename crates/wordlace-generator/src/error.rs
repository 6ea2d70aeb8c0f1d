//! Errors and warnings reported by generation.

use std::fmt;

use crate::{InvalidConfigError, PuzzleSeed};

/// A reason a generation run produced no puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// The configuration is unusable.
    #[display("invalid configuration: {_0}")]
    InvalidConfig(#[from] InvalidConfigError),
    /// No word with letters is left to place.
    #[display("no usable words were given")]
    NoWords,
    /// The word is longer than both grid dimensions. No placement is attempted.
    #[display("word \"{word}\" could not be placed: it is longer than both grid dimensions ({rows}x{columns})")]
    WordTooLong {
        /// The word as given.
        word: String,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        columns: usize,
    },
    /// Every retry was exhausted without placing the word.
    #[display("word \"{word}\" could not be placed")]
    WordNotPlaced {
        /// The word as given.
        word: String,
    },
}

/// A degraded but successful outcome.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GenerationWarning {
    /// Sampling found fewer words than requested.
    #[display("only {found} of the {requested} requested words could be selected")]
    NotEnoughWords {
        /// Requested word count.
        requested: usize,
        /// Words actually selected.
        found: usize,
    },
    /// The word was removed so the remaining words fit.
    #[display("word \"{word}\" could not be placed and was removed from the puzzle")]
    WordDropped {
        /// The word as given.
        word: String,
    },
    /// The word has no letters after normalization.
    #[display("word \"{word}\" has no letters and was ignored")]
    EmptyWord {
        /// The word as given.
        word: String,
    },
    /// The word normalizes to the same letters as an earlier one.
    #[display("word \"{word}\" is repeated and was ignored")]
    DuplicateWord {
        /// The word as given.
        word: String,
    },
}

/// A failed generation run with everything it reported.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct GenerationFailure {
    seed: PuzzleSeed,
    errors: Vec<GenerateError>,
    warnings: Vec<GenerationWarning>,
}

impl GenerationFailure {
    pub(crate) fn new(
        seed: PuzzleSeed,
        errors: Vec<GenerateError>,
        warnings: Vec<GenerationWarning>,
    ) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            seed,
            errors,
            warnings,
        }
    }

    /// Returns the seed of the failed run.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the errors, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[GenerateError] {
        &self.errors
    }

    /// Returns the warnings recorded before the run failed.
    #[must_use]
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "puzzle generation failed (seed {})", self.seed)?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}
