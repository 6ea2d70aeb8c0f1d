//! The puzzle generator: word preparation, placement and finishing steps.

use crate::{
    GenerateError, GeneratedPuzzle, GenerationFailure, GenerationLimits, GenerationWarning, Prng,
    PuzzleConfig, PuzzleKind, PuzzleSeed,
    placement::PlacementEngine,
    postprocess,
    preparer::{self, PrepareOptions},
};

/// Builds puzzles from word lists.
///
/// A generator holds configuration only. Every call owns its own grid and
/// [`Prng`], so one generator can be shared across threads.
///
/// # Examples
///
/// ```
/// use wordlace_generator::{PuzzleConfig, PuzzleGenerator, PuzzleKind, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(PuzzleConfig {
///     kind: PuzzleKind::FillIn,
///     ..PuzzleConfig::default()
/// });
/// let words = ["crosswords", "puzzle", "testing", "phpunit", "generator"];
///
/// let first = generator.generate_with_seed(&words, PuzzleSeed::from(17))?;
/// let second = generator.generate_with_seed(&words, PuzzleSeed::from(17))?;
/// assert_eq!(first, second);
/// # Ok::<(), wordlace_generator::GenerationFailure>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: PuzzleConfig,
    limits: GenerationLimits,
}

impl PuzzleGenerator {
    /// Creates a generator with the default retry bounds.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_limits(config, GenerationLimits::default())
    }

    /// Creates a generator with custom retry bounds.
    #[must_use]
    pub fn with_limits(config: PuzzleConfig, limits: GenerationLimits) -> Self {
        Self { config, limits }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Returns the retry bounds.
    #[must_use]
    pub fn limits(&self) -> &GenerationLimits {
        &self.limits
    }

    /// Generates a puzzle with the configured seed, or a fresh random one.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate<S>(&self, words: &[S]) -> Result<GeneratedPuzzle, GenerationFailure>
    where
        S: AsRef<str>,
    {
        let seed = self.config.seed.unwrap_or_else(PuzzleSeed::random);
        self.generate_with_seed(words, seed)
    }

    /// Generates a puzzle from `words` with the given seed.
    ///
    /// Words that cannot be placed together are dropped, longest first, and
    /// reported as [`GenerationWarning::WordDropped`].
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationFailure`] if the configuration is invalid, if a word
    /// is longer than both grid dimensions, if no usable word is given, or if
    /// not a single word could be placed.
    pub fn generate_with_seed<S>(
        &self,
        words: &[S],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerationFailure>
    where
        S: AsRef<str>,
    {
        let config = &self.config;
        let mut warnings = Vec::new();
        if let Err(err) = config.validate() {
            return Err(GenerationFailure::new(seed, vec![err.into()], warnings));
        }

        let mut prng = Prng::new(seed);
        let profile = config.difficulty.profile();
        let folding = config.letter_folding();
        let options = PrepareOptions {
            rows: config.rows,
            columns: config.columns,
            number_of_words: config.number_of_words,
            profile,
            folding: &folding,
            limits: &self.limits,
        };
        let words = match preparer::prepare_words(words, &options, &mut prng, &mut warnings) {
            Ok(words) => words,
            Err(errors) => return Err(GenerationFailure::new(seed, errors, warnings)),
        };

        let engine = PlacementEngine {
            kind: config.kind,
            rows: config.rows,
            columns: config.columns,
            reverse: profile.reverse,
            limits: &self.limits,
        };
        let outcome = match engine.run(&words, &mut prng) {
            Ok(outcome) => outcome,
            Err(dropped) => {
                let errors = dropped
                    .into_iter()
                    .map(|id| GenerateError::WordNotPlaced {
                        word: words[id.index()].text().to_owned(),
                    })
                    .collect();
                return Err(GenerationFailure::new(seed, errors, warnings));
            }
        };
        for id in &outcome.dropped {
            let warning = GenerationWarning::WordDropped {
                word: words[id.index()].text().to_owned(),
            };
            log::warn!("{warning}");
            warnings.push(warning);
        }

        let mut state = outcome.state;
        match config.kind {
            PuzzleKind::WordSearch => {
                postprocess::fill_empty_cells(&mut state, &config.filler_letters(), &mut prng);
            }
            PuzzleKind::FillIn => {
                let hints =
                    postprocess::select_hints(&mut state, profile.hint_percentage, &mut prng);
                log::debug!("revealed {hints} hints");
                postprocess::center(&mut state);
            }
        }

        log::info!(
            "generated {} puzzle with {} of {} words (seed {seed})",
            config.kind,
            state.placed.len(),
            words.len()
        );
        Ok(GeneratedPuzzle::new(
            config.kind,
            seed,
            config.difficulty,
            state.grid,
            words,
            state.placed,
            warnings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::CellTags;

    use super::*;
    use crate::{Difficulty, InvalidConfigError};

    const WORDS: [&str; 5] = ["CROSSWORDS", "PUZZLE", "TESTING", "PHPUNIT", "GENERATOR"];

    fn generator(kind: PuzzleKind) -> PuzzleGenerator {
        PuzzleGenerator::new(PuzzleConfig {
            kind,
            ..PuzzleConfig::default()
        })
    }

    #[test]
    fn test_reference_words_succeed() {
        for kind in [PuzzleKind::WordSearch, PuzzleKind::FillIn] {
            let puzzle = generator(kind)
                .generate_with_seed(&WORDS, PuzzleSeed::from(17))
                .unwrap();
            assert_eq!(puzzle.kind(), kind);
            assert_eq!(puzzle.seed(), PuzzleSeed::from(17));
            assert_eq!(puzzle.grid().rows(), 15);
            assert_eq!(puzzle.grid().columns(), 15);
            assert_eq!(puzzle.words().count() + puzzle.warnings().len(), 5);
        }
    }

    #[test]
    fn test_words_longer_than_grid_fail_without_placement() {
        let generator = PuzzleGenerator::new(PuzzleConfig {
            rows: 5,
            columns: 5,
            ..PuzzleConfig::default()
        });
        let words = ["crosswords", "puzzle", "testing", "phpunit", "generator"];
        let failure = generator
            .generate_with_seed(&words, PuzzleSeed::from(1))
            .unwrap_err();
        assert_eq!(failure.errors().len(), 5);
        assert!(
            failure
                .errors()
                .iter()
                .all(|e| matches!(e, GenerateError::WordTooLong { .. }))
        );
        assert!(failure.errors()[0].to_string().contains("crosswords"));
        assert!(failure.to_string().contains("could not be placed"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let generator = PuzzleGenerator::new(PuzzleConfig {
            columns: 0,
            ..PuzzleConfig::default()
        });
        let failure = generator
            .generate_with_seed(&WORDS, PuzzleSeed::from(1))
            .unwrap_err();
        assert_eq!(
            failure.errors(),
            [GenerateError::InvalidConfig(InvalidConfigError::EmptyGrid {
                rows: 15,
                columns: 0
            })]
        );
    }

    #[test]
    fn test_exhausted_retries_report_every_word() {
        let limits = GenerationLimits {
            word_search_tries: 0,
            ..GenerationLimits::default()
        };
        let generator = PuzzleGenerator::with_limits(PuzzleConfig::default(), limits);
        let failure = generator
            .generate_with_seed(&["one", "three"], PuzzleSeed::from(4))
            .unwrap_err();
        assert_eq!(
            failure.errors(),
            [
                GenerateError::WordNotPlaced {
                    word: "three".to_owned()
                },
                GenerateError::WordNotPlaced {
                    word: "one".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_configured_seed_is_used() {
        let generator = PuzzleGenerator::new(PuzzleConfig {
            seed: Some(PuzzleSeed::from(99)),
            ..PuzzleConfig::default()
        });
        let puzzle = generator.generate(&WORDS).unwrap();
        assert_eq!(puzzle.seed(), PuzzleSeed::from(99));
        assert_eq!(
            puzzle,
            generator
                .generate_with_seed(&WORDS, PuzzleSeed::from(99))
                .unwrap()
        );
    }

    #[test]
    fn test_word_search_has_no_empty_cells() {
        let puzzle = generator(PuzzleKind::WordSearch)
            .generate_with_seed(&WORDS, PuzzleSeed::from(3))
            .unwrap();
        let grid = puzzle.grid();
        assert!(grid.positions().all(|pos| !grid[pos].is_empty()));
        assert!(
            grid.positions()
                .any(|pos| grid[pos].tags().contains(CellTags::FILLER))
        );
    }

    #[test]
    fn test_fill_in_is_centered_and_hinted() {
        let generator = PuzzleGenerator::new(PuzzleConfig {
            kind: PuzzleKind::FillIn,
            difficulty: Difficulty::Easy,
            ..PuzzleConfig::default()
        });
        let puzzle = generator
            .generate_with_seed(&WORDS, PuzzleSeed::from(17))
            .unwrap();
        let grid = puzzle.grid();
        let (min, max) = grid.letter_bounds().unwrap();
        let top = min.row;
        let bottom = grid.rows() - 1 - max.row;
        let left = min.column;
        let right = grid.columns() - 1 - max.column;
        assert!(bottom == top || bottom == top + 1);
        assert!(right == left || right == left + 1);

        let crosses = grid
            .positions()
            .filter(|pos| grid[*pos].tags().contains(CellTags::CROSS))
            .count();
        let hints = grid
            .positions()
            .filter(|pos| grid[*pos].tags().contains(CellTags::HINT))
            .count();
        assert!(hints <= crosses * 50 / 100);
        if crosses >= 2 {
            assert!(hints >= 1);
        }
        for placed in puzzle.placements() {
            assert!(!placed.is_reversed());
        }
    }
}
