//! Word-search and fill-in puzzle generation.
//!
//! Generation is a pipeline that runs once per call:
//!
//! 1. The word preparer normalizes the input words, skips unusable ones and
//!    samples a subset if fewer words are requested than given.
//! 2. The placement engine lays the words on a [`Grid`], longest first, dropping
//!    the longest remaining word whenever the rest cannot be placed together.
//! 3. Post-processing fills the empty cells of a word search with random letters,
//!    or picks the hint cells of a fill-in puzzle and centers it.
//!
//! All randomness comes from one seeded [`Prng`] owned by the call, so a
//! [`PuzzleSeed`] reproduces a puzzle exactly and independent calls can run in
//! parallel.
//!
//! # Examples
//!
//! ```
//! use wordlace_generator::{PuzzleConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(PuzzleConfig::default());
//! let puzzle = generator.generate_with_seed(&["ferris", "cargo", "crate"], PuzzleSeed::from(7))?;
//!
//! for id in puzzle.placements().iter().map(|placed| placed.id()) {
//!     let word = puzzle.word(id).unwrap();
//!     let spelled: String = puzzle
//!         .word_cells(id)
//!         .unwrap()
//!         .into_iter()
//!         .filter_map(|pos| puzzle.grid()[pos].letter())
//!         .collect();
//!     assert_eq!(spelled, word.normalized());
//! }
//! # Ok::<(), wordlace_generator::GenerationFailure>(())
//! ```
//!
//! [`Grid`]: wordlace_core::Grid

pub use self::{
    config::{DEFAULT_WORD_CAP, GenerationLimits, InvalidConfigError, PuzzleConfig, PuzzleKind},
    difficulty::{Difficulty, DifficultyProfile, ParseDifficultyError, ReversePolicy},
    error::{GenerateError, GenerationFailure, GenerationWarning},
    generator::PuzzleGenerator,
    placement::PlacedWord,
    prng::Prng,
    puzzle::GeneratedPuzzle,
    seed::PuzzleSeed,
};

mod config;
mod difficulty;
mod error;
mod generator;
mod placement;
mod postprocess;
mod preparer;
mod prng;
mod puzzle;
mod seed;
