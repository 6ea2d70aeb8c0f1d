//! Puzzle seeds.

use serde::{Deserialize, Serialize};

/// Seed of a generation run.
///
/// Two runs with the same seed, words and configuration produce the same puzzle.
///
/// # Examples
///
/// ```
/// use wordlace_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "17".parse()?;
/// assert_eq!(seed, PuzzleSeed::from(17));
/// assert_eq!(seed.to_string(), "17");
/// # Ok::<(), std::num::ParseIntError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct PuzzleSeed(i64);

impl PuzzleSeed {
    /// Draws a seed from the thread-local random source.
    ///
    /// This is the only non-deterministic step of a generation run.
    #[must_use]
    pub fn random() -> Self {
        Self(i64::from(rand::random::<u32>()))
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}
