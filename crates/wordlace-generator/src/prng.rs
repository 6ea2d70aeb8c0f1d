//! Deterministic pseudo-random numbers.
//!
//! The generator is a small multiplicative congruential one. Its exact output
//! sequence for a given seed is part of the observable behavior of puzzle
//! generation: the same seed must lay out the same puzzle on every platform.

use crate::PuzzleSeed;

const SEED_MODULUS: u64 = 9_999_999;
const MULTIPLIER: i64 = 125;
const MODULUS: i64 = 2_796_203;

/// Seeded integer generator owned by one generation run.
///
/// # Examples
///
/// ```
/// use wordlace_generator::{Prng, PuzzleSeed};
///
/// let mut prng = Prng::new(PuzzleSeed::from(17));
/// let values: Vec<_> = (0..4).map(|_| prng.next_int(0, 9)).collect();
/// assert_eq!(values, [0, 4, 7, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
    state: i64,
}

impl Prng {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: PuzzleSeed) -> Self {
        let mut prng = Self { state: 1 };
        prng.set_seed(seed);
        prng
    }

    /// Reseeds the generator.
    ///
    /// The seed is reduced to `|seed| mod 9_999_999 + 1` and one value is
    /// discarded, since the first value after seeding is poorly mixed.
    pub fn set_seed(&mut self, seed: PuzzleSeed) {
        #[expect(clippy::cast_possible_wrap)]
        let state = (seed.value().unsigned_abs() % SEED_MODULUS + 1) as i64;
        self.state = state;
        self.advance();
    }

    /// Returns an integer in `min..=max`.
    ///
    /// If `min > max`, `min` is clamped to `max` and `max` is returned.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let min = min.min(max);
        self.advance();
        self.state % (max - min + 1) + min
    }

    /// Returns an index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick an index from an empty range");
        let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
        self.pick(0, max)
    }

    /// Returns a `usize` in `range`, following [`Prng::next_int`] semantics.
    pub fn range(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        let min = i64::try_from(*range.start()).unwrap_or(i64::MAX);
        let max = i64::try_from(*range.end()).unwrap_or(i64::MAX);
        self.pick(min, max)
    }

    /// Returns `true` or `false` with equal probability.
    pub fn coin_flip(&mut self) -> bool {
        self.next_int(0, 1) == 1
    }

    /// Shuffles `items` in place (Fisher-Yates, last element first).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    fn pick(&mut self, min: i64, max: i64) -> usize {
        let value = self.next_int(min, max);
        usize::try_from(value).unwrap_or_default()
    }

    fn advance(&mut self) {
        self.state = self.state * MULTIPLIER % MODULUS;
    }
}
