//! The placement engine.
//!
//! Placement runs as an explicit state machine:
//!
//! ```text
//! SelectOrdering -> PlaceWord(i) -> ... -> ValidateDiversity -> done
//!        ^              |                        |
//!        |              v                        v
//!        +------- RetryOrdering <----------------+
//!        |              | (puzzle tries used up)
//!        |              v
//!        +-------- DropWord -> (no words left) -> failure
//! ```
//!
//! Words are placed longest first. Each ordering attempt starts from an empty
//! grid and places every remaining word; the `k`-th attempt rotates the ordering
//! by `k` so that a different word goes first. When [`GenerationLimits::puzzle_tries`]
//! attempts have failed, the longest remaining word is dropped and the attempt
//! counter restarts. Every loop is bounded, so the engine always terminates.

use std::cmp::Reverse;

use wordlace_core::{Word, WordId};

pub use self::state::PlacedWord;
pub(crate) use self::state::PlacementState;
use self::word::WordPlacer;
#[cfg(test)]
pub(crate) use self::word::{Candidate, commit};
use crate::{GenerationLimits, Prng, PuzzleKind, ReversePolicy};

mod state;
mod word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    SelectOrdering,
    PlaceWord(usize),
    ValidateDiversity,
    RetryOrdering,
    DropWord,
}

/// A successful placement.
#[derive(Debug, Clone)]
pub(crate) struct PlacementOutcome {
    pub(crate) state: PlacementState,
    /// Words removed to make the others fit, longest first.
    pub(crate) dropped: Vec<WordId>,
}

/// Lays a word list onto a grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacementEngine<'a> {
    pub(crate) kind: PuzzleKind,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) reverse: ReversePolicy,
    pub(crate) limits: &'a GenerationLimits,
}

impl PlacementEngine<'_> {
    /// Places `words`, dropping the longest ones if they cannot all fit.
    ///
    /// # Errors
    ///
    /// Returns every word id, in drop order, if not even a single word could be
    /// placed.
    pub(crate) fn run(
        &self,
        words: &[Word],
        prng: &mut Prng,
    ) -> Result<PlacementOutcome, Vec<WordId>> {
        let placer = WordPlacer {
            kind: self.kind,
            reverse: self.reverse,
            tries: self.limits.word_tries(self.kind, self.rows, self.columns),
        };

        let mut remaining: Vec<WordId> = (0..words.len()).map(WordId::new).collect();
        remaining.sort_by_key(|id| Reverse(words[id.index()].len()));

        let snapshot = PlacementState::new(self.rows, self.columns);
        let mut state = snapshot.clone();
        let mut ordering: Vec<WordId> = Vec::with_capacity(remaining.len());
        let mut dropped = Vec::new();
        let mut attempt = 0;
        let mut step = Step::SelectOrdering;

        loop {
            step = match step {
                Step::SelectOrdering => {
                    if remaining.is_empty() {
                        return Err(dropped);
                    }
                    if attempt >= self.limits.puzzle_tries {
                        Step::DropWord
                    } else {
                        let k = attempt % remaining.len();
                        ordering.clear();
                        ordering.extend_from_slice(&remaining[k..]);
                        ordering.extend_from_slice(&remaining[..k]);
                        Step::PlaceWord(0)
                    }
                }
                Step::PlaceWord(i) => match ordering.get(i) {
                    None => Step::ValidateDiversity,
                    Some(&id) if placer.place(&mut state, id, &words[id.index()], prng) => {
                        Step::PlaceWord(i + 1)
                    }
                    Some(_) => Step::RetryOrdering,
                },
                Step::ValidateDiversity => {
                    let required = self.kind.required_orientations(state.placed.len());
                    if state.distinct_orientations() >= required {
                        return Ok(PlacementOutcome { state, dropped });
                    }
                    log::debug!(
                        "ordering attempt {attempt} uses {} of {required} orientations",
                        state.distinct_orientations()
                    );
                    Step::RetryOrdering
                }
                Step::RetryOrdering => {
                    attempt += 1;
                    state.clone_from(&snapshot);
                    Step::SelectOrdering
                }
                Step::DropWord => {
                    let id = remaining.remove(0);
                    log::debug!(
                        "dropping {} after {attempt} failed attempts",
                        words[id.index()].normalized()
                    );
                    dropped.push(id);
                    attempt = 0;
                    Step::SelectOrdering
                }
            };
        }
    }
}
