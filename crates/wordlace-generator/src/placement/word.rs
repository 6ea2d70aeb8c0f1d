//! Placement of a single word.
//!
//! A placement attempt draws an orientation, an anchor that keeps the word in
//! bounds and a reversal flag, then checks the whole line before writing
//! anything. A rejected attempt leaves the grid untouched, which is the same as
//! rolling back to the word's pre-attempt snapshot.

use wordlace_core::{
    Cell, CellTags, DirectionTags, Grid, LineMarker, Orientation, Position, Word, WordId,
};

use super::state::{PlacedWord, PlacementState, line_positions};
use crate::{Prng, PuzzleKind, ReversePolicy};

/// Why a candidate line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The orientation cannot hold the word in this grid.
    DoesNotFit,
    /// Part of the line lies outside the grid.
    OutOfBounds,
    /// A cell holds a different letter.
    LetterMismatch,
    /// A cell already belongs to a word with the same orientation.
    ParallelOverlap,
    /// The word would touch another word outside a crossing.
    Touching,
    /// A fill-in word must cross exactly one earlier word.
    Crossings(usize),
}

/// A drawn line for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) start: Position,
    pub(crate) orientation: Orientation,
    pub(crate) reversed: bool,
}

/// Places single words according to a puzzle variant's rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordPlacer {
    pub(crate) kind: PuzzleKind,
    pub(crate) reverse: ReversePolicy,
    pub(crate) tries: usize,
}

impl WordPlacer {
    /// Tries to place `word` up to `tries` times.
    ///
    /// Returns `false` if every attempt was rejected; the state is then unchanged.
    pub(crate) fn place(
        &self,
        state: &mut PlacementState,
        id: WordId,
        word: &Word,
        prng: &mut Prng,
    ) -> bool {
        for _ in 0..self.tries {
            let candidate = match self.draw(&state.grid, word.len(), prng) {
                Ok(candidate) => candidate,
                Err(_) => continue,
            };
            let letters = grid_letters(word, candidate.reversed);
            if self.check(state, &letters, candidate).is_ok() {
                commit(state, self.kind, id, &letters, candidate);
                log::trace!(
                    "placed {} at {} {} (reversed: {})",
                    word.normalized(),
                    candidate.start,
                    candidate.orientation,
                    candidate.reversed
                );
                return true;
            }
        }
        log::debug!(
            "could not place {} after {} tries",
            word.normalized(),
            self.tries
        );
        false
    }

    /// Draws orientation, anchor and reversal, in that order.
    fn draw(&self, grid: &Grid, len: usize, prng: &mut Prng) -> Result<Candidate, Rejection> {
        let orientations = self.kind.orientations();
        let orientation = orientations[prng.index(orientations.len())];
        let (Some(rows), Some(columns)) = (
            orientation.anchor_rows(grid.rows(), len),
            orientation.anchor_columns(grid.columns(), len),
        ) else {
            return Err(Rejection::DoesNotFit);
        };
        let start = Position::new(prng.range(rows), prng.range(columns));
        let reversed = match self.reverse {
            ReversePolicy::Never => false,
            ReversePolicy::Always => true,
            ReversePolicy::Random => prng.coin_flip(),
        };
        Ok(Candidate {
            start,
            orientation,
            reversed,
        })
    }

    /// Checks a candidate line against the grid.
    pub(crate) fn check(
        &self,
        state: &PlacementState,
        letters: &[char],
        candidate: Candidate,
    ) -> Result<(), Rejection> {
        let grid = &state.grid;
        let Candidate {
            start, orientation, ..
        } = candidate;
        let positions =
            line_positions(start, orientation, letters.len()).ok_or(Rejection::OutOfBounds)?;
        if !positions.iter().all(|pos| grid.contains(*pos)) {
            return Err(Rejection::OutOfBounds);
        }

        let (d_row, d_column) = orientation.step();
        let before = start.offset(-d_row, -d_column);
        let after = positions
            .last()
            .and_then(|pos| pos.offset(d_row, d_column));
        for end in [before, after].into_iter().flatten() {
            if grid
                .get(end)
                .is_some_and(|cell| self.blocks_end(cell, orientation))
            {
                return Err(Rejection::Touching);
            }
        }

        let mut crossings = 0;
        for (pos, &letter) in positions.iter().zip(letters) {
            let cell = &grid[*pos];
            match cell.letter() {
                Some(existing) if existing != letter => return Err(Rejection::LetterMismatch),
                Some(_) if cell.directions().has_orientation(orientation) => {
                    return Err(Rejection::ParallelOverlap);
                }
                Some(_) => crossings += 1,
                None if self.kind == PuzzleKind::FillIn
                    && has_side_neighbor(grid, *pos, orientation) =>
                {
                    return Err(Rejection::Touching);
                }
                None => {}
            }
        }

        if self.kind == PuzzleKind::WordSearch
            && (0..positions.len()).any(|i| touches_other_word(grid, &positions, i, orientation))
        {
            return Err(Rejection::Touching);
        }

        if self.kind == PuzzleKind::FillIn && !state.placed.is_empty() && crossings != 1 {
            return Err(Rejection::Crossings(crossings));
        }
        Ok(())
    }

    /// Returns `true` if a letter in the cell right before or after the word
    /// would visually merge with it.
    fn blocks_end(&self, cell: &Cell, orientation: Orientation) -> bool {
        match self.kind {
            PuzzleKind::FillIn => !cell.is_empty(),
            PuzzleKind::WordSearch => {
                cell.directions().has_orientation(orientation)
                    || cell
                        .tags()
                        .intersects(CellTags::BEGIN_WORD | CellTags::END_WORD)
            }
        }
    }
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Returns `true` if the `index`-th cell of a word-search line would sit
/// orthogonally next to another word outside a crossing.
///
/// Two cells may only be neighbours if neither is a plain letter of its word
/// next to the other word's first or last cell or to a run along the same
/// orientation. Neighbours on the line itself are the word's own letters.
fn touches_other_word(
    grid: &Grid,
    positions: &[Position],
    index: usize,
    orientation: Orientation,
) -> bool {
    let pos = positions[index];
    let cell = &grid[pos];
    let at_end = index == 0 || index + 1 == positions.len();
    ORTHOGONAL
        .into_iter()
        .filter_map(|(r, c)| pos.offset(r, c))
        .filter(|side| !positions.contains(side))
        .filter_map(|side| grid.get(side))
        .filter(|neighbor| !neighbor.words().is_empty())
        .any(|neighbor| {
            let parallel = neighbor.directions().has_orientation(orientation);
            let neighbor_at_end = neighbor
                .tags()
                .intersects(CellTags::BEGIN_WORD | CellTags::END_WORD);
            let plain_here = cell.is_empty() && (parallel || neighbor_at_end);
            let plain_there = matches!(neighbor.words(), [other] if !cell.words().contains(other))
                && (parallel || at_end);
            plain_here || plain_there
        })
}

fn has_side_neighbor(grid: &Grid, pos: Position, orientation: Orientation) -> bool {
    let (d_row, d_column) = orientation.side_step();
    [(d_row, d_column), (-d_row, -d_column)]
        .into_iter()
        .filter_map(|(r, c)| pos.offset(r, c))
        .filter_map(|side| grid.get(side))
        .any(|cell| !cell.is_empty())
}

/// Returns the letters in grid order.
fn grid_letters(word: &Word, reversed: bool) -> Vec<char> {
    if reversed {
        word.letters().iter().rev().copied().collect()
    } else {
        word.letters().to_vec()
    }
}

/// Writes an accepted candidate into the state.
pub(crate) fn commit(
    state: &mut PlacementState,
    kind: PuzzleKind,
    id: WordId,
    letters: &[char],
    candidate: Candidate,
) {
    let Candidate {
        start,
        orientation,
        reversed,
    } = candidate;
    let Some(positions) = line_positions(start, orientation, letters.len()) else {
        return;
    };
    let last = positions.len().saturating_sub(1);
    let reading_start = if reversed { last } else { 0 };

    for (i, (pos, &letter)) in positions.iter().zip(letters).enumerate() {
        let cell = &mut state.grid[*pos];
        let crossed = cell.place_letter(letter, id);

        let mut tags = CellTags::empty();
        let mut directions = DirectionTags::empty();
        if i == 0 {
            tags |= CellTags::BEGIN_WORD;
            directions |= DirectionTags::marker(orientation, LineMarker::Begin);
        }
        if i == last {
            tags |= CellTags::END_WORD;
            directions |= DirectionTags::marker(orientation, LineMarker::End);
        }
        if i != 0 && i != last {
            directions |= DirectionTags::marker(orientation, LineMarker::Middle);
        }
        if kind == PuzzleKind::FillIn && i == reading_start {
            tags |= CellTags::START_WORD | CellTags::reading(orientation, reversed);
        }
        cell.insert_tags(tags);
        cell.insert_directions(directions);

        if crossed {
            let words = cell.words().to_vec();
            state.record_cross(*pos, &words);
        }
    }

    state.placed.push(PlacedWord::new(
        id,
        start,
        orientation,
        reversed,
        letters.len(),
    ));
}
