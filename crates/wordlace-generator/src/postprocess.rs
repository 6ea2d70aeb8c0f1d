//! Finishing steps applied after every word is placed.

use wordlace_core::CellTags;

use crate::{Prng, placement::PlacementState};

/// Gives every empty cell a random letter from `alphabet`, in row-major order.
pub(crate) fn fill_empty_cells(state: &mut PlacementState, alphabet: &[char], prng: &mut Prng) {
    if alphabet.is_empty() {
        return;
    }
    for pos in state.grid.positions() {
        if state.grid[pos].is_empty() {
            let letter = alphabet[prng.index(alphabet.len())];
            state.grid[pos].fill(letter);
        }
    }
}

/// Reveals `hint_percentage` percent of the crossings.
///
/// Once a crossing is revealed, every other crossing that shares one of its
/// words is discarded, so no word gets two hints. Returns the number of hints.
pub(crate) fn select_hints(
    state: &mut PlacementState,
    hint_percentage: usize,
    prng: &mut Prng,
) -> usize {
    let target = state.crosses.len() * hint_percentage / 100;
    let mut crosses = std::mem::take(&mut state.crosses);
    let mut hints = 0;
    while hints < target && !crosses.is_empty() {
        let chosen = crosses.remove(prng.index(crosses.len()));
        state.grid[chosen.position].insert_tags(CellTags::HINT);
        crosses.retain(|cross| !cross.words.iter().any(|w| chosen.words.contains(w)));
        hints += 1;
    }
    hints
}

/// Moves the letter block to the middle of the grid, shifting the placement
/// records with it.
pub(crate) fn center(state: &mut PlacementState) {
    let shift = state.grid.recenter();
    if shift == (0, 0) {
        return;
    }
    for placed in &mut state.placed {
        placed.shift(shift);
    }
    log::trace!("centered the grid by {shift:?}");
}
