//! Plain-text grids.
//!
//! Each cell becomes one glyph. Glyphs are separated by a space and rows by a
//! newline, without a trailing newline.

use wordlace_core::{Cell, CellTags, Grid};
use wordlace_generator::{GeneratedPuzzle, PuzzleKind};

/// Glyph of a letter cell whose letter is hidden.
pub const HIDDEN: char = '_';

/// Glyph of a cell without a word letter.
pub const BLANK: char = '.';

/// Renders the grid as the solver sees it.
///
/// A word search shows every letter, so word letters and filler look alike. A
/// fill-in puzzle shows only its hint letters.
#[must_use]
pub fn puzzle_as_text(puzzle: &GeneratedPuzzle) -> String {
    match puzzle.kind() {
        PuzzleKind::WordSearch => render(puzzle.grid(), |cell| cell.letter().unwrap_or(BLANK)),
        PuzzleKind::FillIn => render(puzzle.grid(), fill_in_glyph),
    }
}

/// Renders the solution: every placed letter, and [`BLANK`] everywhere else.
#[must_use]
pub fn solution_as_text(puzzle: &GeneratedPuzzle) -> String {
    render(puzzle.grid(), solution_glyph)
}

fn fill_in_glyph(cell: &Cell) -> char {
    match cell.letter() {
        Some(letter) if cell.tags().contains(CellTags::HINT) => letter,
        Some(_) => HIDDEN,
        None => BLANK,
    }
}

pub(crate) fn solution_glyph(cell: &Cell) -> char {
    match cell.letter() {
        Some(letter) if cell.tags().contains(CellTags::LETTER) => letter,
        _ => BLANK,
    }
}

fn render(grid: &Grid, glyph: impl Fn(&Cell) -> char) -> String {
    let mut text = String::with_capacity(grid.rows() * grid.columns() * 2);
    for (i, row) in grid.row_slices().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                text.push(' ');
            }
            text.push(glyph(cell));
        }
    }
    text
}
