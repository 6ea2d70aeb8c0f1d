//! HTML grids built on [`HtmlTable`].
//!
//! Every cell carries a `class` attribute naming its tags and then its
//! directions, so a stylesheet can draw word borders and reading arrows.

use wordlace_core::{Cell, CellTags};
use wordlace_generator::{GeneratedPuzzle, PuzzleKind};

use crate::{table::HtmlTable, text};

/// Class of a cell without letter.
pub const EMPTY_CLASS: &str = "empty";

/// Returns the class names of a cell, space-separated.
///
/// Tag names come first, then direction names, each in declaration order. A
/// cell with neither gets [`EMPTY_CLASS`].
///
/// # Examples
///
/// ```
/// use wordlace_core::{Cell, CellTags, WordId};
/// use wordlace_render::html::cell_classes;
///
/// let mut cell = Cell::default();
/// assert_eq!(cell_classes(&cell), "empty");
///
/// cell.place_letter('A', WordId::new(0));
/// cell.insert_tags(CellTags::HINT);
/// assert_eq!(cell_classes(&cell), "letter hint");
/// ```
#[must_use]
pub fn cell_classes(cell: &Cell) -> String {
    let names: Vec<_> = cell
        .tags()
        .names()
        .chain(cell.directions().names())
        .collect();
    if names.is_empty() {
        EMPTY_CLASS.to_owned()
    } else {
        names.join(" ")
    }
}

/// Renders the puzzle grid as a table.
///
/// Cell classes normally mirror the cell's tags and directions one to one. Word
/// search is the one exception: every cell only gets the `letter` class, so
/// filler cannot be told apart from word letters. Fill-in cells keep their full
/// classes but only hint cells show their letter.
#[must_use]
pub fn puzzle_as_html(puzzle: &GeneratedPuzzle) -> String {
    let kind = puzzle.kind();
    build(puzzle, "puzzle", |cell| match kind {
        PuzzleKind::WordSearch => (
            cell.letter().map(String::from).unwrap_or_default(),
            CellTags::LETTER.names().collect(),
        ),
        PuzzleKind::FillIn => {
            let content = cell
                .letter()
                .filter(|_| cell.tags().contains(CellTags::HINT))
                .map(String::from)
                .unwrap_or_default();
            (content, cell_classes(cell))
        }
    })
}

/// Renders the solution grid as a table. Filler cells are left blank.
#[must_use]
pub fn solution_as_html(puzzle: &GeneratedPuzzle) -> String {
    build(puzzle, "solution", |cell| {
        let glyph = text::solution_glyph(cell);
        let content = if glyph == text::BLANK {
            String::new()
        } else {
            String::from(glyph)
        };
        (content, cell_classes(cell))
    })
}

fn build(
    puzzle: &GeneratedPuzzle,
    view: &str,
    render: impl Fn(&Cell) -> (String, String),
) -> String {
    let mut table = HtmlTable::new().with_attribute("class", format!("{} {view}", puzzle.kind()));
    let grid = puzzle.grid();
    for pos in grid.positions() {
        let (content, classes) = render(&grid[pos]);
        table.add_cell(&content, pos.row, pos.column, [("class", classes)]);
    }
    table.to_string()
}
