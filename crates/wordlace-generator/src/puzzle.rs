use wordlace_core::{Grid, Position, Word, WordId};

use crate::{Difficulty, GenerationWarning, PlacedWord, PuzzleKind, PuzzleSeed};

/// A finished puzzle.
///
/// The grid holds the solution. Which cells a reader of the puzzle gets to see
/// depends on the cell tags: filler and word letters of a word search look the
/// same, and a fill-in puzzle only reveals its [`CellTags::HINT`] cells.
///
/// [`CellTags::HINT`]: wordlace_core::CellTags::HINT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    kind: PuzzleKind,
    seed: PuzzleSeed,
    difficulty: Difficulty,
    grid: Grid,
    words: Vec<Word>,
    placements: Vec<PlacedWord>,
    warnings: Vec<GenerationWarning>,
}

impl GeneratedPuzzle {
    pub(crate) fn new(
        kind: PuzzleKind,
        seed: PuzzleSeed,
        difficulty: Difficulty,
        grid: Grid,
        words: Vec<Word>,
        placements: Vec<PlacedWord>,
        warnings: Vec<GenerationWarning>,
    ) -> Self {
        Self {
            kind,
            seed,
            difficulty,
            grid,
            words,
            placements,
            warnings,
        }
    }

    /// Returns the puzzle variant.
    #[must_use]
    pub fn kind(&self) -> PuzzleKind {
        self.kind
    }

    /// Returns the seed that reproduces this puzzle.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the difficulty the puzzle was generated with.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the placed words in input order.
    ///
    /// Words dropped during placement are not included.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words
            .iter()
            .enumerate()
            .filter(|(i, _)| self.placement(WordId::new(*i)).is_some())
            .map(|(_, word)| word)
    }

    /// Returns the prepared word with the given id, placed or not.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.index())
    }

    /// Returns the placement records in placement order.
    #[must_use]
    pub fn placements(&self) -> &[PlacedWord] {
        &self.placements
    }

    /// Returns the placement record of a word, or `None` if it was dropped.
    #[must_use]
    pub fn placement(&self, id: WordId) -> Option<&PlacedWord> {
        self.placements.iter().find(|placed| placed.id() == id)
    }

    /// Returns the cells of a placed word in reading order.
    #[must_use]
    pub fn word_cells(&self, id: WordId) -> Option<Vec<Position>> {
        self.placement(id).map(PlacedWord::reading_cells)
    }

    /// Returns the warnings of the run that produced this puzzle.
    #[must_use]
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }
}
