//! Placement records and the rollback snapshot.

use wordlace_core::{Grid, Orientation, Position, WordId};

/// Where and how a word was laid on the grid.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Orientation, Position};
/// use wordlace_generator::{Difficulty, PuzzleConfig, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(PuzzleConfig {
///     difficulty: Difficulty::Easy,
///     ..PuzzleConfig::default()
/// });
/// let puzzle = generator.generate_with_seed(&["rust"], PuzzleSeed::from(1))?;
/// let placed = &puzzle.placements()[0];
/// assert_eq!(placed.len(), 4);
/// assert!(!placed.is_reversed()); // easy puzzles never reverse words
/// # Ok::<(), wordlace_generator::GenerationFailure>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    id: WordId,
    start: Position,
    orientation: Orientation,
    reversed: bool,
    len: usize,
}

impl PlacedWord {
    pub(crate) fn new(
        id: WordId,
        start: Position,
        orientation: Orientation,
        reversed: bool,
        len: usize,
    ) -> Self {
        Self {
            id,
            start,
            orientation,
            reversed,
            len,
        }
    }

    /// Returns the word id.
    #[must_use]
    pub fn id(&self) -> WordId {
        self.id
    }

    /// Returns the first cell in grid order.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` if the word is read against its orientation's step.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a word without letters; placed words always have some.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the word's cells in reading order.
    #[must_use]
    pub fn reading_cells(&self) -> Vec<Position> {
        let mut cells = line_positions(self.start, self.orientation, self.len).unwrap_or_default();
        if self.reversed {
            cells.reverse();
        }
        cells
    }

    pub(crate) fn shift(&mut self, (d_row, d_column): (isize, isize)) {
        if let Some(start) = self.start.offset(d_row, d_column) {
            self.start = start;
        }
    }
}

/// A cell shared by several words, remembered for hint selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CrossRecord {
    pub(crate) position: Position,
    pub(crate) words: Vec<WordId>,
}

/// Everything a placement attempt mutates, cloned as a rollback snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlacementState {
    pub(crate) grid: Grid,
    pub(crate) crosses: Vec<CrossRecord>,
    pub(crate) placed: Vec<PlacedWord>,
}

impl PlacementState {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            grid: Grid::new(rows, columns),
            crosses: Vec::new(),
            placed: Vec::new(),
        }
    }

    /// Records a crossing at `position`, replacing the word list of an existing
    /// record at the same cell.
    pub(crate) fn record_cross(&mut self, position: Position, words: &[WordId]) {
        match self.crosses.iter_mut().find(|c| c.position == position) {
            Some(record) => {
                record.words.clear();
                record.words.extend_from_slice(words);
            }
            None => self.crosses.push(CrossRecord {
                position,
                words: words.to_vec(),
            }),
        }
    }

    /// Returns the number of distinct orientations among placed words.
    pub(crate) fn distinct_orientations(&self) -> usize {
        Orientation::ALL
            .into_iter()
            .filter(|o| self.placed.iter().any(|p| p.orientation == *o))
            .count()
    }
}

/// Returns the `len` positions from `start` along `orientation`, or `None` if the
/// line leaves the grid through the top or the left edge.
pub(crate) fn line_positions(
    start: Position,
    orientation: Orientation,
    len: usize,
) -> Option<Vec<Position>> {
    let (d_row, d_column) = orientation.step();
    (0..len)
        .map(|i| {
            let i = isize::try_from(i).ok()?;
            start.offset(d_row * i, d_column * i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_positions() {
        assert_eq!(
            line_positions(Position::new(2, 0), Orientation::DiagonalUp, 3),
            Some(vec![
                Position::new(2, 0),
                Position::new(1, 1),
                Position::new(0, 2)
            ])
        );
        assert_eq!(
            line_positions(Position::new(1, 0), Orientation::DiagonalUp, 3),
            None
        );
    }

    #[test]
    fn test_reading_cells_follow_reversal() {
        let placed = PlacedWord::new(
            WordId::new(0),
            Position::new(0, 1),
            Orientation::Horizontal,
            true,
            3,
        );
        assert_eq!(
            placed.reading_cells(),
            [
                Position::new(0, 3),
                Position::new(0, 2),
                Position::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_record_cross_merges_by_position() {
        let mut state = PlacementState::new(3, 3);
        let pos = Position::new(1, 1);
        state.record_cross(pos, &[WordId::new(0), WordId::new(1)]);
        state.record_cross(Position::new(0, 0), &[WordId::new(2), WordId::new(1)]);
        state.record_cross(pos, &[WordId::new(0), WordId::new(1), WordId::new(3)]);
        assert_eq!(state.crosses.len(), 2);
        assert_eq!(
            state.crosses[0].words,
            [WordId::new(0), WordId::new(1), WordId::new(3)]
        );
    }

    #[test]
    fn test_shift() {
        let mut placed = PlacedWord::new(
            WordId::new(0),
            Position::new(3, 3),
            Orientation::Vertical,
            false,
            2,
        );
        placed.shift((-2, 1));
        assert_eq!(placed.start(), Position::new(1, 4));
    }
}
