//! The fixed-size cell arena.

use std::ops::{Index, IndexMut};

use crate::{Cell, Position};

/// A `rows × columns` grid of [`Cell`]s stored in one row-major vector.
///
/// The dimensions never change. Cloning the grid is the snapshot used to roll
/// back failed placements.
///
/// # Panics
///
/// Indexing with a position outside the grid panics. Use [`Grid::get`] or
/// [`Grid::contains`] when the position is not known to be in bounds.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Grid, Position};
///
/// let grid = Grid::new(2, 3);
/// assert_eq!(grid.positions().count(), 6);
/// assert!(grid.contains(Position::new(1, 2)));
/// assert!(grid.get(Position::new(2, 0)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of empty cells.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::default(); rows * columns],
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.column < self.columns
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| &self.cells[self.index_of(pos)])
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
    }

    /// Iterates over the rows as cell slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// Returns the smallest `(top_left, bottom_right)` box holding every letter,
    /// or `None` if the grid has no letters.
    #[must_use]
    pub fn letter_bounds(&self) -> Option<(Position, Position)> {
        let mut bounds: Option<(Position, Position)> = None;
        for pos in self.positions().filter(|pos| !self[*pos].is_empty()) {
            let (min, max) = bounds.get_or_insert((pos, pos));
            min.row = min.row.min(pos.row);
            min.column = min.column.min(pos.column);
            max.row = max.row.max(pos.row);
            max.column = max.column.max(pos.column);
        }
        bounds
    }

    /// Moves the letter block to the middle of the grid.
    ///
    /// The block is cropped to [`Grid::letter_bounds`] and padded back to the
    /// original dimensions, splitting the spare rows and columns as evenly as
    /// possible (the extra one goes to the bottom or right). Returns the
    /// `(row, column)` shift applied to every cell.
    pub fn recenter(&mut self) -> (isize, isize) {
        let Some((min, max)) = self.letter_bounds() else {
            return (0, 0);
        };
        let height = max.row - min.row + 1;
        let width = max.column - min.column + 1;
        let top = (self.rows - height) / 2;
        let left = (self.columns - width) / 2;

        let mut centered = Self::new(self.rows, self.columns);
        for row in 0..height {
            for column in 0..width {
                let from = Position::new(min.row + row, min.column + column);
                let to = Position::new(top + row, left + column);
                centered[to] = std::mem::take(&mut self[from]);
            }
        }
        *self = centered;

        #[expect(clippy::cast_possible_wrap)]
        let shift = (
            top as isize - min.row as isize,
            left as isize - min.column as isize,
        );
        shift
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.row * self.columns + pos.column
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        assert!(self.contains(pos), "position {pos} is outside the grid");
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        assert!(self.contains(pos), "position {pos} is outside the grid");
        let index = self.index_of(pos);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::WordId;

    fn letter_positions(grid: &Grid) -> Vec<Position> {
        grid.positions().filter(|pos| !grid[*pos].is_empty()).collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 6);
        assert!(grid.positions().all(|pos| grid[pos] == Cell::default()));
        assert_eq!(grid.letter_bounds(), None);
        assert_eq!(grid.row_slices().count(), 4);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2);
        let _ = &grid[Position::new(0, 2)];
    }

    #[test]
    fn test_recenter_moves_block() {
        let mut grid = Grid::new(5, 7);
        grid[Position::new(0, 0)].place_letter('A', WordId::new(0));
        grid[Position::new(0, 1)].place_letter('B', WordId::new(0));

        let shift = grid.recenter();
        // 1×2 block: 4 spare rows -> 2 above, 5 spare columns -> 2 left
        assert_eq!(shift, (2, 2));
        assert_eq!(
            letter_positions(&grid),
            [Position::new(2, 2), Position::new(2, 3)]
        );
        assert_eq!(grid[Position::new(2, 3)].letter(), Some('B'));
    }

    #[test]
    fn test_recenter_empty_grid() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.recenter(), (0, 0));
        assert_eq!(grid, Grid::new(3, 3));
    }

    proptest! {
        #[test]
        fn prop_recenter_balances_margins(
            rows in 1usize..12,
            columns in 1usize..12,
            cells in proptest::collection::vec((0usize..12, 0usize..12), 1..6),
        ) {
            let mut grid = Grid::new(rows, columns);
            for (row, column) in cells {
                let pos = Position::new(row % rows, column % columns);
                if grid[pos].is_empty() {
                    grid[pos].place_letter('X', WordId::new(0));
                }
            }
            let count = letter_positions(&grid).len();

            grid.recenter();
            let (min, max) = grid.letter_bounds().unwrap();
            let top = min.row;
            let bottom = rows - 1 - max.row;
            let left = min.column;
            let right = columns - 1 - max.column;
            prop_assert!(bottom == top || bottom == top + 1);
            prop_assert!(right == left || right == left + 1);
            prop_assert_eq!(letter_positions(&grid).len(), count);
        }
    }
}
