//! Grid coordinates.

/// A cell coordinate inside a grid, zero-based from the top-left corner.
///
/// # Examples
///
/// ```
/// use wordlace_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.offset(1, -1), Some(Position::new(3, 2)));
/// assert_eq!(Position::new(0, 0).offset(-1, 0), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Moves the position by a signed amount along both axes.
    ///
    /// Returns `None` if either coordinate would become negative. The upper bound
    /// is the grid's business, see [`Grid::contains`](crate::Grid::contains).
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            column: self.column.checked_add_signed(d_column)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = Position::new(4, 4);
        assert_eq!(pos.offset(0, 0), Some(pos));
        assert_eq!(pos.offset(-4, 2), Some(Position::new(0, 6)));
        assert_eq!(pos.offset(-5, 0), None);
        assert_eq!(pos.offset(0, -5), None);
    }

    #[test]
    fn test_display_and_order() {
        assert_eq!(Position::new(1, 7).to_string(), "(1, 7)");
        // Row-major ordering
        assert!(Position::new(0, 9) < Position::new(1, 0));
    }
}
