//! Word orientations.

use std::ops::RangeInclusive;

/// The line along which a word is written.
///
/// Every orientation has a canonical step that walks from a word's first grid cell
/// to its last one. A reversed word is laid along the same step with its letters
/// in reverse order.
///
/// # Examples
///
/// ```
/// use wordlace_core::Orientation;
///
/// assert_eq!(Orientation::DiagonalUp.step(), (-1, 1));
/// assert_eq!(Orientation::Vertical.to_string(), "vertical");
///
/// // A 4-letter diagonal-up word must start at row 3 or below in a 5-row grid.
/// assert_eq!(Orientation::DiagonalUp.anchor_rows(5, 4), Some(3..=4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Orientation {
    /// Left to right.
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom.
    #[display("vertical")]
    Vertical,
    /// Top-left to bottom-right.
    #[display("diagonal-down")]
    DiagonalDown,
    /// Bottom-left to top-right.
    #[display("diagonal-up")]
    DiagonalUp,
}

impl Orientation {
    /// All orientations, in tag declaration order.
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Orientations available to word-search puzzles.
    pub const WORD_SEARCH: [Self; 4] = Self::ALL;

    /// Orientations available to fill-in puzzles.
    pub const FILL_IN: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the `(row, column)` step between consecutive letters.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (-1, 1),
        }
    }

    /// Returns the step towards one side of the line.
    ///
    /// The opposite side is the negated step.
    #[must_use]
    pub const fn side_step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
            Self::DiagonalDown => (1, -1),
            Self::DiagonalUp => (1, 1),
        }
    }

    /// Returns the rows where a word of `len` letters may start so that it stays in
    /// a grid of `rows` rows, or `None` if it cannot fit at all.
    #[must_use]
    pub fn anchor_rows(self, rows: usize, len: usize) -> Option<RangeInclusive<usize>> {
        if len == 0 || rows == 0 {
            return None;
        }
        match self {
            Self::Horizontal => Some(0..=rows - 1),
            Self::Vertical | Self::DiagonalDown => (len <= rows).then(|| 0..=rows - len),
            Self::DiagonalUp => (len <= rows).then(|| len - 1..=rows - 1),
        }
    }

    /// Returns the columns where a word of `len` letters may start so that it stays
    /// in a grid of `columns` columns, or `None` if it cannot fit at all.
    #[must_use]
    pub fn anchor_columns(self, columns: usize, len: usize) -> Option<RangeInclusive<usize>> {
        if len == 0 || columns == 0 {
            return None;
        }
        match self {
            Self::Vertical => Some(0..=columns - 1),
            Self::Horizontal | Self::DiagonalDown | Self::DiagonalUp => {
                (len <= columns).then(|| 0..=columns - len)
            }
        }
    }
}
