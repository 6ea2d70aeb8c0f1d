//! Grid cells and their tag vocabulary.
//!
//! A [`Cell`] carries an optional letter plus two tag sets. [`CellTags`] describes
//! what the cell is (a word letter, a filler, a crossing, a hint, a word boundary).
//! [`DirectionTags`] records which word lines pass through it and where they begin
//! and end. Renderers turn both sets into CSS class names, so every flag has a
//! stable name that is part of the output.

use tinyvec::TinyVec;

use crate::{Orientation, WordId};

bitflags::bitflags! {
    /// What a cell holds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellTags: u16 {
        /// The cell holds a letter of a placed word.
        const LETTER = 1 << 0;
        /// The cell holds a random filler letter.
        const FILLER = 1 << 1;
        /// Two or more words share the cell.
        const CROSS = 1 << 2;
        /// The letter is revealed in the puzzle view.
        const HINT = 1 << 3;
        /// First grid cell of a word.
        const BEGIN_WORD = 1 << 4;
        /// Last grid cell of a word.
        const END_WORD = 1 << 5;
        /// Cell where a word is read from.
        const START_WORD = 1 << 6;
        /// A horizontal word is read from this cell right to left.
        const REVERSE_HORIZONTAL = 1 << 7;
        /// A vertical word is read from this cell bottom to top.
        const REVERSE_VERTICAL = 1 << 8;
        /// A horizontal word is read from this cell left to right.
        const NO_REVERSE_HORIZONTAL = 1 << 9;
        /// A vertical word is read from this cell top to bottom.
        const NO_REVERSE_VERTICAL = 1 << 10;
    }
}

impl CellTags {
    const NAMES: [(Self, &'static str); 11] = [
        (Self::LETTER, "letter"),
        (Self::FILLER, "filler"),
        (Self::CROSS, "cross"),
        (Self::HINT, "hint"),
        (Self::BEGIN_WORD, "begin-word"),
        (Self::END_WORD, "end-word"),
        (Self::START_WORD, "start-word"),
        (Self::REVERSE_HORIZONTAL, "reverse-horizontal"),
        (Self::REVERSE_VERTICAL, "reverse-vertical"),
        (Self::NO_REVERSE_HORIZONTAL, "no-reverse-horizontal"),
        (Self::NO_REVERSE_VERTICAL, "no-reverse-vertical"),
    ];

    /// Returns the reading-direction tag for a word written along `orientation`.
    ///
    /// Only horizontal and vertical words carry one.
    #[must_use]
    pub fn reading(orientation: Orientation, reversed: bool) -> Self {
        match (orientation, reversed) {
            (Orientation::Horizontal, false) => Self::NO_REVERSE_HORIZONTAL,
            (Orientation::Horizontal, true) => Self::REVERSE_HORIZONTAL,
            (Orientation::Vertical, false) => Self::NO_REVERSE_VERTICAL,
            (Orientation::Vertical, true) => Self::REVERSE_VERTICAL,
            (Orientation::DiagonalDown | Orientation::DiagonalUp, _) => Self::empty(),
        }
    }

    /// Iterates over the kebab-case names of the set flags, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// Where along a word line a letter sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineMarker {
    /// First letter in grid order.
    Begin,
    /// Any letter between the first and the last.
    Middle,
    /// Last letter in grid order.
    End,
}

bitflags::bitflags! {
    /// Which word lines pass through a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionTags: u16 {
        /// Inside a horizontal word.
        const HORIZONTAL = 1 << 0;
        /// First cell of a horizontal word.
        const HORIZONTAL_BEGIN = 1 << 1;
        /// Last cell of a horizontal word.
        const HORIZONTAL_END = 1 << 2;
        /// Inside a vertical word.
        const VERTICAL = 1 << 3;
        /// First cell of a vertical word.
        const VERTICAL_BEGIN = 1 << 4;
        /// Last cell of a vertical word.
        const VERTICAL_END = 1 << 5;
        /// Inside a diagonal-down word.
        const DIAGONAL_DOWN = 1 << 6;
        /// First cell of a diagonal-down word.
        const DIAGONAL_DOWN_BEGIN = 1 << 7;
        /// Last cell of a diagonal-down word.
        const DIAGONAL_DOWN_END = 1 << 8;
        /// Inside a diagonal-up word.
        const DIAGONAL_UP = 1 << 9;
        /// First cell of a diagonal-up word.
        const DIAGONAL_UP_BEGIN = 1 << 10;
        /// Last cell of a diagonal-up word.
        const DIAGONAL_UP_END = 1 << 11;
    }
}

impl DirectionTags {
    const NAMES: [(Self, &'static str); 12] = [
        (Self::HORIZONTAL, "horizontal"),
        (Self::HORIZONTAL_BEGIN, "horizontal-begin"),
        (Self::HORIZONTAL_END, "horizontal-end"),
        (Self::VERTICAL, "vertical"),
        (Self::VERTICAL_BEGIN, "vertical-begin"),
        (Self::VERTICAL_END, "vertical-end"),
        (Self::DIAGONAL_DOWN, "diagonal-down"),
        (Self::DIAGONAL_DOWN_BEGIN, "diagonal-down-begin"),
        (Self::DIAGONAL_DOWN_END, "diagonal-down-end"),
        (Self::DIAGONAL_UP, "diagonal-up"),
        (Self::DIAGONAL_UP_BEGIN, "diagonal-up-begin"),
        (Self::DIAGONAL_UP_END, "diagonal-up-end"),
    ];

    /// Returns the flag for a letter at `marker` on a line along `orientation`.
    #[must_use]
    pub fn marker(orientation: Orientation, marker: LineMarker) -> Self {
        let base = match orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 3,
            Orientation::DiagonalDown => 6,
            Orientation::DiagonalUp => 9,
        };
        let offset = match marker {
            LineMarker::Middle => 0,
            LineMarker::Begin => 1,
            LineMarker::End => 2,
        };
        Self::from_bits_retain(1 << (base + offset))
    }

    /// Returns all three flags of `orientation`.
    #[must_use]
    pub fn orientation(orientation: Orientation) -> Self {
        Self::marker(orientation, LineMarker::Begin)
            | Self::marker(orientation, LineMarker::Middle)
            | Self::marker(orientation, LineMarker::End)
    }

    /// Returns `true` if a word along `orientation` passes through the cell.
    #[must_use]
    pub fn has_orientation(self, orientation: Orientation) -> bool {
        self.intersects(Self::orientation(orientation))
    }

    /// Iterates over the kebab-case names of the set flags, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// A single grid cell.
///
/// A cell starts empty. Placing a letter records the word that owns it; a second
/// word placing the same letter turns the cell into a crossing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    tags: CellTags,
    directions: DirectionTags,
    words: TinyVec<[WordId; 2]>,
}

impl Cell {
    /// Returns the letter, if any.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns `true` if the cell holds no letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Returns the cell tags.
    #[must_use]
    pub fn tags(&self) -> CellTags {
        self.tags
    }

    /// Returns the direction tags.
    #[must_use]
    pub fn directions(&self) -> DirectionTags {
        self.directions
    }

    /// Returns the words occupying the cell, in placement order.
    #[must_use]
    pub fn words(&self) -> &[WordId] {
        &self.words
    }

    /// Writes a word letter into the cell.
    ///
    /// Returns `true` if the cell was already occupied, i.e. the placement crosses
    /// another word. The caller checks letter compatibility beforehand.
    pub fn place_letter(&mut self, letter: char, word: WordId) -> bool {
        let crossed = self.letter.is_some();
        debug_assert!(!crossed || self.letter == Some(letter));
        self.letter = Some(letter);
        self.tags |= CellTags::LETTER;
        if crossed {
            self.tags |= CellTags::CROSS;
        }
        self.words.push(word);
        crossed
    }

    /// Writes a filler letter into an empty cell.
    pub fn fill(&mut self, letter: char) {
        debug_assert!(self.is_empty());
        self.letter = Some(letter);
        self.tags |= CellTags::FILLER;
    }

    /// Adds cell tags.
    pub fn insert_tags(&mut self, tags: CellTags) {
        self.tags |= tags;
    }

    /// Adds direction tags.
    pub fn insert_directions(&mut self, directions: DirectionTags) {
        self.directions |= directions;
    }
}
