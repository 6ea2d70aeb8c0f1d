//! Core data structures for word puzzle grids.
//!
//! This crate provides the types shared by puzzle generation and rendering. It holds
//! no randomness: everything here is a plain value or a container mutated by callers.
//!
//! # Overview
//!
//! - [`position`]: Row/column coordinates inside a grid
//! - [`orientation`]: The lines along which a word can be written
//! - [`cell`]: A single grid cell and its tag vocabulary ([`CellTags`], [`DirectionTags`])
//! - [`grid`]: The fixed-size cell arena ([`Grid`])
//! - [`word`]: Words and their normalized letters ([`Word`], [`WordId`])
//! - [`fold`]: Case and diacritic folding used by word normalization and sorting
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{Grid, Position, WordId};
//!
//! let mut grid = Grid::new(3, 4);
//! let crossed = grid[Position::new(1, 2)].place_letter('A', WordId::new(0));
//! assert!(!crossed);
//! assert_eq!(grid[Position::new(1, 2)].letter(), Some('A'));
//! ```

pub mod cell;
pub mod fold;
pub mod grid;
pub mod orientation;
pub mod position;
pub mod word;

pub use self::{
    cell::{Cell, CellTags, DirectionTags, LineMarker},
    fold::LetterFolding,
    grid::Grid,
    orientation::Orientation,
    position::Position,
    word::{Word, WordId},
};
