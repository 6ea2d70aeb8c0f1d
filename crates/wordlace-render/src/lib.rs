//! Text and HTML views of generated puzzles.
//!
//! # Overview
//!
//! - [`text`]: Puzzle and solution grids as plain text
//! - [`html`]: Puzzle and solution grids as HTML tables with per-cell classes
//! - [`word_list`]: Sorted and grouped word lists
//! - [`table`]: The generic HTML table builder used by the HTML views
//!
//! [`PuzzleView`] bundles all six views of one puzzle.
//!
//! # Examples
//!
//! ```
//! use wordlace_generator::{PuzzleConfig, PuzzleGenerator, PuzzleKind, PuzzleSeed};
//! use wordlace_render::PuzzleView;
//!
//! let generator = PuzzleGenerator::new(PuzzleConfig {
//!     kind: PuzzleKind::FillIn,
//!     rows: 8,
//!     columns: 8,
//!     ..PuzzleConfig::default()
//! });
//! let puzzle = generator.generate_with_seed(&["Rust", "trait", "crate"], PuzzleSeed::from(3))?;
//! let view = PuzzleView::new(&puzzle);
//!
//! let solution = view.solution_as_text();
//! assert_eq!(solution.lines().count(), 8);
//! assert!(view.puzzle_as_html().starts_with("<table class=\"fill-in puzzle\">"));
//! # Ok::<(), wordlace_generator::GenerationFailure>(())
//! ```

use wordlace_generator::GeneratedPuzzle;

pub use self::word_list::WordListOptions;

pub mod html;
pub mod table;
pub mod text;
pub mod word_list;

/// All renderings of one puzzle.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleView<'a> {
    puzzle: &'a GeneratedPuzzle,
    word_list: WordListOptions,
}

impl<'a> PuzzleView<'a> {
    /// Creates a view with the default word list layout.
    #[must_use]
    pub fn new(puzzle: &'a GeneratedPuzzle) -> Self {
        Self {
            puzzle,
            word_list: WordListOptions::default(),
        }
    }

    /// Sets the word list layout.
    #[must_use]
    pub fn with_word_list(mut self, options: WordListOptions) -> Self {
        self.word_list = options;
        self
    }

    /// Returns the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &'a GeneratedPuzzle {
        self.puzzle
    }

    /// See [`text::puzzle_as_text`].
    #[must_use]
    pub fn puzzle_as_text(&self) -> String {
        text::puzzle_as_text(self.puzzle)
    }

    /// See [`text::solution_as_text`].
    #[must_use]
    pub fn solution_as_text(&self) -> String {
        text::solution_as_text(self.puzzle)
    }

    /// See [`word_list::word_list_as_text`].
    #[must_use]
    pub fn word_list_as_text(&self) -> String {
        word_list::word_list_as_text(self.puzzle, &self.word_list)
    }

    /// See [`html::puzzle_as_html`].
    #[must_use]
    pub fn puzzle_as_html(&self) -> String {
        html::puzzle_as_html(self.puzzle)
    }

    /// See [`html::solution_as_html`].
    #[must_use]
    pub fn solution_as_html(&self) -> String {
        html::solution_as_html(self.puzzle)
    }

    /// See [`word_list::word_list_as_html`].
    #[must_use]
    pub fn word_list_as_html(&self) -> String {
        word_list::word_list_as_html(self.puzzle, &self.word_list)
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::CellTags;
    use wordlace_generator::{PuzzleConfig, PuzzleGenerator, PuzzleKind, PuzzleSeed};

    use super::*;

    const WORDS: [&str; 5] = ["CROSSWORDS", "PUZZLE", "TESTING", "PHPUNIT", "GENERATOR"];

    fn generate(kind: PuzzleKind, seed: i64) -> GeneratedPuzzle {
        PuzzleGenerator::new(PuzzleConfig {
            kind,
            ..PuzzleConfig::default()
        })
        .generate_with_seed(&WORDS, PuzzleSeed::from(seed))
        .unwrap()
    }

    #[test]
    fn test_reference_word_list() {
        for kind in [PuzzleKind::WordSearch, PuzzleKind::FillIn] {
            let puzzle = generate(kind, 17);
            assert_eq!(puzzle.words().count(), WORDS.len());
            assert_eq!(
                PuzzleView::new(&puzzle).word_list_as_text(),
                "CROSSWORDS\nGENERATOR\nPHPUNIT\nPUZZLE\nTESTING"
            );
        }
    }

    #[test]
    fn test_views_are_deterministic() {
        for kind in [PuzzleKind::WordSearch, PuzzleKind::FillIn] {
            let a = generate(kind, 17);
            let b = generate(kind, 17);
            let (a, b) = (PuzzleView::new(&a), PuzzleView::new(&b));
            assert_eq!(a.puzzle_as_text(), b.puzzle_as_text());
            assert_eq!(a.solution_as_text(), b.solution_as_text());
            assert_eq!(a.word_list_as_text(), b.word_list_as_text());
            assert_eq!(a.puzzle_as_html(), b.puzzle_as_html());
        }
    }

    #[test]
    fn test_word_search_views() {
        let puzzle = generate(PuzzleKind::WordSearch, 8);
        let view = PuzzleView::new(&puzzle);

        let grid_text = view.puzzle_as_text();
        assert_eq!(grid_text.lines().count(), 15);
        assert!(grid_text.lines().all(|line| line.chars().count() == 29));
        assert!(!grid_text.contains(text::BLANK));

        let solution = view.solution_as_text();
        let letters = solution.chars().filter(char::is_ascii_uppercase).count();
        let word_cells = puzzle
            .grid()
            .positions()
            .filter(|pos| puzzle.grid()[*pos].tags().contains(CellTags::LETTER))
            .count();
        assert_eq!(letters, word_cells);

        let html = view.puzzle_as_html();
        assert!(!html.contains("filler"));
        assert!(view.solution_as_html().contains("filler"));
    }

    #[test]
    fn test_fill_in_puzzle_reveals_only_hints() {
        let puzzle = generate(PuzzleKind::FillIn, 17);
        let view = PuzzleView::new(&puzzle);
        let hints = puzzle
            .grid()
            .positions()
            .filter(|pos| puzzle.grid()[*pos].tags().contains(CellTags::HINT))
            .count();
        let shown = view
            .puzzle_as_text()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .count();
        assert_eq!(shown, hints);
    }

    #[test]
    fn test_word_list_html_groups() {
        let puzzle = generate(PuzzleKind::WordSearch, 17);
        let view = PuzzleView::new(&puzzle).with_word_list(WordListOptions {
            sorted: true,
            columns: 2,
        });
        let html = view.word_list_as_html();
        assert!(html.starts_with("<table class=\"word-list\">\n<tr><td class=\"words\"><ul><li>"));
        assert_eq!(html.matches("<ul>").count(), puzzle.words().count().min(2));
        assert_eq!(html.matches("<li>").count(), puzzle.words().count());
    }
}
