//! Property tests for what the text views reveal.
//!
//! - A fill-in puzzle shows exactly its hint letters.
//! - A word search shows a letter in every cell, word letters and filler alike.
//! - A solution shows every word letter and nothing else.

use proptest::prelude::*;
use wordlace_core::{CellTags, Position};
use wordlace_generator::{GeneratedPuzzle, PuzzleConfig, PuzzleGenerator, PuzzleKind, PuzzleSeed};
use wordlace_render::{PuzzleView, text};

const POOL: [&str; 10] = [
    "anchor", "bridge", "canyon", "dolphin", "ember", "falcon", "glacier", "harbor", "island",
    "jungle",
];

fn glyphs(text: &str) -> Vec<Vec<char>> {
    text.lines()
        .map(|line| line.split(' ').filter_map(|g| g.chars().next()).collect())
        .collect()
}

fn glyph_at(glyphs: &[Vec<char>], pos: Position) -> char {
    glyphs[pos.row][pos.column]
}

fn check_views(puzzle: &GeneratedPuzzle) {
    let view = PuzzleView::new(puzzle);
    let shown = glyphs(&view.puzzle_as_text());
    let solution = glyphs(&view.solution_as_text());
    let grid = puzzle.grid();
    assert_eq!(shown.len(), grid.rows());
    assert_eq!(solution.len(), grid.rows());

    for pos in grid.positions() {
        let cell = &grid[pos];
        let expected = match puzzle.kind() {
            PuzzleKind::WordSearch => cell.letter(),
            PuzzleKind::FillIn => cell
                .letter()
                .filter(|_| cell.tags().contains(CellTags::HINT)),
        };
        let puzzle_glyph = glyph_at(&shown, pos);
        match expected {
            Some(letter) => assert_eq!(puzzle_glyph, letter),
            None => assert!(puzzle_glyph == text::HIDDEN || puzzle_glyph == text::BLANK),
        }

        let solution_glyph = glyph_at(&solution, pos);
        if cell.tags().contains(CellTags::LETTER) {
            assert_eq!(Some(solution_glyph), cell.letter());
        } else {
            assert_eq!(solution_glyph, text::BLANK);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn views_reveal_only_what_they_should(
        fill_in in any::<bool>(),
        words in proptest::sample::subsequence(POOL.to_vec(), 1..=6),
        rows in 8usize..16,
        columns in 8usize..16,
        seed in any::<i64>(),
    ) {
        let kind = if fill_in { PuzzleKind::FillIn } else { PuzzleKind::WordSearch };
        let generator = PuzzleGenerator::new(PuzzleConfig {
            kind,
            rows,
            columns,
            ..PuzzleConfig::default()
        });
        if let Ok(puzzle) = generator.generate_with_seed(&words, PuzzleSeed::from(seed)) {
            check_views(&puzzle);
        }
    }
}
