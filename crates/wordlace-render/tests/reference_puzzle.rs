//! The reference word list at seed 17 on the default 15x15 grid.
//!
//! The generator's random sequence is fixed, so these grids must come out
//! identical on every platform and every run.

use wordlace_generator::{GeneratedPuzzle, PuzzleConfig, PuzzleGenerator, PuzzleKind, PuzzleSeed};
use wordlace_render::PuzzleView;

const WORDS: [&str; 5] = ["CROSSWORDS", "PUZZLE", "TESTING", "PHPUNIT", "GENERATOR"];

const WORD_LIST: &str = "CROSSWORDS\nGENERATOR\nPHPUNIT\nPUZZLE\nTESTING";

const WORD_SEARCH_PUZZLE: [&str; 15] = [
    "Z U E L Y Y U B Y B E L S I V",
    "S K L K F G A L L W F V D I M",
    "F E U J M D Q T M E N H R R O",
    "R W Q V C U E N O H B Q O O W",
    "W R G Q S S Y G N W I N W Q K",
    "F B J E T D N O L X N S S X G",
    "X S I I N O I T U T W C S Y U",
    "S I N U F E N Q P M N M O I U",
    "H G Q W S Y R A U H M H R N W",
    "B Z Y S J X R A N O P H C T E",
    "I Y Y W P W D N T D I U E K B",
    "G P U Z Z L E L Q O L C N M Y",
    "H V H U O Z B E V S R O N I N",
    "Y I U H Z R I F V P Y S Y T T",
    "Z N H R A E M I E T P D P B C",
];

const WORD_SEARCH_SOLUTION: [&str; 15] = [
    ". . . . . . . . . . . . S . .",
    ". . . . . . . . . . . . D . .",
    ". . . . . . . T . . . . R . .",
    ". . . . . . E . . . . . O . .",
    ". . G . . S . . . . . . W . .",
    ". . . E T . . . . . . . S . .",
    ". . . I N . . . . . . . S . .",
    ". . N . . E . . P . . . O . .",
    ". G . . . . R . . H . . R . .",
    ". . . . . . . A . . P . C . .",
    ". . . . . . . . T . . U . . .",
    ". P U Z Z L E . . O . . N . .",
    ". . . . . . . . . . R . . I .",
    ". . . . . . . . . . . . . . T",
    ". . . . . . . . . . . . . . .",
];

const FILL_IN_PUZZLE: [&str; 15] = [
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . _ . _ . . .",
    ". . . . _ _ _ _ _ E . _ . . .",
    ". . . . . . . . . _ . _ . . .",
    ". . . . . . . . . _ . _ . . .",
    ". . _ _ _ _ _ _ _ _ _ _ . . .",
    ". . . . . . . . . _ . _ . . .",
    ". . . _ _ _ _ _ _ _ . _ . . .",
    ". . . . . . . . . _ . . . . .",
    ". . . . . . . . . _ . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
];

const FILL_IN_SOLUTION: [&str; 15] = [
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . G . G . . .",
    ". . . . P U Z Z L E . N . . .",
    ". . . . . . . . . N . I . . .",
    ". . . . . . . . . E . T . . .",
    ". . C R O S S W O R D S . . .",
    ". . . . . . . . . A . E . . .",
    ". . . P H P U N I T . T . . .",
    ". . . . . . . . . O . . . . .",
    ". . . . . . . . . R . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
    ". . . . . . . . . . . . . . .",
];

fn generate(kind: PuzzleKind) -> GeneratedPuzzle {
    PuzzleGenerator::new(PuzzleConfig {
        kind,
        ..PuzzleConfig::default()
    })
    .generate_with_seed(&WORDS, PuzzleSeed::from(17))
    .unwrap()
}

#[test]
fn word_search_reference() {
    let puzzle = generate(PuzzleKind::WordSearch);
    assert!(puzzle.warnings().is_empty());
    let view = PuzzleView::new(&puzzle);
    assert_eq!(view.puzzle_as_text(), WORD_SEARCH_PUZZLE.join("\n"));
    assert_eq!(view.solution_as_text(), WORD_SEARCH_SOLUTION.join("\n"));
    assert_eq!(view.word_list_as_text(), WORD_LIST);
}

#[test]
fn fill_in_reference() {
    let puzzle = generate(PuzzleKind::FillIn);
    assert!(puzzle.warnings().is_empty());
    let view = PuzzleView::new(&puzzle);
    assert_eq!(view.puzzle_as_text(), FILL_IN_PUZZLE.join("\n"));
    assert_eq!(view.solution_as_text(), FILL_IN_SOLUTION.join("\n"));
    assert_eq!(view.word_list_as_text(), WORD_LIST);
}
