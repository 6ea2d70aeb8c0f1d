//! Example generating word puzzles and printing their text views.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator` from command-line arguments
//! - Generate several puzzles from consecutive seeds in parallel
//! - Render the puzzle, solution and word list with `PuzzleView`
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- crosswords puzzle testing phpunit generator
//! ```
//!
//! Generate a fill-in puzzle with a fixed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --kind fill-in --seed 17 crosswords puzzle testing
//! ```
//!
//! Generate eight puzzles from seeds 100..108 and print them as HTML:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 100 --count 8 --html lantern harbor meadow
//! ```
//!
//! Set `RUST_LOG=debug` to follow the placement retries.

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use wordlace_generator::{
    Difficulty, GeneratedPuzzle, GenerationFailure, PuzzleConfig, PuzzleGenerator, PuzzleKind,
    PuzzleSeed,
};
use wordlace_render::{PuzzleView, WordListOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    WordSearch,
    FillIn,
}

impl From<Kind> for PuzzleKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::WordSearch => Self::WordSearch,
            Kind::FillIn => Self::FillIn,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to place.
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,

    /// Puzzle variant.
    #[arg(long, value_name = "KIND", default_value = "word-search")]
    kind: Kind,

    /// Difficulty level (easy, medium, hard, expert).
    #[arg(short, long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Grid rows.
    #[arg(long, value_name = "ROWS", default_value_t = 15)]
    rows: usize,

    /// Grid columns.
    #[arg(long, value_name = "COLUMNS", default_value_t = 15)]
    columns: usize,

    /// Words to sample; 0 uses all of them.
    #[arg(short, long, value_name = "COUNT", default_value_t = 0)]
    number_of_words: usize,

    /// First seed. A random one is drawn when omitted.
    #[arg(short, long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles, generated from consecutive seeds.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Word list groups.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    word_columns: usize,

    /// Print HTML tables instead of text.
    #[arg(long)]
    html: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let generator = PuzzleGenerator::new(PuzzleConfig {
        kind: args.kind.into(),
        rows: args.rows,
        columns: args.columns,
        number_of_words: args.number_of_words,
        difficulty: args.difficulty,
        ..PuzzleConfig::default()
    });
    let first = args.seed.unwrap_or_else(PuzzleSeed::random).value();
    let options = WordListOptions {
        sorted: true,
        columns: args.word_columns,
    };

    let results: Vec<Result<GeneratedPuzzle, GenerationFailure>> = (0..args.count)
        .into_par_iter()
        .map(|i| {
            let offset = i64::try_from(i).unwrap_or(i64::MAX);
            let seed = PuzzleSeed::from(first.saturating_add(offset));
            generator.generate_with_seed(&args.words, seed)
        })
        .collect();

    let mut failed = false;
    for result in results {
        match result {
            Ok(puzzle) => print_puzzle(&PuzzleView::new(&puzzle).with_word_list(options), args.html),
            Err(failure) => {
                failed = true;
                eprintln!("{failure}");
                for warning in failure.warnings() {
                    eprintln!("  warning: {warning}");
                }
            }
        }
    }
    if failed {
        process::exit(1);
    }
}

fn print_puzzle(view: &PuzzleView<'_>, html: bool) {
    let puzzle = view.puzzle();
    log::info!("printing {} puzzle (seed {})", puzzle.kind(), puzzle.seed());

    println!("Seed:");
    println!("  {}", puzzle.seed());
    println!();

    if !puzzle.warnings().is_empty() {
        println!("Warnings:");
        for warning in puzzle.warnings() {
            println!("  {warning}");
        }
        println!();
    }

    let (problem, solution, words) = if html {
        (
            view.puzzle_as_html(),
            view.solution_as_html(),
            view.word_list_as_html(),
        )
    } else {
        (
            view.puzzle_as_text(),
            view.solution_as_text(),
            view.word_list_as_text(),
        )
    };
    println!("Puzzle:");
    println!("{problem}");
    println!();
    println!("Solution:");
    println!("{solution}");
    println!();
    println!("Words:");
    println!("{words}");
    println!();
}
