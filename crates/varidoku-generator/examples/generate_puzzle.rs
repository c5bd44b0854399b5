//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty preset
//! - Generate a random puzzle, or replay one from a seed or phrase
//! - Display the problem, solution, and seed
//! - Sample many puzzles and report the kept-cell distribution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty medium
//! ```
//!
//! Replay a puzzle from its 64-hex-char seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```
//!
//! Derive the seed from a phrase, e.g. for a daily puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase 2026-08-22
//! ```
//!
//! Sample the kept-cell distribution of a preset:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --samples 10000
//! ```

use std::{collections::BTreeMap, process, str::FromStr as _};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use varidoku_core::{Board, Difficulty};
use varidoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset to generate for.
    #[arg(long, value_name = "DIFFICULTY", default_value = "hard")]
    difficulty: DifficultyArg,

    /// Replay the puzzle for an explicit 64-hex-char seed.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase (e.g. a date string).
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Sample this many puzzles and report the kept-cell distribution.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::with_difficulty(args.difficulty.into());

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        report_distribution(&generator, samples);
        return;
    }

    let seed = match explicit_seed(&args) {
        Ok(seed) => seed,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let result = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn explicit_seed(args: &Args) -> Result<Option<PuzzleSeed>, String> {
    if let Some(hex) = &args.seed {
        let seed = PuzzleSeed::from_str(hex).map_err(|err| format!("Invalid --seed: {err}"))?;
        return Ok(Some(seed));
    }
    Ok(args.phrase.as_deref().map(PuzzleSeed::from_phrase))
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem:");
    print_board(&puzzle.problem);
    println!();
    println!("Solution:");
    print_board(&puzzle.solution);
}

fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

fn report_distribution(generator: &PuzzleGenerator, samples: usize) {
    let histogram = (0..samples)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate().unwrap();
            puzzle.problem.filled_count()
        })
        .fold(BTreeMap::new, |mut map: BTreeMap<usize, usize>, kept| {
            *map.entry(kept).or_insert(0) += 1;
            map
        })
        .reduce(BTreeMap::new, |mut left, right| {
            for (kept, count) in right {
                *left.entry(kept).or_insert(0) += count;
            }
            left
        });

    println!("Kept-cell distribution over {samples} samples:");
    for (kept, count) in histogram {
        println!("  {kept:>2} cells: {count}");
    }
}
