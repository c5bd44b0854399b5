//! Puzzle generation for varidoku boards.
//!
//! A [`PuzzleGenerator`] produces a fully solved grid by randomized
//! backtracking and then carves cells out of a copy until a configured
//! number of givens remains. The result is a [`GeneratedPuzzle`] holding
//! the carved problem, its solution, and the [`PuzzleSeed`] that
//! reproduces both.
//!
//! Generation is deterministic per seed: [`PuzzleGenerator::generate`]
//! draws a fresh random seed, while
//! [`PuzzleGenerator::generate_with_seed`] replays a known one. Seeds can
//! also be derived from phrases, which is how date-keyed daily puzzles are
//! built.
//!
//! Carved problems are not checked for solution uniqueness; a problem may
//! admit completions other than the stored solution.
//!
//! # Examples
//!
//! ```
//! use varidoku_core::Difficulty;
//! use varidoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::with_difficulty(Difficulty::Hard);
//!
//! // One seed, one puzzle
//! let seed = PuzzleSeed::from_phrase("2026-08-22");
//! let first = generator.generate_with_seed(seed)?;
//! let second = generator.generate_with_seed(seed)?;
//! assert_eq!(first, second);
//!
//! assert!(first.solution.is_complete());
//! assert!(first.solution.is_valid());
//! # Ok::<(), varidoku_generator::GenerateError>(())
//! ```

pub mod config;
pub mod generator;
pub mod seed;

// Re-export commonly used types
pub use self::{
    config::{GeneratorConfig, GeneratorConfigError},
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
