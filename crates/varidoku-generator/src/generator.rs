//! Seeded puzzle generation.

use log::{debug, trace};
use rand::{Rng, RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use varidoku_core::{Board, Difficulty, Pos};

use crate::{GeneratorConfig, PuzzleSeed};

/// A generated puzzle: the carved problem, its solution, and the seed
/// that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved board handed to the player.
    pub problem: Board,
    /// The fully solved board the problem was carved from.
    pub solution: Board,
    /// The seed that deterministically reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Error from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The backtracking search ran out of candidates before completing a
    /// grid.
    ///
    /// Every supported layout admits complete grids, so the search is not
    /// expected to hit this in practice; it exists so an exhausted search
    /// terminates with a report instead of being retried forever.
    #[display("exhausted the search space without completing a {size}×{size} grid")]
    Exhausted {
        /// The board size that failed to fill.
        size: usize,
    },
}

/// Generates puzzles for a fixed configuration.
///
/// The generator first fills a complete, rule-satisfying grid by
/// depth-first search with shuffled candidate values, then carves cells
/// out of a copy in a shuffled order until the configured number of givens
/// remains. Both phases consume one RNG stream derived from the seed, so a
/// seed pins down the puzzle exactly.
///
/// # Examples
///
/// ```
/// use varidoku_core::Difficulty;
/// use varidoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::with_difficulty(Difficulty::Hard);
/// let puzzle = generator.generate()?;
///
/// assert!(puzzle.solution.is_complete());
/// assert!(puzzle.solution.is_valid());
/// assert!((26..=30).contains(&puzzle.problem.filled_count()));
/// # Ok::<(), varidoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator for the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Creates a generator for a difficulty preset.
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.into())
    }

    /// The configuration this generator was built with.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// The drawn seed is recorded in the returned puzzle, so any result
    /// can be reproduced later with
    /// [`generate_with_seed`](Self::generate_with_seed).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Exhausted`] if the backtracking search
    /// runs out of candidates.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same generator configuration and seed always produce the same
    /// problem and solution.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Exhausted`] if the backtracking search
    /// runs out of candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use varidoku_core::Difficulty;
    /// use varidoku_generator::{PuzzleGenerator, PuzzleSeed};
    ///
    /// let generator = PuzzleGenerator::with_difficulty(Difficulty::Medium);
    /// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
    ///     .parse()
    ///     .unwrap();
    ///
    /// let puzzle = generator.generate_with_seed(seed)?;
    /// assert_eq!(generator.generate_with_seed(seed)?, puzzle);
    /// # Ok::<(), varidoku_generator::GenerateError>(())
    /// ```
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let layout = self.config.layout();
        let mut rng = Pcg64::from_seed(*seed.as_bytes());

        let mut solution = Board::empty(layout);
        if !fill_grid(&mut solution, &mut rng) {
            return Err(GenerateError::Exhausted {
                size: layout.size(),
            });
        }

        let keep = rng.random_range(self.config.keep_range());
        debug!(
            "carving {layout} puzzle down to {keep} of {} cells, seed {seed}",
            layout.cell_count()
        );
        let problem = carve(&solution, keep, &mut rng);

        Ok(GeneratedPuzzle {
            problem,
            solution,
            seed,
        })
    }
}

/// Fills the first empty cell (row-major) with a candidate that passes the
/// duplicate rules, recursing until the grid is complete. Candidates are
/// tried in a shuffled order; on a dead end every trial is undone before
/// reporting failure upward. Recursion depth is bounded by the cell count.
fn fill_grid(board: &mut Board, rng: &mut impl Rng) -> bool {
    let Some(pos) = first_empty(board) else {
        return true;
    };
    let mut candidates: Vec<u8> = board.layout().values().collect();
    candidates.shuffle(rng);
    for value in candidates {
        if board.placement_allowed(pos, value) {
            board.set(pos, value);
            if fill_grid(board, rng) {
                return true;
            }
            board.clear(pos);
        }
    }
    false
}

fn first_empty(board: &Board) -> Option<Pos> {
    board
        .layout()
        .positions()
        .find(|&pos| board.get(pos).is_none())
}

/// Empties cells of a copy of `solution` in a shuffled order until `keep`
/// filled cells remain.
fn carve(solution: &Board, keep: usize, rng: &mut impl Rng) -> Board {
    let mut problem = solution.clone();
    let mut positions: Vec<Pos> = problem.layout().positions().collect();
    positions.shuffle(rng);

    let mut filled = problem.filled_count();
    for pos in positions {
        if filled <= keep {
            break;
        }
        trace!("carving out {pos}");
        problem.clear(pos);
        filled -= 1;
    }
    problem
}
