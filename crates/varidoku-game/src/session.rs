//! Mistake-limited game sessions.

use varidoku_core::{Board, Layout, Pos};
use varidoku_generator::GeneratedPuzzle;

use crate::{CellState, validate};

/// Status of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SessionStatus {
    /// Moves are still accepted.
    #[display("in progress")]
    InProgress,
    /// The grid is complete and matches the solution.
    #[display("solved")]
    Solved,
    /// The mistake limit was reached.
    #[display("failed")]
    Failed,
}

impl SessionStatus {
    /// Whether the session accepts no further moves.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

/// The result of one accepted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The entry matches the solution.
    Correct,
    /// The entry deviates from the solution.
    Incorrect {
        /// Whether the mistake counter went up. Overwriting one wrong
        /// value with another does not count again; the cell re-arms once
        /// it is corrected or cleared.
        counted: bool,
    },
}

/// Errors from [`Session`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The cell comes from the problem and stays fixed.
    #[display("cannot modify given cell at {pos}")]
    CannotModifyGivenCell {
        /// The targeted position.
        pos: Pos,
    },
    /// The session has already ended.
    #[display("session is already {status}")]
    SessionFinished {
        /// The terminal status the session is in.
        status: SessionStatus,
    },
    /// The position lies outside the board.
    #[display("position {pos} out of bounds for {layout}")]
    OutOfBounds {
        /// The rejected position.
        pos: Pos,
        /// The board layout.
        layout: Layout,
    },
    /// The value is not legal for the board.
    #[display("value {value} out of range for {layout}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// The board layout.
        layout: Layout,
    },
}

/// Errors from [`Session::from_boards`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionInitError {
    /// Problem and solution do not share a layout.
    #[display("board layouts differ: {problem} vs {solution}")]
    LayoutMismatch {
        /// Layout of the problem board.
        problem: Layout,
        /// Layout of the solution board.
        solution: Layout,
    },
    /// The solution board has empty cells.
    #[display("solution board is not complete")]
    IncompleteSolution,
    /// The solution board violates the duplicate rules.
    #[display("solution board violates the duplicate rules")]
    InvalidSolution,
    /// A problem cell holds a value the solution does not.
    #[display("problem cell at {pos} disagrees with the solution")]
    ProblemDisagreesWithSolution {
        /// The disagreeing position.
        pos: Pos,
    },
}

/// One play-through of one puzzle.
///
/// A session owns the visible grid (givens plus player entries) and the
/// solution it is judged against. Entries go through [`apply`](Self::apply),
/// which reports correctness, maintains the mistake count, and advances the
/// status; once the status is [`Solved`](SessionStatus::Solved) or
/// [`Failed`](SessionStatus::Failed) the grid is frozen.
///
/// The mistake rule follows re-arming semantics: a wrong entry on a cell
/// counts once, overwriting it with a different wrong value does not count
/// again, and correcting or clearing the cell re-arms it.
///
/// Sessions are plain values. Each one exclusively owns its grids and
/// counters, so concurrent sessions cannot interfere with each other.
///
/// # Examples
///
/// ```
/// use varidoku_core::Difficulty;
/// use varidoku_game::{MoveOutcome, Session};
/// use varidoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::with_difficulty(Difficulty::Easy);
/// let puzzle = generator.generate().unwrap();
/// let solution = puzzle.solution.clone();
/// let mut session = Session::new(puzzle);
///
/// // Play a correct value into the first empty cell
/// let pos = session
///     .layout()
///     .positions()
///     .find(|&pos| session.cell(pos).is_empty())
///     .expect("puzzle has empty cells");
/// let value = solution.get(pos).expect("solution is complete");
///
/// assert_eq!(session.apply(pos, value), Ok(MoveOutcome::Correct));
/// assert_eq!(session.mistakes(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    layout: Layout,
    cells: Vec<CellState>,
    solution: Board,
    mistakes: usize,
    mistake_limit: usize,
    status: SessionStatus,
}

impl Session {
    /// Number of mistakes a session tolerates by default before failing.
    pub const DEFAULT_MISTAKE_LIMIT: usize = 3;

    /// Creates a session from a generated puzzle with the default mistake
    /// limit.
    ///
    /// All filled cells of the problem become given cells; the rest start
    /// empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::with_mistake_limit(puzzle, Self::DEFAULT_MISTAKE_LIMIT)
    }

    /// Creates a session from a generated puzzle with an explicit mistake
    /// limit.
    ///
    /// The session fails once the mistake count reaches the limit, so a
    /// limit of 0 behaves like a limit of 1: the first counted mistake
    /// ends the session.
    #[must_use]
    pub fn with_mistake_limit(puzzle: GeneratedPuzzle, mistake_limit: usize) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let layout = problem.layout();
        let cells = layout
            .positions()
            .map(|pos| match problem.get(pos) {
                Some(value) => CellState::Given(value),
                None => CellState::Empty,
            })
            .collect();
        let mut this = Self {
            layout,
            cells,
            solution,
            mistakes: 0,
            mistake_limit,
            status: SessionStatus::InProgress,
        };
        if this.grid_matches_solution() {
            this.status = SessionStatus::Solved;
        }
        this
    }

    /// Creates a session from separate problem and solution boards.
    ///
    /// Unlike [`new`](Self::new), which trusts the generator, this
    /// constructor checks the pair for consistency first.
    ///
    /// # Errors
    ///
    /// Returns [`SessionInitError::LayoutMismatch`] if the boards do not
    /// share a layout, [`SessionInitError::IncompleteSolution`] or
    /// [`SessionInitError::InvalidSolution`] if the solution is not a
    /// complete rule-satisfying grid, and
    /// [`SessionInitError::ProblemDisagreesWithSolution`] if a problem
    /// cell deviates from the solution.
    pub fn from_boards(
        problem: &Board,
        solution: &Board,
        mistake_limit: usize,
    ) -> Result<Self, SessionInitError> {
        if problem.layout() != solution.layout() {
            return Err(SessionInitError::LayoutMismatch {
                problem: problem.layout(),
                solution: solution.layout(),
            });
        }
        if !solution.is_complete() {
            return Err(SessionInitError::IncompleteSolution);
        }
        if !solution.is_valid() {
            return Err(SessionInitError::InvalidSolution);
        }
        let layout = problem.layout();
        for pos in layout.positions() {
            if let Some(value) = problem.get(pos)
                && solution.get(pos) != Some(value)
            {
                return Err(SessionInitError::ProblemDisagreesWithSolution { pos });
            }
        }

        let cells = layout
            .positions()
            .map(|pos| match problem.get(pos) {
                Some(value) => CellState::Given(value),
                None => CellState::Empty,
            })
            .collect();
        let mut this = Self {
            layout,
            cells,
            solution: solution.clone(),
            mistakes: 0,
            mistake_limit,
            status: SessionStatus::InProgress,
        };
        if this.grid_matches_solution() {
            this.status = SessionStatus::Solved;
        }
        Ok(this)
    }

    /// Records a player entry at `pos` and reports its outcome.
    ///
    /// A correct entry may finish the session as
    /// [`Solved`](SessionStatus::Solved); a counted mistake that reaches
    /// the limit finishes it as [`Failed`](SessionStatus::Failed). A full
    /// grid that deviates from the solution somewhere keeps the session in
    /// progress, with the deviations listed by [`errors`](Self::errors).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionFinished`] once the session is over,
    /// [`SessionError::OutOfBounds`] or [`SessionError::ValueOutOfRange`]
    /// for arguments that do not fit the board, and
    /// [`SessionError::CannotModifyGivenCell`] for given cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use varidoku_core::{Board, Layout, Pos};
    /// use varidoku_game::{MoveOutcome, Session};
    ///
    /// let solution = Board::parse(Layout::GRID_3, "123 231 312").unwrap();
    /// let problem = Board::parse(Layout::GRID_3, "1.. 2.. ...").unwrap();
    /// let mut session = Session::from_boards(&problem, &solution, 3).unwrap();
    ///
    /// assert_eq!(
    ///     session.apply(Pos::new(0, 1), 2),
    ///     Ok(MoveOutcome::Correct)
    /// );
    /// assert_eq!(
    ///     session.apply(Pos::new(0, 2), 1),
    ///     Ok(MoveOutcome::Incorrect { counted: true })
    /// );
    /// assert_eq!(session.mistakes(), 1);
    /// ```
    pub fn apply(&mut self, pos: Pos, value: u8) -> Result<MoveOutcome, SessionError> {
        self.check_active()?;
        let index = self.checked_index(pos)?;
        if !self.layout.contains_value(value) {
            return Err(SessionError::ValueOutOfRange {
                value,
                layout: self.layout,
            });
        }
        if self.cells[index].is_given() {
            return Err(SessionError::CannotModifyGivenCell { pos });
        }

        let expected = self.solution.get(pos);
        let was_wrong =
            matches!(self.cells[index], CellState::Filled(old) if Some(old) != expected);
        self.cells[index] = CellState::Filled(value);

        if Some(value) == expected {
            if self.grid_matches_solution() {
                self.status = SessionStatus::Solved;
            }
            Ok(MoveOutcome::Correct)
        } else {
            let counted = !was_wrong;
            if counted {
                self.mistakes += 1;
                if self.mistakes >= self.mistake_limit {
                    self.status = SessionStatus::Failed;
                }
            }
            Ok(MoveOutcome::Incorrect { counted })
        }
    }

    /// Empties the player entry at `pos`.
    ///
    /// Clearing an already-empty cell is a no-op. The mistake count never
    /// goes down; clearing only re-arms the cell for future counting.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionFinished`] once the session is over,
    /// [`SessionError::OutOfBounds`] for positions outside the board, and
    /// [`SessionError::CannotModifyGivenCell`] for given cells.
    pub fn clear(&mut self, pos: Pos) -> Result<(), SessionError> {
        self.check_active()?;
        let index = self.checked_index(pos)?;
        if self.cells[index].is_given() {
            return Err(SessionError::CannotModifyGivenCell { pos });
        }
        self.cells[index] = CellState::Empty;
        Ok(())
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Pos) -> &CellState {
        assert!(
            self.layout.contains(pos),
            "position {pos} out of bounds for {}",
            self.layout
        );
        &self.cells[pos.row * self.layout.size() + pos.col]
    }

    /// The board layout this session plays on.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The current status.
    #[must_use]
    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of counted mistakes so far. Never decreases.
    #[must_use]
    #[inline]
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// The mistake limit this session was created with.
    #[must_use]
    #[inline]
    pub fn mistake_limit(&self) -> usize {
        self.mistake_limit
    }

    /// Mistakes left before the session fails.
    #[must_use]
    pub fn remaining_mistakes(&self) -> usize {
        self.mistake_limit.saturating_sub(self.mistakes)
    }

    /// The solution this session is judged against.
    #[must_use]
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Whether every cell holds a value.
    ///
    /// Completeness says nothing about correctness; see
    /// [`is_solved`](Self::is_solved) and [`errors`](Self::errors).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Whether the session ended in a win.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }

    /// The visible grid (givens plus player entries) as a board.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut board = Board::empty(self.layout);
        for pos in self.layout.positions() {
            if let Some(value) = self.cell(pos).value() {
                board.set(pos, value);
            }
        }
        board
    }

    /// Filled cells deviating from the solution, in row-major order.
    ///
    /// Reading the deviations never changes the grid or the mistake
    /// count.
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn errors(&self) -> Vec<Pos> {
        validate::check_all_errors(&self.board(), &self.solution)
            .expect("board and solution share the session layout")
    }

    fn check_active(&self) -> Result<(), SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::SessionFinished {
                status: self.status,
            });
        }
        Ok(())
    }

    fn checked_index(&self, pos: Pos) -> Result<usize, SessionError> {
        if !self.layout.contains(pos) {
            return Err(SessionError::OutOfBounds {
                pos,
                layout: self.layout,
            });
        }
        Ok(pos.row * self.layout.size() + pos.col)
    }

    fn grid_matches_solution(&self) -> bool {
        self.layout
            .positions()
            .all(|pos| self.cell(pos).value() == self.solution.get(pos))
    }
}
