//! Game sessions and move validation for varidoku puzzles.
//!
//! Two layers live here:
//!
//! - [`validate`]: pure comparisons of a play grid against its solution.
//!   [`check_move`](validate::check_move) judges a single entry,
//!   [`check_win`](validate::check_win) the whole grid, and
//!   [`check_all_errors`](validate::check_all_errors) lists every deviating
//!   filled cell. None of them carry state or mutate anything.
//! - [`Session`]: one play-through of one puzzle. It owns the visible grid
//!   and the solution, guards given cells, counts mistakes under the
//!   mistake rule, and walks the state machine from
//!   [`InProgress`](SessionStatus::InProgress) to
//!   [`Solved`](SessionStatus::Solved) or [`Failed`](SessionStatus::Failed).
//!
//! Sessions are plain owned values with no shared state, so any number of
//! them can run side by side.
//!
//! # Examples
//!
//! ```
//! use varidoku_core::Difficulty;
//! use varidoku_game::{Session, SessionStatus};
//! use varidoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::with_difficulty(Difficulty::Easy);
//! let puzzle = generator.generate().unwrap();
//! let mut session = Session::new(puzzle);
//!
//! assert_eq!(session.status(), SessionStatus::InProgress);
//! assert_eq!(session.mistakes(), 0);
//! ```

pub mod cell;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use self::{
    cell::CellState,
    session::{MoveOutcome, Session, SessionError, SessionInitError, SessionStatus},
    validate::ValidateError,
};
