//! Pure comparisons of a play grid against its solution.
//!
//! These functions read their boards, compare, and return; they carry no
//! state and never mutate anything. The mistake bookkeeping of
//! [`Session`](crate::Session) is layered on top of them.

use varidoku_core::{Board, Layout, Pos};

/// Errors from the validation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidateError {
    /// The two boards do not share a layout.
    #[display("board layouts differ: {puzzle} vs {solution}")]
    LayoutMismatch {
        /// Layout of the play grid.
        puzzle: Layout,
        /// Layout of the solution.
        solution: Layout,
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

/// Whether placing `value` at `pos` would agree with the solution.
///
/// This is an exact comparison against the solution cell. A value that
/// merely satisfies the duplicate rules but deviates from the stored
/// solution still counts as wrong.
///
/// # Errors
///
/// Returns [`ValidateError::OutOfBounds`] if `pos` is outside the board
/// and [`ValidateError::ValueOutOfRange`] if `value` is not in `1..=N`.
///
/// # Examples
///
/// ```
/// use varidoku_core::{Board, Layout, Pos};
/// use varidoku_game::validate;
///
/// let solution = Board::parse(Layout::GRID_3, "123 231 312")?;
///
/// assert_eq!(validate::check_move(&solution, Pos::new(0, 1), 2), Ok(true));
/// assert_eq!(validate::check_move(&solution, Pos::new(0, 1), 3), Ok(false));
/// assert!(validate::check_move(&solution, Pos::new(0, 1), 4).is_err());
/// # Ok::<(), varidoku_core::ParseBoardError>(())
/// ```
pub fn check_move(solution: &Board, pos: Pos, value: u8) -> Result<bool, ValidateError> {
    let layout = solution.layout();
    if !layout.contains(pos) {
        return Err(ValidateError::OutOfBounds { pos, layout });
    }
    if !layout.contains_value(value) {
        return Err(ValidateError::ValueOutOfRange { value, layout });
    }
    Ok(solution.get(pos) == Some(value))
}

/// Whether `puzzle` is complete and matches `solution` everywhere.
///
/// A grid that is full but deviates somewhere is not a win; callers can
/// tell that state apart via [`Board::is_complete`] plus
/// [`check_all_errors`].
///
/// # Errors
///
/// Returns [`ValidateError::LayoutMismatch`] if the boards do not share a
/// layout.
pub fn check_win(puzzle: &Board, solution: &Board) -> Result<bool, ValidateError> {
    check_layouts(puzzle, solution)?;
    Ok(puzzle.is_complete() && puzzle == solution)
}

/// Lists every filled cell of `puzzle` that deviates from `solution`, in
/// row-major order.
///
/// Empty cells are never reported, so an empty result means "no errors
/// among the filled cells", not "solved". Repeated calls on the same
/// boards return the same list.
///
/// # Errors
///
/// Returns [`ValidateError::LayoutMismatch`] if the boards do not share a
/// layout.
pub fn check_all_errors(puzzle: &Board, solution: &Board) -> Result<Vec<Pos>, ValidateError> {
    check_layouts(puzzle, solution)?;
    let errors = puzzle
        .layout()
        .positions()
        .filter(|&pos| {
            puzzle
                .get(pos)
                .is_some_and(|value| solution.get(pos) != Some(value))
        })
        .collect();
    Ok(errors)
}

fn check_layouts(puzzle: &Board, solution: &Board) -> Result<(), ValidateError> {
    if puzzle.layout() != solution.layout() {
        return Err(ValidateError::LayoutMismatch {
            puzzle: puzzle.layout(),
            solution: solution.layout(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use varidoku_core::Layout;

    use super::*;

    const SOLUTION_9: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn solution_3() -> Board {
        Board::parse(Layout::GRID_3, "123 231 312").unwrap()
    }

    fn solution_9() -> Board {
        Board::parse(Layout::GRID_9, SOLUTION_9).unwrap()
    }

    #[test]
    fn test_check_move() {
        let solution = solution_3();
        assert_eq!(check_move(&solution, Pos::new(1, 2), 1), Ok(true));
        assert_eq!(check_move(&solution, Pos::new(1, 2), 2), Ok(false));
        assert_eq!(check_move(&solution, Pos::new(2, 0), 3), Ok(true));

        assert_eq!(
            check_move(&solution, Pos::new(3, 0), 1),
            Err(ValidateError::OutOfBounds {
                pos: Pos::new(3, 0),
                layout: Layout::GRID_3,
            })
        );
        assert_eq!(
            check_move(&solution, Pos::new(0, 0), 4),
            Err(ValidateError::ValueOutOfRange {
                value: 4,
                layout: Layout::GRID_3,
            })
        );
        assert_eq!(
            check_move(&solution, Pos::new(0, 0), 0),
            Err(ValidateError::ValueOutOfRange {
                value: 0,
                layout: Layout::GRID_3,
            })
        );
    }

    #[test]
    fn test_check_win() {
        let solution = solution_3();

        // Incomplete grids never win, even when everything placed so far
        // is right
        let partial = Board::parse(Layout::GRID_3, "123 231 31.").unwrap();
        assert_eq!(check_win(&partial, &solution), Ok(false));

        // Complete and equal wins
        assert_eq!(check_win(&solution, &solution), Ok(true));

        // Complete but deviating does not
        let wrong = Board::parse(Layout::GRID_3, "123 231 321").unwrap();
        assert!(wrong.is_complete());
        assert_eq!(check_win(&wrong, &solution), Ok(false));
    }

    #[test]
    fn test_check_all_errors_reports_exact_deviations() {
        let solution = solution_9();
        assert!(solution.is_valid());

        // Alter a single cell of the valid grid
        let mut grid = solution.clone();
        grid.set(Pos::new(4, 7), 2);
        assert_eq!(
            check_all_errors(&grid, &solution),
            Ok(vec![Pos::new(4, 7)])
        );

        // Results come back in row-major order
        grid.set(Pos::new(6, 1), 9);
        grid.set(Pos::new(2, 3), 1);
        assert_eq!(
            check_all_errors(&grid, &solution),
            Ok(vec![Pos::new(2, 3), Pos::new(4, 7), Pos::new(6, 1)])
        );
    }

    #[test]
    fn test_check_all_errors_ignores_empty_cells() {
        let solution = solution_3();

        // A clean partial grid has no errors, however sparse
        let partial = Board::parse(Layout::GRID_3, "1.. ..1 .1.").unwrap();
        assert_eq!(check_all_errors(&partial, &solution), Ok(vec![]));
        assert_eq!(
            check_all_errors(&Board::empty(Layout::GRID_3), &solution),
            Ok(vec![])
        );

        // One wrong entry among empties is still found
        let mixed = Board::parse(Layout::GRID_3, "2.. ... ...").unwrap();
        assert_eq!(
            check_all_errors(&mixed, &solution),
            Ok(vec![Pos::new(0, 0)])
        );
    }

    #[test]
    fn test_check_all_errors_is_idempotent() {
        let solution = solution_9();
        let mut grid = solution.clone();
        grid.set(Pos::new(0, 0), 1);
        grid.clear(Pos::new(8, 8));

        let first = check_all_errors(&grid, &solution).unwrap();
        let second = check_all_errors(&grid, &solution).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![Pos::new(0, 0)]);
    }

    #[test]
    fn test_layout_mismatch_rejected() {
        let puzzle = Board::empty(Layout::GRID_6);
        let solution = solution_9();
        assert_eq!(
            check_win(&puzzle, &solution),
            Err(ValidateError::LayoutMismatch {
                puzzle: Layout::GRID_6,
                solution: Layout::GRID_9,
            })
        );
        assert!(check_all_errors(&puzzle, &solution).is_err());
    }
}
