//! The board grid type.

use std::fmt;

use crate::{Layout, Pos};

/// Errors from [`Board::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a digit, `.`, nor whitespace.
    #[display("unexpected character {ch:?} in board text")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
    },
    /// A digit larger than the board size.
    #[display("value {value} out of range for a {size}×{size} board")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// The board size.
        size: usize,
    },
    /// The text does not describe exactly one full board.
    #[display("expected {expected} cells, found {found}")]
    WrongCellCount {
        /// Cells required by the layout.
        expected: usize,
        /// Cells found in the text.
        found: usize,
    },
}

/// An N×N grid of cells, each empty or holding a value in `1..=N`.
///
/// Every board belongs to a [`Layout`] that fixes its size and box rule;
/// all structural checks consult that layout. Storage is row-major.
///
/// # Examples
///
/// ```
/// use varidoku_core::{Board, Layout, Pos};
///
/// let mut board = Board::empty(Layout::GRID_3);
/// assert_eq!(board.get(Pos::new(0, 0)), None);
///
/// board.set(Pos::new(0, 0), 2);
/// assert_eq!(board.get(Pos::new(0, 0)), Some(2));
/// assert_eq!(board.filled_count(), 1);
///
/// board.clear(Pos::new(0, 0));
/// assert_eq!(board.filled_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    layout: Layout,
    // 0 encodes an empty cell
    cells: Vec<u8>,
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            cells: vec![0; layout.cell_count()],
        }
    }

    /// Parses a board from compact text.
    ///
    /// Digits fill cells, `.` and `0` leave them empty, and whitespace is
    /// ignored, so multi-line literals lay out naturally:
    ///
    /// ```
    /// use varidoku_core::{Board, Layout, Pos};
    ///
    /// let board = Board::parse(
    ///     Layout::GRID_3,
    ///     "12.
    ///      ..1
    ///      .1.",
    /// )?;
    /// assert_eq!(board.get(Pos::new(0, 1)), Some(2));
    /// assert_eq!(board.get(Pos::new(0, 2)), None);
    /// assert_eq!(board.filled_count(), 4);
    /// # Ok::<(), varidoku_core::ParseBoardError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::UnexpectedChar`] for characters other than
    /// digits, `.`, and whitespace, [`ParseBoardError::ValueOutOfRange`] for
    /// digits above the board size, and [`ParseBoardError::WrongCellCount`]
    /// if the text does not hold exactly N² cells.
    pub fn parse(layout: Layout, text: &str) -> Result<Self, ParseBoardError> {
        let mut cells = Vec::with_capacity(layout.cell_count());
        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = if ch == '.' {
                0
            } else {
                let digit = ch
                    .to_digit(10)
                    .ok_or(ParseBoardError::UnexpectedChar { ch })?;
                // to_digit(10) is at most 9
                #[expect(clippy::cast_possible_truncation)]
                let value = digit as u8;
                if value != 0 && !layout.contains_value(value) {
                    return Err(ParseBoardError::ValueOutOfRange {
                        value,
                        size: layout.size(),
                    });
                }
                value
            };
            cells.push(value);
        }
        if cells.len() != layout.cell_count() {
            return Err(ParseBoardError::WrongCellCount {
                expected: layout.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { layout, cells })
    }

    /// The layout this board belongs to.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the value at `pos`, or `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<u8> {
        match self.cells[self.index(pos)] {
            0 => None,
            value => Some(value),
        }
    }

    /// Places `value` at `pos`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or `value` is not in `1..=N`.
    pub fn set(&mut self, pos: Pos, value: u8) {
        assert!(
            self.layout.contains_value(value),
            "value {value} out of range for {}",
            self.layout
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Empties the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn clear(&mut self, pos: Pos) {
        let index = self.index(pos);
        self.cells[index] = 0;
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Whether `value` could be placed at `pos` without clashing with any
    /// filled cell in the same row, column, or box.
    ///
    /// The cell at `pos` itself is ignored, so the check also answers
    /// whether an already-filled cell could be overwritten with `value`.
    /// An allowed placement says nothing about solvability, only about the
    /// duplicate rules.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or `value` is not in `1..=N`.
    #[must_use]
    pub fn placement_allowed(&self, pos: Pos, value: u8) -> bool {
        assert!(
            self.layout.contains_value(value),
            "value {value} out of range for {}",
            self.layout
        );
        assert!(
            self.layout.contains(pos),
            "position {pos} out of bounds for {}",
            self.layout
        );
        !self
            .layout
            .row_positions(pos.row)
            .chain(self.layout.col_positions(pos.col))
            .chain(self.layout.box_positions(pos))
            .any(|peer| peer != pos && self.get(peer) == Some(value))
    }

    /// Whether no row, column, or box holds the same value twice.
    ///
    /// Empty cells are skipped, so a partially filled board can be valid.
    /// Together with [`is_complete`](Self::is_complete) this means every
    /// unit holds each value exactly once.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let layout = self.layout;
        for row in 0..layout.size() {
            if self.has_duplicate(layout.row_positions(row)) {
                return false;
            }
        }
        for col in 0..layout.size() {
            if self.has_duplicate(layout.col_positions(col)) {
                return false;
            }
        }
        for origin in layout.box_origins() {
            if self.has_duplicate(layout.box_positions(origin)) {
                return false;
            }
        }
        true
    }

    fn has_duplicate(&self, unit: impl Iterator<Item = Pos>) -> bool {
        let mut seen = 0_u16;
        for pos in unit {
            if let Some(value) = self.get(pos) {
                let bit = 1_u16 << value;
                if seen & bit != 0 {
                    return true;
                }
                seen |= bit;
            }
        }
        false
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.layout.contains(pos),
            "position {pos} out of bounds for {}",
            self.layout
        );
        pos.row * self.layout.size() + pos.col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.layout.size() {
            if row != 0 {
                writeln!(f)?;
            }
            for pos in self.layout.row_positions(row) {
                match self.get(pos) {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board = Board::parse(Layout::GRID_3, "12. ..1 .1.").unwrap();
        assert_eq!(board.get(Pos::new(0, 0)), Some(1));
        assert_eq!(board.get(Pos::new(0, 2)), None);
        assert_eq!(board.get(Pos::new(1, 2)), Some(1));
        assert_eq!(board.filled_count(), 4);
        assert_eq!(board.to_string(), "12.\n..1\n.1.");

        // '0' also marks an empty cell
        let board = Board::parse(Layout::GRID_3, "120 001 010").unwrap();
        assert_eq!(board.to_string(), "12.\n..1\n.1.");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::parse(Layout::GRID_3, "12x ..1 .1."),
            Err(ParseBoardError::UnexpectedChar { ch: 'x' })
        );
        assert_eq!(
            Board::parse(Layout::GRID_3, "124 ..1 .1."),
            Err(ParseBoardError::ValueOutOfRange { value: 4, size: 3 })
        );
        assert_eq!(
            Board::parse(Layout::GRID_3, "12. ..1"),
            Err(ParseBoardError::WrongCellCount {
                expected: 9,
                found: 6
            })
        );
        assert_eq!(
            Board::parse(Layout::GRID_3, "12. ..1 .1. 123"),
            Err(ParseBoardError::WrongCellCount {
                expected: 9,
                found: 12
            })
        );
    }

    #[test]
    fn test_placement_allowed() {
        let board = Board::parse(
            Layout::GRID_9,
            "53..7....
             6..195...
             .98....6.
             8...6...3
             4..8.3..1
             7...2...6
             .6....28.
             ...419..5
             ....8..79",
        )
        .unwrap();

        // Row, column, and box conflicts
        assert!(!board.placement_allowed(Pos::new(0, 2), 5));
        assert!(!board.placement_allowed(Pos::new(2, 0), 6));
        assert!(!board.placement_allowed(Pos::new(1, 1), 9));

        // No conflict
        assert!(board.placement_allowed(Pos::new(0, 2), 1));
        assert!(board.placement_allowed(Pos::new(4, 4), 5));

        // The cell itself is ignored, its peers are not
        assert!(board.placement_allowed(Pos::new(0, 0), 5));
        assert!(!board.placement_allowed(Pos::new(0, 0), 6));
    }

    #[test]
    fn test_placement_allowed_without_box_rule() {
        let board = Board::parse(Layout::GRID_3, "12. ..1 .1.").unwrap();

        // Only row and column constrain a 3×3 board
        assert!(!board.placement_allowed(Pos::new(0, 2), 1));
        assert!(!board.placement_allowed(Pos::new(2, 0), 1));
        assert!(board.placement_allowed(Pos::new(0, 2), 3));
        assert!(board.placement_allowed(Pos::new(2, 2), 2));
    }

    #[test]
    fn test_is_valid() {
        // A hand-built valid 3×3 grid
        let board = Board::parse(Layout::GRID_3, "123 231 312").unwrap();
        assert!(board.is_valid());
        assert!(board.is_complete());

        // Duplicate in a row
        let board = Board::parse(Layout::GRID_3, "113 231 312").unwrap();
        assert!(!board.is_valid());

        // Duplicate in a column
        let board = Board::parse(Layout::GRID_3, "123 132 312").unwrap();
        assert!(!board.is_valid());

        // Partially filled but clean
        let board = Board::parse(Layout::GRID_3, "12. ..1 .1.").unwrap();
        assert!(board.is_valid());
        assert!(!board.is_complete());
    }

    #[test]
    fn test_is_valid_box_rule() {
        // Rows and columns are clean, but the top-left 2×3 box repeats 2 and 3
        let board = Board::parse(
            Layout::GRID_6,
            "123456
             234561
             ......
             ......
             ......
             ......",
        )
        .unwrap();
        assert!(!board.is_valid());

        // The same rows in a legal arrangement
        let board = Board::parse(
            Layout::GRID_6,
            "123456
             456231
             ......
             ......
             ......
             ......",
        )
        .unwrap();
        assert!(board.is_valid());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let board = Board::empty(Layout::GRID_3);
        let _ = board.get(Pos::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut board = Board::empty(Layout::GRID_3);
        board.set(Pos::new(0, 0), 4);
    }

    proptest! {
        // Storage reflects the last operation per cell regardless of the
        // order cells are touched in.
        #[test]
        fn prop_set_clear_storage(ops in prop::collection::vec(
            (0_usize..9, 0_usize..9, 0_u8..=9),
            0..200,
        )) {
            let mut board = Board::empty(Layout::GRID_9);
            let mut model = [[0_u8; 9]; 9];
            for (row, col, value) in ops {
                let pos = Pos::new(row, col);
                if value == 0 {
                    board.clear(pos);
                } else {
                    board.set(pos, value);
                }
                model[row][col] = value;
            }

            let mut filled = 0;
            for pos in Layout::GRID_9.positions() {
                let expected = match model[pos.row][pos.col] {
                    0 => None,
                    value => Some(value),
                };
                prop_assert_eq!(board.get(pos), expected);
                filled += usize::from(expected.is_some());
            }
            prop_assert_eq!(board.filled_count(), filled);
        }
    }
}
