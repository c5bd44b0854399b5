//! Board layouts: grid size and the optional box rule.

use std::{fmt, ops::RangeInclusive};

use crate::Pos;

/// The shape of one box (sub-rectangle) of a board.
///
/// A shape only says how many rows and columns a single box spans; whether
/// it actually tiles a board is checked by [`Layout::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxShape {
    rows: usize,
    cols: usize,
}

impl BoxShape {
    /// Creates a box shape spanning `rows` rows and `cols` columns.
    #[must_use]
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of rows a single box spans.
    #[must_use]
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns a single box spans.
    #[must_use]
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }
}

impl fmt::Display for BoxShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Errors from [`Layout::new`] and [`Layout::of_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The requested size is not one of the supported board sizes.
    #[display("unsupported board size {size}, supported sizes are 3, 6, and 9")]
    UnsupportedSize {
        /// The rejected size.
        size: usize,
    },
    /// A box shape was supplied for a size that has no box rule.
    #[display("a {size}×{size} board has no box rule")]
    UnexpectedBoxShape {
        /// The board size.
        size: usize,
    },
    /// No box shape was supplied for a size that requires one.
    #[display("a {size}×{size} board requires a box shape")]
    MissingBoxShape {
        /// The board size.
        size: usize,
    },
    /// The box shape does not tile the board.
    #[display("box shape {box_shape} does not tile a {size}×{size} board")]
    BoxShapeMismatch {
        /// The board size.
        size: usize,
        /// The rejected box shape.
        box_shape: BoxShape,
    },
}

/// The dimensions of a board: its size and, for sizes above 3, a box rule.
///
/// Supported sizes are 3, 6, and 9. A 3×3 board is a plain Latin square
/// (rows and columns only); 6×6 and 9×9 boards additionally partition
/// into boxes that must each hold every value once.
///
/// A `Layout` can only be obtained through validating constructors, so
/// holding one guarantees a consistent size/box combination.
///
/// # Examples
///
/// ```
/// use varidoku_core::{BoxShape, Layout, LayoutError};
///
/// let layout = Layout::of_size(6)?;
/// assert_eq!(layout.size(), 6);
/// assert_eq!(layout.box_shape(), Some(BoxShape::new(2, 3)));
///
/// // Unsupported sizes and inconsistent boxes are rejected.
/// assert_eq!(
///     Layout::of_size(4),
///     Err(LayoutError::UnsupportedSize { size: 4 })
/// );
/// assert!(Layout::new(9, Some(BoxShape::new(2, 3))).is_err());
/// # Ok::<(), LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    size: usize,
    box_shape: Option<BoxShape>,
}

impl Layout {
    /// The 3×3 layout with no box rule.
    pub const GRID_3: Self = Self {
        size: 3,
        box_shape: None,
    };

    /// The 6×6 layout with 2×3 boxes.
    pub const GRID_6: Self = Self {
        size: 6,
        box_shape: Some(BoxShape::new(2, 3)),
    };

    /// The 9×9 layout with 3×3 boxes.
    pub const GRID_9: Self = Self {
        size: 9,
        box_shape: Some(BoxShape::new(3, 3)),
    };

    /// Creates a layout from a size and an explicit box shape.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedSize`] if `size` is not 3, 6, or 9,
    /// [`LayoutError::UnexpectedBoxShape`] if a box shape is supplied for a
    /// 3×3 board, [`LayoutError::MissingBoxShape`] if none is supplied for a
    /// larger board, and [`LayoutError::BoxShapeMismatch`] if the shape does
    /// not tile the board.
    pub fn new(size: usize, box_shape: Option<BoxShape>) -> Result<Self, LayoutError> {
        if !matches!(size, 3 | 6 | 9) {
            return Err(LayoutError::UnsupportedSize { size });
        }
        match box_shape {
            Some(_) if size == 3 => Err(LayoutError::UnexpectedBoxShape { size }),
            None if size > 3 => Err(LayoutError::MissingBoxShape { size }),
            Some(shape)
                if shape.rows() * shape.cols() != size
                    || size % shape.rows() != 0
                    || size % shape.cols() != 0 =>
            {
                Err(LayoutError::BoxShapeMismatch {
                    size,
                    box_shape: shape,
                })
            }
            _ => Ok(Self { size, box_shape }),
        }
    }

    /// Returns the standard layout for a supported size.
    ///
    /// Size 3 has no boxes, size 6 uses 2×3 boxes, and size 9 uses 3×3
    /// boxes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedSize`] if `size` is not 3, 6, or 9.
    pub fn of_size(size: usize) -> Result<Self, LayoutError> {
        match size {
            3 => Ok(Self::GRID_3),
            6 => Ok(Self::GRID_6),
            9 => Ok(Self::GRID_9),
            _ => Err(LayoutError::UnsupportedSize { size }),
        }
    }

    /// The board size N.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The box shape, or `None` when the layout has no box rule.
    #[must_use]
    #[inline]
    pub const fn box_shape(&self) -> Option<BoxShape> {
        self.box_shape
    }

    /// Whether boxes participate in the duplicate rules.
    #[must_use]
    #[inline]
    pub const fn has_box_rule(&self) -> bool {
        self.box_shape.is_some()
    }

    /// Total number of cells, N².
    #[must_use]
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// The range of cell values, `1..=N`.
    #[must_use]
    pub fn values(&self) -> RangeInclusive<u8> {
        // board sizes never exceed 9
        #[expect(clippy::cast_possible_truncation)]
        let max = self.size as u8;
        1..=max
    }

    /// Whether `pos` lies on a board of this layout.
    #[must_use]
    #[inline]
    pub const fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Whether `value` is a legal cell value for this layout.
    #[must_use]
    #[inline]
    pub fn contains_value(&self, value: u8) -> bool {
        (1..=self.size).contains(&usize::from(value))
    }

    /// Iterates over all positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use varidoku_core::{Layout, Pos};
    ///
    /// let positions: Vec<Pos> = Layout::GRID_3.positions().collect();
    /// assert_eq!(positions.len(), 9);
    /// assert_eq!(positions[0], Pos::new(0, 0));
    /// assert_eq!(positions[3], Pos::new(1, 0));
    /// assert_eq!(positions[8], Pos::new(2, 2));
    /// ```
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Iterates over the positions of one row, left to right.
    pub fn row_positions(self, row: usize) -> impl Iterator<Item = Pos> {
        (0..self.size).map(move |col| Pos::new(row, col))
    }

    /// Iterates over the positions of one column, top to bottom.
    pub fn col_positions(self, col: usize) -> impl Iterator<Item = Pos> {
        (0..self.size).map(move |row| Pos::new(row, col))
    }

    /// Returns the top-left corner of the box containing `pos`, or `None`
    /// when the layout has no box rule.
    #[must_use]
    pub fn box_origin(&self, pos: Pos) -> Option<Pos> {
        self.box_shape.map(|shape| {
            Pos::new(
                pos.row - pos.row % shape.rows(),
                pos.col - pos.col % shape.cols(),
            )
        })
    }

    /// Iterates over the top-left corners of all boxes, row-major.
    ///
    /// Empty when the layout has no box rule.
    pub fn box_origins(self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        self.box_shape.into_iter().flat_map(move |shape| {
            (0..size).step_by(shape.rows()).flat_map(move |row| {
                (0..size)
                    .step_by(shape.cols())
                    .map(move |col| Pos::new(row, col))
            })
        })
    }

    /// Iterates over the positions of the box containing `pos`, row-major.
    ///
    /// Empty when the layout has no box rule.
    pub fn box_positions(self, pos: Pos) -> impl Iterator<Item = Pos> {
        self.box_shape.into_iter().flat_map(move |shape| {
            let origin = Pos::new(
                pos.row - pos.row % shape.rows(),
                pos.col - pos.col % shape.cols(),
            );
            (0..shape.rows()).flat_map(move |dr| {
                (0..shape.cols()).map(move |dc| Pos::new(origin.row + dr, origin.col + dc))
            })
        })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.box_shape {
            Some(shape) => write!(f, "{}×{} ({} boxes)", self.size, self.size, shape),
            None => write!(f, "{}×{} (no boxes)", self.size, self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layouts() {
        let layout = Layout::of_size(3).unwrap();
        assert_eq!(layout, Layout::GRID_3);
        assert_eq!(layout.size(), 3);
        assert_eq!(layout.box_shape(), None);
        assert!(!layout.has_box_rule());
        assert_eq!(layout.cell_count(), 9);
        assert_eq!(layout.values(), 1..=3);

        let layout = Layout::of_size(6).unwrap();
        assert_eq!(layout, Layout::GRID_6);
        assert_eq!(layout.box_shape(), Some(BoxShape::new(2, 3)));
        assert_eq!(layout.cell_count(), 36);
        assert_eq!(layout.values(), 1..=6);

        let layout = Layout::of_size(9).unwrap();
        assert_eq!(layout, Layout::GRID_9);
        assert_eq!(layout.box_shape(), Some(BoxShape::new(3, 3)));
        assert_eq!(layout.cell_count(), 81);
        assert_eq!(layout.values(), 1..=9);
    }

    #[test]
    fn test_unsupported_sizes_rejected() {
        for size in [0, 1, 2, 4, 5, 7, 8, 10, 16] {
            assert_eq!(
                Layout::of_size(size),
                Err(LayoutError::UnsupportedSize { size })
            );
            assert_eq!(
                Layout::new(size, None),
                Err(LayoutError::UnsupportedSize { size })
            );
        }
    }

    #[test]
    fn test_box_shape_validation() {
        // Size 3 takes no box shape
        assert_eq!(
            Layout::new(3, Some(BoxShape::new(1, 3))),
            Err(LayoutError::UnexpectedBoxShape { size: 3 })
        );
        assert_eq!(Layout::new(3, None), Ok(Layout::GRID_3));

        // Larger sizes require one
        assert_eq!(Layout::new(6, None), Err(LayoutError::MissingBoxShape { size: 6 }));
        assert_eq!(Layout::new(9, None), Err(LayoutError::MissingBoxShape { size: 9 }));

        // The shape must tile the board
        assert_eq!(Layout::new(6, Some(BoxShape::new(2, 3))), Ok(Layout::GRID_6));
        assert_eq!(Layout::new(9, Some(BoxShape::new(3, 3))), Ok(Layout::GRID_9));
        assert!(matches!(
            Layout::new(9, Some(BoxShape::new(2, 3))),
            Err(LayoutError::BoxShapeMismatch { size: 9, .. })
        ));
        assert!(matches!(
            Layout::new(6, Some(BoxShape::new(3, 3))),
            Err(LayoutError::BoxShapeMismatch { size: 6, .. })
        ));
        assert!(matches!(
            Layout::new(6, Some(BoxShape::new(0, 0))),
            Err(LayoutError::BoxShapeMismatch { size: 6, .. })
        ));
    }

    #[test]
    fn test_position_iterators() {
        let layout = Layout::GRID_6;

        let all: Vec<Pos> = layout.positions().collect();
        assert_eq!(all.len(), 36);
        assert_eq!(all[0], Pos::new(0, 0));
        assert_eq!(all[6], Pos::new(1, 0));
        assert!(all.is_sorted());

        let row: Vec<Pos> = layout.row_positions(2).collect();
        assert_eq!(row, (0..6).map(|col| Pos::new(2, col)).collect::<Vec<_>>());

        let col: Vec<Pos> = layout.col_positions(4).collect();
        assert_eq!(col, (0..6).map(|row| Pos::new(row, 4)).collect::<Vec<_>>());
    }

    #[test]
    fn test_box_geometry() {
        // 6×6 with 2×3 boxes: origins at even rows, columns 0 and 3
        let layout = Layout::GRID_6;
        let origins: Vec<Pos> = layout.box_origins().collect();
        assert_eq!(
            origins,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 3),
                Pos::new(2, 0),
                Pos::new(2, 3),
                Pos::new(4, 0),
                Pos::new(4, 3),
            ]
        );

        assert_eq!(layout.box_origin(Pos::new(3, 5)), Some(Pos::new(2, 3)));
        let cells: Vec<Pos> = layout.box_positions(Pos::new(3, 5)).collect();
        assert_eq!(
            cells,
            vec![
                Pos::new(2, 3),
                Pos::new(2, 4),
                Pos::new(2, 5),
                Pos::new(3, 3),
                Pos::new(3, 4),
                Pos::new(3, 5),
            ]
        );

        // No box rule: no origins, no box cells
        assert_eq!(Layout::GRID_3.box_origin(Pos::new(1, 1)), None);
        assert_eq!(Layout::GRID_3.box_origins().count(), 0);
        assert_eq!(Layout::GRID_3.box_positions(Pos::new(1, 1)).count(), 0);

        // 9×9: every box holds 9 cells
        for origin in Layout::GRID_9.box_origins() {
            assert_eq!(Layout::GRID_9.box_positions(origin).count(), 9);
        }
    }

    #[test]
    fn test_contains() {
        let layout = Layout::GRID_9;
        assert!(layout.contains(Pos::new(0, 0)));
        assert!(layout.contains(Pos::new(8, 8)));
        assert!(!layout.contains(Pos::new(9, 0)));
        assert!(!layout.contains(Pos::new(0, 9)));

        assert!(!layout.contains_value(0));
        assert!(layout.contains_value(1));
        assert!(layout.contains_value(9));
        assert!(!layout.contains_value(10));
        assert!(!Layout::GRID_3.contains_value(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Layout::GRID_3.to_string(), "3×3 (no boxes)");
        assert_eq!(Layout::GRID_6.to_string(), "6×6 (2×3 boxes)");
        assert_eq!(Layout::GRID_9.to_string(), "9×9 (3×3 boxes)");
    }
}
