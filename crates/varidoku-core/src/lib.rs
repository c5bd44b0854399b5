//! Core data structures for the varidoku engine.
//!
//! This crate provides the board model shared by puzzle generation and game
//! management: positions, board layouts of several sizes, the grid type with
//! its structural validity checks, and the shipped difficulty presets.
//!
//! # Overview
//!
//! - [`position`]: Zero-based `(row, col)` coordinates.
//! - [`layout`]: Board dimensions and the optional box rule. Supported sizes
//!   are 3×3 (no boxes), 6×6 (2×3 boxes), and 9×9 (3×3 boxes); anything else
//!   is rejected at construction.
//! - [`board`]: A layout-aware grid of optional values with parsing, display,
//!   and the duplicate checks that the generator and the game build on.
//! - [`difficulty`]: The `easy`/`medium`/`hard` presets mapping to a layout
//!   and a kept-cell range.
//!
//! # Examples
//!
//! ```
//! use varidoku_core::{Board, Layout, Pos};
//!
//! let layout = Layout::of_size(9)?;
//! let mut board = Board::empty(layout);
//!
//! board.set(Pos::new(0, 0), 5);
//! assert_eq!(board.get(Pos::new(0, 0)), Some(5));
//!
//! // The same value is now barred from the rest of row 0, column 0, and
//! // the top-left box.
//! assert!(!board.placement_allowed(Pos::new(0, 8), 5));
//! assert!(!board.placement_allowed(Pos::new(8, 0), 5));
//! assert!(!board.placement_allowed(Pos::new(2, 2), 5));
//! assert!(board.placement_allowed(Pos::new(4, 4), 5));
//! # Ok::<(), varidoku_core::LayoutError>(())
//! ```

pub mod board;
pub mod difficulty;
pub mod layout;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseBoardError},
    difficulty::Difficulty,
    layout::{BoxShape, Layout, LayoutError},
    position::Pos,
};
