//! Difficulty presets.

use std::{fmt, ops::RangeInclusive};

use crate::Layout;

/// The shipped difficulty presets.
///
/// Each preset fixes a board [`Layout`] and the number of cells left
/// filled after carving:
///
/// | Preset   | Board | Boxes | Kept cells |
/// |----------|-------|-------|------------|
/// | `Easy`   | 3×3   | none  | 4..=5      |
/// | `Medium` | 6×6   | 2×3   | 15..=18    |
/// | `Hard`   | 9×9   | 3×3   | 26..=30    |
///
/// The lower bound of each range sits ⌊N/2⌋ below the upper bound. The
/// generator draws the actual kept-cell count uniformly from the range,
/// so a preset describes a family of puzzles rather than a single
/// density. Custom layouts and ranges bypass this table entirely via
/// `GeneratorConfig::new` in the generator crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 3×3 board, 4 to 5 kept cells.
    Easy,
    /// 6×6 board, 15 to 18 kept cells.
    Medium,
    /// 9×9 board, 26 to 30 kept cells.
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The board layout this preset plays on.
    ///
    /// # Examples
    ///
    /// ```
    /// use varidoku_core::{Difficulty, Layout};
    ///
    /// assert_eq!(Difficulty::Easy.layout(), Layout::GRID_3);
    /// assert_eq!(Difficulty::Hard.layout(), Layout::GRID_9);
    /// ```
    #[must_use]
    pub const fn layout(self) -> Layout {
        match self {
            Self::Easy => Layout::GRID_3,
            Self::Medium => Layout::GRID_6,
            Self::Hard => Layout::GRID_9,
        }
    }

    /// The inclusive range of cells left filled after carving.
    #[must_use]
    pub const fn keep_range(self) -> RangeInclusive<usize> {
        let max = match self {
            Self::Easy => 5,
            Self::Medium => 18,
            Self::Hard => 30,
        };
        let min = max - self.layout().size() / 2;
        min..=max
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}
