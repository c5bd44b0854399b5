//! Generator configuration.

use std::ops::RangeInclusive;

use varidoku_core::{Difficulty, Layout};

/// Errors from [`GeneratorConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorConfigError {
    /// The keep range contains no value.
    #[display("empty keep range {min}..={max}")]
    EmptyKeepRange {
        /// Lower bound of the rejected range.
        min: usize,
        /// Upper bound of the rejected range.
        max: usize,
    },
    /// The keep range asks for more cells than the board has.
    #[display("keep range goes up to {max} but a {layout} board has only {cells} cells")]
    KeepRangeTooLarge {
        /// Upper bound of the rejected range.
        max: usize,
        /// The configured layout.
        layout: Layout,
        /// Cells available on that layout.
        cells: usize,
    },
}

/// Configuration for a [`PuzzleGenerator`]: the board layout and the range
/// of cells carving leaves filled.
///
/// The actual kept-cell count of each puzzle is drawn uniformly from the
/// range. Use [`From<Difficulty>`](Difficulty) for the shipped presets, or
/// [`GeneratorConfig::new`] for custom combinations:
///
/// ```
/// use varidoku_core::{Difficulty, Layout};
/// use varidoku_generator::GeneratorConfig;
///
/// let preset = GeneratorConfig::from(Difficulty::Medium);
/// assert_eq!(preset.layout(), Layout::GRID_6);
/// assert_eq!(preset.keep_range(), 15..=18);
///
/// // A denser 9×9 board than the hard preset
/// let custom = GeneratorConfig::new(Layout::GRID_9, 40..=45)?;
/// assert_eq!(custom.keep_range(), 40..=45);
/// # Ok::<(), varidoku_generator::GeneratorConfigError>(())
/// ```
///
/// [`PuzzleGenerator`]: crate::PuzzleGenerator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    layout: Layout,
    keep_range: RangeInclusive<usize>,
}

impl GeneratorConfig {
    /// Creates a configuration, rejecting inconsistent keep ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorConfigError::EmptyKeepRange`] if the range holds
    /// no value and [`GeneratorConfigError::KeepRangeTooLarge`] if its
    /// upper bound exceeds the layout's cell count.
    pub fn new(
        layout: Layout,
        keep_range: RangeInclusive<usize>,
    ) -> Result<Self, GeneratorConfigError> {
        let (min, max) = (*keep_range.start(), *keep_range.end());
        if min > max {
            return Err(GeneratorConfigError::EmptyKeepRange { min, max });
        }
        if max > layout.cell_count() {
            return Err(GeneratorConfigError::KeepRangeTooLarge {
                max,
                layout,
                cells: layout.cell_count(),
            });
        }
        Ok(Self { layout, keep_range })
    }

    /// The board layout puzzles are generated on.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The inclusive range of cells left filled after carving.
    #[must_use]
    pub fn keep_range(&self) -> RangeInclusive<usize> {
        self.keep_range.clone()
    }
}

impl From<Difficulty> for GeneratorConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            layout: difficulty.layout(),
            keep_range: difficulty.keep_range(),
        }
    }
}
