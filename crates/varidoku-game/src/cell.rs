//! Cell states within a game session.

/// The state of one cell as the player sees it.
///
/// Given cells come from the generated problem and stay fixed for the
/// whole session; filled cells hold player entries and can be overwritten
/// or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A pre-filled cell from the problem, immutable for the session.
    Given(u8),
    /// A player-entered value.
    Filled(u8),
    /// No value yet.
    Empty,
}

impl CellState {
    /// The value held by the cell, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use varidoku_game::CellState;
    ///
    /// assert_eq!(CellState::Given(4).value(), Some(4));
    /// assert_eq!(CellState::Filled(7).value(), Some(7));
    /// assert_eq!(CellState::Empty.value(), None);
    /// ```
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match self {
            Self::Given(value) | Self::Filled(value) => Some(*value),
            Self::Empty => None,
        }
    }
}
