//! Reproducibility seeds for puzzle generation.

use std::{fmt, str::FromStr};

use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// Error from parsing a [`PuzzleSeed`] out of hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The text contains a non-hex character.
    #[display("invalid hex character {ch:?} in seed")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
}

/// A 32-byte seed that fully determines one generated puzzle.
///
/// Seeds display as 64 lowercase hex characters and parse from either
/// case, so they can be logged, shared, and replayed:
///
/// ```
/// use varidoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// # Ok::<(), varidoku_generator::ParseSeedError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives the seed for a phrase as the SHA-256 of its UTF-8 bytes.
    ///
    /// The same phrase always yields the same seed, which makes phrases
    /// like a date string a convenient key for shared puzzles.
    ///
    /// # Examples
    ///
    /// ```
    /// use varidoku_generator::PuzzleSeed;
    ///
    /// assert_eq!(
    ///     PuzzleSeed::from_phrase("2026-08-22"),
    ///     PuzzleSeed::from_phrase("2026-08-22"),
    /// );
    /// assert_ne!(
    ///     PuzzleSeed::from_phrase("2026-08-22"),
    ///     PuzzleSeed::from_phrase("2026-08-23"),
    /// );
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// The raw seed bytes.
    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0_u8; 32];
        for (i, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidChar { ch })?;
            // to_digit(16) is at most 15
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[i / 2] = bytes[i / 2] << 4 | digit;
        }
        Ok(Self(bytes))
    }
}
