use crate::rank::Rank;
use std::ops::Not;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a color.  White owns the pieces that start on ranks 1-3 and
/// moves first; Black owns the pieces that start on ranks 6-8.
#[derive(PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The rank my men are promoted to kings on.
    ///
    /// ```
    /// use draughts::{Color, Rank};
    ///
    /// assert_eq!(Color::White.to_promotion_rank(), Rank::Eighth);
    /// assert_eq!(Color::Black.to_promotion_rank(), Rank::First);
    /// ```
    #[inline]
    pub fn to_promotion_rank(&self) -> Rank {
        match *self {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        }
    }

}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}
