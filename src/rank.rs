use crate::error::Error;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Describe a rank (row) on a draughts board.  `First` is White's back
/// rank, `Eighth` is Black's.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::First,
    Rank::Second,
    Rank::Third,
    Rank::Fourth,
    Rank::Fifth,
    Rank::Sixth,
    Rank::Seventh,
    Rank::Eighth,
];

impl Rank {
    /// Convert a `usize` into a `Rank` (the inverse of to_index).  If the
    /// number is > 7, wrap around.
    #[inline]
    pub fn from_index(i: usize) -> Rank {
        ALL_RANKS[i & 7]
    }

    /// Convert this `Rank` into a `usize` between 0 and 7 (inclusive).
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some(c) if ('1'..='8').contains(&c) => {
                Ok(Rank::from_index(c as usize - '1' as usize))
            }
            _ => Err(Error::InvalidRank),
        }
    }
}
