use crate::error::Error;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Describe a file (column) on a draughts board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// Enumerate all files
pub const ALL_FILES: [File; NUM_FILES] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

impl File {
    /// Convert a `usize` into a `File` (the inverse of to_index).  If i > 7,
    /// wrap around.
    #[inline]
    pub fn from_index(i: usize) -> File {
        ALL_FILES[i & 7]
    }

    /// Convert this `File` into a `usize` from 0 to 7 inclusive.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some(c) if ('a'..='h').contains(&c) => {
                Ok(File::from_index(c as usize - 'a' as usize))
            }
            _ => Err(Error::InvalidFile),
        }
    }
}
