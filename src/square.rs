use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a square on the draughts board.
///
/// Internally this is an index from 0 (a1) to 63 (h8), rank-major.  Only
/// the 32 dark squares (where rank + file is even) are ever occupied by
/// pieces; the light squares exist so that the usual a1-h8 coordinates
/// work, but game logic never references them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

impl Square {
    /// Make a square from a rank and a file.
    ///
    /// ```
    /// use draughts::{Square, Rank, File};
    ///
    /// let sq = Square::make_square(Rank::Third, File::C);
    /// assert_eq!(sq, Square::C3);
    /// ```
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Return the rank of this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file of this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// Is this one of the 32 dark squares pieces actually live on?
    ///
    /// ```
    /// use draughts::Square;
    ///
    /// assert!(Square::A1.is_playable());
    /// assert!(!Square::A2.is_playable());
    /// ```
    #[inline]
    pub fn is_playable(&self) -> bool {
        (self.get_rank().to_index() + self.get_file().to_index()) % 2 == 0
    }

    /// The square offset from me by a number of ranks and files, if it is
    /// still on the board.  This is how move generation walks diagonals:
    /// probing off the edge is always safe and just returns `None`.
    ///
    /// ```
    /// use draughts::Square;
    ///
    /// assert_eq!(Square::C3.try_offset(1, 1), Some(Square::D4));
    /// assert_eq!(Square::A1.try_offset(-1, -1), None);
    /// ```
    #[inline]
    pub fn try_offset(&self, rank_offset: i8, file_offset: i8) -> Option<Square> {
        let rank = (self.get_rank().to_index() as i8) + rank_offset;
        let file = (self.get_file().to_index() as i8) + file_offset;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::make_square(
                Rank::from_index(rank as usize),
                File::from_index(file as usize),
            ))
        } else {
            None
        }
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes.
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + (self.0 & 7)) as char,
            (b'1' + (self.0 >> 3)) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ch: Vec<char> = s.chars().collect();
        if ch.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        match (ch[0], ch[1]) {
            ('a'..='h', '1'..='8') => Ok(Square::make_square(
                Rank::from_index(ch[1] as usize - '1' as usize),
                File::from_index(ch[0] as usize - 'a' as usize),
            )),
            _ => Err(Error::InvalidSquare),
        }
    }
}

lazy_static! {
    /// A list of every square on the board.
    pub static ref ALL_SQUARES: Vec<Square> = (0..NUM_SQUARES).map(|i| Square(i as u8)).collect();

    /// A list of the 32 dark squares, the only ones game logic touches.
    pub static ref PLAYABLE_SQUARES: Vec<Square> =
        ALL_SQUARES.iter().copied().filter(|sq| sq.is_playable()).collect();
}

macro_rules! define_squares {
    ($($name:ident = $index:expr),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square($index);)*
        }
    };
}

define_squares! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}
