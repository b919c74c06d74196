use crate::color::Color;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a draughts piece as a very simple enum.
///
/// The owner of a piece is tracked separately (see `Board::color_on`), so
/// this enum is only the rank of the piece: a man, or a king promoted from
/// a man that reached the far rank.
#[derive(PartialEq, Ord, PartialOrd, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Piece {
    Man,
    King,
}

/// How many piece types are there?
pub const NUM_PIECES: usize = 2;

/// An array representing each piece type, in order of ascending value.
pub const ALL_PIECES: [Piece; NUM_PIECES] = [Piece::Man, Piece::King];

/// The two forward diagonals for White men, as (rank, file) offsets.
const WHITE_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// The two forward diagonals for Black men.
const BLACK_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// All four diagonals, for kings of either color.
const KING_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

impl Piece {
    /// Convert the `Piece` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The diagonal directions this piece may move and capture in, as
    /// (rank, file) offsets.  A man only ever goes forward; a king goes
    /// everywhere.
    ///
    /// ```
    /// use draughts::{Color, Piece};
    ///
    /// assert_eq!(Piece::Man.directions(Color::White).len(), 2);
    /// assert_eq!(Piece::King.directions(Color::Black).len(), 4);
    /// ```
    #[inline]
    pub fn directions(&self, color: Color) -> &'static [(i8, i8)] {
        match (*self, color) {
            (Piece::Man, Color::White) => &WHITE_MAN_DIRECTIONS,
            (Piece::Man, Color::Black) => &BLACK_MAN_DIRECTIONS,
            (Piece::King, _) => &KING_DIRECTIONS,
        }
    }

    /// Convert a piece with a color to a string.  White pieces are uppercase.
    ///
    /// ```
    /// use draughts::{Color, Piece};
    ///
    /// assert_eq!(Piece::Man.to_string(Color::White), "M");
    /// assert_eq!(Piece::King.to_string(Color::Black), "k");
    /// ```
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        if color == Color::White {
            piece.to_uppercase()
        } else {
            piece
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Piece::Man => "m",
                Piece::King => "k",
            }
        )
    }
}
