use crate::error::Error;
use crate::square::Square;
use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The most pieces one chain can ever capture: every enemy piece on the
/// board, and each side starts with 12.
pub const MAX_CAPTURES: usize = 12;

/// The ordered list of squares a move captures, in jump order.
pub type CaptureList = ArrayVec<Square, MAX_CAPTURES>;

/// Represent a draughts move in memory.
///
/// One `DraughtsMove` is one whole turn.  A quiet move is a single
/// diagonal step with an empty capture list.  A capturing move carries the
/// ordered squares of every piece the chain jumps, however many jumps that
/// is; the chain is never split into separate moves.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DraughtsMove {
    source: Square,
    dest: Square,
    captures: CaptureList,
}

/// Where a short jump from `from` over `over` lands, if that square is on
/// the board.
fn landing_after(from: Square, over: Square) -> Option<Square> {
    let rank_step = over.get_rank().to_index() as i8 - from.get_rank().to_index() as i8;
    let file_step = over.get_file().to_index() as i8 - from.get_file().to_index() as i8;
    over.try_offset(rank_step, file_step)
}

impl DraughtsMove {
    /// Create a new draughts move, given a source `Square`, a destination
    /// `Square`, and the (possibly empty) ordered list of captured squares.
    #[inline]
    pub fn new(source: Square, dest: Square, captures: CaptureList) -> DraughtsMove {
        DraughtsMove {
            source,
            dest,
            captures,
        }
    }

    /// Create a quiet, non-capturing move.
    ///
    /// ```
    /// use draughts::{DraughtsMove, Square};
    ///
    /// let mv = DraughtsMove::step(Square::C3, Square::D4);
    /// assert!(!mv.is_capture());
    /// ```
    #[inline]
    pub fn step(source: Square, dest: Square) -> DraughtsMove {
        DraughtsMove {
            source,
            dest,
            captures: CaptureList::new(),
        }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece ends the turn on).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Get the squares captured by this move, in jump order.
    #[inline]
    pub fn get_captures(&self) -> &[Square] {
        &self.captures
    }

    /// Does this move capture anything?
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for DraughtsMove {
    /// Quiet moves read `c3-d4`; capture chains list every landing square,
    /// like `d4xf6xh8`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.captures.is_empty() {
            return write!(f, "{}-{}", self.source, self.dest);
        }
        let mut current = self.source;
        write!(f, "{}", current)?;
        for over in self.captures.iter() {
            current = landing_after(current, *over).unwrap_or(self.dest);
            write!(f, "x{}", current)?;
        }
        Ok(())
    }
}

impl FromStr for DraughtsMove {
    type Err = Error;

    /// Parse the same notation `Display` emits.  For chains, each captured
    /// square is derived as the midpoint of two consecutive landing
    /// squares, so `d4xf6xh8` captures e5 and g7.
    ///
    /// ```
    /// use draughts::{DraughtsMove, Square};
    /// use std::str::FromStr;
    ///
    /// let mv = DraughtsMove::from_str("d4xf6xh8").expect("valid move");
    /// assert_eq!(mv.get_captures(), &[Square::E5, Square::G7]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('x') {
            let landings = s
                .split('x')
                .map(Square::from_str)
                .collect::<Result<Vec<Square>, Error>>()
                .map_err(|_| Error::InvalidMove)?;
            if landings.len() < 2 {
                return Err(Error::InvalidMove);
            }
            let mut captures = CaptureList::new();
            for pair in landings.windows(2) {
                let rank_diff =
                    pair[1].get_rank().to_index() as i8 - pair[0].get_rank().to_index() as i8;
                let file_diff =
                    pair[1].get_file().to_index() as i8 - pair[0].get_file().to_index() as i8;
                if rank_diff.abs() != 2 || file_diff.abs() != 2 {
                    return Err(Error::InvalidMove);
                }
                let over = pair[0]
                    .try_offset(rank_diff / 2, file_diff / 2)
                    .ok_or(Error::InvalidMove)?;
                captures.try_push(over).map_err(|_| Error::InvalidMove)?;
            }
            Ok(DraughtsMove::new(
                landings[0],
                landings[landings.len() - 1],
                captures,
            ))
        } else {
            let squares = s
                .split('-')
                .map(Square::from_str)
                .collect::<Result<Vec<Square>, Error>>()
                .map_err(|_| Error::InvalidMove)?;
            if squares.len() != 2 {
                return Err(Error::InvalidMove);
            }
            let rank_diff =
                squares[1].get_rank().to_index() as i8 - squares[0].get_rank().to_index() as i8;
            let file_diff =
                squares[1].get_file().to_index() as i8 - squares[0].get_file().to_index() as i8;
            if rank_diff.abs() != 1 || file_diff.abs() != 1 {
                return Err(Error::InvalidMove);
            }
            Ok(DraughtsMove::step(squares[0], squares[1]))
        }
    }
}
