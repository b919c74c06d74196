use crate::board_builder::BoardBuilder;
use crate::color::Color;
use crate::draughts_move::DraughtsMove;
use crate::error::Error;
use crate::movegen::MoveGen;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES, PLAYABLE_SQUARES};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Is the game still going, or is it over?
///
/// There are no draws in this ruleset: the first player left without a
/// legal move loses, whether their pieces are gone or merely stuck.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BoardStatus {
    Ongoing,
    Won(Color),
}

/// A representation of a draughts board.  That's why you're here, right?
///
/// The board is a plain value: copying it copies the whole position, so
/// search-based players can freely simulate on copies without any risk of
/// corrupting the position they were handed.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [Option<(Piece, Color)>; NUM_SQUARES],
    side_to_move: Color,
}

impl Board {
    /// Who's turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// What piece is on a particular `Square`?  Is there even one?
    ///
    /// ```
    /// use draughts::{Board, Piece, Square};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.piece_on(Square::C3), Some(Piece::Man));
    /// assert_eq!(board.piece_on(Square::D4), None);
    /// ```
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.pieces[square.to_index()].map(|(piece, _)| piece)
    }

    /// What color piece is on a particular square?
    ///
    /// ```
    /// use draughts::{Board, Color, Square};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.color_on(Square::B8), Some(Color::Black));
    /// assert_eq!(board.color_on(Square::D4), None);
    /// ```
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.pieces[square.to_index()].map(|(_, color)| color)
    }

    /// Count the pieces of one color still on the board.
    pub fn count_pieces(&self, color: Color) -> usize {
        PLAYABLE_SQUARES
            .iter()
            .filter(|sq| self.color_on(**sq) == Some(color))
            .count()
    }

    /// Is this move legal in the current position?
    ///
    /// Legality is structural equality against the generated move set, so
    /// a capture chain that stops early, or jumps squares it should not,
    /// is illegal even if each individual jump looks plausible.
    ///
    /// ```
    /// use draughts::{Board, DraughtsMove, Square};
    ///
    /// let board = Board::default();
    /// assert!(board.legal(&DraughtsMove::step(Square::C3, Square::D4)));
    /// assert!(!board.legal(&DraughtsMove::step(Square::C3, Square::C4)));
    /// ```
    pub fn legal(&self, m: &DraughtsMove) -> bool {
        MoveGen::new_legal(self).any(|x| x == *m)
    }

    /// Make a move on the board, and return a new board.  The original is
    /// left untouched.
    ///
    /// The move is applied as-is: the mover relocates, every captured
    /// square is cleared, a man ending its turn on the far rank becomes a
    /// king, and the side to move flips.  This function does not check
    /// legality (that is what [`Board::legal`] and [`Game::make_move`] are
    /// for); a move whose source square holds no piece of the side to move
    /// returns the board unchanged rather than panicking.
    ///
    /// [`Game::make_move`]: crate::Game::make_move
    ///
    /// ```
    /// use draughts::{Board, Color, DraughtsMove, Square};
    ///
    /// let board = Board::default();
    /// let after = board.make_move_new(&DraughtsMove::step(Square::C3, Square::D4));
    /// assert_eq!(after.side_to_move(), Color::Black);
    /// assert_eq!(after.piece_on(Square::C3), None);
    /// ```
    pub fn make_move_new(&self, m: &DraughtsMove) -> Board {
        let mut result = *self;
        let (piece, color) = match self.pieces[m.get_source().to_index()] {
            Some((piece, color)) if color == self.side_to_move => (piece, color),
            _ => return result,
        };
        result.remove_piece(m.get_source());
        for captured in m.get_captures() {
            result.remove_piece(*captured);
        }
        let promoted = piece == Piece::Man && m.get_dest().get_rank() == color.to_promotion_rank();
        let piece = if promoted { Piece::King } else { piece };
        result.place_piece(m.get_dest(), piece, color);
        result.side_to_move = !self.side_to_move;
        result
    }

    /// Is the game ongoing, or has somebody won?
    ///
    /// The side to move loses the moment it has no legal move, which
    /// covers both "no pieces left" and "every piece is stuck".
    pub fn status(&self) -> BoardStatus {
        if MoveGen::new_legal(self).len() == 0 {
            BoardStatus::Won(!self.side_to_move)
        } else {
            BoardStatus::Ongoing
        }
    }

    pub(crate) fn remove_piece(&mut self, square: Square) {
        self.pieces[square.to_index()] = None;
    }

    pub(crate) fn place_piece(&mut self, square: Square, piece: Piece, color: Color) {
        self.pieces[square.to_index()] = Some((piece, color));
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn empty() -> Board {
        Board {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }
}

/// Construct the initial position.
impl Default for Board {
    fn default() -> Board {
        let mut board = Board::empty();
        for sq in PLAYABLE_SQUARES.iter() {
            match sq.get_rank().to_index() {
                0..=2 => board.place_piece(*sq, Piece::Man, Color::White),
                5..=7 => board.place_piece(*sq, Piece::Man, Color::Black),
                _ => {}
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Write the position out in the same `W:Wa1,Kc3:Bb8` notation that
    /// `Board::from_str` reads.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", BoardBuilder::from(self))
    }
}

impl fmt::Debug for Board {
    /// An ASCII rendering of the board with rank and file headers.  Dark
    /// squares show `.` when empty; light squares are blank.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let square = ALL_SQUARES[rank * 8 + file];
                match self.pieces[square.to_index()] {
                    Some((piece, color)) => write!(f, "{} ", piece.to_string(color))?,
                    None if square.is_playable() => write!(f, ". ")?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h ({} to move)", match self.side_to_move {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Board::try_from(BoardBuilder::from_str(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draughts_move::CaptureList;

    #[test]
    fn initial_layout() {
        let board = Board::default();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.count_pieces(Color::White), 12);
        assert_eq!(board.count_pieces(Color::Black), 12);
        for sq in ALL_SQUARES.iter() {
            if let Some(piece) = board.piece_on(*sq) {
                assert!(sq.is_playable());
                assert_eq!(piece, Piece::Man);
                match board.color_on(*sq) {
                    Some(Color::White) => assert!(sq.get_rank().to_index() <= 2),
                    Some(Color::Black) => assert!(sq.get_rank().to_index() >= 5),
                    None => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn make_move_relocates_and_flips() {
        let board = Board::default();
        let after = board.make_move_new(&DraughtsMove::step(Square::C3, Square::D4));
        assert_eq!(after.piece_on(Square::C3), None);
        assert_eq!(after.piece_on(Square::D4), Some(Piece::Man));
        assert_eq!(after.color_on(Square::D4), Some(Color::White));
        assert_eq!(after.side_to_move(), Color::Black);
        // the original is untouched
        assert_eq!(board.piece_on(Square::C3), Some(Piece::Man));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn man_promotes_on_far_rank() {
        let board: Board = "W:Wg7:Bb8".parse().expect("valid position");
        let after = board.make_move_new(&DraughtsMove::step(Square::G7, Square::H8));
        assert_eq!(after.piece_on(Square::H8), Some(Piece::King));
    }

    #[test]
    fn king_does_not_demote() {
        let board: Board = "W:WKd4:Bb8".parse().expect("valid position");
        let after = board.make_move_new(&DraughtsMove::step(Square::D4, Square::E3));
        assert_eq!(after.piece_on(Square::E3), Some(Piece::King));
    }

    #[test]
    fn captures_clear_squares() {
        let board: Board = "W:Wc3:Bd4,b8".parse().expect("valid position");
        let mut captures = CaptureList::new();
        captures.push(Square::D4);
        let after = board.make_move_new(&DraughtsMove::new(Square::C3, Square::E5, captures));
        assert_eq!(after.piece_on(Square::D4), None);
        assert_eq!(after.piece_on(Square::E5), Some(Piece::Man));
        assert_eq!(after.count_pieces(Color::Black), 1);
    }

    #[test]
    fn no_moves_means_loss() {
        // Black's only man is stuck behind a White man in the corner.
        let board: Board = "B:Wg1,e1:Bh2".parse().expect("valid position");
        assert_eq!(board.status(), BoardStatus::Won(Color::White));

        // A side with no pieces at all has no moves either.
        let board: Board = "B:Wd4:B".parse().expect("valid position");
        assert_eq!(board.status(), BoardStatus::Won(Color::White));

        assert_eq!(Board::default().status(), BoardStatus::Ongoing);
    }

    #[test]
    fn display_round_trip() {
        let board = Board::default();
        let s = format!("{}", board);
        let parsed: Board = s.parse().expect("round trip");
        assert_eq!(parsed, board);
    }
}
