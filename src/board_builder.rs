use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES, PLAYABLE_SQUARES};

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a draughts position that has *not* been validated for
/// legality.
///
/// This structure is useful in the following cases:
/// * You are trying to set up a position manually in code, say for a test
///   or a puzzle.
/// * The `Board` structure only holds positions that pass its sanity
///   checks, which stops you from placing pieces arbitrarily.  This
///   structure will not.
/// * You want to convert between formats like the `W:Wa1,Kc3:Bb8` position
///   notation.
///
/// ```
/// use draughts::{Board, BoardBuilder, Color, Piece, Square};
/// use std::convert::TryFrom;
///
/// let mut position = BoardBuilder::new();
/// position.piece(Square::C3, Piece::Man, Color::White);
/// position.piece(Square::B8, Piece::King, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::C3], Some((Piece::Man, Color::White)));
///
/// assert!(Board::try_from(&position).is_ok());
///
/// // Pieces must sit on dark squares.  d3 is a light square.
/// position.piece(Square::D3, Piece::Man, Color::White);
/// assert!(Board::try_from(position).is_err());
///
/// // One liners are possible with the builder pattern.
/// use std::convert::TryInto;
///
/// let res: Result<Board, _> = BoardBuilder::new()
///     .piece(Square::A1, Piece::King, Color::White)
///     .piece(Square::H8, Piece::King, Color::Black)
///     .try_into();
/// assert!(res.is_ok());
/// ```
#[derive(Copy, Clone)]
pub struct BoardBuilder {
    pieces: [Option<(Piece, Color)>; NUM_SQUARES],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder.
    ///
    /// * No pieces are on the board
    /// * `side_to_move` is Color::White
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }

    /// Set up a board with everything pre-loaded.
    ///
    /// ```
    /// use draughts::{Board, BoardBuilder, Color, Piece, Square};
    /// use std::convert::TryInto;
    ///
    /// # use draughts::Error;
    /// # fn main() -> Result<(), Error> {
    /// let board: Board = BoardBuilder::setup(
    ///         &[
    ///             (Square::D4, Piece::Man, Color::White),
    ///             (Square::E5, Piece::Man, Color::Black),
    ///         ],
    ///         Color::White)
    ///     .try_into()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Square, Piece, Color)>,
        side_to_move: Color,
    ) -> BoardBuilder {
        let mut result = BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move,
        };

        for piece in pieces.into_iter() {
            result.pieces[piece.0.to_index()] = Some((piece.1, piece.2));
        }

        result
    }

    /// Get the current player
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move on the position
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move<'a>(&'a mut self, color: Color) -> &'a mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if
    /// need be.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece<'a>(&'a mut self, square: Square, piece: Piece, color: Color) -> &'a mut Self {
        self[square] = Some((piece, color));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square<'a>(&'a mut self, square: Square) -> &'a mut Self {
        self[square] = None;
        self
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<(Piece, Color)>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl fmt::Display for BoardBuilder {
    /// Write the position in the `W:Wa1,Kc3:Bb8` notation: the side to
    /// move, then each side's occupied squares in board order, kings
    /// marked with a `K` prefix.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            if self.side_to_move == Color::White {
                "W"
            } else {
                "B"
            }
        )?;

        for color in &[Color::White, Color::Black] {
            write!(f, ":{}", if *color == Color::White { "W" } else { "B" })?;
            let mut first = true;
            for sq in ALL_SQUARES.iter() {
                if let Some((piece, piece_color)) = self.pieces[sq.to_index()] {
                    if piece_color == *color {
                        if !first {
                            write!(f, ",")?;
                        }
                        if piece == Piece::King {
                            write!(f, "K")?;
                        }
                        write!(f, "{}", sq)?;
                        first = false;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        Board::default().into()
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };

        let tokens: Vec<&str> = value.split(':').collect();
        if tokens.len() != 3 {
            return Err(invalid());
        }

        let mut builder = BoardBuilder::new();
        match tokens[0] {
            "w" | "W" => builder.side_to_move(Color::White),
            "b" | "B" => builder.side_to_move(Color::Black),
            _ => return Err(invalid()),
        };

        for (token, color) in tokens[1..].iter().zip([Color::White, Color::Black].iter()) {
            let prefix = if *color == Color::White { 'W' } else { 'B' };
            let mut chars = token.chars();
            if chars.next() != Some(prefix) {
                return Err(invalid());
            }
            let list = chars.as_str();
            if list.is_empty() {
                continue;
            }
            for entry in list.split(',') {
                let (piece, square) = if let Some(rest) = entry.strip_prefix('K') {
                    (Piece::King, rest)
                } else {
                    (Piece::Man, entry)
                };
                let square = Square::from_str(square).map_err(|_| invalid())?;
                builder.piece(square, piece, *color);
            }
        }

        Ok(builder)
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut pieces = vec![];
        for sq in PLAYABLE_SQUARES.iter() {
            if let Some(piece) = board.piece_on(*sq) {
                let color = board.color_on(*sq).expect("occupied square has a color");
                pieces.push((*sq, piece, color));
            }
        }

        BoardBuilder::setup(&pieces, board.side_to_move())
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    /// Validate the position: every piece must sit on a dark square, and a
    /// man may not already stand on its promotion rank (it would have been
    /// a king).
    fn try_from(builder: &BoardBuilder) -> Result<Board, Error> {
        let mut board = Board::empty();
        board.set_side_to_move(builder.get_side_to_move());

        for sq in ALL_SQUARES.iter() {
            if let Some((piece, color)) = builder[*sq] {
                if !sq.is_playable() {
                    return Err(Error::InvalidBoard);
                }
                if piece == Piece::Man && sq.get_rank() == color.to_promotion_rank() {
                    return Err(Error::InvalidBoard);
                }
                board.place_piece(*sq, piece, color);
            }
        }

        Ok(board)
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Board, Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Board, Error> {
        Board::try_from(&builder)
    }
}

#[cfg(test)]
use std::convert::TryInto;

#[test]
fn check_initial_position() {
    let initial = "W:Wa1,c1,e1,g1,b2,d2,f2,h2,a3,c3,e3,g3:Bb6,d6,f6,h6,a7,c7,e7,g7,b8,d8,f8,h8";
    let builder: BoardBuilder = Board::default().into();
    assert_eq!(format!("{}", builder), initial);

    let pass_through = format!("{}", BoardBuilder::default());
    assert_eq!(pass_through, initial);
}

#[test]
fn parse_kings_and_sides() {
    let builder = BoardBuilder::from_str("B:WKa1:Bb8,Kd8").expect("valid position");
    assert_eq!(builder.get_side_to_move(), Color::Black);
    assert_eq!(builder[Square::A1], Some((Piece::King, Color::White)));
    assert_eq!(builder[Square::B8], Some((Piece::Man, Color::Black)));
    assert_eq!(builder[Square::D8], Some((Piece::King, Color::Black)));
}

#[test]
fn empty_piece_lists_parse() {
    let board: Board = BoardBuilder::from_str("B:Wd4:B")
        .expect("valid position")
        .try_into()
        .expect("valid board");
    assert_eq!(board.count_pieces(Color::Black), 0);
}

#[test]
fn light_square_is_invalid() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::D3, Piece::Man, Color::White)
        .try_into();
    assert_eq!(res, Err(Error::InvalidBoard));
}

#[test]
fn man_on_promotion_rank_is_invalid() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::D8, Piece::Man, Color::White)
        .try_into();
    assert_eq!(res, Err(Error::InvalidBoard));

    // ...but a king there is fine, and a Black man on rank 8 is fine too.
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::D8, Piece::King, Color::White)
        .piece(Square::B8, Piece::Man, Color::Black)
        .try_into();
    assert!(res.is_ok());
}

#[test]
fn malformed_positions() {
    for s in &["", "W", "W:Wa1", "X:Wa1:Bb8", "W:a1:Bb8", "W:Wa2:Bb8x", "W:Wa1:Ba1,"] {
        assert!(BoardBuilder::from_str(s).is_err(), "{} should not parse", s);
    }
}
