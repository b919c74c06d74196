use failure::Fail;
use std::fmt;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// The position string is invalid
    #[fail(display = "Invalid position string: {}", fen)]
    InvalidFen { fen: String },

    /// The board created from a BoardBuilder was found to be invalid
    #[fail(
        display = "The board specified did not pass sanity checks.  Pieces may only sit on dark squares, and a man may not already stand on its promotion rank."
    )]
    InvalidBoard,

    /// An attempt was made to create a square from an invalid string
    #[fail(display = "The string specified does not contain a valid draughts square")]
    InvalidSquare,

    /// An attempt was made to create a move from an invalid string
    #[fail(display = "The string specified does not contain a valid draughts move")]
    InvalidMove,

    /// An attempt was made to convert a string not equal to "1"-"8" to a rank
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// An attempt was made to convert a string not equal to "a"-"h" to a file
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// A move was rejected by the rules.  The reason says which rule.
    #[fail(display = "Illegal move: {}", reason)]
    IllegalMove { reason: IllegalMoveReason },

    /// A move was attempted after a winner was already decided
    #[fail(display = "The game is already finished")]
    GameFinished,
}

/// Why, exactly, a proposed move was rejected.
///
/// Players that search by probing moves can match on this instead of
/// re-deriving the rules themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IllegalMoveReason {
    /// There is no piece on the source square
    NoPieceAtSource,
    /// The piece on the source square belongs to the opponent
    OpponentPiece,
    /// The destination square is already occupied
    DestinationOccupied,
    /// A capture is available, so a non-capturing move is forbidden
    CaptureRequired,
    /// The move is not in the legal move set (bad geometry, or a capture
    /// chain that stops early or jumps the wrong squares)
    NotInLegalSet,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IllegalMoveReason::NoPieceAtSource => write!(f, "no piece on the source square"),
            IllegalMoveReason::OpponentPiece => {
                write!(f, "the piece on the source square is not yours")
            }
            IllegalMoveReason::DestinationOccupied => {
                write!(f, "the destination square is occupied")
            }
            IllegalMoveReason::CaptureRequired => {
                write!(f, "a capture is available and capturing is mandatory")
            }
            IllegalMoveReason::NotInLegalSet => write!(f, "the move is not in the legal move set"),
        }
    }
}
