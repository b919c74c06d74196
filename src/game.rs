use crate::board::{Board, BoardStatus};
use crate::color::Color;
use crate::draughts_move::DraughtsMove;
use crate::error::{Error, IllegalMoveReason};
use crate::movegen::MoveGen;
use std::str::FromStr;

/// What was the result of this game?
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
}

impl GameResult {
    /// The color that won.
    #[inline]
    pub fn winner(&self) -> Color {
        match *self {
            GameResult::WhiteWins => Color::White,
            GameResult::BlackWins => Color::Black,
        }
    }
}

/// A whole game of draughts: a starting position plus the move history.
///
/// The current position is reconstructed by replaying the history, so a
/// `Game` is trivially serializable (starting position plus moves) and the
/// final board of a replayed history is, by construction, the live board.
/// Every accessor hands out values, never references into the internals,
/// and `Clone` is a deep copy; an AI can clone a `Game`, simulate on the
/// clone, and the live game is untouched.
///
/// This structure is slower than using `Board` directly, so
/// search-based players should expand positions with `Board::make_move_new`
/// and only report their chosen move back to the `Game`.
#[derive(Clone, Debug)]
pub struct Game {
    start_pos: Board,
    moves: Vec<DraughtsMove>,
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use draughts::{Board, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), Board::default());
    /// ```
    pub fn new() -> Game {
        Game {
            start_pos: Board::default(),
            moves: vec![],
        }
    }

    /// Create a new `Game` with a specific starting position.
    ///
    /// ```
    /// use draughts::{Board, Game};
    ///
    /// let game = Game::new_with_board(Board::default());
    /// assert_eq!(game.current_position(), Board::default());
    /// ```
    pub fn new_with_board(board: Board) -> Game {
        Game {
            start_pos: board,
            moves: vec![],
        }
    }

    /// Get all moves made in this game, in order.
    ///
    /// ```
    /// use draughts::Game;
    ///
    /// let mut game = Game::new();
    /// let first = game.legal_moves()[0].clone();
    /// game.make_move(first).expect("legal move");
    /// assert_eq!(game.moves().len(), 1);
    /// ```
    pub fn moves(&self) -> &[DraughtsMove] {
        &self.moves
    }

    /// Get the current position on the board, as a value snapshot.
    ///
    /// ```
    /// use draughts::{Board, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), Board::default());
    /// ```
    pub fn current_position(&self) -> Board {
        let mut copy = self.start_pos;

        for m in self.moves.iter() {
            copy = copy.make_move_new(m);
        }

        copy
    }

    /// Who's turn is it to move?
    ///
    /// ```
    /// use draughts::{Color, Game};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.side_to_move(), Color::White);
    /// ```
    pub fn side_to_move(&self) -> Color {
        self.current_position().side_to_move()
    }

    /// Every legal move in the current position, as a fresh list the
    /// caller owns.  Empty exactly when the game is over.
    ///
    /// ```
    /// use draughts::Game;
    ///
    /// let game = Game::new();
    /// assert_eq!(game.legal_moves().len(), 7);
    /// ```
    pub fn legal_moves(&self) -> Vec<DraughtsMove> {
        MoveGen::new_legal(&self.current_position()).collect()
    }

    /// What is the result of this game, if it is over?
    ///
    /// ```
    /// use draughts::Game;
    ///
    /// let game = Game::new();
    /// assert!(game.result().is_none());
    /// ```
    pub fn result(&self) -> Option<GameResult> {
        match self.current_position().status() {
            BoardStatus::Ongoing => None,
            BoardStatus::Won(Color::White) => Some(GameResult::WhiteWins),
            BoardStatus::Won(Color::Black) => Some(GameResult::BlackWins),
        }
    }

    /// Make a draughts move in the game, after validating it.
    ///
    /// This is the only way a `Game` changes.  The move must be exactly
    /// one of the legal moves (same source, destination, and capture
    /// list); anything else is rejected with a reason and the game is left
    /// untouched, so a searching player can probe candidate moves without
    /// fear of corrupting or crashing the session.
    ///
    /// ```
    /// use draughts::{DraughtsMove, Error, Game, IllegalMoveReason, Square};
    ///
    /// let mut game = Game::new();
    /// assert!(game.make_move("c3-d4".parse().unwrap()).is_ok());
    ///
    /// // d4 is now a White piece, and it is Black's turn
    /// let err = game.make_move(DraughtsMove::step(Square::D4, Square::E5));
    /// assert_eq!(err, Err(Error::IllegalMove {
    ///     reason: IllegalMoveReason::OpponentPiece,
    /// }));
    /// ```
    pub fn make_move(&mut self, m: DraughtsMove) -> Result<(), Error> {
        let board = self.current_position();
        if board.status() != BoardStatus::Ongoing {
            return Err(Error::GameFinished);
        }

        let legal: Vec<DraughtsMove> = MoveGen::new_legal(&board).collect();
        if legal.contains(&m) {
            self.moves.push(m);
            return Ok(());
        }

        // Work out the most specific reason for the rejection.  A capture
        // chain may legitimately end back on its own source square, so the
        // occupancy check ignores that case.
        let reason = if board.piece_on(m.get_source()).is_none() {
            IllegalMoveReason::NoPieceAtSource
        } else if board.color_on(m.get_source()) != Some(board.side_to_move()) {
            IllegalMoveReason::OpponentPiece
        } else if m.get_dest() != m.get_source() && board.piece_on(m.get_dest()).is_some() {
            IllegalMoveReason::DestinationOccupied
        } else if !m.is_capture() && legal.iter().any(|x| x.is_capture()) {
            IllegalMoveReason::CaptureRequired
        } else {
            IllegalMoveReason::NotInLegalSet
        };
        Err(Error::IllegalMove { reason })
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Ok(Game::new_with_board(Board::from_str(fen)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::square::{Square, ALL_SQUARES};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn opening_move_commits() {
        let mut game = Game::new();
        game.make_move("c3-d4".parse().unwrap()).unwrap();
        let board = game.current_position();
        assert_eq!(board.piece_on(Square::C3), None);
        assert_eq!(board.piece_on(Square::D4), Some(Piece::Man));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn rejection_reasons() {
        let mut game = Game::new();

        let err = game.make_move(DraughtsMove::step(Square::D4, Square::E5));
        assert_eq!(
            err,
            Err(Error::IllegalMove {
                reason: IllegalMoveReason::NoPieceAtSource
            })
        );

        let err = game.make_move(DraughtsMove::step(Square::F6, Square::E5));
        assert_eq!(
            err,
            Err(Error::IllegalMove {
                reason: IllegalMoveReason::OpponentPiece
            })
        );

        let err = game.make_move(DraughtsMove::step(Square::A1, Square::B2));
        assert_eq!(
            err,
            Err(Error::IllegalMove {
                reason: IllegalMoveReason::DestinationOccupied
            })
        );

        let err = game.make_move(DraughtsMove::step(Square::A1, Square::D4));
        assert_eq!(
            err,
            Err(Error::IllegalMove {
                reason: IllegalMoveReason::NotInLegalSet
            })
        );

        // nothing above changed the game
        assert_eq!(game.moves().len(), 0);
        assert_eq!(game.current_position(), Board::default());
    }

    #[test]
    fn step_rejected_when_capture_available() {
        let mut game: Game = "W:Wa3,c3:Bd4".parse().unwrap();
        let err = game.make_move(DraughtsMove::step(Square::A3, Square::B4));
        assert_eq!(
            err,
            Err(Error::IllegalMove {
                reason: IllegalMoveReason::CaptureRequired
            })
        );
        assert!(game.make_move("c3xe5".parse().unwrap()).is_ok());
    }

    #[test]
    fn partial_chain_rejected() {
        let mut game: Game = "W:Wd4:Be5,g7".parse().unwrap();
        // stopping after the first jump is not a legal turn
        let err = game.make_move("d4xf6".parse().unwrap());
        assert_eq!(
            err,
            Err(Error::IllegalMove {
                reason: IllegalMoveReason::NotInLegalSet
            })
        );
        assert!(game.make_move("d4xf6xh8".parse().unwrap()).is_ok());
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
    }

    #[test]
    fn finished_game_accepts_nothing() {
        let mut game: Game = "B:Wd4:B".parse().unwrap();
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
        assert_eq!(game.result().map(|r| r.winner()), Some(Color::White));
        let err = game.make_move("d4-e5".parse().unwrap());
        assert_eq!(err, Err(Error::GameFinished));
        assert_eq!(game.moves().len(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let mut game = Game::new();
        let mut sim = game.clone();
        sim.make_move("c3-d4".parse().unwrap()).unwrap();
        assert_eq!(game.current_position(), Board::default());
        game.make_move("e3-f4".parse().unwrap()).unwrap();
        assert_ne!(sim.current_position(), game.current_position());
    }

    #[test]
    fn history_replay_reproduces_position() {
        let mut game = Game::new();
        for _ in 0..12 {
            if game.result().is_some() {
                break;
            }
            let m = game.legal_moves()[0].clone();
            game.make_move(m).unwrap();
        }

        let mut replayed = Board::default();
        for m in game.moves() {
            replayed = replayed.make_move_new(m);
        }
        assert_eq!(replayed, game.current_position());
    }

    #[test]
    fn random_playouts_hold_the_invariants() {
        let mut rng = StdRng::seed_from_u64(0xC3D4);
        for _ in 0..20 {
            let mut game = Game::new();
            for _ in 0..150 {
                if game.result().is_some() {
                    break;
                }
                let legal = game.legal_moves();
                assert!(!legal.is_empty());

                // mandatory capture: the legal set is all captures or all steps
                if legal.iter().any(|m| m.is_capture()) {
                    assert!(legal.iter().all(|m| m.is_capture()));
                }

                // pieces only ever live on dark squares
                let board = game.current_position();
                for sq in ALL_SQUARES.iter() {
                    assert!(sq.is_playable() || board.piece_on(*sq).is_none());
                }

                let pick = legal[rng.gen_range(0, legal.len())].clone();
                game.make_move(pick).unwrap();
            }
        }
    }
}
