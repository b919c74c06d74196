use crate::board::Board;
use crate::color::Color;
use crate::draughts_move::{CaptureList, DraughtsMove};
use crate::piece::Piece;
use crate::square::{Square, PLAYABLE_SQUARES};
use std::iter::ExactSizeIterator;

/// The legal move generator.
///
/// This structure enumerates every legal move for the side to move, with
/// the mandatory-capture rule already applied: if any capture is possible,
/// the move list contains captures and nothing else.  Each capture in the
/// list is a *maximal* chain, so a piece keeps jumping as long as it can
/// and the whole sequence is one move.  Any of the listed moves may be
/// played; there is no "capture the most pieces" tie-break in this
/// ruleset.
///
/// # Examples
///
/// ```
/// use draughts::{Board, MoveGen};
///
/// // create a board with the initial position
/// let board = Board::default();
///
/// // create an iterable
/// let mut iterable = MoveGen::new_legal(&board);
///
/// // White has exactly 7 opening moves, none of them captures.
/// assert_eq!(iterable.len(), 7);
/// assert!(iterable.all(|m| !m.is_capture()));
/// ```
pub struct MoveGen {
    moves: Vec<DraughtsMove>,
    index: usize,
}

impl MoveGen {
    /// Create a new `MoveGen` structure, only generating legal moves
    pub fn new_legal(board: &Board) -> MoveGen {
        let color = board.side_to_move();
        let mut moves = vec![];

        for sq in PLAYABLE_SQUARES.iter() {
            if board.color_on(*sq) != Some(color) {
                continue;
            }
            if let Some(piece) = board.piece_on(*sq) {
                // Lift the mover off the board so its own starting square
                // never blocks a later jump in the chain.
                let mut scratch = *board;
                scratch.remove_piece(*sq);
                extend_chains(&scratch, piece, color, *sq, *sq, &CaptureList::new(), &mut moves);
            }
        }

        // Mandatory capture: quiet steps only exist when no chain does.
        if moves.is_empty() {
            for sq in PLAYABLE_SQUARES.iter() {
                if board.color_on(*sq) != Some(color) {
                    continue;
                }
                if let Some(piece) = board.piece_on(*sq) {
                    for (rank_dir, file_dir) in piece.directions(color) {
                        if let Some(dest) = sq.try_offset(*rank_dir, *file_dir) {
                            if board.piece_on(dest).is_none() {
                                moves.push(DraughtsMove::step(*sq, dest));
                            }
                        }
                    }
                }
            }
        }

        MoveGen { moves, index: 0 }
    }

    /// Count the number of turn sequences of a given depth.  A whole
    /// capture chain counts as one move, exactly as it is one turn.
    ///
    /// ```
    /// use draughts::{Board, MoveGen};
    ///
    /// let board = Board::default();
    /// assert_eq!(MoveGen::perft(&board, 1), 7);
    /// assert_eq!(MoveGen::perft(&board, 2), 49);
    /// ```
    pub fn perft(board: &Board, depth: u64) -> u64 {
        if depth == 0 {
            return 1;
        }
        MoveGen::new_legal(board)
            .map(|m| MoveGen::perft(&board.make_move_new(&m), depth - 1))
            .sum()
    }
}

/// Depth-first extension of a capture chain.
///
/// `board` is a scratch board with the mover lifted off and every piece
/// captured so far removed, and `current` is where the mover now stands.
/// Each available jump recurses with the jumped piece removed; when no
/// jump remains and at least one capture was made, the accumulated chain
/// is emitted as one maximal move.
///
/// The mover keeps its rank for the whole chain: a man that reaches the
/// far rank is promoted when the move is applied, never mid-chain, so it
/// cannot continue jumping as a king within the same turn.  (For a
/// forward-capturing man the far rank has no forward continuation anyway,
/// so the chain always ends there.)
fn extend_chains(
    board: &Board,
    piece: Piece,
    color: Color,
    source: Square,
    current: Square,
    captures: &CaptureList,
    moves: &mut Vec<DraughtsMove>,
) {
    let mut extended = false;

    for (rank_dir, file_dir) in piece.directions(color) {
        let over = match current.try_offset(*rank_dir, *file_dir) {
            Some(sq) => sq,
            None => continue,
        };
        let dest = match over.try_offset(*rank_dir, *file_dir) {
            Some(sq) => sq,
            None => continue,
        };
        if board.color_on(over) != Some(!color) || board.piece_on(dest).is_some() {
            continue;
        }

        extended = true;
        let mut next_board = *board;
        next_board.remove_piece(over);
        let mut next_captures = captures.clone();
        next_captures.push(over);
        extend_chains(&next_board, piece, color, source, dest, &next_captures, moves);
    }

    if !extended && !captures.is_empty() {
        moves.push(DraughtsMove::new(source, current, captures.clone()));
    }
}

impl Iterator for MoveGen {
    type Item = DraughtsMove;

    fn next(&mut self) -> Option<DraughtsMove> {
        let result = self.moves.get(self.index).cloned();
        self.index += 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact length of this iterator
    fn len(&self) -> usize {
        self.moves.len().saturating_sub(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn legal_moves(fen: &str) -> Vec<DraughtsMove> {
        let board = Board::from_str(fen).expect("valid position");
        MoveGen::new_legal(&board).collect()
    }

    fn contains(moves: &[DraughtsMove], s: &str) -> bool {
        moves.contains(&DraughtsMove::from_str(s).expect("valid move"))
    }

    #[test]
    fn seven_opening_moves() {
        let moves: Vec<DraughtsMove> = MoveGen::new_legal(&Board::default()).collect();
        assert_eq!(moves.len(), 7);
        for s in &["a3-b4", "c3-b4", "c3-d4", "e3-d4", "e3-f4", "g3-f4", "g3-h4"] {
            assert!(contains(&moves, s), "missing {}", s);
        }
    }

    #[test]
    fn men_step_forward_only() {
        let moves = legal_moves("W:Wd4:Bb8");
        assert_eq!(moves.len(), 2);
        assert!(contains(&moves, "d4-c5"));
        assert!(contains(&moves, "d4-e5"));
    }

    #[test]
    fn kings_step_all_four_ways() {
        let moves = legal_moves("W:WKd4:Bb8");
        assert_eq!(moves.len(), 4);
        for s in &["d4-c5", "d4-e5", "d4-c3", "d4-e3"] {
            assert!(contains(&moves, s), "missing {}", s);
        }
    }

    #[test]
    fn steps_blocked_by_any_piece() {
        // Own man on e5, enemy far away: d4 can only go to c5.
        let moves = legal_moves("W:Wd4,e5:Bb8");
        assert!(!contains(&moves, "d4-e5"));
        assert!(contains(&moves, "d4-c5"));
    }

    #[test]
    fn capture_is_mandatory() {
        // a3 has quiet steps, but c3 can capture, so the steps are illegal.
        let moves = legal_moves("W:Wa3,c3:Bd4");
        assert_eq!(moves.len(), 1);
        assert!(contains(&moves, "c3xe5"));
    }

    #[test]
    fn man_cannot_capture_backward() {
        // The enemy sits behind the White man, so there is nothing to take.
        let moves = legal_moves("W:Wd4:Bc3,b8");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn king_captures_backward() {
        let moves = legal_moves("B:Wd4:BKe5");
        assert_eq!(moves.len(), 1);
        assert!(contains(&moves, "e5xc3"));
    }

    #[test]
    fn chain_is_one_move() {
        // d4 jumps e5, lands f6, and must continue over g7 to h8.
        let moves = legal_moves("W:Wd4:Be5,g7");
        assert_eq!(moves.len(), 1);
        let m = &moves[0];
        assert_eq!(m.get_source(), Square::D4);
        assert_eq!(m.get_dest(), Square::H8);
        assert_eq!(m.get_captures(), &[Square::E5, Square::G7]);
        // the partial, single-jump version must not be offered
        assert!(!contains(&moves, "d4xf6"));
    }

    #[test]
    fn chain_ends_in_promotion() {
        let board = Board::from_str("W:Wd4:Be5,g7").expect("valid position");
        let m = MoveGen::new_legal(&board).next().expect("one legal move");
        let after = board.make_move_new(&m);
        assert_eq!(after.piece_on(Square::H8), Some(Piece::King));
        assert_eq!(after.count_pieces(Color::Black), 0);
    }

    #[test]
    fn all_chains_are_offered() {
        // Two different first jumps, both maximal: the player picks.
        let moves = legal_moves("W:Wd4:Bc5,e5");
        assert_eq!(moves.len(), 2);
        assert!(contains(&moves, "d4xb6"));
        assert!(contains(&moves, "d4xf6"));
    }

    #[test]
    fn promotion_does_not_extend_the_chain() {
        // f6 jumps e7 and lands on d8, the promotion rank.  A king on d8
        // could continue over c7, but promotion happens after the move, so
        // the chain ends with the single capture.
        let moves = legal_moves("W:Wf6:Be7,c7");
        assert_eq!(moves.len(), 1);
        let m = &moves[0];
        assert_eq!(m.get_dest(), Square::D8);
        assert_eq!(m.get_captures(), &[Square::E7]);
    }

    #[test]
    fn king_chain_turns_corners() {
        // The king jumps d4, lands on c3, then has to turn and take d2.
        let moves = legal_moves("B:Wd4,d2:BKe5");
        assert_eq!(moves.len(), 1);
        let m = &moves[0];
        assert_eq!(m.get_source(), Square::E5);
        assert_eq!(m.get_dest(), Square::E1);
        assert_eq!(m.get_captures(), &[Square::D4, Square::D2]);
    }

    #[test]
    fn captured_piece_cannot_block_continuation() {
        // After taking d4 the king lands on c3; the continuation over b2
        // works because d4 is already off the scratch board.
        let moves = legal_moves("B:Wd4,b2:BKe5");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].get_captures(), &[Square::D4, Square::B2]);
        assert_eq!(moves[0].get_dest(), Square::A1);
    }

    #[test]
    fn no_moves_for_bare_side() {
        let board = Board::from_str("B:Wd4:B").expect("valid position");
        assert_eq!(MoveGen::new_legal(&board).len(), 0);
    }

    #[test]
    fn perft_initial() {
        let board = Board::default();
        assert_eq!(MoveGen::perft(&board, 0), 1);
        assert_eq!(MoveGen::perft(&board, 1), 7);
        assert_eq!(MoveGen::perft(&board, 2), 49);
    }
}
