//! # Rust Czech Draughts Rules Engine
//!
//! This crate maintains the state of an 8x8 Czech draughts game,
//! enumerates the legal moves, applies them, and tells you when somebody
//! has won.  The two rules that make draughts engines subtle are handled
//! here so you never have to think about them:
//!
//! * **Mandatory capture**: if the side to move can capture anything,
//!   every quiet move is illegal.
//! * **Capture chains**: a piece that can keep jumping must keep jumping,
//!   and the whole chain is a single move with a single capture list, not
//!   a sequence of turns.
//!
//! There is no AI here.  You ask [`MoveGen`] (or [`Game::legal_moves`])
//! for the moves, pick one however you like, and hand it back.
//!
//! ## Example
//!
//! ```
//! use draughts::Game;
//!
//! let mut game = Game::new();
//!
//! // Play the first legal move until the game ends (or we give up).
//! for _ in 0..100 {
//!     match game.legal_moves().first() {
//!         Some(m) => game.make_move(m.clone()).expect("legal move commits"),
//!         None => break,
//!     }
//! }
//!
//! if let Some(result) = game.result() {
//!     println!("{:?} after {} moves", result, game.moves().len());
//! }
//! ```

#[macro_use]
extern crate lazy_static;

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::*;

mod color;
pub use crate::color::*;

mod draughts_move;
pub use crate::draughts_move::*;

mod error;
pub use crate::error::Error;
pub use crate::error::IllegalMoveReason;

mod file;
pub use crate::file::*;

mod game;
pub use crate::game::*;

mod movegen;
pub use crate::movegen::MoveGen;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;
