//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of optional piece occupants
//! - [`Game`] - Full game state: turn order, castling, en passant, promotion
//! - [`check_move`] / [`is_legal`] - Full move legality with tagged reasons
//! - [`is_in_check`], checkmate and stalemate detection
//! - [`GameRecord`] - JSON save/load via serde
//!
//! # Architecture
//!
//! The board is a plain mailbox: each square holds at most one piece, and
//! pieces move by relocation. Movement geometry lives in [`moves`], full
//! legality in [`legality`], and the turn flow in [`Game`]. The self-check
//! prohibition is decided by applying the candidate move to a deep clone of
//! the game and testing the mover's king; the live state is never touched
//! by a "what if".
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! game.try_move(e2, e4).unwrap();
//! assert_eq!(game.en_passant_target(), Square::from_algebraic("e3"));
//! ```

mod board;
mod game;
pub mod legality;
pub mod moves;
mod save;

pub use board::Board;
pub use game::{Game, GameOutcome, SetupError};
pub use legality::{
    check_move, has_any_legal_move, is_in_check, is_legal, legal_moves_from, MoveError,
};
pub use save::{GameRecord, LoadError, PieceRecord};
