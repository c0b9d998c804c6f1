//! Core types for chess.
//!
//! This crate provides the fundamental value types used across the rules
//! engine:
//! - [`Color`] for the two players
//! - [`Square`] for validated board coordinates
//! - [`PieceKind`], [`Piece`], and [`Promotion`] for piece representation
//! - [`CastleSide`] for the two castling directions
//!
//! Everything here is a plain `Copy` value with no game logic attached;
//! board state and move legality live in the `chess-rules` crate.

mod castle;
mod color;
mod piece;
mod square;

pub use castle::CastleSide;
pub use color::Color;
pub use piece::{Piece, PieceKind, Promotion};
pub use square::Square;
