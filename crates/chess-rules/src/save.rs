//! Saving and loading games.
//!
//! A [`Game`] snapshots into a [`GameRecord`], a persistence-neutral bag of
//! raw coordinates and tag characters, serialized to JSON with `serde`.
//! The record is deliberately dumb: validation happens once, on the way
//! back in, and a malformed record never yields a partial game.

use chess_core::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::game::{Game, SetupError};

/// Why a saved game was rejected on load.
///
/// Fatal and atomic: the load produces either a complete [`Game`] or one of
/// these, never a half-restored state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("square ({rank}, {file}) is off the board")]
    InvalidSquare { rank: u8, file: u8 },

    #[error("unknown color tag '{0}'")]
    InvalidColor(char),

    #[error("unknown piece tag '{0}'")]
    InvalidPiece(char),

    #[error("two pieces recorded on {0}")]
    DuplicateSquare(Square),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// One occupied square in a saved game.
///
/// The two pawn bookkeeping fields are recorded for pawns only and omitted
/// from the JSON for every other kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub rank: u8,
    pub file: u8,
    pub color: char,
    pub kind: char,
    pub has_moved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub just_advanced_two: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_count: Option<u32>,
}

/// A complete saved game.
///
/// Describes a completed turn: a pending promotion is resolved before
/// saving, so the record never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub pieces: Vec<PieceRecord>,
    pub side_to_move: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_passant_target: Option<(u8, u8)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_moved_to: Option<(u8, u8)>,
}

fn checked_square(rank: u8, file: u8) -> Result<Square, LoadError> {
    Square::new(rank, file).ok_or(LoadError::InvalidSquare { rank, file })
}

impl Game {
    /// Snapshots the game as a record, pieces listed rank by rank from the
    /// top.
    pub fn to_record(&self) -> GameRecord {
        let pieces = self
            .board
            .pieces()
            .map(|(square, piece)| PieceRecord {
                rank: square.rank(),
                file: square.file(),
                color: piece.color.to_char(),
                kind: piece.kind.to_char(),
                has_moved: piece.has_moved,
                just_advanced_two: (piece.kind == PieceKind::Pawn)
                    .then_some(piece.just_advanced_two),
                move_count: (piece.kind == PieceKind::Pawn).then_some(piece.move_count),
            })
            .collect();
        GameRecord {
            pieces,
            side_to_move: self.side_to_move.to_char(),
            en_passant_target: self.en_passant_target.map(|sq| (sq.rank(), sq.file())),
            last_moved_to: self.last_moved_to.map(|sq| (sq.rank(), sq.file())),
        }
    }

    /// Reconstructs a game from a record.
    ///
    /// Coordinates and tags are validated here (the record is the one
    /// place unchecked data enters the engine), and the board must satisfy
    /// the same king rules as [`Game::from_setup`].
    pub fn from_record(record: &GameRecord) -> Result<Self, LoadError> {
        let mut board = Board::empty();
        for entry in &record.pieces {
            let square = checked_square(entry.rank, entry.file)?;
            if board.get(square).is_some() {
                return Err(LoadError::DuplicateSquare(square));
            }
            let color = Color::from_char(entry.color).ok_or(LoadError::InvalidColor(entry.color))?;
            let kind =
                PieceKind::from_char(entry.kind).ok_or(LoadError::InvalidPiece(entry.kind))?;
            let mut piece = Piece::new(kind, color);
            piece.has_moved = entry.has_moved;
            if kind == PieceKind::Pawn {
                piece.just_advanced_two = entry.just_advanced_two.unwrap_or(false);
                piece.move_count = entry.move_count.unwrap_or(0);
            }
            board.set(square, Some(piece));
        }

        let side_to_move =
            Color::from_char(record.side_to_move).ok_or(LoadError::InvalidColor(record.side_to_move))?;
        let mut game = Game::from_setup(board, side_to_move)?;
        game.en_passant_target = match record.en_passant_target {
            Some((rank, file)) => Some(checked_square(rank, file)?),
            None => None,
        };
        game.last_moved_to = match record.last_moved_to {
            Some((rank, file)) => Some(checked_square(rank, file)?),
            None => None,
        };
        Ok(game)
    }

    /// Serializes the game to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }

    /// Deserializes a game from JSON produced by [`to_json`](Game::to_json).
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let record: GameRecord = serde_json::from_str(json)?;
        Game::from_record(&record)
    }
}
