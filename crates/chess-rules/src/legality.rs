//! Full move legality.
//!
//! [`check_move`] layers the game-level rules on top of the geometry in
//! [`crate::moves`]: turn ownership, path obstruction, capture-color rules,
//! and the self-check prohibition. The last of these is decided by
//! speculating on a deep clone of the game: the candidate move is applied
//! mechanically to the clone and the mover's king is then tested for
//! attack. Cloning rather than undoing keeps every partial mutation away
//! from the live state.

use chess_core::{CastleSide, Color, PieceKind, Square};
use thiserror::Error;

use crate::game::Game;
use crate::moves::{path_clear, pseudo_legal_shape};

/// Why a candidate move was rejected.
///
/// Every variant is recoverable: the driving loop reports the reason and
/// prompts for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("the piece on {0} belongs to the other player")]
    OpponentsPiece(Square),
    #[error("a {kind} cannot move from {from} to {to}")]
    InvalidShape {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
    #[error("the path from {from} to {to} is blocked")]
    PathBlocked { from: Square, to: Square },
    #[error("{0} is already occupied by a friendly piece")]
    FriendlyCapture(Square),
    #[error("moving {from} to {to} would leave the king in check")]
    SelfCheck { from: Square, to: Square },
    #[error("castling {0} is not available")]
    CastlingUnavailable(CastleSide),
    #[error("the pawn on {0} must be promoted first")]
    PromotionPending(Square),
    #[error("no pawn is awaiting promotion")]
    NothingToPromote,
}

/// Validates a candidate move for the active player.
///
/// Checks run in order: a pending promotion blocks everything; then the
/// origin square must hold one of the active player's pieces; the
/// destination must fit the piece's movement pattern; the path must be
/// unobstructed; the destination must not hold a friendly piece; and
/// finally the move must not leave the mover's own king attacked. The
/// first failed check is reported. The game is never mutated.
pub fn check_move(game: &Game, from: Square, to: Square) -> Result<(), MoveError> {
    check_move_as(game, game.side_to_move(), from, to)
}

/// Like [`check_move`] but with an explicit mover, so the same steps can
/// answer "would this be legal for `color`" regardless of whose turn it is.
pub(crate) fn check_move_as(
    game: &Game,
    mover: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveError> {
    if let Some(square) = game.pending_promotion() {
        return Err(MoveError::PromotionPending(square));
    }
    let piece = match game.board().get(from) {
        Some(piece) => *piece,
        None => return Err(MoveError::NoPiece(from)),
    };
    if piece.color != mover {
        return Err(MoveError::OpponentsPiece(from));
    }
    if !pseudo_legal_shape(&piece, from, to, game.board(), game.en_passant_target()) {
        return Err(MoveError::InvalidShape {
            kind: piece.kind,
            from,
            to,
        });
    }
    if !path_clear(piece.kind, from, to, game.board()) {
        return Err(MoveError::PathBlocked { from, to });
    }
    if let Some(occupant) = game.board().get(to) {
        if occupant.color == mover {
            return Err(MoveError::FriendlyCapture(to));
        }
    }
    if leaves_king_exposed(game, from, to, mover) {
        return Err(MoveError::SelfCheck { from, to });
    }
    Ok(())
}

/// Returns true if the active player may move the piece on `from` to `to`.
pub fn is_legal(game: &Game, from: Square, to: Square) -> bool {
    check_move(game, from, to).is_ok()
}

/// Returns true if `color`'s king is currently attacked.
///
/// A pure attack scan: every enemy piece is tested for a pattern-fitting,
/// unobstructed move to the king's square. No self-check recursion: a
/// piece attacks the king even if capturing it would expose its own.
pub fn is_in_check(game: &Game, color: Color) -> bool {
    let board = game.board();
    let king_square = match board.king_square(color) {
        Some(square) => square,
        None => {
            // construction and loading refuse kingless boards, so this
            // indicates a broken invariant rather than a game state
            tracing::error!("no {} king on the board; treating as not in check", color);
            return false;
        }
    };
    board.pieces().any(|(square, piece)| {
        piece.color != color
            && pseudo_legal_shape(piece, square, king_square, board, game.en_passant_target())
            && path_clear(piece.kind, square, king_square, board)
    })
}

/// Returns true if `color` has at least one legal move.
///
/// Tries every piece of that color against every destination square,
/// stopping at the first success. Checkmate and stalemate detection both
/// reduce to this plus [`is_in_check`].
pub fn has_any_legal_move(game: &Game, color: Color) -> bool {
    game.board()
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| Square::all().any(|to| check_move_as(game, color, from, to).is_ok()))
}

/// Returns every square the active player may legally move the piece on
/// `from` to. Empty if the square is empty, the piece is the opponent's,
/// or the piece has no legal move.
pub fn legal_moves_from(game: &Game, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(game, from, to))
        .collect()
}

/// Applies `from -> to` to a clone of the game and reports whether
/// `mover`'s king ends up attacked.
pub(crate) fn leaves_king_exposed(game: &Game, from: Square, to: Square, mover: Color) -> bool {
    let mut probe = game.clone();
    probe.apply_move(from, to);
    is_in_check(&probe, mover)
}
