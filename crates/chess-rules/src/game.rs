//! Game state and turn flow.

use chess_core::{CastleSide, Color, Piece, PieceKind, Promotion, Square};
use thiserror::Error;

use crate::board::Board;
use crate::legality::{self, MoveError};
use crate::moves::path_clear;

/// Why a custom setup was rejected.
///
/// Fatal for that game instance: the board never becomes a `Game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no {0} king on the board")]
    MissingKing(Color),
    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// Builds a square from coordinates the caller knows are on the board.
const fn square_at(rank: u8, file: u8) -> Square {
    match Square::new(rank, file) {
        Some(square) => square,
        None => unreachable!(),
    }
}

/// A two-player chess game.
///
/// Owns the board and everything per-turn: whose move it is, the one-ply
/// en-passant window, and an unresolved promotion if a pawn just reached
/// its last rank. All mutation goes through [`try_move`](Game::try_move) /
/// [`apply_move`](Game::apply_move), [`castle`](Game::castle), and
/// [`resolve_promotion`](Game::resolve_promotion); everything else borrows
/// the game immutably. `Clone` yields a fully independent game; the
/// legality engine leans on that for speculative probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) last_moved_to: Option<Square>,
    pub(crate) pending_promotion: Option<Square>,
}

impl Game {
    /// Starts a fresh game from the standard position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            side_to_move: Color::White,
            en_passant_target: None,
            last_moved_to: None,
            pending_promotion: None,
        }
    }

    /// Starts a game from a custom position.
    ///
    /// The board must carry exactly one king of each color; anything else
    /// is rejected before a `Game` exists.
    pub fn from_setup(board: Board, side_to_move: Color) -> Result<Self, SetupError> {
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces()
                .filter(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
                .count();
            if kings == 0 {
                return Err(SetupError::MissingKing(color));
            }
            if kings > 1 {
                return Err(SetupError::DuplicateKing(color));
            }
        }
        Ok(Game {
            board,
            side_to_move,
            en_passant_target: None,
            last_moved_to: None,
            pending_promotion: None,
        })
    }

    /// The playing surface, read-only.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The square a pawn skipped on the last double advance, if that was
    /// the previous half-move. Live for exactly one reply.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The destination of the most recent completed move.
    #[inline]
    pub fn last_moved_to(&self) -> Option<Square> {
        self.last_moved_to
    }

    /// The square of a pawn awaiting promotion, if any.
    ///
    /// While this is `Some`, the turn is incomplete: every other move,
    /// castle, or legality probe is refused until
    /// [`resolve_promotion`](Game::resolve_promotion) is called.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Validates a move for the active player without touching the game.
    /// See [`legality::check_move`].
    pub fn check_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        legality::check_move(self, from, to)
    }

    /// Returns true if the active player may move `from` to `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        legality::is_legal(self, from, to)
    }

    /// Lists every legal destination for the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        legality::legal_moves_from(self, from)
    }

    /// Validates and applies one move for the active player.
    ///
    /// On error the game is untouched. On success the move is committed;
    /// if it was a pawn reaching its last rank the turn stays with the
    /// mover until [`resolve_promotion`](Game::resolve_promotion) picks the
    /// replacement piece.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        legality::check_move(self, from, to)?;
        self.apply_move(from, to);
        Ok(())
    }

    /// Applies a move mechanically, with no legality questions asked.
    ///
    /// This is the single mutation path shared by real play and the
    /// legality engine's speculative clones; callers are expected to have
    /// validated the move first. Handles the en-passant capture, the
    /// en-passant window, piece bookkeeping, and the promotion trigger.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let piece = self
            .board
            .get(from)
            .copied()
            .expect("no piece on the origin square");
        let was_double_advance = piece.kind == PieceKind::Pawn
            && (to.rank() as i8 - from.rank() as i8).abs() == 2;

        // a diagonal pawn move onto the live target is an en-passant
        // capture; the victim sits directly behind the target square
        if piece.kind == PieceKind::Pawn
            && self.en_passant_target == Some(to)
            && from.file() != to.file()
        {
            let victim = to
                .offset(-piece.color.forward(), 0)
                .expect("en passant victim square is on the board");
            self.board.set(victim, None);
        }

        let mut moved = piece;
        moved.has_moved = true;
        if moved.kind == PieceKind::Pawn {
            moved.move_count += 1;
            moved.just_advanced_two = was_double_advance;
        }
        self.board.set(from, None);
        self.board.set(to, Some(moved));

        self.en_passant_target = if was_double_advance {
            from.offset(piece.color.forward(), 0)
        } else {
            None
        };
        self.last_moved_to = Some(to);

        if moved.kind == PieceKind::Pawn && to.rank() == moved.color.promotion_rank() {
            self.pending_promotion = Some(to);
        } else {
            self.side_to_move = self.side_to_move.opposite();
        }
    }

    /// Replaces the pawn awaiting promotion and completes the turn.
    ///
    /// The new piece keeps the pawn's color and counts as having moved.
    pub fn resolve_promotion(&mut self, choice: Promotion) -> Result<(), MoveError> {
        let square = match self.pending_promotion {
            Some(square) => square,
            None => return Err(MoveError::NothingToPromote),
        };
        let pawn = self
            .board
            .get(square)
            .copied()
            .expect("pending promotion square holds the pawn");
        let mut promoted = Piece::new(choice.kind(), pawn.color);
        promoted.has_moved = true;
        self.board.set(square, Some(promoted));
        self.pending_promotion = None;
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Returns true if `color` could castle on `side` right now.
    ///
    /// All four conditions: king and rook on their home squares and
    /// unmoved; the squares strictly between them empty; the king not in
    /// check; and neither the square the king crosses nor its destination
    /// attacked. The attack tests stand the king on each square in a
    /// speculative clone, which also catches pawns bearing on empty
    /// squares.
    pub fn can_castle(&self, side: CastleSide, color: Color) -> bool {
        let home = color.home_rank();
        let king_from = square_at(home, 4);
        let rook_from = square_at(home, side.rook_file());

        let king_ready = matches!(
            self.board.get(king_from),
            Some(piece) if piece.kind == PieceKind::King && piece.color == color && !piece.has_moved
        );
        let rook_ready = matches!(
            self.board.get(rook_from),
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
        );
        if !king_ready || !rook_ready {
            return false;
        }

        if !path_clear(PieceKind::Rook, king_from, rook_from, &self.board) {
            return false;
        }

        if legality::is_in_check(self, color) {
            return false;
        }
        let step: i8 = if side.king_target_file() > 4 { 1 } else { -1 };
        for hop in [1i8, 2] {
            let crossed = square_at(home, (4 + step * hop) as u8);
            if legality::leaves_king_exposed(self, king_from, crossed, color) {
                return false;
            }
        }
        true
    }

    /// Castles the active player on the given side.
    ///
    /// The king moves two files toward the rook and the rook lands on the
    /// square the king crossed, as one atomic turn; on error nothing
    /// changes. Castling closes the en-passant window like any other move.
    pub fn castle(&mut self, side: CastleSide) -> Result<(), MoveError> {
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending(square));
        }
        let color = self.side_to_move;
        if !self.can_castle(side, color) {
            return Err(MoveError::CastlingUnavailable(side));
        }
        let home = color.home_rank();
        let king_from = square_at(home, 4);
        let king_to = square_at(home, side.king_target_file());
        let rook_from = square_at(home, side.rook_file());
        let rook_to = square_at(home, side.rook_target_file());

        self.board.relocate(king_from, king_to);
        self.board.relocate(rook_from, rook_to);
        for square in [king_to, rook_to] {
            if let Some(piece) = self.board.piece_mut(square) {
                piece.has_moved = true;
            }
        }
        self.en_passant_target = None;
        self.last_moved_to = Some(king_to);
        self.side_to_move = color.opposite();
        Ok(())
    }

    /// Returns true if the active player is in check.
    pub fn is_check(&self) -> bool {
        legality::is_in_check(self, self.side_to_move)
    }

    /// Returns true if the active player is checkmated.
    ///
    /// Derived on demand: in check with no legal move. While a promotion
    /// is pending the turn is incomplete and no verdict is rendered.
    pub fn is_checkmate(&self) -> bool {
        self.pending_promotion.is_none()
            && self.is_check()
            && !legality::has_any_legal_move(self, self.side_to_move)
    }

    /// Returns true if the active player is stalemated.
    pub fn is_stalemate(&self) -> bool {
        self.pending_promotion.is_none()
            && !self.is_check()
            && !legality::has_any_legal_move(self, self.side_to_move)
    }

    /// Returns how the game ended, or `None` while play continues.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.is_checkmate() {
            Some(GameOutcome::Checkmate {
                winner: self.side_to_move.opposite(),
            })
        } else if self.is_stalemate() {
            Some(GameOutcome::Stalemate)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
