//! Piece movement geometry.
//!
//! Two predicates the legality engine composes: [`pseudo_legal_shape`]
//! answers whether a destination fits the piece's movement pattern, and
//! [`path_clear`] answers whether anything stands strictly between the two
//! squares. Neither knows about turn order or king safety.

use chess_core::{Piece, PieceKind, Square};

use crate::board::Board;

/// The eight knight jump offsets as (rank, file) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Tests whether moving `piece` from `from` to `to` fits its movement
/// pattern.
///
/// Occupancy is ignored except for pawns, whose pattern depends on it: a
/// straight advance needs an empty destination, a diagonal step needs an
/// enemy occupant or the live en-passant target. Path obstruction and
/// capture-color rules are the caller's business, as is rejecting a
/// zero-length "move" (the destination then holds the mover itself, so the
/// friendly-capture rule catches it).
pub fn pseudo_legal_shape(
    piece: &Piece,
    from: Square,
    to: Square,
    board: &Board,
    en_passant_target: Option<Square>,
) -> bool {
    let rank_delta = to.rank() as i8 - from.rank() as i8;
    let file_delta = to.file() as i8 - from.file() as i8;
    match piece.kind {
        PieceKind::Pawn => pawn_shape(piece, rank_delta, file_delta, to, board, en_passant_target),
        PieceKind::Knight => KNIGHT_OFFSETS.contains(&(rank_delta, file_delta)),
        PieceKind::Bishop => rank_delta.abs() == file_delta.abs(),
        PieceKind::Rook => rank_delta == 0 || file_delta == 0,
        PieceKind::Queen => {
            rank_delta.abs() == file_delta.abs() || rank_delta == 0 || file_delta == 0
        }
        PieceKind::King => {
            rank_delta.abs() <= 1 && file_delta.abs() <= 1 && (rank_delta, file_delta) != (0, 0)
        }
    }
}

fn pawn_shape(
    piece: &Piece,
    rank_delta: i8,
    file_delta: i8,
    to: Square,
    board: &Board,
    en_passant_target: Option<Square>,
) -> bool {
    let forward = piece.color.forward();
    if file_delta == 0 {
        // straight advances never capture
        if board.get(to).is_some() {
            return false;
        }
        return rank_delta == forward || (rank_delta == 2 * forward && !piece.has_moved);
    }
    if file_delta.abs() == 1 && rank_delta == forward {
        return match board.get(to) {
            Some(occupant) => occupant.color != piece.color,
            None => en_passant_target == Some(to),
        };
    }
    false
}

/// Tests whether every square strictly between `from` and `to` is empty.
///
/// Knights and kings have no in-between squares to block, so they are
/// trivially clear. For the rest (including a pawn's double advance) the
/// straight or diagonal line is walked one step at a time; the destination
/// square itself is never examined. Call this after the shape test: for a
/// pair of squares not on a shared line there is nothing in between, and
/// the answer is vacuously true.
pub fn path_clear(kind: PieceKind, from: Square, to: Square, board: &Board) -> bool {
    if matches!(kind, PieceKind::Knight | PieceKind::King) {
        return true;
    }
    if from == to {
        return true;
    }
    let rank_step = (to.rank() as i8 - from.rank() as i8).signum();
    let file_step = (to.file() as i8 - from.file() as i8).signum();
    let mut current = from;
    loop {
        current = match current.offset(rank_step, file_step) {
            Some(next) => next,
            // walked off the board without reaching `to`
            None => return true,
        };
        if current == to {
            return true;
        }
        if board.get(current).is_some() {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;
    use proptest::prelude::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn shape_on_empty(kind: PieceKind, from: Square, to: Square) -> bool {
        let piece = Piece::new(kind, Color::White);
        pseudo_legal_shape(&piece, from, to, &Board::empty(), None)
    }

    #[test]
    fn knight_shape_exhaustive() {
        for from in Square::all() {
            for to in Square::all() {
                let dr = (to.rank() as i8 - from.rank() as i8).abs();
                let df = (to.file() as i8 - from.file() as i8).abs();
                let expected = matches!((dr, df), (1, 2) | (2, 1));
                assert_eq!(
                    shape_on_empty(PieceKind::Knight, from, to),
                    expected,
                    "knight {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn bishop_shape_exhaustive() {
        for from in Square::all() {
            for to in Square::all() {
                let dr = (to.rank() as i8 - from.rank() as i8).abs();
                let df = (to.file() as i8 - from.file() as i8).abs();
                assert_eq!(
                    shape_on_empty(PieceKind::Bishop, from, to),
                    dr == df,
                    "bishop {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn rook_shape_exhaustive() {
        for from in Square::all() {
            for to in Square::all() {
                let dr = to.rank() as i8 - from.rank() as i8;
                let df = to.file() as i8 - from.file() as i8;
                assert_eq!(
                    shape_on_empty(PieceKind::Rook, from, to),
                    dr == 0 || df == 0,
                    "rook {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn queen_shape_exhaustive() {
        for from in Square::all() {
            for to in Square::all() {
                let dr = to.rank() as i8 - from.rank() as i8;
                let df = to.file() as i8 - from.file() as i8;
                let expected = dr.abs() == df.abs() || dr == 0 || df == 0;
                assert_eq!(
                    shape_on_empty(PieceKind::Queen, from, to),
                    expected,
                    "queen {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn king_shape_exhaustive() {
        for from in Square::all() {
            for to in Square::all() {
                let dr = to.rank() as i8 - from.rank() as i8;
                let df = to.file() as i8 - from.file() as i8;
                let expected = dr.abs() <= 1 && df.abs() <= 1 && (dr, df) != (0, 0);
                assert_eq!(
                    shape_on_empty(PieceKind::King, from, to),
                    expected,
                    "king {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn pawn_single_advance_needs_empty_destination() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(pseudo_legal_shape(&pawn, sq("e2"), sq("e3"), &board, None));

        board.set(sq("e3"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(!pseudo_legal_shape(&pawn, sq("e2"), sq("e3"), &board, None));
    }

    #[test]
    fn pawn_double_advance_requires_unmoved() {
        let board = Board::empty();
        let fresh = Piece::new(PieceKind::Pawn, Color::White);
        assert!(pseudo_legal_shape(&fresh, sq("e2"), sq("e4"), &board, None));

        let mut moved = fresh;
        moved.has_moved = true;
        assert!(!pseudo_legal_shape(&moved, sq("e3"), sq("e5"), &board, None));
    }

    #[test]
    fn pawn_direction_depends_on_color() {
        let board = Board::empty();
        let white = Piece::new(PieceKind::Pawn, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);

        assert!(pseudo_legal_shape(&white, sq("e2"), sq("e3"), &board, None));
        assert!(!pseudo_legal_shape(&white, sq("e3"), sq("e2"), &board, None));
        assert!(pseudo_legal_shape(&black, sq("e7"), sq("e5"), &board, None));
        assert!(!pseudo_legal_shape(&black, sq("e5"), sq("e6"), &board, None));
    }

    #[test]
    fn pawn_diagonal_needs_enemy_or_en_passant_target() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);

        // empty diagonal, no en-passant window
        assert!(!pseudo_legal_shape(&pawn, sq("e4"), sq("d5"), &board, None));
        // empty diagonal, but it is the en-passant target
        assert!(pseudo_legal_shape(&pawn, sq("e4"), sq("d5"), &board, Some(sq("d5"))));

        board.set(sq("d5"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(pseudo_legal_shape(&pawn, sq("e4"), sq("d5"), &board, None));

        board.set(sq("d5"), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert!(!pseudo_legal_shape(&pawn, sq("e4"), sq("d5"), &board, None));
    }

    #[test]
    fn pawn_rejects_other_patterns() {
        let board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(!pseudo_legal_shape(&pawn, sq("e4"), sq("f4"), &board, None));
        assert!(!pseudo_legal_shape(&pawn, sq("e2"), sq("e5"), &board, None));
        assert!(!pseudo_legal_shape(&pawn, sq("e4"), sq("d3"), &board, None));
        assert!(!pseudo_legal_shape(&pawn, sq("e4"), sq("g5"), &board, None));
    }

    #[test]
    fn path_blocked_by_intermediate_piece() {
        let mut board = Board::empty();
        board.set(sq("e4"), Some(Piece::new(PieceKind::Pawn, Color::White)));

        assert!(!path_clear(PieceKind::Rook, sq("e1"), sq("e8"), &board));
        assert!(!path_clear(PieceKind::Queen, sq("e8"), sq("e1"), &board));
        assert!(path_clear(PieceKind::Rook, sq("a4"), sq("d4"), &board));

        board.set(sq("d5"), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!path_clear(PieceKind::Bishop, sq("c6"), sq("f3"), &board));
        assert!(path_clear(PieceKind::Bishop, sq("c4"), sq("f7"), &board));
    }

    #[test]
    fn destination_occupancy_is_not_obstruction() {
        let mut board = Board::empty();
        board.set(sq("e8"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(path_clear(PieceKind::Rook, sq("e1"), sq("e8"), &board));
    }

    #[test]
    fn knights_and_kings_never_blocked() {
        let board = Board::standard();
        // b1 knight jumps over the pawn row
        assert!(path_clear(PieceKind::Knight, sq("b1"), sq("c3"), &board));
        assert!(path_clear(PieceKind::King, sq("e1"), sq("e2"), &board));
    }

    #[test]
    fn pawn_double_advance_walks_the_skipped_square() {
        let mut board = Board::empty();
        board.set(sq("e3"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(!path_clear(PieceKind::Pawn, sq("e2"), sq("e4"), &board));
        assert!(path_clear(PieceKind::Pawn, sq("d2"), sq("d4"), &board));
    }

    proptest! {
        #[test]
        fn path_clear_matches_brute_force(
            from_rank in 0u8..8,
            from_file in 0u8..8,
            direction in 0usize..8,
            distance in 1i8..8,
            occupied in proptest::collection::vec((0u8..8, 0u8..8), 0..12),
        ) {
            const DIRECTIONS: [(i8, i8); 8] = [
                (-1, -1), (-1, 0), (-1, 1), (0, -1),
                (0, 1), (1, -1), (1, 0), (1, 1),
            ];
            let from = Square::new(from_rank, from_file).unwrap();
            let (dr, df) = DIRECTIONS[direction];
            if let Some(to) = from.offset(dr * distance, df * distance) {
                let mut board = Board::empty();
                for (rank, file) in occupied {
                    let square = Square::new(rank, file).unwrap();
                    board.set(square, Some(Piece::new(PieceKind::Pawn, Color::Black)));
                }
                let mut expected = true;
                let mut current = from;
                for _ in 1..distance {
                    current = current.offset(dr, df).unwrap();
                    if board.get(current).is_some() {
                        expected = false;
                        break;
                    }
                }
                prop_assert_eq!(path_clear(PieceKind::Queen, from, to, &board), expected);
            }
        }
    }
}
