//! Board state: an 8x8 grid of optional piece occupants.

use std::fmt;

use chess_core::{Color, Piece, PieceKind, Square};

/// Home-rank piece order, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 playing surface.
///
/// Each cell holds at most one [`Piece`], owned exclusively by that cell;
/// pieces move by relocation, never by sharing. `Piece` is `Copy`, so the
/// derived `Clone` is an independent deep copy; the speculative probing in
/// the legality engine relies on that.
///
/// The board is a pure data container: it answers occupancy questions and
/// performs mechanical mutations, but knows nothing about move legality or
/// whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates a board in the standard starting position.
    ///
    /// Black's pieces occupy ranks 0 and 1 (the top), White's ranks 6 and 7.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][file] = Some(Piece::new(kind, Color::Black));
            board.cells[1][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][file] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.cells[square.rank() as usize][square.file() as usize].as_ref()
    }

    /// Returns a mutable handle to the piece on the given square, if any.
    #[inline]
    pub(crate) fn piece_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.cells[square.rank() as usize][square.file() as usize].as_mut()
    }

    /// Places `piece` on the given square, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Moves the occupant of `from` to `to`, leaving `from` empty.
    ///
    /// Whatever occupied `to` is overwritten (a capture). Relocating from an
    /// empty square just empties `to`.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.cells[from.rank() as usize][from.file() as usize].take();
        self.cells[to.rank() as usize][to.file() as usize] = piece;
    }

    /// Iterates over all occupied squares, rank by rank from the top.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Returns the square of the given color's king, if one is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8usize {
            write!(f, "{} ", 8 - rank)?;
            for file in 0..8usize {
                match self.cells[rank][file] {
                    Some(piece) => write!(f, "{} ", piece.glyph())?,
                    // empty squares keep the checkering readable
                    None if rank % 2 == file % 2 => write!(f, "\u{25A0} ")?,
                    None => write!(f, "\u{25A1} ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
