//! Chess piece representation.

use crate::Color;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece types in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this piece type (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase tag character used in saved games.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses a saved-game tag character (either case).
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if this piece is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece occupying a board square.
///
/// A plain value with no identity of its own: the board cell holding it is
/// the piece. `color` is fixed for the piece's lifetime; `has_moved` is set
/// the first time the piece completes a move and gates castling and the
/// pawn double advance. The two pawn fields are bookkeeping for pawns only
/// and stay at their defaults for every other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    /// True iff this pawn's last completed move was a two-square advance.
    pub just_advanced_two: bool,
    /// Number of moves this pawn has completed.
    pub move_count: u32,
}

impl Piece {
    /// Creates an unmoved piece of the given kind and color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
            just_advanced_two: false,
            move_count: 0,
        }
    }

    /// Returns the Unicode figurine for this piece, the draw hint a
    /// terminal front end renders.
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '\u{2659}',   // ♙
            (Color::White, PieceKind::Knight) => '\u{2658}', // ♘
            (Color::White, PieceKind::Bishop) => '\u{2657}', // ♗
            (Color::White, PieceKind::Rook) => '\u{2656}',   // ♖
            (Color::White, PieceKind::Queen) => '\u{2655}',  // ♕
            (Color::White, PieceKind::King) => '\u{2654}',   // ♔
            (Color::Black, PieceKind::Pawn) => '\u{265F}',   // ♟
            (Color::Black, PieceKind::Knight) => '\u{265E}', // ♞
            (Color::Black, PieceKind::Bishop) => '\u{265D}', // ♝
            (Color::Black, PieceKind::Rook) => '\u{265C}',   // ♜
            (Color::Black, PieceKind::Queen) => '\u{265B}',  // ♛
            (Color::Black, PieceKind::King) => '\u{265A}',   // ♚
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// The pieces a pawn may promote to.
///
/// A closed set: promoting to a pawn or a king cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Promotion {
    Queen = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
}

impl Promotion {
    /// All promotion choices in order.
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    /// Returns the piece kind this choice promotes to.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }
}

impl std::fmt::Display for Promotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
