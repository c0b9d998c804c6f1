//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by rank and file.
///
/// Rank 0 is the top of the board (Black's home rank, algebraic rank 8) and
/// rank 7 the bottom (White's home rank, algebraic rank 1). File 0 is the
/// a-file. Both coordinates are validated at construction, so a `Square`
/// value is always on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Creates a square from rank and file indices (each 0-7).
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file_char = bytes[0].to_ascii_lowercase();
        if file_char < b'a' || file_char > b'h' {
            return None;
        }
        let digit = bytes[1];
        if digit < b'1' || digit > b'8' {
            return None;
        }
        // algebraic rank 1 is the bottom row, index 7
        Square::new(8 - (digit - b'0'), file_char - b'a')
    }

    /// Returns the rank index (0-7, top to bottom).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the file index (0-7, a-file to h-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the square offset by the given rank and file deltas, or
    /// `None` if it would leave the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        }
    }

    /// Iterates over all 64 squares, rank by rank from the top.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square { rank, file }))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, 8 - self.rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
