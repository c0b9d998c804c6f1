//! Castling side representation.

/// The two sides a player can castle to.
///
/// The king always starts on file 4; both castles move it two files along
/// the home rank, with the rook landing on the square the king crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastleSide {
    Kingside = 0,
    Queenside = 1,
}

impl CastleSide {
    /// Both castling sides.
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Returns the file the castling rook starts on (7 or 0).
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Returns the file the king ends up on (6 or 2).
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Returns the file the rook ends up on (5 or 3).
    ///
    /// This is also the square the king passes through.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

impl std::fmt::Display for CastleSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kingside_files() {
        assert_eq!(CastleSide::Kingside.rook_file(), 7);
        assert_eq!(CastleSide::Kingside.king_target_file(), 6);
        assert_eq!(CastleSide::Kingside.rook_target_file(), 5);
    }

    #[test]
    fn queenside_files() {
        assert_eq!(CastleSide::Queenside.rook_file(), 0);
        assert_eq!(CastleSide::Queenside.king_target_file(), 2);
        assert_eq!(CastleSide::Queenside.rook_target_file(), 3);
    }

    #[test]
    fn king_crosses_rook_target() {
        // the king's one-step transit square is where the rook lands
        for side in CastleSide::ALL {
            let king_file = 4i8;
            let step = if side.king_target_file() > 4 { 1 } else { -1 };
            assert_eq!(king_file + step, side.rook_target_file() as i8);
            assert_eq!(king_file + 2 * step, side.king_target_file() as i8);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", CastleSide::Kingside), "kingside");
        assert_eq!(format!("{}", CastleSide::Queenside), "queenside");
    }
}
