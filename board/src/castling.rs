use crate::{Color, Piece, PieceKind, Square};

bitflags::bitflags! {
    /// Which castles are still allowed (the king and the relevant rook haven't moved)
    ///
    /// These castles aren't necessarily legal right now, as they may be blocked by intervening
    /// pieces and/or checks. Rights are only ever removed during a game.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CastlingRights: u8 {
        const WhiteKingside = 0b0000_0001;
        const WhiteQueenside = 0b0000_0010;
        /// A mask for whether white can castle in either direction
        const White = 0b0000_0011;
        const BlackKingside = 0b0000_0100;
        const BlackQueenside = 0b0000_1000;
        /// A mask for whether black can castle in either direction
        const Black = 0b0000_1100;
    }
}

impl CastlingRights {
    /// The single right for castling the given side in the given direction
    pub const fn for_side(color: Color, kingside: bool) -> Self {
        match (kingside, color) {
            (true, Color::White) => Self::WhiteKingside,
            (false, Color::White) => Self::WhiteQueenside,
            (true, Color::Black) => Self::BlackKingside,
            (false, Color::Black) => Self::BlackQueenside,
        }
    }

    /// Both rights of the given side
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }

    /// The right tied to a rook standing on the given corner, if any
    const fn for_rook_home(square: Square) -> Self {
        match square {
            Square::A1 => Self::WhiteQueenside,
            Square::H1 => Self::WhiteKingside,
            Square::A8 => Self::BlackQueenside,
            Square::H8 => Self::BlackKingside,
            _ => Self::empty(),
        }
    }

    /// Remove the rights lost by the given piece leaving the given square
    ///
    /// A king moving loses both of its side's rights, and a rook leaving its home corner loses
    /// the right on that side.
    #[must_use]
    pub fn revoke_for_piece(self, piece: Piece, from: Square) -> Self {
        match piece.kind {
            PieceKind::King => self.difference(Self::for_color(piece.color)),
            PieceKind::Rook => {
                self.difference(Self::for_rook_home(from) & Self::for_color(piece.color))
            }
            _ => self,
        }
    }

    /// Remove the right tied to a rook captured on the given square
    #[must_use]
    pub fn revoke_for_rook_capture(self, square: Square) -> Self {
        self.difference(Self::for_rook_home(square))
    }

    /// Display the rights as the castling field of a FEN string
    pub fn to_fen(self) -> String {
        let mut options = String::with_capacity(4);
        if self.contains(Self::WhiteKingside) {
            options.push('K');
        }
        if self.contains(Self::WhiteQueenside) {
            options.push('Q');
        }
        if self.contains(Self::BlackKingside) {
            options.push('k');
        }
        if self.contains(Self::BlackQueenside) {
            options.push('q');
        }
        if options.is_empty() {
            options.push('-');
        }
        options
    }

    /// Parse the castling field of a FEN string
    ///
    /// Returns `None` for anything other than `-` or a combination of `KQkq` without repeats.
    pub fn from_fen(fen: &str) -> Option<Self> {
        if fen == "-" {
            return Some(Self::empty());
        }
        if fen.is_empty() {
            return None;
        }
        let mut rights = Self::empty();
        for c in fen.chars() {
            let right = match c {
                'K' => Self::WhiteKingside,
                'Q' => Self::WhiteQueenside,
                'k' => Self::BlackKingside,
                'q' => Self::BlackQueenside,
                _ => return None,
            };
            if rights.contains(right) {
                return None;
            }
            rights |= right;
        }
        Some(rights)
    }
}
