use core::fmt;

use crate::{Color, Piece, PieceKind, Square};

/// All the details of one ply
///
/// The same structure describes a candidate produced by move generation and a move recorded in a
/// game's history. Two moves are equal only if every field matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece being moved, as it stands before the move (a promoting pawn is still a pawn)
    pub piece: Piece,
    /// The piece removed from the board, if any
    ///
    /// For en passant this is the pawn beside the origin square, not anything on [`Self::to`].
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}
impl Move {
    /// White is castling to their king side
    pub const WHITE_KINGSIDE_CASTLE: Self = Self::castle(Color::White, true);
    /// White is castling to their queen side
    pub const WHITE_QUEENSIDE_CASTLE: Self = Self::castle(Color::White, false);
    /// Black is castling to their king side
    pub const BLACK_KINGSIDE_CASTLE: Self = Self::castle(Color::Black, true);
    /// Black is castling to their queen side
    pub const BLACK_QUEENSIDE_CASTLE: Self = Self::castle(Color::Black, false);

    /// A move onto an empty square
    pub const fn quiet(piece: Piece, from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    /// A move which takes the piece standing on the target square
    pub const fn capture(piece: Piece, from: Square, to: Square, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            ..Self::quiet(piece, from, to)
        }
    }

    /// The king move for castling, which is two squares along the back rank
    pub const fn castle(color: Color, kingside: bool) -> Self {
        let (from, to) = match (color, kingside) {
            (Color::White, true) => (Square::E1, Square::G1),
            (Color::White, false) => (Square::E1, Square::C1),
            (Color::Black, true) => (Square::E8, Square::G8),
            (Color::Black, false) => (Square::E8, Square::C8),
        };
        Self {
            is_castling: true,
            ..Self::quiet(Piece::new(PieceKind::King, color), from, to)
        }
    }

    /// The same move, but turning the pawn into the given kind
    ///
    /// This doesn't check that the kind is one a pawn may promote into.
    pub const fn promoting_to(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// Whether the move removes an enemy piece
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some() || self.is_en_passant
    }

    /// Whether this castle goes towards the h-file
    ///
    /// Meaningless unless [`Self::is_castling`] is set.
    pub const fn is_kingside_castle(&self) -> bool {
        self.to.file() > self.from.file()
    }

    /// The piece standing on the target square afterwards
    pub const fn placed_piece(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(kind, self.piece.color),
            None => self.piece,
        }
    }

    /// For a castle, where the rook starts and where it ends up
    ///
    /// The rook comes from the corner on the same rank and lands on the square the king crossed.
    pub fn castling_rook(&self) -> Option<(Square, Square)> {
        if !self.is_castling {
            return None;
        }
        let (home_file, castled_file) = if self.is_kingside_castle() {
            (7, 5)
        } else {
            (0, 3)
        };
        let rank = self.from.rank();
        Some((
            Square::new(home_file, rank).ok()?,
            Square::new(castled_file, rank).ok()?,
        ))
    }

    /// For an en passant capture, the square of the pawn being captured
    ///
    /// That pawn sits on the origin rank, in the destination file.
    pub fn en_passant_victim(&self) -> Option<Square> {
        if !self.is_en_passant {
            return None;
        }
        Square::new(self.to.file(), self.from.rank()).ok()
    }

    /// Returns the square against which the opponent may respond with an en passant.
    ///
    /// If this move is not a double pawn move, then this is `None`.
    pub fn en_passant_target(&self) -> Option<Square> {
        if self.piece.kind != PieceKind::Pawn || self.from.rank().abs_diff(self.to.rank()) != 2 {
            return None;
        }
        Square::new(self.from.file(), (self.from.rank() + self.to.rank()) / 2).ok()
    }
}
/// Long algebraic form, e.g. `e2e4` or `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
