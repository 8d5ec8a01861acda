use core::fmt;

use board::{Color, Move, Piece, PieceKind, Square};

/// Piece placement as a plain 8×8 array, indexed by `[rank][file]`
///
/// This only knows which piece stands where. Whose turn it is, castling rights and everything
/// else about the game lives in [`crate::Position`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mailbox {
    squares: [[Option<Piece>; 8]; 8],
}

impl Mailbox {
    /// A board with no pieces on it
    pub const EMPTY: Self = Self {
        squares: [[None; 8]; 8],
    };

    /// The pieces at the start of a chess game
    pub const INITIAL: Self = {
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
        let mut squares = [[None; 8]; 8];
        let mut file = 0;
        while file < 8 {
            squares[0][file] = Some(Piece::new(BACK_RANK[file], Color::White));
            squares[1][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            squares[6][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            squares[7][file] = Some(Piece::new(BACK_RANK[file], Color::Black));
            file += 1;
        }
        Self { squares }
    };

    /// Find the piece, if any, at the given square
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Put a piece on the given square, replacing whatever was there
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece);
    }

    /// Clear the given square, returning what stood there
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    /// Every occupied square with its piece, from a1 to h8 rank by rank
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all_squares().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    /// Every square holding a piece of the given color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Move the pieces as the given move describes, without any of the game bookkeeping
    ///
    /// Castling also moves the rook, en passant also removes the passed pawn and promotion
    /// replaces the pawn. The move isn't checked against the board.
    pub fn apply(&mut self, mv: &Move) {
        self.remove(mv.from);
        if let Some((rook_from, rook_to)) = mv.castling_rook() {
            self.set(mv.to, mv.piece);
            let rook = self.remove(rook_from);
            debug_assert!(
                rook.is_some_and(|rook| rook.kind == PieceKind::Rook),
                "castled without a rook on {rook_from}"
            );
            if let Some(rook) = rook {
                self.set(rook_to, rook);
            }
        } else {
            if let Some(victim) = mv.en_passant_victim() {
                self.remove(victim);
            }
            self.set(mv.to, mv.placed_piece());
        }
    }

    /// A copy of this board with the move applied, see [`Self::apply`]
    #[must_use]
    pub fn with_move(&self, mv: &Move) -> Self {
        let mut board = *self;
        board.apply(mv);
        board
    }
}

/// A diagram from white's point of view, with `.` for empty squares
impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, squares) in self.squares.iter().enumerate().rev() {
            write!(f, "{}", rank + 1)?;
            for square in squares {
                write!(f, " {}", square.map_or('.', Piece::fen_letter))?;
            }
            writeln!(f)?;
        }
        f.write_str("  a b c d e f g h")
    }
}

impl fmt::Debug for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mailbox")
            .field(&format_args!("{}", self.placement_fen()))
            .finish()
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::EMPTY
    }
}
