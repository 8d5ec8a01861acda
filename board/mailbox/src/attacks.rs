use board::{Color, Piece, PieceKind, Square, SquareOffset};

use crate::{Mailbox, Position};

impl Mailbox {
    /// Where the given side's king stands, if it is on the board at all
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
    }

    /// Whether any piece of the given color attacks the square
    ///
    /// This only looks at how pieces capture, so whether the attacker is pinned or the square is
    /// empty doesn't matter. Pawns attack diagonally forward and never straight ahead.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let holds = |offset: SquareOffset, kind: PieceKind| {
            square
                .offset_by(offset)
                .and_then(|from| self.get(from))
                .is_some_and(|piece| piece == Piece::new(kind, by))
        };

        // An attacking pawn stands one rank behind the square, from its own point of view
        if [-1, 1]
            .into_iter()
            .any(|file| holds(SquareOffset::new(-by.forward(), file), PieceKind::Pawn))
        {
            return true;
        }
        if SquareOffset::KNIGHT_MOVES
            .into_iter()
            .any(|offset| holds(offset, PieceKind::Knight))
        {
            return true;
        }
        if SquareOffset::KING_MOVES
            .into_iter()
            .any(|offset| holds(offset, PieceKind::King))
        {
            return true;
        }

        let slides_into = |directions: [SquareOffset; 4], kind: PieceKind| {
            directions.into_iter().any(|direction| {
                match self.first_piece_along(square, direction) {
                    Some(piece) => {
                        piece.color == by && (piece.kind == kind || piece.kind == PieceKind::Queen)
                    }
                    None => false,
                }
            })
        };
        slides_into(SquareOffset::ORTHOGONAL, PieceKind::Rook)
            || slides_into(SquareOffset::DIAGONAL, PieceKind::Bishop)
    }

    /// The first piece met walking from the square (exclusive) in the given direction
    fn first_piece_along(&self, square: Square, direction: SquareOffset) -> Option<Piece> {
        let mut current = square;
        while let Some(next) = current.offset_by(direction) {
            if let Some(piece) = self.get(next) {
                return Some(piece);
            }
            current = next;
        }
        None
    }

    /// Whether the given side's king is attacked
    ///
    /// A side without a king on the board is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.other()))
    }
}

impl Position {
    /// See [`Mailbox::find_king`]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.board().find_king(color)
    }

    /// See [`Mailbox::is_square_attacked`]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.board().is_square_attacked(square, by)
    }

    /// See [`Mailbox::is_check`]
    pub fn is_check(&self, color: Color) -> bool {
        self.board().is_check(color)
    }
}
