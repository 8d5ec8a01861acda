use board::{Color, Move, PieceKind};

use crate::{Error, Position, Result};

impl Position {
    /// Produce the position after the given move
    ///
    /// The move is trusted to be one of [`Self::legal_moves`] for the side to move; use
    /// [`Self::try_execute`] when that isn't known.
    #[must_use]
    pub fn execute(&self, mv: Move) -> Self {
        let mut next = self.clone();

        next.board.apply(&mv);

        next.castling = next.castling.revoke_for_piece(mv.piece, mv.from);
        if mv
            .captured
            .is_some_and(|captured| captured.kind == PieceKind::Rook)
        {
            next.castling = next.castling.revoke_for_rook_capture(mv.to);
        }

        next.en_passant_target = mv.en_passant_target();

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = next.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Color::Black {
            next.fullmove_number = next.fullmove_number.saturating_add(1);
        }

        next.move_history.push(mv);
        next.side_to_move = self.side_to_move.other();
        let hash = next.hash();
        next.position_history.push(hash);
        next
    }

    /// Produce the position after the given move, if it is legal for the side to move
    pub fn try_execute(&self, mv: Move) -> Result<Self> {
        if self.legal_moves(self.side_to_move).contains(&mv) {
            Ok(self.execute(mv))
        } else {
            Err(Error::IllegalMove)
        }
    }
}
