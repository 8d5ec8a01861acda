use board::{Color, Move, Square};

use crate::Position;

impl Position {
    /// Whether a pseudo-legal move of the side to move keeps its own king safe
    ///
    /// A castle additionally requires the king not to be in check and the square it crosses not to
    /// be attacked, and an en passant capture must land on the current en passant target.
    pub fn is_legal(&self, mv: &Move) -> bool {
        let color = mv.piece.color;
        if mv.is_castling {
            if self.is_check(color) {
                return false;
            }
            let crossed = mv
                .castling_rook()
                .map(|(_, rook_to)| rook_to)
                .unwrap_or(mv.to);
            if self.is_square_attacked(crossed, color.other()) {
                return false;
            }
        } else if mv.is_en_passant && self.en_passant_target() != Some(mv.to) {
            return false;
        }
        !self.board().with_move(mv).is_check(color)
    }

    /// The moves which are legal, in the same order
    pub fn filter_legal(&self, candidates: impl IntoIterator<Item = Move>) -> Vec<Move> {
        candidates
            .into_iter()
            .filter(|mv| self.is_legal(mv))
            .collect()
    }

    /// Every legal move of the given side
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.filter_legal(self.generate_pseudo_legal(color))
    }

    /// Whether the given side has any legal move at all
    ///
    /// Stops at the first legal move found, so this is cheaper than checking
    /// [`Self::legal_moves`] for emptiness.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.generate_pseudo_legal(color)
            .iter()
            .any(|mv| self.is_legal(mv))
    }

    /// The legal moves of the piece standing on the given square
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        let Some(piece) = self.board().get(square) else {
            return Vec::new();
        };
        self.filter_legal(
            self.generate_pseudo_legal(piece.color)
                .into_iter()
                .filter(|mv| mv.from == square),
        )
    }
}

#[cfg(test)]
mod tests {
    use board::{Piece, PieceKind};

    use super::*;

    fn legal(fen: &str) -> (Position, Vec<Move>) {
        let position = Position::from_fen(fen).unwrap();
        let moves = position.legal_moves(position.side_to_move());
        (position, moves)
    }

    fn castles(moves: &[Move]) -> Vec<Move> {
        moves.iter().copied().filter(|mv| mv.is_castling).collect()
    }

    #[test]
    fn test_initial_position() {
        let (position, moves) = legal(board::STARTING_FEN);
        assert_eq!(moves.len(), 20);
        assert!(position.has_legal_moves(Color::White));
        assert_eq!(position.legal_moves_from(Square::G1).len(), 2);
        assert_eq!(position.legal_moves_from(Square::E1).len(), 0);
        assert_eq!(position.legal_moves_from(Square::E4).len(), 0);
    }

    #[test]
    fn test_both_castles_with_clear_paths() {
        let (_, moves) = legal("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(castles(&moves).len(), 2);
        let (_, moves) = legal("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(castles(&moves).len(), 2);
    }

    #[test]
    fn test_no_castling_through_check() {
        let fen = "r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1";
        let (position, moves) = legal(fen);
        assert_eq!(castles(&moves), vec![Move::WHITE_QUEENSIDE_CASTLE]);
        assert!(position
            .generate_pseudo_legal(Color::White)
            .contains(&Move::WHITE_KINGSIDE_CASTLE));
    }

    #[test]
    fn test_no_castling_into_check() {
        let (_, moves) = legal("r3k1r1/8/8/8/8/8/8/R3K2R w KQq - 0 1");
        assert_eq!(castles(&moves), vec![Move::WHITE_QUEENSIDE_CASTLE]);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let (_, moves) = legal("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(castles(&moves).is_empty());
    }

    #[test]
    fn test_queenside_rook_path_may_be_attacked() {
        // The king never crosses b1, so it being attacked doesn't matter
        let (_, moves) = legal("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(castles(&moves).len(), 2);
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let (position, moves) = legal("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
        assert!(moves.iter().all(|mv| mv.from != Square::E2));
        assert!(position.legal_moves_from(Square::E2).is_empty());
    }

    #[test]
    fn test_pinned_en_passant() {
        // Taking on c6 would open the fifth rank between the rook and the king
        let (position, moves) = legal("8/8/8/KPp4r/8/8/8/7k w - c6 0 2");
        assert!(position
            .generate_pseudo_legal(Color::White)
            .iter()
            .any(|mv| mv.is_en_passant));
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn test_en_passant_must_match_target() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2").unwrap();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let victim = Piece::new(PieceKind::Pawn, Color::Black);
        let mv = Move {
            is_en_passant: true,
            ..Move::capture(pawn, Square::E5, Square::D6, victim)
        };
        assert!(!position.is_legal(&mv));
    }

    #[test]
    fn test_must_answer_check() {
        let (_, moves) = legal("4k3/8/8/8/8/8/3q4/R3K3 w Q - 0 1");
        // Only king moves: Kxd2 and Kf1 (d1, e2 and f2 are covered by the queen)
        let mut targets: Vec<_> = moves.iter().map(|mv| mv.to).collect();
        targets.sort_by_key(|square| square.index());
        assert_eq!(targets, vec![Square::F1, Square::D2]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let position = Position::initial_state();
        let pseudo = position.generate_pseudo_legal(Color::White);
        let mut reversed = pseudo.clone();
        reversed.reverse();
        let mut filtered = position.filter_legal(reversed);
        filtered.reverse();
        assert_eq!(filtered, pseudo);
    }
}
