use board::{CastlingRights, Color, Move, Piece, PieceKind, Square, SquareOffset};

use crate::Position;

impl Position {
    /// Every move the given side's pieces could make, ignoring whether it leaves their own king in
    /// check
    ///
    /// Castling is included whenever the right is held, the king and rook are on their home squares
    /// and the squares between them are empty. Whether the king passes through check is left to
    /// [`Self::legal_moves`].
    pub fn generate_pseudo_legal(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (square, piece) in self.board().pieces_of(color) {
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(square, piece, &mut moves),
                PieceKind::Knight => {
                    self.step_moves(square, piece, &SquareOffset::KNIGHT_MOVES, &mut moves)
                }
                PieceKind::Bishop => {
                    self.slide_moves(square, piece, &SquareOffset::DIAGONAL, &mut moves)
                }
                PieceKind::Rook => {
                    self.slide_moves(square, piece, &SquareOffset::ORTHOGONAL, &mut moves)
                }
                PieceKind::Queen => {
                    self.slide_moves(square, piece, &SquareOffset::DIAGONAL, &mut moves);
                    self.slide_moves(square, piece, &SquareOffset::ORTHOGONAL, &mut moves);
                }
                PieceKind::King => {
                    self.step_moves(square, piece, &SquareOffset::KING_MOVES, &mut moves);
                    self.castling_moves(square, color, &mut moves);
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, from: Square, pawn: Piece, moves: &mut Vec<Move>) {
        let board = self.board();
        let forward = pawn.color.forward();

        // Pushes
        if let Some(one_step) = from.offset(forward, 0) {
            if board.get(one_step).is_none() {
                push_pawn_move(Move::quiet(pawn, from, one_step), moves);
                if from.rank() == pawn.color.pawn_rank() {
                    if let Some(two_steps) = one_step.offset(forward, 0) {
                        if board.get(two_steps).is_none() {
                            moves.push(Move::quiet(pawn, from, two_steps));
                        }
                    }
                }
            }
        }

        // Captures
        for file in [-1, 1] {
            let Some(to) = from.offset(forward, file) else {
                continue;
            };
            match board.get(to) {
                Some(target) if target.color != pawn.color => {
                    push_pawn_move(Move::capture(pawn, from, to, target), moves);
                }
                Some(_) => {}
                None if self.en_passant_target() == Some(to) => {
                    // The pawn being taken sits beside us, in the file we capture towards
                    let victim = from
                        .offset(0, file)
                        .and_then(|square| board.get(square))
                        .filter(|piece| {
                            piece.kind == PieceKind::Pawn && piece.color != pawn.color
                        });
                    if let Some(victim) = victim {
                        moves.push(Move {
                            is_en_passant: true,
                            ..Move::capture(pawn, from, to, victim)
                        });
                    }
                }
                None => {}
            }
        }
    }

    /// Moves of a piece which jumps straight to each of the offsets
    fn step_moves(
        &self,
        from: Square,
        piece: Piece,
        offsets: &[SquareOffset],
        moves: &mut Vec<Move>,
    ) {
        for &offset in offsets {
            let Some(to) = from.offset_by(offset) else {
                continue;
            };
            match self.board().get(to) {
                None => moves.push(Move::quiet(piece, from, to)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::capture(piece, from, to, target))
                }
                Some(_) => {}
            }
        }
    }

    /// Moves of a piece which slides in each of the directions until blocked
    fn slide_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[SquareOffset],
        moves: &mut Vec<Move>,
    ) {
        for &direction in directions {
            let mut current = from;
            while let Some(to) = current.offset_by(direction) {
                match self.board().get(to) {
                    None => moves.push(Move::quiet(piece, from, to)),
                    Some(target) => {
                        if target.color != piece.color {
                            moves.push(Move::capture(piece, from, to, target));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    fn castling_moves(&self, king_square: Square, color: Color, moves: &mut Vec<Move>) {
        for kingside in [true, false] {
            if !self
                .castling_rights()
                .contains(CastlingRights::for_side(color, kingside))
            {
                continue;
            }
            let castle = Move::castle(color, kingside);
            if castle.from != king_square {
                continue;
            }
            let Some((rook_square, _)) = castle.castling_rook() else {
                continue;
            };
            if self.board().get(rook_square) != Some(Piece::new(PieceKind::Rook, color)) {
                continue;
            }
            let (low, high) = if kingside {
                (king_square.file() + 1, rook_square.file())
            } else {
                (rook_square.file() + 1, king_square.file())
            };
            let path_clear = (low..high).all(|file| {
                Square::new(file, king_square.rank())
                    .is_ok_and(|square| self.board().get(square).is_none())
            });
            if path_clear {
                moves.push(castle);
            }
        }
    }
}

/// Add a pawn move, expanding it into each promotion if it reaches the last rank
fn push_pawn_move(mv: Move, moves: &mut Vec<Move>) {
    if mv.to.rank() == mv.piece.color.promotion_rank() {
        moves.extend(PieceKind::PROMOTIONS.map(|kind| mv.promoting_to(kind)));
    } else {
        moves.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_legal(fen: &str) -> Vec<Move> {
        let position = Position::from_fen(fen).unwrap();
        position.generate_pseudo_legal(position.side_to_move())
    }

    fn from_square(moves: &[Move], square: Square) -> Vec<Move> {
        moves.iter().copied().filter(|mv| mv.from == square).collect()
    }

    #[test]
    fn test_initial_moves() {
        let position = Position::initial_state();
        let moves = position.generate_pseudo_legal(Color::White);
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|mv| mv.piece.kind == PieceKind::Pawn).count(), 16);
        assert_eq!(position.generate_pseudo_legal(Color::Black).len(), 20);
        assert!(moves.iter().all(|mv| !mv.is_capture() && !mv.is_castling));
    }

    #[test]
    fn test_pawn_double_push_blocked() {
        let moves = pseudo_legal("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(from_square(&moves, Square::E2).is_empty());

        let moves = pseudo_legal("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        let pawn_moves = from_square(&moves, Square::E2);
        assert_eq!(pawn_moves.len(), 1);
        assert_eq!(pawn_moves[0].to, Square::E3);
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let moves = pseudo_legal("4k3/8/8/3p1N2/4P3/8/8/4K3 w - - 0 1");
        let pawn_moves = from_square(&moves, Square::E4);
        assert_eq!(pawn_moves.len(), 2);
        let capture = pawn_moves.iter().find(|mv| mv.is_capture()).unwrap();
        assert_eq!(capture.to, Square::D5);
        assert_eq!(capture.captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
    }

    #[test]
    fn test_promotions() {
        let moves = pseudo_legal("3r2k1/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let pawn_moves = from_square(&moves, Square::E7);
        // Four pushes and four captures
        assert_eq!(pawn_moves.len(), 8);
        for kind in PieceKind::PROMOTIONS {
            assert!(pawn_moves
                .iter()
                .any(|mv| mv.to == Square::E8 && mv.promotion == Some(kind)));
            assert!(pawn_moves
                .iter()
                .any(|mv| mv.to == Square::D8 && mv.promotion == Some(kind) && mv.is_capture()));
        }
        assert!(pawn_moves.iter().all(|mv| mv.promotion.is_some()));

        let moves = pseudo_legal("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
        assert_eq!(from_square(&moves, Square::A2).len(), 4);
    }

    #[test]
    fn test_en_passant_requires_target() {
        let moves = pseudo_legal("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let en_passant: Vec<_> = moves.iter().filter(|mv| mv.is_en_passant).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].to, Square::D6);
        assert_eq!(en_passant[0].en_passant_victim(), Some(Square::D5));

        let moves = pseudo_legal("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2");
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn test_sliders() {
        let moves = pseudo_legal("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        // Seven up the a-file and three along the first rank
        assert_eq!(from_square(&moves, Square::A1).len(), 10);

        let moves = pseudo_legal("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert_eq!(from_square(&moves, Square::D4).len(), 27);
    }

    #[test]
    fn test_knight_in_corner() {
        let moves = pseudo_legal("4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1");
        let knight_moves = from_square(&moves, Square::A1);
        assert_eq!(knight_moves.len(), 1);
        assert_eq!(knight_moves[0].to, Square::B3);
    }

    #[test]
    fn test_castling_generated_without_check_test() {
        let moves = pseudo_legal("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(moves.contains(&Move::WHITE_KINGSIDE_CASTLE));
        assert!(moves.contains(&Move::WHITE_QUEENSIDE_CASTLE));

        // The f-file is attacked, but generation doesn't care
        let moves = pseudo_legal("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
        assert!(moves.contains(&Move::WHITE_KINGSIDE_CASTLE));
    }

    #[test]
    fn test_castling_needs_empty_path_and_rook() {
        let moves = pseudo_legal("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
        assert!(!moves.iter().any(|mv| mv.is_castling));

        // b1 must be empty for the queenside castle even though the king never crosses it
        let moves = pseudo_legal("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
        assert!(moves.contains(&Move::WHITE_KINGSIDE_CASTLE));
        assert!(!moves.contains(&Move::WHITE_QUEENSIDE_CASTLE));

        // A right held without the rook in its corner
        let moves = pseudo_legal("4k3/8/8/8/8/8/8/4K2B w K - 0 1");
        assert!(!moves.iter().any(|mv| mv.is_castling));
    }
}
