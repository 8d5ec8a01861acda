use board::{CheckStatus, DrawReason, GameOutcome, Piece, PieceKind, Square};

use crate::Position;

impl Position {
    /// The side to move is in check and has no way out
    pub fn is_checkmate(&self) -> bool {
        self.is_check(self.side_to_move()) && !self.has_legal_moves(self.side_to_move())
    }

    /// The side to move isn't in check, but has no legal move
    pub fn is_stalemate(&self) -> bool {
        !self.is_check(self.side_to_move()) && !self.has_legal_moves(self.side_to_move())
    }

    /// The current position has come up at least three times
    ///
    /// Positions are compared by [`Position::hash`], which covers the pieces, the side to move,
    /// castling rights and the en passant target.
    pub fn is_threefold_repetition(&self) -> bool {
        let history = self.position_history();
        if history.len() < 3 {
            return false;
        }
        let current = self.hash();
        history.iter().filter(|&&hash| hash == current).count() >= 3
    }

    /// A hundred plies have gone by without a pawn move or a capture
    pub fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock() >= 100
    }

    /// Neither side can possibly deliver checkmate
    ///
    /// That's the case for a lone king against a lone king, a king and a single minor piece against
    /// a lone king, and a king and bishop against a king and bishop with both bishops on the same
    /// color of square. Anything else counts as enough material, even when no mate is possible in
    /// practice.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Piece, Square)> = Vec::new();
        for (square, piece) in self.board().pieces() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((piece, square)),
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [(first, first_square), (second, second_square)] => {
                first.kind == PieceKind::Bishop
                    && second.kind == PieceKind::Bishop
                    && first.color != second.color
                    && first_square.is_light() == second_square.is_light()
            }
            _ => false,
        }
    }

    /// Whether the game is drawn for any reason
    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    /// Why the game is drawn, if it is
    ///
    /// When several apply, the first of stalemate, threefold repetition, the fifty move rule and
    /// insufficient material is reported.
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.is_fifty_move_rule() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }

    /// Whether the game is over, and how
    ///
    /// Checkmate ends the game even if a draw rule would also apply.
    pub fn game_outcome(&self) -> GameOutcome {
        if self.is_checkmate() {
            GameOutcome::Checkmate {
                winner: self.side_to_move().other(),
            }
        } else if let Some(reason) = self.draw_reason() {
            GameOutcome::Draw(reason)
        } else {
            GameOutcome::InProgress
        }
    }

    /// Whether the side to move is in check or checkmate
    pub fn check_status(&self) -> CheckStatus {
        let is_check = self.is_check(self.side_to_move());
        CheckStatus::from_flags(is_check, is_check && !self.has_legal_moves(self.side_to_move()))
    }
}

#[cfg(test)]
mod tests {
    use board::Color;

    use super::*;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn play(mut position: Position, sans: &[&str]) -> Position {
        for san in sans {
            let mv = position.move_from_algebraic(san).unwrap();
            position = position.execute(mv);
        }
        position
    }

    #[test]
    fn test_stalemate() {
        let position = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(position.is_stalemate());
        assert!(!position.is_checkmate());
        assert!(position.is_draw());
        assert_eq!(position.game_outcome(), GameOutcome::Draw(DrawReason::Stalemate));
        assert_eq!(position.check_status(), CheckStatus::None);
    }

    #[test]
    fn test_back_rank_mate() {
        let position = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(position.is_checkmate());
        assert!(!position.is_stalemate());
        assert_eq!(
            position.game_outcome(),
            GameOutcome::Checkmate { winner: Color::White }
        );
        assert_eq!(position.check_status(), CheckStatus::Checkmate);
    }

    #[test]
    fn test_fools_mate() {
        let position = play(Position::initial_state(), &["f3", "e5", "g4", "Qh4#"]);
        assert!(position.is_checkmate());
        assert_eq!(
            position.game_outcome(),
            GameOutcome::Checkmate { winner: Color::Black }
        );
    }

    #[test]
    fn test_check_is_not_mate() {
        let position = play(Position::initial_state(), &["e4", "f5", "Qh5+"]);
        assert_eq!(position.check_status(), CheckStatus::Check);
        assert!(!position.is_checkmate());
        assert_eq!(position.game_outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_checkmate_beats_fifty_move_rule() {
        let position = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 120 80");
        assert!(position.is_fifty_move_rule());
        assert_eq!(
            position.game_outcome(),
            GameOutcome::Checkmate { winner: Color::White }
        );
    }

    #[test]
    fn test_threefold_repetition() {
        let shuffle = ["Nf3", "Nf6", "Ng1", "Ng8"];
        let once = play(Position::initial_state(), &shuffle);
        // The start position has now come up twice
        assert!(!once.is_threefold_repetition());
        assert_eq!(once.game_outcome(), GameOutcome::InProgress);

        let twice = play(once, &shuffle);
        assert!(twice.is_threefold_repetition());
        assert_eq!(
            twice.game_outcome(),
            GameOutcome::Draw(DrawReason::ThreefoldRepetition)
        );
    }

    #[test]
    fn test_lost_castling_rights_break_repetition() {
        let start = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let shuffle = ["Kf1", "Kf8", "Ke1", "Ke8"];
        let position = play(play(start, &shuffle), &shuffle);
        // The pieces are back where they began, but the rights aren't
        assert!(!position.is_threefold_repetition());
        let position = play(position, &shuffle);
        assert!(position.is_threefold_repetition());
    }

    #[test]
    fn test_fifty_move_rule() {
        assert!(position("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").is_fifty_move_rule());
        let almost = position("4k3/8/8/8/8/8/8/R3K3 w - - 99 80");
        assert!(!almost.is_fifty_move_rule());
        assert!(!almost.is_draw());
        let after = play(almost, &["Ra2"]);
        assert_eq!(
            after.game_outcome(),
            GameOutcome::Draw(DrawReason::FiftyMoveRule)
        );
    }

    macro_rules! insufficient_material_tests {
        ($($name:ident: $fen:literal => $expected:literal,)*) => {
            $(
                #[test]
                fn $name() {
                    let position = position($fen);
                    assert_eq!(position.is_insufficient_material(), $expected, "{}", position.board());
                }
            )*
        };
    }

    insufficient_material_tests! {
        test_material_kings_only: "4k3/8/8/8/8/8/8/4K3 w - - 0 1" => true,
        test_material_king_and_knight: "4k3/8/8/8/8/8/8/1N2K3 w - - 0 1" => true,
        test_material_king_and_bishop: "2b1k3/8/8/8/8/8/8/4K3 w - - 0 1" => true,
        test_material_same_colored_bishops: "4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1" => true,
        test_material_opposite_colored_bishops: "2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1" => false,
        test_material_two_bishops_one_side: "4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1" => false,
        test_material_two_knights: "4k3/8/8/8/8/8/8/1N2K1N1 w - - 0 1" => false,
        test_material_knight_against_bishop: "4kb2/8/8/8/8/8/8/1N2K3 w - - 0 1" => false,
        test_material_pawn: "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1" => false,
        test_material_rook: "4k3/8/8/8/8/8/8/R3K3 w - - 0 1" => false,
        test_material_queen: "3qk3/8/8/8/8/8/8/4K3 w - - 0 1" => false,
    }

    #[test]
    fn test_insufficient_material_is_a_draw() {
        let position = position("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1");
        assert_eq!(
            position.game_outcome(),
            GameOutcome::Draw(DrawReason::InsufficientMaterial)
        );
    }
}
