//! Perft, the count of leaf nodes in the tree of legal moves, for checking the move generator
//! against published numbers.
//!
//! See [Perft](https://www.chessprogramming.org/Perft) for more information.

use board::Move;

use crate::Position;

/// Count the positions reachable from the given one in exactly `depth` plies
///
/// ```
/// use mailbox::{perft, Position};
///
/// let start = Position::initial_state();
/// assert_eq!(perft(&start, 0), 1);
/// assert_eq!(perft(&start, 1), 20);
/// assert_eq!(perft(&start, 2), 400);
/// ```
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.legal_moves(position.side_to_move());
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&position.execute(mv), depth - 1))
        .sum()
}

/// The perft count below each legal move of the given position, in move generation order
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(Move, u64)> {
    position
        .legal_moves(position.side_to_move())
        .into_iter()
        .map(|mv| (mv, perft(&position.execute(mv), depth.saturating_sub(1))))
        .collect()
}

#[cfg(test)]
mod tests {
    use board::STARTING_FEN;

    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    /// Check the perft counts of a position from depth 1 upwards
    macro_rules! perft_tests {
        ($($name:ident: $fen:expr => [$($count:literal),+ $(,)?],)*) => {
            $(
                #[test]
                fn $name() {
                    let position = Position::from_fen($fen).unwrap();
                    let expected: &[u64] = &[$($count),+];
                    for (depth, &count) in (1..).zip(expected) {
                        assert_eq!(perft(&position, depth), count, "depth {depth} of {}", $fen);
                    }
                }
            )*
        };
    }

    perft_tests! {
        test_perft_start_position: STARTING_FEN => [20, 400, 8_902, 197_281],
        test_perft_kiwipete: KIWIPETE => [48, 2_039, 97_862],
        test_perft_position_3: POSITION_3 => [14, 191, 2_812, 43_238],
        test_perft_position_4: POSITION_4 => [6, 264, 9_467],
        test_perft_position_5: POSITION_5 => [44, 1_486, 62_379],
    }

    #[test]
    fn test_perft_divide_sums_to_perft() {
        let position = Position::from_fen(KIWIPETE).unwrap();
        let divided = perft_divide(&position, 2);
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, count)| count).sum::<u64>(), 2_039);
    }

    #[test]
    fn test_perft_from_mate_is_zero() {
        let position = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(perft(&position, 1), 0);
        assert_eq!(perft(&position, 3), 0);
        assert!(perft_divide(&position, 2).is_empty());
    }
}
