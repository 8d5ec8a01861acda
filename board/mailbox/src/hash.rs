//! Zobrist hashing of positions, for spotting repetitions

use board::{CastlingRights, Color, Piece, Square};

use crate::Mailbox;

/// The random keys XORed together to hash a position
struct Keys {
    /// Indexed by [`piece_index`], then [`Square::index`]
    pieces: [[u64; 64]; 12],
    black_to_move: u64,
    /// One key per castling right, in bit order of [`CastlingRights`]
    castling: [u64; 4],
    /// One key per file of the en passant target
    en_passant: [u64; 8],
}

/// The keys come from a fixed seed, so hashes are the same on every run and every build
static KEYS: Keys = {
    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    /// The `n`th output of a splitmix64 generator
    const fn key(n: usize) -> u64 {
        let mut z = GAMMA.wrapping_mul(n as u64 + 1);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    let mut pieces = [[0; 64]; 12];
    let mut piece = 0;
    while piece < 12 {
        let mut square = 0;
        while square < 64 {
            pieces[piece][square] = key(piece * 64 + square);
            square += 1;
        }
        piece += 1;
    }
    let mut castling = [0; 4];
    let mut right = 0;
    while right < 4 {
        castling[right] = key(12 * 64 + 1 + right);
        right += 1;
    }
    let mut en_passant = [0; 8];
    let mut file = 0;
    while file < 8 {
        en_passant[file] = key(12 * 64 + 5 + file);
        file += 1;
    }
    Keys {
        pieces,
        black_to_move: key(12 * 64),
        castling,
        en_passant,
    }
};

const fn piece_index(piece: Piece) -> usize {
    piece.color as usize * 6 + piece.kind as usize
}

/// Hash everything that makes two positions the same for the repetition rule
///
/// That is the piece placement, the side to move, the castling rights and the en passant target.
/// Clocks and move history don't take part.
///
/// ```
/// use board::{CastlingRights, Color};
/// use mailbox::{position_hash, Mailbox};
///
/// let start = position_hash(&Mailbox::INITIAL, Color::White, CastlingRights::all(), None);
/// let black = position_hash(&Mailbox::INITIAL, Color::Black, CastlingRights::all(), None);
/// assert_ne!(start, black);
/// ```
pub fn position_hash(
    board: &Mailbox,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant_target: Option<Square>,
) -> u64 {
    let mut hash = board.pieces().fold(0, |hash, (square, piece)| {
        hash ^ KEYS.pieces[piece_index(piece)][square.index()]
    });
    if side_to_move == Color::Black {
        hash ^= KEYS.black_to_move;
    }
    for (bit, key) in KEYS.castling.iter().enumerate() {
        if castling.bits() & (1 << bit) != 0 {
            hash ^= key;
        }
    }
    if let Some(target) = en_passant_target {
        hash ^= KEYS.en_passant[target.file() as usize];
    }
    hash
}

#[cfg(test)]
mod tests {
    use board::{PieceKind, STARTING_FEN};

    use super::*;
    use crate::Position;

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<u64> = KEYS.pieces.iter().flatten().copied().collect();
        keys.push(KEYS.black_to_move);
        keys.extend(KEYS.castling);
        keys.extend(KEYS.en_passant);
        let count = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), count);
        assert!(!keys.contains(&0));
    }

    #[test]
    fn test_piece_indices() {
        let mut indices: Vec<_> = Piece::all_pieces().map(piece_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_hash_ignores_clocks_and_history() {
        let from_fen = Position::from_fen(STARTING_FEN).unwrap();
        let late = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 40 60")
            .unwrap();
        assert_eq!(from_fen.hash(), Position::initial_state().hash());
        assert_eq!(from_fen.hash(), late.hash());
    }

    #[test]
    fn test_hash_sees_every_component() {
        let base = position_hash(&Mailbox::INITIAL, Color::White, CastlingRights::all(), None);
        let mut moved = Mailbox::INITIAL;
        moved.remove(Square::E2);
        moved.set(Square::E4, Piece::new(PieceKind::Pawn, Color::White));
        assert_ne!(
            base,
            position_hash(&moved, Color::White, CastlingRights::all(), None)
        );
        assert_ne!(
            base,
            position_hash(&Mailbox::INITIAL, Color::White, CastlingRights::White, None)
        );
        assert_ne!(
            base,
            position_hash(
                &Mailbox::INITIAL,
                Color::White,
                CastlingRights::all(),
                Some(Square::E3)
            )
        );
    }

    #[test]
    fn test_transpositions_hash_equal() {
        let play = |sans: &[&str]| {
            sans.iter().fold(Position::initial_state(), |position, san| {
                let mv = position.move_from_algebraic(san).unwrap();
                position.execute(mv)
            })
        };
        let first = play(&["Nf3", "Nf6", "Nc3"]);
        let second = play(&["Nc3", "Nf6", "Nf3"]);
        assert_eq!(first.hash(), second.hash());
        assert_ne!(first.move_history(), second.move_history());
    }
}
