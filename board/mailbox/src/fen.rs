//! Forsyth–Edwards Notation

use board::{CastlingRights, Color, Piece, PieceKind, Square};

use crate::{Mailbox, Position, Result};

/// What was wrong with a FEN string
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 4 or 6 space-separated fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} doesn't describe exactly 8 squares")]
    RankLength { rank: u8 },
    #[error("unknown piece letter {0:?}")]
    PieceLetter(char),
    #[error("invalid side to move {0:?}")]
    SideToMove(String),
    #[error("invalid castling rights {0:?}")]
    CastlingRights(String),
    #[error("invalid en passant target {0:?}")]
    EnPassant(String),
    #[error("invalid move clock {0:?}")]
    Clock(String),
    #[error("{color} has {count} kings")]
    KingCount { color: Color, count: usize },
}

impl Mailbox {
    /// Parse the piece placement field of a FEN string
    pub fn from_placement_fen(placement: &str) -> Result<Self, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        let mut board = Self::EMPTY;
        for (rank, row) in (0..8u8).rev().zip(ranks) {
            let mut file = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|&skip| (1..=8).contains(&skip)) {
                    file = file.saturating_add(skip as u8);
                    continue;
                }
                let piece = Piece::from_fen_letter(c).ok_or(FenError::PieceLetter(c))?;
                let square =
                    Square::new(file, rank).map_err(|_| FenError::RankLength { rank: rank + 1 })?;
                board.set(square, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankLength { rank: rank + 1 });
            }
        }
        Ok(board)
    }

    /// The piece placement field of a FEN string
    pub fn placement_fen(&self) -> String {
        let rows: Vec<String> = (0..8u8)
            .rev()
            .map(|rank| {
                let mut row = String::with_capacity(8);
                let mut empty = 0;
                for file in 0..8 {
                    let piece = Square::new(file, rank)
                        .ok()
                        .and_then(|square| self.get(square));
                    match piece {
                        Some(piece) => {
                            if empty > 0 {
                                row.push_str(&empty.to_string());
                                empty = 0;
                            }
                            row.push(piece.fen_letter());
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                }
                row
            })
            .collect();
        rows.join("/")
    }
}

impl Position {
    /// Parse a position from FEN
    ///
    /// The two clock fields may be left off, in which case they start at `0` and `1`. Each side
    /// must have exactly one king. The position starts with no move history.
    ///
    /// ```
    /// use mailbox::Position;
    ///
    /// let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")?;
    /// assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    /// assert!(Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K").is_err());
    /// # Ok::<(), mailbox::Error>(())
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let (placement, side, castling, en_passant, halfmove, fullmove) = match fields[..] {
            [placement, side, castling, en_passant] => {
                (placement, side, castling, en_passant, "0", "1")
            }
            [placement, side, castling, en_passant, halfmove, fullmove] => {
                (placement, side, castling, en_passant, halfmove, fullmove)
            }
            _ => return Err(FenError::FieldCount(fields.len()).into()),
        };

        let board = Mailbox::from_placement_fen(placement)?;
        for color in [Color::White, Color::Black] {
            let king = Piece::new(PieceKind::King, color);
            let count = board.pieces().filter(|&(_, piece)| piece == king).count();
            if count != 1 {
                return Err(FenError::KingCount { color, count }.into());
            }
        }

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::SideToMove(side.to_string()).into()),
        };

        let castling = CastlingRights::from_fen(castling)
            .ok_or_else(|| FenError::CastlingRights(castling.to_string()))?;

        let en_passant_target = match en_passant {
            "-" => None,
            _ => {
                let invalid = || FenError::EnPassant(en_passant.to_string());
                let square: Square = en_passant.parse().map_err(|_| invalid())?;
                // The pawn that just moved belongs to the other side
                let expected_rank = side_to_move.other().pawn_rank() as i8
                    + side_to_move.other().forward();
                if square.rank() as i8 != expected_rank {
                    return Err(invalid().into());
                }
                Some(square)
            }
        };

        let halfmove_clock: u16 = halfmove
            .parse()
            .map_err(|_| FenError::Clock(halfmove.to_string()))?;
        let fullmove_number: u16 = fullmove
            .parse()
            .ok()
            .filter(|&number| number > 0)
            .ok_or_else(|| FenError::Clock(fullmove.to_string()))?;

        Ok(Self::from_parts(
            board,
            side_to_move,
            castling,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Write the position as FEN, with all six fields
    pub fn to_fen(&self) -> String {
        let side_to_move = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };
        let en_passant_target = self
            .en_passant_target()
            .map_or("-", |square| square.as_str());
        format!(
            "{} {side_to_move} {} {en_passant_target} {} {}",
            self.board().placement_fen(),
            self.castling_rights().to_fen(),
            self.halfmove_clock(),
            self.fullmove_number(),
        )
    }
}
