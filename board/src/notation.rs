//! Standard algebraic notation (SAN)

use core::{fmt, str::FromStr};

use crate::{Move, PieceKind, Square};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid algebraic notation {0:?}")]
pub struct AlgebraicNotationParseError(pub String);

/// The data parsed out from a move in algebraic notation
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AlgebraicNotationMove {
    /// What move happened on the board
    pub move_type: AlgebraicNotationMoveType,
    /// Whether the move leaves the opponent in check(mate)
    pub check: CheckStatus,
}
impl AlgebraicNotationMove {
    /// Describe a move, given what its position says about it
    ///
    /// The disambiguation is ignored for pawns and kings, which never need it. Pawn captures
    /// always name the file the pawn came from.
    pub fn new(mv: &Move, disambiguation: Disambiguation, check: CheckStatus) -> Self {
        let move_type = if mv.is_castling {
            if mv.is_kingside_castle() {
                AlgebraicNotationMoveType::CastleKingside
            } else {
                AlgebraicNotationMoveType::CastleQueenside
            }
        } else {
            let (from_file, from_rank) = match mv.piece.kind {
                PieceKind::Pawn => (mv.is_capture().then(|| mv.from.file_char()), None),
                PieceKind::King => (None, None),
                _ => (
                    disambiguation.file.then(|| mv.from.file_char()),
                    disambiguation.rank.then(|| mv.from.rank() + 1),
                ),
            };
            AlgebraicNotationMoveType::Normal(AlgebraicNotationNormalMove {
                kind: mv.piece.kind,
                from_file,
                from_rank,
                capture: mv.is_capture(),
                to_square: mv.to,
                promotion: mv.promotion,
            })
        };
        Self { move_type, check }
    }
}
impl fmt::Display for AlgebraicNotationMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.move_type, self.check)
    }
}
impl FromStr for AlgebraicNotationMove {
    type Err = AlgebraicNotationParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (check, rest) = if let Some(rest) = s.strip_suffix('#') {
            (CheckStatus::Checkmate, rest)
        } else if let Some(rest) = s.strip_suffix('+') {
            (CheckStatus::Check, rest)
        } else {
            (CheckStatus::None, s)
        };
        Ok(Self {
            move_type: rest
                .parse()
                .map_err(|_| AlgebraicNotationParseError(s.to_string()))?,
            check,
        })
    }
}

/// Which parts of the origin square a move needs to name
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Disambiguation {
    pub file: bool,
    pub rank: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AlgebraicNotationMoveType {
    /// A move which isn't a castle (because those are notated entirely unrelatedly)
    Normal(AlgebraicNotationNormalMove),
    CastleKingside,
    CastleQueenside,
}
impl fmt::Display for AlgebraicNotationMoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(mv) => mv.fmt(f),
            Self::CastleKingside => f.write_str("O-O"),
            Self::CastleQueenside => f.write_str("O-O-O"),
        }
    }
}
impl FromStr for AlgebraicNotationMoveType {
    type Err = AlgebraicNotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "O-O" | "0-0" => Self::CastleKingside,
            "O-O-O" | "0-0-0" => Self::CastleQueenside,
            _ => Self::Normal(s.parse()?),
        })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CheckStatus {
    None,
    Check,
    Checkmate,
}
impl CheckStatus {
    /// Combine the two flags, with checkmate taking precedence
    pub const fn from_flags(is_check: bool, is_checkmate: bool) -> Self {
        match (is_check, is_checkmate) {
            (_, true) => Self::Checkmate,
            (true, false) => Self::Check,
            (false, false) => Self::None,
        }
    }
}
/// Returns the status as appended to a move in algebraic notation
impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "",
            Self::Check => "+",
            Self::Checkmate => "#",
        })
    }
}

/// All the data from a move that isn't a castle
///
/// This doesn't include the check status after the move, because that is shared with castling in
/// the [`AlgebraicNotationMove`] struct.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AlgebraicNotationNormalMove {
    pub kind: PieceKind,
    pub from_file: Option<char>,
    /// The rank as written, from `1` to `8`
    pub from_rank: Option<u8>,
    pub capture: bool,
    pub to_square: Square,
    pub promotion: Option<PieceKind>,
}
impl AlgebraicNotationNormalMove {
    /// Whether the given move fits everything this notation says about it
    ///
    /// Check markers aren't considered, and nothing here looks at the board, so several moves of a
    /// position may match when the notation is ambiguous.
    pub fn matches(&self, mv: &Move) -> bool {
        !mv.is_castling
            && mv.piece.kind == self.kind
            && mv.to == self.to_square
            && mv.promotion == self.promotion
            && mv.is_capture() == self.capture
            && self.from_file.map_or(true, |file| mv.from.file_char() == file)
            && self.from_rank.map_or(true, |rank| mv.from.rank() + 1 == rank)
    }
}
impl fmt::Display for AlgebraicNotationNormalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind != PieceKind::Pawn {
            write!(f, "{}", self.kind.fen_letter())?;
        }
        if let Some(file) = self.from_file {
            write!(f, "{file}")?;
        }
        if let Some(rank) = self.from_rank {
            write!(f, "{rank}")?;
        }
        if self.capture {
            f.write_str("x")?;
        }
        write!(f, "{}", self.to_square)?;
        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion.fen_letter())?;
        }
        Ok(())
    }
}
impl FromStr for AlgebraicNotationNormalMove {
    type Err = AlgebraicNotationParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || AlgebraicNotationParseError(input.to_string());
        if !input.is_ascii() {
            return Err(invalid());
        }
        let mut s = input;
        let kind = match s.chars().next().and_then(PieceKind::from_fen_letter) {
            Some(PieceKind::Pawn) => return Err(invalid()),
            Some(kind) => {
                s = &s[1..];
                kind
            }
            None => PieceKind::Pawn,
        };
        let promotion = match s.chars().next_back().and_then(PieceKind::from_fen_letter) {
            Some(kind) => {
                s = &s[..s.len() - 1];
                s = s.strip_suffix('=').unwrap_or(s);
                Some(kind)
            }
            None => None,
        };
        if s.len() < 2 {
            return Err(invalid());
        }
        let to_square = Square::from_str(&s[s.len() - 2..]).map_err(|_| invalid())?;
        s = &s[..s.len() - 2];
        let from_file = match s.chars().next() {
            Some(c @ ('a'..='h')) => {
                s = &s[1..];
                Some(c)
            }
            _ => None,
        };
        let from_rank = match s.chars().next() {
            Some(c @ ('1'..='8')) => {
                s = &s[1..];
                Some(c as u8 - b'0')
            }
            _ => None,
        };
        let capture = if let Some(rest) = s.strip_prefix('x') {
            s = rest;
            true
        } else {
            false
        };
        if !s.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            kind,
            from_file,
            from_rank,
            capture,
            to_square,
            promotion,
        })
    }
}
