//! Value types shared by everything that plays chess: pieces, squares, moves, castling rights and
//! standard algebraic notation.
//!
//! The rules themselves live in a board representation crate which implements [`Board`].

use core::fmt;

mod castling;
mod chess_move;
mod notation;
mod square;

pub use crate::castling::CastlingRights;
pub use crate::chess_move::Move;
pub use crate::notation::{
    AlgebraicNotationMove, AlgebraicNotationMoveType, AlgebraicNotationNormalMove,
    AlgebraicNotationParseError, CheckStatus, Disambiguation,
};
pub use crate::square::{Square, SquareError, SquareOffset};

/// The FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// The kinds a pawn may promote into, in the order moves are generated
    pub const PROMOTIONS: [PieceKind; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// The capitalized version of the letter used for this piece in FEN
    pub const fn fen_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// The piece kind for a capital FEN letter
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'P' => Self::Pawn,
            'N' => Self::Knight,
            'B' => Self::Bishop,
            'R' => Self::Rook,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        })
    }

    /// Whether a pawn can promote into this kind of piece
    pub const fn is_promotable(self) -> bool {
        match self {
            PieceKind::Pawn | PieceKind::King => false,
            PieceKind::Rook | PieceKind::Queen | PieceKind::Knight | PieceKind::Bishop => true,
        }
    }

    /// Whether this piece slides along lines until blocked
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn is_black(self) -> bool {
        match self {
            Color::White => false,
            Color::Black => true,
        }
    }

    pub const fn is_white(self) -> bool {
        match self {
            Color::White => true,
            Color::Black => false,
        }
    }

    /// The rank the king and rooks start on
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The rank the pawns start on
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// The rank on which this side's pawns promote
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The rank offset of one pawn step forward
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

/// A piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}
impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub const fn fen_letter(self) -> char {
        match self.color {
            Color::White => self.kind.fen_letter().to_ascii_uppercase(),
            Color::Black => self.kind.fen_letter().to_ascii_lowercase(),
        }
    }

    /// The piece for a FEN letter (upper case for white, lower case for black)
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceKind::from_fen_letter(letter.to_ascii_uppercase()) {
            Some(kind) => Some(Self { kind, color }),
            None => None,
        }
    }

    /// Returns an iterator of all pieces that exist
    pub fn all_pieces() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| PieceKind::KINDS.into_iter().map(move |kind| Self { kind, color }))
    }
}
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_letter())
    }
}

/// Why a game was drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// The side to move has no legal moves but isn't in check
    Stalemate,
    /// The same position came up for the third time
    ThreefoldRepetition,
    /// A hundred plies went by without a pawn move or a capture
    FiftyMoveRule,
    /// Neither side has the material left to deliver checkmate
    InsufficientMaterial,
}

/// The possible outcomes of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The game isn't over yet
    InProgress,
    /// The given side checkmated the other
    Checkmate { winner: Color },
    /// The game is drawn
    Draw(DrawReason),
}

/// Functionality belonging to all boards that enforce the rules
pub trait Board: Sized {
    /// An error type that can be returned
    type Err: fmt::Debug;

    /// Parse a board from the given FEN
    fn from_fen(fen: &str) -> Result<Self, Self::Err>;

    /// Convert to a FEN string
    fn to_fen(&self) -> String;

    /// Get the state at the start of a chess game
    fn initial_state() -> Self;

    /// The side whose turn it is
    fn side_to_move(&self) -> Color;

    /// Every legal move available to the given side
    fn legal_moves(&self, color: Color) -> Vec<Move>;

    /// Produce the board after the given move
    ///
    /// The move must be one of [`Self::legal_moves`] for the side to move.
    fn execute(&self, mv: Move) -> Self;

    /// Produce the board after the given move, if it is legal
    fn make_move(&self, mv: AlgebraicNotationMove) -> Result<Self, Self::Err>;

    /// Make the board after the given sequence of moves
    fn from_move_sequence(
        moves: impl IntoIterator<Item = AlgebraicNotationMove>,
    ) -> Result<Self, Self::Err> {
        let mut state = Self::initial_state();
        for m in moves {
            state = state.make_move(m)?;
        }
        Ok(state)
    }

    /// Returns if the side to move is currently in check or checkmate
    fn check_status(&self) -> CheckStatus;

    /// Whether the game is over, and how
    fn game_outcome(&self) -> GameOutcome;
}
