//! A chess rules engine over a plain 8×8 array of squares.
//!
//! [`Position`] is the whole state of a game. It is never changed in place: making a move
//! produces the next position.
//!
//! ```
//! use board::{Color, GameOutcome};
//! use mailbox::Position;
//!
//! let position = Position::initial_state();
//! assert_eq!(position.legal_moves(Color::White).len(), 20);
//! let e4 = position.move_from_algebraic("e4")?;
//! let position = position.execute(e4);
//! assert_eq!(position.side_to_move(), Color::Black);
//! assert_eq!(position.game_outcome(), GameOutcome::InProgress);
//! # Ok::<(), mailbox::Error>(())
//! ```

use board::{
    AlgebraicNotationMove, AlgebraicNotationParseError, Board, CastlingRights, CheckStatus, Color,
    GameOutcome, Move, PieceKind, Square, SquareError,
};

mod attacks;
mod execute;
mod fen;
mod hash;
mod legality;
mod mailbox;
mod movegen;
mod outcome;
mod perft;
mod san;

pub use crate::fen::FenError;
pub use crate::hash::position_hash;
pub use crate::mailbox::Mailbox;
pub use crate::perft::{perft, perft_divide};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),
    #[error(transparent)]
    InvalidNotation(#[from] AlgebraicNotationParseError),
    #[error("move is not legal in the current position")]
    IllegalMove,
    #[error("no legal move matches")]
    NoSuchMove,
    #[error("several legal moves match, but no disambiguation given")]
    AmbiguousMove,
    #[error("pawns can't promote to {0:?}")]
    InvalidPromotionChoice(PieceKind),
}

/// The full state of a game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Mailbox,
    side_to_move: Color,
    /// What castles are allowed, given the history of moves
    ///
    /// These castles aren't necessarily legal right now, as they may be blocked by intervening
    /// pieces and/or checks.
    castling: CastlingRights,
    /// The square a pawn skipped over with a double step on the last ply, if any
    en_passant_target: Option<Square>,
    /// Number of half-moves since a pawn was moved or a piece was captured
    ///
    /// Draw by the fifty move rule when this counter hits 100
    halfmove_clock: u16,
    /// The number of the current turn, starting at 1 and going up after black moves
    fullmove_number: u16,
    move_history: Vec<Move>,
    /// The hash of every position reached so far, including the current one
    position_history: Vec<u64>,
}

impl Position {
    /// The state at the start of a chess game
    pub fn new() -> Self {
        Self::from_parts(
            Mailbox::INITIAL,
            Color::White,
            CastlingRights::all(),
            None,
            0,
            1,
        )
    }

    /// The state at the start of a chess game, see [`Self::new`]
    pub fn initial_state() -> Self {
        Self::new()
    }

    /// Assemble a position with no history behind it
    pub(crate) fn from_parts(
        board: Mailbox,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut position = Self {
            board,
            side_to_move,
            castling,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            move_history: Vec::new(),
            position_history: Vec::new(),
        };
        position.position_history.push(position.hash());
        position
    }

    pub fn board(&self) -> &Mailbox {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Every move played to reach this position, oldest first
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// The hash of every position reached, oldest first and ending with this one
    pub fn position_history(&self) -> &[u64] {
        &self.position_history
    }

    /// The hash of this position, see [`position_hash`]
    pub fn hash(&self) -> u64 {
        position_hash(
            &self.board,
            self.side_to_move,
            self.castling,
            self.en_passant_target,
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for Position {
    type Err = Error;

    fn from_fen(fen: &str) -> Result<Self> {
        Position::from_fen(fen)
    }

    fn to_fen(&self) -> String {
        Position::to_fen(self)
    }

    fn initial_state() -> Self {
        Position::initial_state()
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn legal_moves(&self, color: Color) -> Vec<Move> {
        Position::legal_moves(self, color)
    }

    fn execute(&self, mv: Move) -> Self {
        Position::execute(self, mv)
    }

    fn make_move(&self, mv: AlgebraicNotationMove) -> Result<Self> {
        let mv = self.resolve_algebraic(&mv)?;
        Ok(Position::execute(self, mv))
    }

    fn check_status(&self) -> CheckStatus {
        Position::check_status(self)
    }

    fn game_outcome(&self) -> GameOutcome {
        Position::game_outcome(self)
    }
}
