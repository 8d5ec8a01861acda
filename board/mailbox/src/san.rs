use board::{
    AlgebraicNotationMove, AlgebraicNotationMoveType, AlgebraicNotationParseError, Disambiguation,
    Move, PieceKind, Square,
};

use crate::{Error, Position, Result};

impl Position {
    /// Which parts of the origin square the given move needs in standard algebraic notation
    ///
    /// Another legal move of the same kind of piece to the same square calls for the origin file,
    /// or the rank if the file is shared, or both if neither alone tells them apart. Pawns, kings
    /// and castles never need it.
    pub fn disambiguation(&self, mv: &Move) -> Disambiguation {
        if mv.is_castling || matches!(mv.piece.kind, PieceKind::Pawn | PieceKind::King) {
            return Disambiguation::default();
        }
        let rivals: Vec<Square> = self
            .legal_moves(mv.piece.color)
            .into_iter()
            .filter(|other| {
                other.piece == mv.piece && other.to == mv.to && other.from != mv.from
            })
            .map(|other| other.from)
            .collect();
        if rivals.is_empty() {
            Disambiguation::default()
        } else if rivals.iter().all(|rival| rival.file() != mv.from.file()) {
            Disambiguation {
                file: true,
                rank: false,
            }
        } else if rivals.iter().all(|rival| rival.rank() != mv.from.rank()) {
            Disambiguation {
                file: false,
                rank: true,
            }
        } else {
            Disambiguation {
                file: true,
                rank: true,
            }
        }
    }

    /// Describe a legal move of the side to move in standard algebraic notation
    ///
    /// The move is played out to learn whether it gives check or mate.
    pub fn algebraic_notation_move(&self, mv: &Move) -> AlgebraicNotationMove {
        let after = self.execute(*mv);
        AlgebraicNotationMove::new(mv, self.disambiguation(mv), after.check_status())
    }

    /// Write a legal move of the side to move in standard algebraic notation, e.g. `Nbd7` or
    /// `exd8=Q#`
    ///
    /// ```
    /// use board::{Color, Square};
    /// use mailbox::Position;
    ///
    /// let position = Position::initial_state();
    /// let mv = position.legal_moves(Color::White)
    ///     .into_iter()
    ///     .find(|mv| mv.to == Square::F3)
    ///     .unwrap();
    /// assert_eq!(position.algebraic_notation(&mv), "Nf3");
    /// ```
    pub fn algebraic_notation(&self, mv: &Move) -> String {
        self.algebraic_notation_move(mv).to_string()
    }

    /// Find the legal move of the side to move that the notation describes
    ///
    /// Check and checkmate markers aren't verified. A capture must be written with `x`, and a
    /// quiet move without it.
    pub fn resolve_algebraic(&self, notation: &AlgebraicNotationMove) -> Result<Move> {
        let legal_moves = self.legal_moves(self.side_to_move());
        let mut candidates = legal_moves
            .into_iter()
            .filter(|mv| match notation.move_type {
                AlgebraicNotationMoveType::Normal(normal) => normal.matches(mv),
                AlgebraicNotationMoveType::CastleKingside => {
                    mv.is_castling && mv.is_kingside_castle()
                }
                AlgebraicNotationMoveType::CastleQueenside => {
                    mv.is_castling && !mv.is_kingside_castle()
                }
            });
        let found = candidates.next().ok_or(Error::NoSuchMove)?;
        if candidates.next().is_some() {
            return Err(Error::AmbiguousMove);
        }
        Ok(found)
    }

    /// Parse and resolve a move in standard algebraic notation, see [`Self::resolve_algebraic`]
    pub fn move_from_algebraic(&self, san: &str) -> Result<Move> {
        let notation: AlgebraicNotationMove = san.parse()?;
        self.resolve_algebraic(&notation)
    }

    /// Find the legal move of the side to move between the two squares
    ///
    /// A pawn reaching the last rank needs the kind it promotes into, and only a queen, rook,
    /// bishop or knight may be chosen.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move> {
        if let Some(kind) = promotion.filter(|kind| !kind.is_promotable()) {
            return Err(Error::InvalidPromotionChoice(kind));
        }
        self.legal_moves(self.side_to_move())
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or(Error::NoSuchMove)
    }

    /// Parse and resolve a move in the long form used by [`Move`]'s `Display`, e.g. `e2e4` or
    /// `e7e8q`
    pub fn move_from_long_algebraic(&self, text: &str) -> Result<Move> {
        let invalid = || AlgebraicNotationParseError(text.to_string());
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid().into());
        }
        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            Some(letter) => {
                Some(PieceKind::from_fen_letter(letter.to_ascii_uppercase()).ok_or_else(invalid)?)
            }
            None => None,
        };
        self.find_move(from, to, promotion)
    }

    /// Play a sequence of moves in standard algebraic notation from the start of a game
    pub fn from_move_sequence<'a>(moves: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        moves
            .into_iter()
            .try_fold(Self::initial_state(), |position, san| {
                let mv = position.move_from_algebraic(san)?;
                Ok(position.execute(mv))
            })
    }

    /// The standard algebraic notation of every move played to reach this position
    ///
    /// Only available when the game was played from the start position, as each move is replayed
    /// to notate it.
    pub fn notated_history(&self) -> Option<Vec<String>> {
        let mut position = Self::initial_state();
        if self.position_history().first() != Some(&position.hash()) {
            return None;
        }
        let mut notated = Vec::with_capacity(self.move_history().len());
        for mv in self.move_history() {
            notated.push(position.algebraic_notation(mv));
            position = position.execute(*mv);
        }
        Some(notated)
    }
}
