use core::{fmt, str::FromStr};

/// The error returned when a [`Square`] can't be built from its parts
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("square coordinates out of bounds (file {file}, rank {rank})")]
    OutOfBounds { file: u8, rank: u8 },
    #[error("invalid algebraic square {0:?}")]
    InvalidNotation(String),
}

/// A square on the board
///
/// Stored in 0x88 form:
/// ```text
/// 0b12345678
///        +-+ File
///    +-+ Rank
///   +   + Must be zero, invalid position if 1
/// ```
///
/// Only valid squares can be constructed, so the two marker bits are always zero for a value of
/// this type. The layout is kept because it makes stepping off the edge of the board cheap to
/// detect when offsetting.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

/// Declare the eight named squares on one rank
macro_rules! rank_squares {
    ($rank:literal: $a:ident $b:ident $c:ident $d:ident $e:ident $f:ident $g:ident $h:ident) => {
        pub const $a: Self = Self($rank << 4);
        pub const $b: Self = Self($rank << 4 | 1);
        pub const $c: Self = Self($rank << 4 | 2);
        pub const $d: Self = Self($rank << 4 | 3);
        pub const $e: Self = Self($rank << 4 | 4);
        pub const $f: Self = Self($rank << 4 | 5);
        pub const $g: Self = Self($rank << 4 | 6);
        pub const $h: Self = Self($rank << 4 | 7);
    };
}

/// Algebraic names, indexed by [`Square::index`]
const NAMES: [&str; 64] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
];

impl Square {
    rank_squares!(0: A1 B1 C1 D1 E1 F1 G1 H1);
    rank_squares!(1: A2 B2 C2 D2 E2 F2 G2 H2);
    rank_squares!(2: A3 B3 C3 D3 E3 F3 G3 H3);
    rank_squares!(3: A4 B4 C4 D4 E4 F4 G4 H4);
    rank_squares!(4: A5 B5 C5 D5 E5 F5 G5 H5);
    rank_squares!(5: A6 B6 C6 D6 E6 F6 G6 H6);
    rank_squares!(6: A7 B7 C7 D7 E7 F7 G7 H7);
    rank_squares!(7: A8 B8 C8 D8 E8 F8 G8 H8);

    /// Build a square from its file (`0` is the a-file) and rank (`0` is the first rank)
    ///
    /// ```
    /// use board::{Square, SquareError};
    /// assert_eq!(Square::new(4, 3), Ok(Square::E4));
    /// assert_eq!(Square::new(8, 0), Err(SquareError::OutOfBounds { file: 8, rank: 0 }));
    /// ```
    pub fn new(file: u8, rank: u8) -> Result<Self, SquareError> {
        if file < 8 && rank < 8 {
            Ok(Self(rank << 4 | file))
        } else {
            Err(SquareError::OutOfBounds { file, rank })
        }
    }

    /// The file of this square, from `0` (a-file) to `7` (h-file)
    pub const fn file(self) -> u8 {
        self.0 & 0x07
    }

    /// The rank of this square, from `0` (first rank) to `7` (eighth rank)
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// A dense index in `0..64`, rank-major starting from a1
    pub const fn index(self) -> usize {
        (self.rank() * 8 + self.file()) as usize
    }

    /// Whether this is a light square
    ///
    /// Two bishops on squares with the same value here can never attack each other.
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }

    /// The letter of this square's file
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// The digit of this square's rank
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// The algebraic name of this square
    pub const fn as_str(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Offset the given number of ranks and files, returning `None` if that leaves the board.
    ///
    /// Positive rank moves towards the eighth rank, positive file moves towards the h-file.
    ///
    /// ```rust
    /// use board::Square;
    /// assert_eq!(Some(Square::D2), Square::A1.offset(1, 3));
    /// assert_eq!(Some(Square::A1), Square::D2.offset(-1, -3));
    /// assert_eq!(None, Square::D1.offset(-1, 0));
    /// assert_eq!(None, Square::H4.offset(0, 1));
    /// ```
    pub const fn offset(self, rank: i8, file: i8) -> Option<Self> {
        debug_assert!(-8 < rank && rank < 8);
        debug_assert!(-8 < file && file < 8);
        let raw = self.0 as i16 + rank as i16 * 16 + file as i16;
        if raw < 0 || raw & 0x88 != 0 {
            None
        } else {
            Some(Self(raw as u8))
        }
    }

    /// Apply an offset, see [`Self::offset`]
    pub const fn offset_by(self, offset: SquareOffset) -> Option<Self> {
        self.offset(offset.rank, offset.file)
    }

    /// An iterator over all squares on the board, from a1 to h8 rank by rank
    ///
    /// ```
    /// assert_eq!(board::Square::all_squares().count(), 64);
    /// ```
    pub fn all_squares() -> impl Iterator<Item = Self> {
        (0..64u8).map(|idx| Self((idx >> 3) << 4 | (idx & 0x07)))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.as_str())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation(s.to_string());
        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Self((rank - b'1') << 4 | (file - b'a')))
    }
}

/// A step across the board, in ranks and files
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareOffset {
    pub rank: i8,
    pub file: i8,
}

impl SquareOffset {
    /// The offsets corresponding to all possible knight moves
    pub const KNIGHT_MOVES: [Self; 8] = [
        Self::new(2, 1),
        Self::new(2, -1),
        Self::new(-2, 1),
        Self::new(-2, -1),
        Self::new(1, 2),
        Self::new(1, -2),
        Self::new(-1, 2),
        Self::new(-1, -2),
    ];

    /// The offsets corresponding to all possible king moves
    ///
    /// These are also the directions a queen slides in.
    pub const KING_MOVES: [Self; 8] = [
        Self::new(1, 1),
        Self::new(1, 0),
        Self::new(1, -1),
        Self::new(0, 1),
        Self::new(0, -1),
        Self::new(-1, 1),
        Self::new(-1, 0),
        Self::new(-1, -1),
    ];

    /// The directions a rook slides in
    pub const ORTHOGONAL: [Self; 4] = [
        Self::new(1, 0),
        Self::new(-1, 0),
        Self::new(0, 1),
        Self::new(0, -1),
    ];

    /// The directions a bishop slides in
    pub const DIAGONAL: [Self; 4] = [
        Self::new(1, 1),
        Self::new(1, -1),
        Self::new(-1, 1),
        Self::new(-1, -1),
    ];

    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }
}
