//! Piece kinds and per-piece state.

use std::str::FromStr;

use thiserror::Error;

use crate::colour::Colour;
use crate::square::Square;

/// Total number of different piece kinds (6).
pub const NUM_PIECE_KINDS: usize = 6;

const PIECE_SYMBOLS: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

/// The kind of a piece, one of Pawn, Knight, Bishop, Rook, Queen or King.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}
impl PieceKind {
    /// All piece kinds.
    pub const PIECE_KINDS: [Self; NUM_PIECE_KINDS] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Algebraic notation key: empty for pawns, one letter otherwise.
    pub const fn key(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// Iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::PIECE_KINDS.into_iter()
    }
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_SYMBOLS[*self as usize])
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
#[error("Invalid piece symbol")]
pub struct PieceParseError;

impl FromStr for PieceKind {
    type Err = PieceParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "p" => PieceKind::Pawn,
            "n" => PieceKind::Knight,
            "b" => PieceKind::Bishop,
            "r" => PieceKind::Rook,
            "q" => PieceKind::Queen,
            "k" => PieceKind::King,
            _ => Err(PieceParseError)?,
        })
    }
}

/// A piece in play: its kind, its colour, and the squares it has occupied.
///
/// The visited log is append-only and never empty; its first entry is the
/// placement square and its last entry the square the piece currently sits
/// on. Whether a piece has moved is tracked by an explicit counter rather
/// than inferred from the log's length.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    kind: PieceKind,
    colour: Colour,
    visited: Vec<Square>,
    moves_made: u32,
}
impl Piece {
    /// A freshly placed piece, yet to make its first move.
    pub fn new(kind: PieceKind, colour: Colour, placed_on: Square) -> Self {
        Self {
            kind,
            colour,
            visited: vec![placed_on],
            moves_made: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The square this piece currently occupies (or last occupied, for a
    /// captured piece whose history is frozen).
    #[inline]
    pub fn square(&self) -> Square {
        *self.visited.last().expect("piece history is never empty")
    }

    /// Every square this piece has occupied, placement square first.
    #[inline]
    pub fn visited(&self) -> &[Square] {
        &self.visited
    }

    /// Number of moves this piece has made.
    #[inline]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Whether this piece still sits where it was placed.
    #[inline]
    pub fn is_unmoved(&self) -> bool {
        self.moves_made == 0
    }

    pub(crate) fn relocate(&mut self, to: Square) {
        if to != self.square() {
            self.visited.push(to);
            self.moves_made += 1;
        }
    }
}
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            PIECE_SYMBOLS[self.colour as usize * NUM_PIECE_KINDS + self.kind as usize]
        )
    }
}
