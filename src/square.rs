//! Enumerations of chessboard accessing constants (files, ranks, squares)
//! and the step-vector geometry pieces move along.

use thiserror::Error;

use crate::colour::Colour;

/// A (file shift, rank shift) step vector.
pub type Step = (i8, i8);

/// Steps along a file or rank.
pub const STRAIGHT_STEPS: [Step; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
/// Steps along a diagonal.
pub const DIAGONAL_STEPS: [Step; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
/// Every one-square step, the king's move set.
pub const ADJACENT_STEPS: [Step; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
/// The eight knight leaps.
pub const KNIGHT_LEAPS: [Step; 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
#[error("invalid square notation")]
pub struct SquareParseError;

/// Files of a chessboard (A-H).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}
impl File {
    /// All files, queenside to kingside.
    pub const FILES: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// A file from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// A file from a given index.
    /// # Safety
    /// If the index is more than 7, results in undefined behavior.
    #[inline]
    pub unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }

    /// This file's index, 0 for A through 7 for H.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}
impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + self.index()) as char)
    }
}
impl std::str::FromStr for File {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            [letter @ b'a'..=b'h'] => Ok(unsafe { Self::from_index_unchecked(letter - b'a') }),
            _ => Err(SquareParseError),
        }
    }
}

/// Ranks of a chessboard (1-8).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}
impl Rank {
    /// All ranks, white's side first.
    pub const RANKS: [Self; 8] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    /// A rank from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// A rank from a given index.
    /// # Safety
    /// If the index is more than 7, results in undefined behavior.
    #[inline]
    pub unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }

    /// This rank's index, 0 for rank 1 through 7 for rank 8.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", 1 + *self as u8)
    }
}
impl std::str::FromStr for Rank {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.parse().map_err(|_| SquareParseError)?;
        Self::from_index(number.wrapping_sub(1)).ok_or(SquareParseError)
    }
}

/// General square indexing for 8x8 boards.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}
impl Square {
    /// Instantiates a new square based on file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { std::mem::transmute((rank as u8) << 3 | (file as u8)) }
    }

    /// The square at the given file and rank indices, if both are within 0..8.
    #[inline]
    pub fn at(file_index: i8, rank_index: i8) -> Option<Self> {
        if (0..8).contains(&file_index) && (0..8).contains(&rank_index) {
            Some(Self::new(
                File::from_index(file_index as u8)?,
                Rank::from_index(rank_index as u8)?,
            ))
        } else {
            None
        }
    }

    /// Instantiates a new square from its index.
    ///
    /// Returns `None` if the index is more than 63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// Instantiates a new square from its index.
    /// # Safety
    /// If the index is more than 63, causes undefined behavior.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }

    /// Returns the rank of the square.
    #[inline]
    pub const fn rank(self) -> Rank {
        unsafe { std::mem::transmute((self as u8) >> 3) }
    }
    /// Returns the file of the square.
    #[inline]
    pub const fn file(self) -> File {
        unsafe { std::mem::transmute((self as u8) & 7) }
    }

    /// The square reached by shifting this one by absolute file and rank
    /// deltas, or `None` past the board edge.
    #[inline]
    pub fn offset(self, file_shift: i8, rank_shift: i8) -> Option<Self> {
        Self::at(
            self.file().index() as i8 + file_shift,
            self.rank().index() as i8 + rank_shift,
        )
    }

    /// Like [`Square::offset`], but with the rank delta given in forward
    /// steps from `colour`'s point of view.
    #[inline]
    pub fn towards(self, colour: Colour, file_shift: i8, forward_steps: i8) -> Option<Self> {
        self.offset(file_shift, forward_steps * colour.direction())
    }

    /// Signed file delta from this square to `other`.
    #[inline]
    pub fn file_shift(self, other: Square) -> i8 {
        other.file().index() as i8 - self.file().index() as i8
    }

    /// Signed rank delta from this square to `other`.
    #[inline]
    pub fn rank_shift(self, other: Square) -> i8 {
        other.rank().index() as i8 - self.rank().index() as i8
    }

    /// Rank delta from this square to `other` counted in forward steps from
    /// `colour`'s point of view.
    #[inline]
    pub fn rank_increase(self, other: Square, colour: Colour) -> i8 {
        self.rank_shift(other) * colour.direction()
    }

    /// Absolute file distance to `other`.
    #[inline]
    pub fn file_distance(self, other: Square) -> u8 {
        self.file_shift(other).unsigned_abs()
    }

    /// Absolute rank distance to `other`.
    #[inline]
    pub fn rank_distance(self, other: Square) -> u8 {
        self.rank_shift(other).unsigned_abs()
    }

    /// Enumerates the squares reached by repeating each step vector 1 to
    /// `max_steps` times, stopping at the board edge.
    ///
    /// Occupancy is none of this function's business: rays run through
    /// pieces, and truncating them at obstructions is the reachability
    /// engine's job.
    pub fn squares_along<'a>(
        self,
        steps: &'a [Step],
        max_steps: i8,
    ) -> impl Iterator<Item = Square> + 'a {
        steps.iter().flat_map(move |&(file_step, rank_step)| {
            (1..=max_steps).map_while(move |count| self.offset(file_step * count, rank_step * count))
        })
    }

    /// An iterator over all squares, ordered from A1 to H8.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).map(|index| unsafe { Square::from_index_unchecked(index) })
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
impl std::str::FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_char_boundary(1) || s.len() < 2 {
            return Err(SquareParseError);
        }
        let (file, rank) = s.split_at(1);
        Ok(Self::new(file.parse()?, rank.parse()?))
    }
}
