//! Board state and its query surface: contents, players, move and capture
//! logs, and the real/hypothetical distinction.

mod execute;
mod legality;
mod reachable;
mod safety;

pub use reachable::SquareSet;
pub use safety::MoveList;

use thiserror::Error;

use crate::colour::Colour;
use crate::piece::{Piece, PieceKind};
use crate::record::MoveRecord;
use crate::square::{File, Square};

/// One of the two participants. The board keeps them in rotation order:
/// whoever is at the head of the rotation is to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Player {
    colour: Colour,
}
impl Player {
    pub fn colour(&self) -> Colour {
        self.colour
    }
}

/// Errors from placing a piece on a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum PlaceError {
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),
    #[error("{0} already has a king on the board")]
    TooManyKings(Colour),
}

/// Back-row arrangement shared by both colours, file A to H.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess position together with its game bookkeeping.
///
/// A *real* board enforces legality when a move executes, keeps the move
/// and capture logs, and rotates turns. A *hypothetical* board, obtained by
/// cloning through [`Board::hypothetical`], is a disposable probe: it
/// trusts its caller, records nothing and never rotates. Simulation during
/// legality and mate analysis only ever touches such clones, so no probe
/// can corrupt the real board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    contents: [Option<Piece>; 64],
    players: [Player; 2],
    moves: Vec<MoveRecord>,
    captures: Vec<Piece>,
    real: bool,
}

impl Board {
    /// A board with no pieces. Real, white to move.
    pub fn empty() -> Self {
        Self {
            contents: std::array::from_fn(|_| None),
            players: [
                Player {
                    colour: Colour::White,
                },
                Player {
                    colour: Colour::Black,
                },
            ],
            moves: Vec::new(),
            captures: Vec::new(),
            real: true,
        }
    }

    /// A board with the standard starting arrangement.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for colour in Colour::COLOURS {
            for (index, &kind) in BACK_ROW.iter().enumerate() {
                let square = Square::new(File::FILES[index], colour.home_rank());
                board.contents[square as usize] = Some(Piece::new(kind, colour, square));
            }
            for file in File::FILES {
                let square = Square::new(file, colour.pawn_rank());
                board.contents[square as usize] = Some(Piece::new(PieceKind::Pawn, colour, square));
            }
        }
        board
    }

    /// Places a new piece, for building explicit positions (tests, replay).
    /// # Errors
    /// Fails if the square is occupied, or when placing a second king of
    /// either colour.
    pub fn place(
        &mut self,
        square: Square,
        kind: PieceKind,
        colour: Colour,
    ) -> Result<(), PlaceError> {
        if self.occupied(square) {
            return Err(PlaceError::SquareOccupied(square));
        }
        if kind == PieceKind::King && !self.squares_of(colour, Some(PieceKind::King)).is_empty() {
            return Err(PlaceError::TooManyKings(colour));
        }
        self.contents[square as usize] = Some(Piece::new(kind, colour, square));
        Ok(())
    }

    /// Whether this is a real game board, as opposed to a hypothetical probe.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.real
    }

    /// The player to move.
    #[inline]
    pub fn player(&self) -> &Player {
        &self.players[0]
    }

    /// Colour of the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.players[0].colour
    }

    pub(crate) fn rotate_players(&mut self) {
        self.players.swap(0, 1);
    }

    /// The piece sitting on a given square, if any.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.contents[square as usize].as_ref()
    }

    /// The colour of the piece on a given square, if any.
    #[inline]
    pub fn colour_on(&self, square: Square) -> Option<Colour> {
        self.piece_on(square).map(Piece::colour)
    }

    /// The kind of the piece on a given square, if any.
    #[inline]
    pub fn kind_on(&self, square: Square) -> Option<PieceKind> {
        self.piece_on(square).map(Piece::kind)
    }

    #[inline]
    pub fn occupied(&self, square: Square) -> bool {
        self.piece_on(square).is_some()
    }

    #[inline]
    pub(crate) fn unoccupied(&self, square: Square) -> bool {
        self.piece_on(square).is_none()
    }

    /// Both squares hold pieces of the same colour.
    pub(crate) fn compatriot_squares(&self, one: Square, other: Square) -> bool {
        match (self.colour_on(one), self.colour_on(other)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Both squares hold pieces of opposing colours.
    pub(crate) fn opposing_squares(&self, one: Square, other: Square) -> bool {
        match (self.colour_on(one), self.colour_on(other)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Squares occupied by `colour`, optionally narrowed to one piece kind,
    /// in board order.
    pub fn squares_of(&self, colour: Colour, kind: Option<PieceKind>) -> Vec<Square> {
        Square::all()
            .filter(|&square| {
                self.piece_on(square).is_some_and(|piece| {
                    piece.colour() == colour && kind.is_none_or(|kind| piece.kind() == kind)
                })
            })
            .collect()
    }

    /// Pieces of `colour`, optionally narrowed to one kind, in board order.
    pub fn pieces_of(&self, colour: Colour, kind: Option<PieceKind>) -> Vec<&Piece> {
        self.squares_of(colour, kind)
            .into_iter()
            .filter_map(|square| self.piece_on(square))
            .collect()
    }

    /// Captured pieces, optionally filtered by colour and kind, oldest first.
    pub fn captured_pieces(
        &self,
        colour: Option<Colour>,
        kind: Option<PieceKind>,
    ) -> Vec<&Piece> {
        self.captures
            .iter()
            .filter(|piece| {
                colour.is_none_or(|colour| piece.colour() == colour)
                    && kind.is_none_or(|kind| piece.kind() == kind)
            })
            .collect()
    }

    /// The square `colour`'s king stands on.
    /// # Panics
    /// If the board does not hold exactly one king of that colour. King
    /// count is an engine invariant, not a user-facing error.
    pub fn kings_square(&self, colour: Colour) -> Square {
        let kings = self.squares_of(colour, Some(PieceKind::King));
        match kings.as_slice() {
            [square] => *square,
            _ => panic!(
                "board integrity violated: {} {colour} kings on {} board",
                kings.len(),
                if self.real { "a real" } else { "a hypothetical" },
            ),
        }
    }

    /// Every executed move, oldest first.
    #[inline]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Every captured piece, oldest first.
    #[inline]
    pub fn captures(&self) -> &[Piece] {
        &self.captures
    }

    pub(crate) fn last_record(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// The latest move put the side now to move in check.
    pub fn is_check(&self) -> bool {
        self.last_record().is_some_and(|record| record.check)
    }

    /// The latest move ended the game in checkmate.
    pub fn is_checkmate(&self) -> bool {
        self.last_record().is_some_and(|record| record.checkmate)
    }

    /// The latest move ended the game in a stalemate draw.
    pub fn is_draw(&self) -> bool {
        self.last_record().is_some_and(|record| record.draw)
    }

    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.contents[square as usize].take()
    }

    pub(crate) fn put_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(
            self.unoccupied(square),
            "relocation target {square} still occupied"
        );
        self.contents[square as usize] = Some(piece);
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub(crate) fn record_capture(&mut self, piece: Piece) {
        self.captures.push(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in crate::square::Rank::RANKS.iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::FILES {
                match self.piece_on(Square::new(file, *rank)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in File::FILES {
            write!(f, " {file}")?;
        }
        Ok(())
    }
}
