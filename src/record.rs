//! Structured records of executed moves.

use crate::piece::Piece;
use crate::square::Square;

/// One executed move, as appended to the board's move log.
///
/// Records carry everything a notation renderer needs to produce algebraic
/// text without re-deriving game state, and the en-passant rule inspects the
/// latest record to recognise a pawn that just advanced two ranks. Created
/// once at execution time, never mutated.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    /// Square the move originated from.
    pub from: Square,
    /// Square the move landed on.
    pub to: Square,
    /// The moved piece, snapshot after the move: its history already ends
    /// with `to`.
    pub piece: Piece,
    /// Whether the move captured anything.
    pub capture: bool,
    /// The captured piece, history frozen at its last square.
    pub captured: Option<Piece>,
    /// Whether the capture was en passant (the one case where the captured
    /// piece did not sit on `to`).
    pub en_passant: bool,
    /// The move left the opponent in check (but not mate).
    pub check: bool,
    /// The move ended the game in checkmate.
    pub checkmate: bool,
    /// The move ended the game in a stalemate draw.
    pub draw: bool,
}
