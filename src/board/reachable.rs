//! The reachability engine: every square a piece could conceivably move to,
//! king safety ignored.

use super::Board;
use crate::piece::PieceKind;
use crate::square::{Square, Step, ADJACENT_STEPS, DIAGONAL_STEPS, KNIGHT_LEAPS, STRAIGHT_STEPS};

/// Squares a single piece can reach. 27 is the mobility ceiling of any one
/// piece on an 8x8 board (a queen on a centre square).
pub type SquareSet = heapless::Vec<Square, 27>;

fn push(set: &mut SquareSet, square: Square) {
    set.push(square).expect("mobility within the 8x8 ceiling");
}

impl Board {
    /// Every square the piece on `from` could conceivably move to, ignoring
    /// whether doing so would leave its own king attacked.
    ///
    /// An empty square yields an empty set; callers interested in the
    /// distinction check occupancy first.
    pub fn reachable_squares(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_on(from) else {
            return SquareSet::new();
        };
        match piece.kind() {
            PieceKind::Pawn => self.pawn_reachable(from),
            PieceKind::Bishop => self.sliding_reachable(from, &DIAGONAL_STEPS),
            PieceKind::Rook => self.sliding_reachable(from, &STRAIGHT_STEPS),
            PieceKind::Queen => self.sliding_reachable(from, &ADJACENT_STEPS),
            PieceKind::King => self.stepping_reachable(from, &ADJACENT_STEPS),
            PieceKind::Knight => self.stepping_reachable(from, &KNIGHT_LEAPS),
        }
    }

    /// Sliders run along their rays until the board edge, a friendly piece
    /// (excluded), or an opposing piece (included as a capture).
    fn sliding_reachable(&self, from: Square, steps: &[Step]) -> SquareSet {
        let mut set = SquareSet::new();
        for to in from.squares_along(steps, 7) {
            if self.path_clear(from, to) && !self.compatriot_squares(from, to) {
                push(&mut set, to);
            }
        }
        set
    }

    fn stepping_reachable(&self, from: Square, steps: &[Step]) -> SquareSet {
        let mut set = SquareSet::new();
        for to in from.squares_along(steps, 1) {
            if !self.compatriot_squares(from, to) {
                push(&mut set, to);
            }
        }
        set
    }

    fn pawn_reachable(&self, from: Square) -> SquareSet {
        let pawn = self.piece_on(from).expect("no pawn on origin square");
        let colour = pawn.colour();
        let unmoved = pawn.is_unmoved();
        let mut set = SquareSet::new();

        if let Some(ahead) = from.towards(colour, 0, 1) {
            if self.unoccupied(ahead) {
                push(&mut set, ahead);
                if unmoved {
                    if let Some(two_ahead) = from.towards(colour, 0, 2) {
                        if self.unoccupied(two_ahead) {
                            push(&mut set, two_ahead);
                        }
                    }
                }
            }
        }

        for side in [1, -1] {
            if let Some(attack) = from.towards(colour, side, 1) {
                if self.opposing_squares(from, attack) || self.en_passant_attack(from, attack) {
                    push(&mut set, attack);
                }
            }
        }
        set
    }
}
