//! The legality judge: delta-based conceivability predicates, the
//! en-passant rule, and the full legality check.

use super::Board;
use crate::colour::Colour;
use crate::piece::PieceKind;
use crate::square::Square;

/// Exactly one of the two deltas is zero: a rook's line.
fn straight(from: Square, to: Square) -> bool {
    (from.file_shift(to) == 0) != (from.rank_shift(to) == 0)
}

/// Equal non-zero distances on both axes: a bishop's line.
fn diagonal(from: Square, to: Square) -> bool {
    from != to && from.file_distance(to) == from.rank_distance(to)
}

/// One king step away.
fn adjacent(from: Square, to: Square) -> bool {
    from != to && from.file_distance(to) <= 1 && from.rank_distance(to) <= 1
}

/// A (1,2) or (2,1) distance pair.
fn knight_leap(from: Square, to: Square) -> bool {
    matches!(
        (from.file_distance(to), from.rank_distance(to)),
        (1, 2) | (2, 1)
    )
}

/// One step forward and one to the side, from `colour`'s point of view.
fn forward_diagonal_step(from: Square, to: Square, colour: Colour) -> bool {
    from.rank_increase(to, colour) == 1 && from.file_distance(to) == 1
}

/// The square an en-passant capture removes its victim from: the defending
/// pawn stands on the destination's file at the attacker's origin rank.
///
/// Pure geometry plus the rank constraint (en passant is only ever
/// delivered from the attacker's fifth rank). Occupancy and move-history
/// validation live in [`Board::en_passant_attack`].
pub(super) fn en_passant_victim_square(from: Square, to: Square) -> Option<Square> {
    let colour = Colour::COLOURS
        .into_iter()
        .find(|&colour| forward_diagonal_step(from, to, colour))?;
    if colour.relative_rank(5) != Some(from.rank()) {
        return None;
    }
    Some(Square::new(to.file(), from.rank()))
}

impl Board {
    /// Full legality of `from`→`to` for `colour`: the origin piece belongs
    /// to `colour`, the move is geometrically conceivable, and it does not
    /// leave `colour`'s own king attacked.
    pub fn is_legal(&self, from: Square, to: Square, colour: Colour) -> bool {
        if self.colour_on(from) != Some(colour) {
            // Also rules out moving the opponent's piece.
            return false;
        }
        self.conceivable_move(from, to) && !self.endangers_own_king(from, to)
    }

    /// Conceivable = the destination is reachable for the piece's kind,
    /// king safety ignored.
    ///
    /// Judged from the (file, rank) delta rather than by materializing
    /// [`Board::reachable_squares`]. The duplication is deliberate: a
    /// single-move query should not enumerate whole rays. Both derivations
    /// must always agree.
    pub(crate) fn conceivable_move(&self, from: Square, to: Square) -> bool {
        self.conceivable_general(from, to) && self.conceivable_specific(from, to)
    }

    fn conceivable_general(&self, from: Square, to: Square) -> bool {
        self.occupied(from) && !self.compatriot_squares(from, to)
    }

    fn conceivable_specific(&self, from: Square, to: Square) -> bool {
        match self.kind_on(from).expect("no piece on origin square") {
            PieceKind::Pawn => self.pawn_move_conceivable(from, to),
            PieceKind::Bishop => diagonal(from, to) && self.path_clear(from, to),
            PieceKind::Rook => straight(from, to) && self.path_clear(from, to),
            PieceKind::Queen => {
                (straight(from, to) || diagonal(from, to)) && self.path_clear(from, to)
            }
            PieceKind::King => adjacent(from, to),
            PieceKind::Knight => knight_leap(from, to),
        }
    }

    fn pawn_move_conceivable(&self, from: Square, to: Square) -> bool {
        let pawn = self.piece_on(from).expect("no pawn on origin square");
        let side_steps = from.file_distance(to);
        let forward_steps = from.rank_increase(to, pawn.colour());
        match (side_steps, forward_steps) {
            (1, 1) => self.occupied(to) || self.en_passant_attack(from, to),
            (0, 1) => self.unoccupied(to),
            (0, 2) => pawn.is_unmoved() && self.unoccupied(to) && self.path_clear(from, to),
            _ => false,
        }
    }

    /// Whether `from`→`to` is a valid en-passant capture: a pawn stepping
    /// forward-diagonally onto an empty square, where the square passed
    /// over by the defending pawn matches, and the board's latest move
    /// record shows that pawn arriving by a double step.
    pub(crate) fn en_passant_attack(&self, from: Square, to: Square) -> bool {
        let Some(attacker) = self.piece_on(from) else {
            return false;
        };
        if attacker.kind() != PieceKind::Pawn
            || !forward_diagonal_step(from, to, attacker.colour())
            || self.occupied(to)
        {
            return false;
        }

        let defender = attacker.colour().inverse();
        // The defender double-stepped over the attacked square: from one
        // rank short of it to one rank past it, from the defender's view.
        let (Some(passed_from), Some(passed_to)) =
            (to.towards(defender, 0, -1), to.towards(defender, 0, 1))
        else {
            return false;
        };
        let passing_pawn = self
            .piece_on(passed_to)
            .is_some_and(|piece| piece.kind() == PieceKind::Pawn && piece.colour() == defender);

        passing_pawn
            && self
                .last_record()
                .is_some_and(|record| record.from == passed_from && record.to == passed_to)
    }

    /// Every square strictly between `from` and `to` along a straight or
    /// diagonal line is empty. Unaligned pairs have nothing between them.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        if !straight(from, to) && !diagonal(from, to) {
            return true;
        }
        let file_step = from.file_shift(to).signum();
        let rank_step = from.rank_shift(to).signum();
        let total_steps = from.file_distance(to).max(from.rank_distance(to)) as i8;
        (1..total_steps).all(|count| {
            from.offset(file_step * count, rank_step * count)
                .is_none_or(|square| self.unoccupied(square))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings(board: &mut Board) {
        board.place(Square::H1, PieceKind::King, Colour::White).unwrap();
        board.place(Square::H8, PieceKind::King, Colour::Black).unwrap();
    }

    #[test]
    fn delta_predicates() {
        assert!(straight(Square::A1, Square::A8));
        assert!(straight(Square::A1, Square::H1));
        assert!(!straight(Square::A1, Square::B2));
        assert!(!straight(Square::A1, Square::A1));

        assert!(diagonal(Square::A1, Square::H8));
        assert!(diagonal(Square::F6, Square::D8));
        assert!(!diagonal(Square::A1, Square::A1));
        assert!(!diagonal(Square::A1, Square::B3));

        assert!(adjacent(Square::E4, Square::D5));
        assert!(!adjacent(Square::E4, Square::E4));
        assert!(!adjacent(Square::E4, Square::E6));

        assert!(knight_leap(Square::B1, Square::C3));
        assert!(knight_leap(Square::B1, Square::D2));
        assert!(!knight_leap(Square::B1, Square::B3));
    }

    #[test]
    fn only_own_pieces_may_move() {
        let board = Board::new();
        assert!(board.is_legal(Square::E2, Square::E4, Colour::White));
        assert!(!board.is_legal(Square::E2, Square::E4, Colour::Black));
        assert!(!board.is_legal(Square::E4, Square::E5, Colour::White));
    }

    #[test]
    fn opening_moves() {
        let board = Board::new();
        assert!(board.is_legal(Square::B1, Square::C3, Colour::White));
        assert!(board.is_legal(Square::E2, Square::E3, Colour::White));
        assert!(board.is_legal(Square::E2, Square::E4, Colour::White));
        // Blocked sliders and the pawn wall.
        assert!(!board.is_legal(Square::A1, Square::A3, Colour::White));
        assert!(!board.is_legal(Square::D1, Square::D3, Colour::White));
        assert!(!board.is_legal(Square::E2, Square::E5, Colour::White));
        // Pawns never capture head-on, and never step diagonally into space.
        assert!(!board.is_legal(Square::E2, Square::D3, Colour::White));
    }

    #[test]
    fn pawns_cannot_double_step_twice() {
        let mut board = Board::new();
        board.make_move(Square::E2, Square::E4);
        board.make_move(Square::A7, Square::A6);
        assert!(board.is_legal(Square::E4, Square::E5, Colour::White));
        assert!(!board.is_legal(Square::E4, Square::E6, Colour::White));
    }

    #[test]
    fn victim_squares_sit_beside_the_attacker() {
        // White attacking kingside from its fifth rank.
        assert_eq!(
            en_passant_victim_square(Square::G5, Square::H6),
            Some(Square::H5),
        );
        // Black attacking from its own fifth rank, either side.
        assert_eq!(
            en_passant_victim_square(Square::C4, Square::D3),
            Some(Square::D4),
        );
        assert_eq!(
            en_passant_victim_square(Square::C4, Square::B3),
            Some(Square::B4),
        );
        // Wrong rank for either colour.
        assert_eq!(en_passant_victim_square(Square::B6, Square::A7), None);
        assert_eq!(en_passant_victim_square(Square::F6, Square::E5), None);
        // Not a single diagonal step.
        assert_eq!(en_passant_victim_square(Square::D5, Square::F7), None);
        assert_eq!(en_passant_victim_square(Square::C5, Square::C6), None);
    }

    #[test]
    fn en_passant_needs_an_immediately_preceding_double_step() {
        let mut board = Board::empty();
        kings(&mut board);
        board.place(Square::E2, PieceKind::Pawn, Colour::White).unwrap();
        board.place(Square::D4, PieceKind::Pawn, Colour::Black).unwrap();

        board.make_move(Square::E2, Square::E4);
        assert!(board.en_passant_attack(Square::D4, Square::E3));
        assert!(board.is_legal(Square::D4, Square::E3, Colour::Black));

        // An intervening move spends the opportunity.
        let mut stale = Board::empty();
        kings(&mut stale);
        stale.place(Square::E2, PieceKind::Pawn, Colour::White).unwrap();
        stale.place(Square::D4, PieceKind::Pawn, Colour::Black).unwrap();
        stale.place(Square::A2, PieceKind::Pawn, Colour::White).unwrap();
        stale.make_move(Square::E2, Square::E4);
        stale.make_move(Square::H8, Square::G8);
        stale.make_move(Square::A2, Square::A3);
        assert!(!stale.en_passant_attack(Square::D4, Square::E3));
        assert!(!stale.is_legal(Square::D4, Square::E3, Colour::Black));
    }

    #[test]
    fn en_passant_requires_a_pawn_defender() {
        let mut board = Board::empty();
        kings(&mut board);
        board.place(Square::E2, PieceKind::Rook, Colour::White).unwrap();
        board.place(Square::D4, PieceKind::Pawn, Colour::Black).unwrap();
        board.make_move(Square::E2, Square::E4);
        assert!(!board.en_passant_attack(Square::D4, Square::E3));
    }

    #[test]
    fn moves_that_expose_the_king_are_illegal() {
        let mut board = Board::empty();
        board.place(Square::E1, PieceKind::King, Colour::White).unwrap();
        board.place(Square::E2, PieceKind::Rook, Colour::White).unwrap();
        board.place(Square::E8, PieceKind::Rook, Colour::Black).unwrap();
        board.place(Square::A8, PieceKind::King, Colour::Black).unwrap();

        // The rook is pinned: it may slide along the file but never off it.
        assert!(board.is_legal(Square::E2, Square::E5, Colour::White));
        assert!(!board.is_legal(Square::E2, Square::D2, Colour::White));
        assert!(!board.is_legal(Square::E2, Square::B2, Colour::White));
        // The pin binds the rook, not the king, which may step aside.
        assert!(board.is_legal(Square::E1, Square::D1, Colour::White));
    }

    #[test]
    fn reachability_and_conceivability_agree() {
        // Every square the generator reaches must satisfy the judge's
        // delta predicates, and vice versa, across an uneven midgame
        // position.
        let mut board = Board::empty();
        kings(&mut board);
        board.place(Square::D4, PieceKind::Queen, Colour::White).unwrap();
        board.place(Square::D6, PieceKind::Pawn, Colour::White).unwrap();
        board.place(Square::F6, PieceKind::Knight, Colour::Black).unwrap();
        board.place(Square::B2, PieceKind::Bishop, Colour::Black).unwrap();
        board.place(Square::E2, PieceKind::Pawn, Colour::White).unwrap();

        for from in Square::all() {
            if board.unoccupied(from) {
                continue;
            }
            let reachable = board.reachable_squares(from);
            for to in Square::all() {
                if to == from {
                    continue;
                }
                assert_eq!(
                    reachable.contains(&to),
                    board.conceivable_move(from, to),
                    "{from}->{to} disagreement",
                );
            }
        }
    }
}
