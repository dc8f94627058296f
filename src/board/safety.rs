//! The king-safety probes: simulate a candidate move on a disposable clone,
//! then inspect the resulting position.

use super::Board;
use crate::colour::Colour;
use crate::piece::PieceKind;
use crate::square::Square;

/// (from, to) pairs, as produced by move enumeration.
pub type MoveList = Vec<(Square, Square)>;

impl Board {
    /// A disposable clone for probing the consequence of a candidate move.
    ///
    /// Hypothetical boards trust their caller: they skip legality
    /// enforcement, record nothing and never rotate turns. All pieces are
    /// deep-copied, so nothing a probe does can touch the real board.
    pub(crate) fn hypothetical(&self) -> Board {
        let mut probe = self.clone();
        probe.real = false;
        probe
    }

    /// Whether playing `from`→`to` would leave the mover's own king
    /// attacked.
    pub(crate) fn endangers_own_king(&self, from: Square, to: Square) -> bool {
        if self.kind_on(to) == Some(PieceKind::King) {
            // Trapped-king probes enumerate conceivable moves, which can
            // include a king capture on a hypothetical board. Two kings are
            // never mutually adjacent in a legal game, so short-circuit
            // instead of simulating the impossible position.
            return false;
        }
        let mover = self.colour_on(from).expect("no piece on origin square");
        let mut probe = self.hypothetical();
        probe.make_move(from, to);
        probe.king_threatened(mover)
    }

    /// Whether playing `from`→`to` would leave the opponent's king
    /// attacked. Only meaningful on a real board.
    pub(crate) fn threatens_opposing_king(&self, from: Square, to: Square) -> bool {
        if !self.real {
            return false;
        }
        let mover = self.colour_on(from).expect("no piece on origin square");
        let mut probe = self.hypothetical();
        probe.make_move(from, to);
        probe.king_threatened(mover.inverse())
    }

    /// Whether playing `from`→`to` would leave the opponent's king with no
    /// safe reply. Only meaningful on a real board.
    pub(crate) fn traps_opposing_king(&self, from: Square, to: Square) -> bool {
        if !self.real {
            return false;
        }
        let mover = self.colour_on(from).expect("no piece on origin square");
        let mut probe = self.hypothetical();
        probe.make_move(from, to);
        probe.king_trapped(mover.inverse())
    }

    /// Is `colour`'s king currently attacked?
    ///
    /// True if any opposing piece has a conceivable move onto the king's
    /// square; king safety of the attacker is irrelevant here.
    pub fn king_threatened(&self, colour: Colour) -> bool {
        let kings_square = self.kings_square(colour);
        self.squares_of(colour.inverse(), None)
            .into_iter()
            .any(|opponents_square| self.conceivable_move(opponents_square, kings_square))
    }

    /// Does every conceivable move available to `colour` endanger its own
    /// king? Vacuously true when no conceivable move exists at all.
    ///
    /// Together with [`Board::king_threatened`] this classifies terminal
    /// positions: trapped and threatened is checkmate, trapped alone is
    /// stalemate. Each candidate move costs a board clone and a full
    /// re-inspection, which is fine for interactive play and unfit for
    /// deep search.
    pub fn king_trapped(&self, colour: Colour) -> bool {
        self.conceivable_moves(colour)
            .into_iter()
            .all(|(from, to)| self.endangers_own_king(from, to))
    }

    /// Every conceivable (from, to) pair for `colour`, king safety ignored.
    pub fn conceivable_moves(&self, colour: Colour) -> MoveList {
        self.squares_of(colour, None)
            .into_iter()
            .flat_map(|from| {
                self.reachable_squares(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Every legal (from, to) pair for `colour`.
    pub fn legal_moves(&self, colour: Colour) -> MoveList {
        self.conceivable_moves(colour)
            .into_iter()
            .filter(|&(from, to)| !self.endangers_own_king(from, to))
            .collect()
    }
}
