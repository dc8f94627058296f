//! Move execution and recording.

use super::legality::en_passant_victim_square;
use super::Board;
use crate::record::MoveRecord;
use crate::square::Square;

/// Record data gathered before the move mutates anything: capture
/// bookkeeping reads pre-move piece identities, and the check/checkmate/
/// draw flags come from probing clones of the pre-move position.
struct Classification {
    capture: bool,
    captured: Option<crate::piece::Piece>,
    en_passant: bool,
    check: bool,
    checkmate: bool,
    draw: bool,
}

impl Board {
    /// Performs `from`→`to`: removes any captured piece to the capture log,
    /// relocates the mover, and on a real board records the move, its
    /// check/checkmate/draw classification, and passes the turn.
    ///
    /// This is the engine's only mutating entry point.
    /// # Panics
    /// On a real board, if the move is not legal for the side to move.
    /// Callers validate with [`Board::is_legal`] first; reaching this panic
    /// is a broken contract, not bad user input. Hypothetical boards trust
    /// their caller and skip the check.
    pub fn make_move(&mut self, from: Square, to: Square) {
        if self.real {
            let mover = self.side_to_move();
            if !self.is_legal(from, to, mover) {
                panic!("illegal move attempted ({from} to {to}) for {mover}");
            }
        }

        let en_passant = self.en_passant_attack(from, to);
        let capture_square = if self.occupied(to) {
            Some(to)
        } else if en_passant {
            en_passant_victim_square(from, to)
        } else {
            None
        };

        let classification = self
            .real
            .then(|| self.classify(from, to, capture_square, en_passant));

        if let Some(square) = capture_square {
            self.capture_on(square);
        }
        self.relocate(from, to);

        if let Some(classification) = classification {
            self.finish_record(from, to, classification);
            self.rotate_players();
        }
    }

    fn classify(
        &self,
        from: Square,
        to: Square,
        capture_square: Option<Square>,
        en_passant: bool,
    ) -> Classification {
        let captured = capture_square.and_then(|square| self.piece_on(square).cloned());
        let threatens = self.threatens_opposing_king(from, to);
        let traps = self.traps_opposing_king(from, to);
        Classification {
            capture: captured.is_some(),
            captured,
            en_passant,
            check: threatens && !traps,
            checkmate: threatens && traps,
            draw: traps && !threatens,
        }
    }

    fn capture_on(&mut self, square: Square) {
        let piece = self
            .take_piece(square)
            .unwrap_or_else(|| panic!("no piece on {square} to capture"));
        if self.is_real() {
            self.record_capture(piece);
        }
    }

    fn relocate(&mut self, from: Square, to: Square) {
        let mut piece = self
            .take_piece(from)
            .unwrap_or_else(|| panic!("no piece on {from} to relocate"));
        piece.relocate(to);
        self.put_piece(to, piece);
    }

    fn finish_record(&mut self, from: Square, to: Square, classification: Classification) {
        let piece = self
            .piece_on(to)
            .cloned()
            .unwrap_or_else(|| panic!("no piece on {to} after relocation"));
        let Classification {
            capture,
            captured,
            en_passant,
            check,
            checkmate,
            draw,
        } = classification;

        log::debug!(
            "{} plays {}{from}{}{to}{}{}",
            piece.colour(),
            piece.kind().key(),
            if capture { "x" } else { "-" },
            if en_passant { " e.p." } else { "" },
            if checkmate {
                "#"
            } else if check {
                "+"
            } else {
                ""
            },
        );

        self.record_move(MoveRecord {
            from,
            to,
            piece,
            capture,
            captured,
            en_passant,
            check,
            checkmate,
            draw,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::piece::PieceKind;

    #[test]
    fn a_quiet_move_relocates_and_rotates() {
        let mut board = Board::new();
        board.make_move(Square::G1, Square::F3);

        assert!(board.unoccupied(Square::G1));
        let knight = board.piece_on(Square::F3).unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.visited(), [Square::G1, Square::F3]);
        assert_eq!(board.side_to_move(), Colour::Black);

        let record = board.moves().last().unwrap();
        assert_eq!((record.from, record.to), (Square::G1, Square::F3));
        assert_eq!(record.piece.kind(), PieceKind::Knight);
        assert!(!record.capture);
        assert_eq!(record.captured, None);
        assert!(!record.en_passant && !record.check && !record.checkmate && !record.draw);
    }

    #[test]
    fn captures_land_in_the_capture_log() {
        let mut board = Board::new();
        board.make_move(Square::E2, Square::E4);
        board.make_move(Square::D7, Square::D5);
        board.make_move(Square::E4, Square::D5);

        assert!(board.unoccupied(Square::E4));
        assert_eq!(board.kind_on(Square::D5), Some(PieceKind::Pawn));
        assert_eq!(board.colour_on(Square::D5), Some(Colour::White));

        let captured = board.captures().last().unwrap();
        assert_eq!(captured.kind(), PieceKind::Pawn);
        assert_eq!(captured.colour(), Colour::Black);
        // The victim's history is frozen at its final square.
        assert_eq!(captured.visited(), [Square::D7, Square::D5]);

        let record = board.moves().last().unwrap();
        assert!(record.capture);
        assert!(!record.en_passant);
        assert_eq!(record.captured.as_ref(), Some(captured));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        board.place(Square::H1, PieceKind::King, Colour::White).unwrap();
        board.place(Square::H8, PieceKind::King, Colour::Black).unwrap();
        board.place(Square::E2, PieceKind::Pawn, Colour::White).unwrap();
        board.place(Square::D4, PieceKind::Pawn, Colour::Black).unwrap();

        board.make_move(Square::E2, Square::E4);
        board.make_move(Square::D4, Square::E3);

        // The victim leaves the square it stood on, not the move's target.
        assert!(board.unoccupied(Square::E4));
        assert!(board.unoccupied(Square::D4));
        assert_eq!(board.colour_on(Square::E3), Some(Colour::Black));

        let captured = board.captures().last().unwrap();
        assert_eq!(captured.colour(), Colour::White);
        assert_eq!(captured.kind(), PieceKind::Pawn);
        assert_eq!(captured.square(), Square::E4);

        let record = board.moves().last().unwrap();
        assert!(record.capture);
        assert!(record.en_passant);
        assert_eq!(record.captured.as_ref(), Some(captured));
    }

    #[test]
    #[should_panic(expected = "illegal move attempted")]
    fn illegal_moves_fail_loudly() {
        let mut board = Board::new();
        board.make_move(Square::E2, Square::E5);
    }

    #[test]
    #[should_panic(expected = "illegal move attempted")]
    fn moving_out_of_turn_fails_loudly() {
        let mut board = Board::new();
        board.make_move(Square::E7, Square::E5);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut board = Board::new();
        board.make_move(Square::F2, Square::F3);
        board.make_move(Square::E7, Square::E5);
        board.make_move(Square::G2, Square::G4);
        board.make_move(Square::D8, Square::H4);

        let record = board.moves().last().unwrap();
        assert!(record.checkmate);
        assert!(!record.check && !record.draw);
        assert!(board.is_checkmate());
        assert!(!board.is_check() && !board.is_draw());
        assert!(board.king_threatened(Colour::White));
        assert!(board.king_trapped(Colour::White));
    }

    #[test]
    fn a_blockable_check_is_not_mate() {
        let mut board = Board::new();
        board.make_move(Square::E2, Square::E4);
        board.make_move(Square::F7, Square::F5);
        board.make_move(Square::D1, Square::H5);

        let record = board.moves().last().unwrap();
        assert!(record.check);
        assert!(!record.checkmate && !record.draw);
        assert!(board.is_check());
        assert!(board.king_threatened(Colour::Black));
        assert!(!board.king_trapped(Colour::Black));

        // Interposing the g-pawn answers the check.
        board.make_move(Square::G7, Square::G6);
        let record = board.moves().last().unwrap();
        assert!(!record.check && !record.checkmate && !record.draw);
        assert!(!board.king_threatened(Colour::Black));
    }

    #[test]
    fn stalemate_is_recorded_as_a_draw() {
        let mut board = Board::empty();
        board.place(Square::A8, PieceKind::King, Colour::Black).unwrap();
        board.place(Square::C2, PieceKind::Queen, Colour::White).unwrap();
        board.place(Square::H1, PieceKind::King, Colour::White).unwrap();

        board.make_move(Square::C2, Square::C7);

        let record = board.moves().last().unwrap();
        assert!(record.draw);
        assert!(!record.check && !record.checkmate);
        assert!(board.is_draw());
        assert!(!board.is_checkmate());
    }

    #[test]
    fn read_queries_do_not_mutate() {
        let mut board = Board::new();
        board.make_move(Square::E2, Square::E4);
        let snapshot = board.clone();

        board.reachable_squares(Square::D7);
        board.is_legal(Square::D7, Square::D5, Colour::Black);
        board.legal_moves(Colour::Black);
        board.king_threatened(Colour::Black);
        board.squares_of(Colour::White, None);
        assert_eq!(board, snapshot);
    }
}
