use super::types::{CastleSide, Color, Move, Piece, Square};
use super::{castle_bit, Board};

impl Board {
    /// Apply a move to the live position.
    ///
    /// The caller is responsible for the move being legal here; this is the
    /// fast path used by the legality filter and the search. External
    /// callers go through [`Board::try_move`] or [`Board::make_move_uci`],
    /// which resolve against the legal move list first.
    ///
    /// A full snapshot is pushed before any mutation, so [`Board::undo_move`]
    /// restores the previous state exactly.
    pub fn make_move(&mut self, m: &Move) {
        self.history.push(self.snapshot());

        let color = self.side_to_move;
        let is_ep_capture =
            m.piece == Piece::Pawn && self.en_passant_target == Some(m.to);

        // Halfmove clock first: it needs the destination square and the
        // en passant target as they were before the move.
        if self.squares[m.to.as_index()].is_some() || is_ep_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.update_castling_rights(m, color);

        self.remove_piece(m.from);
        if is_ep_capture {
            let victim_rank = match color {
                Color::White => m.to.rank() - 1,
                Color::Black => m.to.rank() + 1,
            };
            self.remove_piece(Square(victim_rank, m.to.file()));
        }
        if let Some(side) = m.castling {
            let back = color.back_rank();
            let (rook_from, rook_to) = match side {
                CastleSide::Kingside => (Square(back, 7), Square(back, 5)),
                CastleSide::Queenside => (Square(back, 0), Square(back, 3)),
            };
            self.remove_piece(rook_from);
            self.set_piece(rook_to, color, Piece::Rook);
        }
        self.set_piece(m.to, color, m.promotion.unwrap_or(m.piece));

        // A pawn double step opens an en passant window for one move.
        self.en_passant_target = if m.piece == Piece::Pawn
            && m.from.rank().abs_diff(m.to.rank()) == 2
        {
            Some(Square((m.from.rank() + m.to.rank()) / 2, m.from.file()))
        } else {
            None
        };

        self.side_to_move = color.opponent();
    }

    /// Undo the most recently applied move by restoring its snapshot.
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn update_castling_rights(&mut self, m: &Move, color: Color) {
        if m.piece == Piece::King {
            self.castling_rights &= !castle_bit(color, CastleSide::Kingside);
            self.castling_rights &= !castle_bit(color, CastleSide::Queenside);
        } else if m.piece == Piece::Rook {
            let back = color.back_rank();
            if m.from == Square(back, 0) {
                self.castling_rights &= !castle_bit(color, CastleSide::Queenside);
            } else if m.from == Square(back, 7) {
                self.castling_rights &= !castle_bit(color, CastleSide::Kingside);
            }
        }

        // A rook captured on its original square loses its owner that right.
        let opponent = color.opponent();
        if self.piece_at(m.to) == Some((opponent, Piece::Rook)) {
            let back = opponent.back_rank();
            if m.to == Square(back, 0) {
                self.castling_rights &= !castle_bit(opponent, CastleSide::Queenside);
            } else if m.to == Square(back, 7) {
                self.castling_rights &= !castle_bit(opponent, CastleSide::Kingside);
            }
        }
    }
}

/// Applies a move on construction and undoes it when dropped.
///
/// The legality filter and the search probe positions by mutating the one
/// live board; this guard guarantees the paired undo runs on every exit
/// path, including early returns, pruning cutoffs and unwinding panics, so
/// a probe can never leave the caller's state mutated.
pub(crate) struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl<'a> MoveGuard<'a> {
    pub(crate) fn apply(board: &'a mut Board, m: &Move) -> Self {
        board.make_move(m);
        MoveGuard { board }
    }

    pub(crate) fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
