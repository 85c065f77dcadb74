use super::super::attacks::{pop_lsb, KING_ATTACKS};
use super::super::types::{CastleSide, Move, Piece, Square};
use super::super::Board;

impl Board {
    pub(crate) fn king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let mut targets = KING_ATTACKS[from.as_index()];
        while targets != 0 {
            let to = Square::from_index(pop_lsb(&mut targets));
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                _ => moves.push(Move::new(Piece::King, from, to)),
            }
        }

        let back = color.back_rank();
        if from == Square(back, 4) {
            if self.can_castle(CastleSide::Kingside) {
                moves.push(Move::castle(from, Square(back, 6), CastleSide::Kingside));
            }
            if self.can_castle(CastleSide::Queenside) {
                moves.push(Move::castle(from, Square(back, 2), CastleSide::Queenside));
            }
        }
    }

    /// Castling requires the right to still be held, the squares strictly
    /// between king and rook to be empty, and the king's start, transit and
    /// destination squares to be safe from the opponent.
    fn can_castle(&self, side: CastleSide) -> bool {
        let color = self.side_to_move;
        if !self.has_castling_right(color, side) {
            return false;
        }
        let back = color.back_rank();
        let (rook_file, between, king_path): (usize, &[usize], [usize; 3]) = match side {
            CastleSide::Kingside => (7, &[5, 6], [4, 5, 6]),
            CastleSide::Queenside => (0, &[1, 2, 3], [2, 3, 4]),
        };
        if self.piece_at(Square(back, rook_file)) != Some((color, Piece::Rook)) {
            return false;
        }
        if between.iter().any(|&f| !self.is_empty(Square(back, f))) {
            return false;
        }
        let opponent = color.opponent();
        !king_path
            .iter()
            .any(|&f| self.is_square_attacked_by(opponent, Square(back, f)))
    }
}
