use super::super::attacks::{pop_lsb, KNIGHT_ATTACKS};
use super::super::types::{Move, Piece, Square};
use super::super::Board;

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let mut targets = KNIGHT_ATTACKS[from.as_index()];
        while targets != 0 {
            let to = Square::from_index(pop_lsb(&mut targets));
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                _ => moves.push(Move::new(Piece::Knight, from, to)),
            }
        }
    }
}
