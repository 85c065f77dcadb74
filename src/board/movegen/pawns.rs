use super::super::types::{Move, Piece, Square};
use super::super::{Board, PROMOTION_PIECES};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let r = from.rank() as isize;
        let f = from.file() as isize;

        let forward_r = r + dir;
        if !(0..8).contains(&forward_r) {
            return;
        }
        let forward = Square(forward_r as usize, from.file());

        if self.is_empty(forward) {
            if forward.rank() == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promoting(Piece::Pawn, from, forward, promo));
                }
            } else {
                moves.push(Move::new(Piece::Pawn, from, forward));
                // Double step only from the home rank, through two empty squares.
                if from.rank() == color.pawn_start_rank() {
                    let double = Square((r + 2 * dir) as usize, from.file());
                    if self.is_empty(double) {
                        moves.push(Move::new(Piece::Pawn, from, double));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let capture_f = f + df;
            if !(0..8).contains(&capture_f) {
                continue;
            }
            let target = Square(forward_r as usize, capture_f as usize);
            let takes_enemy = matches!(self.piece_at(target), Some((c, _)) if c != color);
            let takes_en_passant = self.en_passant_target == Some(target);
            if !takes_enemy && !takes_en_passant {
                continue;
            }
            if target.rank() == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promoting(Piece::Pawn, from, target, promo));
                }
            } else {
                moves.push(Move::new(Piece::Pawn, from, target));
            }
        }
    }
}
