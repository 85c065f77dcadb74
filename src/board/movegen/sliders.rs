use super::super::types::{Move, Piece, Square};
use super::super::Board;

impl Board {
    /// Walk each (rank, file) direction outward until the board edge or the
    /// first occupied square; that square is a destination only when it
    /// holds an enemy piece.
    pub(crate) fn sliding_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        for &(dr, df) in directions {
            let mut r = from.rank() as isize + dr;
            let mut f = from.file() as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let to = Square(r as usize, f as usize);
                match self.piece_at(to) {
                    Some((c, _)) if c == color => break,
                    Some(_) => {
                        moves.push(Move::new(piece, from, to));
                        break;
                    }
                    None => moves.push(Move::new(piece, from, to)),
                }
                r += dr;
                f += df;
            }
        }
    }
}
