//! Pseudo-legal move generation per piece type, plus the legality filter
//! that turns pseudo-legal moves into legal ones by probing each candidate
//! against the live position.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONALS, ORTHOGONALS};
use super::types::{Move, MoveRecord, Piece, Square};
use super::{Board, MoveGuard};

impl Board {
    /// All legal moves for the side to move, as text-notation records.
    pub fn legal_moves(&mut self) -> Vec<MoveRecord> {
        let mover = self.side_to_move;
        self.generate_moves()
            .iter()
            .map(|m| MoveRecord::from_move(m, mover))
            .collect()
    }

    /// Legal moves whose origin is `from`, as text-notation records.
    ///
    /// Empty when the square is empty or holds an opponent piece.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<MoveRecord> {
        let mover = self.side_to_move;
        let piece = match self.piece_at(from) {
            Some((color, piece)) if color == mover => piece,
            _ => return Vec::new(),
        };
        let mut pseudo = Vec::new();
        self.piece_pseudo_moves(from, piece, &mut pseudo);
        self.filter_legal(pseudo)
            .iter()
            .map(|m| MoveRecord::from_move(m, mover))
            .collect()
    }

    /// All legal moves for the side to move, in the internal representation.
    pub(crate) fn generate_moves(&mut self) -> Vec<Move> {
        let pseudo = self.generate_pseudo_moves();
        self.filter_legal(pseudo)
    }

    fn generate_pseudo_moves(&self) -> Vec<Move> {
        let mover = self.side_to_move;
        let mut moves = Vec::new();
        for idx in 0..64 {
            if let Some(piece) = self.by_color[mover.index()][idx] {
                self.piece_pseudo_moves(Square::from_index(idx), piece, &mut moves);
            }
        }
        moves
    }

    fn piece_pseudo_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, moves),
            Piece::Knight => self.knight_moves(from, moves),
            Piece::Bishop => self.sliding_moves(from, Piece::Bishop, &DIAGONALS, moves),
            Piece::Rook => self.sliding_moves(from, Piece::Rook, &ORTHOGONALS, moves),
            Piece::Queen => {
                self.sliding_moves(from, Piece::Queen, &ORTHOGONALS, moves);
                self.sliding_moves(from, Piece::Queen, &DIAGONALS, moves);
            }
            Piece::King => self.king_moves(from, moves),
        }
    }

    /// A pseudo-legal move is legal iff applying it does not leave the
    /// mover's own king attacked. Each candidate is probed through the
    /// production make/undo path; the guard unwinds the probe on every
    /// exit.
    fn filter_legal(&mut self, pseudo: Vec<Move>) -> Vec<Move> {
        let mover = self.side_to_move;
        let mut legal = Vec::with_capacity(pseudo.len());
        for m in pseudo {
            let keeps_king_safe = {
                let mut probe = MoveGuard::apply(self, &m);
                !probe.board().king_attacked(mover)
            };
            if keeps_king_safe {
                legal.push(m);
            }
        }
        legal
    }

    /// Count leaf nodes of the legal move tree to `depth`. Used as a
    /// regression oracle for the generator.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for m in moves {
            let mut probe = MoveGuard::apply(self, &m);
            nodes += probe.board().perft(depth - 1);
        }
        nodes
    }
}
