use super::types::{Color, Piece, Square};
use super::Board;

/// Full copy of the mutable position state, pushed before every applied
/// move. Undo restores a snapshot wholesale rather than replaying inverse
/// deltas.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) by_color: [[Option<Piece>; 64]; 2],
    pub(crate) king_square: [Square; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: u8,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            squares: self.squares,
            by_color: self.by_color,
            king_square: self.king_square,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.squares = snapshot.squares;
        self.by_color = snapshot.by_color;
        self.king_square = snapshot.king_square;
        self.side_to_move = snapshot.side_to_move;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant_target = snapshot.en_passant_target;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
    }
}
