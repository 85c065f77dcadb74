pub mod board;

pub use board::search::find_best_move;
pub use board::{
    Board, CastleSide, Color, FenError, GameStatus, Move, MoveError, MoveRecord, Piece, Square,
};
