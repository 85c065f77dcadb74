//! Castling rights bitmask.

use super::moves::CastleSide;
use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Get the bit for a specific castling right
#[inline]
pub(crate) const fn castle_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
    }
}
