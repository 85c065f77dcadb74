//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Which side of the board a castling move targets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Internal move representation.
///
/// A move is a plain value, not a reference into the board. The mover's
/// color is implied by the side to move of the position it was generated
/// from. Castling is a single king move carrying its side flag; the rook
/// relocation happens when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub castling: Option<CastleSide>,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn new(piece: Piece, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            promotion: None,
            castling: None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn promoting(piece: Piece, from: Square, to: Square, promo: Piece) -> Self {
        Move {
            piece,
            from,
            to,
            promotion: Some(promo),
            castling: None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            piece: Piece::King,
            from,
            to,
            promotion: None,
            castling: Some(side),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// A move in text square notation, as handed to external collaborators
/// (board widgets, hosting applications).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    /// Origin square, e.g. "e2"
    pub from: String,
    /// Destination square, e.g. "e4"
    pub to: String,
    /// Moving piece letter, uppercase for white
    pub piece: char,
    /// Promotion piece letter, if any
    pub promotion: Option<char>,
    /// Set when the move is a castle
    pub castling: Option<CastleSide>,
}

impl MoveRecord {
    pub(crate) fn from_move(m: &Move, mover: Color) -> Self {
        MoveRecord {
            from: m.from.to_string(),
            to: m.to.to_string(),
            piece: m.piece.to_fen_char(mover),
            promotion: m.promotion.map(|p| p.to_fen_char(mover)),
            castling: m.castling,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_ascii_lowercase())?;
        }
        Ok(())
    }
}
