//! Game status derivation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Color;
use super::Board;

/// Outcome of a position, derived on demand rather than stored.
///
/// Draws are reported when queried, not declared automatically: the engine
/// keeps accepting legal moves from a fifty-move or insufficient-material
/// position unless the caller checks first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Checkmate { winner } => write!(f, "{winner} won by checkmate"),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::FiftyMoveRule => write!(f, "draw by fifty rule"),
            GameStatus::InsufficientMaterial => write!(f, "draw by insufficient pieces"),
        }
    }
}

impl Board {
    /// Derive the game status for the side to move.
    ///
    /// Having no legal moves takes precedence over the clock and material
    /// draws, so a checkmate on the fiftieth quiet move reports as mate.
    pub fn status(&mut self) -> GameStatus {
        if self.generate_moves().is_empty() {
            return if self.is_in_check() {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.halfmove_clock >= 50 {
            return GameStatus::FiftyMoveRule;
        }
        if self.has_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::Playing
    }

    /// Whether any terminal condition holds.
    pub fn is_game_over(&mut self) -> bool {
        self.status() != GameStatus::Playing
    }
}
