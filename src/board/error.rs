//! Error types for board operations.

use std::fmt;

use super::status::GameStatus;
use super::types::{Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly 6 space-separated fields
    FieldCount { found: usize },
    /// Piece placement does not have exactly 8 ranks
    RankCount { found: usize },
    /// Invalid character in the piece placement field
    InvalidPiece { char: char },
    /// Two consecutive run-length digits in a rank
    ConsecutiveDigits { rank: usize },
    /// A rank's pieces and empty runs do not sum to exactly 8 files
    BadRankWidth { rank: usize, width: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field is not '-' or a combination of K, Q, k, q
    InvalidCastling { found: String },
    /// En passant field is not '-' or a square between ranks 3 and 6
    InvalidEnPassant { found: String },
    /// A move counter field is not an unsigned number
    InvalidCounter { found: String },
    /// The placement is missing a king of this color
    MissingKing { color: Color },
    /// The placement has more than one king of this color
    DuplicateKing { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::FieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::RankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::ConsecutiveDigits { rank } => {
                write!(f, "Consecutive run-length digits in FEN rank {rank}")
            }
            FenError::BadRankWidth { rank, width } => {
                write!(f, "FEN rank {rank} covers {width} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::MissingKing { color } => {
                write!(f, "FEN placement has no {color} king")
            }
            FenError::DuplicateKing { color } => {
                write!(f, "FEN placement has more than one {color} king")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for rejected move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// No currently legal move matches the requested from/to/promotion
    NoMatchingMove {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
    /// The game has already ended
    GameOver { status: GameStatus },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveError::NoMatchingMove {
                from,
                to,
                promotion,
            } => {
                write!(f, "No legal move from {from} to {to}")?;
                if let Some(promo) = promotion {
                    write!(f, " promoting to {}", promo.to_char())?;
                }
                Ok(())
            }
            MoveError::GameOver { status } => {
                write!(f, "Game is already over: {status}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
