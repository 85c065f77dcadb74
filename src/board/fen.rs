use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::status::GameStatus;
use super::types::{Color, Move, Piece, Square};
use super::{
    Board, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required and validated; the placement must hold
    /// exactly one king per color.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount { found: parts.len() });
        }

        let mut board = Board::empty();
        let mut kings = [0u32; 2];

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            let mut last_was_digit = false;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    if last_was_digit {
                        return Err(FenError::ConsecutiveDigits { rank });
                    }
                    last_was_digit = true;
                    file += run as usize;
                } else {
                    last_was_digit = false;
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank,
                            width: file + 1,
                        });
                    }
                    if piece == Piece::King {
                        kings[color.index()] += 1;
                        if kings[color.index()] > 1 {
                            return Err(FenError::DuplicateKing { color });
                        }
                    }
                    board.set_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth { rank, width: file });
            }
        }
        for color in [Color::White, Color::Black] {
            if kings[color.index()] == 0 {
                return Err(FenError::MissingKing { color });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => board.castling_rights |= CASTLE_WHITE_K,
                    'Q' => board.castling_rights |= CASTLE_WHITE_Q,
                    'k' => board.castling_rights |= CASTLE_BLACK_K,
                    'q' => board.castling_rights |= CASTLE_BLACK_Q,
                    _ => {
                        return Err(FenError::InvalidCastling {
                            found: parts[2].to_string(),
                        })
                    }
                }
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            match Square::from_notation(parts[3]) {
                Some(sq) if (2..=5).contains(&sq.rank()) => Some(sq),
                _ => {
                    return Err(FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })
                }
            }
        };

        board.halfmove_clock = parse_counter(parts[4])?;
        board.fullmove_number = parse_counter(parts[5])?;

        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace the live position with one parsed from FEN, discarding the
    /// undo history. The board is untouched when parsing fails.
    pub fn load(&mut self, fen: &str) -> Result<(), FenError> {
        let board = Board::try_from_fen(fen)?;
        log::debug!("loaded position {fen}");
        *self = board;
        Ok(())
    }

    /// The current position in FEN notation.
    #[must_use]
    pub fn fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        if self.castling_rights & CASTLE_WHITE_K != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WHITE_Q != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BLACK_K != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BLACK_Q != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve a from/to/promotion request against the current legal move
    /// list and apply the unique match.
    ///
    /// Fails with [`MoveError::GameOver`] once the game has ended and with
    /// [`MoveError::NoMatchingMove`] when no legal move fits the request.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        let status = self.status();
        if status != GameStatus::Playing {
            return Err(MoveError::GameOver { status });
        }
        let m = self.find_legal(from, to, promotion)?;
        self.make_move(&m);
        Ok(m)
    }

    /// Parse a move in long algebraic notation (e.g. "e2e4", "e7e8q") and
    /// resolve it against the current legal move list, without applying it.
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveError> {
        let (from, to, promotion) = parse_coords(uci)?;
        self.find_legal(from, to, promotion)
    }

    /// Parse a move in long algebraic notation and make it on the board.
    ///
    /// # Example
    /// ```
    /// use shoalfish::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveError> {
        let (from, to, promotion) = parse_coords(uci)?;
        self.try_move(from, to, promotion)
    }

    fn find_legal(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        self.generate_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
            .ok_or(MoveError::NoMatchingMove {
                from,
                to,
                promotion,
            })
    }
}

fn parse_coords(uci: &str) -> Result<(Square, Square, Option<Piece>), MoveError> {
    let chars: Vec<char> = uci.chars().collect();
    if chars.len() < 4 || chars.len() > 5 {
        return Err(MoveError::InvalidLength { len: chars.len() });
    }
    let invalid_square = || MoveError::InvalidSquare {
        notation: uci.to_string(),
    };
    let from = Square::from_notation(&chars[0..2].iter().collect::<String>())
        .ok_or_else(invalid_square)?;
    let to = Square::from_notation(&chars[2..4].iter().collect::<String>())
        .ok_or_else(invalid_square)?;
    let promotion = match chars.get(4).copied() {
        Some(c) => {
            let piece = Piece::from_char(c).ok_or(MoveError::InvalidPromotion { char: c })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveError::InvalidPromotion { char: c });
            }
            Some(piece)
        }
        None => None,
    };
    Ok((from, to, promotion))
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FenError::InvalidCounter {
            found: field.to_string(),
        });
    }
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
