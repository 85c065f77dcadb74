//! Attack detection.
//!
//! `is_square_attacked_by` is the primitive the legality filter and the
//! castling path checks are built on. It uses attack-only movement rules
//! and reads the position without mutating it, so probing for attacks can
//! never recurse back into move legality.

use once_cell::sync::Lazy;

use super::types::{Color, Piece, Square};
use super::Board;

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) fn pop_lsb(bb: &mut u64) -> usize {
    let idx = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    idx
}

fn leaper_mask(sq: usize, deltas: &[(isize, isize)]) -> u64 {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut mask = 0u64;
    for &(dr, df) in deltas {
        let nr = r + dr;
        let nf = f + df;
        if (0..8).contains(&nr) && (0..8).contains(&nf) {
            mask |= 1u64 << ((nr as usize) * 8 + nf as usize);
        }
    }
    mask
}

/// Knight target squares per origin. Built from (rank, file) deltas, so an
/// offset can never wrap from one board edge to the other.
pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    let mut attacks = [0u64; 64];
    for (sq, mask) in attacks.iter_mut().enumerate() {
        *mask = leaper_mask(sq, &deltas);
    }
    attacks
});

/// King target squares per origin.
pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    let mut attacks = [0u64; 64];
    for (sq, mask) in attacks.iter_mut().enumerate() {
        *mask = leaper_mask(sq, &deltas);
    }
    attacks
});

/// Squares a pawn of the indexed color attacks from each origin. Pawn
/// forward pushes are not attacks.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        attacks[Color::White.index()][sq] = leaper_mask(sq, &[(1, -1), (1, 1)]);
        attacks[Color::Black.index()][sq] = leaper_mask(sq, &[(-1, -1), (-1, 1)]);
    }
    attacks
});

impl Board {
    /// True iff any piece of `attacker` pseudo-legally attacks `target`.
    pub(crate) fn is_square_attacked_by(&self, attacker: Color, target: Square) -> bool {
        let t_idx = target.as_index();
        let pieces = &self.by_color[attacker.index()];

        // A pawn of `attacker` attacks `target` exactly from the squares an
        // opposite-color pawn standing on `target` would attack.
        let mut sources = PAWN_ATTACKS[attacker.opponent().index()][t_idx];
        while sources != 0 {
            if pieces[pop_lsb(&mut sources)] == Some(Piece::Pawn) {
                return true;
            }
        }

        let mut sources = KNIGHT_ATTACKS[t_idx];
        while sources != 0 {
            if pieces[pop_lsb(&mut sources)] == Some(Piece::Knight) {
                return true;
            }
        }

        let mut sources = KING_ATTACKS[t_idx];
        while sources != 0 {
            if pieces[pop_lsb(&mut sources)] == Some(Piece::King) {
                return true;
            }
        }

        for (dr, df) in ORTHOGONALS {
            if self.slider_on_ray(target, dr, df, attacker, true) {
                return true;
            }
        }
        for (dr, df) in DIAGONALS {
            if self.slider_on_ray(target, dr, df, attacker, false) {
                return true;
            }
        }

        false
    }

    /// Walk one ray outward from `target`; the first occupied square blocks
    /// the ray, and attacks it iff it holds a matching slider of `attacker`.
    fn slider_on_ray(
        &self,
        target: Square,
        dr: isize,
        df: isize,
        attacker: Color,
        straight: bool,
    ) -> bool {
        let mut r = target.rank() as isize + dr;
        let mut f = target.file() as isize + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            if let Some((color, piece)) = self.piece_at(Square(r as usize, f as usize)) {
                return color == attacker
                    && if straight {
                        piece.attacks_straight()
                    } else {
                        piece.attacks_diagonally()
                    };
            }
            r += dr;
            f += df;
        }
        false
    }

    /// True iff `color`'s king is currently attacked.
    pub(crate) fn king_attacked(&self, color: Color) -> bool {
        self.is_square_attacked_by(color.opponent(), self.king_square(color))
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_attacked(self.side_to_move)
    }
}
