//! Fixed-depth search.
//!
//! Minimax with alpha-beta pruning over the one live board: every node
//! applies a candidate, recurses with the side flipped, and undoes it
//! through the same guard the legality filter uses. Scores accumulate
//! per-move static deltas (material plus placement-table change) down the
//! tree rather than evaluating leaves from scratch, and candidates are
//! sorted by that delta best-first purely to tighten pruning.

mod pst;

use log::debug;

use super::status::GameStatus;
use super::types::{Move, MoveRecord};
use super::{Board, MoveGuard};
use self::pst::{piece_weight, placement};

/// Returned for the side getting mated; large enough to dominate any
/// accumulated material score.
pub(crate) const MATE_SCORE: i32 = 10_000_000;

const INFINITY: i32 = i32::MAX;

impl Board {
    /// Compute the best move for the side to move at a fixed depth, as a
    /// text-notation record.
    ///
    /// Returns `None` when the game has already ended. Deterministic for a
    /// given position and depth.
    pub fn best_move(&mut self, depth: u32) -> Option<MoveRecord> {
        if self.status() != GameStatus::Playing {
            return None;
        }
        let mover = self.side_to_move;
        find_best_move(self, depth).map(|(m, score)| {
            debug!("depth {depth}: selected {m} with score {score}");
            MoveRecord::from_move(&m, mover)
        })
    }

    /// Search depth the hosting application is expected to use: one ply
    /// deeper once the opening is over.
    #[must_use]
    pub fn suggested_depth(&self) -> u32 {
        if self.fullmove_number > 20 {
            5
        } else {
            4
        }
    }
}

/// Search the position to `depth` plies and return the best move with its
/// score from the perspective of the side to move at the root.
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<(Move, i32)> {
    let (best, score) = search(board, depth, true, -INFINITY, INFINITY, 0);
    best.map(|m| (m, score))
}

fn search(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    score: i32,
) -> (Option<Move>, i32) {
    if depth == 0 {
        return (None, score);
    }

    let moves = board.generate_moves();
    if moves.is_empty() {
        if board.is_in_check() {
            // Forced mate; sign it against whoever ran out of moves.
            return (None, if maximizing { -MATE_SCORE } else { MATE_SCORE });
        }
        return (None, score); // stalemate
    }

    let mut scored: Vec<(Move, i32)> = moves
        .into_iter()
        .map(|m| {
            let delta = move_delta(board, &m, maximizing);
            (m, delta)
        })
        .collect();
    // Stable sort keeps move selection deterministic between runs.
    if maximizing {
        scored.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        scored.sort_by(|a, b| a.1.cmp(&b.1));
    }

    let mut best_move = None;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for (m, delta) in scored {
        let child_score = {
            let mut probe = MoveGuard::apply(board, &m);
            search(
                probe.board(),
                depth - 1,
                !maximizing,
                alpha,
                beta,
                score + delta,
            )
            .1
        };

        if maximizing {
            if child_score > best_score {
                best_score = child_score;
                best_move = Some(m);
            }
            alpha = alpha.max(child_score);
        } else {
            if child_score < best_score {
                best_score = child_score;
                best_move = Some(m);
            }
            beta = beta.min(child_score);
        }
        if alpha >= beta {
            break;
        }
    }

    (best_move, best_score)
}

/// Static score change a move produces: any captured piece's weight and
/// placement, plus the moved (or promoted) piece's new placement minus its
/// old one, signed by which side the current subtree maximizes for.
fn move_delta(board: &Board, m: &Move, maximizing: bool) -> i32 {
    let mover = board.side_to_move();
    let mut score = 0;

    if let Some((victim_color, victim)) = board.piece_at(m.to) {
        let value = piece_weight(victim) + placement(victim_color, victim, m.to);
        score += if maximizing { value } else { -value };
    }

    let placed = m.promotion.unwrap_or(m.piece);
    let gain = piece_weight(placed) + placement(mover, placed, m.to);
    let cost = piece_weight(m.piece) + placement(mover, m.piece, m.from);
    if maximizing {
        score + gain - cost
    } else {
        score - gain + cost
    }
}
