//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, Color, Piece};

/// Play up to `num_moves` random legal moves from the initial position.
fn random_playout(board: &mut Board, seed: u64, num_moves: usize) {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(&mv);
    }
}

/// The mailbox, the per-color boards and the king cache must always agree.
fn assert_views_consistent(board: &Board) {
    for idx in 0..64 {
        match board.squares[idx] {
            Some((color, piece)) => {
                assert_eq!(board.by_color[color.index()][idx], Some(piece));
                assert_eq!(board.by_color[color.opponent().index()][idx], None);
            }
            None => {
                assert_eq!(board.by_color[Color::White.index()][idx], None);
                assert_eq!(board.by_color[Color::Black.index()][idx], None);
            }
        }
    }
    for color in [Color::White, Color::Black] {
        assert_eq!(
            board.piece_at(board.king_square(color)),
            Some((color, Piece::King))
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// FEN round-trips on any position reachable by legal moves.
    #[test]
    fn prop_fen_round_trip(seed in any::<u64>(), num_moves in 1..=30usize) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let fen = board.fen();
        let restored = Board::try_from_fen(&fen).unwrap();
        prop_assert_eq!(restored.fen(), fen);
    }

    /// The redundant board views never drift from the mailbox.
    #[test]
    fn prop_board_views_stay_consistent(seed in any::<u64>(), num_moves in 1..=30usize) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        assert_views_consistent(&board);
    }

    /// Undoing every move walks back to the exact initial state.
    #[test]
    fn prop_undo_all_restores_initial_state(seed in any::<u64>(), num_moves in 1..=30usize) {
        let mut board = Board::new();
        let initial = board.fen();
        random_playout(&mut board, seed, num_moves);

        while board.undo_move() {}
        prop_assert_eq!(board.fen(), initial);
    }

    /// No legal move ever leaves the mover's own king attacked.
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in any::<u64>(), num_moves in 1..=20usize) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let mover = board.side_to_move();
        for m in board.generate_moves() {
            board.make_move(&m);
            prop_assert!(!board.king_attacked(mover));
            board.undo_move();
        }
    }
}
