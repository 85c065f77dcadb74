//! Move application and snapshot undo tests.

use crate::board::{Board, Square};

#[test]
fn test_undo_restores_state_for_every_opening_move() {
    let mut board = Board::new();
    let before = board.fen();
    for m in board.generate_moves() {
        board.make_move(&m);
        board.undo_move();
        assert_eq!(board.fen(), before, "undo after {m} diverged");
        assert_eq!(board.history.len(), 0);
    }
}

#[test]
fn test_double_step_sets_en_passant_target() {
    let mut board = Board::new();
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.en_passant_target, Square::from_notation("e3"));
    board.make_move_uci("g8f6").unwrap();
    assert_eq!(board.en_passant_target, None);
}

#[test]
fn test_kingside_castle_relocates_rook_and_revokes_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move_uci("e1g1").unwrap();
    assert_eq!(board.fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}

#[test]
fn test_queenside_castle_by_black() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    board.make_move_uci("e8c8").unwrap();
    assert_eq!(board.fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
}

#[test]
fn test_en_passant_capture_removes_victim() {
    let mut board = Board::new();
    board.make_move_uci("e2e4").unwrap();
    board.make_move_uci("a7a6").unwrap();
    board.make_move_uci("e4e5").unwrap();
    board.make_move_uci("d7d5").unwrap();
    let before = board.fen();

    board.make_move_uci("e5d6").unwrap();
    // Both the moving pawn's origin and the victim square are empty now.
    assert_eq!(board.piece_on(Square::from_notation("d5").unwrap()), None);
    assert_eq!(board.piece_on(Square::from_notation("e5").unwrap()), None);
    assert_eq!(board.piece_on(Square::from_notation("d6").unwrap()), Some('P'));

    board.undo_move();
    assert_eq!(board.fen(), before);
}

#[test]
fn test_promotion_replaces_pawn() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    board.make_move_uci("a7a8q").unwrap();
    assert_eq!(board.piece_on(Square::from_notation("a8").unwrap()), Some('Q'));
    assert_eq!(board.piece_on(Square::from_notation("a7").unwrap()), None);
    board.undo_move();
    assert_eq!(board.piece_on(Square::from_notation("a7").unwrap()), Some('P'));
    assert_eq!(board.piece_on(Square::from_notation("a8").unwrap()), None);
}

#[test]
fn test_moving_rook_revokes_one_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move_uci("a1a2").unwrap();
    let fen = board.fen();
    let castling = fen.split_whitespace().nth(2).unwrap();
    assert_eq!(castling, "Kkq");
}

#[test]
fn test_capturing_rook_on_home_square_revokes_owner_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1");
    board.make_move_uci("g2a8").unwrap();
    let fen = board.fen();
    let castling = fen.split_whitespace().nth(2).unwrap();
    assert_eq!(castling, "KQk");
}

#[test]
fn test_moving_king_revokes_both_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move_uci("e1e2").unwrap();
    let fen = board.fen();
    let castling = fen.split_whitespace().nth(2).unwrap();
    assert_eq!(castling, "kq");
}

#[test]
fn test_halfmove_clock_resets_only_on_captures() {
    let mut board = Board::new();
    board.make_move_uci("g1f3").unwrap();
    assert_eq!(board.halfmove_clock(), 1);
    board.make_move_uci("b8c6").unwrap();
    assert_eq!(board.halfmove_clock(), 2);
    // A quiet pawn push ticks the clock like any other quiet move.
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.halfmove_clock(), 3);
    board.make_move_uci("c6d4").unwrap();
    assert_eq!(board.halfmove_clock(), 4);
    board.make_move_uci("f3d4").unwrap(); // capture resets
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_halfmove_clock_resets_on_en_passant_capture() {
    let mut board = Board::new();
    for uci in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        board.make_move_uci(uci).unwrap();
    }
    assert_eq!(board.halfmove_clock(), 4);
    board.make_move_uci("e5d6").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_fullmove_number_increments_after_black() {
    let mut board = Board::new();
    assert_eq!(board.fullmove_number(), 1);
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.fullmove_number(), 1);
    board.make_move_uci("e7e5").unwrap();
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_undo_beyond_history_is_a_no_op() {
    let mut board = Board::new();
    let before = board.fen();
    assert!(!board.undo_move());
    assert_eq!(board.fen(), before);
}

#[test]
fn test_undo_unwinds_a_whole_line() {
    let mut board = Board::new();
    let before = board.fen();
    for uci in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
        board.make_move_uci(uci).unwrap();
    }
    for _ in 0..5 {
        assert!(board.undo_move());
    }
    assert_eq!(board.fen(), before);
    assert!(!board.undo_move());
}

#[test]
fn test_king_cache_follows_the_king() {
    let mut board = Board::new();
    board.make_move_uci("e2e4").unwrap();
    board.make_move_uci("e7e5").unwrap();
    board.make_move_uci("e1e2").unwrap();
    assert_eq!(
        board.king_square(crate::board::Color::White),
        Square::from_notation("e2").unwrap()
    );
    board.undo_move();
    assert_eq!(
        board.king_square(crate::board::Color::White),
        Square::from_notation("e1").unwrap()
    );
}
