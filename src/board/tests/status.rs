//! Status derivation tests.

use crate::board::{Board, Color, GameStatus, MoveError, Square};

#[test]
fn test_initial_position_is_playing() {
    let mut board = Board::new();
    assert_eq!(board.status(), GameStatus::Playing);
    assert!(!board.is_game_over());
    assert!(!board.is_in_check());
}

#[test]
fn test_fools_mate_is_checkmate_for_black() {
    let mut board = Board::new();
    for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        board.make_move_uci(uci).unwrap();
    }
    assert!(board.is_in_check());
    assert!(board.legal_moves().is_empty());
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(board.status().to_string(), "black won by checkmate");
    assert!(board.is_game_over());
}

#[test]
fn test_moves_rejected_once_game_is_over() {
    let mut board = Board::new();
    for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        board.make_move_uci(uci).unwrap();
    }
    let result = board.try_move(
        Square::from_notation("a2").unwrap(),
        Square::from_notation("a3").unwrap(),
        None,
    );
    assert!(matches!(result, Err(MoveError::GameOver { .. })));
}

#[test]
fn test_stalemate() {
    let mut board = Board::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
    assert!(!board.is_in_check());
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.status(), GameStatus::Stalemate);
    assert_eq!(board.status().to_string(), "draw by stalemate");
}

#[test]
fn test_fifty_move_rule() {
    let mut board = Board::from_fen("7k/8/8/8/8/8/R7/K7 w - - 50 1");
    assert_eq!(board.status(), GameStatus::FiftyMoveRule);
    assert_eq!(board.status().to_string(), "draw by fifty rule");

    let mut board = Board::from_fen("7k/8/8/8/8/8/R7/K7 w - - 49 1");
    assert_eq!(board.status(), GameStatus::Playing);
    // A quiet rook move ticks the clock over the line.
    board.make_move_uci("a2b2").unwrap();
    assert_eq!(board.status(), GameStatus::FiftyMoveRule);
}

#[test]
fn test_checkmate_beats_draw_reporting() {
    // Back-rank mate delivered with the clock already at fifty.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 49 1");
    board.make_move_uci("a1a8").unwrap();
    assert_eq!(board.halfmove_clock(), 50);
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_insufficient_material_bare_kings() {
    let mut board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1");
    assert_eq!(board.status(), GameStatus::InsufficientMaterial);
    assert_eq!(board.status().to_string(), "draw by insufficient pieces");
}

#[test]
fn test_insufficient_material_lone_minor() {
    let mut board = Board::from_fen("8/8/8/8/8/8/8/KB1k4 w - - 0 1");
    assert_eq!(board.status(), GameStatus::InsufficientMaterial);

    let mut board = Board::from_fen("8/8/8/8/8/8/8/KN1k4 w - - 0 1");
    assert_eq!(board.status(), GameStatus::InsufficientMaterial);
}

#[test]
fn test_insufficient_material_same_shade_bishops() {
    // c1 and f8 are both dark squares.
    let mut board = Board::from_fen("5b1k/8/8/8/8/8/8/K1B5 w - - 0 1");
    assert_eq!(board.status(), GameStatus::InsufficientMaterial);

    // e8 is light; opposite-shade bishops can still mate.
    let mut board = Board::from_fen("4b2k/8/8/8/8/8/8/K1B5 w - - 0 1");
    assert_eq!(board.status(), GameStatus::Playing);
}

#[test]
fn test_sufficient_material_keeps_playing() {
    let mut board = Board::from_fen("7k/8/8/8/8/8/8/KR6 w - - 0 1");
    assert_eq!(board.status(), GameStatus::Playing);

    let mut board = Board::from_fen("7k/8/8/8/8/8/8/KNN5 w - - 0 1");
    assert_eq!(board.status(), GameStatus::Playing);

    let mut board = Board::from_fen("7k/8/8/8/8/8/P7/K7 w - - 0 1");
    assert_eq!(board.status(), GameStatus::Playing);
}
