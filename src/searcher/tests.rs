use std::thread;
use std::time::Duration;

use super::*;
use crate::board::piece::PieceKind;
use crate::chess_position;
use common::*;

fn unlimited(depth: u8) -> SearchConfig {
    SearchConfig::new(depth, Duration::from_secs(600))
}

fn back_rank_position() -> Board {
    chess_position! {
        .......k
        ......pp
        ........
        ........
        ........
        ........
        .....PPP
        R.....K.
    }
}

#[test]
fn test_finds_mate_in_one_for_white() {
    let board = back_rank_position();
    let mut searcher = Searcher::new(unlimited(2));
    let chess_move = searcher.search(&board, Color::White).unwrap();
    println!("Best move: {}", chess_move);
    assert_eq!(A1, chess_move.from_square());
    assert_eq!(A8, chess_move.to_square());
    assert!(searcher.stats().best_score.unwrap() > INFINITY - 10);
}

#[test]
fn test_finds_mate_in_one_for_black() {
    let board = chess_position! {
        r.....k.
        .....ppp
        ........
        ........
        ........
        ........
        ......PP
        .......K
    };
    let mut searcher = Searcher::new(unlimited(3));
    let chess_move = searcher.search(&board, Color::Black).unwrap();
    assert_eq!(A8, chess_move.from_square());
    assert_eq!(A1, chess_move.to_square());
}

#[test]
fn test_captures_hanging_queen() {
    let board = chess_position! {
        ...q....
        ........
        .......k
        ........
        ........
        ........
        ........
        ...R..K.
    };
    let mut searcher = Searcher::new(unlimited(1));
    let chess_move = searcher.search(&board, Color::White).unwrap();
    assert_eq!(D8, chess_move.to_square());
    assert!(chess_move
        .captures()
        .unwrap()
        .is(PieceKind::Queen, Color::Black));
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::starting_position();
    let first = Searcher::new(unlimited(2)).search(&board, Color::White).unwrap();
    let second = Searcher::new(unlimited(2)).search(&board, Color::White).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_search_does_not_touch_the_board() {
    let board = back_rank_position();
    let original = board.clone();
    Searcher::new(unlimited(2))
        .search(&board, Color::White)
        .unwrap();
    assert_eq!(original, board);
}

#[test]
fn test_zero_budget_finds_nothing() {
    let board = Board::starting_position();
    let mut searcher = Searcher::new(SearchConfig::new(3, Duration::from_millis(0)));
    assert_eq!(
        Err(SearchError::TimeBudgetExhausted),
        searcher.search(&board, Color::White)
    );
}

#[test]
fn test_no_moves_in_stalemate() {
    let board = chess_position! {
        k.......
        ..Q.....
        .K......
        ........
        ........
        ........
        ........
        ........
    };
    let mut searcher = Searcher::new(unlimited(2));
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        searcher.search(&board, Color::Black)
    );
}

#[test]
fn test_zero_depth_is_rejected() {
    let board = Board::starting_position();
    let mut searcher = Searcher::new(unlimited(0));
    assert_eq!(
        Err(SearchError::DepthTooLow),
        searcher.search(&board, Color::White)
    );
}

#[test]
fn test_stats_are_collected() {
    let board = back_rank_position();
    let mut searcher = Searcher::new(unlimited(2));
    searcher.search(&board, Color::White).unwrap();
    let stats = searcher.stats();
    assert!(stats.positions_searched > 0);
    assert!(stats.root_moves_searched > 0);
    assert!(stats.best_score.is_some());
}

#[test]
fn test_background_search_delivers_once() {
    let handle = spawn_search(back_rank_position(), Color::White, unlimited(2));
    let chess_move = handle.wait().unwrap();
    assert_eq!(A8, chess_move.to_square());
}

#[test]
fn test_background_search_can_be_polled() {
    let handle = spawn_search(back_rank_position(), Color::White, unlimited(1));
    let result = loop {
        if let Some(result) = handle.try_result() {
            break result;
        }
        thread::sleep(Duration::from_millis(5));
    };
    assert!(result.is_ok());
}
