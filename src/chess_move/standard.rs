use crate::board::{error::BoardError, Board};

use super::chess_move::{holds, ChessMove};

pub(super) fn apply(chess_move: &ChessMove, board: &mut Board) -> Result<(), BoardError> {
    let from_square = chess_move.from_square();
    let to_square = chess_move.to_square();

    if !holds(board, from_square, &chess_move.piece()) {
        return Err(BoardError::FromSquareMismatch {
            op: "apply",
            square: from_square,
        });
    }
    if board.get(to_square) != chess_move.captures() {
        return Err(BoardError::UnexpectedCaptureResult { square: to_square });
    }

    let mut moved = chess_move.piece();
    moved.move_to(to_square);
    board.remove(from_square);
    board.add_piece(moved);
    Ok(())
}

pub(super) fn undo(chess_move: &ChessMove, board: &mut Board) -> Result<(), BoardError> {
    let to_square = chess_move.to_square();

    if !holds(board, to_square, &chess_move.piece()) {
        return Err(BoardError::ToSquareMismatch {
            op: "undo",
            square: to_square,
        });
    }

    board.remove(to_square);
    board.add_piece(chess_move.piece());
    if let Some(captured) = chess_move.captures() {
        board.add_piece(captured);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::board::castle_rights::CastleRights;
    use crate::board::Board;
    use crate::chess_move::ChessMove;
    use crate::chess_position;
    use common::*;

    #[test]
    fn test_apply_and_undo_quiet_move() {
        let mut board = Board::starting_position();
        let original = board.clone();

        let chess_move = ChessMove::from_squares(&board, G1, F3).unwrap();
        let undo_info = chess_move.apply(&mut board).unwrap();
        println!("Result after applying move:\n{}", board);
        assert!(board.is_empty(G1));
        assert!(board.get(F3).unwrap().has_moved());

        chess_move.undo(&mut board, undo_info).unwrap();
        assert_eq!(original, board);
    }

    #[test]
    fn test_apply_and_undo_capture() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ....P...
            ........
            ........
            ....K...
        };
        let original = board.clone();

        let chess_move = ChessMove::from_squares(&board, E4, D5).unwrap();
        assert!(chess_move.is_capture());
        let undo_info = chess_move.apply(&mut board).unwrap();
        assert_eq!(2, board.pieces(crate::board::color::Color::White).count());
        assert_eq!(1, board.pieces(crate::board::color::Color::Black).count());

        chess_move.undo(&mut board, undo_info).unwrap();
        assert_eq!(original, board);
    }

    #[test]
    fn test_double_step_sets_en_passant_target() {
        let mut board = Board::starting_position();
        let chess_move = ChessMove::from_squares(&board, E2, E4).unwrap();
        let undo_info = chess_move.apply(&mut board).unwrap();
        assert_eq!(Some(E4), board.en_passant_target());

        chess_move.undo(&mut board, undo_info).unwrap();
        assert_eq!(None, board.en_passant_target());
    }

    #[test]
    fn test_rook_move_loses_one_right_and_undo_restores_it() {
        let mut board = Board::starting_position();
        board.remove(H2);
        let original = board.clone();

        let chess_move = ChessMove::from_squares(&board, H1, H4).unwrap();
        let undo_info = chess_move.apply(&mut board).unwrap();
        assert_eq!(
            CastleRights::all().without(CastleRights::white_kingside()),
            board.castle_rights()
        );

        chess_move.undo(&mut board, undo_info).unwrap();
        assert_eq!(original, board);
    }

    #[test]
    fn test_apply_on_wrong_board_fails() {
        let board = Board::starting_position();
        let chess_move = ChessMove::from_squares(&board, E2, E4).unwrap();

        let mut empty = Board::new();
        assert!(chess_move.apply(&mut empty).is_err());
    }
}
