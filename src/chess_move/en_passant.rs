use common::Square;

use crate::board::{error::BoardError, Board};

use super::chess_move::{holds, ChessMove};

/// The captured pawn stands beside the mover, on the mover's row and the
/// destination column.
fn captured_square(chess_move: &ChessMove) -> Square {
    Square::new(chess_move.from_square().row(), chess_move.to_square().col())
}

pub(super) fn apply(chess_move: &ChessMove, board: &mut Board) -> Result<(), BoardError> {
    let from_square = chess_move.from_square();
    let to_square = chess_move.to_square();

    let captured = match chess_move.captures() {
        Some(captured) => captured,
        None => return Err(BoardError::EnPassantNonCapture),
    };
    if !holds(board, from_square, &chess_move.piece()) {
        return Err(BoardError::FromSquareMismatch {
            op: "apply",
            square: from_square,
        });
    }
    let captured_square = captured_square(chess_move);
    if board.get(captured_square) != Some(captured) || !board.is_empty(to_square) {
        return Err(BoardError::UnexpectedCaptureResult {
            square: captured_square,
        });
    }

    let mut pawn = chess_move.piece();
    pawn.move_to(to_square);
    board.remove(from_square);
    board.remove(captured_square);
    board.add_piece(pawn);
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
    let captured = match chess_move.captures() {
        Some(captured) => captured,
        None => return Err(BoardError::EnPassantNonCapture),
    };

    board.remove(to_square);
    board.add_piece(chess_move.piece());
    board.add_piece(captured);
    Ok(())
}
