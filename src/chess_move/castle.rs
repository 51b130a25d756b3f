use common::Square;

use crate::board::{
    castle_rights::CastleSide, error::BoardError, piece::Piece, piece::PieceKind, Board,
};

use super::chess_move::{holds, ChessMove};

fn side(chess_move: &ChessMove) -> Result<CastleSide, BoardError> {
    CastleSide::from_king_target(chess_move.from_square().col(), chess_move.to_square().col())
        .ok_or(BoardError::InvalidCastleMove)
}

/// Moves the king two squares and the rook to the square the king crossed.
/// Returns the rook as it stood before the move so undo can restore it.
pub(super) fn apply(chess_move: &ChessMove, board: &mut Board) -> Result<Piece, BoardError> {
    let king = chess_move.piece();
    let from_square = chess_move.from_square();
    let to_square = chess_move.to_square();
    let side = side(chess_move)?;

    if king.kind() != PieceKind::King || from_square.row() != to_square.row() {
        return Err(BoardError::InvalidCastleMove);
    }
    if !holds(board, from_square, &king) {
        return Err(BoardError::FromSquareMismatch {
            op: "apply",
            square: from_square,
        });
    }

    let row = from_square.row();
    let rook_square = Square::new(row, side.rook_col());
    let rook = match board.get(rook_square) {
        Some(rook) if rook.is(PieceKind::Rook, king.color()) => rook,
        _ => {
            return Err(BoardError::InvalidCastleState {
                msg: "no rook of the king's color on the castling corner",
            })
        }
    };
    let rook_target = Square::new(row, side.transit_col());
    if !board.is_empty(to_square) || !board.is_empty(rook_target) {
        return Err(BoardError::InvalidCastleState {
            msg: "castling destination squares are occupied",
        });
    }

    let mut moved_king = king;
    moved_king.move_to(to_square);
    let mut moved_rook = rook;
    moved_rook.move_to(rook_target);

    board.remove(from_square);
    board.remove(rook_square);
    board.add_piece(moved_king);
    board.add_piece(moved_rook);
    Ok(rook)
}

pub(super) fn undo(
    chess_move: &ChessMove,
    board: &mut Board,
    castled_rook: Option<Piece>,
) -> Result<(), BoardError> {
    let to_square = chess_move.to_square();
    let side = side(chess_move)?;

    let rook = match castled_rook {
        Some(rook) => rook,
        None => {
            return Err(BoardError::InvalidCastleState {
                msg: "no rook was recorded when the castle move was applied",
            })
        }
    };
    if !holds(board, to_square, &chess_move.piece()) {
        return Err(BoardError::ToSquareMismatch {
            op: "undo",
            square: to_square,
        });
    }
    let rook_target = Square::new(to_square.row(), side.transit_col());
    if !holds(board, rook_target, &rook) {
        return Err(BoardError::InvalidCastleState {
            msg: "castled rook is missing from its post-castle square",
        });
    }

    board.remove(to_square);
    board.remove(rook_target);
    board.add_piece(chess_move.piece());
    board.add_piece(rook);
    Ok(())
}
