//! Per-kind movement geometry. Everything here is a pure function of the
//! piece, the destination and the board; nothing is mutated.

use common::Square;

use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::ChessMove;

use super::{can_en_passant, is_move_safe};

/// Whether the squares strictly between `from` and `to` are all empty. Only
/// meaningful for straight or diagonal lines; any other pair is reported as
/// blocked.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    let straight = d_row == 0 || d_col == 0;
    let diagonal = d_row.abs() == d_col.abs();
    if (d_row == 0 && d_col == 0) || !(straight || diagonal) {
        return false;
    }

    let step = (d_row.signum(), d_col.signum());
    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }
    false
}

/// Geometry shared by movement and attacks for every kind except the pawn,
/// whose moves and attacks differ. Occupancy of `to` is not considered.
pub(super) fn reaches(kind: PieceKind, from: Square, to: Square, board: &Board) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    if d_row == 0 && d_col == 0 {
        return false;
    }

    match kind {
        PieceKind::Knight => (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1),
        PieceKind::Bishop => d_row == d_col && path_is_clear(board, from, to),
        PieceKind::Rook => (d_row == 0 || d_col == 0) && path_is_clear(board, from, to),
        PieceKind::Queen => {
            (d_row == d_col || d_row == 0 || d_col == 0) && path_is_clear(board, from, to)
        }
        PieceKind::King => d_row <= 1 && d_col <= 1,
        PieceKind::Pawn => false,
    }
}

fn pawn_can_move_to(pawn: &Piece, target: Square, board: &Board) -> bool {
    let direction = pawn.color().pawn_direction();
    let d_row = target.row() as i8 - pawn.row() as i8;
    let d_col = target.col() as i8 - pawn.col() as i8;

    if d_col == 0 {
        if !board.is_empty(target) {
            return false;
        }
        if d_row == direction {
            return true;
        }
        return d_row == 2 * direction
            && pawn.row() == pawn.color().pawn_start_row()
            && !pawn.has_moved()
            && board.piece_at(pawn.row() as i8 + direction, pawn.col() as i8).is_none();
    }

    if d_col.abs() == 1 && d_row == direction {
        return match board.get(target) {
            Some(occupant) => occupant.color() != pawn.color(),
            None => can_en_passant(board, pawn, target),
        };
    }

    false
}

/// Geometry and occupancy without the check-safety filter. Castling is not a
/// king movement and is never pseudo-legal here.
pub fn is_pseudo_legal(piece: &Piece, target: Square, board: &Board) -> bool {
    if let Some(occupant) = board.get(target) {
        if occupant.color() == piece.color() {
            return false;
        }
    }

    match piece.kind() {
        PieceKind::Pawn => pawn_can_move_to(piece, target, board),
        kind => reaches(kind, piece.square(), target, board),
    }
}

/// Full legality for a non-castling move: pseudo-legal, and the mover's own
/// king is not attacked once the move is made. The safety probe runs on a
/// scratch copy, so `board` is left untouched.
pub fn can_move_to(piece: &Piece, target: Square, board: &Board) -> bool {
    if !is_pseudo_legal(piece, target, board) {
        return false;
    }
    let chess_move = ChessMove::describe(board, *piece, target);
    let mut scratch = board.clone();
    is_move_safe(&mut scratch, &chess_move)
}
