use common::Square;

use crate::board::castle_rights::CastleSide;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::ChessMove;

use super::{is_in_check, is_move_safe};

/// Whether `king` may castle toward `target_col` (6 for kingside, 2 for
/// queenside). Eligibility comes from the board's castle rights rather than
/// the pieces' moved-flags. The king may not castle out of check, through an
/// attacked square, or into check.
pub fn can_castle(board: &Board, king: &Piece, target_col: u8) -> bool {
    if king.kind() != PieceKind::King {
        return false;
    }
    let color = king.color();
    let side = match CastleSide::from_king_target(king.col(), target_col) {
        Some(side) => side,
        None => return false,
    };
    let row = color.back_row();
    if king.square() != Square::new(row, 4) || !board.castle_rights().allows(color, side) {
        return false;
    }

    let rook_square = Square::new(row, side.rook_col());
    match board.get(rook_square) {
        Some(rook) if rook.is(PieceKind::Rook, color) => {}
        _ => return false,
    }

    let (low, high) = if side.rook_col() < king.col() {
        (side.rook_col() + 1, king.col())
    } else {
        (king.col() + 1, side.rook_col())
    };
    if (low..high).any(|col| !board.is_empty(Square::new(row, col))) {
        return false;
    }

    if is_in_check(board, color) {
        return false;
    }

    let mut scratch = board.clone();
    if let Some(mut relocated) = scratch.remove(king.square()) {
        relocated.move_to(Square::new(row, side.transit_col()));
        scratch.add_piece(relocated);
        if is_in_check(&scratch, color) {
            return false;
        }
    }

    let castle_move = ChessMove::describe(board, *king, Square::new(row, target_col));
    let mut scratch = board.clone();
    is_move_safe(&mut scratch, &castle_move)
}

/// Whether `pawn` may capture en passant by moving to `target`. The board's
/// en passant target must be an enemy pawn beside this one, and `target` must
/// be the square directly behind it.
pub fn can_en_passant(board: &Board, pawn: &Piece, target: Square) -> bool {
    if pawn.kind() != PieceKind::Pawn || !board.is_empty(target) {
        return false;
    }
    let passed = match board.en_passant_target() {
        Some(square) => square,
        None => return false,
    };
    let is_enemy_pawn = board.get(passed).map_or(false, |victim| {
        victim.kind() == PieceKind::Pawn && victim.color() != pawn.color()
    });
    if !is_enemy_pawn {
        return false;
    }

    let beside = pawn.row() == passed.row()
        && (pawn.col() as i8 - passed.col() as i8).abs() == 1;
    beside
        && target.col() == passed.col()
        && target.row() as i8 == passed.row() as i8 + pawn.color().pawn_direction()
}
