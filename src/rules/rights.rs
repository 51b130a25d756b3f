use common::Square;

use crate::board::castle_rights::{CastleRights, CastleSide};
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::ChessMove;

/// The castle right tied to a rook standing on its original corner, if it is
/// there.
fn corner_right(rook: &Piece, square: Square) -> Option<CastleRights> {
    if rook.kind() != PieceKind::Rook || square.row() != rook.color().back_row() {
        return None;
    }
    CastleSide::ALL
        .iter()
        .find(|side| side.rook_col() == square.col())
        .map(|&side| CastleRights::rook(rook.color(), side))
}

/// Updates castle rights and the en passant target after `chess_move` has
/// been placed on the board. Rights are only ever removed here.
pub fn update_rights_after_move(board: &mut Board, chess_move: &ChessMove) {
    let piece = chess_move.piece();
    let mut lost = CastleRights::none();

    match piece.kind() {
        PieceKind::King => lost = lost | CastleRights::king(piece.color()),
        PieceKind::Rook => {
            if let Some(right) = corner_right(&piece, chess_move.from_square()) {
                lost = lost | right;
            }
        }
        _ => {}
    }
    if let Some(captured) = chess_move.captures() {
        if let Some(right) = corner_right(&captured, captured.square()) {
            lost = lost | right;
        }
    }
    if !lost.is_empty() {
        board.lose_castle_rights(lost);
    }

    let d_row = chess_move.to_square().row() as i8 - chess_move.from_square().row() as i8;
    let en_passant_target = if piece.kind() == PieceKind::Pawn && d_row.abs() == 2 {
        Some(chess_move.to_square())
    } else {
        None
    };
    board.set_en_passant_target(en_passant_target);
}
