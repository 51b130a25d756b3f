//! Check, checkmate and stalemate detection, castling and en passant
//! arbitration, and the rights bookkeeping that runs after every move. All
//! rules state is read from the board itself, so every query is a pure
//! function of the position it is handed.

pub mod attacks;
pub mod movement;
mod rights;
mod special;

use common::Square;
use log::error;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::ChessMove;

pub use attacks::{attacks_square, is_square_attacked};
pub use movement::{can_move_to, is_pseudo_legal, path_is_clear};
pub use rights::update_rights_after_move;
pub use special::{can_castle, can_en_passant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

/// Whether `color`'s king is attacked. A board without that king is never in
/// check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Applies `chess_move`, asks whether the mover's king is attacked, and undoes
/// the move again. The board is unchanged afterwards. A move that cannot be
/// applied to this board is never safe.
pub fn is_move_safe(board: &mut Board, chess_move: &ChessMove) -> bool {
    let color = chess_move.piece().color();
    let undo_info = match chess_move.apply(board) {
        Ok(undo_info) => undo_info,
        Err(err) => {
            error!("safety probe could not apply {}: {}", chess_move, err);
            return false;
        }
    };
    let safe = !is_in_check(board, color);
    chess_move
        .undo(board, undo_info)
        .expect("move undo should succeed in safety probe");
    safe
}

/// Describes the move of `piece` to `to` if it is legal, including castling
/// and en passant. Returns `None` for any illegal request.
pub fn can_make_move(board: &Board, piece: &Piece, to: Square) -> Option<ChessMove> {
    if board.get(piece.square()) != Some(*piece) {
        return None;
    }
    let is_castle_shape = piece.kind() == PieceKind::King
        && piece.row() == to.row()
        && (piece.col() as i8 - to.col() as i8).abs() == 2;

    let legal = if is_castle_shape {
        can_castle(board, piece, to.col())
    } else {
        can_move_to(piece, to, board)
    };

    if legal {
        Some(ChessMove::describe(board, *piece, to))
    } else {
        None
    }
}

/// Whether any piece of `color` has a legal move: an exhaustive scan of every
/// piece against every square, stopping at the first hit.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let mut scratch = board.clone();
    let pieces: Vec<Piece> = board.pieces(color).collect();

    for piece in pieces.iter() {
        for target in Square::all() {
            if !is_pseudo_legal(piece, target, &scratch) {
                continue;
            }
            let chess_move = ChessMove::describe(&scratch, *piece, target);
            if is_move_safe(&mut scratch, &chess_move) {
                return true;
            }
        }
        if piece.kind() == PieceKind::King {
            let castles = [6, 2];
            if castles.iter().any(|&col| can_castle(board, piece, col)) {
                return true;
            }
        }
    }

    false
}

pub fn is_in_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

pub fn is_in_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

/// Returns the game ending state for `color` to move, otherwise `None`.
pub fn game_ending(board: &Board, color: Color) -> Option<GameEnding> {
    if has_legal_move(board, color) {
        return None;
    }
    if is_in_check(board, color) {
        Some(GameEnding::Checkmate)
    } else {
        Some(GameEnding::Stalemate)
    }
}
