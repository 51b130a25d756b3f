use std::cmp::Reverse;

use crate::chess_move::ChessMove;
use crate::evaluate::material_value;
use crate::move_generator::ChessMoveList;

const PROMOTION_BONUS: i32 = 800;
const CASTLE_BONUS: i32 = 50;

/// Static ordering score of a move: most valuable victim less a tenth of the
/// attacker, a promotion bonus, a castling bonus, and a small bonus for
/// landing near the center.
pub fn move_score(chess_move: &ChessMove) -> i32 {
    let mut score = 0;

    if let Some(captured) = chess_move.captures() {
        score += material_value(captured.kind()) - material_value(chess_move.piece().kind()) / 10;
    }
    if chess_move.is_promotion() {
        score += PROMOTION_BONUS;
    }
    if chess_move.is_castling() {
        score += CASTLE_BONUS;
    }
    score += 7 - chess_move.to_square().center_distance();

    score
}

/// Sorts by descending `move_score`. The sort is stable, so equal scores keep
/// generation order.
pub fn sort_chess_moves(moves: &mut ChessMoveList) {
    moves.sort_by_key(|chess_move| Reverse(move_score(chess_move)));
}
