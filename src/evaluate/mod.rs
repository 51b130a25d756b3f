use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::move_generator::generate_moves;
use crate::rules::is_in_check;

use self::evaluation_tables::{BISHOP_TABLE, KING_TABLE, KNIGHT_TABLE, PAWN_TABLE};

mod evaluation_tables;

const MOBILITY_WEIGHT: i32 = 5;
const CHECK_BONUS: i32 = 50;
const KING_ACTIVITY_WEIGHT: i32 = 10;

/// Fewer pieces than this on the board counts as an endgame.
pub const ENDGAME_PIECE_COUNT: usize = 10;

pub fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Rook => 500,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Queen => 900,
        PieceKind::King => 10_000,
    }
}

/// Piece-square bonus for `piece` where it stands. Rooks and queens have no
/// table.
pub fn positional_value(piece: &Piece) -> i32 {
    let row = match piece.color() {
        Color::White => piece.row() as usize,
        Color::Black => 7 - piece.row() as usize,
    };
    let col = piece.col() as usize;
    match piece.kind() {
        PieceKind::Pawn => PAWN_TABLE[row][col],
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::King => KING_TABLE[row][col],
        PieceKind::Rook | PieceKind::Queen => 0,
    }
}

/// Static evaluation of `board` from `ai_color`'s point of view: material,
/// a tenth of the positional balance, mobility, check, and king activity
/// once the board has thinned out. The board is unchanged on return.
pub fn score(board: &mut Board, ai_color: Color) -> i32 {
    let mut material = 0;
    let mut positional = 0;
    for piece in board.all_pieces() {
        let sign = if piece.color() == ai_color { 1 } else { -1 };
        material += sign * material_value(piece.kind());
        positional += sign * positional_value(&piece);
    }
    let mut score = material + positional / 10;

    let opponent = ai_color.opposite();
    let ai_mobility = generate_moves(board, ai_color).len() as i32;
    let opponent_mobility = generate_moves(board, opponent).len() as i32;
    score += (ai_mobility - opponent_mobility) * MOBILITY_WEIGHT;

    if is_in_check(board, opponent) {
        score += CHECK_BONUS;
    }
    if is_in_check(board, ai_color) {
        score -= CHECK_BONUS;
    }

    if is_endgame(board) {
        for king in board
            .all_pieces()
            .filter(|piece| piece.kind() == PieceKind::King)
        {
            let activity = king.square().center_distance() * KING_ACTIVITY_WEIGHT;
            if king.color() == ai_color {
                score -= activity;
            } else {
                score += activity;
            }
        }
    }

    score
}

pub fn is_endgame(board: &Board) -> bool {
    board.piece_count() < ENDGAME_PIECE_COUNT
}
