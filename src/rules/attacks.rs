use common::Square;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;

use super::movement::reaches;

/// Whether `piece` attacks `target`. This is movement geometry without the
/// check-safety filter; pawns attack their two forward diagonals whether or
/// not anything stands there.
pub fn attacks_square(piece: &Piece, target: Square, board: &Board) -> bool {
    match piece.kind() {
        PieceKind::Pawn => {
            let d_row = target.row() as i8 - piece.row() as i8;
            let d_col = target.col() as i8 - piece.col() as i8;
            d_row == piece.color().pawn_direction() && d_col.abs() == 1
        }
        kind => reaches(kind, piece.square(), target, board),
    }
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|piece| attacks_square(&piece, target, board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use common::*;

    #[test]
    fn test_pawn_attacks_diagonals_only() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ...P....
            ....K...
        };
        let pawn = board.get(D2).unwrap();
        assert!(attacks_square(&pawn, C3, &board));
        assert!(attacks_square(&pawn, E3, &board));
        assert!(!attacks_square(&pawn, D3, &board));
        assert!(!attacks_square(&pawn, C1, &board));
    }

    #[test]
    fn test_blocked_slider_does_not_attack() {
        let board = chess_position! {
            ....k...
            ....p...
            ........
            ........
            ........
            ........
            ........
            ....R..K
        };
        assert!(is_square_attacked(&board, E7, Color::White));
        assert!(!is_square_attacked(&board, E8, Color::White));
        assert!(is_square_attacked(&board, A1, Color::White));
    }

    #[test]
    fn test_starting_position_attacks() {
        let board = Board::starting_position();
        assert!(is_square_attacked(&board, F3, Color::White));
        assert!(is_square_attacked(&board, F6, Color::Black));
        assert!(!is_square_attacked(&board, E4, Color::White));
        assert!(!is_square_attacked(&board, E5, Color::Black));
    }
}
