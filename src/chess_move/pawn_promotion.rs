use crate::board::{error::BoardError, piece::PieceKind, Board};

use super::chess_move::{holds, ChessMove};

pub(super) fn apply(chess_move: &ChessMove, board: &mut Board) -> Result<(), BoardError> {
    let pawn = chess_move.piece();
    let from_square = chess_move.from_square();
    let to_square = chess_move.to_square();

    if pawn.kind() != PieceKind::Pawn {
        return Err(BoardError::PromotionNonPawn);
    }
    if !holds(board, from_square, &pawn) {
        return Err(BoardError::FromSquareMismatch {
            op: "apply",
            square: from_square,
        });
    }
    if board.get(to_square) != chess_move.captures() {
        return Err(BoardError::UnexpectedCaptureResult { square: to_square });
    }

    board.remove(from_square);
    board.add_piece(pawn.promoted_to_queen(to_square));
    Ok(())
}

pub(super) fn undo(chess_move: &ChessMove, board: &mut Board) -> Result<(), BoardError> {
    let to_square = chess_move.to_square();
    let is_promoted_queen = board
        .get(to_square)
        .map_or(false, |queen| queen.is(PieceKind::Queen, chess_move.piece().color()));
    if !is_promoted_queen {
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
    use crate::board::color::Color;
    use crate::board::piece::PieceKind;
    use crate::chess_move::ChessMove;
    use crate::chess_position;
    use common::*;

    #[test]
    fn test_promotion_becomes_queen() {
        let mut board = chess_position! {
            ....k...
            .P......
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let original = board.clone();

        let chess_move = ChessMove::from_squares(&board, B7, B8).unwrap();
        let undo_info = chess_move.apply(&mut board).unwrap();
        println!("Result after applying move:\n{}", board);

        assert!(board.get(B8).unwrap().is(PieceKind::Queen, Color::White));
        assert!(board.is_empty(B7));

        chess_move.undo(&mut board, undo_info).unwrap();
        assert_eq!(original, board);
        assert!(board.get(B7).unwrap().is(PieceKind::Pawn, Color::White));
    }

    #[test]
    fn test_capture_promotion_on_rook_corner() {
        let mut board = chess_position! {
            r...k...
            .P......
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        board.set_castle_rights(CastleRights::black_king() | CastleRights::black_queenside());
        let original = board.clone();

        let chess_move = ChessMove::from_squares(&board, B7, A8).unwrap();
        assert!(chess_move.is_promotion());
        let undo_info = chess_move.apply(&mut board).unwrap();

        assert!(board.get(A8).unwrap().is(PieceKind::Queen, Color::White));
        assert!(!board.castle_rights().contains(CastleRights::black_queenside()));

        chess_move.undo(&mut board, undo_info).unwrap();
        assert_eq!(original, board);
    }

    #[test]
    fn test_black_promotion() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ......p.
            K.......
        };
        let chess_move = ChessMove::from_squares(&board, G2, G1).unwrap();
        assert!(chess_move.is_promotion());
        chess_move.apply(&mut board).unwrap();
        assert!(board.get(G1).unwrap().is(PieceKind::Queen, Color::Black));
    }
}
