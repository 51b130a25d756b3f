//! Legal move generation.
//!
//! Candidates come from `targets`, then each one passes through the same
//! pseudo-legality and check-safety predicates the rules engine exposes, so
//! the generator can never disagree with `rules::can_make_move`. Safety
//! probes apply and undo on the board they are handed; the board is
//! unchanged when generation returns.

use rayon::prelude::*;
use smallvec::SmallVec;

use common::Square;

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::rules;

use super::targets::candidate_targets;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

/// How a legal destination would be reached, for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveType {
    Normal,
    Capture,
    EnPassant,
    Castle,
}

impl MoveType {
    fn of(chess_move: &ChessMove) -> Self {
        if chess_move.is_castling() {
            MoveType::Castle
        } else if chess_move.is_en_passant() {
            MoveType::EnPassant
        } else if chess_move.is_capture() {
            MoveType::Capture
        } else {
            MoveType::Normal
        }
    }
}

fn is_castle_target(piece: &Piece, target: Square) -> bool {
    piece.kind() == PieceKind::King
        && piece.row() == target.row()
        && (piece.col() as i8 - target.col() as i8).abs() == 2
}

/// Appends every legal move of `piece` to `moves`.
fn push_piece_moves(moves: &mut ChessMoveList, board: &mut Board, piece: &Piece) {
    for target in candidate_targets(piece, board) {
        if is_castle_target(piece, target) {
            if rules::can_castle(board, piece, target.col()) {
                moves.push(ChessMove::describe(board, *piece, target));
            }
            continue;
        }
        if !rules::is_pseudo_legal(piece, target, board) {
            continue;
        }
        let chess_move = ChessMove::describe(board, *piece, target);
        if rules::is_move_safe(board, &chess_move) {
            moves.push(chess_move);
        }
    }
}

/// All legal moves for `color`, in row-major order of the moving pieces.
pub fn generate_moves(board: &mut Board, color: Color) -> ChessMoveList {
    let pieces: SmallVec<[Piece; 16]> = board.pieces(color).collect();
    let mut moves = ChessMoveList::new();
    for piece in pieces.iter() {
        push_piece_moves(&mut moves, board, piece);
    }
    moves
}

/// All legal moves of the piece standing on `square`, if any.
pub fn generate_piece_moves(board: &mut Board, square: Square) -> ChessMoveList {
    let mut moves = ChessMoveList::new();
    if let Some(piece) = board.get(square) {
        push_piece_moves(&mut moves, board, &piece);
    }
    moves
}

/// Legal captures for `color`, en passant included.
pub fn generate_captures(board: &mut Board, color: Color) -> ChessMoveList {
    let mut moves = generate_moves(board, color);
    moves.retain(|chess_move| chess_move.is_capture());
    moves
}

/// Legal destinations for the piece on `square`, tagged for display.
pub fn legal_destinations(board: &Board, square: Square) -> Vec<(Square, MoveType)> {
    let mut scratch = board.clone();
    generate_piece_moves(&mut scratch, square)
        .iter()
        .map(|chess_move| (chess_move.to_square(), MoveType::of(chess_move)))
        .collect()
}

/// Counts the leaf positions reachable in exactly `depth` plies. The first
/// ply is split across the rayon pool, each branch on its own board.
pub fn count_positions(depth: u8, board: &mut Board, color: Color) -> usize {
    if depth == 0 {
        return 1;
    }
    let candidates = generate_moves(board, color);
    if depth == 1 {
        return candidates.len();
    }

    candidates
        .par_iter()
        .map(|chess_move| {
            let mut local_board = board.clone();
            chess_move
                .apply(&mut local_board)
                .expect("move application should succeed in position counting");
            count_positions_inner(depth - 1, &mut local_board, color.opposite())
        })
        .sum()
}

fn count_positions_inner(depth: u8, board: &mut Board, color: Color) -> usize {
    let candidates = generate_moves(board, color);
    if depth == 1 {
        return candidates.len();
    }

    let mut count = 0;
    for chess_move in candidates.iter() {
        let undo_info = chess_move
            .apply(board)
            .expect("move application should succeed in position counting");
        count += count_positions_inner(depth - 1, board, color.opposite());
        chess_move
            .undo(board, undo_info)
            .expect("move undo should succeed in position counting");
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::castle_rights::CastleRights;
    use crate::chess_position;
    use common::*;

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let mut board = Board::starting_position();
        let original = board.clone();
        assert_eq!(20, generate_moves(&mut board, Color::White).len());
        assert_eq!(20, generate_moves(&mut board, Color::Black).len());
        assert_eq!(original, board);
    }

    /// Applies and undoes every legal move down to `depth` plies, checking the
    /// board is restored exactly each time. Returns the number of pairs.
    fn walk_apply_undo(depth: u8, board: &mut Board, color: Color) -> usize {
        if depth == 0 {
            return 0;
        }
        let mut checked = 0;
        for chess_move in generate_moves(board, color).iter() {
            let before = board.clone();
            let undo_info = chess_move.apply(board).unwrap();
            checked += 1 + walk_apply_undo(depth - 1, board, color.opposite());
            chess_move.undo(board, undo_info).unwrap();
            assert_eq!(before, *board, "undo of {} did not restore the board", chess_move);
        }
        checked
    }

    #[test]
    fn test_every_legal_move_undoes_exactly() {
        let mut board = chess_position! {
            r...k..r
            pP...ppp
            ..n..q..
            ...pP...
            .b......
            ..N..Q..
            Pp.P.PPP
            R...K..R
        };
        board.set_castle_rights(CastleRights::all());
        board.set_en_passant_target(Some(D5));
        let original = board.clone();

        let moves = generate_moves(&mut board, Color::White);
        assert!(moves.iter().any(|m| m.is_castling()));
        assert!(moves.iter().any(|m| m.is_en_passant()));
        assert!(moves.iter().any(|m| m.is_promotion() && m.is_capture()));
        let replies = generate_moves(&mut board, Color::Black);
        assert!(replies.iter().any(|m| m.is_promotion()));

        let checked = walk_apply_undo(3, &mut board, Color::White);
        assert!(checked > 1_000);
        assert_eq!(original, board);
    }

    #[test]
    fn test_count_positions_from_start() {
        let mut board = Board::starting_position();
        assert_eq!(20, count_positions(1, &mut board, Color::White));
        assert_eq!(400, count_positions(2, &mut board, Color::White));
        assert_eq!(8_902, count_positions(3, &mut board, Color::White));
    }

    #[test]
    fn test_generated_moves_match_rules_queries() {
        let mut board = chess_position! {
            r...k..r
            ppp..ppp
            ..n..q..
            ...pP...
            ..B...b.
            ..NP.N..
            PPP..PPP
            R..QK..R
        };
        board.set_castle_rights(CastleRights::all());
        board.set_en_passant_target(Some(D5));

        for &color in Color::ALL.iter() {
            let generated = generate_moves(&mut board, color);
            let mut expected = vec![];
            for piece in board.pieces(color) {
                for target in Square::all() {
                    if let Some(chess_move) = rules::can_make_move(&board, &piece, target) {
                        expected.push(chess_move);
                    }
                }
            }
            assert_eq!(expected.len(), generated.len(), "{} move count", color);
            for chess_move in expected.iter() {
                assert!(generated.contains(chess_move), "missing {}", chess_move);
            }
        }
    }

    #[test]
    fn test_legal_destinations_are_tagged() {
        let mut board = chess_position! {
            ....k..r
            ........
            ........
            ...pP...
            ........
            ........
            ........
            ....K..R
        };
        board.set_castle_rights(CastleRights::white_king() | CastleRights::white_kingside());
        board.set_en_passant_target(Some(D5));

        let pawn_targets = legal_destinations(&board, E5);
        assert!(pawn_targets.contains(&(E6, MoveType::Normal)));
        assert!(pawn_targets.contains(&(D6, MoveType::EnPassant)));
        assert_eq!(2, pawn_targets.len());

        let king_targets = legal_destinations(&board, E1);
        assert!(king_targets.contains(&(G1, MoveType::Castle)));

        let rook_targets = legal_destinations(&board, H1);
        assert!(rook_targets.contains(&(H8, MoveType::Capture)));

        assert!(legal_destinations(&board, A1).is_empty());
    }

    #[test]
    fn test_captures_only() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ...p.p..
            ....N...
            ........
            ........
            ....K...
        };
        let captures = generate_captures(&mut board, Color::White);
        assert_eq!(0, captures.len());

        board.add_piece(Piece::new(PieceKind::Pawn, Color::Black, D6));
        board.remove(D5);
        let knight_captures = generate_captures(&mut board, Color::White);
        assert!(knight_captures.iter().all(|chess_move| chess_move.is_capture()));
        assert_eq!(1, knight_captures.len());
    }
}
