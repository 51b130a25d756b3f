use once_cell::sync::Lazy;
use smallvec::SmallVec;

use common::Square;

use crate::board::castle_rights::CastleSide;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;

/// Candidate destinations for one piece. Never longer than a queen's 27.
pub type TargetList = SmallVec<[Square; 28]>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn offset_table(offsets: &[(i8, i8)]) -> Vec<TargetList> {
    Square::all()
        .map(|square| {
            offsets
                .iter()
                .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
                .collect()
        })
        .collect()
}

static KNIGHT_TARGETS: Lazy<Vec<TargetList>> = Lazy::new(|| offset_table(&KNIGHT_OFFSETS));
static KING_TARGETS: Lazy<Vec<TargetList>> = Lazy::new(|| offset_table(&KING_OFFSETS));

/// Walks each ray until the edge of the board or the first occupied square,
/// which is included so captures are candidates.
fn ray_targets(targets: &mut TargetList, board: &Board, from: Square, dirs: &[(i8, i8)]) {
    for &(d_row, d_col) in dirs.iter() {
        let mut current = from.offset(d_row, d_col);
        while let Some(square) = current {
            targets.push(square);
            if !board.is_empty(square) {
                break;
            }
            current = square.offset(d_row, d_col);
        }
    }
}

/// Squares `piece` could conceivably move to on `board`. This is a superset
/// of its legal moves: legality is decided by the rules engine afterwards.
/// King candidates include both castling destinations from the home square.
pub fn candidate_targets(piece: &Piece, board: &Board) -> TargetList {
    let from = piece.square();
    let mut targets = TargetList::new();

    match piece.kind() {
        PieceKind::Pawn => {
            let direction = piece.color().pawn_direction();
            let pawn_offsets = [
                (direction, 0),
                (2 * direction, 0),
                (direction, -1),
                (direction, 1),
            ];
            for &(d_row, d_col) in pawn_offsets.iter() {
                if let Some(square) = from.offset(d_row, d_col) {
                    targets.push(square);
                }
            }
        }
        PieceKind::Knight => targets.extend_from_slice(&KNIGHT_TARGETS[from.index()]),
        PieceKind::King => {
            targets.extend_from_slice(&KING_TARGETS[from.index()]);
            if from == Square::new(piece.color().back_row(), 4) {
                for side in CastleSide::ALL.iter() {
                    targets.push(Square::new(from.row(), side.king_target_col()));
                }
            }
        }
        PieceKind::Rook => ray_targets(&mut targets, board, from, &ROOK_DIRS),
        PieceKind::Bishop => ray_targets(&mut targets, board, from, &BISHOP_DIRS),
        PieceKind::Queen => {
            ray_targets(&mut targets, board, from, &ROOK_DIRS);
            ray_targets(&mut targets, board, from, &BISHOP_DIRS);
        }
    }

    targets
}
