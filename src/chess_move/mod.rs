pub mod castle;
pub mod chess_move;
pub mod en_passant;
pub mod pawn_promotion;
pub mod standard;

pub use chess_move::{ChessMove, MoveKind, UndoInfo};
