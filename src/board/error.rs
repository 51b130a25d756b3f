use common::Square;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Cannot {op} chess move, the `from` square {square} does not hold the moving piece")]
    FromSquareMismatch { op: &'static str, square: Square },
    #[error("Cannot {op} chess move, the `to` square {square} does not hold the moved piece")]
    ToSquareMismatch { op: &'static str, square: Square },
    #[error("Cannot apply chess move, the capture recorded on {square} is not on the board")]
    UnexpectedCaptureResult { square: Square },
    #[error("Cannot apply en passant, there is no capturable pawn")]
    EnPassantNonCapture,
    #[error("Invalid castle move, king can only move 2 squares to left or right on its original rank")]
    InvalidCastleMove,
    #[error("Invalid castle state: {msg:?}")]
    InvalidCastleState { msg: &'static str },
    #[error("Promotion square did not contain a pawn")]
    PromotionNonPawn,
}
