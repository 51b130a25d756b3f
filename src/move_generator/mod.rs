//! Legal move generation on top of the rules engine.

pub mod generator;
mod targets;

pub use generator::{
    count_positions, generate_captures, generate_moves, generate_piece_moves,
    legal_destinations, ChessMoveList, MoveType,
};
