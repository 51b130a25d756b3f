pub mod input;

pub use input::{parse_move_input, InputError, MoveInput};
