//! Count positions command - count reachable positions at a given depth.

use std::time::Instant;

use minimax_chess::board::Board;
use minimax_chess::move_generator::count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let mut board = Board::starting_position();
        let turn = board.turn();
        let start = Instant::now();
        let count = count_positions(self.depth, &mut board, turn);
        let elapsed = start.elapsed();
        println!(
            "depth {}: {} positions in {:?} ({:.0} positions/s)",
            self.depth,
            count,
            elapsed,
            count as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
    }
}
