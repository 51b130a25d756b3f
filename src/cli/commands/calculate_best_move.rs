//! Calculate best move command - determine the best move after a sequence of moves.

use minimax_chess::game::Engine;
use minimax_chess::input_handler::MoveInput;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "t", long = "time-ms", default_value = "5000")]
    pub time_ms: u64,
    #[structopt(long = "moves", help = "Coordinate moves from the start, e.g. e2e4 e7e5")]
    pub moves: Vec<MoveInput>,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.depth, self.time_ms));

        for input in self.moves {
            if let MoveInput::Coordinate { from, to } = input {
                if let Err(err) = engine.make_move(from, to) {
                    eprintln!("Cannot play {}{}: {}", from, to, err);
                    return;
                }
            }
        }

        let turn = engine.turn();
        match engine.try_best_move(turn) {
            Ok(best_move) => println!("{}", best_move.to_coordinate()),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
