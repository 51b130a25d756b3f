//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "minimax-chess",
    about = "A minimax chess engine with alpha-beta pruning and quiescence search"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches to the given `--depth` (default: 4) within `--time-ms` milliseconds per move (default: 5000). Your color is chosen at random unless you specify it with `--color`. Enter moves as coordinates, e.g. `e2e4`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4) and `--time-ms` (default: 5000), for at most `--max-moves` plies."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Play the coordinate moves given with `--moves` from the starting position, then print the engine's best move for the side to move."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable from the starting position in exactly `--depth` plies (default: 3), and report how long it took."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
