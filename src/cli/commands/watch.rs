//! Watch command - watch the computer play against itself.

use std::thread;
use std::time::Duration;

use minimax_chess::game::Engine;
use structopt::StructOpt;

use super::util::{create_config, render, report_outcome};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "t", long = "time-ms", default_value = "5000")]
    pub time_ms: u64,
    #[structopt(long = "max-moves", default_value = "200")]
    pub max_moves: usize,
    #[structopt(
        long = "delay",
        default_value = "250",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.depth, self.time_ms));
        render(&engine);

        for _ in 0..self.max_moves {
            match engine.make_best_move() {
                Ok((_, outcome)) => {
                    render(&engine);
                    if report_outcome(&outcome) {
                        return;
                    }
                }
                Err(err) => {
                    eprintln!("Engine failed to move: {}", err);
                    return;
                }
            }
            thread::sleep(Duration::from_millis(self.delay_ms));
        }
        println!("Stopped after {} moves.", self.max_moves);
    }
}
