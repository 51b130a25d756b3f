//! Play command - play a game against the computer.

use log::warn;
use minimax_chess::board::color::Color;
use minimax_chess::game::Engine;
use minimax_chess::input_handler::{parse_move_input, InputError, MoveInput};
use structopt::StructOpt;

use super::util::{create_config, render, report_outcome};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "t", long = "time-ms", default_value = "5000")]
    pub time_ms: u64,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.depth, self.time_ms));
        println!("You are playing {}.", self.color);
        render(&engine);

        loop {
            let turn = engine.turn();
            let result = if turn == self.color {
                println!("Your move ({}), or `engine` / `quit`:", turn);
                match parse_move_input() {
                    Ok(MoveInput::Quit) | Err(InputError::EndOfInput) => return,
                    Ok(input) => engine.make_move_from_input(input),
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                }
            } else {
                println!("Thinking...");
                engine.make_best_move().map(Some)
            };

            match result {
                Ok(Some((_, outcome))) => {
                    render(&engine);
                    if report_outcome(&outcome) {
                        return;
                    }
                }
                Ok(None) => return,
                Err(err) => {
                    warn!("move rejected: {}", err);
                    println!("{}", err);
                    if turn != self.color {
                        return;
                    }
                }
            }
        }
    }
}
