//! Shared utilities for CLI commands.

use std::time::Duration;

use minimax_chess::game::{Engine, EngineConfig, MoveOutcome};
use minimax_chess::searcher::SearchConfig;

pub(crate) fn create_config(depth: u8, time_ms: u64) -> EngineConfig {
    EngineConfig {
        search: SearchConfig::new(depth, Duration::from_millis(time_ms)),
        ..EngineConfig::default()
    }
}

pub(crate) fn render(engine: &Engine) {
    println!("{}", engine.board());
    if let Some(last_move) = engine.last_move() {
        println!("Last move: {}", last_move);
    }
    if let Some(stats) = engine.last_search_stats() {
        println!(
            "Searched {} positions in {:?}, score {:?}",
            stats.positions_searched, stats.elapsed, stats.best_score
        );
    }
}

/// Prints the end of game message, returning whether the game is over.
pub(crate) fn report_outcome(outcome: &MoveOutcome) -> bool {
    if outcome.checkmate {
        println!("Checkmate! {} wins.", outcome.next_turn.opposite());
    } else if outcome.stalemate {
        println!("Stalemate.");
    } else if outcome.check {
        println!("{} is in check.", outcome.next_turn);
    }
    outcome.is_game_over()
}
