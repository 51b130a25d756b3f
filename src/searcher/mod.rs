//! Depth-limited minimax with alpha-beta pruning, a capture-only quiescence
//! extension at the horizon, and a wall-clock deadline.
//!
//! Every node works on its own clone of the position: a child is created by
//! cloning the parent, applying one move and switching the turn. Since castle
//! rights and the en passant target travel with the board, a search never
//! reads state from the game it was started from.

mod background;
mod deadline;
mod move_orderer;

#[cfg(test)]
mod tests;

use std::cmp::{max, min};
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate;
use crate::move_generator::{generate_captures, generate_moves};
use crate::rules::is_in_check;

pub use background::{spawn_search, SearchHandle};
pub use deadline::Deadline;
pub use move_orderer::{move_score, sort_chess_moves};

pub const INFINITY: i32 = 1_000_000;
pub const QUIESCENCE_DEPTH: u8 = 3;
pub const DEFAULT_DEPTH: u8 = 4;
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(5000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("time budget exhausted before any move was searched")]
    TimeBudgetExhausted,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("search worker stopped without delivering a result")]
    WorkerDisconnected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub time_budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u8, time_budget: Duration) -> Self {
        Self { depth, time_budget }
    }
}

/// Statistics collected during the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub quiescence_nodes: usize,
    pub cutoffs: usize,
    pub root_moves_searched: usize,
    pub elapsed: Duration,
    pub best_score: Option<i32>,
}

pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Finds the best move for `color` on `board`. The board is cloned before
    /// anything is searched and is never modified.
    ///
    /// Root moves are searched in `move_score` order until the deadline
    /// passes. The highest-scoring move wins, and ties go to the move searched
    /// first.
    pub fn search(&mut self, board: &Board, color: Color) -> Result<ChessMove, SearchError> {
        if self.config.depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        self.stats = SearchStats::default();
        let deadline = Deadline::start(self.config.time_budget);

        let mut root = board.clone();
        let mut candidates = generate_moves(&mut root, color);
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }
        sort_chess_moves(&mut candidates);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(ChessMove, i32)> = None;

        for chess_move in candidates.iter() {
            if deadline.expired() {
                warn!(
                    "search deadline reached after {} of {} root moves",
                    self.stats.root_moves_searched,
                    candidates.len()
                );
                break;
            }

            let mut child = self.child(&root, chess_move);
            let value = self.minimax(
                &mut child,
                self.config.depth - 1,
                alpha,
                beta,
                false,
                color,
                &deadline,
            );
            self.stats.root_moves_searched += 1;
            debug!("root move {} scored {}", chess_move, value);

            let improves = match best {
                Some((_, best_value)) => value > best_value,
                None => true,
            };
            if improves {
                best = Some((*chess_move, value));
            }

            alpha = max(alpha, value);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.stats.elapsed = deadline.elapsed();
        self.stats.best_score = best.map(|(_, value)| value);
        debug!(
            "searched {} positions ({} quiescence, {} cutoffs) in {:?}, best score {:?}",
            self.stats.positions_searched,
            self.stats.quiescence_nodes,
            self.stats.cutoffs,
            self.stats.elapsed,
            self.stats.best_score
        );

        best.map(|(chess_move, _)| chess_move)
            .ok_or(SearchError::TimeBudgetExhausted)
    }

    fn child(&self, board: &Board, chess_move: &ChessMove) -> Board {
        let mut child = board.clone();
        chess_move
            .apply(&mut child)
            .expect("move application should succeed in search");
        child.toggle_turn();
        child
    }

    /// Mate scores are offset by how far below the root the mate was found,
    /// so nearer mates score further from zero.
    fn mate_score(&self, depth: u8, maximizing: bool) -> i32 {
        let distance = self.config.depth as i32 - depth as i32;
        if maximizing {
            -INFINITY + distance
        } else {
            INFINITY - distance
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_color: Color,
        deadline: &Deadline,
    ) -> i32 {
        self.stats.positions_searched += 1;

        if deadline.expired() {
            return evaluate::score(board, ai_color);
        }
        if depth == 0 {
            return self.quiescence(board, alpha, beta, maximizing, ai_color, QUIESCENCE_DEPTH);
        }

        let side = if maximizing {
            ai_color
        } else {
            ai_color.opposite()
        };
        let mut candidates = generate_moves(board, side);
        if candidates.is_empty() {
            return if is_in_check(board, side) {
                self.mate_score(depth, maximizing)
            } else {
                0
            };
        }
        sort_chess_moves(&mut candidates);

        if maximizing {
            let mut max_eval = -INFINITY;
            for chess_move in candidates.iter() {
                let mut child = self.child(board, chess_move);
                let eval = self.minimax(
                    &mut child,
                    depth - 1,
                    alpha,
                    beta,
                    false,
                    ai_color,
                    deadline,
                );
                max_eval = max(max_eval, eval);
                alpha = max(alpha, eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INFINITY;
            for chess_move in candidates.iter() {
                let mut child = self.child(board, chess_move);
                let eval = self.minimax(
                    &mut child,
                    depth - 1,
                    alpha,
                    beta,
                    true,
                    ai_color,
                    deadline,
                );
                min_eval = min(min_eval, eval);
                beta = min(beta, eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }

    /// Capture-only search below the horizon. The static evaluation is the
    /// floor (or ceiling) at every ply, and results are clamped to the
    /// window.
    fn quiescence(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_color: Color,
        depth: u8,
    ) -> i32 {
        self.stats.quiescence_nodes += 1;

        let stand_pat = evaluate::score(board, ai_color);
        if depth == 0 {
            return stand_pat;
        }

        if maximizing {
            if stand_pat >= beta {
                return beta;
            }
            alpha = max(alpha, stand_pat);

            let mut captures = generate_captures(board, ai_color);
            sort_chess_moves(&mut captures);
            for chess_move in captures.iter() {
                let mut child = self.child(board, chess_move);
                let score = self.quiescence(&mut child, alpha, beta, false, ai_color, depth - 1);
                if score >= beta {
                    return beta;
                }
                alpha = max(alpha, score);
            }
            alpha
        } else {
            if stand_pat <= alpha {
                return alpha;
            }
            beta = min(beta, stand_pat);

            let mut captures = generate_captures(board, ai_color.opposite());
            sort_chess_moves(&mut captures);
            for chess_move in captures.iter() {
                let mut child = self.child(board, chess_move);
                let score = self.quiescence(&mut child, alpha, beta, true, ai_color, depth - 1);
                if score <= alpha {
                    return alpha;
                }
                beta = min(beta, score);
            }
            beta
        }
    }
}
