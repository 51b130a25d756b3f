use common::Square;
use log::info;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate;
use crate::input_handler::MoveInput;
use crate::move_generator::{self, ChessMoveList, MoveType};
use crate::rules::{self, GameEnding};
use crate::searcher::{
    spawn_search, SearchConfig, SearchError, SearchHandle, SearchStats, Searcher,
};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            starting_position: Board::starting_position(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid move {from}{to}")]
    InvalidMove { from: Square, to: Square },
    #[error("It is {turn}'s turn to move")]
    WrongTurn { turn: Color },
    #[error("The game is over: {ending:?}")]
    GameOver { ending: GameEnding },
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
    #[error("Search error: {error:?}")]
    SearchError { error: SearchError },
}

/// What the position looks like after a move: who moves next and whether
/// that side is in check, mated or stalemated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub next_turn: Color,
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl MoveOutcome {
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}

/// The interactive game: owns the one real board, applies chosen moves
/// permanently, and hands searches a private copy.
pub struct Engine {
    config: EngineConfig,
    board: Board,
    move_history: Vec<ChessMove>,
    last_search_stats: Option<SearchStats>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position.clone(),
            config,
            move_history: Vec::new(),
            last_search_stats: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    pub fn search_config(&self) -> SearchConfig {
        self.config.search
    }

    pub fn set_search_config(&mut self, search: SearchConfig) {
        self.config.search = search;
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(&self.board, color)
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        rules::is_in_checkmate(&self.board, color)
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        rules::is_in_stalemate(&self.board, color)
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        rules::game_ending(&self.board, self.board.turn())
    }

    pub fn legal_destinations(&self, square: Square) -> Vec<(Square, MoveType)> {
        move_generator::legal_destinations(&self.board, square)
    }

    pub fn valid_moves(&mut self) -> ChessMoveList {
        let turn = self.board.turn();
        move_generator::generate_moves(&mut self.board, turn)
    }

    pub fn score(&mut self, color: Color) -> i32 {
        evaluate::score(&mut self.board, color)
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    pub fn last_search_stats(&self) -> Option<&SearchStats> {
        self.last_search_stats.as_ref()
    }

    /// Restores the configured starting position, rights and en passant
    /// target included.
    pub fn reset(&mut self) {
        self.board = self.config.starting_position.clone();
        self.move_history.clear();
        self.last_search_stats = None;
    }

    /// Moves the piece on `from` to `to` for the side to move.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<(ChessMove, MoveOutcome), EngineError> {
        self.ensure_in_progress()?;
        let piece = self
            .board
            .get(from)
            .ok_or(EngineError::InvalidMove { from, to })?;
        if piece.color() != self.board.turn() {
            return Err(EngineError::WrongTurn {
                turn: self.board.turn(),
            });
        }
        let chess_move = rules::can_make_move(&self.board, &piece, to)
            .ok_or(EngineError::InvalidMove { from, to })?;
        let outcome = self.commit(chess_move)?;
        Ok((chess_move, outcome))
    }

    /// Applies a move produced elsewhere (a search, or `valid_moves`). The
    /// move must be legal in the current position.
    pub fn apply_chess_move(&mut self, chess_move: ChessMove) -> Result<MoveOutcome, EngineError> {
        self.ensure_in_progress()?;
        let piece = chess_move.piece();
        if piece.color() != self.board.turn() {
            return Err(EngineError::WrongTurn {
                turn: self.board.turn(),
            });
        }
        let invalid = EngineError::InvalidMove {
            from: chess_move.from_square(),
            to: chess_move.to_square(),
        };
        match rules::can_make_move(&self.board, &piece, chess_move.to_square()) {
            Some(legal) if legal == chess_move => self.commit(chess_move),
            _ => Err(invalid),
        }
    }

    pub fn make_move_from_input(
        &mut self,
        input: MoveInput,
    ) -> Result<Option<(ChessMove, MoveOutcome)>, EngineError> {
        match input {
            MoveInput::Coordinate { from, to } => self.make_move(from, to).map(Some),
            MoveInput::UseEngine => self.make_best_move().map(Some),
            MoveInput::Quit => Ok(None),
        }
    }

    /// Searches for `color`'s best move on a copy of the board. `None` when
    /// there is no legal move or the budget ran out before any move was
    /// searched.
    pub fn best_move(&mut self, color: Color) -> Option<ChessMove> {
        self.try_best_move(color).ok()
    }

    pub fn try_best_move(&mut self, color: Color) -> Result<ChessMove, EngineError> {
        let mut searcher = Searcher::new(self.config.search);
        let result = searcher.search(&self.board, color);
        self.last_search_stats = Some(searcher.stats().clone());
        result.map_err(|error| EngineError::SearchError { error })
    }

    /// Starts a background search for `color`. The board may keep changing
    /// while it runs; the search works on the copy taken now.
    pub fn spawn_best_move(&self, color: Color) -> SearchHandle {
        spawn_search(self.board.clone(), color, self.config.search)
    }

    pub fn make_best_move(&mut self) -> Result<(ChessMove, MoveOutcome), EngineError> {
        self.ensure_in_progress()?;
        let turn = self.board.turn();
        let chess_move = self.try_best_move(turn)?;
        let outcome = self.commit(chess_move)?;
        Ok((chess_move, outcome))
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        match self.check_game_over() {
            Some(ending) => Err(EngineError::GameOver { ending }),
            None => Ok(()),
        }
    }

    fn commit(&mut self, chess_move: ChessMove) -> Result<MoveOutcome, EngineError> {
        chess_move
            .apply(&mut self.board)
            .map_err(|error| EngineError::BoardError { error })?;
        let next_turn = self.board.toggle_turn();
        self.move_history.push(chess_move);
        info!("{} played {}", next_turn.opposite(), chess_move);

        let ending = rules::game_ending(&self.board, next_turn);
        Ok(MoveOutcome {
            next_turn,
            check: rules::is_in_check(&self.board, next_turn),
            checkmate: ending == Some(GameEnding::Checkmate),
            stalemate: ending == Some(GameEnding::Stalemate),
        })
    }
}
