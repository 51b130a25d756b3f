use std::sync::mpsc::{self, Receiver, TryRecvError};

use log::debug;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;

use super::{SearchConfig, SearchError, Searcher};

/// The receiving end of a search running on the rayon pool. The result is
/// delivered exactly once.
pub struct SearchHandle {
    receiver: Receiver<Result<ChessMove, SearchError>>,
}

impl SearchHandle {
    /// Blocks until the search finishes.
    pub fn wait(self) -> Result<ChessMove, SearchError> {
        self.receiver
            .recv()
            .unwrap_or(Err(SearchError::WorkerDisconnected))
    }

    /// Returns the result if the search has finished, without blocking.
    pub fn try_result(&self) -> Option<Result<ChessMove, SearchError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SearchError::WorkerDisconnected)),
        }
    }
}

/// Starts a search for `color` on a worker thread. The worker owns `board`,
/// so the caller is free to keep playing on its own copy.
pub fn spawn_search(board: Board, color: Color, config: SearchConfig) -> SearchHandle {
    let (sender, receiver) = mpsc::channel();
    rayon::spawn(move || {
        let mut searcher = Searcher::new(config);
        let result = searcher.search(&board, color);
        if sender.send(result).is_err() {
            debug!("search finished after its handle was dropped");
        }
    });
    SearchHandle { receiver }
}
