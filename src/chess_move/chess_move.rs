use core::fmt;

use common::Square;

use crate::board::castle_rights::{CastleRights, CastleSide};
use crate::board::error::BoardError;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::rules;

use super::{castle, en_passant, pawn_promotion, standard};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MoveKind {
    Standard,
    Castle,
    EnPassant,
    Promotion,
}

/// A fully described move. Moves are inert values: they only change a board
/// through `apply`, and `undo` is their exact inverse.
///
/// `piece` is a snapshot of the mover as it stood before the move (including
/// its moved-flag), and `captures` is the captured piece as it stood on the
/// board. For en passant the captured pawn is not on `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    piece: Piece,
    to: Square,
    captures: Option<Piece>,
    kind: MoveKind,
}

/// Board state a move overwrites that cannot be derived from the move
/// itself. Returned by `apply`, consumed by `undo`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UndoInfo {
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castled_rook: Option<Piece>,
}

impl ChessMove {
    pub fn new(piece: Piece, to: Square, captures: Option<Piece>, kind: MoveKind) -> Self {
        Self {
            piece,
            to,
            captures,
            kind,
        }
    }

    /// Describes moving `piece` to `to` on `board`, classifying the move as
    /// castling, en passant or promotion from its shape alone. No legality is
    /// checked here.
    pub fn describe(board: &Board, piece: Piece, to: Square) -> Self {
        let from = piece.square();
        let occupant = board.get(to);
        let col_changed = from.col() != to.col();

        let (kind, captures) = match piece.kind() {
            PieceKind::King if CastleSide::from_king_target(from.col(), to.col()).is_some()
                && from.row() == to.row() =>
            {
                (MoveKind::Castle, None)
            }
            PieceKind::Pawn if col_changed && occupant.is_none() => {
                let captured = board.piece_at(from.row() as i8, to.col() as i8);
                (MoveKind::EnPassant, captured)
            }
            PieceKind::Pawn if to.row() == piece.color().promotion_row() => {
                (MoveKind::Promotion, occupant)
            }
            _ => (MoveKind::Standard, occupant),
        };

        Self::new(piece, to, captures, kind)
    }

    /// Describes the move of whatever stands on `from`, if anything.
    pub fn from_squares(board: &Board, from: Square, to: Square) -> Option<Self> {
        board.get(from).map(|piece| Self::describe(board, piece, to))
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn from_square(&self) -> Square {
        self.piece.square()
    }

    #[inline]
    pub fn to_square(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn captures(&self) -> Option<Piece> {
        self.captures
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn is_capture(&self) -> bool {
        self.captures.is_some()
    }

    pub fn is_castling(&self) -> bool {
        self.kind == MoveKind::Castle
    }

    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    pub fn is_promotion(&self) -> bool {
        self.kind == MoveKind::Promotion
    }

    /// Applies this move, including the castle rights and en passant target
    /// bookkeeping. The turn is not switched.
    #[must_use = "move application may fail"]
    pub fn apply(&self, board: &mut Board) -> Result<UndoInfo, BoardError> {
        let mut undo_info = UndoInfo {
            castle_rights: board.castle_rights(),
            en_passant_target: board.en_passant_target(),
            castled_rook: None,
        };

        match self.kind {
            MoveKind::Standard => standard::apply(self, board)?,
            MoveKind::Promotion => pawn_promotion::apply(self, board)?,
            MoveKind::EnPassant => en_passant::apply(self, board)?,
            MoveKind::Castle => undo_info.castled_rook = Some(castle::apply(self, board)?),
        }

        rules::update_rights_after_move(board, self);
        Ok(undo_info)
    }

    /// Reverts `apply`, given the `UndoInfo` it returned. Must be called on the
    /// board exactly as `apply` left it.
    #[must_use = "move undo may fail"]
    pub fn undo(&self, board: &mut Board, undo_info: UndoInfo) -> Result<(), BoardError> {
        match self.kind {
            MoveKind::Standard => standard::undo(self, board)?,
            MoveKind::Promotion => pawn_promotion::undo(self, board)?,
            MoveKind::EnPassant => en_passant::undo(self, board)?,
            MoveKind::Castle => castle::undo(self, board, undo_info.castled_rook)?,
        }

        board.set_castle_rights(undo_info.castle_rights);
        board.set_en_passant_target(undo_info.en_passant_target);
        Ok(())
    }

    /// Coordinate notation, e.g. `e2e4`. Promotions append `q`.
    pub fn to_coordinate(&self) -> String {
        let suffix = if self.is_promotion() { "q" } else { "" };
        format!(
            "{}{}{}",
            self.from_square().to_algebraic(),
            self.to.to_algebraic(),
            suffix
        )
    }
}

/// Checks that `square` holds a piece of the same kind and color as
/// `expected`, which is how apply/undo detect being handed the wrong board.
pub(super) fn holds(board: &Board, square: Square, expected: &Piece) -> bool {
    match board.get(square) {
        Some(piece) => piece.kind() == expected.kind() && piece.color() == expected.color(),
        None => false,
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let move_type = match self.kind {
            MoveKind::Standard => "Move",
            MoveKind::Promotion => "Promote to Queen",
            MoveKind::EnPassant => "En Passant",
            MoveKind::Castle => "Castle",
        };
        let capture = match self.captures {
            Some(captured) => format!(" capturing {}", captured.to_fen()),
            None => "".to_string(),
        };
        write!(
            f,
            "{} {} {}{}{}",
            move_type,
            self.piece.to_fen(),
            self.from_square(),
            self.to,
            capture
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::chess_position;
    use common::*;

    #[test]
    fn test_describe_classifies_special_moves() {
        let mut board = chess_position! {
            r...k..r
            ...P....
            ........
            ...pP...
            ........
            ........
            ........
            R...K..R
        };
        board.set_en_passant_target(Some(D5));

        let castle = ChessMove::from_squares(&board, E1, G1).unwrap();
        assert!(castle.is_castling());
        assert_eq!(None, castle.captures());

        let en_passant = ChessMove::from_squares(&board, E5, D6).unwrap();
        assert!(en_passant.is_en_passant());
        assert_eq!(D5, en_passant.captures().unwrap().square());

        let promotion = ChessMove::from_squares(&board, D7, D8).unwrap();
        assert!(promotion.is_promotion());

        let capture_promotion = ChessMove::from_squares(&board, D7, E8).unwrap();
        assert!(capture_promotion.is_promotion());
        assert!(capture_promotion
            .captures()
            .unwrap()
            .is(PieceKind::King, Color::Black));

        let rook_move = ChessMove::from_squares(&board, A1, A8).unwrap();
        assert_eq!(MoveKind::Standard, rook_move.kind());
        assert!(rook_move.is_capture());

        assert_eq!(None, ChessMove::from_squares(&board, C3, C4));
    }

    #[test]
    fn test_to_coordinate() {
        let board = Board::starting_position();
        let chess_move = ChessMove::from_squares(&board, E2, E4).unwrap();
        assert_eq!("e2e4", chess_move.to_coordinate());
    }
}
