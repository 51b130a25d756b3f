pub mod castle_rights;
pub mod color;
pub mod error;
pub mod piece;

mod display;

use castle_rights::CastleRights;
use color::Color;
use common::Square;
use piece::{Piece, PieceKind};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Represents the state of a chess board: an 8x8 grid holding at most one
/// piece per square, plus the rules state that belongs to a position (side to
/// move, castle rights and the en passant target). Because all of it lives in
/// one value, a cloned board is a fully self-describing position that search
/// can mutate without touching the game it was copied from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    turn: Color,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            turn: Color::White,
            castle_rights: CastleRights::none(),
            en_passant_target: None,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        board.initialize_standard();
        board.castle_rights = CastleRights::all();
        board
    }

    /// Places the canonical starting layout. Black occupies rows 0 and 1,
    /// white rows 6 and 7.
    pub fn initialize_standard(&mut self) {
        self.clear();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for &color in Color::ALL.iter() {
                self.add_piece(Piece::new(kind, color, Square::new(color.back_row(), col)));
                self.add_piece(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::new(color.pawn_start_row(), col),
                ));
            }
        }
    }

    /// Empties all 64 squares. Rules state is left untouched.
    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// Bounds-safe lookup: off-board coordinates are simply empty.
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        Square::try_new(row, col).and_then(|square| self.get(square))
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Places `piece` on its own recorded square, overwriting any occupant.
    /// Callers capturing a piece must account for it before calling this.
    #[inline]
    pub fn add_piece(&mut self, piece: Piece) {
        let square = piece.square();
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    /// Clears a square, returning what was there. Off-board coordinates and
    /// empty squares are a no-op.
    pub fn remove_piece(&mut self, row: i8, col: i8) -> Option<Piece> {
        Square::try_new(row, col).and_then(|square| self.remove(square))
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// All pieces in row-major order, starting from A8.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flat_map(|row| row.iter().filter_map(|square| *square))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |piece| piece.color() == color)
    }

    pub fn piece_count(&self) -> usize {
        self.all_pieces().count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(|king| king.square())
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn lose_castle_rights(&mut self, lost_rights: CastleRights) -> CastleRights {
        self.castle_rights = self.castle_rights.without(lost_rights);
        self.castle_rights
    }

    /// Overwrites the castle rights wholesale. Used for position setup and to
    /// restore the rights recorded before a move when it is undone.
    pub fn set_castle_rights(&mut self, rights: CastleRights) {
        self.castle_rights = rights;
    }

    /// The square of the pawn that has just advanced two squares, if any.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::*;

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        let expected = [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ];

        for square in Square::all() {
            let expected_char = expected[square.row() as usize]
                .chars()
                .nth(square.col() as usize)
                .unwrap();
            let actual_char = board.get(square).map(|p| p.to_fen()).unwrap_or('.');
            assert_eq!(expected_char, actual_char, "mismatch on {}", square);
            if let Some(piece) = board.get(square) {
                assert_eq!(square, piece.square());
                assert!(!piece.has_moved());
            }
        }

        assert_eq!(32, board.piece_count());
        assert_eq!(Color::White, board.turn());
        assert_eq!(CastleRights::all(), board.castle_rights());
        assert_eq!(None, board.en_passant_target());
    }

    #[test]
    fn test_piece_at_is_bounds_safe() {
        let board = Board::starting_position();
        assert_eq!(None, board.piece_at(-1, 0));
        assert_eq!(None, board.piece_at(0, 8));
        assert_eq!(None, board.piece_at(100, -100));
        assert_eq!(Some(PieceKind::Rook), board.piece_at(0, 0).map(|p| p.kind()));
    }

    #[test]
    fn test_add_piece_overwrites_occupant() {
        let mut board = Board::starting_position();
        board.add_piece(Piece::new(PieceKind::Queen, Color::White, E7));
        let piece = board.get(E7).unwrap();
        assert!(piece.is(PieceKind::Queen, Color::White));
        assert_eq!(32, board.piece_count());
    }

    #[test]
    fn test_remove_piece_is_idempotent() {
        let mut board = Board::starting_position();
        assert!(board.remove_piece(6, 4).is_some());
        assert!(board.remove_piece(6, 4).is_none());
        assert!(board.remove_piece(9, 9).is_none());
        assert_eq!(31, board.piece_count());
    }

    #[test]
    fn test_clear_empties_every_square() {
        let mut board = Board::starting_position();
        board.clear();
        assert_eq!(0, board.piece_count());
        assert_eq!(None, board.king_square(Color::White));
    }

    #[test]
    fn test_king_square() {
        let board = Board::starting_position();
        assert_eq!(Some(E1), board.king_square(Color::White));
        assert_eq!(Some(E8), board.king_square(Color::Black));
    }

    #[test]
    fn test_clone_carries_rules_state() {
        let mut board = Board::starting_position();
        board.set_en_passant_target(Some(E4));
        board.lose_castle_rights(CastleRights::white_king());

        let copy = board.clone();
        board.set_en_passant_target(None);
        board.lose_castle_rights(CastleRights::all());

        assert_eq!(Some(E4), copy.en_passant_target());
        assert!(copy.castle_rights().contains(CastleRights::color(Color::Black)));
        assert!(!copy.castle_rights().contains(CastleRights::white_king()));
    }
}
