use common::Square;

use super::color::Color;
use super::Board;
use crate::rules::movement;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    pub fn to_fen(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen(c: char) -> Option<(PieceKind, Color)> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((kind, color))
    }
}

/// A piece on the board. Pieces are plain values: the board owns them, and
/// search works on copies. `has_moved` only matters for pawns (double step)
/// and, informationally, for kings and rooks; castling eligibility is read
/// from the board's castle rights instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn row(&self) -> u8 {
        self.square.row()
    }

    #[inline]
    pub fn col(&self) -> u8 {
        self.square.col()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn with_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Relocates the piece and marks it as moved. Only move application calls
    /// this; legality probes never touch a piece's own state.
    pub fn move_to(&mut self, square: Square) {
        self.square = square;
        self.has_moved = true;
    }

    /// The queen this pawn becomes on the given square.
    pub fn promoted_to_queen(&self, square: Square) -> Piece {
        Piece {
            kind: PieceKind::Queen,
            color: self.color,
            square,
            has_moved: true,
        }
    }

    /// Whether this piece may legally move to `(row, col)`: geometry,
    /// occupancy, en passant for pawns, and the requirement that the mover's
    /// own king is not left attacked. Castling is arbitrated separately by
    /// `rules::can_castle`. Off-board targets are never legal.
    pub fn can_move_to(&self, row: i8, col: i8, board: &Board) -> bool {
        match Square::try_new(row, col) {
            Some(target) => movement::can_move_to(self, target, board),
            None => false,
        }
    }

    pub fn to_fen(&self) -> char {
        self.kind.to_fen(self.color)
    }
}
