use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8i8 {
            write!(f, "{} | ", 8 - row)?;
            for col in 0..8i8 {
                let c = match self.piece_at(row, col) {
                    Some(piece) => piece.to_fen(),
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

/// Builds a board from an 8x8 diagram. The first line is rank 8 (row 0), so
/// the diagram reads the same way it is stored. Upper case is white, lower
/// case black, `.` an empty square. The resulting board has no castle
/// rights, no en passant target and white to move.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (kind, color) = $crate::board::piece::PieceKind::from_fen(c)
                    .expect("Invalid character in chess position");
                let square = $crate::Square::new((i / 8) as u8, (i % 8) as u8);
                board.add_piece($crate::board::piece::Piece::new(kind, color, square));
            }
        }
        board
    }};
}
