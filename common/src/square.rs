//! Board coordinates.
//!
//! Squares are addressed by `(row, col)`. Row 0 is the eighth rank (black's
//! back rank) and row 7 is the first rank (white's back rank); col 0 is the
//! a-file. The named constants follow algebraic notation, so `A8` is `(0, 0)`
//! and `H1` is `(7, 7)`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate is off the board; use `try_new` or
    /// `offset` for untrusted input.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square displaced by `(d_row, d_col)`, or `None` when the
    /// result falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Index into a row-major 64 element table.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::new((index / 8) as u8, (index % 8) as u8)
    }

    /// Manhattan distance to the four center squares, measured from the
    /// board's geometric center (3.5, 3.5) and truncated.
    pub fn center_distance(self) -> i32 {
        let doubled = (7 - 2 * self.row as i32).abs() + (7 - 2 * self.col as i32).abs();
        doubled / 2
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_RE.captures(algebraic)?;
        let file = caps[1].to_ascii_lowercase().chars().next()?;
        let rank = caps[2].chars().next()?.to_digit(10)? as u8;
        let col = file as u8 - b'a';
        Some(Self::new(8 - rank, col))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        format!("{}{}", file, rank)
    }

    /// All 64 squares in row-major order, starting from A8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

macro_rules! define_rank {
    ($row:expr, $($name:ident => $col:expr),+) => {
        $(pub const $name: Square = Square::new($row, $col);)+
    };
}

define_rank!(0, A8 => 0, B8 => 1, C8 => 2, D8 => 3, E8 => 4, F8 => 5, G8 => 6, H8 => 7);
define_rank!(1, A7 => 0, B7 => 1, C7 => 2, D7 => 3, E7 => 4, F7 => 5, G7 => 6, H7 => 7);
define_rank!(2, A6 => 0, B6 => 1, C6 => 2, D6 => 3, E6 => 4, F6 => 5, G6 => 6, H6 => 7);
define_rank!(3, A5 => 0, B5 => 1, C5 => 2, D5 => 3, E5 => 4, F5 => 5, G5 => 6, H5 => 7);
define_rank!(4, A4 => 0, B4 => 1, C4 => 2, D4 => 3, E4 => 4, F4 => 5, G4 => 6, H4 => 7);
define_rank!(5, A3 => 0, B3 => 1, C3 => 2, D3 => 3, E3 => 4, F3 => 5, G3 => 6, H3 => 7);
define_rank!(6, A2 => 0, B2 => 1, C2 => 2, D2 => 3, E2 => 4, F2 => 5, G2 => 6, H2 => 7);
define_rank!(7, A1 => 0, B1 => 1, C1 => 2, D1 => 3, E1 => 4, F1 => 5, G1 => 6, H1 => 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_squares() {
        assert_eq!(A8, Square::new(0, 0));
        assert_eq!(H1, Square::new(7, 7));
        assert_eq!(E2, Square::new(6, 4));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Some(A1), Square::from_algebraic("a1"));
        assert_eq!(Some(A1), Square::from_algebraic("A1"));
        assert_eq!(Some(E5), Square::from_algebraic("e5"));
        assert_eq!(None, Square::from_algebraic("i9"));
        assert_eq!(None, Square::from_algebraic("e"));
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("h8", H8.to_algebraic());
        assert_eq!("e4", E4.to_algebraic());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Some(E3), E2.offset(-1, 0));
        assert_eq!(None, A1.offset(1, 0));
        assert_eq!(None, H8.offset(0, 1));
        assert_eq!(Some(B3), A1.offset(-2, 1));
    }

    #[test]
    fn test_center_distance() {
        assert_eq!(1, D4.center_distance());
        assert_eq!(1, E5.center_distance());
        assert_eq!(7, A1.center_distance());
        assert_eq!(7, H8.center_distance());
        assert_eq!(4, A4.center_distance());
    }

    #[test]
    fn test_index_round_trip_covers_board() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(64, squares.len());
        assert_eq!(A8, squares[0]);
        assert_eq!(H1, squares[63]);
    }
}
