use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Which side a king move of two files toward `target_col` castles on.
    pub fn from_king_target(king_col: u8, target_col: u8) -> Option<Self> {
        match target_col as i8 - king_col as i8 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// The square the king passes over, which is also where the rook lands.
    pub fn transit_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }
}

/// Castling eligibility as six independent bits: for each color, whether the
/// king and each corner rook are still unmoved. Bits are only ever cleared
/// during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const fn white_kingside() -> Self {
        Self(0b10_0000)
    }

    pub const fn white_queenside() -> Self {
        Self(0b01_0000)
    }

    pub const fn white_king() -> Self {
        Self(0b00_1000)
    }

    pub const fn black_kingside() -> Self {
        Self(0b00_0100)
    }

    pub const fn black_queenside() -> Self {
        Self(0b00_0010)
    }

    pub const fn black_king() -> Self {
        Self(0b00_0001)
    }

    pub const fn all() -> Self {
        Self(
            Self::white_kingside().0
                | Self::white_queenside().0
                | Self::white_king().0
                | Self::black_kingside().0
                | Self::black_queenside().0
                | Self::black_king().0,
        )
    }

    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::White => Self::white_king(),
            Color::Black => Self::black_king(),
        }
    }

    pub fn rook(color: Color, side: CastleSide) -> Self {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::white_kingside(),
            (Color::White, CastleSide::Queenside) => Self::white_queenside(),
            (Color::Black, CastleSide::Kingside) => Self::black_kingside(),
            (Color::Black, CastleSide::Queenside) => Self::black_queenside(),
        }
    }

    /// Every bit belonging to one color.
    pub fn color(color: Color) -> Self {
        Self::king(color)
            | Self::rook(color, CastleSide::Kingside)
            | Self::rook(color, CastleSide::Queenside)
    }

    /// Both the king and the rook on `side` are still unmoved.
    pub fn allows(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::king(color) | Self::rook(color, side))
    }
}

impl std::ops::BitOr for CastleRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::Not for CastleRights {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::all().0)
    }
}
