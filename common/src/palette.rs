//! Badge colours keyed by diagnosis rank.
//!
//! Ranks 1 to 3 get their own shade. Anything else (0, negative, past the
//! table) uses [`RankColor::default`], which is the rank 1 shade.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankColor {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl RankColor {
    pub fn for_rank(rank: i64) -> Self {
        match rank {
            1 => RankColor::Primary,
            2 => RankColor::Secondary,
            3 => RankColor::Tertiary,
            _ => RankColor::default(),
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            RankColor::Primary => "#2dff7a",
            RankColor::Secondary => "#7affb8",
            RankColor::Tertiary => "#b8ffd4",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            RankColor::Primary => (0x2d, 0xff, 0x7a),
            RankColor::Secondary => (0x7a, 0xff, 0xb8),
            RankColor::Tertiary => (0xb8, 0xff, 0xd4),
        }
    }
}
