use serde::{Deserialize, Serialize};

/// Color identity of one of the seven catalog pieces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum PieceColor {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceColor {
    /// Number of distinct piece colors.
    pub const LEN: usize = 7;

    /// All colors, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::J,
        Self::L,
        Self::O,
        Self::S,
        Self::T,
        Self::Z,
    ];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::J => 'J',
            Self::L => 'L',
            Self::O => 'O',
            Self::S => 'S',
            Self::T => 'T',
            Self::Z => 'Z',
        }
    }
}

/// A single board cell.
///
/// `Shadow` marks the ghost projection of the falling piece; it never
/// participates in collision and is repainted on every board mutation.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
pub enum Cell {
    #[default]
    Empty,
    Shadow,
    Full(PieceColor),
}

impl Cell {
    /// The piece color of a `Full` cell.
    #[must_use]
    pub const fn color(self) -> Option<PieceColor> {
        match self {
            Self::Full(color) => Some(color),
            Self::Empty | Self::Shadow => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Shadow => '+',
            Self::Full(color) => color.as_char(),
        }
    }
}
