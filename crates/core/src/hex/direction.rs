use crate::error::HexError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// The 6 directions in which hexagons line up side-to-side. For any given
/// hexagon, a direction can represent two useful things:
///
/// - Direction from the center to the midpoint of a single side
/// - Direction to a neighboring hexagon's center
///
/// Variants are named after their axial offset rather than a compass point,
/// because which way is "north" depends on the grid's orientation. They're
/// declared counter-clockwise starting at `+q`, and the declaration order
/// **is** the neighbor index: `Hexagon::neighbor(i)` steps in the direction
/// whose [Self::index] is `i`.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexDirection {
    /// `(+1, 0)`
    PlusQ,
    /// `(0, +1)`
    PlusR,
    /// `(-1, +1)`
    MinusS,
    /// `(-1, 0)`
    MinusQ,
    /// `(0, -1)`
    MinusR,
    /// `(+1, -1)`
    PlusS,
}

impl HexDirection {
    pub const COUNT: usize = 6;

    /// All directions, in index order
    pub const COUNTER_CLOCKWISE: [Self; Self::COUNT] = [
        Self::PlusQ,
        Self::PlusR,
        Self::MinusS,
        Self::MinusQ,
        Self::MinusR,
        Self::PlusS,
    ];

    /// Axial `(Δq, Δr)` offsets, in the same order as
    /// [Self::COUNTER_CLOCKWISE]
    const OFFSETS: [(i64, i64); Self::COUNT] =
        [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

    /// Get the direction at the given index. Indexes outside `[0, 6)` are
    /// rejected rather than wrapped.
    pub fn from_index(index: usize) -> Result<Self, HexError> {
        Self::COUNTER_CLOCKWISE
            .get(index)
            .copied()
            .ok_or(HexError::InvalidIndex(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The axial `(Δq, Δr)` step that moves one hexagon in this direction
    pub fn offset(self) -> (i64, i64) {
        Self::OFFSETS[self.index()]
    }

    /// The direction pointing the opposite way. Stepping in a direction and
    /// then its opposite always leads back to the start.
    pub fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// The next direction counter-clockwise
    pub fn next(self) -> Self {
        self.rotate(1)
    }

    /// The next direction clockwise
    pub fn previous(self) -> Self {
        // +5 instead of -1, since we're in unsigned land
        self.rotate(Self::COUNT - 1)
    }

    fn rotate(self, steps: usize) -> Self {
        Self::COUNTER_CLOCKWISE[(self.index() + steps) % Self::COUNT]
    }

    /// Iterate over all directions in index order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
