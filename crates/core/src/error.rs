use crate::hex::codec::Morton64;
use thiserror::Error as ThisError;

/// Errors surfaced by grid operations. Every variant is an input or
/// programming error; no operation in this crate is ever retried.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// A coordinate pair can't be packed into a [HexCode](crate::HexCode)
    /// because one of its axes falls outside the codec's range.
    #[error(
        "coordinate ({q}, {r}) is outside the packable range [{}, {}]",
        Morton64::MIN,
        Morton64::MAX
    )]
    CoordinateOutOfRange { q: i64, r: i64 },

    /// A pixel or fractional axial coordinate has a NaN or infinite
    /// component, so it can't be snapped onto the lattice
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,

    /// A side, vertex or neighbor index outside `[0, 6)`
    #[error("index {0} is outside [0, 6)")]
    InvalidIndex(usize),

    /// A figure handed to a region builder doesn't have enough distinct
    /// vertices to enclose any area
    #[error("figure has {0} distinct vertices, at least 3 are required")]
    DegenerateFigure(usize),

    /// A figure vertex (identified by its position in the figure) has a NaN
    /// or infinite component
    #[error("figure vertex {0} is not finite")]
    NonFiniteVertex(usize),
}
