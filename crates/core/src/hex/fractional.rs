use crate::{error::HexError, grid::Grid, hex::hexagon::Hexagon};
use derive_more::Display;

/// A real-valued axial coordinate, i.e. a position that doesn't necessarily
/// fall on the hexagon lattice. These only show up as an intermediate step
/// when converting a pixel to a hexagon; [Self::round] snaps them back onto
/// the lattice.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "{};{}", "self.q", "self.r")]
pub struct FractionalHexagon {
    grid: Grid,
    q: f64,
    r: f64,
}

impl FractionalHexagon {
    pub(crate) const fn new(grid: Grid, q: f64, r: f64) -> Self {
        Self { grid, q, r }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    /// Snap to the nearest lattice hexagon.
    ///
    /// Rounding q, r and s independently can land on a triple that breaks
    /// `q + r + s = 0`, so instead we round all three, find the one that
    /// moved the furthest, and rederive it from the other two. The result
    /// always satisfies the cube invariant. When two residuals tie, the first
    /// of q, r, s (in that order) with the largest residual gets rederived.
    ///
    /// Errors if either coordinate is NaN or infinite, or if the rounded
    /// hexagon falls outside the codec's range (see [Grid::hexagon]).
    ///
    /// See https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(&self) -> Result<Hexagon, HexError> {
        if !self.q.is_finite() || !self.r.is_finite() {
            return Err(HexError::NonFiniteCoordinate);
        }

        let q = self.q.round();
        let r = self.r.round();
        let s = self.s().round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s()).abs();

        let (q, r) = if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r)
        } else if r_diff > s_diff {
            (q, -q - s)
        } else {
            // s is derived, so keeping q and r is all we need
            (q, r)
        };
        // Float to int casts saturate, so anything too big for an i64 still
        // lands outside the codec range and gets rejected there
        self.grid.hexagon(q as i64, r as i64)
    }
}
