use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;
use strum::{Display, EnumIter, EnumString};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The layout of hexagons on a grid. Each orientation carries a fixed pair of
/// 2x2 matrices (stored row-major): the forward matrix `F` maps axial
/// coordinates to (unscaled) pixel space, and the backward matrix `B` is its
/// exact inverse, mapping pixel space back to axial coordinates. Both are
/// derived from the 60 degree geometry of a regular hexagon with a
/// center-to-vertex radius of 1.
///
/// See https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Flat-topped hexagons. Neighbors in `q` are stacked in columns.
    Flat,
    /// Pointy-topped hexagons. Neighbors in `q` line up in rows.
    Pointy,
}

impl Orientation {
    const FLAT_FORWARD: [f64; 4] = [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3];
    const FLAT_BACKWARD: [f64; 4] = [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0];
    const POINTY_FORWARD: [f64; 4] = [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0];
    const POINTY_BACKWARD: [f64; 4] =
        [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0];

    /// The axial-to-pixel matrix, row-major
    pub const fn forward(self) -> [f64; 4] {
        match self {
            Self::Flat => Self::FLAT_FORWARD,
            Self::Pointy => Self::POINTY_FORWARD,
        }
    }

    /// The pixel-to-axial matrix, row-major. Inverse of [Self::forward].
    pub const fn backward(self) -> [f64; 4] {
        match self {
            Self::Flat => Self::FLAT_BACKWARD,
            Self::Pointy => Self::POINTY_BACKWARD,
        }
    }

    pub fn forward_matrix(self) -> Matrix2<f64> {
        Matrix2::from_row_slice(&self.forward())
    }

    pub fn backward_matrix(self) -> Matrix2<f64> {
        Matrix2::from_row_slice(&self.backward())
    }

    /// Angle (in radians, counter-clockwise from `+x`) from a hexagon's
    /// center to its vertex at the given index. Flat hexagons have vertex 0
    /// pointing straight along `+x`; pointy hexagons are rotated back half a
    /// step, so that for both orientations vertex `i` sits between the
    /// directions of `neighbor(i - 1)` and `neighbor(i)`.
    pub(crate) fn vertex_angle(self, index: usize) -> f64 {
        let start = match self {
            Self::Flat => 0.0,
            Self::Pointy => -0.5,
        };
        FRAC_PI_3 * (index as f64 + start)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Flat
    }
}
