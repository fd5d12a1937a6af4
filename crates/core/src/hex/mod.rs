//! This module holds the hexagon coordinate types and everything that can be
//! derived from a single hexagon.
//!
//! ## Coordinate Systems
//!
//! Hexagrid deals with two coordinate systems.
//!
//! ### Axial Coordinates
//!
//! Each hexagon is addressed by two integers `(q, r)`, following the [axial
//! coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//! There is a third, derived coordinate `s = -(q + r)`, which makes `(q, r,
//! s)` a cube coordinate: **for every hexagon, `q + r + s = 0`.** We never
//! store `s`, we just derive it when it's needed (distances and rounding).
//!
//! The six neighbors of a hexagon are reached by adding one of six fixed
//! offsets, ordered counter-clockwise starting from `(+1, 0)`. See
//! [HexDirection].
//!
//! ### Pixel Coordinates
//!
//! Pixel space is the plane that the grid gets drawn on. A [Grid](crate::Grid)
//! anchors the conversion between the two systems with an
//! [Orientation] (flat-topped or pointy-topped hexagons), a cell size (scaled
//! independently on each axis) and an origin offset:
//!
//! ```text
//! pixel = origin + size ⊙ (F · (q, r))
//! (q, r) = B · ((pixel - origin) / size)
//! ```
//!
//! where `F` and `B` are the orientation's forward and backward matrices.
//! Converting back from pixels gives fractional axial coordinates, which are
//! then rounded onto the lattice (see [FractionalHexagon]).
//!
//! ## Sides and Vertices
//!
//! Side `i` of a hexagon is the edge it shares with `neighbor(i)`. It runs
//! from vertex `i` to vertex `i + 1`, which means vertex `i` is the corner
//! shared by the hexagon, `neighbor(i - 1)` and `neighbor(i)`. Since every
//! side belongs to two hexagons and every vertex to three, [HexagonSide] and
//! [HexagonVertex] are normalized to a canonical owner when created, so the
//! same physical side/vertex always compares equal.

pub mod codec;
pub mod direction;
pub mod element;
pub mod fractional;
pub mod hexagon;
pub mod orientation;

use self::hexagon::Hexagon;
use fnv::FnvBuildHasher;
use std::collections::HashSet;

pub use self::{
    codec::{HexCode, Morton64},
    direction::HexDirection,
    element::{HexagonSide, HexagonVertex},
    fractional::FractionalHexagon,
    orientation::Orientation,
};

/// A set of hexagons
pub type HexagonSet = HashSet<Hexagon, FnvBuildHasher>;
