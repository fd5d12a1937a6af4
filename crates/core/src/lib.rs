//! Hexagrid is a computational geometry engine for hexagon tilings. It maps
//! between abstract axial hex coordinates and Euclidean pixel space, exposes
//! the structural pieces of each hexagon (sides, vertices, neighbors), and
//! computes the set of hexagons that cover or intersect an arbitrary polygon.
//!
//! ```
//! use hexagrid::{Grid, GridConfig, Orientation, Point, Polygon};
//!
//! let grid = Grid::new(GridConfig {
//!     orientation: Orientation::Pointy,
//!     size: Point::new(10.0, 10.0),
//!     origin: Point::new(0.0, 0.0),
//! })
//! .unwrap();
//!
//! let hexagon = grid.hexagon_at(Point::new(42.0, 17.0)).unwrap();
//! assert_eq!(grid.hexagon_at(hexagon.center()).unwrap(), hexagon);
//!
//! let square = Polygon::new(vec![
//!     (0.0, 0.0),
//!     (100.0, 0.0),
//!     (100.0, 100.0),
//!     (0.0, 100.0),
//! ]);
//! let region = grid.region(&square).unwrap();
//! assert!(!region.is_empty());
//! ```
//!
//! See [Grid] for the full query API, and [GridConfig] for how a grid is
//! configured.

mod config;
mod error;
mod geometry;
mod grid;
mod hex;
mod region;
mod util;

pub use crate::{
    config::GridConfig,
    error::HexError,
    geometry::{
        point::Point,
        polygon::{Figure, Polygon},
        raycast::point_in_polygon,
    },
    grid::Grid,
    hex::{
        hexagon::Hexagon, FractionalHexagon, HexCode, HexDirection,
        HexagonSet, HexagonSide, HexagonVertex, Morton64, Orientation,
    },
    region::HexagonRegion,
};
