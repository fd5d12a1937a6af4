//! Pixel-space geometry: points, polygons, and the containment tests that the
//! region builders are built on. Nothing in here knows about hexagons.

pub mod point;
pub mod polygon;
pub mod raycast;
