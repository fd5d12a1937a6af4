//! Regions are sets of hexagons, usually computed from a figure in pixel
//! space. There are two builders:
//!
//! - [walkthrough] finds every hexagon whose **center** falls inside the
//!   figure, by walking outwards from a seed hexagon
//! - [intersection] finds every hexagon that **overlaps** the figure at all,
//!   by scanning the figure's bounding box

pub mod intersection;
pub mod walkthrough;

use crate::{
    error::HexError,
    geometry::{
        point::Point,
        polygon::{self, Figure},
    },
    grid::Grid,
    hex::{hexagon::Hexagon, HexagonSet},
};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;

/// A set of hexagons that remembers insertion order
pub type HexagonIndexSet = IndexSet<Hexagon, FnvBuildHasher>;

/// A set of hexagons on a single grid. Iteration follows the order in which
/// the hexagons were found, but equality between regions ignores order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexagonRegion {
    grid: Grid,
    hexagons: HexagonIndexSet,
}

impl HexagonRegion {
    pub(crate) fn new(grid: Grid, hexagons: HexagonIndexSet) -> Self {
        Self { grid, hexagons }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.hexagons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexagons.is_empty()
    }

    pub fn contains(&self, hexagon: &Hexagon) -> bool {
        self.hexagons.contains(hexagon)
    }

    /// Is every hexagon in this region also in the other one?
    pub fn is_subset(&self, other: &HexagonRegion) -> bool {
        self.hexagons.iter().all(|hexagon| other.contains(hexagon))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hexagon> {
        self.hexagons.iter()
    }

    /// A reference to the underlying set
    pub fn hexagons(&self) -> &HexagonIndexSet {
        &self.hexagons
    }

    /// Move the hexagons out of this region
    pub fn into_hexagons(self) -> HexagonIndexSet {
        self.hexagons
    }

    /// Copy the hexagons into an unordered set
    pub fn to_set(&self) -> HexagonSet {
        self.hexagons.iter().copied().collect()
    }
}

impl IntoIterator for HexagonRegion {
    type Item = Hexagon;
    type IntoIter = indexmap::set::IntoIter<Hexagon>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexagons.into_iter()
    }
}

impl<'a> IntoIterator for &'a HexagonRegion {
    type Item = &'a Hexagon;
    type IntoIter = indexmap::set::Iter<'a, Hexagon>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexagons.iter()
    }
}

/// A figure's normalized boundary, along with the hexagon under each of its
/// vertexes
struct Outline {
    vertexes: Vec<Point>,
    hexagons: Vec<Hexagon>,
}

/// Normalize a figure's outline (see [polygon::outline]) and make sure each
/// vertex lands on a hexagon the grid's codec can represent. That keeps every
/// coordinate the builders touch far away from integer overflow.
fn checked_outline<F: Figure + ?Sized>(
    grid: &Grid,
    figure: &F,
) -> Result<Outline, HexError> {
    let vertexes = polygon::outline(figure)?;
    let hexagons = vertexes
        .iter()
        .map(|vertex| grid.hexagon_at(*vertex))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Outline { vertexes, hexagons })
}
