use crate::{
    error::HexError,
    geometry::{
        point::Point,
        polygon::{Figure, Polygon},
        raycast,
    },
    grid::Grid,
    hex::{
        codec::HexCode,
        direction::HexDirection,
        element::{HexagonSide, HexagonVertex},
        HexagonSet,
    },
};
use derive_more::Display;
use nalgebra::Vector2;
use std::cmp;

/// A single cell of a hexagon grid, addressed by axial coordinates `(q, r)`.
/// The third cube coordinate is derived as `s = -(q + r)`, so `q + r + s = 0`
/// always holds.
///
/// Hexagons are cheap `Copy` values bound to the [Grid] that created them.
/// Two hexagons are equal iff their grids are equal and their coordinates are
/// equal. All pixel-space queries (center, corners, sides, vertices) go
/// through the bound grid.
///
/// A grid only hands out hexagons within its codec's range. Neighbors of the
/// outermost ones sit one step past it: they behave normally, except that
/// [Self::code] errors for them.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "{};{}", "self.q", "self.r")]
pub struct Hexagon {
    grid: Grid,
    q: i64,
    r: i64,
}

impl Hexagon {
    pub(crate) const fn new(grid: Grid, q: i64, r: i64) -> Self {
        Self { grid, q, r }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    pub fn r(&self) -> i64 {
        self.r
    }

    pub fn s(&self) -> i64 {
        -(self.q + self.r)
    }

    /// Pack this hexagon's coordinates into a single key, using the grid's
    /// codec. Fails if either coordinate is outside the codec's range.
    pub fn code(&self) -> Result<HexCode, HexError> {
        self.grid.codec().pack(self.q, self.r)
    }

    /// Pixel position of this hexagon's center:
    /// `origin + size ⊙ (F · (q, r))`
    pub fn center(&self) -> Point {
        let axial = Vector2::new(self.q as f64, self.r as f64);
        let unit = self.grid.orientation().forward_matrix() * axial;
        self.grid.origin() + Point::from(unit).scale(self.grid.size())
    }

    /// Pixel position of one corner. Caller guarantees the index is valid.
    pub(crate) fn corner(&self, direction: HexDirection) -> Point {
        let angle = self.grid.orientation().vertex_angle(direction.index());
        let offset = Point::new(angle.cos(), angle.sin());
        self.center() + offset.scale(self.grid.size())
    }

    /// Pixel positions of all 6 corners, in vertex index order
    pub fn corners(&self) -> [Point; 6] {
        HexDirection::COUNTER_CLOCKWISE.map(|direction| self.corner(direction))
    }

    /// The side shared with `neighbor(index)`. Errors if the index is outside
    /// `[0, 6)`.
    pub fn side(&self, index: usize) -> Result<HexagonSide, HexError> {
        Ok(HexagonSide::new(*self, HexDirection::from_index(index)?))
    }

    /// All 6 sides of this hexagon. Note that each returned side may be
    /// owned by a neighbor, see [HexagonSide].
    pub fn sides(&self) -> [HexagonSide; 6] {
        HexDirection::COUNTER_CLOCKWISE
            .map(|direction| HexagonSide::new(*self, direction))
    }

    /// The corner shared with `neighbor(index - 1)` and `neighbor(index)`.
    /// Errors if the index is outside `[0, 6)`.
    pub fn vertex(&self, index: usize) -> Result<HexagonVertex, HexError> {
        Ok(HexagonVertex::new(*self, HexDirection::from_index(index)?))
    }

    /// All 6 vertices of this hexagon, in index order
    pub fn vertexes(&self) -> [HexagonVertex; 6] {
        HexDirection::COUNTER_CLOCKWISE
            .map(|direction| HexagonVertex::new(*self, direction))
    }

    /// Get the neighbor at the given index, in the order defined by
    /// [HexDirection]. Errors if the index is outside `[0, 6)`.
    pub fn neighbor(&self, index: usize) -> Result<Hexagon, HexError> {
        Ok(self.adjacent(HexDirection::from_index(index)?))
    }

    /// Get the hexagon one step away in the given direction
    pub fn adjacent(&self, direction: HexDirection) -> Hexagon {
        let (dq, dr) = direction.offset();
        Self::new(self.grid, self.q + dq, self.r + dr)
    }

    /// Get an iterator of all the hexagons directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in index order.
    pub fn adjacents(self) -> impl Iterator<Item = Hexagon> {
        HexDirection::all().map(move |direction| self.adjacent(direction))
    }

    /// Get every hexagon within `layers` steps of this one, **excluding this
    /// one**. Ring `n` holds `6n` hexagons, so the result always has
    /// `3 * layers * (layers + 1)` entries.
    pub fn neighbors(&self, layers: u32) -> HexagonSet {
        let n = i64::from(layers);
        let count = 3 * layers as usize * (layers as usize + 1);
        let mut neighbors =
            HexagonSet::with_capacity_and_hasher(count, Default::default());
        for dq in -n..=n {
            let min_dr = cmp::max(-n, -dq - n);
            let max_dr = cmp::min(n, -dq + n);
            for dr in min_dr..=max_dr {
                if dq != 0 || dr != 0 {
                    neighbors.insert(Self::new(
                        self.grid,
                        self.q + dq,
                        self.r + dr,
                    ));
                }
            }
        }
        neighbors
    }

    /// Is the other hexagon exactly one step away from this one? Hexagons
    /// from different grids are never neighbors.
    pub fn neighbor_of(&self, other: &Hexagon) -> bool {
        self.grid == other.grid && self.distance_to(other) == 1
    }

    /// Number of steps it takes to walk from this hexagon to the other one.
    /// Only meaningful for hexagons of the same grid.
    pub fn distance_to(&self, other: &Hexagon) -> u64 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        cmp::max(dq, cmp::max(dr, ds))
    }

    /// Does this hexagon's outline contain the given pixel?
    pub fn contains(&self, point: Point) -> bool {
        raycast::point_in_polygon(&self.corners(), point)
    }

    /// Convert this hexagon's outline into a polygon, for rendering or
    /// further geometry
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners())
    }
}

impl Figure for Hexagon {
    fn vertexes(&self) -> Vec<Point> {
        self.corners().to_vec()
    }
}
