use crate::{
    config::GridConfig,
    error::HexError,
    geometry::{point::Point, polygon::Figure},
    hex::{
        codec::{HexCode, Morton64},
        fractional::FractionalHexagon,
        hexagon::Hexagon,
        orientation::Orientation,
    },
    region::{intersection, walkthrough, HexagonRegion},
};
use anyhow::Context;
use log::debug;
use nalgebra::Vector2;
use std::hash::{Hash, Hasher};
use validator::Validate;

/// The anchor of a hexagon coordinate system. A grid pins down how axial
/// coordinates map onto pixel space (`pixel = origin + size ⊙ (F · (q, r))`,
/// where `F` is the [Orientation]'s forward matrix), and is the entry point
/// for every query: looking up hexagons by coordinates, code or pixel, and
/// building regions out of figures.
///
/// Grids are small immutable values; copy them around freely. Two grids are
/// equal iff their orientation, size and origin are equal. The codec is
/// stateless, so it never takes part in equality or hashing.
#[derive(Copy, Clone, Debug)]
pub struct Grid {
    orientation: Orientation,
    size: Point,
    origin: Point,
    codec: Morton64,
}

impl Grid {
    /// Flat-topped 100x100 hexagons, with hexagon `(0, 0)` centered on the
    /// origin. Equivalent to building a grid from [GridConfig::default].
    pub const CLASSIC: Self = Self::from_config(GridConfig::CLASSIC);

    /// Build a new grid. Returns an error if the config is invalid; use
    /// `downcast::<ValidationErrors>()` on the error to see which fields
    /// failed.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        debug!("Creating grid with config {:?}", config);
        config.validate().context("invalid grid config")?;
        Ok(Self::from_config(config))
    }

    const fn from_config(config: GridConfig) -> Self {
        Self {
            orientation: config.orientation,
            size: config.size,
            origin: config.origin,
            codec: Morton64,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn codec(&self) -> &Morton64 {
        &self.codec
    }

    /// The config this grid was built from
    pub fn config(&self) -> GridConfig {
        GridConfig {
            orientation: self.orientation,
            size: self.size,
            origin: self.origin,
        }
    }

    /// Get the hexagon at the given axial coordinates. Errors if either
    /// coordinate is outside the codec's range, so every hexagon handed out
    /// here can be packed into a [HexCode].
    pub fn hexagon(&self, q: i64, r: i64) -> Result<Hexagon, HexError> {
        if self.codec.in_range(q, r) {
            Ok(Hexagon::new(*self, q, r))
        } else {
            Err(HexError::CoordinateOutOfRange { q, r })
        }
    }

    /// Get the hexagon identified by a code. Every code decodes to a
    /// hexagon, and `grid.hexagon_from_code(hexagon.code()?) == hexagon`.
    pub fn hexagon_from_code(&self, code: HexCode) -> Hexagon {
        let (q, r) = self.codec.unpack(code);
        Hexagon::new(*self, q, r)
    }

    /// Get a (not necessarily lattice) position in axial space. Nothing is
    /// checked until it's rounded.
    pub fn fractional_hexagon(&self, q: f64, r: f64) -> FractionalHexagon {
        FractionalHexagon::new(*self, q, r)
    }

    /// Convert a pixel into fractional axial coordinates, without rounding
    pub fn fractional_hexagon_at(&self, point: Point) -> FractionalHexagon {
        let unit: Vector2<f64> =
            (point - self.origin).unscale(self.size).into();
        let axial = self.orientation.backward_matrix() * unit;
        self.fractional_hexagon(axial.x, axial.y)
    }

    /// Get the hexagon that contains the given pixel. Every finite pixel
    /// within the codec's reach maps to exactly one hexagon; pixels that fall
    /// on a boundary are settled by the rounding rule in
    /// [FractionalHexagon::round], so the same input always gives the same
    /// hexagon.
    ///
    /// Errors if the pixel isn't finite, or if it lands on a hexagon outside
    /// the codec's range.
    pub fn hexagon_at(&self, point: Point) -> Result<Hexagon, HexError> {
        self.fractional_hexagon_at(point).round()
    }

    /// Wrap a set of hexagons in a region. The hexagons are taken as-is,
    /// without checking that they're on this grid or contiguous.
    pub fn region_from(
        &self,
        hexagons: impl IntoIterator<Item = Hexagon>,
    ) -> HexagonRegion {
        HexagonRegion::new(*self, hexagons.into_iter().collect())
    }

    /// Get every hexagon whose center lies inside the figure. This walks
    /// outwards from a seed hexagon near the figure, so it only costs as much
    /// as the figure's area (plus its border). A seed is picked automatically:
    /// the hexagon under the average of the figure's vertices, or failing
    /// that the first hexagon with its center inside the figure found under
    /// (or next to) one of the figure's vertices. If no such hexagon exists,
    /// the region is empty.
    ///
    /// **Only hexagons connected to the seed are found.** If the figure has
    /// separate lobes (or narrow necks that no hexagon center falls in),
    /// hexagons in the far lobes will be missed. Use
    /// [Self::region_by_intersection] for those figures.
    ///
    /// Errors if the figure has fewer than 3 distinct vertices, a non-finite
    /// vertex, or a vertex outside the codec's range.
    pub fn region<F: Figure + ?Sized>(
        &self,
        figure: &F,
    ) -> Result<HexagonRegion, HexError> {
        walkthrough::region(self, figure)
    }

    /// Same as [Self::region], but start the walk from the given hexagon. If
    /// the seed's center isn't inside the figure, the region is empty.
    pub fn region_from_seed<F: Figure + ?Sized>(
        &self,
        figure: &F,
        seed: Hexagon,
    ) -> Result<HexagonRegion, HexError> {
        walkthrough::region_from_seed(self, figure, seed)
    }

    /// Get every hexagon that overlaps the figure at all, rather than just
    /// the ones centered inside it. This is always a superset of
    /// [Self::region], and doesn't care whether the figure is connected, but
    /// it scans the figure's whole bounding box.
    ///
    /// Errors under the same conditions as [Self::region].
    pub fn region_by_intersection<F: Figure + ?Sized>(
        &self,
        figure: &F,
    ) -> Result<HexagonRegion, HexError> {
        intersection::region(self, figure)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.size == other.size
            && self.origin == other.origin
    }
}

// Validated grids never hold NaN, so float equality is reflexive here
impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.orientation.hash(state);
        for value in &[self.size.x, self.size.y, self.origin.x, self.origin.y] {
            hash_bits(*value).hash(state);
        }
    }
}

/// Bit pattern of a float, with `-0.0` folded into `0.0` so that values that
/// compare equal also hash equal
fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::hash_map::DefaultHasher;
    use validator::ValidationErrors;

    fn hash_of(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_classic() {
        assert_eq!(Grid::CLASSIC, Grid::new(GridConfig::default()).unwrap());
        assert_eq!(Grid::CLASSIC.config(), GridConfig::default());
        assert_eq!(Grid::default(), Grid::CLASSIC);
    }

    #[test]
    fn test_invalid_config() {
        let err = Grid::new(GridConfig {
            size: Point::new(0.0, 10.0),
            ..GridConfig::default()
        })
        .unwrap_err();
        let errors = err.downcast::<ValidationErrors>().unwrap();
        assert!(errors.errors().contains_key("size"));
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Grid::CLASSIC;
        let b = Grid::new(GridConfig {
            origin: Point::new(-0.0, 0.0),
            ..GridConfig::default()
        })
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let pointy = Grid::new(GridConfig {
            orientation: Orientation::Pointy,
            ..GridConfig::default()
        })
        .unwrap();
        assert_ne!(a, pointy);
        assert_ne!(a.hexagon(1, 1).unwrap(), pointy.hexagon(1, 1).unwrap());
    }

    #[test]
    fn test_hexagon_at_center() {
        for config in [
            GridConfig::default(),
            GridConfig {
                orientation: Orientation::Pointy,
                size: Point::new(7.5, 3.0),
                origin: Point::new(-40.0, 12.5),
            },
        ] {
            let grid = Grid::new(config).unwrap();
            for q in -5..=5 {
                for r in -5..=5 {
                    let hexagon = grid.hexagon(q, r).unwrap();
                    assert_eq!(
                        grid.hexagon_at(hexagon.center()).unwrap(),
                        hexagon
                    );
                }
            }
        }
    }

    #[test]
    fn test_hexagon_at_inside_corners() {
        // Points just inside each corner still belong to the hexagon
        let grid = Grid::CLASSIC;
        let hexagon = grid.hexagon(3, -2).unwrap();
        let center = hexagon.center();
        for corner in hexagon.corners().iter() {
            let point = center + (*corner - center) * 0.95;
            assert_eq!(grid.hexagon_at(point).unwrap(), hexagon);
        }
    }

    #[test]
    fn test_fractional_hexagon_at() {
        let grid = Grid::CLASSIC;
        let fractional = grid.fractional_hexagon_at(Point::new(75.0, 0.0));
        assert_approx_eq!(fractional.q(), 0.5);
        assert_approx_eq!(fractional.r(), -0.25);
    }

    #[test]
    fn test_boundary_is_deterministic() {
        // Exactly halfway between (0, 0) and (1, 0)
        let grid = Grid::CLASSIC;
        let a = grid.hexagon(0, 0).unwrap();
        let b = grid.hexagon(1, 0).unwrap();
        let midpoint = (a.center() + b.center()) / 2.0;
        let first = grid.hexagon_at(midpoint).unwrap();
        for _ in 0..10 {
            assert_eq!(grid.hexagon_at(midpoint).unwrap(), first);
        }
        assert!(first == a || first == b);
    }

    #[test]
    fn test_hexagon_from_code() {
        let grid = Grid::CLASSIC;
        for (q, r) in [(0, 0), (-1, 5), (Morton64::MAX, Morton64::MIN)] {
            let hexagon = grid.hexagon(q, r).unwrap();
            let code = hexagon.code().unwrap();
            assert_eq!(grid.hexagon_from_code(code), hexagon);
        }
    }

    #[test]
    fn test_region_from() {
        let grid = Grid::CLASSIC;
        let hexagons =
            vec![grid.hexagon(0, 0).unwrap(), grid.hexagon(9, 9).unwrap()];
        let region = grid.region_from(hexagons.clone());
        assert_eq!(region.len(), 2);
        assert!(hexagons.iter().all(|hexagon| region.contains(hexagon)));
        assert_eq!(region.grid(), &grid);
    }

    #[test]
    fn test_hexagon_out_of_range() {
        let grid = Grid::CLASSIC;
        assert!(grid.hexagon(Morton64::MIN, Morton64::MAX).is_ok());
        assert_eq!(
            grid.hexagon(i64::MAX, 0),
            Err(HexError::CoordinateOutOfRange { q: i64::MAX, r: 0 })
        );
        assert!(grid.hexagon(0, Morton64::MIN - 1).is_err());
    }

    #[test]
    fn test_hexagon_at_unreachable_pixels() {
        let grid = Grid::CLASSIC;
        assert_eq!(
            grid.hexagon_at(Point::new(f64::NAN, f64::NAN)),
            Err(HexError::NonFiniteCoordinate)
        );
        assert_eq!(
            grid.hexagon_at(Point::new(f64::INFINITY, 0.0)),
            Err(HexError::NonFiniteCoordinate)
        );
        assert!(matches!(
            grid.hexagon_at(Point::new(1e300, 0.0)),
            Err(HexError::CoordinateOutOfRange { .. })
        ));
        // Hexagons are 100px wide, so this is well past 2^31 columns
        assert!(matches!(
            grid.hexagon_at(Point::new(0.0, -1e12)),
            Err(HexError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_hexagons_at_codec_edge_keep_stepping() {
        // The furthest hexagon the grid hands out can still step (and
        // measure) past the edge without overflowing
        let grid = Grid::CLASSIC;
        let edge = grid.hexagon(Morton64::MAX, Morton64::MIN).unwrap();
        let outside = edge.neighbor(0).unwrap();
        assert_eq!(outside.q(), Morton64::MAX + 1);
        assert!(outside.code().is_err());
        assert_eq!(edge.distance_to(&outside), 1);
        assert_eq!(edge.neighbors(2).len(), 18);
        assert_eq!(edge.s(), -(Morton64::MAX + Morton64::MIN));
    }
}
