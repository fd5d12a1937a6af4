use crate::{
    error::HexError,
    geometry::{
        point::Point,
        polygon::Figure,
        raycast::{point_in_polygon, segments_cross},
    },
    grid::Grid,
    hex::hexagon::Hexagon,
    region::{checked_outline, HexagonIndexSet, HexagonRegion},
    timed,
};
use log::debug;
use std::cmp;

/// Collect every hexagon that overlaps the figure, by checking each hexagon
/// in the figure's axial bounding box
pub fn region<F: Figure + ?Sized>(
    grid: &Grid,
    figure: &F,
) -> Result<HexagonRegion, HexError> {
    let outline = checked_outline(grid, figure)?;
    let bounds = AxialBounds::around(&outline.hexagons);
    debug!(
        "Scanning q in [{}, {}], r in [{}, {}] for intersections",
        bounds.min_q, bounds.max_q, bounds.min_r, bounds.max_r
    );

    let hexagons = timed!("Region intersection scan", {
        let mut hexagons = HexagonIndexSet::default();
        for q in bounds.min_q..=bounds.max_q {
            for r in bounds.min_r..=bounds.max_r {
                // The grown box may reach one step past the codec's range
                let hexagon = Hexagon::new(*grid, q, r);
                if intersects(&hexagon, &outline.vertexes) {
                    hexagons.insert(hexagon);
                }
            }
        }
        hexagons
    });
    debug!("Intersection scan found {} hexagons", hexagons.len());
    Ok(HexagonRegion::new(*grid, hexagons))
}

/// Inclusive range of axial coordinates to scan
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct AxialBounds {
    min_q: i64,
    max_q: i64,
    min_r: i64,
    max_r: i64,
}

impl AxialBounds {
    /// The bounding box of the hexagons under each vertex, grown by one in
    /// every direction.
    ///
    /// One step is enough for any figure. Pixel to axial conversion is
    /// linear, so every point of the figure has fractional `q` (and `r`)
    /// between the smallest and largest fractional `q` of its vertices.
    /// Rounding moves a vertex's `q` by less than 1, so the rounded bounds
    /// are off by at most 1 from the true ones. Hexagons that only touch the
    /// figure with their edge sit at most one more step out, which the
    /// corner checks in [intersects] pick up from within the grown box.
    fn around(vertex_hexagons: &[Hexagon]) -> Self {
        let mut bounds = Self {
            min_q: i64::MAX,
            max_q: i64::MIN,
            min_r: i64::MAX,
            max_r: i64::MIN,
        };
        for hexagon in vertex_hexagons {
            bounds.min_q = cmp::min(bounds.min_q, hexagon.q());
            bounds.max_q = cmp::max(bounds.max_q, hexagon.q());
            bounds.min_r = cmp::min(bounds.min_r, hexagon.r());
            bounds.max_r = cmp::max(bounds.max_r, hexagon.r());
        }
        Self {
            min_q: bounds.min_q - 1,
            max_q: bounds.max_q + 1,
            min_r: bounds.min_r - 1,
            max_r: bounds.max_r + 1,
        }
    }
}

/// Does the hexagon overlap the figure? Any one of these is enough:
///
/// - The hexagon's center is inside the figure
/// - One of the hexagon's corners is inside the figure
/// - One of the figure's vertices is inside the hexagon
/// - One of the hexagon's sides crosses one of the figure's edges, which
///   covers an edge slicing through the hexagon between two of its corners
fn intersects(hexagon: &Hexagon, outline: &[Point]) -> bool {
    let corners = hexagon.corners();
    point_in_polygon(outline, hexagon.center())
        || corners
            .iter()
            .any(|corner| point_in_polygon(outline, *corner))
        || outline
            .iter()
            .any(|vertex| point_in_polygon(&corners, *vertex))
        || edges(&corners).any(|(a1, a2)| {
            edges(outline).any(|(b1, b2)| segments_cross(a1, a2, b1, b2))
        })
}

/// Every edge of a closed polygon, including the closing one
fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(start, end)| (*start, *end))
}
