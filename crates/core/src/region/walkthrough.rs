use crate::{
    error::HexError,
    geometry::{
        point::Point,
        polygon::{self, Figure},
        raycast::point_in_polygon,
    },
    grid::Grid,
    hex::{hexagon::Hexagon, HexagonSet},
    region::{checked_outline, HexagonIndexSet, HexagonRegion, Outline},
    timed,
};
use log::{debug, trace};
use std::{collections::VecDeque, iter};

/// Collect every hexagon whose center is inside the figure, starting from an
/// automatically chosen seed
pub fn region<F: Figure + ?Sized>(
    grid: &Grid,
    figure: &F,
) -> Result<HexagonRegion, HexError> {
    let outline = checked_outline(grid, figure)?;
    let hexagons = match find_seed(grid, &outline) {
        Some(seed) => {
            timed!("Region walkthrough", walk(&outline.vertexes, seed))
        }
        None => {
            debug!("No hexagon center inside figure, region is empty");
            HexagonIndexSet::default()
        }
    };
    Ok(HexagonRegion::new(*grid, hexagons))
}

/// Collect every hexagon whose center is inside the figure and that can be
/// reached from the seed. The seed is moved onto this grid (by coordinates)
/// if it came from another one.
pub fn region_from_seed<F: Figure + ?Sized>(
    grid: &Grid,
    figure: &F,
    seed: Hexagon,
) -> Result<HexagonRegion, HexError> {
    let outline = checked_outline(grid, figure)?;
    let seed = Hexagon::new(*grid, seed.q(), seed.r());
    let hexagons =
        timed!("Region walkthrough", walk(&outline.vertexes, seed));
    Ok(HexagonRegion::new(*grid, hexagons))
}

/// Pick a hexagon to start walking from. Candidates, in order: the hexagon
/// under the average of all the vertices, then for each vertex the hexagon
/// under it followed by that hexagon's neighbors. The first candidate with
/// its center inside the figure wins.
fn find_seed(grid: &Grid, outline: &Outline) -> Option<Hexagon> {
    let centroid = polygon::centroid(&outline.vertexes)?;
    let near_vertexes = outline
        .hexagons
        .iter()
        .flat_map(|hexagon| iter::once(*hexagon).chain(hexagon.adjacents()));

    // The centroid sits within the vertexes' hull, but it can still round
    // one step past the codec's edge; skip it rather than fail
    let seed = grid
        .hexagon_at(centroid)
        .ok()
        .into_iter()
        .chain(near_vertexes)
        .find(|candidate| {
            let inside =
                point_in_polygon(&outline.vertexes, candidate.center());
            trace!("Seed candidate {} inside figure: {}", candidate, inside);
            inside
        });
    debug!("Picked seed {:?} for figure centered at {}", seed, centroid);
    seed
}

/// BFS out from the seed. Each hexagon is checked at most once; only the
/// ones whose center passes the containment check join the region and get
/// their neighbors queued.
fn walk(outline: &[Point], seed: Hexagon) -> HexagonIndexSet {
    let mut region = HexagonIndexSet::default();
    let mut visited = HexagonSet::default();
    let mut bfs_queue: VecDeque<Hexagon> = VecDeque::new();
    visited.insert(seed);
    bfs_queue.push_back(seed);

    while let Some(hexagon) = bfs_queue.pop_front() {
        if point_in_polygon(outline, hexagon.center()) {
            region.insert(hexagon);
            let visited = &mut visited;
            bfs_queue.extend(
                hexagon.adjacents().filter(move |adj| visited.insert(*adj)),
            );
        }
    }

    debug!(
        "Walkthrough from {} visited {} hexagons, {} inside",
        seed,
        visited.len(),
        region.len()
    );
    region
}
