//! Exact point-in-polygon testing, via horizontal raycasting. A ray is cast
//! from the test point towards `+x`, and each polygon edge it crosses flips a
//! parity flag (even-odd rule).
//!
//! Degenerate cases are resolved deterministically rather than with epsilon
//! comparisons:
//!
//! - If the point's `y` equals the `y` of either endpoint of an edge, the
//!   point is nudged up to the next representable `f64` before testing that
//!   edge. This keeps a ray that passes exactly through a vertex from being
//!   counted by both edges sharing that vertex.
//! - A point lying exactly on a non-horizontal edge counts as crossing that
//!   edge. In practice this means points on the right-hand boundary of a
//!   shape are inside it, and points on the left-hand boundary are outside.
//!   E.g. for the square `(0,0) (10,0) (10,10) (0,10)`, `(10, 5)` is inside
//!   and `(0, 5)` is outside.

use crate::geometry::point::Point;

/// Is the point inside the polygon defined by the given vertices? The polygon
/// is implicitly closed (the last vertex connects back to the first), and
/// should **not** repeat its first vertex at the end. Fewer than 3 vertices
/// never contain anything, and neither does a polygon with a NaN or infinite
/// vertex. A point with a NaN or infinite component is never inside.
pub fn point_in_polygon(polygon: &[Point], point: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    // The vertex nudge below can't step past infinity
    if !point.is_finite() || polygon.iter().any(|vertex| !vertex.is_finite()) {
        return false;
    }

    let mut contains = false;
    let mut start = polygon[polygon.len() - 1];
    for &end in polygon {
        if intersects_with_raycast(point, start, end) {
            contains = !contains;
        }
        start = end;
    }
    contains
}

/// Does a ray cast from the point towards `+x` cross the edge between the
/// two given points?
fn intersects_with_raycast(mut point: Point, start: Point, end: Point) -> bool {
    // Normalize so the edge always runs bottom to top
    let (start, end) = if start.y > end.y {
        (end, start)
    } else {
        (start, end)
    };

    while point.y == start.y || point.y == end.y {
        point.y = point.y.next_up();
    }

    if point.y < start.y || point.y > end.y {
        return false;
    }

    if start.x > end.x {
        if point.x > start.x {
            return false;
        }
        if point.x < end.x {
            return true;
        }
    } else {
        if point.x > end.x {
            return false;
        }
        if point.x < start.x {
            return true;
        }
    }

    // The point is inside the edge's horizontal extent, so compare the slope
    // from the edge start to the point against the slope of the edge itself
    let ray_slope = (point.y - start.y) / (point.x - start.x);
    let diagonal_slope = (end.y - start.y) / (end.x - start.x);
    ray_slope >= diagonal_slope
}

/// Do the two closed segments `a1-a2` and `b1-b2` cross each other? Parallel
/// (including collinear) segments never cross.
pub(crate) fn segments_cross(
    a1: Point,
    a2: Point,
    b1: Point,
    b2: Point,
) -> bool {
    let denominator =
        (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if denominator == 0.0 {
        return false;
    }

    let ua = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x))
        / denominator;
    let ub = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x))
        / denominator;
    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_square_inside_outside() {
        let square = square();
        assert!(point_in_polygon(&square, Point::new(5.0, 5.0)));
        assert!(point_in_polygon(&square, Point::new(0.1, 9.9)));
        assert!(!point_in_polygon(&square, Point::new(15.0, 5.0)));
        assert!(!point_in_polygon(&square, Point::new(-5.0, 5.0)));
        assert!(!point_in_polygon(&square, Point::new(5.0, 15.0)));
        assert!(!point_in_polygon(&square, Point::new(5.0, -0.5)));
    }

    #[test]
    fn test_square_boundary() {
        let square = square();
        // Right edge is inside, left edge is outside
        assert!(point_in_polygon(&square, Point::new(10.0, 5.0)));
        assert!(!point_in_polygon(&square, Point::new(0.0, 5.0)));
        // Repeated calls resolve the same way
        for _ in 0..3 {
            assert!(point_in_polygon(&square, Point::new(10.0, 5.0)));
        }
    }

    #[test]
    fn test_ray_through_vertex() {
        // Rays at y=5 pass exactly through the left and right vertices of
        // this diamond, so each of them touches two edges at once
        let diamond = vec![
            Point::new(5.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.5, 5.0),
        ];
        assert!(point_in_polygon(&diamond, Point::new(5.0, 5.0)));
        assert!(!point_in_polygon(&diamond, Point::new(0.0, 5.0)));
        assert!(!point_in_polygon(&diamond, Point::new(11.0, 5.0)));
    }

    #[test]
    fn test_concave() {
        // A "U" shape, open at the top
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(9.0, 0.0),
            Point::new(9.0, 9.0),
            Point::new(6.0, 9.0),
            Point::new(6.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 9.0),
            Point::new(0.0, 9.0),
        ];
        assert!(point_in_polygon(&u, Point::new(1.5, 6.0)));
        assert!(point_in_polygon(&u, Point::new(7.5, 6.0)));
        assert!(point_in_polygon(&u, Point::new(4.5, 1.5)));
        assert!(!point_in_polygon(&u, Point::new(4.5, 6.0)));
    }

    #[test]
    fn test_degenerate_polygons() {
        assert!(!point_in_polygon(&[], Point::ORIGIN));
        let line = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert!(!point_in_polygon(&line, Point::new(5.0, 5.0)));
        // Zero-area polygon: all vertices on one line
        let flat = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 10.0),
        ];
        assert!(!point_in_polygon(&flat, Point::new(2.0, 8.0)));
    }

    #[test]
    fn test_non_finite() {
        let spike = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, f64::INFINITY),
            Point::new(2.0, 0.0),
        ];
        assert!(!point_in_polygon(&spike, Point::new(1.0, f64::INFINITY)));
        assert!(!point_in_polygon(&spike, Point::new(1.0, 0.5)));

        let square = square();
        for point in [
            Point::new(5.0, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, 5.0),
            Point::new(5.0, f64::NAN),
        ] {
            assert!(!point_in_polygon(&square, point));
        }
        // The largest finite y nudges up to infinity, which ends the nudge
        assert!(!point_in_polygon(&square, Point::new(5.0, f64::MAX)));
    }

    #[test]
    fn test_segments_cross() {
        let o = Point::new(0.0, 0.0);
        assert!(segments_cross(
            o,
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0)
        ));
        assert!(!segments_cross(
            o,
            Point::new(0.4, 0.4),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0)
        ));
        // Parallel
        assert!(!segments_cross(
            o,
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0)
        ));
    }
}
