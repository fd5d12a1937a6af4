use crate::{
    error::HexError,
    geometry::{point::Point, raycast},
};
use serde::{Deserialize, Serialize};

/// Anything with a polygonal boundary that can be handed to a region
/// builder. The boundary is an ordered list of vertexes; the first vertex
/// may be repeated as the last one to mark the figure as closed, in which
/// case the duplicate is ignored.
pub trait Figure {
    /// The ordered boundary vertexes of this figure
    fn vertexes(&self) -> Vec<Point>;
}

/// A simple polygon in pixel space, defined by its ordered boundary vertices.
/// Edges run between consecutive vertices, plus one closing edge from the
/// last vertex back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new<P: Into<Point>>(vertices: impl IntoIterator<Item = P>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Is the point inside this polygon? See [raycast::point_in_polygon] for
    /// how points that fall exactly on the boundary are resolved.
    pub fn contains(&self, point: Point) -> bool {
        raycast::point_in_polygon(&self.vertices, point)
    }
}

impl Figure for Polygon {
    fn vertexes(&self) -> Vec<Point> {
        self.vertices.clone()
    }
}

impl Figure for [Point] {
    fn vertexes(&self) -> Vec<Point> {
        self.to_vec()
    }
}

impl Figure for Vec<Point> {
    fn vertexes(&self) -> Vec<Point> {
        self.clone()
    }
}

/// Pull the boundary out of a figure in the form the region builders want:
/// the closing duplicate (if any) is dropped, and the figure must have at
/// least 3 distinct vertices, all of them finite.
pub(crate) fn outline<F: Figure + ?Sized>(
    figure: &F,
) -> Result<Vec<Point>, HexError> {
    let mut vertexes = figure.vertexes();
    if let Some(index) = vertexes.iter().position(|vertex| !vertex.is_finite())
    {
        return Err(HexError::NonFiniteVertex(index));
    }

    if vertexes.len() > 1 && vertexes.first() == vertexes.last() {
        vertexes.pop();
    }

    // Only need to know whether there are at least 3
    let mut distinct: Vec<Point> = Vec::with_capacity(3);
    for vertex in &vertexes {
        if !distinct.contains(vertex) {
            distinct.push(*vertex);
            if distinct.len() == 3 {
                break;
            }
        }
    }
    if distinct.len() < 3 {
        return Err(HexError::DegenerateFigure(distinct.len()));
    }

    Ok(vertexes)
}

/// Average of a set of vertices. Used to pick a starting point inside
/// (hopefully) a figure. Returns `None` for an empty list.
pub(crate) fn centroid(vertexes: &[Point]) -> Option<Point> {
    if vertexes.is_empty() {
        None
    } else {
        let sum = vertexes
            .iter()
            .fold(Point::ORIGIN, |acc, vertex| acc + *vertex);
        Some(sum / vertexes.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_strips_closing_vertex() {
        let open = Polygon::new(vec![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let closed = Polygon::new(vec![
            (0.0, 0.0),
            (4.0, 0.0),
            (0.0, 4.0),
            (0.0, 0.0),
        ]);

        assert_eq!(outline(&open).unwrap().len(), 3);
        assert_eq!(outline(&closed).unwrap(), outline(&open).unwrap());
    }

    #[test]
    fn test_outline_degenerate() {
        // Two distinct vertices, no matter how many times they repeat
        let line =
            Polygon::new(vec![(0.0, 0.0), (5.0, 5.0), (0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(outline(&line), Err(HexError::DegenerateFigure(2)));

        let empty = Polygon::default();
        assert_eq!(outline(&empty), Err(HexError::DegenerateFigure(0)));

        let point = vec![Point::new(1.0, 1.0)];
        assert_eq!(
            outline(point.as_slice()),
            Err(HexError::DegenerateFigure(1))
        );
    }

    #[test]
    fn test_outline_many_vertexes() {
        // A dense circle keeps every vertex, and a long run of repeats of
        // two points is still degenerate
        let circle: Vec<Point> = (0..10_000)
            .map(|i| {
                let angle = f64::from(i) * std::f64::consts::TAU / 10_000.0;
                Point::new(angle.cos(), angle.sin())
            })
            .collect();
        assert_eq!(outline(&circle).unwrap().len(), 10_000);

        let line: Vec<Point> = (0..10_000)
            .map(|i| Point::new(f64::from(i % 2), 0.0))
            .collect();
        assert_eq!(outline(&line), Err(HexError::DegenerateFigure(2)));
    }

    #[test]
    fn test_outline_non_finite() {
        let polygon = Polygon::new(vec![
            (0.0, 0.0),
            (4.0, 0.0),
            (f64::NAN, 4.0),
            (0.0, 4.0),
        ]);
        assert_eq!(outline(&polygon), Err(HexError::NonFiniteVertex(2)));
    }

    #[test]
    fn test_centroid() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(centroid(&square), Some(Point::new(5.0, 5.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_contains() {
        let triangle = Polygon::new(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(triangle.contains(Point::new(2.0, 2.0)));
        assert!(!triangle.contains(Point::new(8.0, 8.0)));
    }
}
