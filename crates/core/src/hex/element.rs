//! Sides and vertices of hexagons. Each side is shared by two hexagons and
//! each vertex by three, so a naive `(hexagon, index)` pair would give the
//! same physical edge several different identities. Instead, every side or
//! vertex is rewritten at construction time to be expressed relative to its
//! **canonical owner**: of all the hexagons sharing it, the one with the
//! smallest `(q, r)` (compared lexicographically). After that, the derived
//! `Eq`/`Hash` are correct.

use crate::{
    geometry::point::Point,
    hex::{direction::HexDirection, hexagon::Hexagon},
};

/// One of the 6 edges of a hexagon. Side `i` of hexagon `h` is the edge
/// between `h` and `h.neighbor(i)`, so it's the same edge as side `i + 3` of
/// that neighbor. It runs from vertex `i` to vertex `i + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexagonSide {
    owner: Hexagon,
    direction: HexDirection,
}

impl HexagonSide {
    pub(crate) fn new(hexagon: Hexagon, direction: HexDirection) -> Self {
        let neighbor = hexagon.adjacent(direction);
        if axial_key(&neighbor) < axial_key(&hexagon) {
            Self {
                owner: neighbor,
                direction: direction.opposite(),
            }
        } else {
            Self {
                owner: hexagon,
                direction,
            }
        }
    }

    /// The canonical hexagon this side is expressed relative to
    pub fn owner(&self) -> Hexagon {
        self.owner
    }

    /// Index of this side on its [owner](Self::owner)
    pub fn index(&self) -> usize {
        self.direction.index()
    }

    /// The two hexagons that share this side. The owner always comes first.
    pub fn hexagons(&self) -> [Hexagon; 2] {
        [self.owner, self.owner.adjacent(self.direction)]
    }

    /// Pixel positions of the two vertices this side connects
    pub fn endpoints(&self) -> (Point, Point) {
        (
            self.owner.corner(self.direction),
            self.owner.corner(self.direction.next()),
        )
    }

    pub fn midpoint(&self) -> Point {
        let (start, end) = self.endpoints();
        (start + end) / 2.0
    }
}

/// One of the 6 corners of a hexagon. Vertex `i` of hexagon `h` is the point
/// where `h`, `h.neighbor(i - 1)` and `h.neighbor(i)` meet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexagonVertex {
    owner: Hexagon,
    direction: HexDirection,
}

impl HexagonVertex {
    pub(crate) fn new(hexagon: Hexagon, direction: HexDirection) -> Self {
        // The same corner, from the point of view of the other two hexagons
        // that touch it
        let candidates = [
            (hexagon, direction),
            (hexagon.adjacent(direction), direction.opposite().next()),
            (
                hexagon.adjacent(direction.previous()),
                direction.next().next(),
            ),
        ];
        let (owner, direction) = candidates
            .iter()
            .copied()
            .min_by_key(|(owner, _)| axial_key(owner))
            .unwrap_or((hexagon, direction));
        Self { owner, direction }
    }

    /// The canonical hexagon this vertex is expressed relative to
    pub fn owner(&self) -> Hexagon {
        self.owner
    }

    /// Index of this vertex on its [owner](Self::owner)
    pub fn index(&self) -> usize {
        self.direction.index()
    }

    /// The three hexagons that meet at this vertex. The owner always comes
    /// first.
    pub fn hexagons(&self) -> [Hexagon; 3] {
        [
            self.owner,
            self.owner.adjacent(self.direction.previous()),
            self.owner.adjacent(self.direction),
        ]
    }

    /// Pixel position of this vertex
    pub fn position(&self) -> Point {
        self.owner.corner(self.direction)
    }
}

fn axial_key(hexagon: &Hexagon) -> (i64, i64) {
    (hexagon.q(), hexagon.r())
}
