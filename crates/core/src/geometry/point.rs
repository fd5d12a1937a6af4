use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. Pixel space is the Euclidean plane that a grid
/// is rendered onto; hexagon centers and vertices are expressed in it, and
/// the figures passed to region builders are defined in it too.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply component-wise. Grid sizes scale each axis independently, so
    /// this shows up everywhere we go between unit and pixel space.
    pub fn scale(self, factor: Point) -> Self {
        Self::new(self.x * factor.x, self.y * factor.y)
    }

    /// Divide component-wise. Inverse of [Self::scale].
    pub fn unscale(self, factor: Point) -> Self {
        Self::new(self.x / factor.x, self.y / factor.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Point {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Point> for nalgebra::Vector2<f64> {
    fn from(other: Point) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}
