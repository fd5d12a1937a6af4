use crate::{geometry::point::Point, hex::orientation::Orientation};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a [Grid](crate::Grid). Two grids built from
/// the same config are equal, and every hexagon they produce is
/// interchangeable between them.
///
/// Any field that's missing during deserialization falls back to the classic
/// grid: flat-topped, 100x100 pixel hexagons, centered on the origin.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Whether hexagons sit flat-topped or pointy-topped
    pub orientation: Orientation,

    /// Distance from a hexagon's center to its vertices, in pixels. The two
    /// axes are scaled independently, so a non-square size gives squashed
    /// hexagons. Both components must be positive and finite.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Pixel position of the center of hexagon `(0, 0)`. Must be finite.
    #[validate(custom = "validate_origin")]
    pub origin: Point,
}

impl GridConfig {
    pub const CLASSIC: Self = Self {
        orientation: Orientation::Flat,
        size: Point::new(100.0, 100.0),
        origin: Point::ORIGIN,
    };
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("size"))
    }
}

fn validate_origin(origin: &Point) -> Result<(), ValidationError> {
    if origin.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("origin"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(&Point::new(1.0, 0.5)).is_ok());
        assert!(validate_size(&Point::new(0.0, 1.0)).is_err());
        assert!(validate_size(&Point::new(1.0, -1.0)).is_err());
        assert!(validate_size(&Point::new(f64::INFINITY, 1.0)).is_err());
        assert!(validate_size(&Point::new(1.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin(&Point::new(-1e9, 1e9)).is_ok());
        assert!(validate_origin(&Point::new(f64::NAN, 0.0)).is_err());
    }
}
