//! Bounding rectangles.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Axis-aligned bounding rectangle of the `x` and `y` axes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum x.
    pub x_min: f64,
    /// Minimum y.
    pub y_min: f64,
    /// Maximum x.
    pub x_max: f64,
    /// Maximum y.
    pub y_max: f64,
}

impl Bounds {
    /// Creates a new instance.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Bounds of a single coordinate.
    pub fn from_coordinate(c: &impl Coordinate) -> Self {
        Self {
            x_min: c.x(),
            x_max: c.x(),
            y_min: c.y(),
            y_max: c.y(),
        }
    }

    /// Bounds of all the coordinates, or `None` if the iterator is empty.
    pub fn from_coordinates<'a, C: Coordinate + 'a>(
        mut coordinates: impl Iterator<Item = &'a C>,
    ) -> Option<Self> {
        let first = Self::from_coordinate(coordinates.next()?);
        Some(coordinates.fold(first, |acc, c| acc.merge(Self::from_coordinate(c))))
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Center of the rectangle.
    pub fn mid(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Whether the coordinate is inside the bounds or on their border.
    pub fn contains(&self, c: &impl Coordinate) -> bool {
        self.x_min <= c.x() && self.x_max >= c.x() && self.y_min <= c.y() && self.y_max >= c.y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate2D;

    #[test]
    fn from_coordinates() {
        let coordinates = [
            Coordinate2D::new(6.0, 1.0),
            Coordinate2D::new(1.0, 1.0),
            Coordinate2D::new(3.5, 4.0),
        ];
        assert_eq!(
            Bounds::from_coordinates(coordinates.iter()),
            Some(Bounds::new(1.0, 1.0, 6.0, 4.0))
        );
        assert_eq!(
            Bounds::from_coordinates(std::iter::empty::<&Coordinate2D>()),
            None
        );
    }

    #[test]
    fn merge_and_contains() {
        let b = Bounds::new(0.0, 0.0, 1.0, 1.0).merge(Bounds::new(-1.0, 0.5, 0.5, 2.0));
        assert_eq!(b, Bounds::new(-1.0, 0.0, 1.0, 2.0));
        assert_eq!(b.mid(), (0.0, 1.0));
        assert!(b.contains(&Coordinate2D::new(1.0, 2.0)));
        assert!(!b.contains(&Coordinate2D::new(1.1, 0.0)));
    }
}
