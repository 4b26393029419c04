use crate::coordinate::Coordinate;
use crate::line_string::LineString;
use crate::linear_ring::LinearRing;

use super::to_coord;

impl<C: Coordinate, P, R> From<&LineString<C, P, R>> for geo_types::LineString<f64> {
    fn from(line: &LineString<C, P, R>) -> Self {
        geo_types::LineString::new(line.iter().map(to_coord).collect())
    }
}

impl<C: Coordinate, P, R> From<&LinearRing<C, P, R>> for geo_types::LineString<f64> {
    fn from(ring: &LinearRing<C, P, R>) -> Self {
        Self::from(&**ring)
    }
}
