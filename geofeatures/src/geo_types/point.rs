use crate::coordinate::Coordinate;
use crate::crs::CoordinateReferenceSystem;
use crate::point::Point;
use crate::precision::Precision;

use super::to_coord;

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> From<&Point<C, P, R>>
    for geo_types::Point<f64>
{
    fn from(point: &Point<C, P, R>) -> Self {
        geo_types::Point(to_coord(point.coordinate()))
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> From<Point<C, P, R>>
    for geo_types::Point<f64>
{
    fn from(point: Point<C, P, R>) -> Self {
        Self::from(&point)
    }
}
