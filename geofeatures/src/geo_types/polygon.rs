use crate::coordinate::Coordinate;
use crate::crs::CoordinateReferenceSystem;
use crate::polygon::Polygon;
use crate::precision::Precision;

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> From<&Polygon<C, P, R>>
    for geo_types::Polygon<f64>
{
    fn from(polygon: &Polygon<C, P, R>) -> Self {
        geo_types::Polygon::new(
            polygon.outer_ring().into(),
            polygon.inner_rings().iter().map(Into::into).collect(),
        )
    }
}
