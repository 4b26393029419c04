use crate::coordinate::Coordinate;
use crate::crs::CoordinateReferenceSystem;
use crate::multi::{MultiLineString, MultiPoint, MultiPolygon};
use crate::precision::Precision;

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> From<&MultiPoint<C, P, R>>
    for geo_types::MultiPoint<f64>
{
    fn from(points: &MultiPoint<C, P, R>) -> Self {
        geo_types::MultiPoint(points.iter().map(Into::into).collect())
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> From<&MultiLineString<C, P, R>>
    for geo_types::MultiLineString<f64>
{
    fn from(lines: &MultiLineString<C, P, R>) -> Self {
        geo_types::MultiLineString(lines.iter().map(Into::into).collect())
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> From<&MultiPolygon<C, P, R>>
    for geo_types::MultiPolygon<f64>
{
    fn from(polygons: &MultiPolygon<C, P, R>) -> Self {
        geo_types::MultiPolygon(polygons.iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{line_string, point};

    use crate::coordinate::{Coordinate2D, Coordinate2DM};
    use crate::crs::Cartesian;
    use crate::multi::{MultiLineString, MultiPoint, MultiPolygon};
    use crate::precision::{Fixed, Floating};

    #[test]
    fn multi_point() {
        let points = MultiPoint::<Coordinate2DM, _, _>::from_raw(
            [[1.001, 1.001, 7.0], [2.002, 2.002, 8.0]],
            Fixed::new(100).expect("valid scale"),
            Cartesian,
        )
        .expect("valid");
        assert_eq!(
            geo_types::MultiPoint::from(&points),
            geo_types::MultiPoint(vec![point!(x: 1.0, y: 1.0), point!(x: 2.0, y: 2.0)])
        );
    }

    #[test]
    fn multi_line_string() {
        let raw: &[&[[f64; 2]]] = &[&[[0.0, 0.0], [1.0, 1.0]], &[[2.0, 2.0], [3.0, 3.0]]];
        let lines = MultiLineString::<Coordinate2D, _, _>::from_raw(raw, Floating, Cartesian)
            .expect("valid");
        assert_eq!(
            geo_types::MultiLineString::from(&lines),
            geo_types::MultiLineString(vec![
                line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
                line_string![(x: 2.0, y: 2.0), (x: 3.0, y: 3.0)],
            ])
        );
    }

    #[test]
    fn empty_multi_polygon() {
        let polygons = MultiPolygon::<Coordinate2D>::empty(Floating, Cartesian);
        assert!(geo_types::MultiPolygon::from(&polygons).0.is_empty());
    }
}
