//! Collections of geometries of the same kind.
//!
//! [`MultiPoint`], [`MultiLineString`] and [`MultiPolygon`] are all the same [`Multi`] container parameterized by
//! the element type. The container owns the precision policy and the reference system, and every element must
//! have been created with the same ones.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::crs::{same_crs, serialize_name, Cartesian, CoordinateReferenceSystem};
use crate::error::GeometryError;
use crate::geometry::{CollectionElement, Geometry, GeometryType};
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::precision::{same_precision, Floating, Precision};

/// Ordered sequence of geometries of the same type sharing one precision policy and reference system.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "G: Serialize, G::Precision: Serialize"))]
pub struct Multi<G: CollectionElement> {
    elements: Vec<G>,
    precision: G::Precision,
    #[serde(serialize_with = "serialize_name")]
    crs: G::Crs,
}

/// Set of points.
pub type MultiPoint<C, P = Floating, R = Cartesian> = Multi<Point<C, P, R>>;
/// Set of line strings.
pub type MultiLineString<C, P = Floating, R = Cartesian> = Multi<LineString<C, P, R>>;
/// Set of polygons.
pub type MultiPolygon<C, P = Floating, R = Cartesian> = Multi<Polygon<C, P, R>>;

impl<G: CollectionElement> Multi<G> {
    /// Creates a new collection from constructed elements.
    ///
    /// Fails with [`GeometryError::IncompatiblePrecisionOrReferenceSystem`] wrapped into
    /// [`GeometryError::AtIndex`] if an element was created with a different precision or reference system.
    pub fn new(
        elements: impl IntoIterator<Item = G>,
        precision: G::Precision,
        crs: G::Crs,
    ) -> Result<Self, GeometryError> {
        let elements: Vec<G> = elements.into_iter().collect();
        if let Some(index) = elements
            .iter()
            .position(|e| *e.precision() != precision || *e.crs() != crs)
        {
            let err = GeometryError::IncompatiblePrecisionOrReferenceSystem.at(index);
            log::debug!("Failed to create {}: {err}", G::COLLECTION_TYPE);
            return Err(err);
        }

        Ok(Self {
            elements,
            precision,
            crs,
        })
    }

    /// Creates a collection without elements.
    pub fn empty(precision: G::Precision, crs: G::Crs) -> Self {
        Self {
            elements: vec![],
            precision,
            crs,
        }
    }

    /// Creates every element with `create`, tagging the first failure with the element index.
    fn build<T>(
        raw: impl IntoIterator<Item = T>,
        precision: G::Precision,
        crs: G::Crs,
        mut create: impl FnMut(T) -> Result<G, GeometryError>,
    ) -> Result<Self, GeometryError> {
        let elements = raw
            .into_iter()
            .enumerate()
            .map(|(index, item)| create(item).map_err(|err| err.at(index)))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| log::debug!("Failed to create {}: {err}", G::COLLECTION_TYPE))?;

        Ok(Self {
            elements,
            precision,
            crs,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<&G, GeometryError> {
        self.elements
            .get(index)
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.elements.iter()
    }

    /// Elements of the collection.
    pub fn elements(&self) -> &[G] {
        &self.elements
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Multi<Point<C, P, R>> {
    /// Creates a point for every coordinate.
    pub fn from_coordinates(
        coordinates: impl IntoIterator<Item = C>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::build(coordinates, precision, crs, |c| Point::new(c, precision, crs))
    }

    /// Same as [`MultiPoint::from_coordinates`], but takes anything convertible into the coordinate type.
    pub fn from_raw<T: Into<C>>(
        raw: impl IntoIterator<Item = T>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::from_coordinates(raw.into_iter().map(Into::into), precision, crs)
    }

    /// Creates a copy of the collection with every point stored with another `precision`.
    pub fn with_precision<P2: Precision>(
        &self,
        precision: P2,
    ) -> Result<MultiPoint<C, P2, R>, GeometryError> {
        Multi::<Point<C, P2, R>>::build(self.iter(), precision, self.crs, |point| {
            point.with_precision(precision)
        })
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Multi<LineString<C, P, R>> {
    /// Creates a line string for every coordinate sequence.
    pub fn from_coordinates(
        lines: impl IntoIterator<Item = Vec<C>>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::build(lines, precision, crs, |line| {
            LineString::new(line, precision, crs)
        })
    }

    /// Same as [`MultiLineString::from_coordinates`], but takes anything convertible into the coordinate type.
    pub fn from_raw<T: Into<C> + Copy>(
        lines: &[&[T]],
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::from_coordinates(
            lines
                .iter()
                .map(|line| line.iter().map(|&c| c.into()).collect()),
            precision,
            crs,
        )
    }

    /// Creates a copy of the collection with every line string stored with another `precision`.
    pub fn with_precision<P2: Precision>(
        &self,
        precision: P2,
    ) -> Result<MultiLineString<C, P2, R>, GeometryError> {
        Multi::<LineString<C, P2, R>>::build(self.iter(), precision, self.crs, |line| {
            line.with_precision(precision)
        })
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Multi<Polygon<C, P, R>> {
    /// Creates a polygon for every `(outer ring, inner rings)` pair. Open rings are closed.
    pub fn from_coordinates(
        polygons: impl IntoIterator<Item = (Vec<C>, Vec<Vec<C>>)>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::build(polygons, precision, crs, |(outer, inner)| {
            Polygon::from_coordinates(outer, inner, precision, crs)
        })
    }

    /// Same as [`MultiPolygon::from_coordinates`], but takes anything convertible into the coordinate type.
    #[allow(clippy::type_complexity)]
    pub fn from_raw<T: Into<C> + Copy>(
        polygons: &[(&[T], &[&[T]])],
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::build(polygons, precision, crs, |(outer, inner)| {
            Polygon::from_raw(outer, inner, precision, crs)
        })
    }

    /// Creates a copy of the collection with every polygon stored with another `precision`.
    pub fn with_precision<P2: Precision>(
        &self,
        precision: P2,
    ) -> Result<MultiPolygon<C, P2, R>, GeometryError> {
        Multi::<Polygon<C, P2, R>>::build(self.iter(), precision, self.crs, |polygon| {
            polygon.with_precision(precision)
        })
    }
}

impl<'a, G: CollectionElement> IntoIterator for &'a Multi<G> {
    type Item = &'a G;
    type IntoIter = std::slice::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<G1, G2> PartialEq<Multi<G2>> for Multi<G1>
where
    G1: CollectionElement + PartialEq<G2>,
    G2: CollectionElement,
{
    fn eq(&self, other: &Multi<G2>) -> bool {
        same_crs(&self.crs, &other.crs)
            && same_precision(&self.precision, &other.precision)
            && self.elements == other.elements
    }
}

impl<G: CollectionElement> Geometry for Multi<G> {
    type Coordinate = G::Coordinate;
    type Precision = G::Precision;
    type Crs = G::Crs;

    const TOPOLOGICAL_DIMENSION: crate::geometry::Dimension = G::TOPOLOGICAL_DIMENSION;

    fn geometry_type(&self) -> GeometryType {
        G::COLLECTION_TYPE
    }

    fn precision(&self) -> &G::Precision {
        &self.precision
    }

    fn crs(&self) -> &G::Crs {
        &self.crs
    }

    fn iter_coordinates(&self) -> impl Iterator<Item = &'_ G::Coordinate> {
        self.elements.iter().flat_map(|e| e.iter_coordinates())
    }
}

impl<G: CollectionElement + Display> Display for Multi<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}([", G::COLLECTION_TYPE)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::bounds::Bounds;
    use crate::coordinate::{Coordinate2D, Coordinate3D};
    use crate::crs::Ellipsoidal;
    use crate::error::{Axis, RingError};
    use crate::geometry::Dimension;
    use crate::precision::Fixed;

    fn fixed() -> Fixed {
        Fixed::new(100).expect("valid scale")
    }

    fn point<P: Precision>(x: f64, y: f64, precision: P) -> Point<Coordinate2D, P> {
        Point::new(Coordinate2D::new(x, y), precision, Cartesian).expect("valid")
    }

    #[test]
    fn multi_point_from_raw_values() {
        let multi_point = MultiPoint::<Coordinate2D, _, _>::from_raw(
            [[1.001, 1.001], [2.002, 2.002]],
            fixed(),
            Cartesian,
        )
        .expect("valid");

        assert_eq!(multi_point.len(), 2);
        assert_eq!(multi_point.get(0), Ok(&point(1.0, 1.0, fixed())));
        assert_eq!(multi_point.get(1), Ok(&point(2.0, 2.0, fixed())));
        assert_matches!(
            multi_point.get(2),
            Err(GeometryError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            multi_point.to_string(),
            "MultiPoint([Point(x: 1.0, y: 1.0), Point(x: 2.0, y: 2.0)])"
        );
    }

    #[test]
    fn from_elements() {
        let points = [point(1.0, 1.0, Floating), point(2.0, 2.0, Floating)];
        let multi_point = MultiPoint::new(points, Floating, Cartesian).expect("valid");
        let expected =
            MultiPoint::<Coordinate2D, _, _>::from_raw([[1.0, 1.0], [2.0, 2.0]], Floating, Cartesian)
                .expect("valid");

        assert_eq!(multi_point, expected);
        assert_eq!(multi_point.iter().collect::<Vec<_>>(), points.iter().collect::<Vec<_>>());
    }

    #[test]
    fn rejects_element_with_different_precision() {
        let points = [
            point(1.0, 1.0, fixed()),
            point(2.0, 2.0, Fixed::new(1000).expect("valid scale")),
        ];
        let err = MultiPoint::new(points, fixed(), Cartesian).expect_err("incompatible");
        assert_eq!(err.index_path(), vec![1]);
        assert_eq!(
            err.root_cause(),
            &GeometryError::IncompatiblePrecisionOrReferenceSystem
        );
    }

    #[test]
    fn element_errors_are_tagged_with_index() {
        let err = MultiPoint::<Coordinate3D, _, _>::from_raw(
            [[0.0, 0.0, 0.0], [1.0, 1.0, f64::NAN]],
            Floating,
            Cartesian,
        )
        .expect_err("NaN");
        assert_eq!(err.index_path(), vec![1]);
        assert_matches!(
            err.root_cause(),
            GeometryError::InvalidCoordinate { axis: Axis::Z, .. }
        );

        let lines: &[&[[f64; 2]]] = &[&[[0.0, 0.0], [1.0, 1.0]], &[[0.0, 0.0], [f64::INFINITY, 1.0]]];
        let err = MultiLineString::<Coordinate2D, _, _>::from_raw(
            lines,
            Floating,
            Cartesian,
        )
        .expect_err("infinite");
        assert_eq!(err.index_path(), vec![1, 1]);

        let square: &[[f64; 2]] = &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let segment: &[[f64; 2]] = &[[0.0, 0.0], [1.0, 0.0]];
        let no_holes: &[&[[f64; 2]]] = &[];
        let holes: &[&[[f64; 2]]] = &[square, segment];
        let err = MultiPolygon::<Coordinate2D, _, _>::from_raw(
            &[(square, no_holes), (square, holes)],
            Floating,
            Cartesian,
        )
        .expect_err("short inner ring");
        assert_eq!(err.index_path(), vec![1, 2]);
        assert_matches!(
            err.root_cause(),
            GeometryError::InvalidRing(RingError::TooFewPoints { count: 3 })
        );
    }

    #[test]
    fn multi_line_string() {
        let raw: &[&[[f64; 2]]] = &[&[[0.0, 0.0], [1.004, 1.0]], &[[2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]];
        let lines = MultiLineString::<Coordinate2D, _, _>::from_raw(raw, fixed(), Cartesian)
            .expect("valid");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.geometry_type(), GeometryType::MultiLineString);
        assert_eq!(lines.dimension(), Dimension::One);
        assert_eq!(
            lines.to_string(),
            "MultiLineString([LineString([(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]), LineString([(x: 2.0, y: 2.0), (x: 3.0, y: 3.0), (x: 4.0, y: 4.0)])])"
        );
        assert_eq!(lines.bounds(), Some(Bounds::new(0.0, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn multi_polygon() {
        let outer: &[[f64; 2]] = &[[6.0, 1.0], [1.0, 1.0], [1.0, 3.0], [3.5, 4.0], [6.0, 3.0]];
        let no_holes: &[&[[f64; 2]]] = &[];
        let polygons = MultiPolygon::<Coordinate2D, _, _>::from_raw(
            &[(outer, no_holes), (outer, no_holes)],
            Floating,
            Cartesian,
        )
        .expect("valid");

        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons.get(0), polygons.get(1));
        assert_eq!(polygons.get(0).expect("exists").outer_ring().len(), 6);
        assert_eq!(polygons.dimension(), Dimension::Two);
        assert_eq!(
            polygons.to_string(),
            "MultiPolygon([Polygon([LinearRing([(x: 6.0, y: 1.0), (x: 1.0, y: 1.0), (x: 1.0, y: 3.0), (x: 3.5, y: 4.0), (x: 6.0, y: 3.0), (x: 6.0, y: 1.0)])]), Polygon([LinearRing([(x: 6.0, y: 1.0), (x: 1.0, y: 1.0), (x: 1.0, y: 3.0), (x: 3.5, y: 4.0), (x: 6.0, y: 3.0), (x: 6.0, y: 1.0)])])])"
        );
    }

    #[test]
    fn empty() {
        let empty = MultiPolygon::<Coordinate2D>::empty(Floating, Cartesian);
        assert!(empty.is_empty());
        assert_eq!(empty.dimension(), Dimension::Empty);
        assert_eq!(empty.bounds(), None);
        assert_eq!(empty.iter().next(), None);
        assert_eq!(empty.to_string(), "MultiPolygon([])");
    }

    #[test]
    fn never_equal_across_reference_systems() {
        let cartesian =
            MultiPoint::<Coordinate2D, _, _>::from_raw([[1.0, 1.0]], Floating, Cartesian).expect("valid");
        let ellipsoidal =
            MultiPoint::<Coordinate2D, _, _>::from_raw([[1.0, 1.0]], Floating, Ellipsoidal)
                .expect("valid");

        assert_ne!(cartesian, ellipsoidal);
        assert_eq!(cartesian, cartesian.clone());

        let empty_cartesian = MultiPoint::<Coordinate2D>::empty(Floating, Cartesian);
        let empty_ellipsoidal = MultiPoint::<Coordinate2D, _, _>::empty(Floating, Ellipsoidal);
        assert_ne!(empty_cartesian, empty_ellipsoidal);
    }

    #[test]
    fn with_precision() {
        let points = MultiPoint::<Coordinate2D, _, _>::from_raw(
            [[1.001, 1.001], [2.002, 2.002]],
            Floating,
            Cartesian,
        )
        .expect("valid");
        let fixed_points = points.with_precision(fixed()).expect("valid");
        assert_eq!(
            fixed_points,
            MultiPoint::<Coordinate2D, _, _>::from_raw([[1.0, 1.0], [2.0, 2.0]], fixed(), Cartesian)
                .expect("valid")
        );
        assert_eq!(fixed_points.get(1).map(|p| *p.precision()), Ok(fixed()));

        let raw: &[&[[f64; 2]]] = &[&[[0.0, 0.0], [1.004, 1.0]]];
        let lines = MultiLineString::<Coordinate2D, _, _>::from_raw(raw, Floating, Cartesian)
            .expect("valid");
        assert_eq!(
            lines.with_precision(fixed()).expect("valid"),
            MultiLineString::<Coordinate2D, _, _>::from_raw(raw, fixed(), Cartesian).expect("valid")
        );

        let outer: &[[f64; 2]] = &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.004]];
        let no_holes: &[&[[f64; 2]]] = &[];
        let polygons =
            MultiPolygon::<Coordinate2D, _, _>::from_raw(&[(outer, no_holes)], Floating, Cartesian)
                .expect("valid");
        let fixed_polygons = polygons.with_precision(fixed()).expect("valid");
        assert_eq!(
            fixed_polygons,
            MultiPolygon::<Coordinate2D, _, _>::from_raw(&[(outer, no_holes)], fixed(), Cartesian)
                .expect("valid")
        );
        assert_eq!(
            fixed_polygons.get(0).expect("exists").outer_ring().get(3),
            Ok(&Coordinate2D::new(0.0, 1.0))
        );
    }

    #[test]
    fn serializes_reference_system_name() {
        let points =
            MultiPoint::<Coordinate2D, _, _>::from_raw([[1.0, 2.0]], Floating, Ellipsoidal).expect("valid");
        let json = serde_json::to_value(&points).expect("serializable");
        assert_eq!(json["crs"], "Ellipsoidal");
        assert_eq!(json["elements"][0]["crs"], "Ellipsoidal");
    }

    #[test]
    fn iteration_is_lazy_and_restartable() {
        let points = MultiPoint::<Coordinate2D, _, _>::from_raw(
            (0..1000).map(|i| [i as f64, i as f64]),
            Floating,
            Cartesian,
        )
        .expect("valid");

        let first_big = points.iter().find(|p| p.x() > 2.5);
        assert_eq!(first_big, Some(&point(3.0, 3.0, Floating)));
        assert_eq!(points.iter().count(), 1000);
        assert_eq!((&points).into_iter().next(), Some(&point(0.0, 0.0, Floating)));
    }
}
