use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::coordinate::{write_coordinate, Coordinate};
use crate::crs::{same_crs, serialize_name, Cartesian, CoordinateReferenceSystem};
use crate::error::GeometryError;
use crate::geometry::{CollectionElement, Dimension, Geometry, GeometryType};
use crate::position::Position;
use crate::precision::{same_precision, Floating, Precision};

/// A single position.
///
/// The coordinate is validated and converted by the precision policy on construction and never changes after
/// that.
#[derive(Debug, Copy, Clone, Serialize)]
#[serde(bound(serialize = "C: Serialize, P: Serialize, R: CoordinateReferenceSystem"))]
pub struct Point<C, P = Floating, R = Cartesian> {
    coordinate: C,
    precision: P,
    #[serde(serialize_with = "serialize_name")]
    crs: R,
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Point<C, P, R> {
    /// Creates a new point, storing the `coordinate` with the given `precision`.
    ///
    /// Fails with [`GeometryError::InvalidCoordinate`] if any axis value is not finite.
    pub fn new(coordinate: C, precision: P, crs: R) -> Result<Self, GeometryError> {
        let coordinate = precision
            .apply_coordinate(&coordinate)
            .inspect_err(|err| log::debug!("Failed to create point: {err}"))?;

        Ok(Self {
            coordinate,
            precision,
            crs,
        })
    }

    /// Same as [`Point::new`], but takes anything convertible into the coordinate type, e.g. `[1.0, 2.0]`.
    pub fn from_raw(raw: impl Into<C>, precision: P, crs: R) -> Result<Self, GeometryError> {
        Self::new(raw.into(), precision, crs)
    }

    /// Stored coordinate of the point.
    pub fn coordinate(&self) -> &C {
        &self.coordinate
    }

    /// Stored coordinate bound to the precision and reference system of the point.
    pub fn position(&self) -> Position<C, P, R> {
        Position::stored(self.coordinate, self.precision, self.crs)
    }

    /// Creates a copy of the point with the coordinate stored with another `precision`.
    pub fn with_precision<P2: Precision>(&self, precision: P2) -> Result<Point<C, P2, R>, GeometryError> {
        Point::new(self.coordinate, precision, self.crs)
    }

    /// X axis value.
    pub fn x(&self) -> f64 {
        self.coordinate.x()
    }

    /// Y axis value.
    pub fn y(&self) -> f64 {
        self.coordinate.y()
    }

    /// Z axis value, if the coordinate type has one.
    pub fn z(&self) -> Option<f64> {
        self.coordinate.z()
    }

    /// M axis value, if the coordinate type has one.
    pub fn m(&self) -> Option<f64> {
        self.coordinate.m()
    }
}

impl<C, P1, P2, R1, R2> PartialEq<Point<C, P2, R2>> for Point<C, P1, R1>
where
    C: Coordinate,
    P1: Precision,
    P2: Precision,
    R1: CoordinateReferenceSystem,
    R2: CoordinateReferenceSystem,
{
    fn eq(&self, other: &Point<C, P2, R2>) -> bool {
        same_crs(&self.crs, &other.crs)
            && same_precision(&self.precision, &other.precision)
            && self.coordinate == other.coordinate
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Geometry for Point<C, P, R> {
    type Coordinate = C;
    type Precision = P;
    type Crs = R;

    const TOPOLOGICAL_DIMENSION: Dimension = Dimension::Zero;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn precision(&self) -> &P {
        &self.precision
    }

    fn crs(&self) -> &R {
        &self.crs
    }

    fn iter_coordinates(&self) -> impl Iterator<Item = &'_ C> {
        std::iter::once(&self.coordinate)
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> CollectionElement
    for Point<C, P, R>
{
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiPoint;
}

impl<C: Coordinate, P, R> Display for Point<C, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point")?;
        write_coordinate(f, &self.coordinate)
    }
}
