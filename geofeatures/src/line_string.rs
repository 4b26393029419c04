use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::coordinate::{write_coordinate, Coordinate};
use crate::crs::{same_crs, serialize_name, Cartesian, CoordinateReferenceSystem};
use crate::error::GeometryError;
use crate::geometry::{CollectionElement, Dimension, Geometry, GeometryType};
use crate::position::Position;
use crate::precision::{same_precision, Floating, Precision};

/// Ordered sequence of coordinates.
///
/// Every coordinate is independently validated and converted by the same precision policy on construction.
/// A line string may be empty or consist of a single coordinate, though most uses need at least two.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "C: Serialize, P: Serialize, R: CoordinateReferenceSystem"))]
pub struct LineString<C, P = Floating, R = Cartesian> {
    coordinates: Vec<C>,
    precision: P,
    #[serde(serialize_with = "serialize_name")]
    crs: R,
}

/// Stores all the coordinates with the `precision`, reporting the first failure with its position.
pub(crate) fn store_coordinates<C: Coordinate, P: Precision>(
    coordinates: impl IntoIterator<Item = C>,
    precision: &P,
) -> Result<Vec<C>, GeometryError> {
    coordinates
        .into_iter()
        .enumerate()
        .map(|(index, c)| precision.apply_coordinate(&c).map_err(|err| err.at(index)))
        .collect()
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> LineString<C, P, R> {
    /// Creates a new line string from the given coordinates.
    ///
    /// Fails with [`GeometryError::InvalidCoordinate`] wrapped into [`GeometryError::AtIndex`] if any coordinate
    /// has a non-finite axis value.
    pub fn new(
        coordinates: impl IntoIterator<Item = C>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        let coordinates = store_coordinates(coordinates, &precision)
            .inspect_err(|err| log::debug!("Failed to create line string: {err}"))?;

        Ok(Self {
            coordinates,
            precision,
            crs,
        })
    }

    /// Same as [`LineString::new`], but takes anything convertible into the coordinate type, e.g. `[1.0, 2.0]`.
    pub fn from_raw<T: Into<C>>(
        raw: impl IntoIterator<Item = T>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::new(raw.into_iter().map(Into::into), precision, crs)
    }

    /// Creates a line string without coordinates.
    pub fn empty(precision: P, crs: R) -> Self {
        Self {
            coordinates: vec![],
            precision,
            crs,
        }
    }

    /// Coordinate at `index` bound to the precision and reference system of the line string.
    pub fn position(&self, index: usize) -> Result<Position<C, P, R>, GeometryError> {
        self.get(index)
            .map(|&c| Position::stored(c, self.precision, self.crs))
    }

    /// Iterates over the coordinates bound to the precision and reference system of the line string.
    pub fn positions(&self) -> impl Iterator<Item = Position<C, P, R>> + '_ {
        self.coordinates
            .iter()
            .map(|&c| Position::stored(c, self.precision, self.crs))
    }

    /// Creates a copy of the line string with every coordinate stored with another `precision`.
    pub fn with_precision<P2: Precision>(
        &self,
        precision: P2,
    ) -> Result<LineString<C, P2, R>, GeometryError> {
        LineString::new(self.coordinates.iter().copied(), precision, self.crs)
    }
}

impl<C, P, R> LineString<C, P, R> {
    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether there are no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate at `index`.
    pub fn get(&self, index: usize) -> Result<&C, GeometryError> {
        self.coordinates
            .get(index)
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// First coordinate, `None` if empty.
    pub fn first(&self) -> Option<&C> {
        self.coordinates.first()
    }

    /// Last coordinate, `None` if empty.
    pub fn last(&self) -> Option<&C> {
        self.coordinates.last()
    }

    /// Iterates over the coordinates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.coordinates.iter()
    }

    /// Stored coordinates.
    pub fn coordinates(&self) -> &[C] {
        &self.coordinates
    }

    pub(crate) fn push_stored(&mut self, coordinate: C) {
        self.coordinates.push(coordinate);
    }
}

impl<C: Coordinate, P, R> LineString<C, P, R> {
    /// Whether the line string has at least two coordinates and the first one is equal to the last one.
    pub fn is_closed(&self) -> bool {
        self.len() >= 2 && self.first() == self.last()
    }
}

impl<'a, C, P, R> IntoIterator for &'a LineString<C, P, R> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl<C, P1, P2, R1, R2> PartialEq<LineString<C, P2, R2>> for LineString<C, P1, R1>
where
    C: Coordinate,
    P1: Precision,
    P2: Precision,
    R1: CoordinateReferenceSystem,
    R2: CoordinateReferenceSystem,
{
    fn eq(&self, other: &LineString<C, P2, R2>) -> bool {
        same_crs(&self.crs, &other.crs)
            && same_precision(&self.precision, &other.precision)
            && self.coordinates == other.coordinates
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Geometry for LineString<C, P, R> {
    type Coordinate = C;
    type Precision = P;
    type Crs = R;

    const TOPOLOGICAL_DIMENSION: Dimension = Dimension::One;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn precision(&self) -> &P {
        &self.precision
    }

    fn crs(&self) -> &R {
        &self.crs
    }

    fn iter_coordinates(&self) -> impl Iterator<Item = &'_ C> {
        self.coordinates.iter()
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> CollectionElement
    for LineString<C, P, R>
{
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiLineString;
}

/// Writes `Name([(x: .., y: ..), ..])`.
pub(crate) fn write_coordinates<'a, C: Coordinate + 'a>(
    f: &mut Formatter<'_>,
    name: &str,
    coordinates: impl Iterator<Item = &'a C>,
) -> std::fmt::Result {
    write!(f, "{name}([")?;
    for (i, c) in coordinates.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_coordinate(f, c)?;
    }
    write!(f, "])")
}

impl<C: Coordinate, P, R> Display for LineString<C, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_coordinates(f, "LineString", self.coordinates.iter())
    }
}
