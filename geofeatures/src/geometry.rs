//! Interface shared by all geometry values.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coordinate::Coordinate;
use crate::crs::CoordinateReferenceSystem;
use crate::precision::Precision;

/// Topological dimension of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// The geometry has no coordinates.
    Empty,
    /// Points.
    Zero,
    /// Curves.
    One,
    /// Surfaces.
    Two,
}

/// Kind of a geometry value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// [`Point`](crate::Point).
    Point,
    /// [`LineString`](crate::LineString).
    LineString,
    /// [`LinearRing`](crate::LinearRing).
    LinearRing,
    /// [`Polygon`](crate::Polygon).
    Polygon,
    /// [`MultiPoint`](crate::MultiPoint).
    MultiPoint,
    /// [`MultiLineString`](crate::MultiLineString).
    MultiLineString,
    /// [`MultiPolygon`](crate::MultiPolygon).
    MultiPolygon,
}

impl GeometryType {
    /// Name of the geometry kind as used in textual descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry value parameterized by coordinate representation, precision policy and reference system.
pub trait Geometry {
    /// Coordinate representation.
    type Coordinate: Coordinate;
    /// Precision policy the coordinates were stored with.
    type Precision: Precision;
    /// Reference system of the coordinates.
    type Crs: CoordinateReferenceSystem;

    /// Dimension of the geometry when it is not empty.
    const TOPOLOGICAL_DIMENSION: Dimension;

    /// Kind of the geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Precision policy of the geometry.
    fn precision(&self) -> &Self::Precision;

    /// Reference system of the geometry.
    fn crs(&self) -> &Self::Crs;

    /// Iterates over all stored coordinates of the geometry in order.
    fn iter_coordinates(&self) -> impl Iterator<Item = &'_ Self::Coordinate>;

    /// Whether the geometry has no coordinates.
    fn is_empty(&self) -> bool {
        self.iter_coordinates().next().is_none()
    }

    /// Spatial dimension of the geometry, [`Dimension::Empty`] for empty geometries.
    fn dimension(&self) -> Dimension {
        if self.is_empty() {
            Dimension::Empty
        } else {
            Self::TOPOLOGICAL_DIMENSION
        }
    }

    /// Bounding rectangle of the stored coordinates, `None` for empty geometries.
    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_coordinates(self.iter_coordinates())
    }
}

/// Geometry that can be an element of a [`Multi`](crate::Multi) collection.
pub trait CollectionElement: Geometry {
    /// Kind of the collection holding elements of this type.
    const COLLECTION_TYPE: GeometryType;
}
