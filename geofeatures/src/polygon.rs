use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::crs::{same_crs, serialize_name, Cartesian, CoordinateReferenceSystem};
use crate::error::GeometryError;
use crate::geometry::{CollectionElement, Dimension, Geometry, GeometryType};
use crate::linear_ring::LinearRing;
use crate::precision::{same_precision, Floating, Precision};

/// Polygon geometry. Polygon consists of one outer ring, and zero or more inner rings.
///
/// Inner rings represent *holes* in the polygon. All rings of a polygon share its precision policy and reference
/// system.
///
/// When a polygon is created from coordinate sequences, every ring is closed with [`LinearRing::closing`], so open
/// sequences are accepted. When it is created from already constructed rings, they are taken as they are, but
/// must have been created with the same precision as the polygon.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "C: Serialize, P: Serialize, R: CoordinateReferenceSystem"))]
pub struct Polygon<C, P = Floating, R = Cartesian> {
    outer_ring: LinearRing<C, P, R>,
    inner_rings: Vec<LinearRing<C, P, R>>,
    precision: P,
    #[serde(serialize_with = "serialize_name")]
    crs: R,
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Polygon<C, P, R> {
    /// Creates a new polygon from constructed rings.
    ///
    /// Fails with [`GeometryError::IncompatiblePrecisionOrReferenceSystem`] wrapped into
    /// [`GeometryError::AtIndex`] if a ring has different precision than the polygon. Index `0` is the outer ring,
    /// inner rings follow in order.
    pub fn new(
        outer_ring: LinearRing<C, P, R>,
        inner_rings: impl IntoIterator<Item = LinearRing<C, P, R>>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        let inner_rings: Vec<_> = inner_rings.into_iter().collect();
        let compatible = |ring: &LinearRing<C, P, R>| {
            *ring.precision() == precision && *ring.crs() == crs
        };

        if let Some(index) = std::iter::once(&outer_ring)
            .chain(&inner_rings)
            .position(|ring| !compatible(ring))
        {
            let err = GeometryError::IncompatiblePrecisionOrReferenceSystem.at(index);
            log::debug!("Failed to create polygon: {err}");
            return Err(err);
        }

        Ok(Self {
            outer_ring,
            inner_rings,
            precision,
            crs,
        })
    }

    /// Creates a new polygon from coordinate sequences, closing every open ring.
    ///
    /// Ring failures are wrapped into [`GeometryError::AtIndex`] with the index of the ring (`0` for the outer one).
    pub fn from_coordinates(
        outer_ring: impl IntoIterator<Item = C>,
        inner_rings: impl IntoIterator<Item = Vec<C>>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        let close = |index: usize, ring: Vec<C>| {
            LinearRing::closing(ring, precision, crs).map_err(|err| err.at(index))
        };
        let rings = close(0, outer_ring.into_iter().collect()).and_then(|outer_ring| {
            let inner_rings = inner_rings
                .into_iter()
                .enumerate()
                .map(|(i, ring)| close(i + 1, ring))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((outer_ring, inner_rings))
        });
        let (outer_ring, inner_rings) =
            rings.inspect_err(|err| log::debug!("Failed to create polygon: {err}"))?;

        Ok(Self {
            outer_ring,
            inner_rings,
            precision,
            crs,
        })
    }

    /// Same as [`Polygon::from_coordinates`], but takes anything convertible into the coordinate type, e.g.
    /// `&[[6.0, 1.0], [1.0, 1.0], [1.0, 3.0]]`.
    pub fn from_raw<T: Into<C> + Copy>(
        outer_ring: &[T],
        inner_rings: &[&[T]],
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::from_coordinates(
            outer_ring.iter().map(|&c| c.into()),
            inner_rings
                .iter()
                .map(|ring| ring.iter().map(|&c| c.into()).collect()),
            precision,
            crs,
        )
    }

    /// Creates a polygon with empty outer ring and no inner rings.
    pub fn empty(precision: P, crs: R) -> Self {
        Self {
            outer_ring: LinearRing::empty(precision, crs),
            inner_rings: vec![],
            precision,
            crs,
        }
    }

    /// Outer ring of the polygon.
    pub fn outer_ring(&self) -> &LinearRing<C, P, R> {
        &self.outer_ring
    }

    /// Inner rings in the order they were given.
    pub fn inner_rings(&self) -> &[LinearRing<C, P, R>] {
        &self.inner_rings
    }

    /// Inner ring at `index`.
    pub fn inner_ring(&self, index: usize) -> Result<&LinearRing<C, P, R>, GeometryError> {
        self.inner_rings
            .get(index)
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.inner_rings.len(),
            })
    }

    /// Creates a copy of the polygon with all rings stored with another `precision`.
    ///
    /// Ring failures are wrapped into [`GeometryError::AtIndex`] with the index of the ring (`0` for the outer one).
    pub fn with_precision<P2: Precision>(
        &self,
        precision: P2,
    ) -> Result<Polygon<C, P2, R>, GeometryError> {
        let outer_ring = self
            .outer_ring
            .with_precision(precision)
            .map_err(|err| err.at(0))?;
        let inner_rings = self
            .inner_rings
            .iter()
            .enumerate()
            .map(|(i, ring)| ring.with_precision(precision).map_err(|err| err.at(i + 1)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Polygon {
            outer_ring,
            inner_rings,
            precision,
            crs: self.crs,
        })
    }

    /// Iterates over all rings of the polygon starting with the outer one.
    pub fn rings(&self) -> impl Iterator<Item = &'_ LinearRing<C, P, R>> {
        std::iter::once(&self.outer_ring).chain(self.inner_rings.iter())
    }
}

impl<C, P1, P2, R1, R2> PartialEq<Polygon<C, P2, R2>> for Polygon<C, P1, R1>
where
    C: Coordinate,
    P1: Precision,
    P2: Precision,
    R1: CoordinateReferenceSystem,
    R2: CoordinateReferenceSystem,
{
    fn eq(&self, other: &Polygon<C, P2, R2>) -> bool {
        same_crs(&self.crs, &other.crs)
            && same_precision(&self.precision, &other.precision)
            && self.outer_ring == other.outer_ring
            && self.inner_rings == other.inner_rings
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Geometry for Polygon<C, P, R> {
    type Coordinate = C;
    type Precision = P;
    type Crs = R;

    const TOPOLOGICAL_DIMENSION: Dimension = Dimension::Two;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn precision(&self) -> &P {
        &self.precision
    }

    fn crs(&self) -> &R {
        &self.crs
    }

    fn iter_coordinates(&self) -> impl Iterator<Item = &'_ C> {
        self.rings().flat_map(|ring| ring.iter())
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> CollectionElement
    for Polygon<C, P, R>
{
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiPolygon;
}

impl<C: Coordinate, P, R> Display for Polygon<C, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Polygon([")?;
        if !(self.outer_ring.coordinates().is_empty() && self.inner_rings.is_empty()) {
            write!(f, "{}", self.outer_ring)?;
            for ring in &self.inner_rings {
                write!(f, ", {ring}")?;
            }
        }
        write!(f, "])")
    }
}
