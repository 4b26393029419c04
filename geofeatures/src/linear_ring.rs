use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::crs::{Cartesian, CoordinateReferenceSystem};
use crate::error::{GeometryError, RingError};
use crate::geometry::{Dimension, Geometry, GeometryType};
use crate::line_string::{write_coordinates, LineString};
use crate::precision::{Floating, Precision};

/// Minimum number of coordinates in a non-empty ring: three distinct positions and the closing one.
pub const MIN_RING_LEN: usize = 4;

/// Closed line string.
///
/// A linear ring is either empty, or has at least [`MIN_RING_LEN`] coordinates with the last coordinate equal to
/// the first one. Closure is checked on the stored (already converted by precision policy) coordinates.
///
/// There are two ways to create a ring:
/// * [`LinearRing::new`] expects the input to be closed already and fails with [`RingError::NotClosed`] otherwise.
/// * [`LinearRing::closing`] appends the first coordinate to the end if the input is open, and then validates the
///   result the same way as `new` does. This is what [`Polygon`](crate::Polygon) uses for its rings.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent, bound(serialize = "C: Serialize, P: Serialize, R: CoordinateReferenceSystem"))]
pub struct LinearRing<C, P = Floating, R = Cartesian>(LineString<C, P, R>);

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> LinearRing<C, P, R> {
    /// Creates a new ring from the closed sequence of coordinates.
    pub fn new(
        coordinates: impl IntoIterator<Item = C>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::try_from(LineString::new(coordinates, precision, crs)?)
    }

    /// Same as [`LinearRing::new`], but takes anything convertible into the coordinate type, e.g. `[1.0, 2.0]`.
    pub fn from_raw<T: Into<C>>(
        raw: impl IntoIterator<Item = T>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        Self::new(raw.into_iter().map(Into::into), precision, crs)
    }

    /// Creates a new ring, closing the sequence of coordinates if it is open.
    ///
    /// The check for closure is done after the precision policy is applied, so with fixed precision the input
    /// `[(0, 0), (1, 0), (1, 1), (0.001, 0)]` with scale `100` is considered closed and is not extended.
    pub fn closing(
        coordinates: impl IntoIterator<Item = C>,
        precision: P,
        crs: R,
    ) -> Result<Self, GeometryError> {
        let mut line = LineString::new(coordinates, precision, crs)?;
        let missing_end = match (line.first(), line.last()) {
            (Some(first), Some(last)) if first != last => Some(*first),
            _ => None,
        };
        if let Some(first) = missing_end {
            log::trace!("Closing ring of {} coordinates", line.len());
            line.push_stored(first);
        }

        Self::try_from(line)
    }

    /// Creates a ring without coordinates.
    pub fn empty(precision: P, crs: R) -> Self {
        Self(LineString::empty(precision, crs))
    }

    /// Creates a copy of the ring with every coordinate stored with another `precision`.
    ///
    /// Equal coordinates stay equal after conversion, so the result is closed as well.
    pub fn with_precision<P2: Precision>(
        &self,
        precision: P2,
    ) -> Result<LinearRing<C, P2, R>, GeometryError> {
        LinearRing::try_from(self.0.with_precision(precision)?)
    }

    /// Returns the ring as a line string.
    pub fn as_line_string(&self) -> &LineString<C, P, R> {
        &self.0
    }

    /// Converts the ring into a line string.
    pub fn into_line_string(self) -> LineString<C, P, R> {
        self.0
    }
}

fn validate_ring<C: Coordinate, P, R>(line: &LineString<C, P, R>) -> Result<(), RingError>
where
    P: Precision,
    R: CoordinateReferenceSystem,
{
    if line.is_empty() {
        return Ok(());
    }

    if line.len() < MIN_RING_LEN {
        return Err(RingError::TooFewPoints { count: line.len() });
    }

    if !line.is_closed() {
        return Err(RingError::NotClosed);
    }

    Ok(())
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> TryFrom<LineString<C, P, R>>
    for LinearRing<C, P, R>
{
    type Error = GeometryError;

    fn try_from(line: LineString<C, P, R>) -> Result<Self, Self::Error> {
        match validate_ring(&line) {
            Ok(()) => Ok(Self(line)),
            Err(err) => {
                log::debug!("Failed to create linear ring: {err}");
                Err(err.into())
            }
        }
    }
}

impl<C, P, R> Deref for LinearRing<C, P, R> {
    type Target = LineString<C, P, R>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, C, P, R> IntoIterator for &'a LinearRing<C, P, R> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

impl<C, P1, P2, R1, R2> PartialEq<LinearRing<C, P2, R2>> for LinearRing<C, P1, R1>
where
    C: Coordinate,
    P1: Precision,
    P2: Precision,
    R1: CoordinateReferenceSystem,
    R2: CoordinateReferenceSystem,
{
    fn eq(&self, other: &LinearRing<C, P2, R2>) -> bool {
        self.0 == other.0
    }
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Geometry for LinearRing<C, P, R> {
    type Coordinate = C;
    type Precision = P;
    type Crs = R;

    const TOPOLOGICAL_DIMENSION: Dimension = Dimension::One;

    fn geometry_type(&self) -> GeometryType {
        GeometryType::LinearRing
    }

    fn precision(&self) -> &P {
        self.0.precision()
    }

    fn crs(&self) -> &R {
        self.0.crs()
    }

    fn iter_coordinates(&self) -> impl Iterator<Item = &'_ C> {
        self.0.iter()
    }
}

impl<C: Coordinate, P, R> Display for LinearRing<C, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_coordinates(f, "LinearRing", self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::coordinate::{Coordinate2D, Coordinate2DM};
    use crate::precision::Fixed;

    fn fixed() -> Fixed {
        Fixed::new(100).expect("valid scale")
    }

    const OPEN: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 2.0], [0.0, 3.0], [2.0, 0.0]];

    #[test]
    fn new_rejects_open_ring() {
        assert_matches!(
            LinearRing::<Coordinate2D, _, _>::from_raw(OPEN, Floating, Cartesian),
            Err(GeometryError::InvalidRing(RingError::NotClosed))
        );
    }

    #[test]
    fn closing_closes_open_ring() {
        let ring = LinearRing::closing(OPEN.map(Coordinate2D::from), Floating, Cartesian)
            .expect("valid");
        let expected = LinearRing::<Coordinate2D, _, _>::from_raw(
            [[0.0, 0.0], [0.0, 2.0], [0.0, 3.0], [2.0, 0.0], [0.0, 0.0]],
            Floating,
            Cartesian,
        )
        .expect("closed");

        assert_eq!(ring.len(), 5);
        assert_eq!(ring, expected);
    }

    #[test]
    fn closing_keeps_closed_ring() {
        let input = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.001, 0.0]].map(Coordinate2D::from);
        let ring = LinearRing::closing(input, fixed(), Cartesian).expect("valid");
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.last(), Some(&Coordinate2D::new(0.0, 0.0)));
    }

    #[test]
    fn too_few_points() {
        assert_matches!(
            LinearRing::<Coordinate2D, _, _>::from_raw(
                [[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
                Floating,
                Cartesian
            ),
            Err(GeometryError::InvalidRing(RingError::TooFewPoints { count: 3 }))
        );

        // Two coordinates are closed to three, which is still not enough.
        assert_matches!(
            LinearRing::<Coordinate2D, _, _>::closing(
                [[0.0, 0.0], [1.0, 1.0]].map(Coordinate2D::from),
                Floating,
                Cartesian
            ),
            Err(GeometryError::InvalidRing(RingError::TooFewPoints { count: 3 }))
        );
    }

    #[test]
    fn empty_ring_is_valid() {
        let ring = LinearRing::<Coordinate2DM, _, _>::new([], Floating, Cartesian).expect("valid");
        assert!(ring.is_empty());
        assert_eq!(ring.to_string(), "LinearRing([])");

        let ring = LinearRing::<Coordinate2DM, _, _>::closing([], Floating, Cartesian).expect("valid");
        assert!(ring.is_empty());
    }

    #[test]
    fn with_precision_keeps_ring_closed() {
        let ring = LinearRing::<Coordinate2D, _, _>::from_raw(
            [[0.004, 0.0], [1.0, 0.0], [1.0, 1.0], [0.004, 0.0]],
            Floating,
            Cartesian,
        )
        .expect("valid");
        let fixed_ring = ring.with_precision(fixed()).expect("valid");

        assert!(fixed_ring.is_closed());
        assert_eq!(fixed_ring.first(), Some(&Coordinate2D::new(0.0, 0.0)));
        assert_eq!(fixed_ring.precision(), &fixed());
        assert_eq!(
            fixed_ring.with_precision(Floating).expect("valid").first(),
            Some(&Coordinate2D::new(0.0, 0.0))
        );
    }

    #[test]
    fn try_from_line_string() {
        let line = LineString::<Coordinate2D, _, _>::from_raw(
            [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
            Floating,
            Cartesian,
        )
        .expect("valid");
        let ring = LinearRing::try_from(line.clone()).expect("closed");
        assert_eq!(ring.as_line_string(), &line);
        assert_eq!(ring.geometry_type(), GeometryType::LinearRing);
        assert_eq!(
            ring.to_string(),
            "LinearRing([(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)])"
        );
    }
}
