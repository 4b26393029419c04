//! Precision policies.
//!
//! A precision policy converts raw axis values into their stored form when a geometry is constructed. It is the
//! only place where coordinates are rounded: equality, accessors and textual output all read the stored values
//! back as they are.
//!
//! Two policies are provided:
//! * [`Floating`] stores values as given, with full `f64` precision.
//! * [`Fixed`] snaps values to the nearest multiple of `1 / scale`, rounding half away from zero.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::GeometryError;

/// Conversion of raw coordinate values into stored values.
pub trait Precision: Debug + Copy + PartialEq {
    /// Converts a single raw value into its stored form.
    fn apply(&self, value: f64) -> f64;

    /// Identity of the policy: `None` for full floating precision, `Some(scale)` for fixed precision.
    ///
    /// Two policies with equal identity produce the same stored values for the same input.
    fn scale(&self) -> Option<u64>;

    /// Validates every axis of the `coordinate` and converts it into its stored form.
    ///
    /// Fails with [`GeometryError::InvalidCoordinate`] if any axis value is not finite.
    fn apply_coordinate<C: Coordinate>(&self, coordinate: &C) -> Result<C, GeometryError> {
        coordinate.try_map_axes(|axis, value| {
            if value.is_finite() {
                Ok(self.apply(value))
            } else {
                Err(GeometryError::InvalidCoordinate { axis, value })
            }
        })
    }
}

pub(crate) fn same_precision<P1: Precision, P2: Precision>(a: &P1, b: &P2) -> bool {
    a.scale() == b.scale()
}

/// Full floating point precision. Values are stored as given.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Floating;

impl Precision for Floating {
    fn apply(&self, value: f64) -> f64 {
        value
    }

    fn scale(&self) -> Option<u64> {
        None
    }
}

impl Display for Floating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Floating")
    }
}

/// Fixed decimal precision.
///
/// A value `v` is stored as `round(v * scale) / scale`, rounding half away from zero. For example with scale
/// `100` the value `1.001` is stored as `1.0`, and with scale `1` the value `-2.5` is stored as `-3.0`.
///
/// Values with `|v * scale|` of [`Fixed::MAX_SCALED`] or more are stored as given: `f64` cannot hold a
/// fractional part of `1 / scale` there, and rounding would not be stable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Fixed {
    scale: u64,
}

impl Fixed {
    /// Scaled magnitude (`2^50`) from which values are kept unchanged.
    ///
    /// Below it `round(v * scale)` is an integer `n` with `n / scale * scale` within `0.25` of `n`, so applying
    /// the policy to an already stored value gives the same value back.
    pub const MAX_SCALED: f64 = (1u64 << 50) as f64;

    /// Creates a new fixed precision policy with the given `scale`.
    ///
    /// Fails with [`GeometryError::InvalidConfiguration`] if `scale` is zero or negative.
    pub fn new(scale: i64) -> Result<Self, GeometryError> {
        match u64::try_from(scale) {
            Ok(scale) if scale > 0 => Ok(Self { scale }),
            _ => Err(GeometryError::InvalidConfiguration { scale }),
        }
    }
}

impl Precision for Fixed {
    fn apply(&self, value: f64) -> f64 {
        let scale = self.scale as f64;
        let scaled = value * scale;
        if scaled.abs() < Self::MAX_SCALED {
            scaled.round() / scale
        } else {
            value
        }
    }

    fn scale(&self) -> Option<u64> {
        Some(self.scale)
    }
}

impl TryFrom<i64> for Fixed {
    type Error = GeometryError;

    fn try_from(scale: i64) -> Result<Self, Self::Error> {
        Self::new(scale)
    }
}

impl From<Fixed> for i64 {
    fn from(value: Fixed) -> Self {
        i64::try_from(value.scale).unwrap_or(i64::MAX)
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fixed(scale: {})", self.scale)
    }
}
