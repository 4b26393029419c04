//! Stored coordinates bound to their precision policy and reference system.
//!
//! The coordinate structs ([`Coordinate2D`](crate::Coordinate2D) etc.) are plain input data: they may hold any
//! `f64` and compare by value only. A [`Position`] is what a coordinate becomes after a precision policy accepted
//! it: every axis is finite and quantized, and equality takes the policy and the reference system into account.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::coordinate::{write_coordinate, Coordinate};
use crate::crs::{same_crs, serialize_name, Cartesian, CoordinateReferenceSystem};
use crate::error::GeometryError;
use crate::precision::{same_precision, Floating, Precision};

/// Validated coordinate in a reference system.
///
/// Two positions are equal only if they share the reference system and the precision policy, and their stored
/// axis values are exactly equal.
#[derive(Debug, Copy, Clone, Serialize)]
#[serde(bound(serialize = "C: Serialize, P: Serialize, R: CoordinateReferenceSystem"))]
pub struct Position<C, P = Floating, R = Cartesian> {
    coordinate: C,
    precision: P,
    #[serde(serialize_with = "serialize_name")]
    crs: R,
}

impl<C: Coordinate, P: Precision, R: CoordinateReferenceSystem> Position<C, P, R> {
    /// Validates the `coordinate` and stores it with the `precision`.
    ///
    /// Fails with [`GeometryError::InvalidCoordinate`] if any axis value is not finite.
    pub fn new(coordinate: C, precision: P, crs: R) -> Result<Self, GeometryError> {
        Ok(Self {
            coordinate: precision.apply_coordinate(&coordinate)?,
            precision,
            crs,
        })
    }

    /// Same as [`Position::new`], but takes anything convertible into the coordinate type, e.g. `[1.0, 2.0]`.
    pub fn from_raw(raw: impl Into<C>, precision: P, crs: R) -> Result<Self, GeometryError> {
        Self::new(raw.into(), precision, crs)
    }

    /// Wraps a coordinate that was already stored with the `precision`.
    pub(crate) fn stored(coordinate: C, precision: P, crs: R) -> Self {
        Self {
            coordinate,
            precision,
            crs,
        }
    }

    /// Stored coordinate.
    pub fn coordinate(&self) -> &C {
        &self.coordinate
    }

    /// Precision policy the coordinate was stored with.
    pub fn precision(&self) -> &P {
        &self.precision
    }

    /// Reference system of the coordinate.
    pub fn crs(&self) -> &R {
        &self.crs
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

impl<C, P1, P2, R1, R2> PartialEq<Position<C, P2, R2>> for Position<C, P1, R1>
where
    C: Coordinate,
    P1: Precision,
    P2: Precision,
    R1: CoordinateReferenceSystem,
    R2: CoordinateReferenceSystem,
{
    fn eq(&self, other: &Position<C, P2, R2>) -> bool {
        same_crs(&self.crs, &other.crs)
            && same_precision(&self.precision, &other.precision)
            && self.coordinate == other.coordinate
    }
}

impl<C: Coordinate, P, R> Display for Position<C, P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_coordinate(f, &self.coordinate)
    }
}
