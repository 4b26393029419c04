//! Coordinate representations.
//!
//! A coordinate is a tuple of axis values. Every representation has `x` and `y` axes and may additionally carry
//! an elevation (`z`) and/or a measure (`m`) axis. Which of the optional axes are present is a property of the
//! type, not of the value, so e.g. a [`LineString`](crate::LineString) never mixes 2d and 3d coordinates.
//!
//! Coordinate structs are plain data. They become *stored* coordinates only when a geometry constructor passes
//! them through its [`Precision`](crate::Precision), which validates and quantizes every axis.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::Axis;

/// Common interface of all coordinate representations.
pub trait Coordinate: Debug + Copy + PartialEq {
    /// Whether the representation carries the `z` axis.
    const HAS_Z: bool;
    /// Whether the representation carries the `m` axis.
    const HAS_M: bool;

    /// X axis value.
    fn x(&self) -> f64;
    /// Y axis value.
    fn y(&self) -> f64;
    /// Z axis value, if the representation has one.
    fn z(&self) -> Option<f64> {
        None
    }
    /// M axis value, if the representation has one.
    fn m(&self) -> Option<f64> {
        None
    }

    /// Creates a new coordinate of the same type by transforming every axis value independently.
    ///
    /// The first error returned by `f` aborts the transformation.
    fn try_map_axes<E>(&self, f: impl FnMut(Axis, f64) -> Result<f64, E>) -> Result<Self, E>;

    /// Iterates over `(axis, value)` pairs of all present axes in `x, y, z, m` order.
    fn axes(&self) -> impl Iterator<Item = (Axis, f64)> {
        [
            Some((Axis::X, self.x())),
            Some((Axis::Y, self.y())),
            self.z().map(|z| (Axis::Z, z)),
            self.m().map(|m| (Axis::M, m)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Writes a coordinate as `(x: 1.0, y: 2.0[, z: ..][, m: ..])`.
pub(crate) fn write_coordinate(f: &mut Formatter<'_>, c: &impl Coordinate) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, (axis, value)) in c.axes().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{axis}: {value:?}")?;
    }
    write!(f, ")")
}

/// Coordinate with `x` and `y` axes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate2D {
    /// X axis value.
    pub x: f64,
    /// Y axis value.
    pub y: f64,
}

impl Coordinate2D {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Coordinate for Coordinate2D {
    const HAS_Z: bool = false;
    const HAS_M: bool = false;

    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }

    fn try_map_axes<E>(&self, mut f: impl FnMut(Axis, f64) -> Result<f64, E>) -> Result<Self, E> {
        Ok(Self {
            x: f(Axis::X, self.x)?,
            y: f(Axis::Y, self.y)?,
        })
    }
}

impl From<[f64; 2]> for Coordinate2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Coordinate with `x`, `y` and measure axes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate2DM {
    /// X axis value.
    pub x: f64,
    /// Y axis value.
    pub y: f64,
    /// Measure value.
    pub m: f64,
}

impl Coordinate2DM {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m }
    }
}

impl Coordinate for Coordinate2DM {
    const HAS_Z: bool = false;
    const HAS_M: bool = true;

    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn try_map_axes<E>(&self, mut f: impl FnMut(Axis, f64) -> Result<f64, E>) -> Result<Self, E> {
        Ok(Self {
            x: f(Axis::X, self.x)?,
            y: f(Axis::Y, self.y)?,
            m: f(Axis::M, self.m)?,
        })
    }
}

impl From<[f64; 3]> for Coordinate2DM {
    fn from([x, y, m]: [f64; 3]) -> Self {
        Self { x, y, m }
    }
}

/// Coordinate with `x`, `y` and `z` axes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate3D {
    /// X axis value.
    pub x: f64,
    /// Y axis value.
    pub y: f64,
    /// Elevation.
    pub z: f64,
}

impl Coordinate3D {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Coordinate for Coordinate3D {
    const HAS_Z: bool = true;
    const HAS_M: bool = false;

    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> Option<f64> {
        Some(self.z)
    }

    fn try_map_axes<E>(&self, mut f: impl FnMut(Axis, f64) -> Result<f64, E>) -> Result<Self, E> {
        Ok(Self {
            x: f(Axis::X, self.x)?,
            y: f(Axis::Y, self.y)?,
            z: f(Axis::Z, self.z)?,
        })
    }
}

impl From<[f64; 3]> for Coordinate3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Coordinate with `x`, `y`, `z` and measure axes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate3DM {
    /// X axis value.
    pub x: f64,
    /// Y axis value.
    pub y: f64,
    /// Elevation.
    pub z: f64,
    /// Measure value.
    pub m: f64,
}

impl Coordinate3DM {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }
}

impl Coordinate for Coordinate3DM {
    const HAS_Z: bool = true;
    const HAS_M: bool = true;

    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> Option<f64> {
        Some(self.z)
    }
    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn try_map_axes<E>(&self, mut f: impl FnMut(Axis, f64) -> Result<f64, E>) -> Result<Self, E> {
        Ok(Self {
            x: f(Axis::X, self.x)?,
            y: f(Axis::Y, self.y)?,
            z: f(Axis::Z, self.z)?,
            m: f(Axis::M, self.m)?,
        })
    }
}

impl From<[f64; 4]> for Coordinate3DM {
    fn from([x, y, z, m]: [f64; 4]) -> Self {
        Self { x, y, z, m }
    }
}

macro_rules! impl_display {
    ($($t:ty),*) => {
        $(
            impl Display for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write_coordinate(f, self)
                }
            }
        )*
    };
}

impl_display!(Coordinate2D, Coordinate2DM, Coordinate3D, Coordinate3DM);
