//! Error type used by the crate.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Fixed precision was configured with a non-positive scale.
    #[error("invalid precision configuration: scale must be positive, got {scale}")]
    InvalidConfiguration {
        /// The rejected scale.
        scale: i64,
    },
    /// A coordinate axis value is `NaN` or infinite (either as given or after quantization).
    #[error("invalid coordinate: {axis} axis value {value} is not finite")]
    InvalidCoordinate {
        /// Axis holding the offending value.
        axis: Axis,
        /// The offending value.
        value: f64,
    },
    /// Linear ring invariant is violated.
    #[error("invalid ring: {0}")]
    InvalidRing(#[from] RingError),
    /// A sub-element was built with a different precision or reference system than its container.
    #[error("element precision or reference system does not match the container")]
    IncompatiblePrecisionOrReferenceSystem,
    /// Accessor index is outside of `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items.
        len: usize,
    },
    /// Failure of the nested coordinate, ring or element at `index`.
    #[error("at index {index}: {source}")]
    AtIndex {
        /// Position of the offending item in its container.
        index: usize,
        /// Error of that item.
        source: Box<GeometryError>,
    },
}

impl GeometryError {
    /// Wraps the error into [`GeometryError::AtIndex`].
    pub fn at(self, index: usize) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping all [`GeometryError::AtIndex`] wrappers.
    pub fn root_cause(&self) -> &GeometryError {
        match self {
            Self::AtIndex { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the chain of indices leading to the root cause, outermost first.
    pub fn index_path(&self) -> Vec<usize> {
        let mut path = vec![];
        let mut curr = self;
        while let Self::AtIndex { index, source } = curr {
            path.push(*index);
            curr = source;
        }

        path
    }
}

/// Ways a linear ring can be malformed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// First and last coordinates differ.
    #[error("first and last coordinates are not equal")]
    NotClosed,
    /// Non-empty ring with less than 4 coordinates.
    #[error("ring has {count} coordinates, at least 4 are required")]
    TooFewPoints {
        /// Number of coordinates in the ring.
        count: usize,
    },
}

/// Coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X.
    X,
    /// Y.
    Y,
    /// Elevation.
    Z,
    /// Measure.
    M,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::M => "m",
        };
        f.write_str(name)
    }
}
