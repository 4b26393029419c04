//! Geometry value types for simple features: points, line strings, linear rings, polygons and their collections.
//!
//! Every geometry is parameterized by three types:
//! * the coordinate representation ([`Coordinate2D`], [`Coordinate2DM`], [`Coordinate3D`], [`Coordinate3DM`]),
//! * the precision policy ([`Floating`] or [`Fixed`]) applied to every axis value on construction,
//! * the coordinate reference system marker ([`Cartesian`] or [`Ellipsoidal`]).
//!
//! Geometries are validated once when created and are immutable after that.
//!
//! ```
//! use geofeatures::{Cartesian, Coordinate2D, Fixed, Geometry, Polygon};
//!
//! let precision = Fixed::new(100)?;
//! let polygon = Polygon::<Coordinate2D, _, _>::from_raw(
//!     &[[6.0, 1.0], [1.0, 1.0], [1.0, 3.0], [3.5, 4.0], [6.0, 3.0]],
//!     &[],
//!     precision,
//!     Cartesian,
//! )?;
//!
//! assert_eq!(polygon.outer_ring().len(), 6);
//! assert_eq!(polygon.outer_ring().last(), Some(&Coordinate2D::new(6.0, 1.0)));
//! assert!(!polygon.is_empty());
//! # Ok::<(), geofeatures::GeometryError>(())
//! ```

pub mod error;
pub use error::*;

pub mod precision;
pub use precision::*;

pub mod crs;
pub use crs::*;

pub mod coordinate;
pub use coordinate::*;

pub mod geometry;
pub use geometry::*;

pub mod bounds;
pub use bounds::Bounds;

mod position;
pub use position::Position;

mod point;
pub use point::*;

mod line_string;
pub use line_string::LineString;

mod linear_ring;
pub use linear_ring::*;

mod polygon;
pub use polygon::*;

mod multi;
pub use multi::*;

#[cfg(feature = "geo-types")]
pub mod geo_types;
