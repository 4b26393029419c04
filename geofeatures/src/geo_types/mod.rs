//! Conversions into [`geo_types`] geometries.
//!
//! `geo_types` geometries are two-dimensional, so only the stored `x` and `y` values are copied and `z`/`m` axes
//! are dropped. Reference system and precision policy are not represented on the `geo_types` side.

use geo_types::{coord, Coord};

use crate::coordinate::Coordinate;

mod line_string;
mod multi;
mod point;
mod polygon;

fn to_coord(c: &impl Coordinate) -> Coord<f64> {
    coord!(x: c.x(), y: c.y())
}
