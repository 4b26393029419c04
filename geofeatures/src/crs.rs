//! Coordinate reference systems.
//!
//! A reference system is a zero-sized marker that tells how the coordinates of a geometry should be interpreted.
//! It never takes part in numeric computations and is not stored anywhere beyond the type of the geometry, but two
//! geometries in different reference systems are never equal, even if their coordinates are.

use std::fmt::Debug;

use serde::{Deserialize, Serialize, Serializer};

/// Reference system marker trait.
pub trait CoordinateReferenceSystem: Debug + Copy + Default + PartialEq {
    /// Unique name of the reference system.
    const NAME: &'static str;

    /// Returns the name of the reference system.
    fn name(&self) -> &'static str {
        Self::NAME
    }
}

pub(crate) fn same_crs<R1: CoordinateReferenceSystem, R2: CoordinateReferenceSystem>(
    _: &R1,
    _: &R2,
) -> bool {
    R1::NAME == R2::NAME
}

/// Serializes the reference system of a geometry as its [`CoordinateReferenceSystem::NAME`].
pub(crate) fn serialize_name<R: CoordinateReferenceSystem, S: Serializer>(
    _: &R,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(R::NAME)
}

/// Planar cartesian coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Cartesian;

impl CoordinateReferenceSystem for Cartesian {
    const NAME: &'static str = "Cartesian";
}

/// Coordinates on the surface of an ellipsoid (`x` is longitude, `y` is latitude).
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Ellipsoidal;

impl CoordinateReferenceSystem for Ellipsoidal {
    const NAME: &'static str = "Ellipsoidal";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        assert!(same_crs(&Cartesian, &Cartesian));
        assert!(!same_crs(&Cartesian, &Ellipsoidal));
        assert_eq!(Cartesian.name(), "Cartesian");
        assert_eq!(std::mem::size_of::<Cartesian>(), 0);
    }
}
