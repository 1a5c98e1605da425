use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A plane in 3D space defined by a point and unit normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    /// Build a plane from a normal the caller has already normalized.
    pub fn from_unit_normal(origin: Point3, normal: Vector3) -> Self {
        Self { origin, normal }
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Mirror a point to the other side of this plane.
    pub fn reflect_point(&self, point: Point3) -> Point3 {
        point - self.normal * (2.0 * self.signed_distance(point))
    }
}
