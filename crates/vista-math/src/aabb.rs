use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// A zero-volume box around a single point.
    pub fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::from_point(*first);
        for &p in rest {
            aabb.include(p);
        }
        Some(aabb)
    }

    /// Grow in place so that `p` lies inside.
    pub fn include(&mut self, p: Point3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_no_points() {
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_include_grows_box() {
        let mut aabb = Aabb3::from_point(dvec3(0.0, 0.0, 0.0));
        aabb.include(dvec3(1.0, -2.0, 0.5));
        assert_eq!(aabb.min, dvec3(0.0, -2.0, 0.0));
        assert_eq!(aabb.max, dvec3(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_center_and_extents() {
        let aabb = Aabb3::new(dvec3(-1.0, 0.0, 2.0), dvec3(3.0, 2.0, 2.0));
        assert_eq!(aabb.center(), dvec3(1.0, 1.0, 2.0));
        assert_eq!(aabb.extents(), dvec3(4.0, 2.0, 0.0));
    }
}
