//! World-space bounding extent grown one primitive at a time.

use crate::{Aabb3, Point3, Transform, Vector3};

/// Running world bounds plus the number of bodies that contributed to them.
///
/// Shapes add their representative points, boxes or circles and then call
/// [`Extent::add_body`] once, so that camera fitting can tell an empty scene
/// from one holding a single point-like body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    bounds: Option<Aabb3>,
    bodies: usize,
}

impl Extent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, p: Point3) {
        match &mut self.bounds {
            Some(aabb) => aabb.include(p),
            None => self.bounds = Some(Aabb3::from_point(p)),
        }
    }

    /// Add the eight corners of the local box `[lo, hi]` mapped through `tm`.
    pub fn add_box(&mut self, tm: &Transform, lo: Point3, hi: Point3) {
        for i in 0..8 {
            let corner = Point3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            );
            self.add_point(tm.transform_point(corner));
        }
    }

    /// Add the tight axis-aligned bounds of a circle.
    pub fn add_circle(&mut self, center: Point3, normal: Vector3, radius: f64) {
        let n = normal.normalize_or_zero();
        if n == Vector3::ZERO {
            self.add_sphere(center, radius);
            return;
        }
        let reach = Vector3::new(
            radius * (1.0 - n.x * n.x).max(0.0).sqrt(),
            radius * (1.0 - n.y * n.y).max(0.0).sqrt(),
            radius * (1.0 - n.z * n.z).max(0.0).sqrt(),
        );
        self.add_point(center - reach);
        self.add_point(center + reach);
    }

    pub fn add_sphere(&mut self, center: Point3, radius: f64) {
        let reach = Vector3::splat(radius.abs());
        self.add_point(center - reach);
        self.add_point(center + reach);
    }

    pub fn add_body(&mut self) {
        self.bodies += 1;
    }

    pub fn bounds(&self) -> Option<Aabb3> {
        self.bounds
    }

    pub fn body_count(&self) -> usize {
        self.bodies
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}
