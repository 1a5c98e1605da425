use vista_math::{Extent, Point3, Vector3};

/// Perspective viewpoint used to estimate how large objects appear on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3,    // camera position
    pub target: Point3, // look-at target
    pub fov_y: f64,     // vertical FOV in radians
}

impl Camera {
    pub fn new(eye: Point3, target: Point3, fov_y: f64) -> Self {
        Self { eye, target, fov_y }
    }

    /// Unit view direction, or zero when eye and target coincide.
    pub fn forward(&self) -> Vector3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Aim at the center of `extent` from far enough away to see all of it.
    /// Returns `false` (leaving the camera alone) when the extent is empty.
    pub fn fit_to_extent(&mut self, extent: &Extent) -> bool {
        let Some(bounds) = extent.bounds() else {
            return false;
        };
        let center = bounds.center();
        let size = bounds.extents();
        let max_dim = size.x.max(size.y).max(size.z).max(1e-3);

        let distance = max_dim / (2.0 * (self.fov_y / 2.0).tan());

        let mut view_dir = self.forward();
        if view_dir == Vector3::ZERO {
            view_dir = Vector3::NEG_Z;
        }
        self.target = center;
        self.eye = center - view_dir * distance * 1.5; // 1.5x for padding
        true
    }
}

impl Default for Camera {
    /// Eye at (0, 0, 5) looking at the origin with a 45° FOV.
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 5.0), Point3::ZERO, std::f64::consts::FRAC_PI_4)
    }
}
