//! Level-of-detail selection from on-screen size.
//!
//! Coverage is the object's radius in pixels (see [`View::pixel_coverage`]);
//! a negative coverage means the object is behind the camera but may still
//! be visible, so it gets a generous level.
//!
//! [`View::pixel_coverage`]: crate::View::pixel_coverage

use log::trace;

/// Highest level of detail in the model tables.
pub const MAX_LOD: usize = 5;

/// Cylinders are always picked at this level.
pub const CYLINDER_PICK_LOD: usize = 2;

pub fn sphere_lod(coverage: f64, lod_adjust: i32) -> usize {
    let base = if coverage < 0.0 {
        4
    } else if coverage < 30.0 {
        0
    } else if coverage < 100.0 {
        1
    } else if coverage < 500.0 {
        2
    } else if coverage < 5000.0 {
        3
    } else {
        4
    };
    let lod = biased(base, lod_adjust);
    trace!("sphere coverage {coverage:.1}px -> lod {lod}");
    lod
}

pub fn cylinder_lod(coverage: f64, lod_adjust: i32) -> usize {
    let base = if coverage < 0.0 {
        5
    } else if coverage < 10.0 {
        0
    } else if coverage < 25.0 {
        1
    } else if coverage < 50.0 {
        2
    } else if coverage < 196.0 {
        3
    } else if coverage < 400.0 {
        4
    } else {
        5
    };
    let lod = biased(base, lod_adjust);
    trace!("cylinder coverage {coverage:.1}px -> lod {lod}");
    lod
}

fn biased(base: i32, lod_adjust: i32) -> usize {
    base.saturating_add(lod_adjust).clamp(0, MAX_LOD as i32) as usize
}
