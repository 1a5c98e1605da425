//! Scene objects and the capability trait the scene drives them through.

mod box_shape;
mod curve;
mod cylinder;
mod placement;
mod pyramid;
mod sphere;
mod trail;

pub use box_shape::BoxShape;
pub use curve::Curve;
pub use cylinder::Cylinder;
pub use placement::Placement;
pub use pyramid::Pyramid;
pub use sphere::Sphere;
pub use trail::Trail;

use vista_core::{Result, VistaError};
use vista_math::{Extent, Point3, Rgb, Transform};

use crate::display_list::DisplayList;
use crate::target::{CullFace, DrawTarget};
use crate::view::View;

/// Anything the scene can bound and draw.
pub trait Renderable {
    /// Point the camera should consider this object's middle.
    fn center(&self) -> Point3;

    /// Grow `extent` by this object's world bounds and count it as a body.
    fn grow_extent(&self, extent: &mut Extent) -> Result<()>;

    fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()>;

    /// Draw for selection; most objects just draw normally.
    fn pick_render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        self.render(view, target)
    }

    /// Objects that should not be drawn at all.
    fn is_degenerate(&self) -> bool {
        false
    }
}

/// Surface color and opacity shared by the solid shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f32,
}

impl Material {
    pub fn new(color: Rgb) -> Self {
        Self { color, opacity: 1.0 }
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

fn check_size(name: &str, value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(VistaError::Configuration(format!("{name} cannot be negative, got {value}")));
    }
    Ok(value)
}

/// Draw a compiled model under `tm`, in `material` when given.
fn draw_model(target: &mut dyn DrawTarget, tm: &Transform, material: Option<&Material>, list: &DisplayList) {
    target.push_matrix();
    target.mult_matrix(&tm.to_mat4());
    if let Some(material) = material {
        target.set_color(material.color, material.opacity);
    }
    list.render(target);
    target.pop_matrix();
}

/// Like [`draw_model`], but a translucent convex model is drawn twice with
/// back faces first, so its far side shows through the near side.
fn draw_convex_model(target: &mut dyn DrawTarget, tm: &Transform, material: &Material, list: &DisplayList) {
    if !material.is_translucent() {
        draw_model(target, tm, Some(material), list);
        return;
    }
    target.push_matrix();
    target.mult_matrix(&tm.to_mat4());
    target.set_color(material.color, material.opacity);
    target.set_cull_face(Some(CullFace::Front));
    list.render(target);
    target.set_cull_face(Some(CullFace::Back));
    list.render(target);
    target.set_cull_face(None);
    target.pop_matrix();
}
