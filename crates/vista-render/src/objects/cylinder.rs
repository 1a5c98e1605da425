use vista_core::Result;
use vista_math::{Extent, Point3, Vector3};

use super::{check_size, draw_convex_model, draw_model, Material, Placement, Renderable};
use crate::lod::{cylinder_lod, CYLINDER_PICK_LOD};
use crate::target::DrawTarget;
use crate::view::View;

/// A closed cylinder from `pos` to `pos + axis`.
#[derive(Debug, Clone)]
pub struct Cylinder {
    pub placement: Placement,
    pub material: Material,
    radius: f64,
}

impl Cylinder {
    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for a negative radius.
    pub fn new(pos: Point3, axis: Vector3, radius: f64) -> Result<Self> {
        Ok(Self {
            placement: Placement::new(pos, axis, Vector3::Y),
            material: Material::default(),
            radius: check_size("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = check_size("radius", radius)?;
        Ok(())
    }

    fn scale(&self) -> Vector3 {
        Vector3::new(self.placement.length(), self.radius, self.radius)
    }
}

impl Renderable for Cylinder {
    fn center(&self) -> Point3 {
        self.placement.pos() + self.placement.axis() * 0.5
    }

    fn grow_extent(&self, extent: &mut Extent) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let pos = self.placement.pos();
        let axis = self.placement.axis();
        extent.add_circle(pos, axis, self.radius);
        extent.add_circle(pos + axis, axis, self.radius);
        extent.add_body();
        Ok(())
    }

    fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let coverage = view.pixel_coverage(self.placement.pos(), self.radius);
        let lod = cylinder_lod(coverage, view.lod_adjust());
        let tm = self.placement.model_world(view.gcf(), self.scale())?;
        draw_convex_model(target, &tm, &self.material, view.models_mut().cylinder_list(lod));
        if let Some(trail) = self.placement.trail() {
            trail.curve().render(view, target)?;
        }
        Ok(())
    }

    fn pick_render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let tm = self.placement.model_world(view.gcf(), self.scale())?;
        draw_model(target, &tm, None, view.models_mut().cylinder_list(CYLINDER_PICK_LOD));
        Ok(())
    }

    fn is_degenerate(&self) -> bool {
        self.radius == 0.0 || self.placement.length() == 0.0
    }
}
