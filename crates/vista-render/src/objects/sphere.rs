use vista_core::Result;
use vista_math::{Extent, Point3, Vector3};

use super::{check_size, draw_convex_model, Material, Placement, Renderable};
use crate::lod::sphere_lod;
use crate::target::DrawTarget;
use crate::view::View;

#[derive(Debug, Clone)]
pub struct Sphere {
    pub placement: Placement,
    pub material: Material,
    radius: f64,
}

impl Sphere {
    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for a negative radius.
    pub fn new(pos: Point3, radius: f64) -> Result<Self> {
        Ok(Self {
            placement: Placement::at(pos),
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

    /// Per-axis scale of the unit sphere model.
    pub fn scale(&self) -> Vector3 {
        Vector3::splat(self.radius)
    }
}

impl Renderable for Sphere {
    fn center(&self) -> Point3 {
        self.placement.pos()
    }

    fn grow_extent(&self, extent: &mut Extent) -> Result<()> {
        extent.add_sphere(self.placement.pos(), self.radius);
        extent.add_body();
        Ok(())
    }

    fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let coverage = view.pixel_coverage(self.placement.pos(), self.radius);
        let lod = sphere_lod(coverage, view.lod_adjust());
        let tm = self.placement.model_world(view.gcf(), self.scale())?;
        draw_convex_model(target, &tm, &self.material, view.models_mut().sphere_list(lod));
        if let Some(trail) = self.placement.trail() {
            trail.curve().render(view, target)?;
        }
        Ok(())
    }

    fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }
}
