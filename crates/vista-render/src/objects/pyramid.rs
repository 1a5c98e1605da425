use vista_core::Result;
use vista_math::{Extent, Point3, Vector3};

use super::{check_size, draw_model, Material, Placement, Renderable};
use crate::target::DrawTarget;
use crate::view::View;

/// A square pyramid with its base at the position and apex at `pos + axis`.
#[derive(Debug, Clone)]
pub struct Pyramid {
    pub placement: Placement,
    pub material: Material,
    height: f64,
    width: f64,
}

impl Pyramid {
    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for a negative base.
    pub fn new(placement: Placement, height: f64, width: f64) -> Result<Self> {
        Ok(Self {
            placement,
            material: Material::default(),
            height: check_size("height", height)?,
            width: check_size("width", width)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) -> Result<()> {
        self.height = check_size("height", height)?;
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.width = check_size("width", width)?;
        Ok(())
    }

    pub fn size(&self) -> Vector3 {
        Vector3::new(self.placement.length(), self.height, self.width)
    }
}

impl Renderable for Pyramid {
    fn center(&self) -> Point3 {
        self.placement.pos() + self.placement.axis() / 3.0
    }

    fn grow_extent(&self, extent: &mut Extent) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let orient = self.placement.model_world(1.0, Vector3::ONE)?.orientation();
        let v_width = orient.transform_vector(Vector3::new(0.0, 0.0, self.width * 0.5));
        let v_height = orient.transform_vector(Vector3::new(0.0, self.height * 0.5, 0.0));
        let pos = self.placement.pos();
        extent.add_point(pos + self.placement.axis());
        extent.add_point(pos + v_width + v_height);
        extent.add_point(pos - v_width + v_height);
        extent.add_point(pos + v_width - v_height);
        extent.add_point(pos - v_width - v_height);
        extent.add_body();
        Ok(())
    }

    fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let tm = self.placement.model_world(view.gcf(), self.size())?;
        draw_model(target, &tm, Some(&self.material), view.models_mut().pyramid_list());
        if let Some(trail) = self.placement.trail() {
            trail.curve().render(view, target)?;
        }
        Ok(())
    }

    /// A zero-length object has no orientation to draw with.
    fn is_degenerate(&self) -> bool {
        self.placement.length() == 0.0
    }
}
