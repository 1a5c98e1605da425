use vista_core::Result;
use vista_math::{DMat4, Extent, Point3, Transform, Vector3};

use super::{check_size, draw_model, Material, Placement, Renderable};
use crate::target::DrawTarget;
use crate::view::View;

/// A rectangular box; its length runs along the placement axis.
#[derive(Debug, Clone)]
pub struct BoxShape {
    pub placement: Placement,
    pub material: Material,
    height: f64,
    width: f64,
}

impl BoxShape {
    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for negative sizes.
    pub fn new(placement: Placement, size: Vector3) -> Result<Self> {
        let mut shape = Self {
            placement,
            material: Material::default(),
            height: 1.0,
            width: 1.0,
        };
        shape.set_size(size)?;
        Ok(shape)
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

    /// `(length, height, width)`.
    pub fn size(&self) -> Vector3 {
        Vector3::new(self.placement.length(), self.height, self.width)
    }

    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] when any component is
    /// negative; nothing is changed in that case.
    pub fn set_size(&mut self, size: Vector3) -> Result<()> {
        check_size("length", size.x)?;
        check_size("height", size.y)?;
        check_size("width", size.z)?;
        self.placement.set_length(size.x)?;
        self.height = size.y;
        self.width = size.z;
        Ok(())
    }

    /// Maps the unit box into texture space, largest dimension spanning 0..1.
    pub fn material_matrix(&self) -> Transform {
        let size = self.size();
        let largest = size.max_element();
        let scale = if largest > 0.0 { size / largest } else { Vector3::ONE };
        Transform::from_mat4(DMat4::from_translation(Vector3::splat(0.5)) * DMat4::from_scale(scale))
    }
}

impl Renderable for BoxShape {
    fn center(&self) -> Point3 {
        self.placement.pos()
    }

    fn grow_extent(&self, extent: &mut Extent) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let tm = self.placement.model_world(1.0, self.size() * 0.5)?;
        extent.add_box(&tm, Point3::NEG_ONE, Point3::ONE);
        extent.add_body();
        Ok(())
    }

    fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let tm = self.placement.model_world(view.gcf(), self.size())?;
        draw_model(target, &tm, Some(&self.material), view.models_mut().box_list());
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
