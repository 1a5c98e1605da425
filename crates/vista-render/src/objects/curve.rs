use vista_core::Result;
use vista_math::{Aabb3, Extent, Point3, Rgb};
use vista_mesh::{CurveConfig, CurveGeometry, CurvePath, CurveTessellator, VertexColors};

use super::Renderable;
use crate::target::DrawTarget;
use crate::view::View;

/// A polyline drawn as a line strip (zero radius) or a faceted tube.
#[derive(Debug, Clone)]
pub struct Curve {
    path: CurvePath,
    tessellator: CurveTessellator,
    /// Color of points appended to an empty curve.
    default_color: Rgb,
}

impl Curve {
    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for an invalid config.
    pub fn new(config: CurveConfig) -> Result<Self> {
        Self::from_path(CurvePath::new(), config)
    }

    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for an invalid config.
    pub fn from_path(path: CurvePath, config: CurveConfig) -> Result<Self> {
        Ok(Self {
            path,
            tessellator: CurveTessellator::new(config)?,
            default_color: Rgb::WHITE,
        })
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut CurvePath {
        &mut self.path
    }

    pub fn config(&self) -> &CurveConfig {
        self.tessellator.config()
    }

    pub fn radius(&self) -> f64 {
        self.tessellator.radius()
    }

    /// # Errors
    /// Returns [`vista_core::VistaError::Configuration`] for a negative radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.tessellator = CurveTessellator::new(CurveConfig {
            radius,
            ..*self.config()
        })?;
        Ok(())
    }

    pub fn set_default_color(&mut self, color: Rgb) {
        self.default_color = color;
    }

    pub fn push(&mut self, pos: Point3, color: Rgb) {
        self.path.push(pos, color);
    }

    /// Append a point in the previous point's color, then keep only the
    /// newest `retain` points (all of them when `retain` is zero).
    pub fn append(&mut self, pos: Point3, retain: usize) {
        let color = self.path.colors().last().copied().unwrap_or(self.default_color);
        self.path.push(pos, color);
        if retain > 0 {
            self.path.retain_last(retain);
        }
    }

    /// Tessellate for `view` without drawing.
    pub fn geometry(&self, view: &View) -> Result<CurveGeometry> {
        self.tessellator.tessellate(&self.path, &view.tessellation_context())
    }
}

impl Renderable for Curve {
    fn center(&self) -> Point3 {
        Aabb3::from_points(self.path.positions())
            .map(|b| b.center())
            .unwrap_or(Point3::ZERO)
    }

    fn grow_extent(&self, extent: &mut Extent) -> Result<()> {
        if self.is_degenerate() {
            return Ok(());
        }
        let radius = self.radius();
        for &p in self.path.positions() {
            if radius == 0.0 {
                extent.add_point(p);
            } else {
                extent.add_sphere(p, radius);
            }
        }
        extent.add_body();
        Ok(())
    }

    fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        match self.geometry(view)? {
            CurveGeometry::Empty => {}
            CurveGeometry::LineStrip(strip) => {
                if let VertexColors::Uniform(color) = strip.colors {
                    target.set_color(color, 1.0);
                }
                target.draw_line_strip(&strip, self.config().antialias);
            }
            CurveGeometry::Tube(mesh) => {
                if let VertexColors::Uniform(color) = mesh.colors {
                    target.set_color(color, 1.0);
                }
                for run in &mesh.strips {
                    target.draw_tube_strip(&mesh, run);
                }
            }
        }
        Ok(())
    }

    fn is_degenerate(&self) -> bool {
        self.path.is_degenerate()
    }
}
