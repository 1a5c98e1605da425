use vista_core::{Result, VistaError};
use vista_math::{rotation, Point3, Transform, Vector3};

use super::Trail;

/// Position and orientation of an oriented primitive.
///
/// The axis points along the model's local X and its length is the object's
/// length; `up` picks the roll about the axis. The axis is kept as a unit
/// direction plus a length, so shrinking an object to zero length and back
/// keeps its heading.
#[derive(Debug, Clone)]
pub struct Placement {
    pos: Point3,
    direction: Vector3,
    length: f64,
    up: Vector3,
    trail: Option<Trail>,
}

impl Placement {
    /// A zero `axis` gives a zero-length object heading along +X.
    pub fn new(pos: Point3, axis: Vector3, up: Vector3) -> Self {
        let direction = axis.normalize_or_zero();
        Self {
            pos,
            direction: if direction == Vector3::ZERO { Vector3::X } else { direction },
            length: axis.length(),
            up,
            trail: None,
        }
    }

    pub fn at(pos: Point3) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    pub fn pos(&self) -> Point3 {
        self.pos
    }

    /// Move the object, recording the new position on its trail.
    pub fn set_pos(&mut self, pos: Point3) -> Point3 {
        self.pos = pos;
        if let Some(trail) = &mut self.trail {
            trail.record(pos);
        }
        pos
    }

    pub fn axis(&self) -> Vector3 {
        self.direction * self.length
    }

    /// Point the object along `axis`, rotating `up` along with it. A zero
    /// axis only sets the length to zero.
    ///
    /// # Errors
    /// Propagates rotation failures; a parallel axis only rescales.
    pub fn set_axis(&mut self, axis: Vector3) -> Result<()> {
        let length = axis.length();
        if length == 0.0 {
            self.length = 0.0;
            return Ok(());
        }
        let turn = self.direction.cross(axis);
        if turn.length() == 0.0 {
            self.direction = axis / length;
            self.length = length;
            return Ok(());
        }
        let angle = axis.angle_between(self.direction);
        self.length = length;
        self.rotate(angle, turn, self.pos)
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn set_up(&mut self, up: Vector3) {
        self.up = up;
    }

    /// Rotate the axis and up vectors by `angle` about the line through
    /// `origin` along `axis`. The position is left where it is.
    ///
    /// # Errors
    /// Returns [`VistaError::Geometry`] for a zero rotation axis.
    pub fn rotate(&mut self, angle: f64, axis: Vector3, origin: Point3) -> Result<()> {
        let r = rotation(angle, axis, origin)?;
        let mut up = self.up;
        if self.direction.cross(up) == Vector3::ZERO {
            up = Vector3::X;
            if self.direction.cross(up) == Vector3::ZERO {
                up = Vector3::Y;
            }
        }
        self.up = r.transform_vector(up);
        self.direction = r.transform_vector(self.direction);
        Ok(())
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// # Errors
    /// Returns [`VistaError::Configuration`] for a negative length.
    pub fn set_length(&mut self, length: f64) -> Result<()> {
        if length < 0.0 {
            return Err(VistaError::Configuration(format!("length cannot be negative, got {length}")));
        }
        self.length = length;
        Ok(())
    }

    /// Model-to-world transform for a unit model scaled by `object_scale`.
    ///
    /// # Errors
    /// Returns [`VistaError::Geometry`] for a zero-length object.
    pub fn model_world(&self, world_scale: f64, object_scale: Vector3) -> Result<Transform> {
        Transform::model_world(self.axis(), self.up, self.pos, world_scale, object_scale)
    }

    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    /// Start recording positions; the current position is the first point.
    pub fn set_trail(&mut self, mut trail: Trail) {
        trail.record(self.pos);
        self.trail = Some(trail);
    }

    pub fn clear_trail(&mut self) -> Option<Trail> {
        self.trail.take()
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Point3::ZERO, Vector3::X, Vector3::Y)
    }
}
