use crate::{DMat4, DVec4, Point3, Vector3};
use serde::{Deserialize, Serialize};
use vista_core::{Result, VistaError};

/// Above this `|cos|` the axis and up vectors are treated as parallel.
const PARALLEL_LIMIT: f64 = 0.98;

/// Affine transform stored column-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    /// Build the model-to-world transform of an oriented object.
    ///
    /// A unit model is scaled by `object_scale * world_scale`, its local X axis
    /// is turned onto `axis`, local Z is taken from `axis × up` and local Y
    /// completes the right-handed basis; the result is finally translated to
    /// `pos * world_scale`.
    ///
    /// When `axis` and `up` are (nearly) parallel the Z axis comes from
    /// `axis × -X`, or from `axis × Z` when the axis itself lies along X.
    ///
    /// # Errors
    /// Returns [`VistaError::Geometry`] when `axis` is zero or non-finite, or
    /// when no usable Z axis can be derived.
    pub fn model_world(
        axis: Vector3,
        up: Vector3,
        pos: Point3,
        world_scale: f64,
        object_scale: Vector3,
    ) -> Result<Self> {
        let x_axis = axis.normalize_or_zero();
        if x_axis == Vector3::ZERO {
            return Err(VistaError::Geometry(format!(
                "object axis {axis} has no direction"
            )));
        }

        let alignment = axis.dot(up) / up.length_squared();
        // NaN (zero up vector) falls through to the fallback branch.
        let z_axis = if alignment.abs() <= PARALLEL_LIMIT {
            axis.cross(up).normalize_or_zero()
        } else if x_axis.dot(Vector3::NEG_X).abs() > PARALLEL_LIMIT {
            axis.cross(Vector3::Z).normalize_or_zero()
        } else {
            axis.cross(Vector3::NEG_X).normalize_or_zero()
        };
        if z_axis == Vector3::ZERO {
            return Err(VistaError::Geometry(format!(
                "cannot orient axis {axis} against up {up}"
            )));
        }
        let y_axis = z_axis.cross(axis).normalize_or_zero();

        let scale = object_scale * world_scale;
        let translation = pos * world_scale;
        Ok(Self::from_mat4(DMat4::from_cols(
            (x_axis * scale.x).extend(0.0),
            (y_axis * scale.y).extend(0.0),
            (z_axis * scale.z).extend(0.0),
            DVec4::new(translation.x, translation.y, translation.z, 1.0),
        )))
    }

    /// Column `i` (0..3) of the linear part.
    pub fn column(&self, i: usize) -> Vector3 {
        self.to_mat4().col(i).truncate()
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }

    pub fn then(&self, other: &Transform) -> Transform {
        Self::from_mat4(other.to_mat4() * self.to_mat4())
    }

    /// Rotation part only: the linear columns with scale and translation removed.
    pub fn orientation(&self) -> Transform {
        let m = self.to_mat4();
        Self::from_mat4(DMat4::from_cols(
            m.x_axis.truncate().normalize_or_zero().extend(0.0),
            m.y_axis.truncate().normalize_or_zero().extend(0.0),
            m.z_axis.truncate().normalize_or_zero().extend(0.0),
            DVec4::W,
        ))
    }

    pub fn inverse(&self) -> Option<Transform> {
        let m = self.to_mat4();
        if m.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self::from_mat4(m.inverse()))
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotation by `angle` radians about the line through `origin` along `axis`.
///
/// # Errors
/// Returns [`VistaError::Geometry`] when `axis` is zero.
pub fn rotation(angle: f64, axis: Vector3, origin: Point3) -> Result<Transform> {
    let unit = axis.normalize_or_zero();
    if unit == Vector3::ZERO {
        return Err(VistaError::Geometry("rotation axis is zero-length".into()));
    }
    let m = DMat4::from_translation(origin)
        * DMat4::from_axis_angle(unit, angle)
        * DMat4::from_translation(-origin);
    Ok(Transform::from_mat4(m))
}
