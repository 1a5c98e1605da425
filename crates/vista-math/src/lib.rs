pub mod aabb;
pub mod color;
pub mod extent;
pub mod plane;
pub mod transform;

pub use glam::{dvec3, DMat3, DMat4, DVec3, DVec4};
pub use aabb::Aabb3;
pub use color::Rgb;
pub use extent::Extent;
pub use plane::Plane;
pub use transform::{rotation, Transform};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
