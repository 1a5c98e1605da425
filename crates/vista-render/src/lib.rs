pub mod camera;
pub mod display_list;
pub mod lod;
pub mod objects;
pub mod pipeline;
pub mod scene;
pub mod target;
pub mod view;

// Re-export main types
pub use camera::Camera;
pub use display_list::{DisplayList, ModelCache};
pub use objects::{
    BoxShape, Curve, Cylinder, Material, Placement, Pyramid, Renderable, Sphere, Trail,
};
pub use pipeline::{pack_tube, PackedTube, TubeVertex};
pub use scene::{ObjectId, Scene};
pub use target::{CommandRecorder, CullFace, DrawCommand, DrawTarget};
pub use view::{View, ViewConfig};
