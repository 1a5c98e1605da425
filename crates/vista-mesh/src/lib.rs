pub mod curve;
pub mod quadric;
pub mod shapes;
pub mod triangle_mesh;

pub use curve::{
    tessellate_batch, CurveConfig, CurveGeometry, CurvePath, CurveTessellator, LineStrip,
    StereoMode, StripRun, TessellationContext, TubeMesh, VertexColors,
};
pub use quadric::{cylinder_model, sphere_model, CYLINDER_LOD, SPHERE_LOD};
pub use shapes::{box_model, pyramid_model};
pub use triangle_mesh::TriangleMesh;
