//! Thick-curve tessellation: a colored polyline becomes a faceted tube.

mod batch;
mod path;
mod slice;
mod tessellator;
mod tube;

pub use batch::tessellate_batch;
pub use path::CurvePath;
pub use slice::{CurveSlice, CHUNK_STEP, LOWER_OFFSET, MAX_CHUNK_RINGS, UPPER_OFFSET};
pub use tessellator::{CurveConfig, CurveTessellator, StereoMode, TessellationContext};
pub use tube::{CurveGeometry, LineStrip, StripRun, TubeMesh, VertexColors};
