use vista_core::{Result, VistaError};
use vista_math::{Aabb3, Point3, Rgb, Vector3};

/// Colors attached to tessellated vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexColors {
    /// Every vertex shares one color; no per-vertex buffer exists.
    Uniform(Rgb),
    /// One color per vertex, parallel to the position buffer.
    PerVertex(Vec<Rgb>),
}

impl VertexColors {
    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }

    pub fn per_vertex(&self) -> Option<&[Rgb]> {
        match self {
            Self::Uniform(_) => None,
            Self::PerVertex(colors) => Some(colors),
        }
    }

    /// Color of vertex `i`.
    pub fn color(&self, i: usize) -> Option<Rgb> {
        match self {
            Self::Uniform(c) => Some(*c),
            Self::PerVertex(colors) => colors.get(i).copied(),
        }
    }
}

/// A zero-radius curve, drawn as a plain line strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStrip {
    pub points: Vec<Point3>,
    pub colors: VertexColors,
}

/// One triangle-strip submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripRun {
    /// Tube side this strip covers (`0..sides`).
    pub side: usize,
    /// Offset into the [`CurveSlice`](super::CurveSlice) template.
    pub template_offset: usize,
    /// First ring of the chunk.
    pub first_ring: usize,
    /// Start of the run in [`TubeMesh::indices`].
    pub offset: usize,
    /// Number of indices in the run.
    pub len: usize,
}

/// Vertex rings of a thick curve plus the strip runs that stitch them.
///
/// Vertex `(ring, side)` is stored at `ring * sides + side`.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub colors: VertexColors,
    pub indices: Vec<u32>,
    pub strips: Vec<StripRun>,
    pub sides: usize,
    pub closed: bool,
}

impl TubeMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn ring_count(&self) -> usize {
        self.positions.len() / self.sides
    }

    pub fn ring(&self, r: usize) -> &[Point3] {
        &self.positions[r * self.sides..(r + 1) * self.sides]
    }

    pub fn ring_normals(&self, r: usize) -> &[Vector3] {
        &self.normals[r * self.sides..(r + 1) * self.sides]
    }

    /// Indices of one strip run.
    pub fn strip_indices(&self, run: &StripRun) -> &[u32] {
        &self.indices[run.offset..run.offset + run.len]
    }

    /// Strip runs belonging to tube side `side`, in ring order.
    pub fn side_strips(&self, side: usize) -> impl Iterator<Item = &StripRun> {
        self.strips.iter().filter(move |run| run.side == side)
    }

    /// Triangles drawn across all strips.
    pub fn triangle_count(&self) -> usize {
        self.strips.iter().map(|run| run.len.saturating_sub(2)).sum()
    }

    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

/// Result of tessellating one curve.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveGeometry {
    /// Fewer than two distinct points: draw nothing.
    Empty,
    LineStrip(LineStrip),
    Tube(TubeMesh),
}

impl CurveGeometry {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// # Errors
    /// Returns [`VistaError::DegenerateInput`] unless this is a tube.
    pub fn into_tube(self) -> Result<TubeMesh> {
        match self {
            Self::Tube(mesh) => Ok(mesh),
            Self::Empty => Err(VistaError::DegenerateInput(
                "curve has fewer than two distinct points".into(),
            )),
            Self::LineStrip(_) => Err(VistaError::DegenerateInput(
                "zero-radius curve has no tube geometry".into(),
            )),
        }
    }
}
