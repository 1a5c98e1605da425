use vista_math::{Point3, Rgb, Vector3};
use vista_mesh::TubeMesh;

/// Tube vertex with f32 data packed for GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl TubeVertex {
    pub fn new(pos: Point3, normal: Vector3, color: Rgb) -> Self {
        Self {
            position: pos.as_vec3().to_array(),
            normal: normal.as_vec3().to_array(),
            color: color.to_array(),
        }
    }

    /// Little-endian bytes of a vertex array, in field order.
    pub fn as_bytes(vertices: &[TubeVertex]) -> Vec<u8> {
        vertices
            .iter()
            .flat_map(|v| v.position.into_iter().chain(v.normal).chain(v.color))
            .flat_map(f32::to_le_bytes)
            .collect()
    }
}

/// A tube flattened into interleaved vertices plus one index range per strip.
#[derive(Debug, Clone)]
pub struct PackedTube {
    pub vertices: Vec<TubeVertex>,
    pub indices: Vec<u32>,
    /// `(offset, len)` into `indices` for each triangle strip, in draw order.
    pub strips: Vec<(usize, usize)>,
    pub vertex_buffer_bytes: Vec<u8>,
    pub index_buffer_bytes: Vec<u8>,
}

/// Convert a tessellated tube to GPU-ready buffers.
///
/// Uniform tubes get their single color copied into every vertex.
pub fn pack_tube(mesh: &TubeMesh) -> PackedTube {
    let vertices: Vec<TubeVertex> = mesh
        .positions
        .iter()
        .zip(&mesh.normals)
        .enumerate()
        .map(|(i, (pos, normal))| {
            let color = mesh.colors.color(i).unwrap_or(Rgb::WHITE);
            TubeVertex::new(*pos, *normal, color)
        })
        .collect();

    let vertex_buffer_bytes = TubeVertex::as_bytes(&vertices);
    let index_buffer_bytes = mesh.indices.iter().flat_map(|i| i.to_le_bytes()).collect();

    PackedTube {
        vertices,
        indices: mesh.indices.clone(),
        strips: mesh.strips.iter().map(|run| (run.offset, run.len)).collect(),
        vertex_buffer_bytes,
        index_buffer_bytes,
    }
}
