use vista_math::{Aabb3, Point3, Vector3};

/// Flat-shaded triangle mesh used for the compiled fixed-shape models.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append one triangle with its own three vertices sharing `normal`.
    pub fn push_triangle(&mut self, corners: [Point3; 3], normal: Vector3) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 3]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Merge another mesh into this one, offsetting indices appropriately.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// The same surface seen from the other side: winding reversed and
    /// normals negated.
    pub fn flipped(&self) -> TriangleMesh {
        let mut indices = Vec::with_capacity(self.indices.len());
        for tri in self.indices.chunks_exact(3) {
            indices.extend_from_slice(&[tri[2], tri[1], tri[0]]);
        }
        TriangleMesh {
            positions: self.positions.clone(),
            normals: self.normals.iter().map(|n| -*n).collect(),
            indices,
        }
    }

    /// Move every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_math::DVec3;

    fn single_triangle() -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        mesh.push_triangle(
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            DVec3::Z,
        );
        mesh
    }

    #[test]
    fn test_vertex_and_triangle_count() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.normals.len(), 3);
    }

    #[test]
    fn test_merge() {
        let mut a = single_triangle();
        let mut b = single_triangle();
        b.translate(DVec3::new(2.0, 0.0, 0.0));
        a.merge(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        // Second triangle indices should be offset by 3
        assert_eq!(&a.indices[3..], &[3, 4, 5]);
        assert_eq!(a.positions[3], DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_flipped_reverses_winding_and_normals() {
        let mesh = single_triangle();
        let inside = mesh.flipped();
        assert_eq!(inside.indices, vec![2, 1, 0]);
        assert!(inside.normals.iter().all(|n| *n == -DVec3::Z));
        assert_eq!(inside.positions, mesh.positions);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = single_triangle();
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.max, DVec3::ZERO);
    }
}
