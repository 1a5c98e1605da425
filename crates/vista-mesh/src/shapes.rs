//! Fixed vertex/normal tables for the box and pyramid models.
//!
//! Both models are drawn from the inside as well as the outside so that
//! translucent or clipped objects still show their far faces.

use vista_math::{Point3, Vector3};

use crate::TriangleMesh;

const S: f64 = 0.5;

/// Quad corners per face, counter-clockwise seen from outside.
const BOX_FACES: [[[f64; 3]; 4]; 6] = [
    [[S, S, S], [S, -S, S], [S, -S, -S], [S, S, -S]],     // right
    [[-S, S, -S], [-S, -S, -S], [-S, -S, S], [-S, S, S]], // left
    [[-S, -S, S], [-S, -S, -S], [S, -S, -S], [S, -S, S]], // bottom
    [[-S, S, -S], [-S, S, S], [S, S, S], [S, S, -S]],     // top
    [[S, S, S], [-S, S, S], [-S, -S, S], [S, -S, S]],     // front
    [[-S, -S, -S], [-S, S, -S], [S, S, -S], [S, -S, -S]], // back
];

const BOX_NORMALS: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const PYRAMID_VERTICES: [[f64; 3]; 5] = [
    [0.0, S, S],
    [0.0, -S, S],
    [0.0, -S, -S],
    [0.0, S, -S],
    [1.0, 0.0, 0.0],
];

const PYRAMID_TRIANGLES: [[usize; 3]; 6] = [
    [3, 0, 4], // top
    [1, 2, 4], // bottom
    [0, 1, 4], // front
    [3, 4, 2], // back
    [0, 3, 2], // base
    [0, 2, 1], // base
];

const PYRAMID_NORMALS: [[f64; 3]; 6] = [
    [1.0, 2.0, 0.0],
    [1.0, -2.0, 0.0],
    [1.0, 0.0, 2.0],
    [1.0, 0.0, -2.0],
    [-1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
];

fn point(v: [f64; 3]) -> Point3 {
    Point3::from_array(v)
}

/// Unit cube centered at the origin, inside faces first.
///
/// `skip_right_face` leaves out the +X face, for shapes that attach another
/// model there.
pub fn box_model(skip_right_face: bool) -> TriangleMesh {
    let first = usize::from(skip_right_face);
    let mut outside = TriangleMesh::default();
    for (face, normal) in BOX_FACES.into_iter().zip(BOX_NORMALS).skip(first) {
        let [v0, v1, v2, v3] = face.map(point);
        let n = Vector3::from_array(normal);
        outside.push_triangle([v0, v1, v2], n);
        outside.push_triangle([v0, v2, v3], n);
    }

    let mut mesh = outside.flipped();
    mesh.merge(&outside);
    mesh
}

/// Square-based pyramid with its base at x=0 and apex at (1, 0, 0).
pub fn pyramid_model() -> TriangleMesh {
    let mut outside = TriangleMesh::default();
    for (tri, normal) in PYRAMID_TRIANGLES.into_iter().zip(PYRAMID_NORMALS) {
        let corners = tri.map(|i| point(PYRAMID_VERTICES[i]));
        outside.push_triangle(corners, Vector3::from_array(normal).normalize());
    }

    let mut mesh = outside.flipped();
    mesh.merge(&outside);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winding_normal(mesh: &TriangleMesh, tri: &[u32]) -> Vector3 {
        let p = |i: u32| mesh.positions[i as usize];
        (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0])).normalize()
    }

    #[test]
    fn test_box_counts() {
        let mesh = box_model(false);
        assert_eq!(mesh.triangle_count(), 24);
        assert_eq!(mesh.vertex_count(), 72);
        let skipped = box_model(true);
        assert_eq!(skipped.triangle_count(), 20);
    }

    #[test]
    fn test_box_winding_matches_normals() {
        let mesh = box_model(false);
        for tri in mesh.indices.chunks_exact(3) {
            let n = mesh.normals[tri[0] as usize];
            assert!((winding_normal(&mesh, tri) - n).length() < 1e-12);
        }
    }

    #[test]
    fn test_box_outside_half_faces_out() {
        let mesh = box_model(false);
        let half = mesh.indices.len() / 2;
        for tri in mesh.indices[half..].chunks_exact(3) {
            let n = mesh.normals[tri[0] as usize];
            let p = mesh.positions[tri[0] as usize];
            assert!(n.dot(p) > 0.0);
        }
    }

    #[test]
    fn test_box_spans_unit_cube() {
        let bb = box_model(false).bounding_box();
        assert_eq!(bb.min, Point3::splat(-0.5));
        assert_eq!(bb.max, Point3::splat(0.5));
    }

    #[test]
    fn test_pyramid_winding_matches_normals() {
        let mesh = pyramid_model();
        assert_eq!(mesh.triangle_count(), 12);
        for tri in mesh.indices.chunks_exact(3) {
            let n = mesh.normals[tri[0] as usize];
            assert!((n.length() - 1.0).abs() < 1e-12);
            assert!((winding_normal(&mesh, tri) - n).length() < 1e-12);
        }
    }
}
