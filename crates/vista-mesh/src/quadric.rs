//! Quadric surfaces (sphere, open cylinder, disk) tessellated on a uniform
//! parameter grid.

use std::f64::consts::{PI, TAU};

use vista_math::{Point3, Vector3};

use crate::TriangleMesh;

/// `(slices, stacks)` of the compiled sphere model for each level of detail.
pub const SPHERE_LOD: [(usize, usize); 6] = [(13, 7), (19, 11), (35, 19), (55, 29), (70, 34), (140, 69)];

/// `(faces, stacks)` of the compiled cylinder model for each level of detail.
pub const CYLINDER_LOD: [(usize, usize); 6] = [(8, 1), (16, 1), (32, 3), (64, 6), (96, 10), (188, 20)];

/// Connect a `(u_divs+1) x (v_divs+1)` vertex grid into two triangles per cell.
fn grid_indices(u_divs: usize, v_divs: usize) -> Vec<u32> {
    let v_count = v_divs + 1;
    let idx = |ii: usize, jj: usize| -> u32 { (ii * v_count + jj) as u32 };
    let mut indices = Vec::with_capacity(u_divs * v_divs * 6);
    for i in 0..u_divs {
        for j in 0..v_divs {
            indices.extend_from_slice(&[idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)]);
            indices.extend_from_slice(&[idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)]);
        }
    }
    indices
}

/// Sphere centered at the origin with its poles on the Z axis.
///
/// Produces `(stacks+1) * (slices+1)` vertices and `2 * slices * stacks`
/// triangles wound outward.
pub fn sphere(radius: f64, slices: usize, stacks: usize) -> TriangleMesh {
    let total_verts = (stacks + 1) * (slices + 1);
    let mut positions = Vec::with_capacity(total_verts);
    let mut normals = Vec::with_capacity(total_verts);

    for i in 0..=stacks {
        let phi = PI * i as f64 / stacks as f64;
        for j in 0..=slices {
            let theta = TAU * j as f64 / slices as f64;
            let n = Vector3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
            positions.push(n * radius);
            normals.push(n);
        }
    }

    TriangleMesh {
        positions,
        normals,
        indices: grid_indices(stacks, slices),
    }
}

/// Open tube of the given radius running along +X from `0` to `length`.
pub fn cylinder(radius: f64, length: f64, slices: usize, stacks: usize) -> TriangleMesh {
    let total_verts = (slices + 1) * (stacks + 1);
    let mut positions = Vec::with_capacity(total_verts);
    let mut normals = Vec::with_capacity(total_verts);

    for i in 0..=slices {
        let theta = TAU * i as f64 / slices as f64;
        let n = Vector3::new(0.0, theta.cos(), theta.sin());
        for j in 0..=stacks {
            let x = length * j as f64 / stacks as f64;
            positions.push(Point3::new(x, 0.0, 0.0) + n * radius);
            normals.push(n);
        }
    }

    TriangleMesh {
        positions,
        normals,
        indices: grid_indices(slices, stacks),
    }
}

/// Flat disk in the YZ plane facing +X, split into `loops` concentric rings.
pub fn disk(radius: f64, slices: usize, loops: usize) -> TriangleMesh {
    let loops = loops.max(1);
    let mut positions = vec![Point3::ZERO];
    for k in 1..=loops {
        let r = radius * k as f64 / loops as f64;
        for j in 0..=slices {
            let theta = TAU * j as f64 / slices as f64;
            positions.push(Point3::new(0.0, r * theta.cos(), r * theta.sin()));
        }
    }

    let ring = |k: usize, j: usize| -> u32 { (1 + (k - 1) * (slices + 1) + j) as u32 };
    let mut indices = Vec::with_capacity(slices * (2 * loops - 1) * 3);
    for j in 0..slices {
        indices.extend_from_slice(&[0, ring(1, j), ring(1, j + 1)]);
    }
    for k in 2..=loops {
        for j in 0..slices {
            indices.extend_from_slice(&[ring(k - 1, j), ring(k, j), ring(k, j + 1)]);
            indices.extend_from_slice(&[ring(k - 1, j), ring(k, j + 1), ring(k - 1, j + 1)]);
        }
    }

    let normals = vec![Vector3::X; positions.len()];
    TriangleMesh {
        positions,
        normals,
        indices,
    }
}

/// Unit sphere model for level of detail `lod` (clamped to the table).
pub fn sphere_model(lod: usize) -> TriangleMesh {
    let (slices, stacks) = SPHERE_LOD[lod.min(SPHERE_LOD.len() - 1)];
    sphere(1.0, slices, stacks)
}

/// Closed unit cylinder model from x=0 to x=1 for level of detail `lod`.
pub fn cylinder_model(lod: usize) -> TriangleMesh {
    let (faces, stacks) = CYLINDER_LOD[lod.min(CYLINDER_LOD.len() - 1)];
    let mut mesh = cylinder(1.0, 1.0, faces, stacks);
    mesh.merge(&disk(1.0, faces, 1).flipped());
    let mut right = disk(1.0, faces, 1);
    right.translate(Vector3::X);
    mesh.merge(&right);
    mesh
}
