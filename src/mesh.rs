//! Heightfield to triangle mesh conversion.
//!
//! Builds an R×R vertex grid centered on the origin, two triangles per
//! quad, then recomputes smooth normals and UV-space tangents over the
//! finished geometry. A full rebuild every call; nothing is cached.

use glam::{Vec2, Vec3, Vec4};

use crate::config::MeshParams;
use crate::grid::ScalarField;

/// Triangulated island surface. `tangents` carry handedness in w.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec4>,
    pub indices: Vec<u32>,
}

/// Build the surface mesh for a heightfield.
///
/// Vertex spacing is `world_size / (R - 1)` per axis with the grid
/// centered on the origin; elevation is `height * max_height` on Y. Each
/// quad at (x, y) emits triangles `(i0, i2, i1)` and `(i1, i2, i3)` — the
/// winding the downstream rendering convention expects. Normals and
/// tangents are computed only after all positions and indices exist.
pub fn build_mesh(height: &ScalarField, params: &MeshParams) -> Mesh {
    let r = height.resolution();
    let vertex_count = r * r;
    let quad_count = (r - 1) * (r - 1);

    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(quad_count * 6);

    let step = params.world_size / (r - 1) as f32;
    let offset = -params.world_size * 0.5;
    let uv_step = 1.0 / (r - 1) as f32;

    for y in 0..r {
        for x in 0..r {
            positions.push(Vec3::new(
                offset + x as f32 * step,
                height.get(x, y) * params.max_height,
                offset + y as f32 * step,
            ));
            uvs.push(Vec2::new(x as f32 * uv_step, y as f32 * uv_step));
        }
    }

    for y in 0..r - 1 {
        for x in 0..r - 1 {
            let i0 = (y * r + x) as u32;
            let i1 = i0 + 1;
            let i2 = i0 + r as u32;
            let i3 = i2 + 1;

            indices.extend_from_slice(&[i0, i2, i1]);
            indices.extend_from_slice(&[i1, i2, i3]);
        }
    }

    let normals = compute_normals(&positions, &indices);
    let tangents = compute_tangents(&positions, &uvs, &normals, &indices);

    Mesh {
        positions,
        uvs,
        normals,
        tangents,
        indices,
    }
}

/// Area-weighted per-vertex normals: each face contributes its
/// unnormalized cross product (magnitude = twice the face area) to its
/// three vertices, then every sum is normalized.
fn compute_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for normal in &mut normals {
        *normal = normal.try_normalize().unwrap_or(Vec3::Y);
    }

    normals
}

/// Tangents from UV-space derivatives: per-triangle tangent/bitangent
/// accumulation, Gram-Schmidt orthogonalization against the vertex
/// normal, and handedness in w.
fn compute_tangents(
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
    indices: &[u32],
) -> Vec<Vec4> {
    let mut tan = vec![Vec3::ZERO; positions.len()];
    let mut bitan = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

        let e1 = positions[b] - positions[a];
        let e2 = positions[c] - positions[a];
        let duv1 = uvs[b] - uvs[a];
        let duv2 = uvs[c] - uvs[a];

        let det = duv1.x * duv2.y - duv2.x * duv1.y;
        if det.abs() < f32::EPSILON {
            continue; // degenerate UV triangle contributes nothing
        }
        let r = 1.0 / det;

        let t = (e1 * duv2.y - e2 * duv1.y) * r;
        let b_vec = (e2 * duv1.x - e1 * duv2.x) * r;

        for &i in &[a, b, c] {
            tan[i] += t;
            bitan[i] += b_vec;
        }
    }

    normals
        .iter()
        .zip(tan.iter().zip(bitan.iter()))
        .map(|(&n, (&t, &b))| {
            let ortho = (t - n * n.dot(t)).try_normalize().unwrap_or(Vec3::X);
            let w = if n.cross(ortho).dot(b) < 0.0 { -1.0 } else { 1.0 };
            ortho.extend(w)
        })
        .collect()
}
