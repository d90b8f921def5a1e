//! Sphere and displaced terrain grid

use glam::{EulerRot, Quat, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{assemble, build_levels};
use crate::error::Result;
use crate::procedural::lod::{GRID_LOD_FLOOR, SPHERE_LOD_FLOOR, lod_chain};
use crate::procedural::tangent::compute_tangents;
use crate::procedural::types::{Mesh, MeshLevel, Vertex};
use crate::procedural::validate::{
    require_addressable, require_at_least, require_lod_levels, require_positive,
};

pub const SPHERE_NAME: &str = "BuiltinSphere";
pub const GRID_NAME: &str = "BuiltinGrid";

/// Generate a UV sphere with an optional LOD chain
///
/// # Arguments
/// * `radius` - Sphere radius (> 0.0)
/// * `ring_count` - Latitude rings including both poles (min 2)
/// * `slice_count` - Longitudinal divisions (min 3)
/// * `lod_levels` - Number of LOD levels (min 1); the last level uses 12x12
///
/// # Returns
/// Per level, `ring_count × (slice_count + 1)` vertices. Rings run from the
/// bottom pole to the top pole.
///
/// # UV Mapping
/// - U wraps 0→1 around the equator; the seam column is duplicated at U=1.0
/// - V maps 0→1 from the bottom pole to the top pole
pub fn generate_sphere(
    radius: f32,
    ring_count: u32,
    slice_count: u32,
    lod_levels: usize,
) -> Result<Mesh> {
    require_positive("sphere", "radius", radius)?;
    require_at_least("sphere", "ring_count", ring_count, 2)?;
    require_at_least("sphere", "slice_count", slice_count, 3)?;
    require_lod_levels(lod_levels)?;
    require_addressable(
        "sphere",
        sphere_buffer_size(
            ring_count.max(SPHERE_LOD_FLOOR.primary),
            slice_count.max(SPHERE_LOD_FLOOR.secondary),
        ),
    )?;

    let chain = lod_chain(lod_levels, SPHERE_LOD_FLOOR, ring_count, slice_count)?;
    let levels = build_levels(&chain, |params| {
        Ok(sphere_level(radius, params.primary, params.secondary))
    })?;
    assemble(SPHERE_NAME, &chain, levels)
}

/// `(vertices, indices)` of one sphere level, `None` past the `u32` range
pub(crate) fn sphere_buffer_size(rings: u32, slices: u32) -> Option<(u32, u32)> {
    let vertices = rings.checked_mul(slices.checked_add(1)?)?;
    let indices = (rings - 1).checked_mul(slices)?.checked_mul(6)?;
    Some((vertices, indices))
}

/// One sphere level with analytic normals and tangents
pub(crate) fn sphere_level(radius: f32, rings: u32, slices: u32) -> MeshLevel {
    let ring_vertex_count = slices + 1;
    let mut level = MeshLevel::with_capacity(
        (rings * ring_vertex_count) as usize,
        ((rings - 1) * slices * 6) as usize,
    );

    let d_phi = PI / (rings - 1) as f32;
    let d_theta = TAU / slices as f32;

    for ring in 0..rings {
        let phi = -FRAC_PI_2 + ring as f32 * d_phi;
        let y = radius * phi.sin();
        let ring_radius = radius * phi.cos();
        let v = (y + radius) / (2.0 * radius);

        for slice in 0..=slices {
            // The seam column reuses theta = 0 so both copies share a position
            let theta = (slice % slices) as f32 * d_theta;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let position = Vec3::new(ring_radius * cos_theta, y, ring_radius * sin_theta);
            let u = slice as f32 / slices as f32;

            // Up vector rolled down to the ring's latitude, then yawed to its longitude
            let rotation = Quat::from_euler(EulerRot::YXZ, -PI - theta, 0.0, FRAC_PI_2 - phi);
            let normal = rotation * Vec3::Y;
            // d/dtheta of (cos, 0, sin); stays defined at the poles
            let tangent = Vec3::new(-sin_theta, 0.0, cos_theta);

            level.add_vertex(Vertex::new(position, normal, Vec2::new(u, v), tangent));
        }
    }

    for ring in 0..rings - 1 {
        for slice in 0..slices {
            let i0 = ring * ring_vertex_count + slice;
            let i1 = (ring + 1) * ring_vertex_count + slice;

            level.add_triangle(i0, i1, i1 + 1);
            level.add_triangle(i0, i1 + 1, i0 + 1);
        }
    }

    level
}

/// Height of the built-in terrain at a lattice point
pub fn grid_height(x: f32, z: f32) -> f32 {
    0.2 * (z * (20.0 * x).sin() + x * (10.0 * z).cos())
}

/// Generate a displaced terrain grid in the XZ plane
///
/// # Arguments
/// * `width` - Extent along X (> 0.0)
/// * `depth` - Extent along Z (> 0.0)
/// * `rows` - Vertex rows along Z, `m` (min 2)
/// * `columns` - Vertex columns along X, `n` (min 2)
/// * `lod_levels` - Number of LOD levels (min 1); the last level uses 8x8
///   and coarser levels drop resolution quadratically
///
/// # Returns
/// Per level, `rows × columns` vertices centered on the origin. Row 0 is the
/// far edge (`z = +depth / 2`). Heights follow [`grid_height`] and normals are
/// solved from the displaced surface.
pub fn generate_grid(
    width: f32,
    depth: f32,
    rows: u32,
    columns: u32,
    lod_levels: usize,
) -> Result<Mesh> {
    require_positive("grid", "width", width)?;
    require_positive("grid", "depth", depth)?;
    require_at_least("grid", "rows", rows, 2)?;
    require_at_least("grid", "columns", columns, 2)?;
    require_lod_levels(lod_levels)?;
    require_addressable(
        "grid",
        grid_buffer_size(
            rows.max(GRID_LOD_FLOOR.primary),
            columns.max(GRID_LOD_FLOOR.secondary),
        ),
    )?;

    let chain = lod_chain(lod_levels, GRID_LOD_FLOOR, rows, columns)?;
    let levels = build_levels(&chain, |params| {
        grid_level(width, depth, params.primary, params.secondary)
    })?;
    assemble(GRID_NAME, &chain, levels)
}

/// `(vertices, indices)` of one grid level, `None` past the `u32` range
pub(crate) fn grid_buffer_size(rows: u32, columns: u32) -> Option<(u32, u32)> {
    let vertices = rows.checked_mul(columns)?;
    let indices = (rows - 1).checked_mul(columns - 1)?.checked_mul(6)?;
    Some((vertices, indices))
}

//   V(0,0)          V(0,n-1)   ^ Z
//   +-------+-------+          |
//   |     / |     / |          |
//   |   /   |   /   |          +----> X
//   | /     | /     |
//   +-------+-------+
//   V(m-1,0)        V(m-1,n-1)
//
//   A = V(i, j)    B = V(i, j+1)
//   C = V(i+1, j)  D = V(i+1, j+1)
//   triangles ABC and CBD
pub(crate) fn grid_level(width: f32, depth: f32, rows: u32, columns: u32) -> Result<MeshLevel> {
    let dx = width / (columns - 1) as f32;
    let dz = depth / (rows - 1) as f32;
    let du = 1.0 / (columns - 1) as f32;
    let dv = 1.0 / (rows - 1) as f32;
    let half_width = width * 0.5;
    let half_depth = depth * 0.5;

    let mut level = MeshLevel::with_capacity(
        (rows * columns) as usize,
        ((rows - 1) * (columns - 1) * 6) as usize,
    );

    for i in 0..rows {
        let z = half_depth - i as f32 * dz;
        for j in 0..columns {
            let x = -half_width + j as f32 * dx;
            let mut vertex = Vertex::unlit(
                Vec3::new(x, 0.0, z),
                Vec2::new(j as f32 * du, i as f32 * dv),
            );
            vertex.tangent = Vec3::X;
            level.add_vertex(vertex);
        }
    }

    for i in 0..rows - 1 {
        for j in 0..columns - 1 {
            let a = i * columns + j;
            let c = (i + 1) * columns + j;

            level.add_triangle(a, a + 1, c);
            level.add_triangle(c, a + 1, c + 1);
        }
    }

    for vertex in &mut level.vertices {
        vertex.position.y = grid_height(vertex.position.x, vertex.position.z);
    }

    compute_tangents(&mut level.vertices, &level.indices)?;
    Ok(level)
}
