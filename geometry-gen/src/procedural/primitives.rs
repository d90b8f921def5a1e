//! Fixed-topology primitives (triangle, quads, cube)
//!
//! Hand-authored vertex and index tables scaled uniformly. Winding is
//! clockwise seen from the outward side in the left-handed convention, so the
//! raw cross product `(p1 - p0) x (p2 - p0)` of every triangle points along
//! the face normal.

use glam::{Vec2, Vec3};
use tracing::debug;

use super::tangent::compute_tangents;
use super::types::{Mesh, MeshLevel, ScreenVertex, Vertex};
use super::validate::require_positive;
use crate::error::Result;

pub const TRIANGLE_NAME: &str = "BuiltinTriangle";
pub const QUAD_NAME: &str = "BuiltinQuad";
pub const FULL_SCREEN_QUAD_NAME: &str = "BuiltinFullScreenQuad";
pub const CUBE_NAME: &str = "BuiltinCube";

//   1 +-----+ 2     0, 1, 2
//     |     |       2, 3, 0
//     |     |
//   0 +-----+ 3
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];
const QUAD_CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];
const QUAD_UVS: [(f32, f32); 4] = [(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];

/// Generate a single triangle in the XY plane facing -Z
///
/// # Returns
/// 3 vertices, 3 indices, tangents solved from the UV layout
pub fn generate_triangle(scale: f32) -> Result<Mesh> {
    require_positive("triangle", "scale", scale)?;

    let normal = Vec3::NEG_Z;
    let mut level = MeshLevel::with_capacity(3, 3);
    level.add_vertex(Vertex::new(
        Vec3::new(-scale, -scale, 0.0),
        normal,
        Vec2::new(0.0, 1.0),
        Vec3::ZERO,
    ));
    level.add_vertex(Vertex::new(
        Vec3::new(0.0, scale, 0.0),
        normal,
        Vec2::new(0.5, 0.0),
        Vec3::ZERO,
    ));
    level.add_vertex(Vertex::new(
        Vec3::new(scale, -scale, 0.0),
        normal,
        Vec2::new(1.0, 1.0),
        Vec3::ZERO,
    ));
    level.add_triangle(0, 1, 2);

    finish_lit(TRIANGLE_NAME, level)
}

/// Generate a quad in the XY plane facing -Z
///
/// # Returns
/// 4 vertices, 6 indices, tangent along +X
pub fn generate_quad(scale: f32) -> Result<Mesh> {
    require_positive("quad", "scale", scale)?;

    let mut level = MeshLevel::with_capacity(4, 6);
    for (&(x, y), &(u, v)) in QUAD_CORNERS.iter().zip(&QUAD_UVS) {
        level.add_vertex(Vertex::new(
            Vec3::new(x * scale, y * scale, 0.0),
            Vec3::NEG_Z,
            Vec2::new(u, v),
            Vec3::ZERO,
        ));
    }
    level.indices.extend_from_slice(&QUAD_INDICES);

    finish_lit(QUAD_NAME, level)
}

/// Generate the clip-space quad used for full-screen passes
///
/// Positions span [-1, 1] and carry no lighting attributes, so the tangent
/// pass is skipped.
pub fn generate_full_screen_quad() -> Result<Mesh<ScreenVertex>> {
    let mut level = MeshLevel::with_capacity(4, 6);
    for (&(x, y), &(u, v)) in QUAD_CORNERS.iter().zip(&QUAD_UVS) {
        level.add_vertex(ScreenVertex::new(Vec3::new(x, y, 0.0), Vec2::new(u, v)));
    }
    level.indices.extend_from_slice(&QUAD_INDICES);

    debug!("{}: 4 vertices, 6 indices", FULL_SCREEN_QUAD_NAME);
    Mesh::new(FULL_SCREEN_QUAD_NAME, level)
}

/// One cube face: normal plus four corners in index order
struct CubeFace {
    normal: Vec3,
    corners: [[f32; 3]; 4],
    uvs: [[f32; 2]; 4],
    indices: [u32; 6],
}

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
const FACE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

// Corners of each face run clockwise seen from outside, starting top-left
const CUBE_FACES: [CubeFace; 6] = [
    // Top
    CubeFace {
        normal: Vec3::Y,
        corners: [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
        uvs: FACE_UVS,
        indices: FACE_INDICES,
    },
    // Front
    CubeFace {
        normal: Vec3::NEG_Z,
        corners: [[-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]],
        uvs: FACE_UVS,
        indices: FACE_INDICES,
    },
    // Right
    CubeFace {
        normal: Vec3::X,
        corners: [[1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0]],
        uvs: FACE_UVS,
        indices: FACE_INDICES,
    },
    // Back
    CubeFace {
        normal: Vec3::Z,
        corners: [[1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0]],
        uvs: FACE_UVS,
        indices: FACE_INDICES,
    },
    // Left
    CubeFace {
        normal: Vec3::NEG_X,
        corners: [[-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0]],
        uvs: FACE_UVS,
        indices: FACE_INDICES,
    },
    // Bottom: mirrored UVs, and the triangles are wound 0-2-1 / 0-3-2
    CubeFace {
        normal: Vec3::NEG_Y,
        corners: [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0]],
        uvs: [[1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        indices: [0, 2, 1, 0, 3, 2],
    },
];

/// Generate an axis-aligned cube with half-extent `scale`
///
/// # Returns
/// 24 vertices (4 per face, so each face keeps its own normal and UVs) and
/// 36 indices. Faces are emitted Top, Front, Right, Back, Left, Bottom.
pub fn generate_cube(scale: f32) -> Result<Mesh> {
    require_positive("cube", "scale", scale)?;

    let mut level = MeshLevel::with_capacity(24, 36);
    for face in &CUBE_FACES {
        let base = level.vertex_count() as u32;
        for (corner, uv) in face.corners.iter().zip(&face.uvs) {
            level.add_vertex(Vertex::new(
                Vec3::from_array(*corner) * scale,
                face.normal,
                Vec2::from_array(*uv),
                Vec3::ZERO,
            ));
        }
        level
            .indices
            .extend(face.indices.iter().map(|&index| base + index));
    }

    finish_lit(CUBE_NAME, level)
}

/// Run the tangent pass and assemble a single-level mesh
fn finish_lit(name: &'static str, mut level: MeshLevel) -> Result<Mesh> {
    compute_tangents(&mut level.vertices, &level.indices)?;
    debug!(
        "{}: {} vertices, {} indices",
        name,
        level.vertex_count(),
        level.indices.len()
    );
    Mesh::new(name, level)
}
