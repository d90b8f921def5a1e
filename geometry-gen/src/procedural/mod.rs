//! Procedural mesh generation
//!
//! Builtin primitives with positions, normals, UVs and tangents.
//!
//! All lit meshes use the 44-byte [`Vertex`] layout (POS_NORMAL_UV_TANGENT);
//! the full-screen quad uses the 20-byte [`ScreenVertex`] (POS_UV).
//! Index buffers are `u32` triangle lists wound clockwise seen from outside
//! in the left-handed convention.

mod lod;
mod parametric;
mod primitives;
mod tangent;
mod types;
mod validate;


pub use types::{GpuVertex, Mesh, MeshLevel, ScreenVertex, Vertex};

pub use tangent::{TriangleFrame, compute_tangents, triangle_frame};

pub use lod::{
    CONE_LOD_FLOOR, CYLINDER_LOD_FLOOR, GRID_LOD_FLOOR, LodFloor, LodParams, SPHERE_LOD_FLOOR,
    lod_chain, lod_count, lod_t,
};

// Fixed-topology primitives
pub use primitives::{
    CUBE_NAME, FULL_SCREEN_QUAD_NAME, QUAD_NAME, TRIANGLE_NAME, generate_cube,
    generate_full_screen_quad, generate_quad, generate_triangle,
};

// Parametric primitives with LOD chains
pub use parametric::{
    CONE_NAME, CYLINDER_NAME, ConeNormals, ConeOptions, GRID_NAME, SPHERE_NAME, generate_cone,
    generate_cylinder, generate_grid, generate_sphere, grid_height,
};
