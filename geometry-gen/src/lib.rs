//! Procedural builtin geometry
//!
//! Deterministic generators for the engine's builtin meshes: triangle, quad,
//! full-screen quad, cube, UV sphere, displaced terrain grid, tapered cylinder
//! and cone. Parametric shapes produce a LOD chain (level 0 is the requested
//! resolution, the last level a fixed floor), and every lit mesh carries
//! tangents for normal mapping.
//!
//! # Example
//! ```
//! use geometry_gen::{Shape, generate_sphere};
//!
//! let sphere = generate_sphere(1.0, 24, 32, 3)?;
//! assert_eq!(sphere.lod_count(), 3);
//! assert_eq!(sphere.vertices().len(), 24 * 33);
//!
//! let cube = Shape::Cube { scale: 0.5 }.generate()?;
//! assert_eq!(cube.name(), "BuiltinCube");
//! # Ok::<(), geometry_gen::MeshError>(())
//! ```
//!
//! # Modules
//!
//! - [`procedural`] - Generators, tangent solver, LOD interpolation
//! - [`shape`] - Shape requests and TOML manifests
//! - [`upload`] - GPU buffer hand-off

pub mod error;
pub mod procedural;
pub mod shape;
pub mod upload;

pub use error::{MeshError, Result};

pub use procedural::{
    ConeNormals, ConeOptions, GpuVertex, Mesh, MeshLevel, ScreenVertex, Vertex, compute_tangents,
    generate_cone, generate_cube, generate_cylinder, generate_full_screen_quad, generate_grid,
    generate_quad, generate_sphere, generate_triangle,
};
pub use shape::{BuiltinMesh, Shape, ShapeEntry, ShapeSet};
pub use upload::{BufferSink, BufferUsage, upload};
