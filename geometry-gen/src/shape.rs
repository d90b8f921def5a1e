//! Builtin shape requests
//!
//! [`Shape`] names a builtin geometry together with its parameters, so an
//! asset layer can request meshes by name, either in code or from a TOML
//! manifest:
//!
//! ```toml
//! [[mesh]]
//! id = "skydome"
//! shape = { kind = "sphere", radius = 1.0, rings = 24, slices = 32, lod_levels = 3 }
//!
//! [[mesh]]
//! id = "terrain"
//! shape = { kind = "grid", width = 10.0, depth = 10.0, rows = 64, columns = 64 }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::procedural::{
    ConeOptions, Mesh, ScreenVertex, generate_cone, generate_cube, generate_cylinder,
    generate_full_screen_quad, generate_grid, generate_quad, generate_sphere, generate_triangle,
};
use crate::upload::{BufferSink, BufferUsage, upload};

fn default_scale() -> f32 {
    1.0
}

fn default_lod_levels() -> usize {
    1
}

/// A builtin geometry and its parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Triangle {
        #[serde(default = "default_scale")]
        scale: f32,
    },
    Quad {
        #[serde(default = "default_scale")]
        scale: f32,
    },
    FullScreenQuad,
    Cube {
        #[serde(default = "default_scale")]
        scale: f32,
    },
    Sphere {
        radius: f32,
        rings: u32,
        slices: u32,
        #[serde(default = "default_lod_levels")]
        lod_levels: usize,
    },
    Grid {
        width: f32,
        depth: f32,
        rows: u32,
        columns: u32,
        #[serde(default = "default_lod_levels")]
        lod_levels: usize,
    },
    Cylinder {
        height: f32,
        top_radius: f32,
        bottom_radius: f32,
        slices: u32,
        stacks: u32,
        #[serde(default = "default_lod_levels")]
        lod_levels: usize,
    },
    Cone {
        height: f32,
        radius: f32,
        slices: u32,
        #[serde(default = "default_lod_levels")]
        lod_levels: usize,
        #[serde(default)]
        options: ConeOptions,
    },
}

impl Shape {
    /// Lowercase name of the shape kind
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Triangle { .. } => "triangle",
            Shape::Quad { .. } => "quad",
            Shape::FullScreenQuad => "full_screen_quad",
            Shape::Cube { .. } => "cube",
            Shape::Sphere { .. } => "sphere",
            Shape::Grid { .. } => "grid",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
        }
    }

    /// Flat geometry that has no meaningful back side
    pub fn is_2d(&self) -> bool {
        matches!(
            self,
            Shape::Triangle { .. } | Shape::Quad { .. } | Shape::Grid { .. }
        )
    }

    /// Buffer mutability the upload collaborator should use
    ///
    /// Terrain grids are rewritten per frame; everything else is immutable.
    pub fn buffer_usage(&self) -> BufferUsage {
        match self {
            Shape::Grid { .. } => BufferUsage::Writable,
            _ => BufferUsage::Immutable,
        }
    }

    /// Generate the mesh this request describes
    pub fn generate(&self) -> Result<BuiltinMesh> {
        debug!("generating builtin {}", self.kind());
        let mesh = match *self {
            Shape::Triangle { scale } => BuiltinMesh::Lit(generate_triangle(scale)?),
            Shape::Quad { scale } => BuiltinMesh::Lit(generate_quad(scale)?),
            Shape::FullScreenQuad => BuiltinMesh::Screen(generate_full_screen_quad()?),
            Shape::Cube { scale } => BuiltinMesh::Lit(generate_cube(scale)?),
            Shape::Sphere {
                radius,
                rings,
                slices,
                lod_levels,
            } => BuiltinMesh::Lit(generate_sphere(radius, rings, slices, lod_levels)?),
            Shape::Grid {
                width,
                depth,
                rows,
                columns,
                lod_levels,
            } => BuiltinMesh::Lit(generate_grid(width, depth, rows, columns, lod_levels)?),
            Shape::Cylinder {
                height,
                top_radius,
                bottom_radius,
                slices,
                stacks,
                lod_levels,
            } => BuiltinMesh::Lit(generate_cylinder(
                height,
                top_radius,
                bottom_radius,
                slices,
                stacks,
                lod_levels,
            )?),
            Shape::Cone {
                height,
                radius,
                slices,
                lod_levels,
                options,
            } => BuiltinMesh::Lit(generate_cone(height, radius, slices, lod_levels, options)?),
        };
        Ok(mesh)
    }
}

/// Output of [`Shape::generate`]
///
/// Every builtin is lit except the full-screen quad, which carries
/// screen-space vertices only.
#[derive(Clone, Debug, PartialEq)]
pub enum BuiltinMesh {
    Lit(Mesh),
    Screen(Mesh<ScreenVertex>),
}

impl BuiltinMesh {
    pub fn name(&self) -> &str {
        match self {
            BuiltinMesh::Lit(mesh) => mesh.name(),
            BuiltinMesh::Screen(mesh) => mesh.name(),
        }
    }

    pub fn lod_count(&self) -> usize {
        match self {
            BuiltinMesh::Lit(mesh) => mesh.lod_count(),
            BuiltinMesh::Screen(mesh) => mesh.lod_count(),
        }
    }

    /// The lit mesh, if this is one
    pub fn as_lit(&self) -> Option<&Mesh> {
        match self {
            BuiltinMesh::Lit(mesh) => Some(mesh),
            BuiltinMesh::Screen(_) => None,
        }
    }

    /// Hand the mesh to an upload sink; see [`upload`]
    pub fn upload<S: BufferSink>(self, sink: &mut S, usage: BufferUsage) -> Option<S::Handle> {
        match self {
            BuiltinMesh::Lit(mesh) => upload(mesh, sink, usage),
            BuiltinMesh::Screen(mesh) => upload(mesh, sink, usage),
        }
    }
}

/// One named entry of a shape manifest
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    /// Asset id the generated mesh is registered under
    pub id: String,
    pub shape: Shape,
}

/// A manifest of builtin shape requests (`[[mesh]]` tables)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeSet {
    #[serde(default, rename = "mesh")]
    pub meshes: Vec<ShapeEntry>,
}

impl ShapeSet {
    /// Parse a manifest from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Generate every entry, in manifest order
    ///
    /// Stops at the first invalid request.
    pub fn generate_all(&self) -> Result<Vec<(String, BuiltinMesh)>> {
        self.meshes
            .iter()
            .map(|entry| Ok((entry.id.clone(), entry.shape.generate()?)))
            .collect()
    }
}
