//! Procedural mesh types
//!
//! Vertex layouts, per-LOD buffers and the assembled [`Mesh`].

use bytemuck::{Pod, Zeroable, cast_slice};
use glam::{Vec2, Vec3};

use crate::error::{MeshError, Result};

/// Vertex types that can be handed to the GPU as raw bytes
pub trait GpuVertex: Pod + Send + Sync {
    /// Size of one vertex in bytes
    const STRIDE: usize = std::mem::size_of::<Self>();
}

/// Lit vertex: position, normal, UV and tangent (44 bytes)
///
/// A zero `normal` or `tangent` means "not computed yet"; the tangent solver
/// fills both in.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    pub tangent: Vec3,
}

impl Vertex {
    /// Create a vertex with every attribute supplied
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2, tangent: Vec3) -> Self {
        Self {
            position,
            normal,
            uv,
            tangent,
        }
    }

    /// Create a vertex whose normal and tangent are left for the solver
    pub fn unlit(position: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            uv,
            ..Self::default()
        }
    }
}

impl GpuVertex for Vertex {}

/// Screen-space vertex without lighting attributes (20 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ScreenVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl ScreenVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

impl GpuVertex for ScreenVertex {}

/// Vertex and index buffers of a single LOD level
#[derive(Clone, Debug, PartialEq)]
pub struct MeshLevel<V = Vertex> {
    pub(crate) vertices: Vec<V>,
    pub(crate) indices: Vec<u32>,
}

impl<V> MeshLevel<V> {
    /// Create an empty level
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create an empty level with room for the given counts
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Build a level from finished buffers
    pub fn from_buffers(vertices: Vec<V>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, vertex: V) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Append a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the index triples of the level
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check that the index list is a whole number of in-range triangles
    pub fn check_indices(&self) -> Result<()> {
        check_indices(&self.indices, self.vertices.len())
    }

    /// Split the level back into its buffers
    pub fn into_buffers(self) -> (Vec<V>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

impl<V: GpuVertex> MeshLevel<V> {
    /// Vertex buffer as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for upload (u32 little-endian on every
    /// platform we target)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

impl<V> Default for MeshLevel<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a triangle list against a vertex count
pub(crate) fn check_indices(indices: &[u32], vertex_count: usize) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::MalformedIndices(indices.len()));
    }
    match indices
        .iter()
        .position(|&index| index as usize >= vertex_count)
    {
        Some(position) => Err(MeshError::IndexOutOfRange {
            position,
            index: indices[position],
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Named, immutable mesh with one or more LOD levels
///
/// Level 0 holds the highest detail; the last level the lowest.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<V = Vertex> {
    name: String,
    levels: Vec<MeshLevel<V>>,
}

impl<V> Mesh<V> {
    /// Assemble a single-level mesh
    pub fn new(name: impl Into<String>, level: MeshLevel<V>) -> Result<Self> {
        Self::with_lods(name, vec![level])
    }

    /// Assemble a mesh from an ordered LOD chain
    ///
    /// Every level is validated; buffers are moved into the mesh.
    pub fn with_lods(name: impl Into<String>, levels: Vec<MeshLevel<V>>) -> Result<Self> {
        let name = name.into();
        if levels.is_empty() {
            return Err(MeshError::EmptyMesh(name));
        }
        for level in &levels {
            level.check_indices()?;
        }
        Ok(Self { name, levels })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of LOD levels (always >= 1)
    pub fn lod_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[MeshLevel<V>] {
        &self.levels
    }

    /// Level for the given LOD index
    pub fn level(&self, lod: usize) -> Option<&MeshLevel<V>> {
        self.levels.get(lod)
    }

    /// Highest-detail vertex buffer
    pub fn vertices(&self) -> &[V] {
        &self.levels[0].vertices
    }

    /// Highest-detail index buffer
    pub fn indices(&self) -> &[u32] {
        &self.levels[0].indices
    }

    pub fn into_levels(self) -> Vec<MeshLevel<V>> {
        self.levels
    }
}
