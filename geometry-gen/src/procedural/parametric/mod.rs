//! Parametric surface generators with LOD chains
//!
//! Sphere, grid, cylinder and cone are generated from continuous parameters.
//! Each generator resolves a [`lod_chain`](super::lod::lod_chain) first, builds
//! every level independently, and assembles the levels into one [`Mesh`].

mod cylinder_cone;
mod sphere_grid;

use tracing::{debug, trace};

use super::lod::LodParams;
use super::types::{Mesh, MeshLevel};
use crate::error::Result;

pub use cylinder_cone::{
    CONE_NAME, CYLINDER_NAME, ConeNormals, ConeOptions, generate_cone, generate_cylinder,
};
pub use sphere_grid::{GRID_NAME, SPHERE_NAME, generate_grid, generate_sphere, grid_height};

#[cfg(test)]
pub(crate) use cylinder_cone::{cone_buffer_size, cone_level, cylinder_buffer_size, cylinder_level};
#[cfg(test)]
pub(crate) use sphere_grid::{grid_buffer_size, grid_level, sphere_buffer_size, sphere_level};

/// Build one mesh level per LOD, in LOD order
///
/// Levels share no state, so with the `parallel` feature they are built on
/// the rayon pool. Collection keeps LOD order either way.
#[cfg(feature = "parallel")]
pub(crate) fn build_levels<F>(chain: &[LodParams], build: F) -> Result<Vec<MeshLevel>>
where
    F: Fn(&LodParams) -> Result<MeshLevel> + Sync + Send,
{
    use rayon::prelude::*;

    chain.par_iter().map(build).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn build_levels<F>(chain: &[LodParams], build: F) -> Result<Vec<MeshLevel>>
where
    F: Fn(&LodParams) -> Result<MeshLevel> + Sync + Send,
{
    build_levels_sequential(chain, build)
}

/// Build one mesh level per LOD on the calling thread
#[cfg_attr(all(feature = "parallel", not(test)), allow(dead_code))]
pub(crate) fn build_levels_sequential<F>(chain: &[LodParams], build: F) -> Result<Vec<MeshLevel>>
where
    F: Fn(&LodParams) -> Result<MeshLevel>,
{
    chain.iter().map(build).collect()
}

/// Log the chain and hand the levels to the mesh assembler
fn assemble(name: &'static str, chain: &[LodParams], levels: Vec<MeshLevel>) -> Result<Mesh> {
    for (params, level) in chain.iter().zip(&levels) {
        trace!(
            "{} LOD {}: {}x{} -> {} vertices, {} triangles",
            name,
            params.lod,
            params.primary,
            params.secondary,
            level.vertex_count(),
            level.triangle_count()
        );
    }
    debug!(
        "{}: {} LOD levels, {} vertices at LOD 0",
        name,
        levels.len(),
        levels.first().map_or(0, |level| level.vertex_count())
    );
    Mesh::with_lods(name, levels)
}
