//! Hand-off to the GPU buffer collaborator
//!
//! Buffer creation itself lives outside this crate behind [`BufferSink`].
//! [`upload`] owns the failure contract: a mesh either reaches the GPU whole
//! or is dropped, and the caller gets nothing back.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, error};

use crate::procedural::{GpuVertex, Mesh};

/// Whether the created GPU buffers may be rewritten by the CPU later
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferUsage {
    #[default]
    Immutable,
    Writable,
}

impl BufferUsage {
    pub fn is_writable(self) -> bool {
        self == BufferUsage::Writable
    }
}

/// Creates GPU vertex/index buffers for finished meshes
///
/// Implementations read each level's bytes via
/// [`MeshLevel::vertex_bytes`](crate::MeshLevel::vertex_bytes) and
/// [`MeshLevel::index_bytes`](crate::MeshLevel::index_bytes).
pub trait BufferSink {
    /// Handle to the created GPU resources
    type Handle;
    /// Why buffer creation failed
    type Error: Display;

    fn fill_gpu_buffers<V: GpuVertex>(
        &mut self,
        mesh: &Mesh<V>,
        usage: BufferUsage,
    ) -> Result<Self::Handle, Self::Error>;
}

/// Upload a mesh, consuming it
///
/// On failure the error is logged, every CPU-side buffer is released and
/// `None` is returned. There is no retry.
pub fn upload<V, S>(mesh: Mesh<V>, sink: &mut S, usage: BufferUsage) -> Option<S::Handle>
where
    V: GpuVertex,
    S: BufferSink,
{
    match sink.fill_gpu_buffers(&mesh, usage) {
        Ok(handle) => {
            debug!(
                "uploaded {} ({} LOD levels, {:?})",
                mesh.name(),
                mesh.lod_count(),
                usage
            );
            Some(handle)
        }
        Err(e) => {
            error!("{} creation failed: {}", mesh.name(), e);
            drop(mesh);
            None
        }
    }
}
