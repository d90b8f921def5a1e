//! Tangent-space reconstruction over arbitrary triangle lists
//!
//! ```text
//!   ^ bitangent (v)
//!   |    v1 ______________ v2
//!   |       \            /
//!   |   E1   \          /   E2
//!   |         \        /
//!   |          \      /
//!   |           \    /
//!   |             v0
//!   +---------------------------> tangent (u)
//! ```
//!
//! Each triangle's tangent is solved from its UV gradients and written to all
//! three corners, so a vertex shared by several triangles keeps the frame of
//! the last triangle that touched it. This is a per-face approximation, not a
//! smoothed average.

use glam::Vec3;
use tracing::trace;

use super::types::{Vertex, check_indices};
use crate::error::{MeshError, Result};

/// Tangent and bitangent of one triangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleFrame {
    pub tangent: Vec3,
    pub bitangent: Vec3,
}

impl TriangleFrame {
    /// Normal implied by the frame, used for vertices without one
    pub fn normal(&self) -> Vec3 {
        self.tangent.cross(self.bitangent).normalize()
    }
}

/// Solve the tangent frame of a single triangle
///
/// `triangle` is only used to label errors.
pub fn triangle_frame(
    v0: &Vertex,
    v1: &Vertex,
    v2: &Vertex,
    triangle: usize,
) -> Result<TriangleFrame> {
    let e1 = v1.position - v0.position;
    let e2 = v2.position - v0.position;
    let duv1 = v1.uv - v0.uv;
    let duv2 = v2.uv - v0.uv;

    let f = 1.0 / (duv1.x * duv2.y - duv1.y * duv2.x);
    if !f.is_finite() {
        return Err(MeshError::DegenerateUv { triangle });
    }

    let tangent = (f * (duv2.y * e1 - duv1.y * e2)).normalize();
    let bitangent = (f * (-duv2.x * e1 + duv1.x * e2)).normalize();
    let frame = TriangleFrame { tangent, bitangent };

    if !tangent.is_finite() || !bitangent.is_finite() || !frame.normal().is_finite() {
        return Err(MeshError::DegenerateTriangle { triangle });
    }
    Ok(frame)
}

/// Compute per-vertex tangents, and normals where they are zero
///
/// Every frame is solved before any vertex is written, so on error the
/// vertex buffer is left untouched.
pub fn compute_tangents(vertices: &mut [Vertex], indices: &[u32]) -> Result<()> {
    check_indices(indices, vertices.len())?;

    let frames = indices
        .chunks_exact(3)
        .enumerate()
        .map(|(triangle, tri)| {
            triangle_frame(
                &vertices[tri[0] as usize],
                &vertices[tri[1] as usize],
                &vertices[tri[2] as usize],
                triangle,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    for (tri, frame) in indices.chunks_exact(3).zip(&frames) {
        for &index in tri {
            let vertex = &mut vertices[index as usize];
            vertex.tangent = frame.tangent;
            if vertex.normal == Vec3::ZERO {
                vertex.normal = frame.normal();
            }
        }
    }

    trace!(
        "compute_tangents: {} vertices, {} triangles",
        vertices.len(),
        frames.len()
    );
    Ok(())
}
