//! Error type shared by every generator

/// Errors raised while generating or assembling a mesh.
///
/// Every variant is raised before a mesh escapes the generator; callers never
/// observe a partially built mesh.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// A shape parameter is outside the range that produces a valid surface
    #[error("{shape}: invalid {name}: {reason}")]
    InvalidParameter {
        shape: &'static str,
        name: &'static str,
        reason: String,
    },

    /// LOD chains need at least one level
    #[error("invalid LOD level count {0} (must be >= 1)")]
    InvalidLodCount(usize),

    /// A LOD index past the end of the chain
    #[error("LOD {lod} out of range for a chain of {total} levels")]
    LodOutOfRange { lod: usize, total: usize },

    /// The UV mapping of a triangle has a zero determinant
    #[error("triangle {triangle} has a degenerate UV mapping")]
    DegenerateUv { triangle: usize },

    /// A triangle spans zero area so no tangent frame exists
    #[error("triangle {triangle} has degenerate positions")]
    DegenerateTriangle { triangle: usize },

    /// Index buffer length is not a whole number of triangles
    #[error("index count {0} is not a multiple of 3")]
    MalformedIndices(usize),

    /// An index references a vertex that does not exist
    #[error("index {index} at position {position} exceeds vertex count {vertex_count}")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A mesh was assembled without any LOD levels
    #[error("mesh {0} has no levels")]
    EmptyMesh(String),

    /// Shape manifest could not be parsed
    #[error("failed to parse shape manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;

impl MeshError {
    pub(crate) fn invalid(
        shape: &'static str,
        name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            shape,
            name,
            reason: reason.into(),
        }
    }
}
