//! Parameter checks run before any buffer is allocated

use crate::error::{MeshError, Result};

pub(crate) fn require_positive(shape: &'static str, name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(shape, name, format!("must be > 0.0, got {value}")))
    }
}

pub(crate) fn require_non_negative(
    shape: &'static str,
    name: &'static str,
    value: f32,
) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(shape, name, format!("must be >= 0.0, got {value}")))
    }
}

pub(crate) fn require_at_least(
    shape: &'static str,
    name: &'static str,
    value: u32,
    min: u32,
) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(MeshError::invalid(shape, name, format!("must be >= {min}, got {value}")))
    }
}

pub(crate) fn require_lod_levels(levels: usize) -> Result<()> {
    if levels >= 1 {
        Ok(())
    } else {
        Err(MeshError::InvalidLodCount(levels))
    }
}

/// Reject a resolution whose largest level cannot be addressed with `u32`
/// indices
///
/// `size` is the `(vertices, indices)` total of the largest level computed with
/// checked arithmetic; `None` means a count overflowed.
pub(crate) fn require_addressable(shape: &'static str, size: Option<(u32, u32)>) -> Result<()> {
    match size {
        Some(_) => Ok(()),
        None => Err(MeshError::invalid(
            shape,
            "resolution",
            "vertex or index count exceeds the u32 index range",
        )),
    }
}
