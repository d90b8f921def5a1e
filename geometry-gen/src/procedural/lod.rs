//! LOD parameter interpolation
//!
//! Each parametric generator has a fixed resolution floor. LOD 0 always uses
//! the caller's requested resolution, the last LOD always uses the floor, and
//! levels in between are interpolated:
//!
//! ```text
//! t     = lod / (total - 1)          (0 when total == 1)
//! count = lerp(floor, requested, (1 - t)^ease_power)
//! ```

use tracing::warn;

use crate::error::{MeshError, Result};

/// Resolution floor and easing for one generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LodFloor {
    /// Floor for the first resolution axis (rings, rows, stacks, slices)
    pub primary: u32,
    /// Floor for the second resolution axis (slices, columns)
    pub secondary: u32,
    /// Exponent applied to `1 - t`; 2 drops resolution faster than linear
    pub ease_power: i32,
}

/// Sphere: rings x slices
pub const SPHERE_LOD_FLOOR: LodFloor = LodFloor {
    primary: 12,
    secondary: 12,
    ease_power: 1,
};

/// Grid: rows x columns, quadratic ease
pub const GRID_LOD_FLOOR: LodFloor = LodFloor {
    primary: 8,
    secondary: 8,
    ease_power: 2,
};

/// Cylinder: stacks x slices
pub const CYLINDER_LOD_FLOOR: LodFloor = LodFloor {
    primary: 4,
    secondary: 8,
    ease_power: 1,
};

/// Cone: slices only (the primary axis is unused)
pub const CONE_LOD_FLOOR: LodFloor = LodFloor {
    primary: 1,
    secondary: 10,
    ease_power: 1,
};

/// Resolution counts for one LOD level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LodParams {
    pub lod: usize,
    pub primary: u32,
    pub secondary: u32,
}

/// Interpolation parameter `t` for a LOD index
///
/// A single-level chain has no interpolation at all, so `t` is 0.
pub fn lod_t(lod: usize, total: usize) -> Result<f32> {
    if total == 0 {
        return Err(MeshError::InvalidLodCount(total));
    }
    if lod >= total {
        return Err(MeshError::LodOutOfRange { lod, total });
    }
    if total == 1 {
        return Ok(0.0);
    }
    Ok(lod as f32 / (total - 1) as f32)
}

/// Interpolated resolution count for one axis of one LOD level
pub fn lod_count(
    lod: usize,
    total: usize,
    minimum: u32,
    requested: u32,
    ease_power: i32,
) -> Result<u32> {
    let t = lod_t(lod, total)?;
    let weight = (1.0 - t).powi(ease_power);
    let count = minimum as f32 + (requested as f32 - minimum as f32) * weight;
    Ok(count.round() as u32)
}

/// Resolution counts for every level of a chain, highest detail first
pub fn lod_chain(
    total: usize,
    floor: LodFloor,
    primary: u32,
    secondary: u32,
) -> Result<Vec<LodParams>> {
    if total == 0 {
        return Err(MeshError::InvalidLodCount(total));
    }
    if total > 1 && (primary < floor.primary || secondary < floor.secondary) {
        warn!(
            "requested resolution {}x{} is below the LOD floor {}x{}; coarser levels gain detail",
            primary, secondary, floor.primary, floor.secondary
        );
    }

    (0..total)
        .map(|lod| {
            Ok(LodParams {
                lod,
                primary: lod_count(lod, total, floor.primary, primary, floor.ease_power)?,
                secondary: lod_count(lod, total, floor.secondary, secondary, floor.ease_power)?,
            })
        })
        .collect()
}
