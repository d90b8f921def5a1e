//! Revolved primitives with caps (cylinder, cone)

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::{assemble, build_levels};
use crate::error::{MeshError, Result};
use crate::procedural::lod::{CONE_LOD_FLOOR, CYLINDER_LOD_FLOOR, lod_chain};
use crate::procedural::types::{Mesh, MeshLevel, Vertex};
use crate::procedural::validate::{
    require_addressable, require_at_least, require_lod_levels, require_non_negative,
    require_positive,
};

pub const CYLINDER_NAME: &str = "BuiltinCylinder";
pub const CONE_NAME: &str = "BuiltinCone";

/// Generate a (possibly tapered) cylinder with caps
///
/// # Arguments
/// * `height` - Cylinder height (> 0.0), centered on the origin
/// * `top_radius` - Radius at `y = +height / 2` (>= 0.0)
/// * `bottom_radius` - Radius at `y = -height / 2` (>= 0.0)
/// * `slices` - Radial divisions (min 3)
/// * `stacks` - Height divisions (min 1)
/// * `lod_levels` - Number of LOD levels (min 1); the last level uses
///   4 stacks and 8 slices
///
/// # Returns
/// Body of `(stacks + 1) × (slices + 1)` vertices plus a fan cap at each end
/// whose radius is non-zero. A zero radius closes that end in a point.
///
/// # UV Mapping
/// - Body: U wraps 0→1 around the circumference, V runs 1→0 from bottom to top
/// - Caps: planar projection scaled by the height
pub fn generate_cylinder(
    height: f32,
    top_radius: f32,
    bottom_radius: f32,
    slices: u32,
    stacks: u32,
    lod_levels: usize,
) -> Result<Mesh> {
    require_positive("cylinder", "height", height)?;
    require_non_negative("cylinder", "top_radius", top_radius)?;
    require_non_negative("cylinder", "bottom_radius", bottom_radius)?;
    if top_radius == 0.0 && bottom_radius == 0.0 {
        return Err(MeshError::invalid(
            "cylinder",
            "radius",
            "top and bottom radius cannot both be 0.0",
        ));
    }
    require_at_least("cylinder", "slices", slices, 3)?;
    require_at_least("cylinder", "stacks", stacks, 1)?;
    require_lod_levels(lod_levels)?;
    require_addressable(
        "cylinder",
        cylinder_buffer_size(
            stacks.max(CYLINDER_LOD_FLOOR.primary),
            slices.max(CYLINDER_LOD_FLOOR.secondary),
        ),
    )?;

    let chain = lod_chain(lod_levels, CYLINDER_LOD_FLOOR, stacks, slices)?;
    let levels = build_levels(&chain, |params| {
        Ok(cylinder_level(
            height,
            top_radius,
            bottom_radius,
            params.primary,
            params.secondary,
        ))
    })?;
    assemble(CYLINDER_NAME, &chain, levels)
}

/// `(vertices, indices)` of one cylinder level with both caps, `None` past
/// the `u32` range
pub(crate) fn cylinder_buffer_size(stacks: u32, slices: u32) -> Option<(u32, u32)> {
    let body = stacks.checked_add(1)?.checked_mul(slices.checked_add(1)?)?;
    let caps = slices.checked_add(2)?.checked_mul(2)?;
    let vertices = body.checked_add(caps)?;
    let indices = stacks.checked_add(1)?.checked_mul(slices)?.checked_mul(6)?;
    Some((vertices, indices))
}

pub(crate) fn cylinder_level(
    height: f32,
    top_radius: f32,
    bottom_radius: f32,
    stacks: u32,
    slices: u32,
) -> MeshLevel {
    let ring_vertex_count = slices + 1;
    let mut level = MeshLevel::with_capacity(
        ((stacks + 3) * ring_vertex_count + 2) as usize,
        ((stacks + 1) * slices * 6) as usize,
    );

    let stack_height = height / stacks as f32;
    let radius_step = (top_radius - bottom_radius) / stacks as f32;
    let d_theta = TAU / slices as f32;
    // The surface is x = r(v)cos(t), y = h - hv, z = r(v)sin(t); its v
    // derivative (dr·cos, -h, dr·sin) carries the taper into the normal.
    let dr = bottom_radius - top_radius;

    for i in 0..=stacks {
        let y = -0.5 * height + i as f32 * stack_height;
        let r = bottom_radius + i as f32 * radius_step;
        let v = 1.0 - i as f32 / stacks as f32;

        for j in 0..=slices {
            let (s, c) = ((j % slices) as f32 * d_theta).sin_cos();
            let tangent = Vec3::new(-s, 0.0, c);
            let bitangent = Vec3::new(dr * c, -height, dr * s);
            let normal = tangent.cross(bitangent).normalize();

            level.add_vertex(Vertex::new(
                Vec3::new(r * c, y, r * s),
                normal,
                Vec2::new(j as f32 / slices as f32, v),
                tangent,
            ));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let i0 = i * ring_vertex_count + j;
            let i1 = (i + 1) * ring_vertex_count + j;

            level.add_triangle(i0, i1, i1 + 1);
            level.add_triangle(i0, i1 + 1, i0 + 1);
        }
    }

    if top_radius > 0.0 {
        let cap = CapRing {
            y: 0.5 * height,
            radius: top_radius,
            uv_scale: height,
            normal: Vec3::Y,
            tangent: Vec3::X,
        };
        cap.emit(&mut level, slices, CapFacing::Up);
    }
    if bottom_radius > 0.0 {
        let cap = CapRing {
            y: -0.5 * height,
            radius: bottom_radius,
            uv_scale: height,
            normal: Vec3::NEG_Y,
            tangent: Vec3::NEG_X,
        };
        cap.emit(&mut level, slices, CapFacing::Down);
    }

    level
}

/// Which side of the XZ plane a cap fan faces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CapFacing {
    Up,
    Down,
}

/// Flat disc closed by a fan around a center vertex
///
/// Ring vertices are duplicated from the body because cap normals and UVs
/// differ from the body's.
struct CapRing {
    y: f32,
    radius: f32,
    uv_scale: f32,
    normal: Vec3,
    tangent: Vec3,
}

impl CapRing {
    fn emit(&self, level: &mut MeshLevel, slices: u32, facing: CapFacing) {
        let base = level.vertex_count() as u32;
        let d_theta = TAU / slices as f32;

        for i in 0..=slices {
            let (s, c) = ((i % slices) as f32 * d_theta).sin_cos();
            let x = self.radius * c;
            let z = self.radius * s;
            // Scaled by the height to keep cap texel density close to the body's
            let uv = Vec2::new(x / self.uv_scale + 0.5, z / self.uv_scale + 0.5);
            level.add_vertex(Vertex::new(Vec3::new(x, self.y, z), self.normal, uv, self.tangent));
        }

        let center = level.add_vertex(Vertex::new(
            Vec3::new(0.0, self.y, 0.0),
            self.normal,
            Vec2::splat(0.5),
            self.tangent,
        ));

        for i in 0..slices {
            match facing {
                CapFacing::Up => level.add_triangle(center, base + i + 1, base + i),
                CapFacing::Down => level.add_triangle(center, base + i, base + i + 1),
            }
        }
    }
}

/// How the cone's lateral normals are derived
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConeNormals {
    /// Cross product of the segment's edges: the true surface normal
    #[default]
    Geometric,
    /// Dot product of the segment's edges broadcast to all three components.
    /// Not a surface normal; only for parity with meshes baked by older tools.
    LegacyDot,
}

/// Optional cone features
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeOptions {
    /// Also emit an upward-facing copy of the base so it renders from inside
    pub double_sided_base: bool,
    pub normals: ConeNormals,
}

impl Default for ConeOptions {
    fn default() -> Self {
        Self {
            double_sided_base: true,
            normals: ConeNormals::Geometric,
        }
    }
}

/// Generate a cone standing on the XZ plane with its apex at `(0, height, 0)`
///
/// # Arguments
/// * `height` - Apex height (> 0.0)
/// * `radius` - Base radius (> 0.0)
/// * `slices` - Radial divisions (min 3)
/// * `lod_levels` - Number of LOD levels (min 1); the last level uses 10 slices
/// * `options` - Base sidedness and lateral normal mode
///
/// # Returns
/// A downward base fan, the optional upward base fan, and a lateral fan from
/// a single apex to a seam-duplicated base ring.
pub fn generate_cone(
    height: f32,
    radius: f32,
    slices: u32,
    lod_levels: usize,
    options: ConeOptions,
) -> Result<Mesh> {
    require_positive("cone", "height", height)?;
    require_positive("cone", "radius", radius)?;
    require_at_least("cone", "slices", slices, 3)?;
    require_lod_levels(lod_levels)?;
    require_addressable(
        "cone",
        cone_buffer_size(
            slices.max(CONE_LOD_FLOOR.secondary),
            options.double_sided_base,
        ),
    )?;

    let chain = lod_chain(lod_levels, CONE_LOD_FLOOR, 1, slices)?;
    let levels = build_levels(&chain, |params| {
        Ok(cone_level(height, radius, params.secondary, options))
    })?;
    assemble(CONE_NAME, &chain, levels)
}

/// `(vertices, indices)` of one cone level, `None` past the `u32` range
pub(crate) fn cone_buffer_size(slices: u32, double_sided_base: bool) -> Option<(u32, u32)> {
    // Base fans plus the lateral fan, each a ring and one center or apex
    let fans: u32 = if double_sided_base { 3 } else { 2 };
    let vertices = fans.checked_mul(slices.checked_add(2)?)?;
    let indices = fans.checked_mul(slices)?.checked_mul(3)?;
    Some((vertices, indices))
}

pub(crate) fn cone_level(height: f32, radius: f32, slices: u32, options: ConeOptions) -> MeshLevel {
    let base_rings = if options.double_sided_base { 2 } else { 1 };
    let mut level = MeshLevel::with_capacity(
        ((base_rings + 1) * (slices + 2)) as usize,
        ((base_rings + 1) * slices * 3) as usize,
    );

    let base = CapRing {
        y: 0.0,
        radius,
        uv_scale: height,
        normal: Vec3::NEG_Y,
        tangent: Vec3::NEG_X,
    };
    base.emit(&mut level, slices, CapFacing::Down);

    if options.double_sided_base {
        let inner = CapRing {
            normal: Vec3::Y,
            ..base
        };
        inner.emit(&mut level, slices, CapFacing::Up);
    }

    // Lateral ring: placeholder frames are overwritten per segment below
    let ring = level.vertex_count() as u32;
    let d_theta = TAU / slices as f32;
    for i in 0..=slices {
        let (s, c) = ((i % slices) as f32 * d_theta).sin_cos();
        level.add_vertex(Vertex::new(
            Vec3::new(radius * c, 0.0, radius * s),
            Vec3::ZERO,
            Vec2::new(i as f32 / slices as f32, 1.0),
            Vec3::ZERO,
        ));
    }
    let apex_position = Vec3::new(0.0, height, 0.0);
    let apex = level.add_vertex(Vertex::new(
        apex_position,
        Vec3::Y,
        Vec2::new(0.5, 0.0),
        Vec3::X,
    ));

    for i in 0..slices {
        let (i0, i1) = ((ring + i) as usize, (ring + i + 1) as usize);
        level.add_triangle(apex, ring + i + 1, ring + i);

        let p0 = level.vertices[i0].position;
        let p1 = level.vertices[i1].position;

        // Tangent runs up the slant, from the edge midpoint to the apex
        let tangent = (apex_position - (p0 + p1) * 0.5).normalize();
        let to_apex = (apex_position - p0).normalize();
        let along_base = (p1 - p0).normalize();
        let normal = match options.normals {
            ConeNormals::Geometric => to_apex.cross(along_base).normalize(),
            ConeNormals::LegacyDot => Vec3::splat(to_apex.dot(along_base)),
        };

        for index in [i0, i1] {
            level.vertices[index].normal = normal;
            level.vertices[index].tangent = tangent;
        }
    }

    level
}
