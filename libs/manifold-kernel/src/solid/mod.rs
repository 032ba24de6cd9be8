//! # Solid
//!
//! The kernel's boundary representation: welded vertex positions plus
//! outward-wound triangles. Optional data rides along:
//!
//! - **Properties**: extra per-vertex channels (normals, colors, UVs). Each
//!   triangle corner references a *property vertex*, so one position can
//!   carry different values on either side of a crease.
//! - **Patches**: a cubic Bézier description of a smooth surface over each
//!   triangle, attached by smoothing and consumed by refinement.
//!
//! A `Solid` is immutable from the outside; every operation returns a new one.

mod mesh_gl;
mod topology;
mod weld;

#[cfg(test)]
mod tests;

pub use mesh_gl::MeshGL;
pub(crate) use weld::VertexWelder;

use crate::core::{BoundingBox, Vec3};
use crate::smooth::Patch;

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Property channels attached to a [`Solid`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Properties {
    /// Channels per property vertex, position excluded.
    pub num_prop: usize,
    /// `num_prop` values per property vertex.
    pub values: Vec<f64>,
    /// Property vertex per triangle corner, parallel to `tri_verts`.
    pub tri_props: Vec<[u32; 3]>,
}

impl Properties {
    /// Number of property vertices.
    pub fn count(&self) -> usize {
        if self.num_prop == 0 {
            0
        } else {
            self.values.len() / self.num_prop
        }
    }

    /// Values of one property vertex.
    pub fn get(&self, prop_vert: u32) -> &[f64] {
        let start = prop_vert as usize * self.num_prop;
        &self.values[start..start + self.num_prop]
    }
}

/// A closed, consistently oriented triangle mesh, or the empty solid.
///
/// ## Invariants
///
/// - Every index in `tri_verts` is `< vert_pos.len()`
/// - Every directed edge is matched by exactly one opposite edge
/// - Triangles are wound counter-clockwise seen from outside
#[derive(Debug, Clone, Default)]
pub struct Solid {
    pub(crate) vert_pos: Vec<Vec3>,
    pub(crate) tri_verts: Vec<[u32; 3]>,
    pub(crate) properties: Option<Properties>,
    pub(crate) patches: Option<Vec<Patch>>,
}

impl Solid {
    /// The canonical empty solid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solid from positions and triangles with no extra data.
    ///
    /// Degenerate triangles and unreferenced vertices are dropped.
    pub(crate) fn from_parts(vert_pos: Vec<Vec3>, tri_verts: Vec<[u32; 3]>) -> Self {
        Self {
            vert_pos,
            tri_verts,
            properties: None,
            patches: None,
        }
        .compact()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// True if the solid encloses nothing.
    pub fn is_empty(&self) -> bool {
        self.tri_verts.is_empty()
    }

    /// Number of distinct vertex positions.
    pub fn num_vert(&self) -> usize {
        self.vert_pos.len()
    }

    /// Number of triangles.
    pub fn num_tri(&self) -> usize {
        self.tri_verts.len()
    }

    /// Number of extra property channels per vertex.
    pub fn num_prop(&self) -> usize {
        self.properties.as_ref().map_or(0, |p| p.num_prop)
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.vert_pos
    }

    /// Triangles as indices into [`Solid::positions`].
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.tri_verts
    }

    /// True if a smooth surface is attached and refinement will follow it.
    pub fn is_smooth(&self) -> bool {
        self.patches.is_some()
    }

    /// Axis-aligned bounds, `None` for the empty solid.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.is_empty() {
            return None;
        }
        BoundingBox::from_points(&self.vert_pos)
    }

    /// Enclosed volume, from the divergence theorem.
    pub fn volume(&self) -> f64 {
        self.tri_verts
            .iter()
            .map(|t| {
                let [a, b, c] = self.corners(t);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Total boundary area.
    pub fn surface_area(&self) -> f64 {
        self.tri_verts
            .iter()
            .map(|t| {
                let [a, b, c] = self.corners(t);
                (b - a).cross(c - a).length()
            })
            .sum::<f64>()
            * 0.5
    }

    /// Tolerance scale: the largest absolute coordinate, at least one.
    pub(crate) fn tolerance_scale(&self) -> f64 {
        self.bounding_box().map_or(1.0, |bb| bb.scale().max(1.0))
    }

    pub(crate) fn corners(&self, tri: &[u32; 3]) -> [Vec3; 3] {
        [
            self.vert_pos[tri[0] as usize],
            self.vert_pos[tri[1] as usize],
            self.vert_pos[tri[2] as usize],
        ]
    }

    /// Unit normal of triangle `tri`, zero for degenerate triangles.
    pub(crate) fn face_normal(&self, tri: usize) -> Vec3 {
        let [a, b, c] = self.corners(&self.tri_verts[tri]);
        (b - a).cross(c - a).normalize_or_zero()
    }

    // =========================================================================
    // CLEANUP
    // =========================================================================

    /// Drops triangles that repeat a vertex and vertices no triangle uses.
    pub(crate) fn compact(mut self) -> Self {
        let keep: Vec<bool> = self
            .tri_verts
            .iter()
            .map(|t| t[0] != t[1] && t[1] != t[2] && t[2] != t[0])
            .collect();
        if keep.iter().any(|k| !k) {
            retain_by_mask(&mut self.tri_verts, &keep);
            if let Some(props) = self.properties.as_mut() {
                retain_by_mask(&mut props.tri_props, &keep);
            }
            if let Some(patches) = self.patches.as_mut() {
                retain_by_mask(patches, &keep);
            }
        }

        let mut remap = vec![u32::MAX; self.vert_pos.len()];
        let mut positions = Vec::with_capacity(self.vert_pos.len());
        for tri in &mut self.tri_verts {
            for v in tri.iter_mut() {
                let old = *v as usize;
                if remap[old] == u32::MAX {
                    remap[old] = positions.len() as u32;
                    positions.push(self.vert_pos[old]);
                }
                *v = remap[old];
            }
        }
        self.vert_pos = positions;

        if let Some(props) = self.properties.take() {
            self.properties = compact_properties(props);
        }
        if self.tri_verts.is_empty() {
            return Self::empty();
        }
        self
    }

    /// Flips triangle winding, reordering per-corner data to match.
    pub(crate) fn flip_winding(&mut self) {
        for tri in &mut self.tri_verts {
            tri.swap(1, 2);
        }
        if let Some(props) = self.properties.as_mut() {
            for tri in &mut props.tri_props {
                tri.swap(1, 2);
            }
        }
        if let Some(patches) = self.patches.as_mut() {
            for patch in patches {
                patch.reverse();
            }
        }
    }

    /// Returns the solid without property channels or patches.
    pub(crate) fn geometry_only(&self) -> Self {
        Self {
            vert_pos: self.vert_pos.clone(),
            tri_verts: self.tri_verts.clone(),
            properties: None,
            patches: None,
        }
    }
}

/// Keeps the items whose flag in `keep` is set. Both slices run in step.
fn retain_by_mask<T>(items: &mut Vec<T>, keep: &[bool]) {
    let mut flags = keep.iter();
    items.retain(|_| flags.next().copied().unwrap_or(false));
}

/// Removes unreferenced property vertices.
fn compact_properties(mut props: Properties) -> Option<Properties> {
    if props.num_prop == 0 || props.tri_props.is_empty() {
        return None;
    }
    let mut remap = vec![u32::MAX; props.count()];
    let mut values = Vec::with_capacity(props.values.len());
    for tri in &mut props.tri_props {
        for v in tri.iter_mut() {
            let old = *v as usize;
            if remap[old] == u32::MAX {
                remap[old] = (values.len() / props.num_prop) as u32;
                values.extend_from_slice(&props.values[old * props.num_prop..(old + 1) * props.num_prop]);
            }
            *v = remap[old];
        }
    }
    props.values = values;
    Some(props)
}
