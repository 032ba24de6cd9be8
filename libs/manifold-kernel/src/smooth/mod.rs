//! # Smoothing
//!
//! Attaches a smooth surface to a solid without changing its triangles.
//! Each triangle gets a cubic Bézier [`Patch`]; refinement then samples the
//! patches instead of the flat triangles.
//!
//! ## Edge curves
//!
//! The boundary of a patch is fixed by its corners and the two control
//! points of each edge. Both triangles sharing an edge derive those control
//! points from the same data, so neighbouring patches meet without cracks:
//!
//! - **Smooth edge**: the edge is projected onto the tangent plane of the
//!   shared vertex normal
//! - **Crease**: the edge follows the line where the tangent planes of the
//!   two sides intersect, which keeps a straight crease straight
//!
//! `smooth_out` can blend creases back towards the smooth curve with its
//! `min_smoothness` factor.

mod normals;

#[cfg(test)]
mod tests;

use config::constants::EPSILON;
use glam::DAffine3;
use tracing::debug;

use crate::core::Vec3;
use crate::Solid;

pub(crate) use normals::{corner_normals, vertex_normals, CornerRegions};

// =============================================================================
// PATCH
// =============================================================================

/// Cubic Bézier triangle over one triangle of a solid.
///
/// `edges` holds two control points per edge in winding order: near corner
/// 0 and near corner 1 on the first edge, then near 1 and near 2, then near
/// 2 and near 0. The corners themselves live in the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Patch {
    pub edges: [Vec3; 6],
}

impl Patch {
    /// Patch reproducing the flat triangle.
    pub fn flat(corners: [Vec3; 3]) -> Self {
        let [a, b, c] = corners;
        let third = |from: Vec3, to: Vec3| from + (to - from) / 3.0;
        Self {
            edges: [
                third(a, b),
                third(b, a),
                third(b, c),
                third(c, b),
                third(c, a),
                third(a, c),
            ],
        }
    }

    /// Reorders the control points for a triangle whose winding was flipped
    /// by swapping its last two corners.
    pub fn reverse(&mut self) {
        self.edges.reverse();
    }

    /// Patch after mapping its control points through `matrix`.
    pub fn transformed(&self, matrix: &DAffine3) -> Self {
        Self {
            edges: self.edges.map(|p| matrix.transform_point3(p)),
        }
    }

    /// Surface point at barycentric coordinates `w` of the triangle with
    /// `corners`.
    pub fn eval(&self, corners: [Vec3; 3], w: [f64; 3]) -> Vec3 {
        let [p0, p1, p2] = corners;
        let [w0, w1, w2] = w;
        let e = &self.edges;
        let corner_mean = (p0 + p1 + p2) / 3.0;
        let edge_mean = e.iter().sum::<Vec3>() / 6.0;
        let center = edge_mean + (edge_mean - corner_mean) * 0.5;

        p0 * (w0 * w0 * w0)
            + p1 * (w1 * w1 * w1)
            + p2 * (w2 * w2 * w2)
            + e[0] * (3.0 * w0 * w0 * w1)
            + e[1] * (3.0 * w0 * w1 * w1)
            + e[2] * (3.0 * w1 * w1 * w2)
            + e[3] * (3.0 * w1 * w2 * w2)
            + e[4] * (3.0 * w2 * w2 * w0)
            + e[5] * (3.0 * w2 * w0 * w0)
            + center * (6.0 * w0 * w1 * w2)
    }
}

// =============================================================================
// EDGE CONTROL POINTS
// =============================================================================

/// Control point near `start` on the edge towards `start + edge`, with the
/// edge bent into the tangent plane of `normal`.
fn smooth_control(start: Vec3, edge: Vec3, normal: Vec3) -> Vec3 {
    start + (edge - normal * edge.dot(normal)) / 3.0
}

/// Control point near `start` for an edge whose two sides report normals
/// `left` and `right` at `start`.
///
/// Matching normals give a smooth edge. Differing normals give a crease
/// running along the intersection of both tangent planes. The result does
/// not depend on which side is called left.
fn edge_control(start: Vec3, edge: Vec3, left: Vec3, right: Vec3) -> Vec3 {
    if left.dot(right) >= 1.0 - EPSILON {
        return smooth_control(start, edge, (left + right).normalize_or_zero());
    }
    match left.cross(right).try_normalize() {
        Some(tangent) => start + tangent * (tangent.dot(edge) / 3.0),
        None => start + edge / 3.0,
    }
}

/// How creases are treated while building patches.
struct Creases<'a> {
    /// Per halfedge: true if the edge is a crease.
    sharp: &'a [bool],
    /// Per vertex: normal used when a crease is blended back.
    vertex_normals: &'a [Vec3],
    /// Blend factor towards the smooth curve on creases, in `[0, 1]`.
    smoothness: f64,
}

/// Builds one patch per triangle from per-corner normals.
fn build_patches(solid: &Solid, normals: &[Vec3], creases: &Creases<'_>) -> Vec<Patch> {
    let opposite = solid.opposite_halfedges();
    let mut patches = Vec::with_capacity(solid.num_tri());
    for (t, tri) in solid.tri_verts.iter().enumerate() {
        let mut edges = [Vec3::ZERO; 6];
        for k in 0..3 {
            let h = 3 * t + k;
            let (a, b) = (tri[k] as usize, tri[(k + 1) % 3] as usize);
            let (pa, pb) = (solid.vert_pos[a], solid.vert_pos[b]);
            let end = 3 * t + (k + 1) % 3;
            // normals on the far side at the same two vertices
            let (far_a, far_b) = match opposite[h] {
                Some(o) => (normals[3 * (o / 3) + (o % 3 + 1) % 3], normals[o]),
                None => (normals[h], normals[end]),
            };

            let mut near_a = edge_control(pa, pb - pa, normals[h], far_a);
            let mut near_b = edge_control(pb, pa - pb, normals[end], far_b);
            if creases.sharp[h] && creases.smoothness > 0.0 {
                let s = creases.smoothness;
                near_a = near_a.lerp(smooth_control(pa, pb - pa, creases.vertex_normals[a]), s);
                near_b = near_b.lerp(smooth_control(pb, pa - pb, creases.vertex_normals[b]), s);
            }
            edges[2 * k] = near_a;
            edges[2 * k + 1] = near_b;
        }
        patches.push(Patch { edges });
    }
    patches
}

// =============================================================================
// PUBLIC OPERATIONS
// =============================================================================

impl Solid {
    /// Attaches a smooth surface that keeps edges with a dihedral angle above
    /// `min_sharp_angle` degrees as creases.
    ///
    /// `min_smoothness` in `[0, 1]` bends creases towards the smooth surface:
    /// zero keeps them sharp, one removes them. Flat faces bounded by creases
    /// stay flat.
    ///
    /// The triangles are unchanged; call a refine operation to sample the
    /// surface.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let box_ = Solid::cube([1.0, 1.0, 1.0]).smooth_out(60.0, 0.0).refine(3);
    /// assert!((box_.volume() - 1.0).abs() < 1e-9);
    /// ```
    pub fn smooth_out(&self, min_sharp_angle: f64, min_smoothness: f64) -> Solid {
        if self.is_empty() {
            return Solid::empty();
        }
        let regions = CornerRegions::new(self, min_sharp_angle);
        let normals = regions.normals(self);
        let vertex_normals = vertex_normals(self);
        let smoothness = if min_smoothness.is_nan() {
            0.0
        } else {
            min_smoothness.clamp(0.0, 1.0)
        };
        let creases = Creases {
            sharp: &regions.sharp,
            vertex_normals: &vertex_normals,
            smoothness,
        };
        debug!(
            triangles = self.num_tri(),
            creases = regions.sharp.iter().filter(|&&s| s).count() / 2,
            smoothness,
            "Smoothing by dihedral angle"
        );

        let mut result = self.clone();
        result.patches = Some(build_patches(self, &normals, &creases));
        result
    }

    /// Attaches a smooth surface whose normals come from the property
    /// channels starting at `normal_idx`.
    ///
    /// Where the two sides of an edge disagree on a vertex normal the edge
    /// becomes a crease. A solid without those channels is smoothed with
    /// angle-weighted vertex normals instead.
    pub fn smooth_by_normals(&self, normal_idx: usize) -> Solid {
        if self.is_empty() {
            return Solid::empty();
        }
        let vertex_normals = vertex_normals(self);
        let normals = match corner_normals(self, normal_idx) {
            Some(normals) => normals,
            None => {
                debug!(normal_idx, num_prop = self.num_prop(), "No normal channels, smoothing every edge");
                self.tri_verts
                    .iter()
                    .flat_map(|tri| tri.map(|v| vertex_normals[v as usize]))
                    .collect()
            }
        };
        let sharp = vec![false; self.num_tri() * 3];
        let creases = Creases {
            sharp: &sharp,
            vertex_normals: &vertex_normals,
            smoothness: 0.0,
        };

        let mut result = self.clone();
        result.patches = Some(build_patches(self, &normals, &creases));
        result
    }
}
