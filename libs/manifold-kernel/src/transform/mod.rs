//! # Transforms
//!
//! Affine maps applied to every vertex of a solid, plus the plane trim that
//! is built on top of them.
//!
//! A map with a negative determinant mirrors the solid, so triangle winding
//! is flipped to keep normals pointing outward. A map that collapses an axis
//! encloses no volume and yields the empty solid.


use glam::{DAffine3, DMat3};
use tracing::debug;

use crate::core::trig::{cosd, sind};
use crate::core::Vec3;
use crate::Solid;

/// Matrix rotating by `degrees` about X, then Y, then Z.
///
/// Multiples of 90° produce exact entries.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use manifold_kernel::transform::rotation_matrix;
/// let m = rotation_matrix([0.0, 0.0, 90.0]);
/// assert_eq!(m * DVec3::X, DVec3::Y);
/// ```
pub fn rotation_matrix(degrees: [f64; 3]) -> DMat3 {
    let [x, y, z] = degrees;
    let (sx, cx) = (sind(x), cosd(x));
    let (sy, cy) = (sind(y), cosd(y));
    let (sz, cz) = (sind(z), cosd(z));
    let rx = DMat3::from_cols(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, cx, sx),
        Vec3::new(0.0, -sx, cx),
    );
    let ry = DMat3::from_cols(
        Vec3::new(cy, 0.0, -sy),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(sy, 0.0, cy),
    );
    let rz = DMat3::from_cols(
        Vec3::new(cz, sz, 0.0),
        Vec3::new(-sz, cz, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );
    rz * ry * rx
}

impl Solid {
    /// Applies an affine map to the solid.
    ///
    /// Property channels are carried unchanged. Smooth patches are mapped
    /// with the surface since Bézier control points are affine invariant.
    pub fn transform(&self, matrix: DAffine3) -> Solid {
        if self.is_empty() {
            return Solid::empty();
        }
        let det = matrix.matrix3.determinant();
        if !det.is_finite() || det == 0.0 {
            debug!(det, "Transform collapses the solid");
            return Solid::empty();
        }

        let vert_pos: Vec<Vec3> = self
            .vert_pos
            .iter()
            .map(|&p| matrix.transform_point3(p))
            .collect();
        if vert_pos.iter().any(|p| !p.is_finite()) {
            debug!("Transform produced non-finite positions");
            return Solid::empty();
        }

        let mut result = Solid {
            vert_pos,
            tri_verts: self.tri_verts.clone(),
            properties: self.properties.clone(),
            patches: self
                .patches
                .as_ref()
                .map(|patches| patches.iter().map(|p| p.transformed(&matrix)).collect()),
        };
        if det < 0.0 {
            result.flip_winding();
        }
        result
    }

    /// Moves the solid by `offset`.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let moved = Solid::cube([1.0, 1.0, 1.0]).translate([2.0, 0.0, 0.0]);
    /// let bb = moved.bounding_box().unwrap();
    /// assert_eq!(bb.min.x, 2.0);
    /// assert_eq!(bb.max.x, 3.0);
    /// ```
    pub fn translate(&self, offset: [f64; 3]) -> Solid {
        self.transform(DAffine3::from_translation(Vec3::from_array(offset)))
    }

    /// Scales the solid about the origin. A zero factor collapses the solid
    /// to empty; negative factors mirror it.
    pub fn scale(&self, factors: [f64; 3]) -> Solid {
        self.transform(DAffine3::from_scale(Vec3::from_array(factors)))
    }

    /// Rotates the solid by `degrees` about X, then Y, then Z.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let turned = Solid::cube([2.0, 1.0, 1.0]).rotate([0.0, 0.0, 90.0]);
    /// let bb = turned.bounding_box().unwrap();
    /// assert_eq!(bb.min.x, -1.0);
    /// assert_eq!(bb.max.y, 2.0);
    /// ```
    pub fn rotate(&self, degrees: [f64; 3]) -> Solid {
        self.transform(DAffine3::from_mat3(rotation_matrix(degrees)))
    }

    /// Keeps the part of the solid with `dot(n̂, p) <= offset`, where `n̂` is
    /// `normal` normalized.
    ///
    /// A zero normal selects no half-space and yields the empty solid.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let lower = Solid::cube([1.0, 1.0, 2.0]).trim_by_plane([0.0, 0.0, 1.0], 1.0);
    /// assert!((lower.volume() - 1.0).abs() < 1e-9);
    /// ```
    pub fn trim_by_plane(&self, normal: [f64; 3], offset: f64) -> Solid {
        let Some(normal) = Vec3::from_array(normal).try_normalize() else {
            return Solid::empty();
        };
        let Some(bb) = self.bounding_box() else {
            return Solid::empty();
        };

        let (lo, hi) = self
            .vert_pos
            .iter()
            .map(|p| normal.dot(*p))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            });
        if hi <= offset {
            return self.clone();
        }
        if lo >= offset {
            return Solid::empty();
        }

        self.intersection(&half_space(normal, offset, bb.center().length() + bb.diagonal()))
    }
}

/// Box standing in for the half-space `dot(normal, p) <= offset`, large
/// enough to contain every point within `reach` of the origin.
fn half_space(normal: Vec3, offset: f64, reach: f64) -> Solid {
    let half = 2.0 * (reach + offset.abs()) + 1.0;
    let u = normal.any_orthonormal_vector();
    let v = normal.cross(u);
    let origin = -half * u - half * v + (offset - 2.0 * half) * normal;
    let frame = DAffine3::from_mat3_translation(DMat3::from_cols(u, v, normal), origin);
    Solid::cube([2.0 * half; 3]).transform(frame)
}
