//! # Transforms
//!
//! Rigid motions, scaling and half-space trimming.

use super::Manifold;

impl Manifold {
    /// Moves the solid by `(x, y, z)`.
    #[must_use]
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Manifold {
        Manifold::from_solid(self.solid().translate([x, y, z]))
    }

    /// Scales about the origin. A zero factor flattens the solid to
    /// nothing and gives the empty solid; negative factors mirror it.
    #[must_use]
    pub fn scale(&self, x: f64, y: f64, z: f64) -> Manifold {
        Manifold::from_solid(self.solid().scale([x, y, z]))
    }

    /// Rotates by the given angles in degrees, about X first, then Y, then Z.
    ///
    /// Multiples of 90° are exact.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let bar = Manifold::cube(3.0, 1.0, 1.0).rotate(0.0, 0.0, 90.0);
    /// let bb = bar.bounding_box().unwrap();
    /// assert_eq!((bb.min.x, bb.max.y), (-1.0, 3.0));
    /// ```
    #[must_use]
    pub fn rotate(&self, x_degrees: f64, y_degrees: f64, z_degrees: f64) -> Manifold {
        Manifold::from_solid(self.solid().rotate([x_degrees, y_degrees, z_degrees]))
    }

    /// Keeps the part where `dot(n̂, p) <= offset`, with `n̂` the normalized
    /// `(normal_x, normal_y, normal_z)`.
    ///
    /// A zero normal gives the empty solid.
    #[must_use]
    pub fn trim_by_plane(&self, normal_x: f64, normal_y: f64, normal_z: f64, offset: f64) -> Manifold {
        Manifold::from_solid(self.solid().trim_by_plane([normal_x, normal_y, normal_z], offset))
    }
}
