//! # Cross Sections
//!
//! Planar outlines derived from a solid.

use crate::polygons::Polygons;

use super::Manifold;

impl Manifold {
    /// Outline of the solid where it crosses the plane `z = height`.
    ///
    /// A plane that misses the solid gives an empty set. Vertices lying
    /// exactly on the plane count as above it, so a plane through a
    /// downward-facing face gives nothing while one through an
    /// upward-facing face gives that face's outline.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let section = Manifold::cube(1.0, 1.0, 1.0).slice(0.5);
    /// assert_eq!(section.size(), 1);
    /// assert_eq!(section.get_as_slice(0).len(), 8);
    ///
    /// let cube = Manifold::cube(1.0, 1.0, 1.0);
    /// assert!(cube.slice(0.0).is_empty());
    /// assert_eq!(cube.slice(1.0).size(), 1);
    /// ```
    #[must_use]
    pub fn slice(&self, height: f64) -> Polygons {
        Polygons::from_cross_section(self.solid().slice(height))
    }

    /// Shadow of the solid on the XY plane, with overlaps merged.
    #[must_use]
    pub fn project(&self) -> Polygons {
        Polygons::from_cross_section(self.solid().project())
    }
}
