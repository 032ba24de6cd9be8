//! # Convex Hull
//!
//! Smallest convex solid containing a solid's vertices.

use manifold_kernel::Solid;

use super::Manifold;

impl Manifold {
    /// Convex hull of this solid.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let pair = Manifold::cube(1.0, 1.0, 1.0)
    ///     .union(&Manifold::cube(1.0, 1.0, 1.0).translate(3.0, 0.0, 0.0));
    /// assert!((pair.hull().volume() - 4.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn hull(&self) -> Manifold {
        Manifold::from_solid(self.solid().hull())
    }

    /// Convex hull of several solids together.
    #[must_use]
    pub fn batch_hull(manifolds: &[Manifold]) -> Manifold {
        let solids: Vec<Solid> = manifolds.iter().map(|m| m.solid().clone()).collect();
        Manifold::from_solid(Solid::batch_hull(&solids))
    }
}
