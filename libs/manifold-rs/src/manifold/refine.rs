//! # Refinement and Smoothing
//!
//! Smoothing attaches a curved surface to the solid without moving any
//! vertex. The curve shows up once the solid is refined, since refinement
//! samples new vertices on that surface. A solid with no curved surface
//! refines flat.

use super::Manifold;

impl Manifold {
    /// Splits every triangle into `n²` triangles. `n <= 1` is a copy.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let cube = Manifold::cube(1.0, 1.0, 1.0);
    /// assert_eq!(cube.refine(4).num_tri(), 12 * 16);
    /// ```
    #[must_use]
    pub fn refine(&self, n: u32) -> Manifold {
        Manifold::from_solid(self.solid().refine(n))
    }

    /// Splits edges until none is longer than `length`.
    #[must_use]
    pub fn refine_to_length(&self, length: f64) -> Manifold {
        Manifold::from_solid(self.solid().refine_to_length(length))
    }

    /// Splits edges until the curved surface lies within `tolerance` of the
    /// triangles. Without a curved surface this is a copy.
    #[must_use]
    pub fn refine_to_tolerance(&self, tolerance: f64) -> Manifold {
        Manifold::from_solid(self.solid().refine_to_tolerance(tolerance))
    }

    /// Curves the surface along the normals stored at property offset
    /// `normal_idx`, as written by [`Manifold::calculate_normals`].
    ///
    /// Edges whose two sides store different normals stay sharp. Without
    /// stored normals every edge is smoothed.
    #[must_use]
    pub fn smooth_by_normals(&self, normal_idx: u32) -> Manifold {
        Manifold::from_solid(self.solid().smooth_by_normals(normal_idx as usize))
    }

    /// Curves the surface across every edge whose dihedral angle is below
    /// `min_sharp_angle` degrees.
    ///
    /// Sharper edges stay creased; `min_smoothness` in `[0, 1]` rounds them
    /// off by that fraction.
    #[must_use]
    pub fn smooth_out(&self, min_sharp_angle: f64, min_smoothness: f64) -> Manifold {
        Manifold::from_solid(self.solid().smooth_out(min_sharp_angle, min_smoothness))
    }

    /// Stores vertex normals as three properties starting at `normal_idx`.
    ///
    /// Edges sharper than `min_sharp_angle` degrees are creases: a vertex on
    /// a crease gets one normal per side.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let mesh = Manifold::cube(1.0, 1.0, 1.0).calculate_normals(0, 60.0).to_mesh();
    /// assert_eq!(mesh.num_props(), 6);
    /// assert_eq!(mesh.vertex_count(), 24);
    /// ```
    #[must_use]
    pub fn calculate_normals(&self, normal_idx: u32, min_sharp_angle: f64) -> Manifold {
        Manifold::from_solid(self.solid().calculate_normals(normal_idx as usize, min_sharp_angle))
    }
}
