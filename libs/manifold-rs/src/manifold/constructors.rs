//! # Constructors
//!
//! Primitive solids and sweeps of polygon sets.
//!
//! ## Tessellation
//!
//! A `circular_segments` of zero picks a count from the radius: one segment
//! per 10° or per unit of circumference, whichever is fewer, rounded up to
//! a multiple of four and never below four. Nonzero counts below three are
//! raised to three.

use manifold_kernel::Solid;

use crate::error::Result;
use crate::polygons::Polygons;

use super::Manifold;

impl Manifold {
    /// Regular tetrahedron with vertices at alternating corners of the
    /// cube `[-1, 1]³`.
    #[must_use]
    pub fn tetrahedron() -> Self {
        Self::from_solid(Solid::tetrahedron())
    }

    /// Box spanning the origin to `(x, y, z)`.
    ///
    /// A zero, negative or non-finite size gives the empty solid.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let mesh = Manifold::cube(1.0, 1.0, 1.0).to_mesh();
    /// assert_eq!(mesh.vertex_count(), 8);
    /// assert_eq!(mesh.triangle_count(), 12);
    /// ```
    #[must_use]
    pub fn cube(x: f64, y: f64, z: f64) -> Self {
        Self::from_solid(Solid::cube([x, y, z]))
    }

    /// Sphere of `radius` centered at the origin, with `circular_segments`
    /// vertices around each latitude.
    #[must_use]
    pub fn sphere(radius: f64, circular_segments: u32) -> Self {
        Self::from_solid(Solid::sphere(radius, circular_segments))
    }

    /// Cylinder or cone frustum on the XY plane, `0..height` along Z.
    ///
    /// A negative `radius_high` reuses `radius_low`. A zero radius at one
    /// end closes that end in an apex.
    #[must_use]
    pub fn cylinder(radius_low: f64, radius_high: f64, height: f64, circular_segments: u32) -> Self {
        Self::from_solid(Solid::cylinder(
            height,
            radius_low,
            radius_high,
            circular_segments,
        ))
    }

    // =========================================================================
    // SWEEPS
    // =========================================================================

    /// Sweeps polygons along +Z by `height`.
    ///
    /// The sweep is cut into `n_divisions` layers (zero counts as one),
    /// turns by `twist_degrees` over its height and scales its top by
    /// `(scale_top_x, scale_top_y)`. A top scale of zero closes the sweep
    /// in a point.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](crate::InvalidInput) if a coordinate list has an
    /// odd length. Degenerate polygons give the empty solid.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let square: &[f64] = &[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
    /// let prism = Manifold::extrude(&[square], 3.0, 0, 0.0, 1.0, 1.0).unwrap();
    /// assert!((prism.volume() - 12.0).abs() < 1e-9);
    /// ```
    pub fn extrude(
        polygons: &[&[f64]],
        height: f64,
        n_divisions: u32,
        twist_degrees: f64,
        scale_top_x: f64,
        scale_top_y: f64,
    ) -> Result<Self> {
        let section = Polygons::new(polygons)?.to_cross_section();
        Ok(Self::from_kernel(
            section.extrude(height, n_divisions, twist_degrees, [scale_top_x, scale_top_y]),
            "extrude",
        ))
    }

    /// Sweeps polygons around the Z axis by `revolve_degrees`.
    ///
    /// Polygon X becomes the radius and Y the height; material at negative
    /// X is cut off. Sweeps short of a full turn get flat end caps.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`](crate::InvalidInput) if a coordinate list has an
    /// odd length. Degenerate polygons give the empty solid.
    pub fn revolve(polygons: &[&[f64]], circular_segments: u32, revolve_degrees: f64) -> Result<Self> {
        let section = Polygons::new(polygons)?.to_cross_section();
        Ok(Self::from_kernel(
            section.revolve(circular_segments, revolve_degrees),
            "revolve",
        ))
    }
}
