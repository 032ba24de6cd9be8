//! # Manifold Module
//!
//! The solid handle and every operation on it.
//!
//! ## Structure
//!
//! - `constructors`: tetrahedron, cube, sphere, cylinder, extrude, revolve
//! - `boolean`: union, intersection, difference
//! - `transform`: translate, scale, rotate, trim by plane
//! - `hull`: convex hull
//! - `refine`: refinement, smoothing and normals
//! - `sections`: slice and project
//!
//! Every operation borrows its inputs and returns a new handle. Degenerate
//! results are the empty solid; a kernel failure is logged and also becomes
//! the empty solid.

pub mod boolean;
pub mod constructors;
pub mod hull;
pub mod refine;
pub mod sections;
pub mod transform;


use manifold_kernel::{BoundingBox, KernelResult, Solid};
use tracing::warn;

use crate::mesh::Mesh;

// =============================================================================
// MANIFOLD STRUCT
// =============================================================================

/// Closed, watertight solid.
///
/// ## Example
///
/// ```rust
/// use manifold_rs::Manifold;
///
/// let cube = Manifold::cube(10.0, 10.0, 10.0);
/// let sphere = Manifold::sphere(5.0, 32).translate(5.0, 5.0, 5.0);
/// let result = cube.difference(&sphere);
/// assert!(result.volume() < cube.volume());
/// let mesh = result.to_mesh();
/// assert_eq!(mesh.num_props(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Manifold {
    solid: Solid,
}

impl Manifold {
    pub(crate) fn from_solid(solid: Solid) -> Self {
        Self { solid }
    }

    /// Unwraps a kernel result, turning a failure into the empty solid.
    pub(crate) fn from_kernel(result: KernelResult<Solid>, operation: &'static str) -> Self {
        match result {
            Ok(solid) => Self::from_solid(solid),
            Err(err) => {
                warn!(operation, error = %err, "Kernel failure, returning empty solid");
                Self::empty()
            }
        }
    }

    pub(crate) fn solid(&self) -> &Solid {
        &self.solid
    }

    /// The canonical empty solid.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_solid(Solid::empty())
    }

    /// True if the solid encloses nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of distinct vertex positions.
    #[must_use]
    pub fn num_vert(&self) -> usize {
        self.solid.num_vert()
    }

    /// Number of triangles.
    #[must_use]
    pub fn num_tri(&self) -> usize {
        self.solid.num_tri()
    }

    /// Enclosed volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.solid.volume()
    }

    /// Total boundary area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.solid.surface_area()
    }

    /// Axis-aligned bounds, or `None` for the empty solid.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.solid.bounding_box()
    }

    // =========================================================================
    // MESH CONVERSION
    // =========================================================================

    /// Flattens the boundary into a mesh.
    ///
    /// Vertices are shared wherever their properties agree, so a solid with
    /// no extra properties exports each position once.
    #[must_use]
    pub fn to_mesh(&self) -> Mesh {
        Mesh::from_mesh_gl(self.solid.get_mesh_gl())
    }

    /// Builds a solid from a mesh.
    ///
    /// Coincident positions are welded. A mesh that does not close up into
    /// a manifold surface gives the empty solid.
    #[must_use]
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self::from_mesh_ref(&mesh)
    }

    pub(crate) fn from_mesh_ref(mesh: &Mesh) -> Self {
        Self::from_kernel(Solid::from_mesh_gl(mesh.as_mesh_gl()), "from_mesh")
    }
}
