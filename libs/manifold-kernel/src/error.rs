//! # Error Types
//!
//! Structural failures the kernel can report. Geometric degeneracy is never
//! an error: a collapsed or empty result is returned as an empty [`Solid`].
//! These variants cover the cases where the kernel cannot even interpret its
//! input.
//!
//! [`Solid`]: crate::Solid

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by kernel operations.
///
/// ## Example
///
/// ```rust
/// use manifold_kernel::{KernelError, MeshGL, Solid};
///
/// // A lone triangle has open edges
/// let mesh = MeshGL {
///     num_prop: 3,
///     vert_properties: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     tri_verts: vec![0, 1, 2],
/// };
/// match Solid::from_mesh_gl(&mesh) {
///     Err(KernelError::NotManifold { open_edges, .. }) => assert_eq!(open_edges, 3),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The mesh does not describe a closed oriented 2-manifold.
    #[error("mesh is not manifold: {open_edges} open edges, {overused_edges} overused edges")]
    NotManifold {
        /// Directed edges with no opposite partner
        open_edges: usize,
        /// Directed edges used by more than one triangle
        overused_edges: usize,
    },

    /// Polygon triangulation failed.
    ///
    /// Contains the operation that needed the triangulation.
    #[error("triangulation failed during '{operation}': {message}")]
    Triangulation {
        /// Name of the operation (extrude cap, revolve cap)
        operation: String,
        /// Error message from the triangulator
        message: String,
    },

    /// A triangle references a vertex that does not exist.
    #[error("triangle index {index} out of range for {num_vert} vertices")]
    IndexOutOfRange {
        /// The offending index
        index: u32,
        /// Number of vertices in the mesh
        num_vert: usize,
    },

    /// The mesh property layout is unusable.
    #[error("mesh has {0} properties per vertex, at least 3 are required")]
    PropertyCount(u32),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

// =============================================================================
// TESTS
// =============================================================================
