//! # Error Types
//!
//! The facade reports one kind of failure: input buffers that break the
//! documented layout contract.
//!
//! ## Error Policy
//!
//! - Geometric degeneracy is not an error. A collapsed or empty result is an
//!   empty [`Manifold`] or an empty [`Polygons`]; check `is_empty()`.
//! - Malformed buffers are rejected before anything is copied, with an
//!   [`InvalidInput`] naming the broken rule.
//!
//! [`Manifold`]: crate::Manifold
//! [`Polygons`]: crate::Polygons

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the facade.
///
/// ## Example
///
/// ```rust
/// use manifold_rs::{Error, InvalidInput, Mesh};
///
/// match Mesh::new(&[0.0, 0.0], &[]) {
///     Err(Error::InvalidInput(InvalidInput::VertexBufferLength { len, num_props })) => {
///         assert_eq!((len, num_props), (2, 3));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A caller buffer violates the layout contract.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// The layout rule a caller buffer broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The vertex buffer does not hold a whole number of vertices.
    #[error("vertex buffer of length {len} is not a multiple of {num_props}")]
    VertexBufferLength {
        /// Length of the vertex buffer
        len: usize,
        /// Values per vertex
        num_props: u32,
    },

    /// The index buffer does not hold a whole number of triangles.
    #[error("index buffer of length {0} is not a multiple of 3")]
    IndexBufferLength(usize),

    /// A triangle references a vertex past the end of the vertex buffer.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index
        index: u32,
        /// Number of vertices in the buffer
        vertex_count: usize,
    },

    /// Fewer than three values per vertex, so there is no room for a position.
    #[error("{0} properties per vertex, at least 3 are required")]
    PropertyCount(u32),

    /// A polygon's flat coordinate list has an odd length.
    #[error("polygon {polygon} has {len} coordinates, expected an even count")]
    OddPolygonCoordinates {
        /// Index of the polygon in the set
        polygon: usize,
        /// Number of coordinates supplied
        len: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for facade operations.
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// TESTS
// =============================================================================
