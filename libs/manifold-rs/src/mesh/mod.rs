//! # Mesh
//!
//! Flat indexed triangle mesh as it crosses the facade boundary.
//!
//! ## Memory Layout
//!
//! - `vertices`: `num_props` floats per vertex, position first:
//!   `[x0, y0, z0, extra.., x1, y1, z1, extra.., ...]`
//! - `indices`: `[i0, i1, i2, ...]`, three per triangle
//!
//! ## Example
//!
//! ```rust
//! use manifold_rs::Mesh;
//!
//! let mesh = Mesh::new(
//!     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
//!     &[0, 1, 2],
//! )
//! .unwrap();
//! assert_eq!(mesh.num_props(), 3);
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```


use manifold_kernel::MeshGL;

use crate::error::{InvalidInput, Result};
use crate::Manifold;

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh in flat buffers, owned by this value.
///
/// Every `Mesh` satisfies its layout invariants: the vertex buffer holds a
/// whole number of vertices, the index buffer a whole number of triangles,
/// and every index names an existing vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    inner: MeshGL,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Position-only mesh from caller buffers. Both buffers are copied.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`] if `vertices.len()` or `indices.len()` is not a
    /// multiple of 3, or an index is out of range.
    pub fn new(vertices: &[f32], indices: &[u32]) -> Result<Self> {
        Self::with_properties(3, vertices, indices)
    }

    /// Mesh with `num_props` values per vertex, the first three being the
    /// position. Both buffers are copied.
    ///
    /// # Errors
    ///
    /// [`InvalidInput`] if `num_props < 3`, a buffer length does not match
    /// the layout, or an index is out of range.
    pub fn with_properties(num_props: u32, vertices: &[f32], indices: &[u32]) -> Result<Self> {
        if num_props < 3 {
            return Err(InvalidInput::PropertyCount(num_props).into());
        }
        if vertices.len() % num_props as usize != 0 {
            return Err(InvalidInput::VertexBufferLength {
                len: vertices.len(),
                num_props,
            }
            .into());
        }
        if indices.len() % 3 != 0 {
            return Err(InvalidInput::IndexBufferLength(indices.len()).into());
        }
        let vertex_count = vertices.len() / num_props as usize;
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(InvalidInput::IndexOutOfRange {
                index,
                vertex_count,
            }
            .into());
        }
        Ok(Self {
            inner: MeshGL {
                num_prop: num_props,
                vert_properties: vertices.to_vec(),
                tri_verts: indices.to_vec(),
            },
        })
    }

    /// Wraps a kernel mesh, which already satisfies the layout invariants.
    pub(crate) fn from_mesh_gl(inner: MeshGL) -> Self {
        Self { inner }
    }

    pub(crate) fn as_mesh_gl(&self) -> &MeshGL {
        &self.inner
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Number of values per vertex, position included.
    pub fn num_props(&self) -> u32 {
        self.inner.num_prop
    }

    /// Copy of the vertex property buffer.
    pub fn vertices(&self) -> Vec<f32> {
        self.inner.vert_properties.clone()
    }

    /// Copy of the triangle index buffer.
    pub fn indices(&self) -> Vec<u32> {
        self.inner.tri_verts.clone()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.inner.num_vert()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.inner.num_tri()
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.inner.tri_verts.is_empty()
    }

    /// Solid enclosed by this mesh. See [`Manifold::from_mesh`].
    pub fn to_manifold(&self) -> Manifold {
        Manifold::from_mesh_ref(self)
    }
}

impl From<Mesh> for Manifold {
    fn from(mesh: Mesh) -> Self {
        mesh.to_manifold()
    }
}

impl From<Manifold> for Mesh {
    fn from(manifold: Manifold) -> Self {
        manifold.to_mesh()
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Position-only mesh from caller buffers. See [`Mesh::new`].
///
/// # Errors
///
/// [`InvalidInput`] on malformed buffers.
pub fn mesh_from_vertices(vertices: &[f32], indices: &[u32]) -> Result<Mesh> {
    Mesh::new(vertices, indices)
}

/// Flattens a solid into a mesh. See [`Manifold::to_mesh`].
pub fn mesh_from_manifold(manifold: &Manifold) -> Mesh {
    manifold.to_mesh()
}

/// Builds a solid from a mesh. See [`Manifold::from_mesh`].
pub fn manifold_from_mesh(mesh: &Mesh) -> Manifold {
    mesh.to_manifold()
}
