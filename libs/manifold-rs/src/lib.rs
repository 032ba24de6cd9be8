//! # manifold-rs
//!
//! Value-oriented facade over the `manifold-kernel` solid-modeling kernel.
//!
//! Callers hand in flat buffers and plain numbers and get back owned
//! handles. Every buffer is copied on the way in and every accessor copies
//! on the way out, so no handle ever aliases caller memory or another
//! handle.
//!
//! ## Handles
//!
//! - [`Manifold`]: closed solid with booleans, transforms, hull,
//!   refinement, smoothing, slicing and sweeps
//! - [`Mesh`]: flat vertex and index buffers
//! - [`Polygons`]: flat 2D polygon coordinate lists
//!
//! ## Errors
//!
//! Degenerate geometry gives an empty handle, never an error. Only
//! malformed buffers fail, with [`Error::InvalidInput`].
//!
//! ## Usage
//!
//! ```rust
//! use manifold_rs::{mesh_from_manifold, Manifold};
//!
//! let a = Manifold::cube(2.0, 2.0, 2.0);
//! let b = a.translate(1.0, 1.0, 1.0);
//! let joined = a.union(&b);
//! let bb = joined.bounding_box().unwrap();
//! assert_eq!(bb.max.to_array(), [3.0, 3.0, 3.0]);
//!
//! let mesh = mesh_from_manifold(&joined);
//! assert_eq!(mesh.num_props(), 3);
//! ```

pub mod error;
pub mod manifold;
pub mod mesh;
pub mod polygons;

pub use error::{Error, InvalidInput, Result};
pub use manifold::boolean::BooleanOp;
pub use manifold::Manifold;
pub use mesh::{manifold_from_mesh, mesh_from_manifold, mesh_from_vertices, Mesh};
pub use polygons::Polygons;

pub use manifold_kernel::BoundingBox;
