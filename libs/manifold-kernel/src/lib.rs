//! # Manifold Kernel
//!
//! Pure Rust solid-modeling kernel. Everything geometric happens here; the
//! `manifold-rs` facade only converts buffers and validates input.
//!
//! ## Architecture
//!
//! ```text
//! primitives ─┐
//! MeshGL ─────┼→ Solid ─→ boolean · transform · hull · refine · smooth
//! sweeps ─────┘    │
//!                  └→ slice · project ─→ CrossSection ─→ extrude · revolve
//! ```
//!
//! ## Algorithms
//!
//! - **Booleans**: BSP trees (csg.js algorithm) with vertex welding and
//!   T-junction repair
//! - **Hull**: QuickHull
//! - **Refinement**: barycentric subdivision and adaptive edge splitting
//! - **Smoothing**: cubic Bézier triangle patches with crease detection
//! - **Cross sections**: segment chaining, `geo` unions, `earcutr` caps
//!
//! ## Degenerate results
//!
//! Operations whose result encloses nothing return [`Solid::empty`]. Only
//! structural failures, such as importing a mesh that is not closed, are
//! reported through [`KernelError`].
//!
//! ## Usage
//!
//! ```rust
//! use manifold_kernel::Solid;
//!
//! let a = Solid::cube([2.0, 2.0, 2.0]);
//! let b = a.translate([1.0, 1.0, 1.0]);
//! let joined = a.union(&b);
//! let bb = joined.bounding_box().unwrap();
//! assert_eq!(bb.max.x, 3.0);
//! ```

pub mod boolean;
pub mod config;
pub mod core;
pub mod cross_section;
pub mod error;
pub mod hull;
pub mod primitives;
mod refine;
mod smooth;
pub mod solid;
pub mod transform;

pub use crate::boolean::OpType;
pub use crate::config::KernelConfig;
pub use crate::core::BoundingBox;
pub use crate::cross_section::CrossSection;
pub use crate::error::{KernelError, KernelResult};
pub use crate::solid::{MeshGL, Solid};
