//! Shared math types for the kernel.
//!
//! `glam`'s double precision vectors are re-exported under short names so
//! that kernel modules never spell out the concrete math crate.

pub mod bbox;
pub mod trig;

pub use glam::DVec2 as Vec2;
pub use glam::DVec3 as Vec3;

pub use bbox::BoundingBox;
