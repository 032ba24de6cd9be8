//! # Config Crate
//!
//! Centralized configuration constants for the manifold-rs workspace.
//! All tolerances and tessellation defaults are defined here so that the
//! geometry kernel and the facade agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Circular tessellation falls back to the quality defaults
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.circular_segments(1.0), 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable**: No process-wide mutable settings; callers pass values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
