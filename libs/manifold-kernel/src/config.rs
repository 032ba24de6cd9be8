//! Kernel-facing view of the workspace configuration.
//!
//! All tolerances come from the `config` crate. This module only adds the
//! scaling rules the kernel applies to them.

use config::constants::{GlobalConfig, PLANE_EPSILON, VERTEX_MERGE_EPSILON};

/// Tolerance and quality settings used by kernel operations.
///
/// Values are immutable; pass a different `KernelConfig` instead of mutating
/// one that is shared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KernelConfig {
    /// Workspace-wide validated settings.
    pub global: GlobalConfig,
}

impl KernelConfig {
    /// Wraps an already validated global configuration.
    pub fn new(global: GlobalConfig) -> Self {
        Self { global }
    }

    /// Welding distance for a model whose bounding box extent is `scale`.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::KernelConfig;
    /// let cfg = KernelConfig::default();
    /// assert!(cfg.weld_tolerance(1000.0) > cfg.weld_tolerance(1.0));
    /// assert_eq!(cfg.weld_tolerance(0.01), cfg.weld_tolerance(1.0));
    /// ```
    pub fn weld_tolerance(&self, scale: f64) -> f64 {
        VERTEX_MERGE_EPSILON * scale.max(1.0)
    }

    /// Plane classification distance for a model whose extent is `scale`.
    pub fn plane_tolerance(&self, scale: f64) -> f64 {
        PLANE_EPSILON * scale.max(1.0)
    }

    /// Segment count for a circle of `radius`; zero requests automatic
    /// selection.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::KernelConfig;
    /// let cfg = KernelConfig::default();
    /// assert_eq!(cfg.circular_segments(0, 10.0), 36);
    /// assert_eq!(cfg.circular_segments(12, 10.0), 12);
    /// ```
    pub fn circular_segments(&self, requested: u32, radius: f64) -> u32 {
        self.global.resolve_segments(requested, radius)
    }
}
