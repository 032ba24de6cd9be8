//! Centralized configuration values shared across the manifold-rs workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::PI;
use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Generic floating-point comparison tolerance.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-10;

/// Distance below which a point is classified as lying on a splitting plane
/// during BSP boolean evaluation.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON, PLANE_EPSILON};
/// assert!(PLANE_EPSILON > EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1.0e-7;

/// Distance below which two vertices are welded together. Scaled by the
/// extent of the model when the model is larger than one unit.
///
/// # Examples
/// ```
/// use config::constants::{PLANE_EPSILON, VERTEX_MERGE_EPSILON};
/// assert!(VERTEX_MERGE_EPSILON < PLANE_EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1.0e-8;

// =============================================================================
// TESSELLATION
// =============================================================================

/// Smallest angle in degrees between two consecutive segments of an
/// automatically tessellated circle.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_CIRCULAR_ANGLE;
/// assert_eq!(360.0 / DEFAULT_MIN_CIRCULAR_ANGLE, 36.0);
/// ```
pub const DEFAULT_MIN_CIRCULAR_ANGLE: f64 = 10.0;

/// Shortest edge length of an automatically tessellated circle.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_CIRCULAR_EDGE_LENGTH;
/// assert!(DEFAULT_MIN_CIRCULAR_EDGE_LENGTH > 0.0);
/// ```
pub const DEFAULT_MIN_CIRCULAR_EDGE_LENGTH: f64 = 1.0;

/// Lower clamp for explicitly requested circular segment counts.
///
/// # Examples
/// ```
/// use config::constants::MIN_CIRCULAR_SEGMENTS;
/// assert_eq!(MIN_CIRCULAR_SEGMENTS, 3);
/// ```
pub const MIN_CIRCULAR_SEGMENTS: u32 = 3;

/// Dihedral angle in degrees above which an edge is treated as a crease by
/// the smoothing and normal operations.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_SHARP_ANGLE;
/// assert!(DEFAULT_MIN_SHARP_ANGLE < 90.0);
/// ```
pub const DEFAULT_MIN_SHARP_ANGLE: f64 = 60.0;

/// Upper bound on edge-splitting passes performed by adaptive refinement.
///
/// # Examples
/// ```
/// use config::constants::MAX_REFINE_PASSES;
/// assert!(MAX_REFINE_PASSES >= 8);
/// ```
pub const MAX_REFINE_PASSES: usize = 24;

// =============================================================================
// RECURSION
// =============================================================================

/// Remaining stack below which `stacker` allocates a new segment before
/// descending further into a BSP tree.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Immutable snapshot of configuration settings handed to the geometry
/// kernel.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Minimum angle in degrees per segment for automatic circle tessellation.
    pub min_circular_angle: f64,
    /// Minimum edge length for automatic circle tessellation.
    pub min_circular_edge_length: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and circular quality settings.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 5.0, 0.5).expect("valid config");
    /// assert_eq!(cfg.min_circular_angle, 5.0);
    /// ```
    pub fn new(
        tolerance: f64,
        min_circular_angle: f64,
        min_circular_edge_length: f64,
    ) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if min_circular_angle.is_nan() || min_circular_angle <= 0.0 || min_circular_angle > 360.0 {
            return Err(ConfigError::InvalidAngle(min_circular_angle));
        }
        if !min_circular_edge_length.is_finite() || min_circular_edge_length <= 0.0 {
            return Err(ConfigError::InvalidEdgeLength(min_circular_edge_length));
        }
        Ok(Self {
            tolerance,
            min_circular_angle,
            min_circular_edge_length,
        })
    }

    /// Number of segments used for a circle of `radius` when the caller asks
    /// for automatic selection.
    ///
    /// The count is limited both by angle and by edge length, padded by three,
    /// rounded down to a multiple of four and never below four.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::default();
    /// assert_eq!(cfg.circular_segments(10.0), 36);
    /// assert_eq!(cfg.circular_segments(0.1), 4);
    /// ```
    pub fn circular_segments(&self, radius: f64) -> u32 {
        let by_angle = (360.0 / self.min_circular_angle).floor();
        let by_length = (2.0 * PI * radius.abs() / self.min_circular_edge_length).floor();
        let limited = by_angle.min(by_length);
        let limited = if limited.is_finite() { limited.max(0.0) } else { by_angle };
        let mut segments = limited as u32 + 3;
        segments -= segments % 4;
        segments.max(4)
    }

    /// Resolves a caller-supplied segment count: zero selects automatically,
    /// anything else is clamped to [`MIN_CIRCULAR_SEGMENTS`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::default();
    /// assert_eq!(cfg.resolve_segments(0, 1.0), 8);
    /// assert_eq!(cfg.resolve_segments(2, 1.0), 3);
    /// assert_eq!(cfg.resolve_segments(17, 1.0), 17);
    /// ```
    pub fn resolve_segments(&self, requested: u32, radius: f64) -> u32 {
        if requested == 0 {
            self.circular_segments(radius)
        } else {
            requested.max(MIN_CIRCULAR_SEGMENTS)
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            min_circular_angle: DEFAULT_MIN_CIRCULAR_ANGLE,
            min_circular_edge_length: DEFAULT_MIN_CIRCULAR_EDGE_LENGTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the circular angle is outside `(0, 360]`.
    InvalidAngle(f64),
    /// Raised when the circular edge length is not a positive finite value.
    InvalidEdgeLength(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidAngle(value) => {
                write!(f, "min_circular_angle must be in (0, 360]: {value}")
            }
            ConfigError::InvalidEdgeLength(value) => {
                write!(f, "min_circular_edge_length must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two floating-point values are approximately equal.
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-12));
/// assert!(!approx_equal(1.0, 1.001));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a floating-point value is approximately zero.
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(0.001));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
