//! Axis-aligned bounding boxes.

use super::Vec3;

/// Axis-aligned box spanning `min` to `max` inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Lower corner.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for no points.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::core::{BoundingBox, Vec3};
    /// let bb = BoundingBox::from_points(&[Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)]).unwrap();
    /// assert_eq!(bb.max, Vec3::new(1.0, 2.0, 3.0));
    /// assert!(BoundingBox::from_points(&[]).is_none());
    /// ```
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the diagonal.
    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }

    /// Largest absolute coordinate, used to scale tolerances.
    pub fn scale(&self) -> f64 {
        self.min.abs().max(self.max.abs()).max_element()
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True if the boxes share any volume, allowing `tolerance` slack.
    pub fn overlaps(&self, other: &Self, tolerance: f64) -> bool {
        self.min.x <= other.max.x + tolerance
            && other.min.x <= self.max.x + tolerance
            && self.min.y <= other.max.y + tolerance
            && other.min.y <= self.max.y + tolerance
            && self.min.z <= other.max.z + tolerance
            && other.min.z <= self.max.z + tolerance
    }
}
