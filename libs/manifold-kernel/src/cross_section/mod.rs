//! # Cross Sections
//!
//! Planar polygon sets and the operations that move between them and
//! solids.
//!
//! ## Operations
//!
//! - [`Solid::slice`]: cut a solid with a horizontal plane
//! - [`Solid::project`]: outline of a solid seen from above
//! - [`CrossSection::extrude`]: sweep along Z with optional twist and taper
//! - [`CrossSection::revolve`]: sweep around the Z axis
//!
//! ## Orientation
//!
//! Counter-clockwise rings bound material and clockwise rings bound holes.
//! Sweeps accept rings of either orientation as long as it is consistent.

mod extrude;
mod project;
mod revolve;
pub(crate) mod rings;
mod slice;

#[cfg(test)]
mod tests;

pub use extrude::extrude;
pub use project::project;
pub use revolve::revolve;
pub use slice::slice;

use geo::orient::{Direction, Orient};
use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::core::Vec2;
use rings::{group_rings, signed_area, simplify_ring};

// =============================================================================
// CROSSSECTION STRUCT
// =============================================================================

/// Ordered set of closed planar rings.
///
/// ## Example
///
/// ```rust
/// use manifold_kernel::core::Vec2;
/// use manifold_kernel::CrossSection;
///
/// let square = CrossSection::new(vec![vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ]]);
/// assert_eq!(square.num_rings(), 1);
/// assert_eq!(square.area(), 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossSection {
    rings: Vec<Vec<Vec2>>,
}

impl CrossSection {
    /// Wraps rings as given. Closure is implicit: the last point connects
    /// back to the first.
    pub fn new(rings: Vec<Vec<Vec2>>) -> Self {
        Self { rings }
    }

    /// The empty cross section.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if there are no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Number of rings.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The rings.
    pub fn rings(&self) -> &[Vec<Vec2>] {
        &self.rings
    }

    /// Consumes the cross section, returning its rings.
    pub fn into_rings(self) -> Vec<Vec<Vec2>> {
        self.rings
    }

    /// Sum of the signed ring areas: holes subtract.
    pub fn area(&self) -> f64 {
        self.rings.iter().map(|r| signed_area(r)).sum()
    }

    /// Largest absolute coordinate, at least one.
    pub(crate) fn scale(&self) -> f64 {
        self.rings
            .iter()
            .flatten()
            .map(|p| p.abs().max_element())
            .fold(1.0, f64::max)
    }

    /// Rings ready for sweeping: simplified, consistently oriented, with
    /// holes that lie in no outer ring removed.
    ///
    /// If every ring runs clockwise the whole set is reversed.
    pub(crate) fn prepared_rings(&self, eps: f64) -> Vec<Vec<Vec2>> {
        let mut rings: Vec<Vec<Vec2>> = self
            .rings
            .iter()
            .map(|r| simplify_ring(r, eps))
            .filter(|r| !r.is_empty())
            .collect();
        if rings.iter().all(|r| signed_area(r) < 0.0) {
            for ring in &mut rings {
                ring.reverse();
            }
        }
        group_rings(&rings)
            .into_iter()
            .flat_map(|g| std::iter::once(g.outer).chain(g.holes))
            .map(|i| rings[i].clone())
            .collect()
    }

    // =========================================================================
    // GEO INTEROP
    // =========================================================================

    /// Converts already prepared rings into `geo` polygons.
    pub(crate) fn rings_to_geo(rings: &[Vec<Vec2>]) -> MultiPolygon<f64> {
        let line = |ring: &Vec<Vec2>| {
            LineString::from(ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect::<Vec<_>>())
        };
        MultiPolygon::new(
            group_rings(rings)
                .into_iter()
                .map(|g| {
                    Polygon::new(
                        line(&rings[g.outer]),
                        g.holes.iter().map(|&h| line(&rings[h])).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Builds a cross section from `geo` polygons, orienting exteriors
    /// counter-clockwise and simplifying with tolerance `eps`.
    pub(crate) fn from_geo(polygons: MultiPolygon<f64>, eps: f64) -> Self {
        let ring = |line: &LineString<f64>| {
            let mut points: Vec<Vec2> = line.0.iter().map(|c| Vec2::new(c.x, c.y)).collect();
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            simplify_ring(&points, eps)
        };
        let rings = polygons
            .orient(Direction::Default)
            .0
            .iter()
            .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors()))
            .map(ring)
            .filter(|r| !r.is_empty())
            .collect();
        Self { rings }
    }
}
