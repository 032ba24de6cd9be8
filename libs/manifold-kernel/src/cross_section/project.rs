//! Outline of a solid on the XY plane.

use geo::{BooleanOps, LineString, MultiPolygon, Polygon};
use tracing::debug;

use super::CrossSection;
use crate::config::KernelConfig;
use crate::Solid;

/// Shadow of `solid` cast straight down onto the XY plane.
///
/// For a closed solid the upward-facing triangles cover the shadow exactly
/// once, so their union is the outline.
pub fn project(solid: &Solid, config: &KernelConfig) -> CrossSection {
    if solid.is_empty() {
        return CrossSection::empty();
    }
    let eps = config.weld_tolerance(solid.tolerance_scale());
    let parts: Vec<MultiPolygon<f64>> = solid
        .tri_verts
        .iter()
        .filter_map(|tri| {
            let [a, b, c] = solid.corners(tri);
            let doubled_area = (b - a).truncate().perp_dot((c - a).truncate());
            (doubled_area > eps * eps).then(|| {
                let ring = LineString::from(vec![(a.x, a.y), (b.x, b.y), (c.x, c.y)]);
                MultiPolygon::new(vec![Polygon::new(ring, Vec::new())])
            })
        })
        .collect();
    let facing_up = parts.len();
    let section = CrossSection::from_geo(union_all(parts), eps);
    debug!(facing_up, rings = section.num_rings(), "Projected solid");
    section
}

/// Unions `parts` pairwise in rounds so that each operand stays small.
fn union_all(mut parts: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
    while parts.len() > 1 {
        let mut merged = Vec::with_capacity(parts.len() / 2 + 1);
        let mut iter = parts.into_iter();
        while let Some(first) = iter.next() {
            match iter.next() {
                Some(second) => merged.push(first.union(&second)),
                None => merged.push(first),
            }
        }
        parts = merged;
    }
    parts.pop().unwrap_or_else(|| MultiPolygon::new(Vec::new()))
}

impl Solid {
    /// See [`project`]. Uses the default tolerances.
    pub fn project(&self) -> CrossSection {
        project(self, &KernelConfig::default())
    }
}
