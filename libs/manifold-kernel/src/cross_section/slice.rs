//! Horizontal plane cuts.

use std::collections::HashMap;

use tracing::debug;

use super::rings::simplify_ring;
use super::CrossSection;
use crate::config::KernelConfig;
use crate::core::Vec2;
use crate::Solid;

/// Cross section of `solid` at `z = height`.
///
/// Vertices exactly on the plane count as above it, so a plane through the
/// bottom face of a solid yields nothing while one through its top face
/// yields the face outline. Rings of material come out counter-clockwise,
/// rings around cavities clockwise.
pub fn slice(solid: &Solid, height: f64, config: &KernelConfig) -> CrossSection {
    if solid.is_empty() || !height.is_finite() {
        return CrossSection::empty();
    }
    let above: Vec<bool> = solid.vert_pos.iter().map(|p| p.z >= height).collect();

    let mut points: Vec<Vec2> = Vec::new();
    let mut point_of_edge: HashMap<(u32, u32), usize> = HashMap::new();
    let mut crossing = |a: u32, b: u32| -> usize {
        let key = if a < b { (a, b) } else { (b, a) };
        *point_of_edge.entry(key).or_insert_with(|| {
            let (lo, hi) = (solid.vert_pos[key.0 as usize], solid.vert_pos[key.1 as usize]);
            let t = (height - lo.z) / (hi.z - lo.z);
            let p = lo + (hi - lo) * t;
            points.push(Vec2::new(p.x, p.y));
            points.len() - 1
        })
    };

    // each crossed triangle contributes one segment, running from where its
    // boundary goes down through the plane to where it comes back up
    let mut segments: Vec<(usize, usize)> = Vec::new();
    for tri in &solid.tri_verts {
        let flags = tri.map(|v| above[v as usize]);
        if flags[0] == flags[1] && flags[1] == flags[2] {
            continue;
        }
        let down = (0..3).find(|&k| flags[k] && !flags[(k + 1) % 3]);
        let up = (0..3).find(|&k| !flags[k] && flags[(k + 1) % 3]);
        if let (Some(d), Some(u)) = (down, up) {
            let start = crossing(tri[d], tri[(d + 1) % 3]);
            let end = crossing(tri[u], tri[(u + 1) % 3]);
            segments.push((start, end));
        }
    }

    let mut next = vec![usize::MAX; points.len()];
    for &(start, end) in &segments {
        next[start] = end;
    }
    let eps = config.weld_tolerance(solid.tolerance_scale());
    let mut visited = vec![false; points.len()];
    let mut rings = Vec::new();
    for &(first, _) in &segments {
        if visited[first] {
            continue;
        }
        let mut ring = Vec::new();
        let mut current = first;
        while current != usize::MAX && !visited[current] {
            visited[current] = true;
            ring.push(points[current]);
            current = next[current];
        }
        let ring = simplify_ring(&ring, eps);
        if !ring.is_empty() {
            rings.push(ring);
        }
    }
    debug!(height, segments = segments.len(), rings = rings.len(), "Sliced solid");
    CrossSection::new(rings)
}

impl Solid {
    /// See [`slice`]. Uses the default tolerances.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let section = Solid::cube([1.0, 1.0, 1.0]).slice(0.5);
    /// assert_eq!(section.num_rings(), 1);
    /// assert!((section.area() - 1.0).abs() < 1e-12);
    /// ```
    pub fn slice(&self, height: f64) -> CrossSection {
        slice(self, height, &KernelConfig::default())
    }
}
