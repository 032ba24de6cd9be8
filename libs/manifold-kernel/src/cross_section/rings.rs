//! Ring cleanup, grouping and triangulation.
//!
//! A ring is a closed polygon boundary with implicit closure. Counter-
//! clockwise rings bound material and clockwise rings bound holes.

use robust::{orient2d, Coord};

use crate::core::Vec2;
use crate::error::{KernelError, KernelResult};

/// Signed area of `ring`; positive for counter-clockwise.
pub(crate) fn signed_area(ring: &[Vec2]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

/// True if `b` lies within `eps` of the line through `a` and `c`, or `a`
/// and `c` coincide so that `b` is the tip of a spike.
fn collinear(a: Vec2, b: Vec2, c: Vec2, eps: f64) -> bool {
    let ac = c - a;
    let len = ac.length();
    if len <= eps {
        return true;
    }
    ac.perp_dot(b - a).abs() / len <= eps
}

/// Removes duplicate and collinear points. Rings left with fewer than three
/// points come back empty.
pub(crate) fn simplify_ring(points: &[Vec2], eps: f64) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        while out.len() >= 2 && collinear(out[out.len() - 2], out[out.len() - 1], p, eps) {
            out.pop();
        }
        if out.last().is_some_and(|q| q.distance(p) <= eps) {
            continue;
        }
        out.push(p);
    }

    // the seam between the last and first point
    loop {
        let n = out.len();
        if n < 3 {
            return Vec::new();
        }
        if out[0].distance(out[n - 1]) <= eps || collinear(out[n - 2], out[n - 1], out[0], eps) {
            out.pop();
        } else if collinear(out[n - 1], out[0], out[1], eps) {
            out.remove(0);
        } else {
            return out;
        }
    }
}

fn coord(p: Vec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Winding number of `ring` around `p`, using exact orientation tests.
pub(crate) fn winding_number(ring: &[Vec2], p: Vec2) -> i32 {
    let n = ring.len();
    let mut winding = 0;
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        if a.y <= p.y {
            if b.y > p.y && orient2d(coord(a), coord(b), coord(p)) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && orient2d(coord(a), coord(b), coord(p)) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// One outer ring with the holes it contains, as indices into the ring list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RingGroup {
    pub outer: usize,
    pub holes: Vec<usize>,
}

/// Assigns every clockwise ring to the smallest counter-clockwise ring that
/// contains it. Holes with no container are dropped.
pub(crate) fn group_rings(rings: &[Vec<Vec2>]) -> Vec<RingGroup> {
    let areas: Vec<f64> = rings.iter().map(|r| signed_area(r)).collect();
    let mut groups: Vec<RingGroup> = (0..rings.len())
        .filter(|&i| areas[i] > 0.0)
        .map(|outer| RingGroup {
            outer,
            holes: Vec::new(),
        })
        .collect();

    for (hole, ring) in rings.iter().enumerate() {
        if areas[hole] >= 0.0 {
            continue;
        }
        let probe = (ring[0] + ring[1]) * 0.5;
        let container = groups
            .iter_mut()
            .filter(|g| winding_number(&rings[g.outer], probe) != 0)
            .min_by(|a, b| areas[a.outer].total_cmp(&areas[b.outer]));
        if let Some(group) = container {
            group.holes.push(hole);
        }
    }
    groups
}

/// Triangulates one ring group. Triangles index the concatenation of all
/// rings in `rings` and are counter-clockwise.
pub(crate) fn triangulate_group(
    rings: &[Vec<Vec2>],
    offsets: &[usize],
    group: &RingGroup,
    operation: &str,
) -> KernelResult<Vec<[usize; 3]>> {
    let members: Vec<usize> = std::iter::once(group.outer)
        .chain(group.holes.iter().copied())
        .collect();
    let mut flat = Vec::new();
    let mut hole_starts = Vec::with_capacity(group.holes.len());
    let mut local_to_global = Vec::new();
    for (k, &r) in members.iter().enumerate() {
        if k > 0 {
            hole_starts.push(local_to_global.len());
        }
        for (i, p) in rings[r].iter().enumerate() {
            flat.extend([p.x, p.y]);
            local_to_global.push(offsets[r] + i);
        }
    }

    let indices = earcutr::earcut(&flat, &hole_starts, 2).map_err(|err| KernelError::Triangulation {
        operation: operation.to_string(),
        message: format!("{err:?}"),
    })?;

    let point = |i: usize| Vec2::new(flat[2 * i], flat[2 * i + 1]);
    Ok(indices
        .chunks_exact(3)
        .map(|t| {
            let (a, b, c) = (t[0], t[1], t[2]);
            let ccw = (point(b) - point(a)).perp_dot(point(c) - point(a)) >= 0.0;
            let tri = if ccw { [a, b, c] } else { [a, c, b] };
            tri.map(|i| local_to_global[i])
        })
        .collect())
}

/// Triangulates every group of `rings`, returning counter-clockwise
/// triangles over the concatenated ring points.
pub(crate) fn triangulate(rings: &[Vec<Vec2>], operation: &str) -> KernelResult<Vec<[usize; 3]>> {
    let mut offsets = Vec::with_capacity(rings.len());
    let mut total = 0;
    for ring in rings {
        offsets.push(total);
        total += ring.len();
    }
    let mut triangles = Vec::new();
    for group in group_rings(rings) {
        triangles.extend(triangulate_group(rings, &offsets, &group, operation)?);
    }
    Ok(triangles)
}
