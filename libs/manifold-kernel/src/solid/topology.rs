//! Edge connectivity derived from the triangle list.
//!
//! Halfedge `3 * tri + k` runs from corner `k` to corner `k + 1` of `tri`.

use std::collections::HashMap;

use super::Solid;

impl Solid {
    /// Endpoints of halfedge `h`.
    pub(crate) fn halfedge(&self, h: usize) -> (u32, u32) {
        let tri = &self.tri_verts[h / 3];
        (tri[h % 3], tri[(h + 1) % 3])
    }

    /// The halfedge running the opposite way along the same edge, for every
    /// halfedge. `None` where the edge is open.
    pub(crate) fn opposite_halfedges(&self) -> Vec<Option<usize>> {
        let count = self.tri_verts.len() * 3;
        let mut directed: HashMap<(u32, u32), usize> = HashMap::with_capacity(count);
        for h in 0..count {
            directed.insert(self.halfedge(h), h);
        }
        (0..count)
            .map(|h| {
                let (a, b) = self.halfedge(h);
                directed.get(&(b, a)).copied()
            })
            .collect()
    }

    /// Counts directed edges without an opposite partner and directed edges
    /// used more than once.
    pub(crate) fn edge_report(&self) -> (usize, usize) {
        let mut uses: HashMap<(u32, u32), usize> = HashMap::new();
        for h in 0..self.tri_verts.len() * 3 {
            *uses.entry(self.halfedge(h)).or_insert(0) += 1;
        }
        let open = uses
            .keys()
            .filter(|(a, b)| !uses.contains_key(&(*b, *a)))
            .count();
        let overused = uses.values().filter(|&&n| n > 1).count();
        (open, overused)
    }

    /// True if every edge is shared by exactly two oppositely wound
    /// triangles. The empty solid is manifold.
    pub fn is_manifold(&self) -> bool {
        self.edge_report() == (0, 0)
    }
}
