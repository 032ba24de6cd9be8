//! Tolerance-based vertex welding on a uniform hash grid.

use std::collections::HashMap;

use crate::core::Vec3;

/// Merges positions closer than a tolerance into a single index.
///
/// Positions are bucketed into cells one tolerance wide, so a match can only
/// live in the 27 cells around the query point.
#[derive(Debug)]
pub(crate) struct VertexWelder {
    tolerance: f64,
    cells: HashMap<[i64; 3], Vec<u32>>,
    positions: Vec<Vec3>,
}

impl VertexWelder {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(f64::MIN_POSITIVE),
            cells: HashMap::new(),
            positions: Vec::new(),
        }
    }

    fn cell(&self, p: Vec3) -> [i64; 3] {
        let q = (p / self.tolerance).floor();
        [q.x as i64, q.y as i64, q.z as i64]
    }

    /// Index of an existing position within tolerance of `p`, if any.
    pub fn find(&self, p: Vec3) -> Option<u32> {
        let [cx, cy, cz] = self.cell(p);
        let tol_sq = self.tolerance * self.tolerance;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = self.cells.get(&[cx + dx, cy + dy, cz + dz]) else {
                        continue;
                    };
                    if let Some(&i) = bucket
                        .iter()
                        .find(|&&i| self.positions[i as usize].distance_squared(p) <= tol_sq)
                    {
                        return Some(i);
                    }
                }
            }
        }
        None
    }

    /// Returns the index of `p`, welding it onto an existing position when
    /// one is close enough.
    pub fn insert(&mut self, p: Vec3) -> u32 {
        if let Some(i) = self.find(p) {
            return i;
        }
        let idx = self.positions.len() as u32;
        self.positions.push(p);
        let key = self.cell(p);
        self.cells.entry(key).or_default().push(idx);
        idx
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welds_within_tolerance() {
        let mut welder = VertexWelder::new(1e-6);
        let a = welder.insert(Vec3::new(1.0, 2.0, 3.0));
        let b = welder.insert(Vec3::new(1.0 + 1e-7, 2.0, 3.0 - 1e-7));
        let c = welder.insert(Vec3::new(1.0 + 1e-5, 2.0, 3.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(welder.positions().len(), 2);
    }

    #[test]
    fn test_welds_across_cell_boundary() {
        let mut welder = VertexWelder::new(1e-3);
        // Straddles the boundary at 0.001
        let a = welder.insert(Vec3::new(0.000_999_9, 0.0, 0.0));
        let b = welder.insert(Vec3::new(0.001_000_1, 0.0, 0.0));
        assert_eq!(a, b);
    }
}
