//! Adaptive edge splitting.
//!
//! Each pass marks the edges that fail the split test, inserts one midpoint
//! per marked edge and re-triangulates every triangle by how many of its
//! edges were marked. Both triangles on an edge see the same mark, so no
//! T-junctions appear.

use std::collections::HashMap;

use config::constants::MAX_REFINE_PASSES;
use tracing::debug;

use super::{edge_key, PropArena, Sampler};
use crate::core::Vec3;
use crate::Solid;

/// Criterion for splitting an edge.
#[derive(Debug, Clone, Copy)]
pub(super) enum Split {
    /// Split edges longer than this.
    Length(f64),
    /// Split edges whose midpoint is farther than this from the surface.
    Tolerance(f64),
}

impl Split {
    fn wants(self, a: Vec3, b: Vec3, surface_mid: Vec3) -> bool {
        match self {
            Split::Length(limit) => a.distance(b) > limit,
            Split::Tolerance(limit) => surface_mid.distance((a + b) * 0.5) > limit,
        }
    }
}

/// Triangle corner: position, property vertex, and barycentric coordinates
/// in the source triangle.
#[derive(Debug, Clone, Copy)]
struct Corner {
    vert: u32,
    prop: u32,
    bary: [f64; 3],
}

/// Piece of a source triangle.
#[derive(Debug, Clone, Copy)]
struct Piece {
    origin: usize,
    corners: [Corner; 3],
}

/// Mutable state of one refinement run.
struct Refinement<'a> {
    sampler: Sampler<'a>,
    vert_pos: Vec<Vec3>,
    arena: Option<PropArena>,
}

impl Refinement<'_> {
    /// Midpoint of the corners `a` and `b` of `piece`, with its position
    /// vertex already decided.
    fn midpoint(
        &mut self,
        a: Corner,
        b: Corner,
        vert: u32,
        prop_mids: &mut HashMap<((u32, u32), (u32, u32)), u32>,
    ) -> Corner {
        let bary = [
            (a.bary[0] + b.bary[0]) * 0.5,
            (a.bary[1] + b.bary[1]) * 0.5,
            (a.bary[2] + b.bary[2]) * 0.5,
        ];
        let prop = match self.arena.as_mut() {
            Some(arena) => {
                let (ka, kb) = ((a.vert, a.prop), (b.vert, b.prop));
                let key = if ka < kb { (ka, kb) } else { (kb, ka) };
                *prop_mids
                    .entry(key)
                    .or_insert_with(|| arena.push_blend([a.prop, b.prop, a.prop], [0.5, 0.5, 0.0]))
            }
            None => 0,
        };
        Corner { vert, prop, bary }
    }

    /// Marks the edges of `pieces` that need splitting, creating their
    /// midpoint vertices.
    fn mark(&mut self, pieces: &[Piece], split: Split) -> HashMap<(u32, u32), u32> {
        let mut decided: HashMap<(u32, u32), Option<u32>> = HashMap::new();
        for piece in pieces {
            for k in 0..3 {
                let (a, b) = (piece.corners[k], piece.corners[(k + 1) % 3]);
                let key = edge_key(a.vert, b.vert);
                if decided.contains_key(&key) {
                    continue;
                }
                let bary = [
                    (a.bary[0] + b.bary[0]) * 0.5,
                    (a.bary[1] + b.bary[1]) * 0.5,
                    (a.bary[2] + b.bary[2]) * 0.5,
                ];
                let mid = self.sampler.point(piece.origin, bary);
                let (pa, pb) = (self.vert_pos[a.vert as usize], self.vert_pos[b.vert as usize]);
                let vert = split.wants(pa, pb, mid).then(|| {
                    self.vert_pos.push(mid);
                    (self.vert_pos.len() - 1) as u32
                });
                decided.insert(key, vert);
            }
        }
        decided
            .into_iter()
            .filter_map(|(key, vert)| vert.map(|v| (key, v)))
            .collect()
    }

    /// Replaces `piece` by the pieces its marked edges call for.
    fn split_piece(
        &mut self,
        piece: Piece,
        marked: &HashMap<(u32, u32), u32>,
        prop_mids: &mut HashMap<((u32, u32), (u32, u32)), u32>,
        out: &mut Vec<Piece>,
    ) {
        let c = piece.corners;
        let mids: [Option<u32>; 3] = std::array::from_fn(|k| {
            marked
                .get(&edge_key(c[k].vert, c[(k + 1) % 3].vert))
                .copied()
        });
        let count = mids.iter().filter(|m| m.is_some()).count();
        let mut push = |corners: [Corner; 3]| {
            out.push(Piece {
                origin: piece.origin,
                corners,
            })
        };

        match count {
            0 => push(c),
            1 => {
                let r = mids.iter().position(Option::is_some).unwrap_or(0);
                let (a, b, cc) = (c[r], c[(r + 1) % 3], c[(r + 2) % 3]);
                let m = self.midpoint(a, b, mids[r].unwrap_or(a.vert), prop_mids);
                push([a, m, cc]);
                push([m, b, cc]);
            }
            2 => {
                let unmarked = mids.iter().position(Option::is_none).unwrap_or(0);
                let r = (unmarked + 1) % 3;
                let (a, b, cc) = (c[r], c[(r + 1) % 3], c[(r + 2) % 3]);
                let m1 = self.midpoint(a, b, mids[r].unwrap_or(a.vert), prop_mids);
                let m2 = self.midpoint(b, cc, mids[(r + 1) % 3].unwrap_or(b.vert), prop_mids);
                push([m1, b, m2]);
                let pos = |corner: Corner| self.vert_pos[corner.vert as usize];
                if pos(a).distance(pos(m2)) <= pos(m1).distance(pos(cc)) {
                    push([a, m1, m2]);
                    push([a, m2, cc]);
                } else {
                    push([a, m1, cc]);
                    push([m1, m2, cc]);
                }
            }
            _ => {
                let [a, b, cc] = c;
                let mab = self.midpoint(a, b, mids[0].unwrap_or(a.vert), prop_mids);
                let mbc = self.midpoint(b, cc, mids[1].unwrap_or(b.vert), prop_mids);
                let mca = self.midpoint(cc, a, mids[2].unwrap_or(cc.vert), prop_mids);
                push([a, mab, mca]);
                push([mab, b, mbc]);
                push([mca, mbc, cc]);
                push([mab, mbc, mca]);
            }
        }
    }
}

pub(super) fn refine(solid: &Solid, split: Split) -> Solid {
    let source_props = solid.properties.as_ref();
    let mut state = Refinement {
        sampler: Sampler::new(solid),
        vert_pos: solid.vert_pos.clone(),
        arena: source_props.map(PropArena::from_properties),
    };
    const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let mut pieces: Vec<Piece> = solid
        .tri_verts
        .iter()
        .enumerate()
        .map(|(t, tri)| {
            let ptri = source_props.map_or([0; 3], |p| p.tri_props[t]);
            Piece {
                origin: t,
                corners: std::array::from_fn(|k| Corner {
                    vert: tri[k],
                    prop: ptri[k],
                    bary: IDENTITY[k],
                }),
            }
        })
        .collect();

    let mut passes = 0;
    while passes < MAX_REFINE_PASSES {
        let marked = state.mark(&pieces, split);
        if marked.is_empty() {
            break;
        }
        passes += 1;
        let mut prop_mids = HashMap::new();
        let mut next = Vec::with_capacity(pieces.len() * 2);
        for piece in pieces {
            state.split_piece(piece, &marked, &mut prop_mids, &mut next);
        }
        pieces = next;
    }
    debug!(
        ?split,
        passes,
        before = solid.num_tri(),
        after = pieces.len(),
        "Refined adaptively"
    );

    let tri_verts = pieces.iter().map(|p| p.corners.map(|c| c.vert)).collect();
    let properties = state.arena.map(|arena| {
        arena.into_properties(pieces.iter().map(|p| p.corners.map(|c| c.prop)).collect())
    });
    Solid {
        vert_pos: state.vert_pos,
        tri_verts,
        properties,
        patches: None,
    }
    .compact()
}
