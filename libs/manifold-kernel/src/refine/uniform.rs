//! Uniform barycentric subdivision.
//!
//! Grid point `(i, j)` of a triangle `(v0, v1, v2)` sits at barycentric
//! coordinates `((n - i - j) / n, i / n, j / n)`.

use std::collections::HashMap;

use super::{PropArena, Sampler};
use crate::Solid;

/// Where a grid point lies on its triangle.
enum Site {
    Corner(usize),
    /// On the edge from corner `.0` to corner `.1`, `.2` steps from `.0`.
    Edge(usize, usize, usize),
    Interior,
}

fn site(i: usize, j: usize, n: usize) -> Site {
    match (i, j) {
        (0, 0) => Site::Corner(0),
        _ if i == n => Site::Corner(1),
        _ if j == n => Site::Corner(2),
        (_, 0) => Site::Edge(0, 1, i),
        _ if i + j == n => Site::Edge(1, 2, j),
        (0, _) => Site::Edge(2, 0, n - j),
        _ => Site::Interior,
    }
}

/// Index of grid point `(i, j)` in row-major order, rows by `j`.
fn grid_index(i: usize, j: usize, n: usize) -> usize {
    j * (n + 1) - j * j.saturating_sub(1) / 2 + i
}

pub(super) fn refine(solid: &Solid, n: usize) -> Solid {
    let sampler = Sampler::new(solid);
    let source_props = solid.properties.as_ref();
    let mut arena = source_props.map(PropArena::from_properties);

    let mut vert_pos = solid.vert_pos.clone();
    let mut tri_verts = Vec::with_capacity(solid.num_tri() * n * n);
    let mut tri_props = Vec::with_capacity(if arena.is_some() { tri_verts.capacity() } else { 0 });
    let mut edge_verts: HashMap<(u32, u32, usize), u32> = HashMap::new();
    let mut edge_props: HashMap<((u32, u32), (u32, u32), usize), u32> = HashMap::new();

    let scale = 1.0 / n as f64;
    for (t, tri) in solid.tri_verts.iter().enumerate() {
        let ptri = source_props.map_or([0; 3], |p| p.tri_props[t]);
        let mut grid: Vec<(u32, u32)> = Vec::with_capacity((n + 1) * (n + 2) / 2);

        for j in 0..=n {
            for i in 0..=n - j {
                let w = [(n - i - j) as f64 * scale, i as f64 * scale, j as f64 * scale];
                let point = match site(i, j, n) {
                    Site::Corner(c) => (tri[c], ptri[c]),
                    Site::Edge(a, b, step) => {
                        let (va, vb) = (tri[a], tri[b]);
                        let key = if va < vb { (va, vb, step) } else { (vb, va, n - step) };
                        let vert = *edge_verts.entry(key).or_insert_with(|| {
                            vert_pos.push(sampler.point(t, w));
                            (vert_pos.len() - 1) as u32
                        });
                        let prop = match arena.as_mut() {
                            Some(arena) => {
                                let (pa, pb) = ((va, ptri[a]), (vb, ptri[b]));
                                let key = if pa < pb { (pa, pb, step) } else { (pb, pa, n - step) };
                                *edge_props
                                    .entry(key)
                                    .or_insert_with(|| arena.push_blend(ptri, w))
                            }
                            None => 0,
                        };
                        (vert, prop)
                    }
                    Site::Interior => {
                        vert_pos.push(sampler.point(t, w));
                        let prop = arena.as_mut().map_or(0, |arena| arena.push_blend(ptri, w));
                        ((vert_pos.len() - 1) as u32, prop)
                    }
                };
                grid.push(point);
            }
        }

        let at = |i: usize, j: usize| grid[grid_index(i, j, n)];
        for j in 0..n {
            for i in 0..n - j {
                let mut emit = |corners: [(u32, u32); 3]| {
                    tri_verts.push(corners.map(|c| c.0));
                    if arena.is_some() {
                        tri_props.push(corners.map(|c| c.1));
                    }
                };
                emit([at(i, j), at(i + 1, j), at(i, j + 1)]);
                if i + j + 1 < n {
                    emit([at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)]);
                }
            }
        }
    }

    Solid {
        vert_pos,
        tri_verts,
        properties: arena.map(|arena| arena.into_properties(tri_props)),
        patches: None,
    }
    .compact()
}
