//! Turning BSP output polygons back into an indexed solid.
//!
//! BSP clipping cuts each operand's faces independently, so a vertex created
//! on one side of a seam can land in the middle of an edge on the other
//! side. Those T-junctions are split here so that every edge of the result
//! is shared by exactly two triangles.

use std::collections::HashMap;

use super::polygon::BspPolygon;
use crate::core::Vec3;
use crate::solid::{Properties, VertexWelder};
use crate::Solid;

/// Welded polygon: position indices plus per-corner property values.
#[derive(Debug)]
struct Face {
    verts: Vec<u32>,
    props: Vec<Vec<f64>>,
}

impl Face {
    fn weld(poly: BspPolygon, welder: &mut VertexWelder) -> Option<Self> {
        let mut verts = Vec::with_capacity(poly.vertices.len());
        let mut props = Vec::with_capacity(poly.vertices.len());
        for v in poly.vertices {
            let idx = welder.insert(v.pos);
            if verts.last() != Some(&idx) {
                verts.push(idx);
                props.push(v.props);
            }
        }
        while verts.len() > 1 && verts.first() == verts.last() {
            verts.pop();
            props.pop();
        }
        (verts.len() >= 3).then_some(Self { verts, props })
    }
}

/// Builds a solid from convex planar polygons.
pub(crate) fn polygons_to_solid(polygons: Vec<BspPolygon>, num_prop: usize, tolerance: f64) -> Solid {
    let mut welder = VertexWelder::new(tolerance);
    let mut faces: Vec<Face> = polygons
        .into_iter()
        .filter_map(|poly| Face::weld(poly, &mut welder))
        .collect();
    let positions = welder.into_positions();
    repair_t_junctions(&mut faces, &positions, tolerance);

    let mut builder = SolidBuilder::new(positions, num_prop, tolerance);
    for face in &faces {
        builder.add_face(face);
    }
    builder.finish()
}

/// Inserts every welded vertex lying strictly inside a face edge into that
/// edge.
fn repair_t_junctions(faces: &mut [Face], positions: &[Vec3], tolerance: f64) {
    let mut by_x: Vec<u32> = (0..positions.len() as u32).collect();
    by_x.sort_by(|&a, &b| positions[a as usize].x.total_cmp(&positions[b as usize].x));
    let xs: Vec<f64> = by_x.iter().map(|&i| positions[i as usize].x).collect();
    let tol_sq = tolerance * tolerance;

    for face in faces {
        let n = face.verts.len();
        let mut verts = Vec::with_capacity(n);
        let mut props = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            let (a, b) = (face.verts[i], face.verts[j]);
            verts.push(a);
            props.push(face.props[i].clone());

            let (pa, pb) = (positions[a as usize], positions[b as usize]);
            let ab = pb - pa;
            let len = ab.length();
            if len <= tolerance {
                continue;
            }
            let lo = xs.partition_point(|&x| x < pa.x.min(pb.x) - tolerance);
            let hi = xs.partition_point(|&x| x <= pa.x.max(pb.x) + tolerance);
            let mut hits: Vec<(f64, u32)> = by_x[lo..hi]
                .iter()
                .filter(|&&v| v != a && v != b)
                .filter_map(|&v| {
                    let p = positions[v as usize];
                    let t = (p - pa).dot(ab) / (len * len);
                    let inside = t * len > tolerance && (1.0 - t) * len > tolerance;
                    (inside && (pa + ab * t).distance_squared(p) <= tol_sq).then_some((t, v))
                })
                .collect();
            hits.sort_by(|x, y| x.0.total_cmp(&y.0));
            for (t, v) in hits {
                verts.push(v);
                props.push(lerp_props(&face.props[i], &face.props[j], t));
            }
        }
        face.verts = verts;
        face.props = props;
    }
}

fn lerp_props(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + (y - x) * t).collect()
}

// =============================================================================
// SOLID BUILDER
// =============================================================================

/// Accumulates triangles, deduplicating property vertices per position.
struct SolidBuilder {
    positions: Vec<Vec3>,
    tri_verts: Vec<[u32; 3]>,
    num_prop: usize,
    tolerance: f64,
    prop_values: Vec<f64>,
    tri_props: Vec<[u32; 3]>,
    prop_index: HashMap<(u32, Vec<i64>), u32>,
}

impl SolidBuilder {
    fn new(positions: Vec<Vec3>, num_prop: usize, tolerance: f64) -> Self {
        Self {
            positions,
            tri_verts: Vec::new(),
            num_prop,
            tolerance,
            prop_values: Vec::new(),
            tri_props: Vec::new(),
            prop_index: HashMap::new(),
        }
    }

    fn prop_vertex(&mut self, pos: u32, props: &[f64]) -> u32 {
        let key = (pos, props.iter().map(|x| (x * 1e9).round() as i64).collect());
        let next = (self.prop_values.len() / self.num_prop) as u32;
        let values = &mut self.prop_values;
        *self.prop_index.entry(key).or_insert_with(|| {
            values.extend_from_slice(props);
            next
        })
    }

    fn add_triangle(&mut self, corners: [(u32, &[f64]); 3]) {
        self.tri_verts.push(corners.map(|(v, _)| v));
        if self.num_prop > 0 {
            let tri = corners.map(|(v, p)| self.prop_vertex(v, p));
            self.tri_props.push(tri);
        }
    }

    /// Triangulates a convex face. Faces with straight corners (from split
    /// edges) are fanned around their centroid so no sliver has zero area.
    fn add_face(&mut self, face: &Face) {
        let n = face.verts.len();
        let pos = |i: usize| self.positions[face.verts[i % n] as usize];
        let straight = (0..n).any(|i| {
            let (prev, cur, next) = (pos(i + n - 1), pos(i), pos(i + 1));
            (prev - cur).cross(next - cur).length() <= self.tolerance * (next - prev).length()
        });

        if n == 3 || !straight {
            for i in 1..n - 1 {
                self.add_triangle([
                    (face.verts[0], face.props[0].as_slice()),
                    (face.verts[i], face.props[i].as_slice()),
                    (face.verts[i + 1], face.props[i + 1].as_slice()),
                ]);
            }
            return;
        }

        let centroid = face
            .verts
            .iter()
            .map(|&v| self.positions[v as usize])
            .sum::<Vec3>()
            / n as f64;
        let center_props: Vec<f64> = (0..self.num_prop)
            .map(|c| face.props.iter().map(|p| p[c]).sum::<f64>() / n as f64)
            .collect();
        let center = self.positions.len() as u32;
        self.positions.push(centroid);
        for i in 0..n {
            let j = (i + 1) % n;
            self.add_triangle([
                (center, center_props.as_slice()),
                (face.verts[i], face.props[i].as_slice()),
                (face.verts[j], face.props[j].as_slice()),
            ]);
        }
    }

    fn finish(self) -> Solid {
        let properties = (self.num_prop > 0).then(|| Properties {
            num_prop: self.num_prop,
            values: self.prop_values,
            tri_props: self.tri_props,
        });
        Solid {
            vert_pos: self.positions,
            tri_verts: self.tri_verts,
            properties,
            patches: None,
        }
        .compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::polygon::{BspVertex, Plane};

    fn quad(points: &[[f64; 3]]) -> BspPolygon {
        BspPolygon {
            vertices: points
                .iter()
                .map(|p| BspVertex {
                    pos: Vec3::from_array(*p),
                    props: Vec::new(),
                })
                .collect(),
            plane: Plane {
                normal: Vec3::Z,
                w: 0.0,
            },
        }
    }

    #[test]
    fn test_t_junction_is_split() {
        // One big square next to two small ones sharing its right edge
        let polys = vec![
            quad(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 2.0, 0.0], [0.0, 2.0, 0.0]]),
            quad(&[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [1.0, 1.0, 0.0]]),
            quad(&[[1.0, 1.0, 0.0], [2.0, 1.0, 0.0], [2.0, 2.0, 0.0], [1.0, 2.0, 0.0]]),
        ];
        let solid = polygons_to_solid(polys, 0, 1e-9);
        let index = |x: f64, y: f64| {
            solid
                .positions()
                .iter()
                .position(|p| *p == Vec3::new(x, y, 0.0))
                .unwrap() as u32
        };
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in solid.triangles() {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        let edge = |a: u32, b: u32| edges.get(&(a.min(b), a.max(b))).copied().unwrap_or(0);

        let (bottom, mid, top) = (index(1.0, 0.0), index(1.0, 1.0), index(1.0, 2.0));
        assert_eq!(edge(bottom, top), 0);
        assert_eq!(edge(bottom, mid), 2);
        assert_eq!(edge(mid, top), 2);
    }

    #[test]
    fn test_weld_drops_collapsed_polygons() {
        let polys = vec![quad(&[
            [0.0, 0.0, 0.0],
            [1e-12, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0 + 1e-12, 0.0, 0.0],
        ])];
        let solid = polygons_to_solid(polys, 0, 1e-9);
        assert!(solid.is_empty());
    }
}
