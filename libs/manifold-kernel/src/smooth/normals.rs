//! Crease detection and crease-aware normals.
//!
//! Corner `3 * tri + k` is corner `k` of triangle `tri`. Corners around a
//! vertex that can reach each other without crossing a crease form a
//! region; every region gets one normal.

use std::collections::HashMap;

use tracing::debug;

use crate::core::Vec3;
use crate::solid::Properties;
use crate::Solid;

/// Interior angle of triangle `tri` at corner `k`.
fn corner_angle(solid: &Solid, tri: usize, k: usize) -> f64 {
    let [a, b, c] = solid.corners(&solid.tri_verts[tri]);
    let (p, q, r) = match k {
        0 => (a, b, c),
        1 => (b, c, a),
        _ => (c, a, b),
    };
    let angle = (q - p).angle_between(r - p);
    if angle.is_nan() {
        0.0
    } else {
        angle
    }
}

/// Angle-weighted average of the face normals around each vertex.
pub(crate) fn vertex_normals(solid: &Solid) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; solid.num_vert()];
    for (t, tri) in solid.tri_verts.iter().enumerate() {
        let normal = solid.face_normal(t);
        for (k, &v) in tri.iter().enumerate() {
            sums[v as usize] += normal * corner_angle(solid, t, k);
        }
    }
    sums.into_iter().map(Vec3::normalize_or_zero).collect()
}

/// Per-corner normals read from property channels `normal_idx..normal_idx + 3`.
///
/// `None` if the solid has no such channels. Zero-length entries fall back
/// to the vertex normal.
pub(crate) fn corner_normals(solid: &Solid, normal_idx: usize) -> Option<Vec<Vec3>> {
    let props = solid.properties.as_ref()?;
    if normal_idx + 3 > props.num_prop {
        return None;
    }
    let vertex = vertex_normals(solid);
    let fallback = &vertex;
    let normals = solid
        .tri_verts
        .iter()
        .zip(&props.tri_props)
        .flat_map(|(tri, ptri)| {
            (0..3).map(move |k| {
                let v = props.get(ptri[k]);
                Vec3::new(v[normal_idx], v[normal_idx + 1], v[normal_idx + 2])
                    .try_normalize()
                    .unwrap_or(fallback[tri[k] as usize])
            })
        })
        .collect();
    Some(normals)
}

/// Grouping of triangle corners into smooth regions.
pub(crate) struct CornerRegions {
    /// Per halfedge: the dihedral angle exceeds the crease threshold.
    pub sharp: Vec<bool>,
    /// Per corner: representative corner of its region.
    root: Vec<usize>,
}

impl CornerRegions {
    /// Groups corners across every edge whose dihedral angle is at most
    /// `min_sharp_angle` degrees.
    pub fn new(solid: &Solid, min_sharp_angle: f64) -> Self {
        let opposite = solid.opposite_halfedges();
        let face_normals: Vec<Vec3> = (0..solid.num_tri()).map(|t| solid.face_normal(t)).collect();
        let sharp: Vec<bool> = opposite
            .iter()
            .enumerate()
            .map(|(h, o)| match o {
                Some(o) => {
                    let angle = face_normals[h / 3].angle_between(face_normals[o / 3]);
                    angle.to_degrees() > min_sharp_angle
                }
                None => true,
            })
            .collect();

        let mut parent: Vec<usize> = (0..opposite.len()).collect();
        for (h, o) in opposite.iter().enumerate() {
            let Some(o) = *o else { continue };
            if sharp[h] || o < h {
                continue;
            }
            let end_h = 3 * (h / 3) + (h % 3 + 1) % 3;
            let end_o = 3 * (o / 3) + (o % 3 + 1) % 3;
            union(&mut parent, h, end_o);
            union(&mut parent, end_h, o);
        }
        let root = (0..parent.len()).map(|c| find(&mut parent, c)).collect();
        Self { sharp, root }
    }

    /// Region representative of corner `c`.
    pub fn region(&self, c: usize) -> usize {
        self.root[c]
    }

    /// Angle-weighted normal of each corner's region, per corner.
    pub fn normals(&self, solid: &Solid) -> Vec<Vec3> {
        let mut sums = vec![Vec3::ZERO; self.root.len()];
        for (c, &r) in self.root.iter().enumerate() {
            let (t, k) = (c / 3, c % 3);
            sums[r] += solid.face_normal(t) * corner_angle(solid, t, k);
        }
        self.root
            .iter()
            .map(|&r| sums[r].normalize_or_zero())
            .collect()
    }
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let (ra, rb) = (find(parent, a), find(parent, b));
    if ra != rb {
        parent[ra.max(rb)] = ra.min(rb);
    }
}

impl Solid {
    /// Writes crease-aware vertex normals into property channels
    /// `normal_idx..normal_idx + 3`.
    ///
    /// Edges with a dihedral angle above `min_sharp_angle` degrees are
    /// creases: a vertex on a crease gets one property vertex per side.
    /// Existing channels are kept; missing ones below `normal_idx` are
    /// zero-filled.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let cube = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(0, 60.0);
    /// let mesh = cube.get_mesh_gl();
    /// assert_eq!(mesh.num_prop, 6);
    /// // three faces meet at each of the eight corners
    /// assert_eq!(mesh.num_vert(), 24);
    /// ```
    pub fn calculate_normals(&self, normal_idx: usize, min_sharp_angle: f64) -> Solid {
        if self.is_empty() {
            return Solid::empty();
        }
        let regions = CornerRegions::new(self, min_sharp_angle);
        let normals = regions.normals(self);
        let old = self.properties.as_ref();
        let num_prop = self.num_prop().max(normal_idx + 3);

        let mut values = Vec::new();
        let mut tri_props = Vec::with_capacity(self.num_tri());
        let mut assigned: HashMap<(u32, usize), u32> = HashMap::new();
        for (t, tri) in self.tri_verts.iter().enumerate() {
            let mut ptri = [0u32; 3];
            for k in 0..3 {
                let c = 3 * t + k;
                let source = old.map_or(tri[k], |p| p.tri_props[t][k]);
                let key = (source, regions.region(c));
                ptri[k] = *assigned.entry(key).or_insert_with(|| {
                    let index = (values.len() / num_prop) as u32;
                    let start = values.len();
                    values.resize(start + num_prop, 0.0);
                    if let Some(p) = old {
                        let src = p.get(source);
                        values[start..start + src.len()].copy_from_slice(src);
                    }
                    let n = normals[c];
                    values[start + normal_idx..start + normal_idx + 3].copy_from_slice(&[n.x, n.y, n.z]);
                    index
                });
            }
            tri_props.push(ptri);
        }
        debug!(
            normal_idx,
            num_prop,
            prop_verts = values.len() / num_prop,
            "Calculated normals"
        );

        let mut result = self.clone();
        result.properties = Some(Properties {
            num_prop,
            values,
            tri_props,
        });
        result
    }
}
