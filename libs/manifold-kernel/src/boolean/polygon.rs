//! # Polygon Operations
//!
//! Polygon data structures and plane splitting for BSP boolean operations.
//!
//! ## Contents
//!
//! - **Data structures**: `BspVertex`, `BspPolygon`, `Plane`
//! - **Split operation**: `split_polygon` routes a polygon to one or both
//!   sides of a plane
//! - **Conversion**: `solid_to_polygons`

use crate::core::Vec3;
use crate::Solid;

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Splitting plane defined by normal and distance from origin.
///
/// The plane equation is: `dot(normal, point) = w`
///
/// Points with `dot(normal, point) > w` are on the front (positive) side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Plane {
    /// Unit normal vector pointing to front side
    pub normal: Vec3,
    /// Signed distance from origin: `w = dot(normal, point_on_plane)`
    pub w: f64,
}

impl Plane {
    /// Plane through three points, `None` if they are collinear.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    pub fn distance(&self, p: Vec3) -> f64 {
        self.normal.dot(p) - self.w
    }
}

/// Polygon corner: a position plus interpolated property channels.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BspVertex {
    pub pos: Vec3,
    pub props: Vec<f64>,
}

impl BspVertex {
    /// Point at parameter `t` from `self` to `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            pos: self.pos.lerp(other.pos, t),
            props: self
                .props
                .iter()
                .zip(&other.props)
                .map(|(a, b)| a + (b - a) * t)
                .collect(),
        }
    }
}

/// Convex planar polygon in a BSP tree.
///
/// ## Invariants
///
/// - `vertices.len() >= 3`
/// - Vertices are counter-clockwise seen from the front of `plane`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BspPolygon {
    pub vertices: Vec<BspVertex>,
    pub plane: Plane,
}

impl BspPolygon {
    /// Reverse vertex order and flip the plane (inside-out conversion).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }
}

/// Where a polygon ended up relative to a splitting plane.
#[derive(Debug)]
pub(crate) enum Side {
    /// On the plane, facing the same way
    CoplanarFront(BspPolygon),
    /// On the plane, facing the other way
    CoplanarBack(BspPolygon),
    /// Entirely on the positive side
    Front(BspPolygon),
    /// Entirely on the negative side
    Back(BspPolygon),
    /// Cut in two; either piece may vanish if it degenerates
    Spanning {
        front: Option<BspPolygon>,
        back: Option<BspPolygon>,
        /// The uncut polygon, for callers that undo the split
        whole: BspPolygon,
    },
}

// =============================================================================
// POLYGON SPLITTING
// =============================================================================

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Classify and optionally split polygon by plane.
///
/// ## Algorithm
///
/// 1. Classify each vertex as front, back, or on-plane within `eps`
/// 2. If no vertex is off the plane, route by facing direction
/// 3. If vertices lie on both sides, walk the edges and emit the
///    intersection points into both halves
pub(crate) fn split_polygon(poly: BspPolygon, plane: &Plane, eps: f64) -> Side {
    let mut polygon_type = COPLANAR;
    let types: Vec<u8> = poly
        .vertices
        .iter()
        .map(|v| {
            let t = plane.distance(v.pos);
            let ty = if t < -eps {
                BACK
            } else if t > eps {
                FRONT
            } else {
                COPLANAR
            };
            polygon_type |= ty;
            ty
        })
        .collect();

    match polygon_type {
        COPLANAR => {
            if plane.normal.dot(poly.plane.normal) > 0.0 {
                Side::CoplanarFront(poly)
            } else {
                Side::CoplanarBack(poly)
            }
        }
        FRONT => Side::Front(poly),
        BACK => Side::Back(poly),
        _ => {
            let n = poly.vertices.len();
            let mut front = Vec::with_capacity(n + 1);
            let mut back = Vec::with_capacity(n + 1);
            for i in 0..n {
                let j = (i + 1) % n;
                let (ti, tj) = (types[i], types[j]);
                let (vi, vj) = (&poly.vertices[i], &poly.vertices[j]);
                if ti != BACK {
                    front.push(vi.clone());
                }
                if ti != FRONT {
                    back.push(vi.clone());
                }
                if ti | tj == SPANNING {
                    let t = (plane.w - plane.normal.dot(vi.pos))
                        / plane.normal.dot(vj.pos - vi.pos);
                    let v = vi.lerp(vj, t);
                    front.push(v.clone());
                    back.push(v);
                }
            }
            let source_plane = poly.plane;
            let piece = move |vertices: Vec<BspVertex>| {
                (vertices.len() >= 3).then_some(BspPolygon {
                    vertices,
                    plane: source_plane,
                })
            };
            Side::Spanning {
                front: piece(front),
                back: piece(back),
                whole: poly,
            }
        }
    }
}

// =============================================================================
// CONVERSION
// =============================================================================

/// One polygon per non-degenerate triangle, with property channels padded
/// to `num_prop`.
pub(crate) fn solid_to_polygons(solid: &Solid, num_prop: usize) -> Vec<BspPolygon> {
    let props = solid.properties.as_ref();
    solid
        .tri_verts
        .iter()
        .enumerate()
        .filter_map(|(t, tri)| {
            let [a, b, c] = solid.corners(tri);
            let plane = Plane::from_points(a, b, c)?;
            let vertices = [a, b, c]
                .into_iter()
                .enumerate()
                .map(|(k, pos)| {
                    let mut values = vec![0.0; num_prop];
                    if let Some(p) = props {
                        let src = p.get(p.tri_props[t][k]);
                        values[..src.len()].copy_from_slice(src);
                    }
                    BspVertex { pos, props: values }
                })
                .collect();
            Some(BspPolygon { vertices, plane })
        })
        .collect()
}
