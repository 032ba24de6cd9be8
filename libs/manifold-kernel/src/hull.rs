//! # Convex Hull
//!
//! QuickHull over the vertices of a solid or a free point set.
//!
//! ## Algorithm
//!
//! 1. Weld near-duplicate points
//! 2. Build an initial tetrahedron from extreme points
//! 3. Assign every other point to a face it lies outside of
//! 4. While some face has outside points:
//!    - Take the farthest such point
//!    - Flood the faces it can see, starting from the face that owns it
//!    - Replace them by a fan from the point to the horizon
//!    - Reassign the orphaned points
//!
//! Inputs that span no volume (fewer than four points, or all points on
//! one plane) give the empty solid.

use std::collections::HashMap;

use tracing::debug;

use crate::config::KernelConfig;
use crate::core::{BoundingBox, Vec3};
use crate::solid::VertexWelder;
use crate::Solid;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Convex hull of `points`.
///
/// # Examples
/// ```
/// use manifold_kernel::core::Vec3;
/// use manifold_kernel::hull::hull_points;
/// use manifold_kernel::KernelConfig;
///
/// let tet = hull_points(
///     &[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, Vec3::splat(0.1)],
///     &KernelConfig::default(),
/// );
/// assert_eq!(tet.num_vert(), 4);
/// assert!((tet.volume() - 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn hull_points(points: &[Vec3], config: &KernelConfig) -> Solid {
    let Some(bounds) = BoundingBox::from_points(points) else {
        return Solid::empty();
    };
    let scale = bounds.scale().max(1.0);
    let mut welder = VertexWelder::new(config.weld_tolerance(scale));
    for &p in points {
        if p.is_finite() {
            welder.insert(p);
        }
    }
    let unique = welder.into_positions();
    if unique.len() < 4 {
        return Solid::empty();
    }

    let mut hull = Hull::new(&unique, config.plane_tolerance(scale));
    if !hull.build_initial_tetrahedron() {
        debug!(points = unique.len(), "Hull input spans no volume");
        return Solid::empty();
    }
    hull.assign_points(0..unique.len());
    hull.expand();

    let tri_verts = hull.triangles();
    debug!(
        points = unique.len(),
        triangles = tri_verts.len(),
        "Computed convex hull"
    );
    Solid::from_parts(unique, tri_verts)
}

/// Convex hull of the vertices of every solid in `solids`.
pub fn hull_solids(solids: &[Solid], config: &KernelConfig) -> Solid {
    let points: Vec<Vec3> = solids
        .iter()
        .flat_map(|s| s.vert_pos.iter().copied())
        .collect();
    hull_points(&points, config)
}

impl Solid {
    /// Smallest convex solid containing this one. See [`hull_points`].
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let pocket = Solid::cube([1.0, 1.0, 1.0]).translate([0.5, 0.5, 1.5]);
    /// let cup = Solid::cube([2.0, 2.0, 2.0]).difference(&pocket);
    /// assert!((cup.hull().volume() - 8.0).abs() < 1e-9);
    /// ```
    pub fn hull(&self) -> Solid {
        hull_points(&self.vert_pos, &KernelConfig::default())
    }

    /// Convex hull of a free point set. See [`hull_points`].
    pub fn hull_points(points: &[Vec3]) -> Solid {
        hull_points(points, &KernelConfig::default())
    }

    /// Convex hull of several solids together. See [`hull_solids`].
    pub fn batch_hull(solids: &[Solid]) -> Solid {
        hull_solids(solids, &KernelConfig::default())
    }
}

// =============================================================================
// HULL STRUCTURE
// =============================================================================

/// Hull under construction.
struct Hull<'a> {
    points: &'a [Vec3],
    eps: f64,
    faces: Vec<HullFace>,
    /// Active face owning each directed edge.
    edge_face: HashMap<(usize, usize), usize>,
    in_hull: Vec<bool>,
}

/// Triangle of the hull, wound counter-clockwise from outside.
struct HullFace {
    verts: [usize; 3],
    normal: Vec3,
    offset: f64,
    /// Points this face is responsible for.
    outside: Vec<usize>,
    active: bool,
}

impl HullFace {
    fn distance(&self, p: Vec3) -> f64 {
        self.normal.dot(p) - self.offset
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.verts;
        [(a, b), (b, c), (c, a)]
    }
}

impl<'a> Hull<'a> {
    fn new(points: &'a [Vec3], eps: f64) -> Self {
        Self {
            points,
            eps,
            faces: Vec::new(),
            edge_face: HashMap::new(),
            in_hull: vec![false; points.len()],
        }
    }

    /// Picks four extreme points spanning a tetrahedron. Returns false if
    /// the points are collinear or coplanar.
    fn build_initial_tetrahedron(&mut self) -> bool {
        let points = self.points;
        let mut extremes = [0usize; 6];
        for (i, p) in points.iter().enumerate() {
            for axis in 0..3 {
                if p[axis] < points[extremes[2 * axis]][axis] {
                    extremes[2 * axis] = i;
                }
                if p[axis] > points[extremes[2 * axis + 1]][axis] {
                    extremes[2 * axis + 1] = i;
                }
            }
        }

        // two most distant extremes
        let (mut p0, mut p1, mut best) = (0, 0, 0.0);
        for (k, &i) in extremes.iter().enumerate() {
            for &j in &extremes[k + 1..] {
                let d = points[i].distance(points[j]);
                if d > best {
                    (p0, p1, best) = (i, j, d);
                }
            }
        }
        if best <= self.eps {
            return false;
        }

        // farthest from the line p0-p1
        let axis = (points[p1] - points[p0]).normalize();
        let (p2, best) = farthest(points, |p| (p - points[p0]).cross(axis).length());
        if best <= self.eps {
            return false;
        }

        // farthest from the plane p0-p1-p2
        let normal = (points[p1] - points[p0])
            .cross(points[p2] - points[p0])
            .normalize();
        let (p3, best) = farthest(points, |p| (p - points[p0]).dot(normal).abs());
        if best <= self.eps {
            return false;
        }

        for v in [p0, p1, p2, p3] {
            self.in_hull[v] = true;
        }
        if (points[p3] - points[p0]).dot(normal) > 0.0 {
            self.add_face([p0, p2, p1]);
            self.add_face([p0, p1, p3]);
            self.add_face([p1, p2, p3]);
            self.add_face([p2, p0, p3]);
        } else {
            self.add_face([p0, p1, p2]);
            self.add_face([p0, p3, p1]);
            self.add_face([p1, p3, p2]);
            self.add_face([p2, p3, p0]);
        }
        true
    }

    fn add_face(&mut self, verts: [usize; 3]) -> usize {
        let [a, b, c] = verts.map(|v| self.points[v]);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let face = HullFace {
            verts,
            normal,
            offset: normal.dot(a),
            outside: Vec::new(),
            active: true,
        };
        let index = self.faces.len();
        for edge in face.edges() {
            self.edge_face.insert(edge, index);
        }
        self.faces.push(face);
        index
    }

    fn remove_face(&mut self, index: usize) {
        let edges = self.faces[index].edges();
        for edge in edges {
            if self.edge_face.get(&edge) == Some(&index) {
                self.edge_face.remove(&edge);
            }
        }
        self.faces[index].active = false;
    }

    /// Gives each point to the first active face it lies outside of.
    /// Points inside every face are dropped.
    fn assign_points(&mut self, candidates: impl IntoIterator<Item = usize>) {
        for i in candidates {
            if self.in_hull[i] {
                continue;
            }
            let p = self.points[i];
            let eps = self.eps;
            if let Some(face) = self
                .faces
                .iter_mut()
                .find(|f| f.active && f.distance(p) > eps)
            {
                face.outside.push(i);
            }
        }
    }

    fn expand(&mut self) {
        loop {
            let mut best = None;
            let mut best_distance = f64::NEG_INFINITY;
            for (f, face) in self.faces.iter().enumerate() {
                if !face.active {
                    continue;
                }
                for &i in &face.outside {
                    let d = face.distance(self.points[i]);
                    if d > best_distance {
                        best = Some((f, i));
                        best_distance = d;
                    }
                }
            }
            match best {
                Some((face, point)) => self.add_point(face, point),
                None => break,
            }
        }
    }

    /// Adds `point`, which lies outside `start`, to the hull.
    fn add_point(&mut self, start: usize, point: usize) {
        let p = self.points[point];

        // visible faces form a connected region around `start`
        let mut visible = vec![start];
        let mut is_visible = HashMap::from([(start, true)]);
        let mut cursor = 0;
        while cursor < visible.len() {
            let face = visible[cursor];
            cursor += 1;
            for (a, b) in self.faces[face].edges() {
                let Some(&neighbor) = self.edge_face.get(&(b, a)) else {
                    continue;
                };
                if is_visible.contains_key(&neighbor) {
                    continue;
                }
                let sees = self.faces[neighbor].distance(p) > self.eps;
                is_visible.insert(neighbor, sees);
                if sees {
                    visible.push(neighbor);
                }
            }
        }

        let mut horizon = Vec::new();
        for &face in &visible {
            for (a, b) in self.faces[face].edges() {
                let hidden = match self.edge_face.get(&(b, a)) {
                    Some(n) => !is_visible.get(n).copied().unwrap_or(false),
                    None => true,
                };
                if hidden {
                    horizon.push((a, b));
                }
            }
        }

        let mut orphans = Vec::new();
        for &face in &visible {
            orphans.append(&mut self.faces[face].outside);
            self.remove_face(face);
        }
        self.in_hull[point] = true;
        for (a, b) in horizon {
            self.add_face([a, b, point]);
        }
        self.assign_points(orphans);
    }

    fn triangles(&self) -> Vec<[u32; 3]> {
        self.faces
            .iter()
            .filter(|f| f.active)
            .map(|f| f.verts.map(|v| v as u32))
            .collect()
    }
}

/// Index and value of the point maximizing `measure`.
fn farthest(points: &[Vec3], measure: impl Fn(Vec3) -> f64) -> (usize, f64) {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, measure(p)))
        .fold((0, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best })
}

// =============================================================================
// TESTS
// =============================================================================
