//! # Primitives
//!
//! Constructors for the basic solids. Every constructor returns either a
//! closed, outward-wound mesh or the empty solid when its parameters describe
//! no volume.


use std::f64::consts::TAU;

use crate::config::KernelConfig;
use crate::core::Vec3;
use crate::Solid;

fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Regular tetrahedron with vertices at alternating corners of the cube
/// `[-1, 1]³`.
pub fn tetrahedron() -> Solid {
    let vert_pos = vec![
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ];
    let tri_verts = vec![[2, 0, 1], [0, 3, 1], [2, 3, 0], [3, 2, 1]];
    Solid::from_parts(vert_pos, tri_verts)
}

/// Axis-aligned box with one corner at the origin and the other at `size`.
///
/// Returns the empty solid unless every component is positive and finite.
pub fn cube(size: Vec3) -> Solid {
    if !(positive(size.x) && positive(size.y) && positive(size.z)) {
        return Solid::empty();
    }
    // 0..3 bottom ring counter-clockwise, 4..7 the same ring on top
    let vert_pos = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(size.x, 0.0, 0.0),
        Vec3::new(size.x, size.y, 0.0),
        Vec3::new(0.0, size.y, 0.0),
        Vec3::new(0.0, 0.0, size.z),
        Vec3::new(size.x, 0.0, size.z),
        Vec3::new(size.x, size.y, size.z),
        Vec3::new(0.0, size.y, size.z),
    ];
    let tri_verts = vec![
        // Bottom face (z = 0)
        [0, 2, 1],
        [0, 3, 2],
        // Top face (z = size.z)
        [4, 5, 6],
        [4, 6, 7],
        // Front face (y = 0)
        [0, 1, 5],
        [0, 5, 4],
        // Back face (y = size.y)
        [2, 3, 7],
        [2, 7, 6],
        // Left face (x = 0)
        [3, 0, 4],
        [3, 4, 7],
        // Right face (x = size.x)
        [1, 2, 6],
        [1, 6, 5],
    ];
    Solid::from_parts(vert_pos, tri_verts)
}

/// Sphere centered at the origin.
///
/// `circular_segments` vertices go around each latitude ring; zero selects a
/// count from the radius. Poles are single vertices.
pub fn sphere(radius: f64, circular_segments: u32, config: &KernelConfig) -> Solid {
    if !positive(radius) {
        return Solid::empty();
    }
    let n = config.circular_segments(circular_segments, radius) as usize;
    let bands = ((n + 1) / 2).max(2);

    let mut vert_pos = vec![Vec3::new(0.0, 0.0, radius)];
    for band in 1..bands {
        let phi = std::f64::consts::PI * band as f64 / bands as f64;
        let (ring_r, z) = (radius * phi.sin(), radius * phi.cos());
        vert_pos.extend(ring(ring_r, z, n));
    }
    vert_pos.push(Vec3::new(0.0, 0.0, -radius));
    let south = (vert_pos.len() - 1) as u32;
    let ring_start = |r: usize| (1 + r * n) as u32;

    let mut tri_verts = Vec::with_capacity(2 * n * bands);
    for i in 0..n {
        let next = (i + 1) % n;
        tri_verts.push([0, ring_start(0) + i as u32, ring_start(0) + next as u32]);
    }
    for r in 0..bands - 2 {
        let (a, b) = (ring_start(r), ring_start(r + 1));
        for i in 0..n as u32 {
            let next = (i + 1) % n as u32;
            tri_verts.push([b + i, b + next, a + next]);
            tri_verts.push([b + i, a + next, a + i]);
        }
    }
    let last = ring_start(bands - 2);
    for i in 0..n as u32 {
        let next = (i + 1) % n as u32;
        tri_verts.push([south, last + next, last + i]);
    }
    Solid::from_parts(vert_pos, tri_verts)
}

/// Cylinder or cone frustum standing on the XY plane, spanning `0..height`
/// along Z.
///
/// A negative `radius_high` means "same as `radius_low`". A zero radius at
/// either end closes that end in a single apex vertex.
pub fn cylinder(
    height: f64,
    radius_low: f64,
    radius_high: f64,
    circular_segments: u32,
    config: &KernelConfig,
) -> Solid {
    let radius_high = if radius_high < 0.0 { radius_low } else { radius_high };
    if !positive(height) || !radius_low.is_finite() || !radius_high.is_finite() {
        return Solid::empty();
    }
    if radius_low < 0.0 || (radius_low == 0.0 && radius_high == 0.0) {
        return Solid::empty();
    }
    let n = config.circular_segments(circular_segments, radius_low.max(radius_high)) as usize;

    let mut vert_pos = Vec::with_capacity(2 * n);
    let bottom = cap_ring(&mut vert_pos, radius_low, 0.0, n);
    let top = cap_ring(&mut vert_pos, radius_high, height, n);

    let mut tri_verts = Vec::with_capacity(4 * n);
    for i in 0..n {
        let next = (i + 1) % n;
        match (&bottom, &top) {
            (Cap::Ring(b), Cap::Ring(a)) => {
                tri_verts.push([b + i as u32, b + next as u32, a + next as u32]);
                tri_verts.push([b + i as u32, a + next as u32, a + i as u32]);
            }
            (Cap::Ring(b), Cap::Apex(apex)) => {
                tri_verts.push([b + i as u32, b + next as u32, *apex]);
            }
            (Cap::Apex(apex), Cap::Ring(a)) => {
                tri_verts.push([*apex, a + next as u32, a + i as u32]);
            }
            (Cap::Apex(_), Cap::Apex(_)) => {}
        }
    }
    if let Cap::Ring(b) = bottom {
        for i in 1..n as u32 - 1 {
            tri_verts.push([b, b + i + 1, b + i]);
        }
    }
    if let Cap::Ring(a) = top {
        for i in 1..n as u32 - 1 {
            tri_verts.push([a, a + i, a + i + 1]);
        }
    }
    Solid::from_parts(vert_pos, tri_verts)
}

/// One end of a cylinder: the first index of a vertex ring, or an apex.
enum Cap {
    Ring(u32),
    Apex(u32),
}

fn cap_ring(vert_pos: &mut Vec<Vec3>, radius: f64, z: f64, n: usize) -> Cap {
    let start = vert_pos.len() as u32;
    if radius == 0.0 {
        vert_pos.push(Vec3::new(0.0, 0.0, z));
        Cap::Apex(start)
    } else {
        vert_pos.extend(ring(radius, z, n));
        Cap::Ring(start)
    }
}

/// `n` points counter-clockwise on a circle of `radius` at height `z`.
fn ring(radius: f64, z: f64, n: usize) -> impl Iterator<Item = Vec3> {
    (0..n).map(move |i| {
        let theta = TAU * i as f64 / n as f64;
        Vec3::new(radius * theta.cos(), radius * theta.sin(), z)
    })
}

impl Solid {
    /// See [`tetrahedron`].
    pub fn tetrahedron() -> Self {
        tetrahedron()
    }

    /// See [`cube`].
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let c = Solid::cube([2.0, 3.0, 4.0]);
    /// assert_eq!(c.num_vert(), 8);
    /// assert!((c.volume() - 24.0).abs() < 1e-12);
    /// ```
    pub fn cube(size: [f64; 3]) -> Self {
        cube(Vec3::from_array(size))
    }

    /// See [`sphere`]. Uses the default quality settings.
    pub fn sphere(radius: f64, circular_segments: u32) -> Self {
        sphere(radius, circular_segments, &KernelConfig::default())
    }

    /// See [`cylinder`]. Uses the default quality settings.
    pub fn cylinder(height: f64, radius_low: f64, radius_high: f64, circular_segments: u32) -> Self {
        cylinder(
            height,
            radius_low,
            radius_high,
            circular_segments,
            &KernelConfig::default(),
        )
    }
}
