//! Boolean operation tests.

use super::*;
use crate::core::Vec3;
use approx::assert_relative_eq;
use std::f64::consts::TAU;

fn cube(s: f64) -> Solid {
    Solid::cube([s, s, s])
}

fn polygon_area(radius: f64, n: usize) -> f64 {
    0.5 * n as f64 * radius * radius * (TAU / n as f64).sin()
}

// =============================================================================
// EMPTY OPERANDS
// =============================================================================

#[test]
fn test_union_with_empty_returns_operand() {
    let a = cube(1.0);
    let empty = Solid::empty();
    assert_eq!(a.union(&empty).num_tri(), 12);
    assert_eq!(empty.union(&a).num_tri(), 12);
    assert!(empty.union(&empty).is_empty());
}

#[test]
fn test_intersection_with_empty_is_empty() {
    let a = cube(1.0);
    assert!(a.intersection(&Solid::empty()).is_empty());
    assert!(Solid::empty().intersection(&a).is_empty());
}

#[test]
fn test_difference_with_empty() {
    let a = cube(1.0);
    assert_relative_eq!(a.difference(&Solid::empty()).volume(), 1.0);
    assert!(Solid::empty().difference(&a).is_empty());
}

// =============================================================================
// DISJOINT OPERANDS
// =============================================================================

#[test]
fn test_disjoint_union_concatenates() {
    let a = cube(1.0);
    let b = cube(1.0).translate([3.0, 0.0, 0.0]);
    let u = a.union(&b);
    assert_eq!(u.num_tri(), 24);
    assert_eq!(u.num_vert(), 16);
    assert!(u.is_manifold());
    assert_relative_eq!(u.volume(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_disjoint_intersection_and_difference() {
    let a = cube(1.0);
    let b = cube(1.0).translate([0.0, 0.0, 4.0]);
    assert!(a.intersection(&b).is_empty());
    assert_relative_eq!(a.difference(&b).volume(), 1.0, epsilon = 1e-12);
}

// =============================================================================
// OVERLAPPING OPERANDS
// =============================================================================

#[test]
fn test_overlapping_union() {
    let a = cube(2.0);
    let b = cube(2.0).translate([1.0, 1.0, 1.0]);
    let u = a.union(&b);
    assert!(u.is_manifold());
    assert_relative_eq!(u.volume(), 15.0, epsilon = 1e-9);
    let bb = u.bounding_box().unwrap();
    assert_relative_eq!(bb.min, Vec3::ZERO, epsilon = 1e-12);
    assert_relative_eq!(bb.max, Vec3::splat(3.0), epsilon = 1e-12);
}

#[test]
fn test_union_is_commutative() {
    let a = cube(2.0);
    let b = Solid::sphere(1.2, 12).translate([2.0, 1.0, 1.0]);
    let ab = a.union(&b);
    let ba = b.union(&a);
    assert_relative_eq!(ab.volume(), ba.volume(), epsilon = 1e-9);
    assert_relative_eq!(ab.surface_area(), ba.surface_area(), epsilon = 1e-9);
    let (bb_ab, bb_ba) = (ab.bounding_box().unwrap(), ba.bounding_box().unwrap());
    assert_relative_eq!(bb_ab.min, bb_ba.min, epsilon = 1e-12);
    assert_relative_eq!(bb_ab.max, bb_ba.max, epsilon = 1e-12);
}

#[test]
fn test_overlapping_intersection() {
    let a = cube(2.0);
    let b = cube(2.0).translate([1.0, 1.0, 1.0]);
    let i = a.intersection(&b);
    assert!(i.is_manifold());
    assert_relative_eq!(i.volume(), 1.0, epsilon = 1e-9);
    let bb = i.bounding_box().unwrap();
    assert_relative_eq!(bb.min, Vec3::ONE, epsilon = 1e-12);
    assert_relative_eq!(bb.max, Vec3::splat(2.0), epsilon = 1e-12);
}

#[test]
fn test_self_intersection_preserves_solid() {
    for s in [cube(1.0), Solid::sphere(1.0, 16), Solid::tetrahedron()] {
        let i = s.intersection(&s);
        assert_relative_eq!(i.volume(), s.volume(), epsilon = 1e-9);
        assert!(i.is_manifold());
    }
}

#[test]
fn test_self_union_preserves_solid() {
    let s = Solid::sphere(1.0, 12);
    assert_relative_eq!(s.union(&s).volume(), s.volume(), epsilon = 1e-9);
}

#[test]
fn test_self_difference_is_empty() {
    for s in [cube(1.0), Solid::sphere(1.0, 16), Solid::cylinder(2.0, 1.0, 0.5, 10)] {
        assert!(s.difference(&s).is_empty());
    }
}

#[test]
fn test_difference_leaves_cavity() {
    let outer = cube(3.0);
    let inner = cube(1.0).translate([1.0, 1.0, 1.0]);
    let hollow = outer.difference(&inner);
    assert!(hollow.is_manifold());
    assert_relative_eq!(hollow.volume(), 26.0, epsilon = 1e-9);
    // The cavity adds its own surface
    assert_relative_eq!(hollow.surface_area(), 54.0 + 6.0, epsilon = 1e-9);
}

#[test]
fn test_difference_drills_hole() {
    let block = cube(2.0);
    let drill = Solid::cylinder(4.0, 0.5, 0.5, 16).translate([1.0, 1.0, -1.0]);
    let drilled = block.difference(&drill);
    assert!(drilled.is_manifold());
    assert_relative_eq!(drilled.volume(), 8.0 - polygon_area(0.5, 16) * 2.0, epsilon = 1e-9);
}

#[test]
fn test_touching_cubes_merge() {
    let a = cube(1.0);
    let b = cube(1.0).translate([1.0, 0.0, 0.0]);
    let u = a.union(&b);
    assert!(u.is_manifold());
    assert_relative_eq!(u.volume(), 2.0, epsilon = 1e-9);
    // The shared wall disappears
    assert_relative_eq!(u.surface_area(), 10.0, epsilon = 1e-9);
}

#[test]
fn test_properties_are_widened() {
    let mut a = cube(2.0);
    a.properties = Some(padded_properties(&a, 2));
    let b = cube(2.0).translate([1.0, 0.0, 0.0]);
    let u = a.union(&b);
    assert_eq!(u.num_prop(), 2);
    assert_eq!(u.get_mesh_gl().num_prop, 5);
}

#[test]
fn test_overlapping_spheres_stay_compact() {
    let a = Solid::sphere(1.0, 32);
    let b = a.translate([0.7, 0.0, 0.0]);
    let input = a.num_tri() + b.num_tri();
    assert_eq!(input, 1920);

    let u = a.union(&b);
    assert!(u.is_manifold());
    assert!(u.num_tri() <= 3 * input, "{} triangles from {input}", u.num_tri());
    assert!(u.volume() > a.volume() && u.volume() < 2.0 * a.volume());

    let d = a.difference(&b);
    assert!(d.is_manifold());
    assert!(d.num_tri() <= 3 * input, "{} triangles from {input}", d.num_tri());
    assert_relative_eq!(
        d.volume() + a.intersection(&b).volume(),
        a.volume(),
        max_relative = 1e-6
    );
}
