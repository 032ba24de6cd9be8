//! Tests for patches, creases and normals.

use std::f64::consts::PI;

use approx::assert_relative_eq;

use super::*;

fn triangle() -> [Vec3; 3] {
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 1.0),
        Vec3::new(0.0, 3.0, -1.0),
    ]
}

// =============================================================================
// PATCH
// =============================================================================

#[test]
fn test_flat_patch_reproduces_triangle() {
    let corners = triangle();
    let patch = Patch::flat(corners);
    for w in [[1.0, 0.0, 0.0], [0.2, 0.3, 0.5], [0.5, 0.5, 0.0], [1.0 / 3.0; 3]] {
        let linear = corners[0] * w[0] + corners[1] * w[1] + corners[2] * w[2];
        assert_relative_eq!(patch.eval(corners, w), linear, epsilon = 1e-12);
    }
}

#[test]
fn test_patch_interpolates_corners() {
    let corners = triangle();
    let mut patch = Patch::flat(corners);
    patch.edges[0] += Vec3::Z;
    patch.edges[3] -= Vec3::X;
    assert_relative_eq!(patch.eval(corners, [0.0, 1.0, 0.0]), corners[1], epsilon = 1e-12);
    assert_relative_eq!(patch.eval(corners, [0.0, 0.0, 1.0]), corners[2], epsilon = 1e-12);
}

#[test]
fn test_reverse_matches_flipped_triangle() {
    let [a, b, c] = triangle();
    let mut patch = Patch::flat([a, b, c]);
    patch.reverse();
    assert_eq!(patch, Patch::flat([a, c, b]));
}

#[test]
fn test_edge_control_is_symmetric_in_sides() {
    let start = Vec3::ZERO;
    let edge = Vec3::new(1.0, 0.0, 0.0);
    let (left, right) = (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, -1.0, 0.0));
    let one = edge_control(start, edge, left, right);
    let other = edge_control(start, edge, right, left);
    assert_relative_eq!(one, other, epsilon = 1e-15);
    // a crease between perpendicular faces runs straight along the edge
    assert_relative_eq!(one, edge / 3.0, epsilon = 1e-15);
}

// =============================================================================
// SMOOTH OUT
// =============================================================================

#[test]
fn test_creased_cube_stays_a_cube() {
    let cube = Solid::cube([1.0, 2.0, 3.0]);
    let smooth = cube.smooth_out(60.0, 0.0);
    assert!(smooth.is_smooth());
    assert_eq!(smooth.num_tri(), cube.num_tri());
    let refined = smooth.refine(4);
    assert_relative_eq!(refined.volume(), 6.0, epsilon = 1e-9);
    assert!(refined.is_manifold());
}

#[test]
fn test_cube_without_creases_rounds_outward() {
    let refined = Solid::cube([1.0, 1.0, 1.0]).smooth_out(100.0, 0.0).refine(6);
    assert!(refined.is_manifold());
    let volume = refined.volume();
    // between the cube and its circumscribed sphere
    assert!(volume > 1.0 + 1e-3, "volume {volume}");
    assert!(volume < 4.0 / 3.0 * PI * 0.75f64.powf(1.5), "volume {volume}");
}

#[test]
fn test_min_smoothness_relaxes_creases() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    let sharp = cube.smooth_out(60.0, 0.0).refine(4).volume();
    let relaxed = cube.smooth_out(60.0, 1.0).refine(4).volume();
    assert_relative_eq!(sharp, 1.0, epsilon = 1e-9);
    assert!(relaxed > sharp + 1e-3);
}

#[test]
fn test_smooth_out_of_empty_is_empty() {
    assert!(Solid::empty().smooth_out(60.0, 0.0).is_empty());
    assert!(Solid::empty().smooth_by_normals(0).is_empty());
}

#[test]
fn test_smooth_surface_follows_transforms() {
    let smooth = Solid::sphere(1.0, 8).smooth_out(60.0, 0.0);
    let direct = smooth.refine(3).translate([5.0, 0.0, 0.0]);
    let moved = smooth.translate([5.0, 0.0, 0.0]).refine(3);
    assert_relative_eq!(moved.volume(), direct.volume(), epsilon = 1e-9);

    let mirrored = smooth.scale([-1.0, 1.0, 1.0]).refine(3);
    assert!(mirrored.is_manifold());
    assert_relative_eq!(mirrored.volume(), smooth.refine(3).volume(), epsilon = 1e-9);
}

// =============================================================================
// SMOOTH BY NORMALS
// =============================================================================

#[test]
fn test_smooth_by_normals_respects_creased_normals() {
    let cube = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(0, 60.0);
    let refined = cube.smooth_by_normals(0).refine(3);
    assert_relative_eq!(refined.volume(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_smooth_by_normals_without_channels_smooths_everything() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    let by_normals = cube.smooth_by_normals(0).refine(4).volume();
    let by_angle = cube.smooth_out(180.0, 0.0).refine(4).volume();
    assert!(by_normals > 1.0 + 1e-3);
    assert_relative_eq!(by_normals, by_angle, epsilon = 1e-9);
}

#[test]
fn test_smooth_by_normals_on_sphere_approaches_sphere() {
    let sphere = Solid::sphere(1.0, 8);
    let exact = 4.0 / 3.0 * PI;
    let smooth = sphere.calculate_normals(0, 60.0).smooth_by_normals(0).refine(4);
    assert!(smooth.is_manifold());
    assert!((smooth.volume() - exact).abs() < (sphere.volume() - exact).abs());
}

// =============================================================================
// CALCULATE NORMALS
// =============================================================================

#[test]
fn test_sphere_normals_are_unit_and_outward() {
    let sphere = Solid::sphere(2.0, 12).calculate_normals(0, 60.0);
    let props = sphere.properties.as_ref().expect("normals");
    assert_eq!(props.num_prop, 3);
    // no creases: one property vertex per position
    assert_eq!(props.count(), sphere.num_vert());
    for (tri, ptri) in sphere.triangles().iter().zip(&props.tri_props) {
        for k in 0..3 {
            let v = props.get(ptri[k]);
            let n = Vec3::new(v[0], v[1], v[2]);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
            assert!(n.dot(sphere.positions()[tri[k] as usize]) > 0.0);
        }
    }
}

#[test]
fn test_normals_at_offset_zero_fill_gap() {
    let cube = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(2, 60.0);
    let props = cube.properties.as_ref().expect("normals");
    assert_eq!(props.num_prop, 5);
    for p in 0..props.count() as u32 {
        let v = props.get(p);
        assert_eq!(&v[..2], &[0.0, 0.0]);
        assert_relative_eq!(Vec3::new(v[2], v[3], v[4]).length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_normals_keep_existing_channels() {
    let first = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(0, 60.0);
    let second = first.calculate_normals(3, 60.0);
    let props = second.properties.as_ref().expect("normals");
    assert_eq!(props.num_prop, 6);
    for p in 0..props.count() as u32 {
        let v = props.get(p);
        assert_eq!(&v[..3], &v[3..]);
    }
}

#[test]
fn test_wide_crease_angle_merges_cube_corners() {
    let cube = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(0, 120.0);
    assert_eq!(cube.get_mesh_gl().num_vert(), 8);
    let mesh = cube.get_mesh_gl();
    let n = &mesh.vert_properties[3..6];
    let len = n.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((len - 1.0).abs() < 1e-6);
}
