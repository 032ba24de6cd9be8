//! Tests for uniform and adaptive refinement.

use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::core::Vec3;
use crate::Solid;

fn longest_edge(solid: &Solid) -> f64 {
    solid
        .triangles()
        .iter()
        .flat_map(|t| {
            let [a, b, c] = solid.corners(t);
            [a.distance(b), b.distance(c), c.distance(a)]
        })
        .fold(0.0, f64::max)
}

// =============================================================================
// UNIFORM REFINEMENT
// =============================================================================

#[test]
fn test_refine_one_keeps_triangle_count() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    assert_eq!(cube.refine(1).num_tri(), cube.num_tri());
    assert_eq!(cube.refine(0).num_tri(), cube.num_tri());
}

#[test]
fn test_refine_multiplies_triangles_by_n_squared() {
    let tet = Solid::tetrahedron();
    for n in [2u32, 3, 5] {
        let refined = tet.refine(n);
        assert_eq!(refined.num_tri(), tet.num_tri() * (n * n) as usize);
        assert!(refined.is_manifold(), "n = {n}");
    }
}

#[test]
fn test_refine_shares_edge_vertices() {
    // 8 corners plus one midpoint on each of the 12 edges and 6 diagonals
    let refined = Solid::cube([1.0, 1.0, 1.0]).refine(2);
    assert_eq!(refined.num_vert(), 26);
    assert_eq!(refined.num_tri(), 48);
}

#[test]
fn test_refine_preserves_flat_geometry() {
    let cube = Solid::cube([2.0, 3.0, 4.0]);
    let refined = cube.refine(4);
    assert_relative_eq!(refined.volume(), 24.0, epsilon = 1e-9);
    assert_relative_eq!(refined.surface_area(), cube.surface_area(), epsilon = 1e-9);
    assert_eq!(refined.bounding_box(), cube.bounding_box());
}

#[test]
fn test_refine_interpolates_properties() {
    let cube = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(0, 60.0);
    let refined = cube.refine(2);
    let props = refined.properties.as_ref().expect("normals survive");
    assert_eq!(props.num_prop, 3);
    for (t, ptri) in props.tri_props.iter().enumerate() {
        let face = refined.face_normal(t);
        for &p in ptri {
            let v = props.get(p);
            assert_relative_eq!(Vec3::new(v[0], v[1], v[2]), face, epsilon = 1e-12);
        }
    }
    // a 3 x 3 grid of property vertices per face
    assert_eq!(refined.get_mesh_gl().num_vert(), 54);
}

#[test]
fn test_refine_samples_smooth_surface() {
    let sphere = Solid::sphere(1.0, 8);
    let exact = 4.0 / 3.0 * PI;
    let faceted = sphere.refine(4);
    let smooth = sphere.smooth_out(60.0, 0.0).refine(4);
    assert!(smooth.is_manifold());
    assert!(!smooth.is_smooth());
    assert!((smooth.volume() - exact).abs() < (faceted.volume() - exact).abs());
}

// =============================================================================
// ADAPTIVE REFINEMENT
// =============================================================================

#[test]
fn test_refine_to_length_bounds_edges() {
    let cube = Solid::cube([4.0, 1.0, 1.0]);
    let refined = cube.refine_to_length(1.0);
    assert!(longest_edge(&refined) <= 1.0 + 1e-12);
    assert!(refined.is_manifold());
    assert_relative_eq!(refined.volume(), 4.0, epsilon = 1e-9);
    assert_relative_eq!(refined.surface_area(), cube.surface_area(), epsilon = 1e-9);
}

#[test]
fn test_refine_to_length_leaves_short_edges() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    let refined = cube.refine_to_length(10.0);
    assert_eq!(refined.num_tri(), 12);
}

#[test]
fn test_refine_to_length_rejects_bad_limits() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    assert_eq!(cube.refine_to_length(0.0).num_tri(), 12);
    assert_eq!(cube.refine_to_length(-1.0).num_tri(), 12);
    assert_eq!(cube.refine_to_length(f64::NAN).num_tri(), 12);
}

#[test]
fn test_refine_to_length_carries_properties() {
    let cube = Solid::cube([2.0, 1.0, 1.0]).calculate_normals(0, 60.0);
    let refined = cube.refine_to_length(0.5);
    let props = refined.properties.as_ref().expect("normals survive");
    for (t, ptri) in props.tri_props.iter().enumerate() {
        let face = refined.face_normal(t);
        let v = props.get(ptri[0]);
        assert_relative_eq!(Vec3::new(v[0], v[1], v[2]), face, epsilon = 1e-12);
    }
}

#[test]
fn test_refine_to_tolerance_on_flat_solid_is_a_copy() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    assert_eq!(cube.refine_to_tolerance(1e-6).num_tri(), 12);
}

#[test]
fn test_refine_to_tolerance_tracks_curvature() {
    let smooth = Solid::sphere(1.0, 8).smooth_out(60.0, 0.0);
    let coarse = smooth.refine_to_tolerance(0.05);
    let fine = smooth.refine_to_tolerance(0.005);
    assert!(coarse.num_tri() > smooth.num_tri());
    assert!(fine.num_tri() > coarse.num_tri());
    assert!(fine.is_manifold());
}

#[test]
fn test_refine_to_tolerance_keeps_flat_faces_coarse() {
    // creases keep the faces flat, so nothing deviates
    let cube = Solid::cube([1.0, 1.0, 1.0]).smooth_out(60.0, 0.0);
    assert_eq!(cube.refine_to_tolerance(1e-3).num_tri(), 12);
}
