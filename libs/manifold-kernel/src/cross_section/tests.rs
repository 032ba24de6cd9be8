//! Tests for slicing, projection and sweeps.

use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;

use super::*;
use crate::config::KernelConfig;
use crate::Solid;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Vec2> {
    vec![
        Vec2::new(x0, y0),
        Vec2::new(x1, y0),
        Vec2::new(x1, y1),
        Vec2::new(x0, y1),
    ]
}

fn section(rings: Vec<Vec<Vec2>>) -> CrossSection {
    CrossSection::new(rings)
}

/// Area of a regular `n`-gon inscribed in a circle of radius `r`.
fn polygon_area(n: usize, r: f64) -> f64 {
    0.5 * n as f64 * r * r * (TAU / n as f64).sin()
}

// =============================================================================
// SLICE
// =============================================================================

#[test]
fn test_cube_slice_is_one_square() {
    let slice = Solid::cube([1.0, 1.0, 1.0]).slice(0.5);
    assert_eq!(slice.num_rings(), 1);
    let ring = &slice.rings()[0];
    assert_eq!(ring.len(), 4);
    for p in ring {
        assert!(p.x == 0.0 || p.x == 1.0);
        assert!(p.y == 0.0 || p.y == 1.0);
    }
    assert_relative_eq!(slice.area(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_slice_plane_on_a_face_counts_it_as_above() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    assert!(cube.slice(0.0).is_empty());
    let top = cube.slice(1.0);
    assert_eq!(top.num_rings(), 1);
    assert_relative_eq!(top.area(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_slice_and_project_of_a_scaled_solid() {
    let block = Solid::cube([1.0, 1.0, 1.0]).scale([2.0, 3.0, 4.0]);
    let slice = block.slice(2.0);
    assert_eq!(slice.num_rings(), 1);
    assert_relative_eq!(slice.area(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(block.project().area(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_slice_missing_the_solid_is_empty() {
    let cube = Solid::cube([1.0, 1.0, 1.0]);
    assert!(cube.slice(2.0).is_empty());
    assert!(cube.slice(-0.5).is_empty());
    assert!(cube.slice(f64::NAN).is_empty());
    assert!(Solid::empty().slice(0.0).is_empty());
}

#[test]
fn test_slice_through_cavity_has_a_hole() {
    let cavity = Solid::cube([1.0, 1.0, 1.0]).translate([1.0, 1.0, 1.0]);
    let hollow = Solid::cube([3.0, 3.0, 3.0]).difference(&cavity);
    let slice = hollow.slice(1.5);
    assert_eq!(slice.num_rings(), 2);
    assert_relative_eq!(slice.area(), 8.0, epsilon = 1e-9);
    let areas: Vec<f64> = slice.rings().iter().map(|r| rings::signed_area(r)).collect();
    assert!(areas.iter().any(|&a| a > 0.0));
    assert!(areas.iter().any(|&a| a < 0.0));
}

#[test]
fn test_sphere_slice_is_inside_the_circle() {
    let slice = Solid::sphere(1.0, 24).slice(0.1);
    assert_eq!(slice.num_rings(), 1);
    let area = slice.area();
    assert!(area > 0.9 * PI * 0.99, "area {area}");
    assert!(area < PI * 0.99, "area {area}");
}

// =============================================================================
// PROJECT
// =============================================================================

#[test]
fn test_cube_projects_to_its_footprint() {
    let shadow = Solid::cube([2.0, 3.0, 1.0]).translate([1.0, 0.0, 5.0]).project();
    assert_eq!(shadow.num_rings(), 1);
    assert_eq!(shadow.rings()[0].len(), 4);
    assert_relative_eq!(shadow.area(), 6.0, epsilon = 1e-9);
    for p in &shadow.rings()[0] {
        assert!((1.0 - 1e-9..=3.0 + 1e-9).contains(&p.x));
        assert!((-1e-9..=3.0 + 1e-9).contains(&p.y));
    }
}

#[test]
fn test_projection_of_separate_parts_has_two_rings() {
    let a = Solid::cube([1.0, 1.0, 1.0]);
    let b = Solid::cube([1.0, 1.0, 1.0]).translate([3.0, 0.0, 2.0]);
    let shadow = a.union(&b).project();
    assert_eq!(shadow.num_rings(), 2);
    assert_relative_eq!(shadow.area(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_project_of_empty_is_empty() {
    assert!(Solid::empty().project().is_empty());
}

// =============================================================================
// EXTRUDE
// =============================================================================

#[test]
fn test_extrude_square_is_a_box() {
    let prism = section(vec![rect(0.0, 0.0, 2.0, 2.0)])
        .extrude(3.0, 1, 0.0, [1.0, 1.0])
        .unwrap();
    assert_eq!(prism.num_vert(), 8);
    assert_eq!(prism.num_tri(), 12);
    assert!(prism.is_manifold());
    assert_relative_eq!(prism.volume(), 12.0, epsilon = 1e-12);
    let bb = prism.bounding_box().unwrap();
    assert_eq!(bb.max.z, 3.0);
}

#[test]
fn test_extrude_keeps_holes() {
    let mut hole = rect(1.0, 1.0, 2.0, 2.0);
    hole.reverse();
    let tube = section(vec![rect(0.0, 0.0, 3.0, 3.0), hole])
        .extrude(2.0, 1, 0.0, [1.0, 1.0])
        .unwrap();
    assert!(tube.is_manifold());
    assert_relative_eq!(tube.volume(), 16.0, epsilon = 1e-12);
}

#[test]
fn test_extrude_divisions_add_layers() {
    let prism = section(vec![rect(0.0, 0.0, 1.0, 1.0)])
        .extrude(1.0, 4, 0.0, [1.0, 1.0])
        .unwrap();
    // 4 sides x 4 layers x 2 plus 2 triangles per cap
    assert_eq!(prism.num_tri(), 36);
    assert_relative_eq!(prism.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_extrude_to_apex_is_a_pyramid() {
    let pyramid = section(vec![rect(0.0, 0.0, 2.0, 2.0)])
        .extrude(3.0, 1, 0.0, [0.0, 0.0])
        .unwrap();
    assert_eq!(pyramid.num_vert(), 5);
    assert!(pyramid.is_manifold());
    assert_relative_eq!(pyramid.volume(), 4.0, epsilon = 1e-12);
}

#[test]
fn test_extrude_taper_is_a_frustum() {
    let frustum = section(vec![rect(-1.0, -1.0, 1.0, 1.0)])
        .extrude(3.0, 1, 0.0, [2.0, 2.0])
        .unwrap();
    // h / 3 * (A + 4A + 2A)
    assert_relative_eq!(frustum.volume(), 7.0 * 4.0 * 3.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_twist_turns_the_top() {
    let twisted = section(vec![rect(-1.0, -1.0, 1.0, 1.0)])
        .extrude(4.0, 10, 45.0, [1.0, 1.0])
        .unwrap();
    assert!(twisted.is_manifold());
    assert_relative_eq!(twisted.volume(), 16.0, max_relative = 0.02);
    // the corner at (1, -1) ends up on the X axis
    let bb = twisted.bounding_box().unwrap();
    assert_relative_eq!(bb.max.x, 2.0f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_extrude_twist_direction_does_not_change_volume() {
    let square = section(vec![rect(-1.0, -1.0, 1.0, 1.0)]);
    let left = square.extrude(4.0, 10, 45.0, [1.0, 1.0]).unwrap();
    let right = square.extrude(4.0, 10, -45.0, [1.0, 1.0]).unwrap();
    assert!(right.is_manifold());
    assert_relative_eq!(left.volume(), right.volume(), max_relative = 1e-9);
    // only the chords between layers cut material away
    assert!(left.volume() < 16.0);
    assert_relative_eq!(left.volume(), 16.0, max_relative = 0.005);
}

#[test]
fn test_extrude_degenerate_input_is_empty() {
    let square = section(vec![rect(0.0, 0.0, 1.0, 1.0)]);
    assert!(CrossSection::empty().extrude(1.0, 1, 0.0, [1.0, 1.0]).unwrap().is_empty());
    assert!(square.extrude(0.0, 1, 0.0, [1.0, 1.0]).unwrap().is_empty());
    assert!(square.extrude(-1.0, 1, 0.0, [1.0, 1.0]).unwrap().is_empty());
    assert!(square.extrude(f64::NAN, 1, 0.0, [1.0, 1.0]).unwrap().is_empty());
    let flat = section(vec![vec![Vec2::ZERO, Vec2::X, Vec2::new(2.0, 0.0)]]);
    assert!(flat.extrude(1.0, 1, 0.0, [1.0, 1.0]).unwrap().is_empty());
}

#[test]
fn test_extrude_reverses_clockwise_input() {
    let mut ring = rect(0.0, 0.0, 1.0, 2.0);
    ring.reverse();
    let prism = section(vec![ring]).extrude(1.0, 1, 0.0, [1.0, 1.0]).unwrap();
    assert!(prism.is_manifold());
    assert_relative_eq!(prism.volume(), 2.0, epsilon = 1e-12);
}

// =============================================================================
// REVOLVE
// =============================================================================

#[test]
fn test_revolve_annulus_volume() {
    let n = 16;
    let ring = section(vec![rect(1.0, 0.0, 2.0, 1.0)]);
    let solid = ring.revolve(n as u32, 360.0).unwrap();
    assert!(solid.is_manifold());
    let expected = polygon_area(n, 2.0) - polygon_area(n, 1.0);
    assert_relative_eq!(solid.volume(), expected, epsilon = 1e-9);
}

#[test]
fn test_revolve_touching_axis_closes_in_fans() {
    let solid = section(vec![rect(0.0, 0.0, 1.0, 2.0)]).revolve(12, 360.0).unwrap();
    assert!(solid.is_manifold());
    // 12 rim vertices top and bottom plus two on the axis
    assert_eq!(solid.num_vert(), 26);
    assert_relative_eq!(solid.volume(), 2.0 * polygon_area(12, 1.0), epsilon = 1e-9);
}

#[test]
fn test_partial_revolve_is_capped() {
    let solid = section(vec![rect(0.0, 0.0, 1.0, 1.0)]).revolve(16, 180.0).unwrap();
    assert!(solid.is_manifold());
    assert_relative_eq!(solid.volume(), 0.5 * polygon_area(16, 1.0), epsilon = 1e-9);
    let bb = solid.bounding_box().unwrap();
    assert_relative_eq!(bb.min.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(bb.min.x, -1.0, epsilon = 1e-12);
}

#[test]
fn test_partial_revolve_off_axis() {
    let solid = section(vec![rect(1.0, 0.0, 2.0, 1.0)]).revolve(8, 90.0).unwrap();
    assert!(solid.is_manifold());
    let expected = (polygon_area(8, 2.0) - polygon_area(8, 1.0)) / 4.0;
    assert_relative_eq!(solid.volume(), expected, epsilon = 1e-9);
}

#[test]
fn test_revolve_clips_material_across_axis() {
    let crossing = section(vec![rect(-1.0, 0.0, 1.0, 1.0)]).revolve(12, 360.0).unwrap();
    let right_half = section(vec![rect(0.0, 0.0, 1.0, 1.0)]).revolve(12, 360.0).unwrap();
    assert!(crossing.is_manifold());
    assert_relative_eq!(crossing.volume(), right_half.volume(), epsilon = 1e-9);
    assert_relative_eq!(crossing.volume(), polygon_area(12, 1.0), epsilon = 1e-9);
}

#[test]
fn test_revolve_zero_segments_picks_a_count() {
    let ring = section(vec![rect(1.0, 0.0, 5.0, 1.0)]);
    let auto = ring.revolve(0, 360.0).unwrap();
    let n = KernelConfig::default().circular_segments(0, 5.0);
    let explicit = ring.revolve(n, 360.0).unwrap();
    assert!(n >= 3);
    assert_eq!(auto.num_tri(), explicit.num_tri());
    assert_relative_eq!(auto.volume(), explicit.volume(), epsilon = 1e-12);
}

#[test]
fn test_revolve_degenerate_input_is_empty() {
    let square = section(vec![rect(0.0, 0.0, 1.0, 1.0)]);
    assert!(square.revolve(12, 0.0).unwrap().is_empty());
    assert!(square.revolve(12, -90.0).unwrap().is_empty());
    assert!(square.revolve(12, f64::NAN).unwrap().is_empty());
    assert!(CrossSection::empty().revolve(12, 360.0).unwrap().is_empty());
    let left = section(vec![rect(-2.0, 0.0, -1.0, 1.0)]);
    assert!(left.revolve(12, 360.0).unwrap().is_empty());
}
