use approx::{assert_abs_diff_eq, assert_relative_eq};
use manifold_rs::{manifold_from_mesh, mesh_from_manifold, Manifold};

fn samples() -> Vec<Manifold> {
    let square: &[f64] = &[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
    vec![
        Manifold::tetrahedron(),
        Manifold::cube(1.0, 2.0, 3.0),
        Manifold::sphere(1.5, 16),
        Manifold::cylinder(1.0, 0.5, 2.0, 12),
        Manifold::cube(2.0, 2.0, 2.0).union(&Manifold::cube(2.0, 2.0, 2.0).translate(1.0, 1.0, 1.0)),
        Manifold::extrude(&[square], 2.0, 4, 30.0, 0.5, 0.5).unwrap(),
    ]
}

#[test]
fn mesh_round_trip_keeps_volume() {
    for s in samples() {
        let back = manifold_from_mesh(&mesh_from_manifold(&s));
        assert!(!back.is_empty());
        assert_relative_eq!(back.volume(), s.volume(), max_relative = 1e-5);
    }
}

#[test]
fn refine_one_keeps_triangle_count() {
    for s in samples() {
        assert_eq!(s.refine(1).num_tri(), s.num_tri());
    }
}

#[test]
fn refine_multiplies_triangles_by_n_squared() {
    for s in samples() {
        for n in 2..=4u32 {
            assert_eq!(s.refine(n).num_tri(), s.num_tri() * (n * n) as usize);
        }
    }
}

#[test]
fn self_intersection_is_identity() {
    for s in samples().into_iter().take(4) {
        assert_relative_eq!(s.intersection(&s).volume(), s.volume(), epsilon = 1e-9);
    }
}

#[test]
fn self_difference_is_empty() {
    for s in samples().into_iter().take(4) {
        assert!(s.difference(&s).is_empty());
    }
}

#[test]
fn union_with_collapsed_solid_is_identity() {
    let collapsed = Manifold::tetrahedron().scale(0.0, 0.0, 0.0);
    assert!(collapsed.is_empty());
    for s in samples() {
        let u = s.union(&collapsed);
        assert_eq!(u.num_tri(), s.num_tri());
        assert_relative_eq!(u.volume(), s.volume(), epsilon = 1e-12);
    }
}

#[test]
fn union_is_commutative() {
    let a = Manifold::cube(2.0, 2.0, 2.0);
    let b = Manifold::sphere(1.2, 12).translate(2.0, 1.0, 1.0);
    let (ab, ba) = (a.union(&b), b.union(&a));
    assert_relative_eq!(ab.volume(), ba.volume(), epsilon = 1e-9);
    assert_relative_eq!(ab.surface_area(), ba.surface_area(), epsilon = 1e-9);
    let (bb_ab, bb_ba) = (ab.bounding_box().unwrap(), ba.bounding_box().unwrap());
    assert_relative_eq!(bb_ab.min, bb_ba.min, epsilon = 1e-12);
    assert_relative_eq!(bb_ab.max, bb_ba.max, epsilon = 1e-12);
}

#[test]
fn translate_and_back_restores_vertices() {
    for s in samples() {
        let moved = s.translate(1.5, -2.25, 3.0).translate(-1.5, 2.25, -3.0);
        let (before, after) = (s.to_mesh(), moved.to_mesh());
        assert_eq!(after.indices(), before.indices());
        for (a, b) in after.vertices().iter().zip(before.vertices()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-5);
        }
    }
}

#[test]
fn operations_do_not_mutate_inputs() {
    let s = Manifold::sphere(1.0, 12);
    let before = s.to_mesh();
    let _ = s.translate(1.0, 0.0, 0.0);
    let _ = s.refine(2);
    let _ = s.smooth_out(60.0, 0.5);
    let _ = s.hull();
    let _ = s.slice(0.0);
    assert_eq!(s.to_mesh(), before);
}
