//! Tests for the solid representation and mesh exchange.

use approx::assert_relative_eq;

use super::*;
use crate::error::KernelError;

fn lone_triangle() -> MeshGL {
    MeshGL {
        num_prop: 3,
        vert_properties: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        tri_verts: vec![0, 1, 2],
    }
}

// =============================================================================
// MESH EXCHANGE
// =============================================================================

#[test]
fn test_mesh_round_trip_keeps_volume() {
    let sphere = Solid::sphere(2.0, 16);
    let back = Solid::from_mesh_gl(&sphere.get_mesh_gl()).unwrap();
    assert_eq!(back.num_vert(), sphere.num_vert());
    assert_eq!(back.num_tri(), sphere.num_tri());
    assert_relative_eq!(back.volume(), sphere.volume(), max_relative = 1e-6);
}

#[test]
fn test_import_welds_split_seams() {
    // every face of the cube carries its own four vertices
    let mesh = Solid::cube([1.0, 1.0, 1.0]).calculate_normals(0, 60.0).get_mesh_gl();
    assert_eq!(mesh.num_vert(), 24);
    let solid = Solid::from_mesh_gl(&mesh).unwrap();
    assert_eq!(solid.num_vert(), 8);
    assert_eq!(solid.num_prop(), 3);
    assert!(solid.is_manifold());
    assert_eq!(solid.get_mesh_gl().num_vert(), 24);
}

#[test]
fn test_import_rejects_open_mesh() {
    match Solid::from_mesh_gl(&lone_triangle()) {
        Err(KernelError::NotManifold { open_edges, overused_edges }) => {
            assert_eq!(open_edges, 3);
            assert_eq!(overused_edges, 0);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_import_rejects_bad_indices() {
    let mut mesh = lone_triangle();
    mesh.tri_verts[2] = 7;
    assert_eq!(
        Solid::from_mesh_gl(&mesh).unwrap_err(),
        KernelError::IndexOutOfRange { index: 7, num_vert: 3 }
    );
}

#[test]
fn test_import_rejects_short_vertices() {
    let mut mesh = lone_triangle();
    mesh.num_prop = 2;
    assert_eq!(Solid::from_mesh_gl(&mesh).unwrap_err(), KernelError::PropertyCount(2));
}

#[test]
fn test_import_of_nothing_is_empty() {
    let solid = Solid::from_mesh_gl(&MeshGL {
        num_prop: 3,
        ..MeshGL::default()
    })
    .unwrap();
    assert!(solid.is_empty());
}

// =============================================================================
// QUERIES AND CLEANUP
// =============================================================================

#[test]
fn test_empty_solid_queries() {
    let empty = Solid::empty();
    assert!(empty.is_empty());
    assert!(empty.is_manifold());
    assert_eq!(empty.volume(), 0.0);
    assert_eq!(empty.bounding_box(), None);
    assert_eq!(empty.get_mesh_gl().num_vert(), 0);
}

#[test]
fn test_compact_drops_degenerate_triangles_and_orphans() {
    let mut cube = Solid::cube([1.0, 1.0, 1.0]);
    cube.vert_pos.push(Vec3::splat(9.0));
    cube.tri_verts.push([0, 0, 1]);
    let cleaned = cube.compact();
    assert_eq!(cleaned.num_vert(), 8);
    assert_eq!(cleaned.num_tri(), 12);
}

#[test]
fn test_flip_winding_negates_volume() {
    let mut cube = Solid::cube([1.0, 2.0, 3.0]).calculate_normals(0, 60.0);
    let corner_props = cube.properties.as_ref().map(|p| p.tri_props[0]);
    cube.flip_winding();
    assert_relative_eq!(cube.volume(), -6.0, epsilon = 1e-12);
    assert!(cube.is_manifold());
    let flipped = cube.properties.as_ref().map(|p| p.tri_props[0]);
    assert_eq!(flipped, corner_props.map(|[a, b, c]| [a, c, b]));
}

#[test]
fn test_surface_area_of_box() {
    let cube = Solid::cube([1.0, 2.0, 3.0]);
    assert_relative_eq!(cube.surface_area(), 22.0, epsilon = 1e-12);
}
