// Integration tests for the shape generators

use approx::assert_relative_eq;
use lab_core::Validate;
use lab_math::DVec3;
use lab_mesh::*;

const EPSILON: f64 = 1e-9;

fn assert_well_formed(mesh: &MeshData) {
    assert_eq!(mesh.indices().len() % 3, 0);
    let n = mesh.vertex_count() as u32;
    for &idx in mesh.indices() {
        assert!(idx < n, "index {} out of bounds (n={})", idx, n);
    }
    mesh.validate().unwrap();
}

#[test]
fn every_generator_is_well_formed() {
    let meshes = vec![
        create_plane(1.0, 1.0).unwrap(),
        create_cube(1.0, 2.0, 3.0).unwrap(),
        create_cylinder(1, 1.0, 1.0).unwrap(),
        create_cylinder(17, 3.0, 0.25).unwrap(),
        create_sphere(1, 2, 1.0).unwrap(),
        create_sphere(13, 7, 4.0).unwrap(),
        create_terrain_grid(2, 2).unwrap(),
        create_terrain_grid(33, 9).unwrap(),
    ];
    for mesh in &meshes {
        assert_well_formed(mesh);
    }
}

#[test]
fn plane_counts_do_not_depend_on_size() {
    for (w, d) in [(0.1, 0.1), (2.0, 4.0), (1000.0, 3.0)] {
        let mesh = create_plane(w, d).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices().len(), 12);

        let bb = mesh.bounding_box().unwrap();
        assert_eq!(bb.min, DVec3::new(-w / 2.0, 0.0, -d / 2.0));
        assert_eq!(bb.max, DVec3::new(w / 2.0, 0.0, d / 2.0));
    }
}

#[test]
fn cube_bounding_box_is_exact() {
    let (w, h, d) = (1.5, 2.0, 0.5);
    let mesh = create_cube(w, h, d).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices().len(), 36);

    let bb = mesh.bounding_box().unwrap();
    assert_eq!(bb.min, DVec3::new(-w / 2.0, -h / 2.0, -d / 2.0));
    assert_eq!(bb.max, DVec3::new(w / 2.0, h / 2.0, d / 2.0));
}

#[test]
fn cylinder_ring_vertices_lie_on_radius() {
    let (segments, height, radius) = (24, 3.0, 0.75);
    let mesh = create_cylinder(segments, height, radius).unwrap();
    assert_eq!(mesh.vertex_count(), 2 + 4 * segments as usize);
    assert_eq!(mesh.indices().len(), 12 * segments as usize);

    for p in &mesh.positions()[2..] {
        assert_relative_eq!((p.x * p.x + p.z * p.z).sqrt(), radius, epsilon = EPSILON);
        assert!(p.y == -height / 2.0 || p.y == height / 2.0, "y = {}", p.y);
    }
    assert_eq!(mesh.positions()[0], DVec3::new(0.0, -height / 2.0, 0.0));
    assert_eq!(mesh.positions()[1], DVec3::new(0.0, height / 2.0, 0.0));
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let (lon, lat, radius) = (20, 11, 2.5);
    let mesh = create_sphere(lon, lat, radius).unwrap();
    assert_eq!(mesh.vertex_count(), 2 + (lon * (lat - 1)) as usize);
    assert_eq!(mesh.triangle_count(), 2 * lon as usize * (lat as usize - 1));

    for p in mesh.positions() {
        assert_relative_eq!(p.length(), radius, epsilon = EPSILON);
    }
}

#[test]
fn seam_wraparound_has_no_off_by_one() {
    for n in 1..40 {
        for next in [n, n + 1] {
            assert_well_formed(&create_cylinder(next, 1.0, 1.0).unwrap());
            assert_well_formed(&create_sphere(next, 2 + next % 5, 1.0).unwrap());
        }
    }
}

#[test]
fn sphere_rings_close_onto_first_vertex() {
    let lon = 8;
    let mesh = create_sphere(lon, 4, 1.0).unwrap();
    // The north fan's last triangle reaches back to ring 1, vertex 0.
    let last_fan = &mesh.indices()[6 * (lon as usize - 1)..6 * (lon as usize - 1) + 3];
    assert_eq!(last_fan, &[0, 2, 2 + lon - 1]);
}

#[test]
fn generators_are_deterministic() {
    assert_eq!(create_sphere(9, 5, 1.0).unwrap(), create_sphere(9, 5, 1.0).unwrap());
    assert_eq!(create_cylinder(7, 2.0, 1.0).unwrap(), create_cylinder(7, 2.0, 1.0).unwrap());
}

#[test]
fn merged_primitives_stay_valid() {
    let mut mesh = create_cube(1.0, 1.0, 1.0).unwrap();
    mesh.merge(&create_sphere(8, 6, 0.5).unwrap()).unwrap();
    mesh.merge(&create_terrain_grid(4, 4).unwrap()).unwrap();
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertex_count(), 24 + (2 + 8 * 5) + 16);
}
