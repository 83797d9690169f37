use glam::Vec3;
use grid_core::*;

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
    for v in &mesh.vertices {
        let len = Vec3::from_array(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4);
    }
}

// Counter-clockwise winding seen from outside: face normal agrees with the vertex normal.
fn assert_outward_winding(mesh: &MeshData) {
    for tri in mesh.indices.chunks(3) {
        let p = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);
        let face = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
        assert!(face.dot(n) > 0.0, "triangle {:?} winds inward", tri);
    }
}

#[test]
fn all_shape_meshes_are_well_formed() {
    for kind in ShapeKind::ALL {
        let mesh = kind.build_mesh();
        assert_well_formed(&mesh);
        assert!(mesh.triangle_count() > 0, "{:?}", kind);
    }
}

#[test]
fn box_is_centred_and_outward_facing() {
    let mesh = ShapeKind::Box.build_mesh();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    let (lo, hi) = mesh.bounds();
    assert!((lo - Vec3::splat(-0.25)).length() < 1e-6);
    assert!((hi - Vec3::splat(0.25)).length() < 1e-6);
    assert_outward_winding(&mesh);
}

#[test]
fn cone_stands_on_its_base() {
    let mesh = ShapeKind::Cone.build_mesh();
    let (lo, hi) = mesh.bounds();
    assert!((lo.y + 0.25).abs() < 1e-6);
    assert!((hi.y - 0.25).abs() < 1e-6);
    assert!(hi.x <= 0.3 + 1e-5 && lo.x >= -0.3 - 1e-5);
    assert_outward_winding(&mesh);
}

#[test]
fn torus_lies_in_xy_plane() {
    let mesh = ShapeKind::Torus.build_mesh();
    let (lo, hi) = mesh.bounds();
    assert!((hi.x - 0.42).abs() < 1e-4);
    assert!((hi.y - 0.42).abs() < 1e-3);
    assert!((hi.z - 0.12).abs() < 1e-3);
    assert!((lo.z + 0.12).abs() < 1e-3);
}

#[test]
fn default_pool_covers_every_kind() {
    let pool = default_shape_pool();
    let kinds: Vec<ShapeKind> = pool.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, ShapeKind::ALL.to_vec());
    for (i, kind) in ShapeKind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn floor_plane_faces_up_at_ground_level() {
    let mesh = grid_core::mesh::build_plane(100.0);
    assert_well_formed(&mesh);
    assert_eq!(mesh.triangle_count(), 2);
    let (lo, hi) = mesh.bounds();
    assert_eq!(lo, Vec3::new(-50.0, 0.0, -50.0));
    assert_eq!(hi, Vec3::new(50.0, 0.0, 50.0));
    assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    assert_outward_winding(&mesh);
}
