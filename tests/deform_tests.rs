// Host-side tests for pointer-driven cell deformation.

use glam::Vec3;
use grid_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn single_cell() -> GridGroup {
    let engine = GridLayoutEngine::new(vec![ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 0.0)]);
    let config = GridConfig::new(1, 1, 5.0, LayoutMode::Rectangular);
    engine.layout(&config, &mut StdRng::seed_from_u64(1)).unwrap()
}

fn run(deformer: &CellDeformer, group: &mut GridGroup, hit: Option<IntersectionPoint>, secs: f32) {
    let offset = group.offset;
    let frames = (secs / DT).ceil() as usize;
    for _ in 0..frames {
        deformer.update(group.cells_mut(), offset, hit, DT);
    }
}

#[test]
fn target_height_follows_falloff() {
    let p = DeformParams::default();
    assert!((p.target_height(0.0) - 8.0).abs() < 1e-6);
    assert!((p.target_height(3.0) - 4.0).abs() < 1e-6);
    // below the floor the height is held at the minimum
    assert_eq!(p.target_height(6.0), 1.0);
    assert_eq!(p.target_height(100.0), 1.0);
}

#[test]
fn target_scale_never_shrinks_below_one() {
    let p = DeformParams::default();
    assert!((p.target_scale(8.0) - 8.0 / 1.2).abs() < 1e-5);
    assert_eq!(p.target_scale(1.0), 1.0);
    assert_eq!(p.target_scale(0.0), 1.0);
}

#[test]
fn target_rotation_interpolates_rest_to_initial() {
    let p = DeformParams::default();
    let initial = Vec3::new(0.1, 0.2, 0.3);
    let at_top = p.target_rotation(1.0, initial);
    assert!((at_top - initial).length() < 1e-6);
    let at_bottom = p.target_rotation(-1.0, initial);
    assert!((at_bottom - p.rest_rotation).length() < 1e-5);
}

#[test]
fn cell_under_pointer_rises_to_peak() {
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();
    let mut group = single_cell();
    let hit = Some(IntersectionPoint { x: 0.0, z: 0.0 });
    run(&deformer, &mut group, hit, 3.0);

    let c = &group.cells()[0];
    assert!((c.current_position.y - 8.0).abs() < 1e-3, "y={}", c.current_position.y);
    assert!((c.current_scale.x - 8.0 / 1.2).abs() < 1e-3, "s={}", c.current_scale.x);
    assert_eq!(c.current_scale.x, c.current_scale.y);
    assert_eq!(c.current_scale.x, c.current_scale.z);

    // height 8 maps past the initial rotation: rest + 4.5 * (initial - rest)
    let expected = DeformParams::default().rest_rotation * -3.5;
    assert!((c.current_rotation - expected).length() < 1e-3, "{:?}", c.current_rotation);
    assert!(!c.is_animating());
}

#[test]
fn distant_cell_settles_at_min_height() {
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();
    let mut group = single_cell();
    let hit = Some(IntersectionPoint { x: 100.0, z: 0.0 });
    run(&deformer, &mut group, hit, 3.0);

    let c = &group.cells()[0];
    assert!((c.current_position.y - 1.0).abs() < 1e-3);
    assert!((c.current_scale.x - 1.0).abs() < 1e-3);
}

#[test]
fn no_intersection_leaves_fresh_cells_alone() {
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();
    let mut group = single_cell();
    let before = group.cells()[0].clone();
    run(&deformer, &mut group, None, 1.0);

    let c = &group.cells()[0];
    assert_eq!(c.current_position, before.current_position);
    assert_eq!(c.current_scale, before.current_scale);
    assert_eq!(c.current_rotation, before.current_rotation);
    assert!(!c.is_animating());
}

#[test]
fn running_animations_finish_without_intersection() {
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();
    let mut group = single_cell();
    let offset = group.offset;
    let hit = Some(IntersectionPoint { x: 0.0, z: 0.0 });
    deformer.update(group.cells_mut(), offset, hit, 0.1);
    let mid = group.cells()[0].current_position.y;
    assert!(mid > 0.0 && mid < 8.0);

    run(&deformer, &mut group, None, 1.0);
    let c = &group.cells()[0];
    assert!((c.current_position.y - 8.0).abs() < 1e-4);
    assert!(!c.is_animating());
}

#[test]
fn new_target_restarts_from_current_height() {
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();
    let mut group = single_cell();
    let offset = group.offset;
    deformer.update(
        group.cells_mut(),
        offset,
        Some(IntersectionPoint { x: 0.0, z: 0.0 }),
        0.1,
    );
    let y = group.cells()[0].current_position.y;

    // pointer jumps away: the new tween begins where the cell is now
    deformer.update(
        group.cells_mut(),
        offset,
        Some(IntersectionPoint { x: 50.0, z: 50.0 }),
        0.0,
    );
    let c = &group.cells()[0];
    let t = c.tweens.position_y.unwrap();
    assert_eq!(t.start, y);
    assert_eq!(t.target, 1.0);
    assert_eq!(c.current_position.y, y);
}

#[test]
fn held_pointer_restarts_tween_each_frame() {
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();
    let mut group = single_cell();
    let offset = group.offset;
    let hit = Some(IntersectionPoint { x: 0.0, z: 0.0 });

    let mut prev = group.cells()[0].current_position.y;
    for _ in 0..18 {
        deformer.update(group.cells_mut(), offset, hit, DT);
        let c = &group.cells()[0];
        let t = c.tweens.position_y.unwrap();
        assert_eq!(t.start, prev);
        assert_eq!(t.target, 8.0);
        prev = c.current_position.y;
    }

    // one tween duration has passed, yet the cell is still short of the peak
    assert!(prev > 6.9 && prev < 7.05, "y={}", prev);
    assert!(group.cells()[0].is_animating());
}

#[test]
fn distance_uses_world_position() {
    let engine = GridLayoutEngine::new(vec![ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 0.0)]);
    let config = GridConfig::new(1, 3, 5.0, LayoutMode::Rectangular);
    let mut group = engine.layout(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let deformer = CellDeformer::new(DeformParams::default()).unwrap();

    // the middle cell sits on the origin once the group is centred
    let hit = Some(IntersectionPoint { x: 0.0, z: 0.0 });
    run(&deformer, &mut group, hit, 3.0);
    let ys: Vec<f32> = group.cells().iter().map(|c| c.current_position.y).collect();
    assert!((ys[1] - 8.0).abs() < 1e-3);
    assert!((ys[0] - 1.0).abs() < 1e-3);
    assert!((ys[2] - 1.0).abs() < 1e-3);
}

#[test]
fn soft_preset_is_valid_and_gentler() {
    let soft = DeformParams::soft();
    assert!(CellDeformer::new(soft.clone()).is_ok());
    assert!(soft.target_height(0.0) < DeformParams::default().target_height(0.0));
    assert!(soft.target_scale(6.0) < DeformParams::default().target_scale(6.0));
}

#[test]
fn invalid_scale_divisor_is_rejected() {
    for div in [0.0, -1.0, f32::NAN] {
        let params = DeformParams {
            scale_divisor: div,
            ..DeformParams::default()
        };
        assert!(matches!(
            CellDeformer::new(params),
            Err(GridError::InvalidScaleDivisor(_))
        ));
    }
}
