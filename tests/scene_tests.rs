// Host-side tests for the frame-level scene controller.

use grid_core::*;
use instant::Instant;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn scene(width: u32, height: u32) -> SceneState {
    SceneState::new(
        SceneConfig::default(),
        Viewport::new(width, height),
        default_shape_pool(),
    )
    .unwrap()
}

fn crossed_count(rows: u32, cols: u32) -> usize {
    GridConfig::new(rows, cols, DEFAULT_GUTTER, LayoutMode::Crossed).cell_count()
}

#[test]
fn fits_grid_to_viewport() {
    let s = scene(1600, 900);
    let cfg = s.grid_config();
    assert_eq!((cfg.rows, cfg.cols), (4, 8));
    assert_eq!(s.grid().len(), crossed_count(4, 8));
    assert_eq!(s.generation(), 1);
    assert_eq!(s.instances().len(), s.grid().len());
}

#[test]
fn fixed_sizing_ignores_viewport() {
    let config = SceneConfig {
        sizing: GridSizing::Fixed { rows: 8, cols: 4 },
        ..SceneConfig::default()
    };
    let s = SceneState::new(config, Viewport::new(300, 2000), default_shape_pool()).unwrap();
    assert_eq!(s.grid().len(), 28);
}

#[test]
fn resize_rebuilds_after_debounce_window() {
    let mut s = scene(1600, 900);
    let t0 = Instant::now();
    s.request_resize(900, 1600, t0);

    let stats = s.tick(t0 + FRAME, FRAME).unwrap();
    assert!(!stats.rebuilt);
    assert!(s.resize_pending());
    assert_eq!(s.generation(), 1);
    assert_eq!(s.grid().len(), crossed_count(4, 8));

    let stats = s.tick(t0 + Duration::from_millis(200), FRAME).unwrap();
    assert!(stats.rebuilt);
    assert!(!s.resize_pending());
    assert_eq!(s.viewport(), Viewport::new(900, 1600));
    assert_eq!(s.generation(), 2);

    // portrait: 22.9 x 12.9 world units visible
    let cfg = s.grid_config();
    assert_eq!((cfg.rows, cfg.cols), (4, 2));
    assert_eq!(s.grid().len(), crossed_count(4, 2));
    assert!((s.camera().aspect - 900.0 / 1600.0).abs() < 1e-6);
}

#[test]
fn camera_aspect_follows_resize_immediately() {
    let mut s = scene(1600, 900);
    let t0 = Instant::now();
    s.request_resize(900, 1600, t0);
    assert_eq!(s.viewport(), Viewport::new(900, 1600));
    assert!((s.camera().aspect - 0.5625).abs() < 1e-6);

    // frames inside the debounce window keep the new aspect and the old grid
    for i in 1..=8 {
        let stats = s.tick(t0 + FRAME * i, FRAME).unwrap();
        assert!(!stats.rebuilt);
        assert!((s.camera().aspect - 0.5625).abs() < 1e-6);
    }
    assert_eq!(s.generation(), 1);
}

#[test]
fn resize_burst_rebuilds_once_with_last_size() {
    let mut s = scene(1600, 900);
    let t0 = Instant::now();
    s.request_resize(800, 800, t0);
    s.request_resize(1000, 1000, t0 + Duration::from_millis(50));
    s.request_resize(1600, 900, t0 + Duration::from_millis(100));

    assert!(!s.tick(t0 + Duration::from_millis(200), FRAME).unwrap().rebuilt);
    assert!(s.tick(t0 + Duration::from_millis(260), FRAME).unwrap().rebuilt);
    assert!(!s.tick(t0 + Duration::from_millis(400), FRAME).unwrap().rebuilt);
    assert_eq!(s.generation(), 2);
    assert_eq!(s.grid().len(), crossed_count(4, 8));
}

#[test]
fn rebuild_discards_animation_state() {
    let mut s = scene(1600, 900);
    let t0 = Instant::now();
    s.set_pointer(PointerState { x: 0.0, y: 0.0 });
    let stats = s.tick(t0, FRAME).unwrap();
    assert!(stats.intersection.is_some());
    assert!(stats.animating > 0);

    s.reshuffle().unwrap();
    assert!(s.grid().cells().iter().all(|c| !c.is_animating()));
    assert!(s.grid().cells().iter().all(|c| c.current_position.y == 0.0));
}

#[test]
fn pointer_at_centre_raises_nearby_cells() {
    let mut s = scene(1600, 900);
    let t0 = Instant::now();
    s.set_pointer(PointerState { x: 0.0, y: 0.0 });
    for i in 0..120 {
        s.tick(t0 + FRAME * i, FRAME).unwrap();
    }
    let grid = s.grid();
    let highest = grid
        .cells()
        .iter()
        .map(|c| c.current_position.y)
        .fold(f32::MIN, f32::max);
    assert!(highest > 1.0);
    assert!(grid.cells().iter().all(|c| c.current_position.y >= 1.0 - 1e-3));
}

#[test]
fn touch_end_resets_pointer_to_origin() {
    let mut s = scene(1600, 900);
    s.set_pointer(PointerState { x: 0.2, y: -0.4 });
    s.reset_pointer();
    assert_eq!(s.pointer(), PointerState { x: -1.0, y: 1.0 });
    // origin still projects onto the floor, so it keeps steering cells
    let stats = s.tick(Instant::now(), FRAME).unwrap();
    assert!(stats.intersection.is_some());
}

#[test]
fn layout_switch_rebuilds() {
    let mut s = scene(1600, 900);
    s.set_layout(LayoutMode::Crossed).unwrap();
    assert_eq!(s.generation(), 1);

    s.set_layout(LayoutMode::Rectangular).unwrap();
    assert_eq!(s.generation(), 2);
    assert_eq!(s.grid().len(), 32);
    assert_eq!(s.grid().config.layout, LayoutMode::Rectangular);
}

#[test]
fn gutter_change_resizes_grid() {
    let mut s = scene(1600, 900);
    s.set_gutter(2.5).unwrap();
    let cfg = s.grid_config();
    assert_eq!((cfg.rows, cfg.cols), (9, 16));
    assert_eq!(s.grid().len(), crossed_count(9, 16));
}

#[test]
fn invalid_gutter_keeps_previous_grid() {
    let mut s = scene(1600, 900);
    let before = s.grid().len();
    assert!(matches!(s.set_gutter(-1.0), Err(GridError::InvalidGutter(_))));
    assert_eq!(s.config().gutter, DEFAULT_GUTTER);
    assert_eq!(s.generation(), 1);
    assert_eq!(s.grid().len(), before);
}

#[test]
fn empty_pool_fails_setup() {
    let res = SceneState::new(SceneConfig::default(), Viewport::new(800, 600), Vec::new());
    assert!(matches!(res, Err(GridError::EmptyShapePool)));
}

#[test]
fn same_seed_same_shapes() {
    let a = scene(1600, 900);
    let b = scene(1600, 900);
    let ka: Vec<ShapeKind> = a.grid().cells().iter().map(|c| c.shape.kind).collect();
    let kb: Vec<ShapeKind> = b.grid().cells().iter().map(|c| c.shape.kind).collect();
    assert_eq!(ka, kb);
}

#[test]
fn instances_carry_world_transform() {
    let s = scene(1600, 900);
    for (inst, cell) in s.instances().iter().zip(s.grid().cells()) {
        assert_eq!(inst.kind, cell.shape.kind);
        let t = inst.model.w_axis.truncate();
        assert!((t - s.grid().world_position(cell)).length() < 1e-5);
    }
}
