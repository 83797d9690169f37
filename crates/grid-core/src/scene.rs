//! Single owner of everything the frame loop mutates.
//!
//! Input handlers only touch the pointer and the viewport; `tick` does the
//! rest in a fixed order: rebuild after a settled resize, project the pointer,
//! deform the cells.

use crate::constants::*;
use crate::debounce::ResizeDebouncer;
use crate::deform::{CellDeformer, DeformParams};
use crate::error::GridError;
use crate::frustum::{grid_dimensions, visible_size};
use crate::grid::{GridConfig, GridGroup, GridLayoutEngine, LayoutMode};
use crate::picking::{project, Camera, IntersectionPoint};
use crate::pointer::PointerState;
use crate::shapes::{ShapeDescriptor, ShapeKind};
use glam::{EulerRot, Mat4, Quat, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Drawable size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// How rows and columns are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridSizing {
    Fixed { rows: u32, cols: u32 },
    /// As many gutter-sized slots as the camera sees on the floor.
    FitViewport,
}

/// Pass-through look settings. They never influence layout or animation.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialParams {
    pub mesh_color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub reflectivity: f32,
    pub ambient_color: [f32; 3],
    pub spot_color: [f32; 3],
    pub background_color: [f32; 3],
    pub point_lights: [([f32; 3], [f32; 3]); 3],
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            mesh_color: [0.933, 0.059, 0.204],       // #EE0F34
            metalness: 0.1,
            roughness: 1.0,
            reflectivity: 0.1,
            ambient_color: [0.655, 0.749, 0.929],    // #a7bfed
            spot_color: [0.165, 0.184, 0.698],       // #2a2fb2
            background_color: [0.067, 0.255, 0.420], // #11416B
            point_lights: [
                ([1.0, 0.941, 0.0], [0.0, 10.0, -100.0]),
                ([1.0, 0.941, 0.0], [100.0, 10.0, 0.0]),
                ([0.0, 1.0, 0.0], [20.0, 5.0, 20.0]),
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub sizing: GridSizing,
    pub gutter: f32,
    pub layout: LayoutMode,
    pub camera_height: f32,
    pub fov_deg: f32,
    pub resize_debounce: Duration,
    pub deform: DeformParams,
    pub material: MaterialParams,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sizing: GridSizing::FitViewport,
            gutter: DEFAULT_GUTTER,
            layout: LayoutMode::default(),
            camera_height: CAMERA_HEIGHT,
            fov_deg: CAMERA_FOV_DEG,
            resize_debounce: Duration::from_millis(RESIZE_DEBOUNCE_MS),
            deform: DeformParams::default(),
            material: MaterialParams::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Per-cell data handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceData {
    pub kind: ShapeKind,
    pub model: Mat4,
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub rebuilt: bool,
    pub intersection: Option<IntersectionPoint>,
    pub animating: usize,
}

pub struct SceneState {
    config: SceneConfig,
    viewport: Viewport,
    camera: Camera,
    engine: GridLayoutEngine,
    deformer: CellDeformer,
    grid: GridGroup,
    rng: StdRng,
    pointer: PointerState,
    resize: ResizeDebouncer<Viewport>,
    generation: u64,
}

impl SceneState {
    pub fn new(
        config: SceneConfig,
        viewport: Viewport,
        pool: Vec<ShapeDescriptor>,
    ) -> Result<Self, GridError> {
        let deformer = CellDeformer::new(config.deform.clone())?;
        let camera = Camera::top_down(config.camera_height, config.fov_deg, viewport.aspect());
        let mut scene = Self {
            rng: StdRng::seed_from_u64(config.seed),
            resize: ResizeDebouncer::new(config.resize_debounce),
            grid: GridGroup::empty(GridConfig::default()),
            engine: GridLayoutEngine::new(pool),
            pointer: PointerState::origin(),
            generation: 0,
            deformer,
            camera,
            viewport,
            config,
        };
        scene.rebuild()?;
        Ok(scene)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn grid(&self) -> &GridGroup {
        &self.grid
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Number of times the grid has been built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Touch released: fall back to the client-origin pointer.
    pub fn reset_pointer(&mut self) {
        self.pointer = PointerState::origin();
    }

    /// Apply a new drawable size. The camera follows at once so rendering and
    /// picking match the surface; the grid rebuild waits for the debounce window.
    pub fn request_resize(&mut self, width: u32, height: u32, now: Instant) {
        let vp = Viewport::new(width, height);
        self.viewport = vp;
        self.camera.aspect = vp.aspect();
        self.resize.request(vp, now);
    }

    /// True while a resize is waiting for its rebuild.
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Rows and columns for the current config and viewport.
    pub fn grid_config(&self) -> GridConfig {
        let (rows, cols) = match self.config.sizing {
            GridSizing::Fixed { rows, cols } => (rows, cols),
            GridSizing::FitViewport => {
                let size = visible_size(
                    self.config.camera_height,
                    self.config.fov_deg,
                    self.viewport.aspect(),
                    0.0,
                );
                grid_dimensions(size, self.config.gutter)
            }
        };
        GridConfig::new(rows, cols, self.config.gutter, self.config.layout)
    }

    /// Discard the grid and lay out a new one.
    pub fn rebuild(&mut self) -> Result<(), GridError> {
        let grid_config = self.grid_config();
        self.grid = self.engine.layout(&grid_config, &mut self.rng)?;
        self.generation += 1;
        log::info!(
            "[scene] grid #{} {} {}x{} ({} cells) for {}x{}",
            self.generation,
            grid_config.layout.name(),
            grid_config.rows,
            grid_config.cols,
            self.grid.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(())
    }

    pub fn set_layout(&mut self, layout: LayoutMode) -> Result<(), GridError> {
        if self.config.layout == layout {
            return Ok(());
        }
        self.config.layout = layout;
        self.rebuild()
    }

    pub fn set_gutter(&mut self, gutter: f32) -> Result<(), GridError> {
        let previous = self.config.gutter;
        self.config.gutter = gutter;
        if let Err(e) = self.rebuild() {
            self.config.gutter = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Same layout, freshly drawn shapes.
    pub fn reshuffle(&mut self) -> Result<(), GridError> {
        self.rebuild()
    }

    /// One animation frame: rebuild after a settled resize, cast the pointer, deform.
    pub fn tick(&mut self, now: Instant, dt: Duration) -> Result<FrameStats, GridError> {
        let mut stats = FrameStats::default();

        if self.resize.poll(now).is_some() {
            self.rebuild()?;
            stats.rebuilt = true;
        }

        let hit = project(self.pointer, &self.camera, GROUND_Y);
        let offset = self.grid.offset;
        self.deformer
            .update(self.grid.cells_mut(), offset, hit, dt.as_secs_f32());

        stats.intersection = hit;
        stats.animating = self.grid.cells().iter().filter(|c| c.is_animating()).count();
        Ok(stats)
    }

    /// World-space model matrix for every cell, in grid order.
    pub fn instances(&self) -> Vec<InstanceData> {
        self.grid
            .cells()
            .iter()
            .map(|c| {
                let r = c.current_rotation;
                InstanceData {
                    kind: c.shape.kind,
                    model: Mat4::from_scale_rotation_translation(
                        c.current_scale,
                        Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
                        self.grid.world_position(c),
                    ),
                }
            })
            .collect()
    }

    /// Camera position and matrices for the renderer.
    pub fn view_projection(&self) -> (Vec3, Mat4) {
        (self.camera.eye, self.camera.view_projection())
    }
}
