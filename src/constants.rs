// Front-end tuning constants. Layout and animation tunables live in
// `grid_core::constants`; these cover controls, post-processing and DOM ids.

// Keyboard gutter control
pub const GUTTER_STEP: f32 = 0.5;
pub const GUTTER_MIN: f32 = 1.0;
pub const GUTTER_MAX: f32 = 12.0;

// Frame step clamp (seconds); keeps tweens sane after a backgrounded tab
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.6;
pub const BLOOM_THRESHOLD: f32 = 0.7;

// Shading
pub const SPOT_LIGHT_HEIGHT: f32 = 27.0;
pub const POINT_LIGHT_RANGE: f32 = 1000.0;

// Floor and spot-light shadow
pub const FLOOR_SIZE: f32 = 100.0;
pub const FLOOR_SHADOW_OPACITY: f32 = 0.3;
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SPOT_SHADOW_FOV_DEG: f32 = 120.0;

// GPU buffers
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint-overlay";
