// Shared tuning constants for the grid and its deformation.

// Layout
pub const DEFAULT_GUTTER: f32 = 5.0; // world units between cell origins
pub const DEFAULT_ROWS: u32 = 8; // used when the grid is not fitted to the viewport
pub const DEFAULT_COLS: u32 = 4;

// Camera (top-down, looking at the floor)
pub const CAMERA_HEIGHT: f32 = 65.0;
pub const CAMERA_FOV_DEG: f32 = 20.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 2000.0;
pub const GROUND_Y: f32 = 0.0;

// Deformation
pub const FALLOFF_START: f32 = 6.0; // distance at which the raw height reaches 0
pub const FALLOFF_END: f32 = 0.0;
pub const PEAK_HEIGHT: f32 = 8.0; // raw height directly under the pointer
pub const MIN_HEIGHT: f32 = 1.0; // cells never sink below this once the pointer hits the floor
pub const SCALE_DIVISOR: f32 = 1.2;
pub const POSITION_DURATION_SEC: f32 = 0.3;
pub const SCALE_DURATION_SEC: f32 = 0.3;
pub const ROTATION_DURATION_SEC: f32 = 0.7;

// Rest orientation a flattened cell rotates towards, in degrees
pub const REST_ROTATION_DEG: [f32; 3] = [270.0, 45.0, -90.0];

// Resize coalescing window
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

// Seed for the default shape sequence
pub const DEFAULT_SEED: u64 = 42;
