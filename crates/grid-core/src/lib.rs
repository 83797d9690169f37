//! Platform-independent core of the shape grid: layout, viewport sizing, pointer
//! picking and per-cell deformation. Nothing in here touches web APIs, so the web
//! frontend and the host-side tests share the exact same code.

pub mod constants;
pub mod debounce;
pub mod deform;
pub mod error;
pub mod frustum;
pub mod grid;
pub mod helpers;
pub mod mesh;
pub mod picking;
pub mod pointer;
pub mod scene;
pub mod shapes;
pub mod tween;

pub use constants::*;
pub use debounce::ResizeDebouncer;
pub use deform::{CellDeformer, DeformParams};
pub use error::GridError;
pub use frustum::{grid_dimensions, visible_size, VisibleSize};
pub use grid::{cell_positions, Cell, GridConfig, GridGroup, GridLayoutEngine, LayoutMode};
pub use helpers::{distance, map, radians};
pub use mesh::{MeshData, Vertex};
pub use picking::{project, Camera, IntersectionPoint};
pub use pointer::PointerState;
pub use scene::{FrameStats, GridSizing, InstanceData, MaterialParams, SceneConfig, SceneState, Viewport};
pub use shapes::{default_shape_pool, ShapeDescriptor, ShapeKind};
pub use tween::{Easing, Tween};
