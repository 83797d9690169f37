use thiserror::Error;

/// Configuration errors raised while building or animating the grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("shape pool is empty, no cell can be built")]
    EmptyShapePool,
    #[error("gutter must be finite and non-negative, got {0}")]
    InvalidGutter(f32),
    #[error("scale divisor must be finite and positive, got {0}")]
    InvalidScaleDivisor(f32),
}
