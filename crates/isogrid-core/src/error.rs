use thiserror::Error;

/// Invalid grid configuration. Raised once at setup; no geometry can be
/// derived from a config that fails any of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive on both axes, got ({x}, {y})")]
    NonPositiveCellSize { x: f32, y: f32 },

    #[error("grid dimensions must be at least 1x1, got {x}x{y}")]
    NonPositiveDimensions { x: i32, y: i32 },

    #[error("height per level must be positive, got {0}")]
    NonPositiveHeightPerLevel(f32),

    #[error("wall cell size must be positive, got {0}")]
    NonPositiveWallCellSize(f32),

    #[error("{name} must be at least 1, got {value}")]
    NonPositiveLimit { name: &'static str, value: i32 },
}
