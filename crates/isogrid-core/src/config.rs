use glam::{IVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// How grid cells are laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Projection {
    /// Diamond cells; grid x runs up-right, grid y up-left.
    #[default]
    Isometric,
    /// Axis-aligned rectangular cells.
    Orthogonal,
}

/// Process-wide grid settings, set once at scene setup.
///
/// Missing fields in a RON document fall back to `GridConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// World size of one cell (width, depth).
    pub cell_size: Vec2,
    /// Number of cells along grid x and grid y.
    pub dimensions: IVec2,
    /// World position of cell (0, 0) at height 0.
    pub origin: Vec3,
    pub projection: Projection,
    /// World height of one vertical level.
    pub height_per_level: f32,
    /// Levels offered as placement surfaces.
    pub max_levels: i32,
    /// Tallest wall lattice, in levels.
    pub max_wall_height: i32,
    /// Edge length of one wall-surface cell (orthogonal geometry).
    pub wall_cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: Vec2::new(DEFAULT_CELL_SIZE.0, DEFAULT_CELL_SIZE.1),
            dimensions: IVec2::new(DEFAULT_GRID_DIMENSIONS.0, DEFAULT_GRID_DIMENSIONS.1),
            origin: Vec3::ZERO,
            projection: Projection::Isometric,
            height_per_level: DEFAULT_HEIGHT_PER_LEVEL,
            max_levels: DEFAULT_MAX_LEVELS,
            max_wall_height: DEFAULT_MAX_WALL_HEIGHT,
            wall_cell_size: DEFAULT_WALL_CELL_SIZE,
        }
    }
}

impl GridConfig {
    /// Check the invariants every coordinate operation relies on.
    /// Comparisons are written so NaN fails them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.x > 0.0 && self.cell_size.y > 0.0) {
            return Err(ConfigError::NonPositiveCellSize {
                x: self.cell_size.x,
                y: self.cell_size.y,
            });
        }
        if self.dimensions.x < 1 || self.dimensions.y < 1 {
            return Err(ConfigError::NonPositiveDimensions {
                x: self.dimensions.x,
                y: self.dimensions.y,
            });
        }
        if !(self.height_per_level > 0.0) {
            return Err(ConfigError::NonPositiveHeightPerLevel(
                self.height_per_level,
            ));
        }
        if !(self.wall_cell_size > 0.0) {
            return Err(ConfigError::NonPositiveWallCellSize(self.wall_cell_size));
        }
        if self.max_levels < 1 {
            return Err(ConfigError::NonPositiveLimit {
                name: "max_levels",
                value: self.max_levels,
            });
        }
        if self.max_wall_height < 1 {
            return Err(ConfigError::NonPositiveLimit {
                name: "max_wall_height",
                value: self.max_wall_height,
            });
        }
        Ok(())
    }

    pub fn is_isometric(&self) -> bool {
        self.projection == Projection::Isometric
    }

    /// Total number of ground cells.
    pub fn cell_count(&self) -> usize {
        (self.dimensions.x.max(0) as usize) * (self.dimensions.y.max(0) as usize)
    }
}
