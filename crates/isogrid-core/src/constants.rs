//! Shared grid defaults. `GridConfig::default()`, the entity constructors and
//! the built-in presets all read from here.

/// Default cell footprint in world units (width, depth). 2:1 is the usual
/// isometric diamond ratio.
pub const DEFAULT_CELL_SIZE: (f32, f32) = (1.0, 0.5);

/// Default grid dimensions in cells.
pub const DEFAULT_GRID_DIMENSIONS: (i32, i32) = (20, 20);

/// World height of one vertical level.
pub const DEFAULT_HEIGHT_PER_LEVEL: f32 = 1.0;

/// Number of height levels shown and offered as surfaces.
pub const DEFAULT_MAX_LEVELS: i32 = 5;

/// Tallest wall lattice, in levels.
pub const DEFAULT_MAX_WALL_HEIGHT: i32 = 5;

/// Edge length of one wall-surface cell in orthogonal mode.
pub const DEFAULT_WALL_CELL_SIZE: f32 = 1.0;

/// Added before flooring a fractional cell coordinate. Keeps a point that
/// sits exactly on a cell corner from flooring into the neighbour when the
/// division comes out at 2.9999998.
pub const CELL_SNAP_EPSILON: f32 = 1e-4;

/// Furniture never gets thinner than this.
pub const MIN_FURNITURE_HEIGHT: f32 = 0.1;

/// Default physical height of a furniture item.
pub const DEFAULT_FURNITURE_HEIGHT: f32 = 1.0;

/// Floors never get thinner than this.
pub const MIN_FLOOR_THICKNESS: f32 = 0.01;

/// Default slab thickness of a floor tile.
pub const DEFAULT_FLOOR_THICKNESS: f32 = 0.2;

/// Default distance a mounted shelf surface sticks out from the wall.
pub const DEFAULT_SURFACE_PROTRUSION: f32 = 0.5;

/// Default wall run length and height.
pub const DEFAULT_WALL_LENGTH: i32 = 3;
pub const DEFAULT_WALL_HEIGHT: i32 = 3;
