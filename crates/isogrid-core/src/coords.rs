//! World <-> grid transforms for isometric and orthogonal layouts.
//!
//! Scene space is XY with Y up on screen. In isometric mode height is folded
//! into screen Y, so a point's screen position alone cannot tell a raised
//! cell from a cell further back. Placement code therefore always converts
//! with `world_to_grid_ignore_height` (or `world_to_grid_at_height` when the
//! height is known) on an anchor taken at height 0.

use glam::{IVec2, Vec2, Vec3};

use crate::config::{GridConfig, Projection};
use crate::constants::CELL_SNAP_EPSILON;
use crate::direction::WallDirection;
use crate::error::ConfigError;
use crate::types::{GridCell, HeightLevel};

/// Validated grid configuration plus the transforms derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    config: GridConfig,
}

impl CoordinateSystem {
    /// Validate `config` and build the transform set.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "Grid {}x{} ({:?}), cell {:?}, {} per level",
            config.dimensions.x,
            config.dimensions.y,
            config.projection,
            config.cell_size,
            config.height_per_level
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn dimensions(&self) -> IVec2 {
        self.config.dimensions
    }

    /// Legacy conversion: inverts the projection on the raw screen position,
    /// treating any height baked into Y as grid depth. Points above the
    /// ground therefore land on cells further back. Only snapping uses this;
    /// placement goes through `world_to_grid_ignore_height`.
    pub fn world_to_grid(&self, pos: Vec3) -> GridCell {
        let local = pos - self.config.origin;
        self.invert(local.x, local.y)
    }

    /// Canonical placement input: the cell under `pos`, with `pos` taken as
    /// a ground-level anchor.
    pub fn world_to_grid_ignore_height(&self, pos: Vec3) -> GridCell {
        self.world_to_grid_at_height(pos, 0.0)
    }

    /// Cell under `pos` when the caller knows the world height folded into
    /// its Y coordinate. Exact inverse of `grid_to_world(cell, height)`.
    pub fn world_to_grid_at_height(&self, pos: Vec3, height: f32) -> GridCell {
        let local = pos - self.config.origin;
        self.invert(local.x, local.y - height)
    }

    fn invert(&self, local_x: f32, local_y: f32) -> GridCell {
        let cell = self.config.cell_size;
        match self.config.projection {
            Projection::Isometric => {
                let u = local_x / cell.x;
                let v = local_y / cell.y;
                IVec2::new(floor_cell(u + v), floor_cell(v - u))
            }
            Projection::Orthogonal => {
                IVec2::new(floor_cell(local_x / cell.x), floor_cell(local_y / cell.y))
            }
        }
    }

    /// Forward transform: world anchor of `cell` raised by `height`.
    pub fn grid_to_world(&self, cell: GridCell, height: f32) -> Vec3 {
        let size = self.config.cell_size;
        let (x, y) = match self.config.projection {
            Projection::Isometric => (
                (cell.x - cell.y) as f32 * size.x * 0.5,
                (cell.x + cell.y) as f32 * size.y * 0.5,
            ),
            Projection::Orthogonal => (cell.x as f32 * size.x, cell.y as f32 * size.y),
        };
        self.config.origin + Vec3::new(x, y + height, 0.0)
    }

    /// Move `pos` onto the anchor of the cell it falls in, at height 0.
    pub fn snap_to_grid(&self, pos: Vec3) -> Vec3 {
        self.grid_to_world(self.world_to_grid(pos), 0.0)
    }

    pub fn height_for_level(&self, level: HeightLevel) -> f32 {
        level as f32 * self.config.height_per_level
    }

    /// Level containing an absolute world height. Heights below the origin
    /// give negative levels. Unlike cell lookup there is no snap tolerance.
    pub fn world_height_to_level(&self, world_height: f32) -> HeightLevel {
        ((world_height - self.config.origin.y) / self.config.height_per_level).floor() as HeightLevel
    }

    pub fn is_valid_cell(&self, cell: GridCell) -> bool {
        let dims = self.config.dimensions;
        cell.x >= 0 && cell.x < dims.x && cell.y >= 0 && cell.y < dims.y
    }

    pub fn is_valid_level(&self, level: HeightLevel) -> bool {
        (0..self.config.max_levels).contains(&level)
    }

    /// A wall lattice cell must stand on a valid ground cell and below the
    /// wall height limit.
    pub fn is_valid_wall_cell(&self, base: GridCell, level: HeightLevel) -> bool {
        self.is_valid_cell(base) && (0..self.config.max_wall_height).contains(&level)
    }

    /// Half-cell offset from a cell anchor toward the edge that `step`
    /// points at. Grid y edges sit in Z so they stay out of the screen plane.
    fn edge_offset(&self, step: IVec2) -> Vec3 {
        let half = self.config.cell_size * 0.5;
        Vec3::new(
            step.x as f32 * half.x,
            0.0,
            step.y as f32 * half.y,
        )
    }

    /// Anchor point of one wall-surface cell: the base cell pushed half a
    /// cell along the wall normal, raised to the bottom of `level`.
    pub fn wall_cell_position(
        &self,
        base: GridCell,
        level: HeightLevel,
        direction: WallDirection,
    ) -> Vec3 {
        self.grid_to_world(base, 0.0)
            + self.edge_offset(direction.normal())
            + Vec3::new(0.0, self.height_for_level(level), 0.0)
    }

    /// The 4 corners of one wall-surface cell, ordered bottom-near,
    /// bottom-far, top-far, top-near.
    ///
    /// `direction` is the wall's extension direction. Isometric cells are
    /// parallelograms whose horizontal edge follows the projected grid edge;
    /// orthogonal cells are `wall_cell_size` squares.
    pub fn wall_surface_corners(
        &self,
        base: GridCell,
        level: HeightLevel,
        direction: WallDirection,
    ) -> [Vec3; 4] {
        match self.config.projection {
            Projection::Isometric => {
                let half = self.config.cell_size * 0.5;
                let edge_right = Vec3::new(half.x, half.y, 0.0);
                let edge_up = Vec3::new(-half.x, half.y, 0.0);
                let edge = match direction {
                    WallDirection::East => edge_right,
                    WallDirection::West => -edge_right,
                    WallDirection::North => edge_up,
                    WallDirection::South => -edge_up,
                };

                let anchor = self.grid_to_world(base, 0.0);
                let bottom = anchor + Vec3::new(0.0, self.height_for_level(level), 0.0);
                let top = bottom + Vec3::new(0.0, self.config.height_per_level, 0.0);
                [bottom, bottom + edge, top + edge, top]
            }
            Projection::Orthogonal => {
                let centre = self.grid_to_world(base, 0.0)
                    + self.edge_offset(direction.extend())
                    + Vec3::new(0.0, self.height_for_level(level), 0.0);
                let h = Vec2::splat(self.config.wall_cell_size * 0.5);
                [
                    centre + Vec3::new(-h.x, -h.y, 0.0),
                    centre + Vec3::new(h.x, -h.y, 0.0),
                    centre + Vec3::new(h.x, h.y, 0.0),
                    centre + Vec3::new(-h.x, h.y, 0.0),
                ]
            }
        }
    }
}

/// Floor a fractional cell coordinate, tolerating float error just below
/// an integer.
fn floor_cell(value: f32) -> i32 {
    (value + CELL_SNAP_EPSILON).floor() as i32
}
