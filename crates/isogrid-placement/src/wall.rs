//! Wall base lines and their vertical surface lattice.

use glam::Vec3;
use isogrid_core::{CoordinateSystem, GridCell, WallSurfaceCell};

use crate::entity::Wall;
use crate::footprint::unique_cells;

fn run(wall: &Wall) -> impl Iterator<Item = GridCell> {
    let start = wall.start();
    let step = wall.direction.extend();
    (0..wall.length).map(move |i| start.saturating_add(step * i))
}

/// Base cells in run order, before bounds filtering.
pub fn unclipped_base_cells(wall: &Wall) -> Vec<GridCell> {
    run(wall).collect()
}

/// Base cells in run order, index 0 at the start. Cells past the grid edge
/// are dropped, so a wall running off the grid is truncated.
pub fn base_cells(coords: &CoordinateSystem, wall: &Wall) -> Vec<GridCell> {
    unique_cells(run(wall).filter(|cell| coords.is_valid_cell(*cell)))
}

/// The wall's surface lattice: one entry per base cell per level, repeated
/// once per custom shape entry when a custom shape is set.
pub fn surface_cells(coords: &CoordinateSystem, wall: &Wall) -> Vec<WallSurfaceCell> {
    if !wall.provides_surface {
        return Vec::new();
    }
    let passes = wall.custom_shape.as_ref().map_or(1, Vec::len);
    let mut cells = Vec::new();
    for base in base_cells(coords, wall) {
        for level in 0..wall.height {
            for _ in 0..passes {
                cells.push(WallSurfaceCell {
                    base,
                    level,
                    direction: wall.direction,
                });
            }
        }
    }
    log::trace!(
        "Wall at {:?} {:?}: {} surface cells",
        wall.start(),
        wall.direction,
        cells.len()
    );
    cells
}

/// Render outline of every surface cell, in lattice order.
pub fn surface_corners(coords: &CoordinateSystem, wall: &Wall) -> Vec<[Vec3; 4]> {
    surface_cells(coords, wall)
        .into_iter()
        .map(|c| coords.wall_surface_corners(c.base, c.level, c.direction))
        .collect()
}

/// Anchor point of every surface cell, in lattice order.
pub fn surface_positions(coords: &CoordinateSystem, wall: &Wall) -> Vec<Vec3> {
    surface_cells(coords, wall)
        .into_iter()
        .map(|c| coords.wall_cell_position(c.base, c.level, c.direction))
        .collect()
}
