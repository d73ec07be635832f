//! Which surfaces a new object could stand on at a given cell.

use isogrid_core::{CoordinateSystem, EntityId, GridCell, HeightLevel};
use serde::Serialize;

use crate::entity::{Category, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurfaceSource {
    Ground,
    Entity { id: EntityId, category: Category },
}

/// One surface covering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceHit {
    pub source: SurfaceSource,
    /// Height above the grid origin.
    pub height: f32,
    pub level: HeightLevel,
}

/// Every surface covering `cell`, lowest first. The ground is always
/// included for valid cells; surfaces above the level limit are not.
pub fn available_surfaces(
    coords: &CoordinateSystem,
    cell: GridCell,
    all: &[Entity],
) -> Vec<SurfaceHit> {
    if !coords.is_valid_cell(cell) {
        return Vec::new();
    }
    let mut hits = vec![SurfaceHit {
        source: SurfaceSource::Ground,
        height: 0.0,
        level: 0,
    }];
    for entity in all {
        let Some(footprint) = entity.surface_footprint(coords) else {
            continue;
        };
        if !footprint.contains(cell) || !coords.is_valid_level(footprint.level) {
            continue;
        }
        let Some(height) = entity.placeable().surface_height(coords) else {
            continue;
        };
        hits.push(SurfaceHit {
            source: SurfaceSource::Entity {
                id: entity.id,
                category: entity.category(),
            },
            height,
            level: footprint.level,
        });
    }
    hits.sort_by(|a, b| a.height.total_cmp(&b.height));
    hits
}

/// The surface whose height is closest to `target_height`. Ties go to the
/// lower surface.
pub fn select_best_surface(surfaces: &[SurfaceHit], target_height: f32) -> Option<&SurfaceHit> {
    surfaces.iter().min_by(|a, b| {
        let da = (a.height - target_height).abs();
        let db = (b.height - target_height).abs();
        da.total_cmp(&db).then(a.height.total_cmp(&b.height))
    })
}
