//! Collision checks over a caller-supplied snapshot of placed entities.
//!
//! Every check here is a pure function of its arguments. Entities only
//! compete with entities on the same [`Layer`]; the layer encodes which
//! categories are compared at all.

use isogrid_core::{CoordinateSystem, EntityId, GridCell, HeightLevel, WallDirection};
use serde::Serialize;

use crate::entity::{Entity, EntityKind};
use crate::footprint::Footprint;
use crate::mount;

/// Layer an entity's primary footprint competes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Furniture and wall bases. Walls always stand on level 0.
    Ground(HeightLevel),
    /// Floor slabs, keyed by the level of their floor height.
    Floor(HeightLevel),
    /// Items hung on walls running in `direction`.
    Mount {
        direction: WallDirection,
        level: HeightLevel,
    },
}

pub fn layer_of(coords: &CoordinateSystem, entity: &Entity) -> Layer {
    match &entity.kind {
        EntityKind::Furniture(furniture) => Layer::Ground(furniture.level(coords)),
        EntityKind::Wall(_) => Layer::Ground(0),
        EntityKind::Floor(floor) => Layer::Floor(floor.level(coords)),
        EntityKind::WallMount(mount) => Layer::Mount {
            direction: mount.direction,
            level: mount.height_level,
        },
    }
}

struct Resolved {
    layer: Layer,
    footprint: Footprint,
}

fn resolve(coords: &CoordinateSystem, entity: &Entity) -> Resolved {
    Resolved {
        layer: layer_of(coords, entity),
        footprint: entity.primary_footprint(coords),
    }
}

fn collides(a: &Resolved, b: &Resolved) -> bool {
    a.layer == b.layer && a.footprint.intersects(&b.footprint)
}

/// Whether `a` and `b` block each other. An entity never blocks itself.
pub fn conflict_between(coords: &CoordinateSystem, a: &Entity, b: &Entity) -> bool {
    a.id != b.id && collides(&resolve(coords, a), &resolve(coords, b))
}

/// True when `candidate` collides with nothing else in `all`. The candidate
/// may itself be part of `all`; it is skipped by id.
pub fn is_valid(coords: &CoordinateSystem, candidate: &Entity, all: &[Entity]) -> bool {
    let mine = resolve(coords, candidate);
    all.iter()
        .filter(|other| other.id != candidate.id)
        .all(|other| !collides(&mine, &resolve(coords, other)))
}

/// Ids of every entity in `all` that `candidate` collides with, in snapshot
/// order.
pub fn conflicts(coords: &CoordinateSystem, candidate: &Entity, all: &[Entity]) -> Vec<EntityId> {
    let mine = resolve(coords, candidate);
    all.iter()
        .filter(|other| other.id != candidate.id)
        .filter(|other| collides(&mine, &resolve(coords, other)))
        .map(|other| other.id)
        .collect()
}

/// Ids of every entity in `all` that is not valid against the rest.
pub fn find_invalid(coords: &CoordinateSystem, all: &[Entity]) -> Vec<EntityId> {
    let resolved: Vec<Resolved> = all.iter().map(|e| resolve(coords, e)).collect();
    let invalid: Vec<EntityId> = all
        .iter()
        .enumerate()
        .filter(|(i, entity)| {
            all.iter().enumerate().any(|(j, other)| {
                other.id != entity.id && collides(&resolved[*i], &resolved[j])
            })
        })
        .map(|(_, entity)| entity.id)
        .collect();
    log::debug!(
        "Checked {} entities, {} invalid",
        all.len(),
        invalid.len()
    );
    invalid
}

/// Outcome of trying to place one entity into a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Placement {
    Ok,
    /// Part of the footprint lies outside the grid.
    OutOfBounds { cells: Vec<GridCell> },
    /// A wall mount with no wall to hang on.
    Detached,
    /// Collides with the listed entities.
    Blocked(Vec<EntityId>),
}

impl Placement {
    pub fn is_ok(&self) -> bool {
        matches!(self, Placement::Ok)
    }
}

/// Full placement verdict for `candidate`: it must fit in the grid, hang on
/// a wall if it is a wall mount, and collide with nothing.
pub fn check_placement(coords: &CoordinateSystem, candidate: &Entity, all: &[Entity]) -> Placement {
    let outside: Vec<GridCell> = candidate
        .placeable()
        .unclipped_cells()
        .into_iter()
        .filter(|cell| !coords.is_valid_cell(*cell))
        .collect();
    if !outside.is_empty() {
        log::debug!(
            "{} '{}' has {} cells outside the grid",
            candidate.category(),
            candidate.name,
            outside.len()
        );
        return Placement::OutOfBounds { cells: outside };
    }

    if let Some(item) = candidate.as_wall_mount() {
        if mount::attached_wall(coords, item, all).is_none() {
            return Placement::Detached;
        }
    }

    let blockers = conflicts(coords, candidate, all);
    if blockers.is_empty() {
        Placement::Ok
    } else {
        Placement::Blocked(blockers)
    }
}
