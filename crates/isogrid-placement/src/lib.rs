pub mod entity;
pub mod footprint;
pub mod mount;
pub mod occupancy;
pub mod surface;
pub mod wall;

use glam::Vec3;
use isogrid_core::{CoordinateSystem, EntityId, GridCell};

pub use entity::{
    Category, Entity, EntityKind, Floor, Furniture, MountPermissions, MountSize, MountSurface,
    Placeable, SurfaceOrientation, Wall, WallMount,
};
pub use footprint::{Footprint, FootprintKind, Shape, ShapeSpec};
pub use occupancy::{Layer, Placement};
pub use surface::{SurfaceHit, SurfaceSource};

/// Primary public struct for the isogrid-placement crate.
/// An entity registry bound to one grid, owned by the editing tool.
///
/// Entities are kept in insertion order; ids are handed out sequentially.
#[derive(Debug, Clone)]
pub struct PlacementScene {
    coords: CoordinateSystem,
    entities: Vec<Entity>,
    next_id: u32,
}

impl PlacementScene {
    pub fn new(coords: CoordinateSystem) -> Self {
        Self {
            coords,
            entities: Vec::new(),
            next_id: 1,
        }
    }

    pub fn coords(&self) -> &CoordinateSystem {
        &self.coords
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Add an entity regardless of collisions and return its id.
    pub fn insert(&mut self, name: impl Into<String>, kind: EntityKind) -> EntityId {
        let entity = Entity::new(self.next_id, name, kind);
        self.next_id += 1;
        let id = entity.id;
        log::debug!("Inserted {} '{}' as {}", entity.category(), entity.name, id);
        self.entities.push(entity);
        id
    }

    /// Add an entity only if `occupancy::check_placement` accepts it.
    pub fn try_place(
        &mut self,
        name: impl Into<String>,
        kind: EntityKind,
    ) -> Result<EntityId, Placement> {
        let candidate = Entity::new(self.next_id, name, kind);
        match occupancy::check_placement(&self.coords, &candidate, &self.entities) {
            Placement::Ok => Ok(self.insert(candidate.name, candidate.kind)),
            rejected => {
                log::info!(
                    "Rejected {} '{}': {:?}",
                    candidate.category(),
                    candidate.name,
                    rejected
                );
                Err(rejected)
            }
        }
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn is_valid(&self, id: EntityId) -> bool {
        self.get(id)
            .is_some_and(|e| occupancy::is_valid(&self.coords, e, &self.entities))
    }

    pub fn find_invalid(&self) -> Vec<EntityId> {
        occupancy::find_invalid(&self.coords, &self.entities)
    }

    pub fn surfaces_at(&self, cell: GridCell) -> Vec<SurfaceHit> {
        surface::available_surfaces(&self.coords, cell, &self.entities)
    }

    /// World position for an object dropped at a ground-level `anchor`,
    /// raised onto the surface of that cell nearest `target_height`.
    pub fn drop_position(&self, anchor: Vec3, target_height: f32) -> Option<Vec3> {
        let cell = self.coords.world_to_grid_ignore_height(anchor);
        let surfaces = self.surfaces_at(cell);
        let best = surface::select_best_surface(&surfaces, target_height)?;
        Some(self.coords.grid_to_world(cell, best.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use isogrid_core::{GridConfig, WallDirection};

    fn scene() -> PlacementScene {
        let coords = CoordinateSystem::new(GridConfig {
            dimensions: IVec2::new(10, 10),
            ..Default::default()
        })
        .expect("valid config");
        PlacementScene::new(coords)
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut scene = scene();
        let a = scene.insert("A", EntityKind::Furniture(Furniture::new(IVec2::ZERO, IVec2::ONE)));
        let b = scene.insert("B", EntityKind::Furniture(Furniture::new(IVec2::ONE, IVec2::ONE)));
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
        assert_eq!(scene.entities().len(), 2);
    }

    #[test]
    fn test_try_place_rejects_collision() {
        let mut scene = scene();
        let table = Furniture::new(IVec2::new(2, 2), IVec2::new(2, 1));
        assert!(scene.try_place("Table", EntityKind::Furniture(table)).is_ok());
        let chair = Furniture::new(IVec2::new(3, 2), IVec2::ONE);
        let err = scene
            .try_place("Chair", EntityKind::Furniture(chair))
            .expect_err("chair overlaps table");
        assert_eq!(err, Placement::Blocked(vec![EntityId(1)]));
        assert_eq!(scene.entities().len(), 1);
    }

    #[test]
    fn test_remove_and_revalidate() {
        let mut scene = scene();
        let a = scene.insert("A", EntityKind::Wall(Wall::new(IVec2::ZERO, WallDirection::East, 4, 3)));
        let b = scene.insert("B", EntityKind::Furniture(Furniture::new(IVec2::new(1, 0), IVec2::ONE)));
        assert!(!scene.is_valid(b));
        assert_eq!(scene.find_invalid(), vec![a, b]);
        assert!(scene.remove(a).is_some());
        assert!(scene.is_valid(b));
        assert!(scene.remove(a).is_none());
        assert!(!scene.is_valid(a));
    }

    #[test]
    fn test_drop_position_onto_table() {
        let mut scene = scene();
        let table = Furniture::new(IVec2::new(2, 2), IVec2::new(2, 1)).with_surface(IVec2::new(2, 1));
        scene.insert("Table", EntityKind::Furniture(table));

        let anchor = scene.coords().grid_to_world(IVec2::new(3, 2), 0.0);
        let high = scene
            .drop_position(anchor, 0.9)
            .expect("cell is on the grid");
        assert!(high.abs_diff_eq(scene.coords().grid_to_world(IVec2::new(3, 2), 1.0), 1e-5));

        let low = scene.drop_position(anchor, 0.2).expect("cell is on the grid");
        assert!(low.abs_diff_eq(anchor, 1e-5));
        assert!(scene.drop_position(Vec3::new(50.0, -50.0, 0.0), 0.0).is_none());
    }
}
