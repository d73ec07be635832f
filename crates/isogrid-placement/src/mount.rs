//! Wall-mounted items: along-wall footprints, protruding surfaces and
//! which wall an item can hang on.

use std::collections::HashSet;

use glam::IVec2;
use isogrid_core::{CoordinateSystem, GridCell, WallDirection};

use crate::entity::{Entity, Wall, WallMount};
use crate::footprint::unique_cells;
use crate::wall;

/// Grid delta for a distance measured along a wall running in `direction`.
pub fn transform_along_wall(offset: i32, direction: WallDirection) -> IVec2 {
    match direction {
        WallDirection::North => IVec2::new(0, offset),
        WallDirection::East => IVec2::new(offset, 0),
        WallDirection::South => IVec2::new(0, offset.saturating_neg()),
        WallDirection::West => IVec2::new(offset.saturating_neg(), 0),
    }
}

fn along_offsets(mount: &WallMount) -> Vec<i32> {
    match &mount.custom_shape {
        Some(shape) if !shape.is_empty() => shape.iter().map(|s| s.x).collect(),
        _ => (0..mount.size.along).collect(),
    }
}

/// Cells the item covers along the wall. Not clipped to the grid; the
/// vertical extent is `MountSize::levels`.
pub fn occupied_cells(mount: &WallMount) -> Vec<GridCell> {
    let origin = mount.position.saturating_add(mount.grid_offset);
    unique_cells(
        along_offsets(mount)
            .into_iter()
            .map(|x| origin.saturating_add(transform_along_wall(x, mount.direction))),
    )
}

/// Cells of the protruding surface, pushed out along the wall normal
/// starting one cell away from the wall. Empty without a surface.
pub fn surface_cells(coords: &CoordinateSystem, mount: &WallMount) -> Vec<GridCell> {
    let Some(surface) = &mount.surface else {
        return Vec::new();
    };
    let origin = mount.position.saturating_add(surface.offset);
    let normal = mount.direction.normal();
    let mut cells = Vec::new();
    for x in 0..surface.size.x {
        for y in 0..surface.size.y {
            let cell = origin
                .saturating_add(transform_along_wall(x, mount.direction))
                .saturating_add(normal * y.saturating_add(1));
            if coords.is_valid_cell(cell) {
                cells.push(cell);
            }
        }
    }
    unique_cells(cells)
}

/// Whether `mount` can hang on `wall` as currently placed.
pub fn is_attachable(coords: &CoordinateSystem, mount: &WallMount, wall: &Wall) -> bool {
    if !mount.permissions.allows(wall.direction) {
        return false;
    }
    if mount.direction != wall.direction || !wall.provides_surface {
        return false;
    }
    if mount.height_level < 0 || mount.height_level >= wall.height {
        return false;
    }
    if !wall::base_cells(coords, wall).contains(&mount.position) {
        return false;
    }
    let lattice: HashSet<GridCell> = wall::surface_cells(coords, wall)
        .into_iter()
        .map(|c| c.base)
        .collect();
    occupied_cells(mount)
        .iter()
        .all(|cell| lattice.contains(cell))
}

/// First wall in `all` whose base line passes through `position` and runs
/// in `direction`.
pub fn find_wall_at<'a>(
    coords: &CoordinateSystem,
    position: GridCell,
    direction: WallDirection,
    all: &'a [Entity],
) -> Option<&'a Entity> {
    all.iter().find(|entity| {
        entity.as_wall().is_some_and(|w| {
            w.direction == direction && wall::base_cells(coords, w).contains(&position)
        })
    })
}

/// First wall in `all` the item can hang on as placed.
pub fn attached_wall<'a>(
    coords: &CoordinateSystem,
    mount: &WallMount,
    all: &'a [Entity],
) -> Option<&'a Entity> {
    all.iter().find(|entity| {
        entity
            .as_wall()
            .is_some_and(|w| is_attachable(coords, mount, w))
    })
}

/// Closest wall the item is allowed on, measured from its position to the
/// nearest base cell. Walls without a surface are skipped. Ties keep the
/// earlier wall.
pub fn nearest_wall<'a>(
    coords: &CoordinateSystem,
    mount: &WallMount,
    all: &'a [Entity],
) -> Option<&'a Entity> {
    let target = mount.position.as_vec2();
    let mut best: Option<(&Entity, f32)> = None;
    for entity in all {
        let Some(w) = entity.as_wall() else {
            continue;
        };
        if !w.provides_surface || !mount.permissions.allows(w.direction) {
            continue;
        }
        let closest = wall::base_cells(coords, w)
            .into_iter()
            .map(|cell| cell.as_vec2().distance(target))
            .fold(f32::INFINITY, f32::min);
        if best.map_or(closest.is_finite(), |(_, d)| closest < d) {
            best = Some((entity, closest));
        }
    }
    if let Some((entity, distance)) = best {
        log::debug!(
            "Nearest wall for mount at {:?} is {} at distance {:.2}",
            mount.position,
            entity.id,
            distance
        );
    }
    best.map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{MountPermissions, MountSurface};
    use isogrid_core::direction::ALL_WALL_DIRECTIONS;
    use isogrid_core::GridConfig;

    fn coords() -> CoordinateSystem {
        CoordinateSystem::new(GridConfig {
            dimensions: IVec2::new(10, 10),
            ..Default::default()
        })
        .expect("valid config")
    }

    #[test]
    fn test_transform_table() {
        assert_eq!(transform_along_wall(3, WallDirection::North), IVec2::new(0, 3));
        assert_eq!(transform_along_wall(3, WallDirection::East), IVec2::new(3, 0));
        assert_eq!(transform_along_wall(3, WallDirection::South), IVec2::new(0, -3));
        assert_eq!(transform_along_wall(3, WallDirection::West), IVec2::new(-3, 0));
    }

    #[test]
    fn test_transform_follows_wall_extension() {
        for dir in ALL_WALL_DIRECTIONS {
            assert_eq!(transform_along_wall(2, dir), dir.extend() * 2);
        }
    }

    #[test]
    fn test_transform_saturates() {
        assert_eq!(
            transform_along_wall(i32::MIN, WallDirection::South),
            IVec2::new(0, i32::MAX)
        );
        assert_eq!(
            transform_along_wall(i32::MIN, WallDirection::West),
            IVec2::new(i32::MAX, 0)
        );
    }

    #[test]
    fn test_occupied_cells_at_integer_edge() {
        let mount = WallMount::new(IVec2::new(i32::MAX, 0), WallDirection::East, 3, 0);
        assert_eq!(occupied_cells(&mount), vec![IVec2::new(i32::MAX, 0)]);
        let coords = coords();
        let shelf = WallMount::new(IVec2::new(0, i32::MAX), WallDirection::North, 2, 0)
            .with_surface(MountSurface::new(IVec2::new(2, 2)));
        assert!(surface_cells(&coords, &shelf).is_empty());
    }

    #[test]
    fn test_occupied_cells_along_wall() {
        let mount = WallMount::new(IVec2::new(0, 1), WallDirection::North, 3, 1);
        assert_eq!(
            occupied_cells(&mount),
            vec![IVec2::new(0, 1), IVec2::new(0, 2), IVec2::new(0, 3)]
        );
        let mount = WallMount::new(IVec2::new(5, 5), WallDirection::West, 2, 0);
        assert_eq!(
            occupied_cells(&mount),
            vec![IVec2::new(5, 5), IVec2::new(4, 5)]
        );
    }

    #[test]
    fn test_occupied_cells_custom_shape_uses_x() {
        let mount = WallMount {
            custom_shape: Some(vec![IVec2::new(0, 7), IVec2::new(2, -1)]),
            ..WallMount::new(IVec2::new(3, 0), WallDirection::East, 1, 0)
        };
        assert_eq!(
            occupied_cells(&mount),
            vec![IVec2::new(3, 0), IVec2::new(5, 0)]
        );
    }

    #[test]
    fn test_surface_cells_protrude_along_normal() {
        let coords = coords();
        let shelf = WallMount::new(IVec2::new(0, 2), WallDirection::North, 2, 1)
            .with_surface(MountSurface::new(IVec2::new(2, 1)));
        assert_eq!(
            surface_cells(&coords, &shelf),
            vec![IVec2::new(1, 2), IVec2::new(1, 3)]
        );

        let deep = WallMount::new(IVec2::new(4, 0), WallDirection::East, 1, 1)
            .with_surface(MountSurface::new(IVec2::new(1, 2)));
        assert_eq!(
            surface_cells(&coords, &deep),
            vec![IVec2::new(4, 1), IVec2::new(4, 2)]
        );
    }

    #[test]
    fn test_surface_cells_clipped_to_grid() {
        let coords = coords();
        let shelf = WallMount::new(IVec2::new(0, 0), WallDirection::South, 1, 1)
            .with_surface(MountSurface::new(IVec2::new(1, 1)));
        assert!(surface_cells(&coords, &shelf).is_empty());
        let bare = WallMount::new(IVec2::new(0, 0), WallDirection::North, 1, 1);
        assert!(surface_cells(&coords, &bare).is_empty());
    }

    #[test]
    fn test_attachable_on_matching_wall() {
        let coords = coords();
        let wall = Wall::new(IVec2::ZERO, WallDirection::North, 4, 3);
        let mount = WallMount::new(IVec2::new(0, 1), WallDirection::North, 2, 2);
        assert!(is_attachable(&coords, &mount, &wall));
    }

    #[test]
    fn test_attachable_rejections() {
        let coords = coords();
        let wall = Wall::new(IVec2::ZERO, WallDirection::North, 4, 3);
        let mount = WallMount::new(IVec2::new(0, 1), WallDirection::North, 2, 1);

        let wrong_dir = mount.clone().aligned_to(&Wall::new(IVec2::ZERO, WallDirection::East, 1, 1));
        assert!(!is_attachable(&coords, &wrong_dir, &wall));

        let forbidden = WallMount {
            permissions: MountPermissions::only(WallDirection::East),
            ..mount.clone()
        };
        assert!(!is_attachable(&coords, &forbidden, &wall));

        let too_high = WallMount {
            height_level: 3,
            ..mount.clone()
        };
        assert!(!is_attachable(&coords, &too_high, &wall));

        let overhang = WallMount::new(IVec2::new(0, 2), WallDirection::North, 3, 0);
        assert!(!is_attachable(&coords, &overhang, &wall));

        let off_wall = WallMount::new(IVec2::new(1, 1), WallDirection::North, 1, 0);
        assert!(!is_attachable(&coords, &off_wall, &wall));

        let bare = Wall {
            provides_surface: false,
            ..wall.clone()
        };
        assert!(!is_attachable(&coords, &mount, &bare));
    }

    #[test]
    fn test_find_wall_at() {
        let coords = coords();
        let all = vec![
            Entity::wall(1, "North", Wall::new(IVec2::ZERO, WallDirection::North, 4, 3)),
            Entity::wall(2, "East", Wall::new(IVec2::ZERO, WallDirection::East, 4, 3)),
        ];
        let found = find_wall_at(&coords, IVec2::new(2, 0), WallDirection::East, &all);
        assert_eq!(found.map(|e| e.id.0), Some(2));
        let found = find_wall_at(&coords, IVec2::new(0, 0), WallDirection::North, &all);
        assert_eq!(found.map(|e| e.id.0), Some(1));
        assert!(find_wall_at(&coords, IVec2::new(5, 5), WallDirection::North, &all).is_none());
    }

    #[test]
    fn test_attached_wall() {
        let coords = coords();
        let all = vec![
            Entity::wall(1, "North", Wall::new(IVec2::ZERO, WallDirection::North, 4, 3)),
            Entity::wall(2, "East", Wall::new(IVec2::ZERO, WallDirection::East, 4, 3)),
        ];
        let clock = WallMount::new(IVec2::new(1, 0), WallDirection::East, 1, 2);
        assert_eq!(attached_wall(&coords, &clock, &all).map(|e| e.id.0), Some(2));
        let floating = WallMount::new(IVec2::new(6, 6), WallDirection::East, 1, 0);
        assert!(attached_wall(&coords, &floating, &all).is_none());
    }

    #[test]
    fn test_nearest_wall_respects_permissions() {
        let coords = coords();
        let all = vec![
            Entity::wall(1, "North", Wall::new(IVec2::ZERO, WallDirection::North, 4, 3)),
            Entity::wall(2, "East", Wall::new(IVec2::new(0, 8), WallDirection::East, 4, 3)),
        ];
        let mount = WallMount::new(IVec2::new(2, 2), WallDirection::North, 1, 0);
        assert_eq!(nearest_wall(&coords, &mount, &all).map(|e| e.id.0), Some(1));

        let east_only = WallMount {
            permissions: MountPermissions::only(WallDirection::East),
            ..mount
        };
        let wall = nearest_wall(&coords, &east_only, &all);
        assert_eq!(wall.map(|e| e.id.0), Some(2));

        let aligned = east_only.aligned_to(wall.and_then(Entity::as_wall).expect("wall"));
        assert_eq!(aligned.direction, WallDirection::East);
        assert!(nearest_wall(&coords, &aligned, &[]).is_none());
    }
}
