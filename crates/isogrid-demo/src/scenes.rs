use glam::IVec2;
use isogrid_core::WallDirection;
use isogrid_placement::{
    EntityKind, Floor, Furniture, MountPermissions, MountSurface, Wall, WallMount,
};

/// A named layout and how many of its entities should fail validation.
pub struct SceneConfig {
    pub name: &'static str,
    pub expected_invalid: usize,
    pub entities: Vec<(String, EntityKind)>,
}

fn furniture(anchor: (i32, i32), size: (i32, i32), base_height: f32) -> EntityKind {
    EntityKind::Furniture(
        Furniture::new(IVec2::new(anchor.0, anchor.1), IVec2::new(size.0, size.1))
            .with_base_height(base_height),
    )
}

fn wall(anchor: (i32, i32), direction: WallDirection, length: i32, height: i32) -> EntityKind {
    EntityKind::Wall(Wall::new(
        IVec2::new(anchor.0, anchor.1),
        direction,
        length,
        height,
    ))
}

fn mount(position: (i32, i32), direction: WallDirection, along: i32, level: i32) -> WallMount {
    WallMount::new(IVec2::new(position.0, position.1), direction, along, level)
}

/// Return the standard suite of layouts. All fit a 10x10 grid.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![furniture_row(), floor_stack(), room_layout(), wall_mounts()]
}

/// Table and chair overlapping at (3, 2); a stool stacked one level up
/// on the same cell stays valid.
fn furniture_row() -> SceneConfig {
    let table = Furniture::new(IVec2::new(2, 2), IVec2::new(2, 1)).with_surface(IVec2::new(2, 1));
    SceneConfig {
        name: "furniture-row",
        expected_invalid: 2,
        entities: vec![
            ("Table".into(), EntityKind::Furniture(table)),
            ("Chair".into(), furniture((3, 2), (1, 1), 0.0)),
            ("Stool".into(), furniture((3, 2), (1, 1), 1.0)),
            ("Bench".into(), furniture((6, 2), (3, 1), 0.0)),
        ],
    }
}

/// Slabs only compete with slabs on the same level.
fn floor_stack() -> SceneConfig {
    SceneConfig {
        name: "floor-stack",
        expected_invalid: 2,
        entities: vec![
            (
                "Ground floor".into(),
                EntityKind::Floor(Floor::new(IVec2::ZERO, IVec2::new(6, 6), 0.0)),
            ),
            (
                "Mezzanine".into(),
                EntityKind::Floor(Floor::new(IVec2::ZERO, IVec2::new(3, 3), 2.0)),
            ),
            (
                "Patio".into(),
                EntityKind::Floor(Floor::new(IVec2::new(5, 5), IVec2::new(2, 2), 0.0)),
            ),
            ("Rug".into(), furniture((1, 1), (2, 2), 0.0)),
        ],
    }
}

/// Two walls meeting in the corner cell both fail; furniture inside the
/// room does not touch them.
fn room_layout() -> SceneConfig {
    SceneConfig {
        name: "room-layout",
        expected_invalid: 2,
        entities: vec![
            ("Back wall".into(), wall((0, 0), WallDirection::North, 6, 3)),
            ("Side wall".into(), wall((0, 0), WallDirection::East, 6, 3)),
            ("Sofa".into(), furniture((2, 4), (2, 1), 0.0)),
            ("Coffee table".into(), furniture((2, 2), (2, 1), 0.0)),
            ("Lamp".into(), furniture((5, 5), (1, 1), 0.0)),
        ],
    }
}

/// Picture and clock overlap on the same wall and level; the shelf and
/// the east-facing mirror do not.
fn wall_mounts() -> SceneConfig {
    let shelf = mount((0, 4), WallDirection::North, 2, 1)
        .with_surface(MountSurface::new(IVec2::new(2, 1)));
    let mirror = WallMount {
        permissions: MountPermissions::only(WallDirection::East),
        ..mount((1, 0), WallDirection::East, 2, 2)
    };
    SceneConfig {
        name: "wall-mounts",
        expected_invalid: 2,
        entities: vec![
            ("Back wall".into(), wall((0, 1), WallDirection::North, 6, 4)),
            ("Side wall".into(), wall((1, 0), WallDirection::East, 6, 4)),
            (
                "Picture".into(),
                EntityKind::WallMount(mount((0, 1), WallDirection::North, 2, 2)),
            ),
            (
                "Clock".into(),
                EntityKind::WallMount(mount((0, 2), WallDirection::North, 1, 2)),
            ),
            ("Shelf".into(), EntityKind::WallMount(shelf)),
            ("Mirror".into(), EntityKind::WallMount(mirror)),
        ],
    }
}
