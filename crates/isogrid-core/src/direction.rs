use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Orientation of a wall run, in grid axes.
///
/// In the isometric view North runs up-left, East up-right, South
/// down-right and West down-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum WallDirection {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// All 4 wall directions, in declaration order.
pub const ALL_WALL_DIRECTIONS: [WallDirection; 4] = [
    WallDirection::North,
    WallDirection::East,
    WallDirection::South,
    WallDirection::West,
];

impl WallDirection {
    /// Unit step along which the wall extends.
    pub fn extend(self) -> IVec2 {
        match self {
            WallDirection::North => IVec2::new(0, 1),
            WallDirection::East => IVec2::new(1, 0),
            WallDirection::South => IVec2::new(0, -1),
            WallDirection::West => IVec2::new(-1, 0),
        }
    }

    /// Unit vector perpendicular to the run. Mounted surfaces protrude along it.
    pub fn normal(self) -> IVec2 {
        match self {
            WallDirection::North => IVec2::new(1, 0),
            WallDirection::East => IVec2::new(0, 1),
            WallDirection::South => IVec2::new(-1, 0),
            WallDirection::West => IVec2::new(0, -1),
        }
    }

    /// Direction whose extension vector is `step`, if `step` is a unit axis step.
    pub fn from_extend(step: IVec2) -> Option<Self> {
        ALL_WALL_DIRECTIONS
            .into_iter()
            .find(|dir| dir.extend() == step)
    }
}
