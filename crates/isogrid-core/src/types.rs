use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::direction::WallDirection;

/// Discrete cell on the ground grid. Valid iff inside `GridConfig::dimensions`.
pub type GridCell = IVec2;

/// Discrete vertical layer. Level 0 is the ground.
pub type HeightLevel = i32;

/// Stable identity of a placed entity, assigned by the owning scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One cell of a wall's vertical lattice.
///
/// `direction` is the direction the wall *extends* in, not its normal; the
/// corner geometry picks its horizontal edge from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallSurfaceCell {
    pub base: GridCell,
    pub level: HeightLevel,
    pub direction: WallDirection,
}
