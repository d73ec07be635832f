//! Placeable entity kinds and the shared footprint interface.
//!
//! Entities are owned by the surrounding scene. Everything here reads them;
//! nothing keeps a reference past the call that received it.

use std::fmt;

use glam::IVec2;
use isogrid_core::constants::*;
use isogrid_core::{CoordinateSystem, EntityId, GridCell, HeightLevel, WallDirection};
use serde::{Deserialize, Serialize};

use crate::footprint::{resolve_cells, resolve_unclipped, Footprint, FootprintKind, ShapeSpec};
use crate::{mount, wall};

/// Footprints every entity kind can produce.
pub trait Placeable {
    /// Cells the entity physically takes up, at the level it stands on.
    fn primary_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Footprint;

    /// Cells it offers for other entities to stand on.
    fn surface_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Option<Footprint>;

    /// Primary cells before clipping to grid bounds.
    fn unclipped_cells(&self) -> Vec<GridCell>;

    /// World height of the offered surface, above the grid origin.
    fn surface_height(&self, coords: &CoordinateSystem) -> Option<f32>;
}

/// Height level of a height measured from the grid origin.
fn level_of(coords: &CoordinateSystem, height: f32) -> HeightLevel {
    coords.world_height_to_level(coords.config().origin.y + height)
}

/// A floor slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub anchor: GridCell,
    pub footprint: ShapeSpec,
    /// Height of the slab bottom above the grid origin.
    pub floor_height: f32,
    pub thickness: f32,
    /// Walkable top, usually the same shape as the slab.
    pub surface: Option<ShapeSpec>,
}

impl Floor {
    pub fn new(anchor: GridCell, size: IVec2, floor_height: f32) -> Self {
        Self {
            anchor,
            footprint: ShapeSpec::rect(size),
            floor_height,
            thickness: DEFAULT_FLOOR_THICKNESS,
            surface: Some(ShapeSpec::rect(size)),
        }
        .sanitized()
    }

    pub fn sanitized(mut self) -> Self {
        self.footprint = self.footprint.sanitized();
        self.surface = self.surface.map(ShapeSpec::sanitized);
        self.thickness = self.thickness.max(MIN_FLOOR_THICKNESS);
        self
    }

    pub fn level(&self, coords: &CoordinateSystem) -> HeightLevel {
        level_of(coords, self.floor_height)
    }

    pub fn surface_level(&self, coords: &CoordinateSystem) -> HeightLevel {
        level_of(coords, self.floor_height + self.thickness)
    }
}

impl Placeable for Floor {
    fn primary_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Footprint {
        Footprint::new(
            owner,
            FootprintKind::Primary,
            self.level(coords),
            resolve_cells(coords, self.anchor, &self.footprint),
        )
    }

    fn surface_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Option<Footprint> {
        let spec = self.surface.as_ref()?;
        Some(Footprint::new(
            owner,
            FootprintKind::Surface,
            self.surface_level(coords),
            resolve_cells(coords, self.anchor, spec),
        ))
    }

    fn unclipped_cells(&self) -> Vec<GridCell> {
        resolve_unclipped(self.anchor, &self.footprint)
    }

    fn surface_height(&self, _coords: &CoordinateSystem) -> Option<f32> {
        self.surface.as_ref()?;
        Some(self.floor_height + self.thickness)
    }
}

/// A free-standing object: table, bench, chair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub anchor: GridCell,
    pub footprint: ShapeSpec,
    /// Height of the bottom above the grid origin.
    pub base_height: f32,
    pub furniture_height: f32,
    /// Usable top, if anything can be put on it.
    pub surface: Option<ShapeSpec>,
}

impl Furniture {
    pub fn new(anchor: GridCell, size: IVec2) -> Self {
        Self {
            anchor,
            footprint: ShapeSpec::rect(size),
            base_height: 0.0,
            furniture_height: DEFAULT_FURNITURE_HEIGHT,
            surface: None,
        }
        .sanitized()
    }

    pub fn with_base_height(mut self, base_height: f32) -> Self {
        self.base_height = base_height;
        self.sanitized()
    }

    /// Offer the top as a surface of `size` cells.
    pub fn with_surface(mut self, size: IVec2) -> Self {
        self.surface = Some(ShapeSpec::rect(size));
        self.sanitized()
    }

    pub fn sanitized(mut self) -> Self {
        self.footprint = self.footprint.sanitized();
        self.surface = self.surface.map(ShapeSpec::sanitized);
        self.base_height = self.base_height.max(0.0);
        self.furniture_height = self.furniture_height.max(MIN_FURNITURE_HEIGHT);
        self
    }

    pub fn level(&self, coords: &CoordinateSystem) -> HeightLevel {
        level_of(coords, self.base_height)
    }

    pub fn surface_level(&self, coords: &CoordinateSystem) -> HeightLevel {
        level_of(coords, self.base_height + self.furniture_height)
    }
}

impl Placeable for Furniture {
    fn primary_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Footprint {
        Footprint::new(
            owner,
            FootprintKind::Primary,
            self.level(coords),
            resolve_cells(coords, self.anchor, &self.footprint),
        )
    }

    fn surface_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Option<Footprint> {
        let spec = self.surface.as_ref()?;
        Some(Footprint::new(
            owner,
            FootprintKind::Surface,
            self.surface_level(coords),
            resolve_cells(coords, self.anchor, spec),
        ))
    }

    fn unclipped_cells(&self) -> Vec<GridCell> {
        resolve_unclipped(self.anchor, &self.footprint)
    }

    fn surface_height(&self, _coords: &CoordinateSystem) -> Option<f32> {
        self.surface.as_ref()?;
        Some(self.base_height + self.furniture_height)
    }
}

/// A straight wall run with a vertical lattice of mountable cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub anchor: GridCell,
    #[serde(default)]
    pub offset: IVec2,
    pub direction: WallDirection,
    /// Cells along `direction`.
    pub length: i32,
    /// Levels of wall surface.
    pub height: i32,
    pub provides_surface: bool,
    /// Replaces the plain lattice; each entry adds one lattice pass.
    #[serde(default)]
    pub custom_shape: Option<Vec<IVec2>>,
}

impl Wall {
    pub fn new(anchor: GridCell, direction: WallDirection, length: i32, height: i32) -> Self {
        Self {
            anchor,
            offset: IVec2::ZERO,
            direction,
            length,
            height,
            provides_surface: true,
            custom_shape: None,
        }
        .sanitized()
    }

    /// Length and height are at least 1; an empty custom shape is dropped.
    pub fn sanitized(mut self) -> Self {
        self.length = self.length.max(1);
        self.height = self.height.max(1);
        if self.custom_shape.as_ref().is_some_and(|s| s.is_empty()) {
            log::warn!("Wall custom shape has no cells, using the plain lattice");
            self.custom_shape = None;
        }
        self
    }

    /// First base cell of the run.
    pub fn start(&self) -> GridCell {
        self.anchor.saturating_add(self.offset)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new(
            IVec2::ZERO,
            WallDirection::North,
            DEFAULT_WALL_LENGTH,
            DEFAULT_WALL_HEIGHT,
        )
    }
}

impl Placeable for Wall {
    /// Base cells on the ground level.
    fn primary_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Footprint {
        Footprint::new(
            owner,
            FootprintKind::Primary,
            0,
            wall::base_cells(coords, self),
        )
    }

    /// Wall surfaces are vertical; see `wall::surface_cells`.
    fn surface_footprint(&self, _coords: &CoordinateSystem, _owner: EntityId) -> Option<Footprint> {
        None
    }

    fn unclipped_cells(&self) -> Vec<GridCell> {
        wall::unclipped_base_cells(self)
    }

    fn surface_height(&self, _coords: &CoordinateSystem) -> Option<f32> {
        None
    }
}

/// Along-wall width and vertical extent of a mounted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSize {
    pub along: i32,
    pub levels: i32,
}

impl Default for MountSize {
    fn default() -> Self {
        Self {
            along: 1,
            levels: 1,
        }
    }
}

/// Which wall orientations an item may hang on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPermissions {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Default for MountPermissions {
    fn default() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }
}

impl MountPermissions {
    pub fn only(direction: WallDirection) -> Self {
        let mut flags = Self {
            north: false,
            east: false,
            south: false,
            west: false,
        };
        match direction {
            WallDirection::North => flags.north = true,
            WallDirection::East => flags.east = true,
            WallDirection::South => flags.south = true,
            WallDirection::West => flags.west = true,
        }
        flags
    }

    pub fn allows(&self, direction: WallDirection) -> bool {
        match direction {
            WallDirection::North => self.north,
            WallDirection::East => self.east,
            WallDirection::South => self.south,
            WallDirection::West => self.west,
        }
    }
}

/// Orientation of a surface a mounted item sticks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceOrientation {
    /// A shelf top: sits `protrusion` above the mount height.
    #[default]
    Horizontal,
    /// A face parallel to the wall: stays at the mount height.
    Vertical,
}

/// Surface provided by a mounted item, e.g. a shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountSurface {
    /// Along-wall cells by depth cells.
    pub size: IVec2,
    #[serde(default)]
    pub offset: IVec2,
    pub protrusion: f32,
    #[serde(default)]
    pub orientation: SurfaceOrientation,
}

impl MountSurface {
    pub fn new(size: IVec2) -> Self {
        Self {
            size: size.max(IVec2::ONE),
            offset: IVec2::ZERO,
            protrusion: DEFAULT_SURFACE_PROTRUSION,
            orientation: SurfaceOrientation::Horizontal,
        }
    }
}

/// An item hung on a wall: picture, clock, shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallMount {
    /// Base cell of the wall it hangs on.
    pub position: GridCell,
    pub direction: WallDirection,
    pub size: MountSize,
    #[serde(default)]
    pub grid_offset: IVec2,
    /// Only the x component of each entry is used, as an along-wall offset.
    #[serde(default)]
    pub custom_shape: Option<Vec<IVec2>>,
    pub height_level: HeightLevel,
    /// Extra height within the level.
    #[serde(default)]
    pub height_offset: f32,
    #[serde(default)]
    pub surface: Option<MountSurface>,
    #[serde(default)]
    pub permissions: MountPermissions,
}

impl WallMount {
    pub fn new(
        position: GridCell,
        direction: WallDirection,
        along: i32,
        height_level: HeightLevel,
    ) -> Self {
        Self {
            position,
            direction,
            size: MountSize { along, levels: 1 },
            grid_offset: IVec2::ZERO,
            custom_shape: None,
            height_level,
            height_offset: 0.0,
            surface: None,
            permissions: MountPermissions::default(),
        }
        .sanitized()
    }

    pub fn with_surface(mut self, surface: MountSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn sanitized(mut self) -> Self {
        self.size.along = self.size.along.max(1);
        self.size.levels = self.size.levels.max(1);
        if self.custom_shape.as_ref().is_some_and(|s| s.is_empty()) {
            log::warn!("Mount custom shape has no cells, using its along-wall size");
            self.custom_shape = None;
        }
        self
    }

    /// Take the orientation of the wall it is being hung on.
    pub fn aligned_to(mut self, wall: &Wall) -> Self {
        self.direction = wall.direction;
        self
    }

    /// World height of the mount point above the grid origin.
    pub fn world_height(&self, coords: &CoordinateSystem) -> f32 {
        coords.height_for_level(self.height_level) + self.height_offset
    }
}

impl Placeable for WallMount {
    /// Along-wall cells that lie on the grid, at the mount's level.
    fn primary_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Footprint {
        Footprint::new(
            owner,
            FootprintKind::Primary,
            self.height_level,
            mount::occupied_cells(self)
                .into_iter()
                .filter(|cell| coords.is_valid_cell(*cell)),
        )
    }

    fn surface_footprint(&self, coords: &CoordinateSystem, owner: EntityId) -> Option<Footprint> {
        let height = self.surface_height(coords)?;
        Some(Footprint::new(
            owner,
            FootprintKind::Surface,
            level_of(coords, height),
            mount::surface_cells(coords, self),
        ))
    }

    fn unclipped_cells(&self) -> Vec<GridCell> {
        mount::occupied_cells(self)
    }

    fn surface_height(&self, coords: &CoordinateSystem) -> Option<f32> {
        let surface = self.surface.as_ref()?;
        let base = self.world_height(coords);
        Some(match surface.orientation {
            SurfaceOrientation::Horizontal => base + surface.protrusion,
            SurfaceOrientation::Vertical => base,
        })
    }
}

/// The 4 entity kinds, used for pairing rules and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Floor,
    Furniture,
    Wall,
    WallMount,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Floor => "floor",
            Category::Furniture => "furniture",
            Category::Wall => "wall",
            Category::WallMount => "wall mount",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Floor(Floor),
    Furniture(Furniture),
    Wall(Wall),
    WallMount(WallMount),
}

/// One placed object in a scene snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: u32, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: EntityId(id),
            name: name.into(),
            kind,
        }
    }

    pub fn floor(id: u32, name: impl Into<String>, floor: Floor) -> Self {
        Self::new(id, name, EntityKind::Floor(floor))
    }

    pub fn furniture(id: u32, name: impl Into<String>, furniture: Furniture) -> Self {
        Self::new(id, name, EntityKind::Furniture(furniture))
    }

    pub fn wall(id: u32, name: impl Into<String>, wall: Wall) -> Self {
        Self::new(id, name, EntityKind::Wall(wall))
    }

    pub fn wall_mount(id: u32, name: impl Into<String>, mount: WallMount) -> Self {
        Self::new(id, name, EntityKind::WallMount(mount))
    }

    pub fn category(&self) -> Category {
        match self.kind {
            EntityKind::Floor(_) => Category::Floor,
            EntityKind::Furniture(_) => Category::Furniture,
            EntityKind::Wall(_) => Category::Wall,
            EntityKind::WallMount(_) => Category::WallMount,
        }
    }

    pub fn placeable(&self) -> &dyn Placeable {
        match &self.kind {
            EntityKind::Floor(floor) => floor,
            EntityKind::Furniture(furniture) => furniture,
            EntityKind::Wall(wall) => wall,
            EntityKind::WallMount(mount) => mount,
        }
    }

    pub fn as_wall(&self) -> Option<&Wall> {
        match &self.kind {
            EntityKind::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    pub fn as_wall_mount(&self) -> Option<&WallMount> {
        match &self.kind {
            EntityKind::WallMount(mount) => Some(mount),
            _ => None,
        }
    }

    pub fn primary_footprint(&self, coords: &CoordinateSystem) -> Footprint {
        self.placeable().primary_footprint(coords, self.id)
    }

    pub fn surface_footprint(&self, coords: &CoordinateSystem) -> Option<Footprint> {
        self.placeable().surface_footprint(coords, self.id)
    }
}
