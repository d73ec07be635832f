use std::time::Instant;

use isogrid_core::CoordinateSystem;
use isogrid_placement::occupancy::{self, Placement};
use isogrid_placement::PlacementScene;

use crate::scenes::SceneConfig;

/// Result of validating a single scene.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SceneReport {
    pub scene_name: String,
    pub entity_count: usize,
    /// Names of entities that collide with something.
    pub invalid: Vec<String>,
    pub expected_invalid: usize,
    pub out_of_bounds: usize,
    /// Wall mounts with no wall to hang on.
    pub detached: usize,
    /// Wall-surface cells across all walls in the scene.
    pub wall_surface_cells: usize,
    pub elapsed_ms: f64,
}

impl SceneReport {
    pub fn passed(&self) -> bool {
        self.invalid.len() == self.expected_invalid
    }
}

/// Runs layout scenes against one grid.
pub struct ScenarioRunner {
    coords: CoordinateSystem,
}

impl ScenarioRunner {
    pub fn new(coords: CoordinateSystem) -> Self {
        Self { coords }
    }

    /// Build and validate a single scene.
    pub fn run_scene(&self, config: &SceneConfig) -> SceneReport {
        log::info!(
            "Running scene '{}' ({} entities)...",
            config.name,
            config.entities.len()
        );
        let start = Instant::now();

        let mut scene = PlacementScene::new(self.coords.clone());
        for (name, kind) in &config.entities {
            scene.insert(name.clone(), kind.clone());
        }

        let invalid: Vec<String> = scene
            .find_invalid()
            .into_iter()
            .filter_map(|id| scene.get(id).map(|e| e.name.clone()))
            .collect();

        let mut out_of_bounds = 0;
        let mut detached = 0;
        let mut wall_surface_cells = 0;
        for entity in scene.entities() {
            match occupancy::check_placement(&self.coords, entity, scene.entities()) {
                Placement::OutOfBounds { .. } => out_of_bounds += 1,
                Placement::Detached => detached += 1,
                Placement::Ok | Placement::Blocked(_) => {}
            }
            if let Some(wall) = entity.as_wall() {
                wall_surface_cells += isogrid_placement::wall::surface_cells(&self.coords, wall).len();
            }
        }

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::debug!(
            "Scene '{}': {} invalid, {} out of bounds, {} detached",
            config.name,
            invalid.len(),
            out_of_bounds,
            detached
        );

        SceneReport {
            scene_name: config.name.to_string(),
            entity_count: config.entities.len(),
            invalid,
            expected_invalid: config.expected_invalid,
            out_of_bounds,
            detached,
            wall_surface_cells,
            elapsed_ms,
        }
    }

    /// Cells whose anchor does not convert back to the same cell. Zero for
    /// every valid configuration.
    pub fn roundtrip_failures(&self) -> usize {
        let dims = self.coords.dimensions();
        let mut failures = 0;
        for x in 0..dims.x {
            for y in 0..dims.y {
                let cell = glam::IVec2::new(x, y);
                let world = self.coords.grid_to_world(cell, 0.0);
                if self.coords.world_to_grid_ignore_height(world) != cell {
                    log::warn!("Cell {:?} does not round-trip (world {:?})", cell, world);
                    failures += 1;
                }
            }
        }
        failures
    }
}
