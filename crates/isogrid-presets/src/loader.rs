use std::path::Path;

use isogrid_core::{ConfigError, CoordinateSystem, GridConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse grid RON: {0}")]
    GridParseError(String),
    #[error("Unknown grid preset '{0}'")]
    UnknownPreset(String),
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a grid configuration RON string. Missing fields take their
/// defaults; the result is not validated yet.
pub fn load_grid_config_from_str(ron_str: &str) -> Result<GridConfig, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::GridParseError(e.to_string()))
}

/// Parse and validate a grid configuration into a coordinate system.
pub fn load_coordinate_system(ron_str: &str) -> Result<CoordinateSystem, LoadError> {
    let config = load_grid_config_from_str(ron_str)?;
    Ok(CoordinateSystem::new(config)?)
}

/// Read, parse and validate a grid configuration file.
pub fn load_grid_file(path: &Path) -> Result<CoordinateSystem, LoadError> {
    let text = std::fs::read_to_string(path)?;
    log::info!("Loading grid from {}", path.display());
    load_coordinate_system(&text)
}

/// Render a configuration back to RON, e.g. to seed a new preset file.
pub fn grid_config_to_string(config: &GridConfig) -> Result<String, LoadError> {
    ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())
        .map_err(|e| LoadError::GridParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec2, Vec2};
    use isogrid_core::Projection;

    #[test]
    fn test_load_full_config() {
        let ron = r#"(
            cell_size: (2.0, 1.0),
            dimensions: (8, 6),
            origin: (1.0, 2.0, 0.0),
            projection: Orthogonal,
            height_per_level: 0.5,
            max_levels: 3,
            max_wall_height: 4,
            wall_cell_size: 0.5,
        )"#;
        let config = load_grid_config_from_str(ron).expect("should parse");
        assert_eq!(config.cell_size, Vec2::new(2.0, 1.0));
        assert_eq!(config.dimensions, IVec2::new(8, 6));
        assert_eq!(config.projection, Projection::Orthogonal);
        assert_eq!(config.max_wall_height, 4);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = load_grid_config_from_str("(dimensions: (10, 10))").expect("should parse");
        assert_eq!(config.dimensions, IVec2::new(10, 10));
        assert_eq!(config.cell_size, GridConfig::default().cell_size);
        assert!(config.is_isometric());
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let result = load_grid_config_from_str("(cell_size: [this is not");
        assert!(matches!(result, Err(LoadError::GridParseError(_))));
    }

    #[test]
    fn test_invalid_config_surfaces_config_error() {
        let result = load_coordinate_system("(cell_size: (0.0, 0.5))");
        match result {
            Err(LoadError::InvalidConfig(ConfigError::NonPositiveCellSize { .. })) => {}
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_grid_file(Path::new("/nonexistent/isogrid/grid.ron"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_config_roundtrips_through_ron() {
        let config = GridConfig {
            dimensions: IVec2::new(7, 9),
            projection: Projection::Orthogonal,
            ..Default::default()
        };
        let text = grid_config_to_string(&config).expect("should serialize");
        let back = load_grid_config_from_str(&text).expect("should parse");
        assert_eq!(back, config);
    }
}
