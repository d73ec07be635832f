pub mod defaults;
pub mod loader;

pub use defaults::{load_preset, preset_names, DEFAULT_PRESET};
pub use loader::{load_coordinate_system, load_grid_config_from_str, load_grid_file, LoadError};
