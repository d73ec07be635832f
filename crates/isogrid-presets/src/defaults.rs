//! Built-in grid presets, embedded at compile time.

use isogrid_core::CoordinateSystem;

use crate::loader::{load_coordinate_system, LoadError};

pub const DEFAULT_PRESET: &str = "isometric";

const PRESETS: [(&str, &str); 3] = [
    ("isometric", include_str!("../data/grids/isometric.ron")),
    ("orthogonal", include_str!("../data/grids/orthogonal.ron")),
    ("tall_room", include_str!("../data/grids/tall_room.ron")),
];

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// RON source of a built-in preset.
pub fn preset_source(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, source)| *source)
}

pub fn load_preset(name: &str) -> Result<CoordinateSystem, LoadError> {
    let source = preset_source(name).ok_or_else(|| LoadError::UnknownPreset(name.to_string()))?;
    log::info!("Loading grid preset '{}'", name);
    load_coordinate_system(source)
}
