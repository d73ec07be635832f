pub mod config;
pub mod constants;
pub mod coords;
pub mod direction;
pub mod error;
pub mod types;

pub use config::{GridConfig, Projection};
pub use coords::CoordinateSystem;
pub use direction::WallDirection;
pub use error::ConfigError;
pub use types::{EntityId, GridCell, HeightLevel, WallSurfaceCell};
