//! World module - stage data, collision layers, and level construction.

mod builder;
mod data;
mod error;
pub mod layers;
mod plugin;

pub use builder::{LevelEntity, WinArea};
pub use data::{CurrentLevel, LevelDefinition, RectDef, SpawnerDef};
pub use error::DataLoadError;
pub use plugin::WorldPlugin;
