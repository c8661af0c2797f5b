//! Hazards module - rolling barrels and the spawner that throws them.

mod components;
mod plugin;
mod spawning;

pub use components::*;
pub use plugin::HazardPlugin;
pub use spawning::spawn_hazard_spawner;
