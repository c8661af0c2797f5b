//! Barrel Climb - a 2D girder-and-ladder platformer in Bevy.
//!
//! Climb from the bottom girder to the goal at the top while barrels roll
//! down the stage. One touch from a barrel ends the run.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, run outcome events, restart
//! - **Player**: The platformer controller and its physics/input wiring
//! - **Hazards**: Barrel spawner and barrel cleanup
//! - **World**: Stage data, collision layers, level construction
//! - **Audio**: Background music and sound effects
//! - **UI**: Game over and victory banners

pub mod audio;
pub mod core;
pub mod hazards;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct BarrelClimbPlugin;

impl Plugin for BarrelClimbPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Barrels
            .add_plugins(hazards::HazardPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Sound
            .add_plugins(audio::GameAudioPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
