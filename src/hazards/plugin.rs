//! Hazard plugin - barrel spawning and cleanup.

use bevy::prelude::*;

use super::components::KillPlane;
use super::spawning::{despawn_fallen_hazards, tick_hazard_spawners};
use crate::core::{GameState, RunState};

/// Hazard plugin - runs spawners during a run and culls fallen barrels.
pub struct HazardPlugin;

impl Plugin for HazardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KillPlane>()
            .add_systems(
                Update,
                tick_hazard_spawners.run_if(in_state(RunState::Playing)),
            )
            .add_systems(
                Update,
                despawn_fallen_hazards.run_if(in_state(GameState::InGame)),
            );
    }
}
