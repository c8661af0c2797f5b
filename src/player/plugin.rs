//! Player plugin - controller systems and sprite animation.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles player spawning, movement, and animation.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}
