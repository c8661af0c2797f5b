//! Global events used for cross-system communication.
//!
//! The player systems send these when the controller reports a terminal
//! transition; core flow and UI react to them without touching the player.

use bevy::prelude::*;

/// Sent once when the player is killed by a hazard.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    /// The player entity
    pub player: Entity,
    /// The hazard that hit the player
    pub hazard: Entity,
}

/// Sent once when the player enters the win area.
#[derive(Event, Debug, Clone, Copy)]
pub struct LevelCompletedEvent {
    /// The player entity
    pub player: Entity,
}
