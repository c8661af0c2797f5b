//! Player-related components and tuning.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::world::DataLoadError;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Movement tuning for the player character, loaded from assets/data/player.ron.
///
/// Distances and speeds are in world units (pixels).
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal run speed
    pub max_speed: f32,
    /// Climbing speed as a fraction of `max_speed`
    pub climb_speed_factor: f32,
    /// Upward impulse applied when a jump starts
    pub jump_impulse: f32,
    /// Collider and sprite height; the feet sit half of this below the center
    pub body_height: f32,
    /// Collider width
    pub body_width: f32,
    /// Length of the downward ground probe from the feet
    pub ground_probe_distance: f32,
    /// Upward ladder probe length as a fraction of `body_height`
    pub ladder_reach_up: f32,
    /// Downward and in-climb ladder probe length as a fraction of `body_height`
    pub ladder_reach_down: f32,
    /// Speed above which the walking loop plays
    pub walk_sound_threshold: f32,
    /// Mass given to the body on death so barrels cannot shove it
    pub dead_mass: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed: 50.0,
            climb_speed_factor: 0.5,
            jump_impulse: 180.0,
            body_height: 16.0,
            body_width: 12.0,
            ground_probe_distance: 1.5,
            ladder_reach_up: 0.5,
            ladder_reach_down: 0.2,
            walk_sound_threshold: 1.0,
            dead_mass: 1000.0,
        }
    }
}

impl PlayerConfig {
    pub const PATH: &'static str = "assets/data/player.ron";

    /// Parse a config from RON text and check it is usable.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| DataLoadError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let positive = [
            ("max_speed", self.max_speed),
            ("body_height", self.body_height),
            ("body_width", self.body_width),
            ("ground_probe_distance", self.ground_probe_distance),
            ("dead_mass", self.dead_mass),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(DataLoadError::Invalid {
                    path: path.to_string(),
                    details: format!("{field} must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Load player config from RON file, falling back to defaults.
    pub fn load() -> Self {
        match fs::read_to_string(Self::PATH) {
            Ok(contents) => match Self::from_ron(Self::PATH, &contents) {
                Ok(config) => {
                    info!("Loaded player config from {}", Self::PATH);
                    config
                }
                Err(e) => {
                    error!("{}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", Self::PATH, e);
                Self::default()
            }
        }
    }
}

/// System to load player config at startup.
pub fn load_player_config(mut commands: Commands) {
    commands.insert_resource(PlayerConfig::load());
}
