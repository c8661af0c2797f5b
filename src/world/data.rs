//! Stage data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::DataLoadError;

/// An axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

impl RectDef {
    pub const fn new(center: (f32, f32), size: (f32, f32)) -> Self {
        Self { center, size }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// World-space y of the top edge.
    pub fn top(&self) -> f32 {
        self.center.1 + self.size.1 * 0.5
    }
}

fn default_barrel_radius() -> f32 {
    5.0
}

/// The barrel thrower.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpawnerDef {
    pub position: (f32, f32),
    /// Shortest and longest wait between barrels, in seconds
    pub interval: (f32, f32),
    pub roll_velocity: f32,
    #[serde(default = "default_barrel_radius")]
    pub barrel_radius: f32,
}

fn default_kill_plane() -> f32 {
    -160.0
}

/// A stage as read from RON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    /// Center of the player body at spawn
    pub player_start: (f32, f32),
    /// Anything below this height is gone for good
    #[serde(default = "default_kill_plane")]
    pub kill_plane: f32,
    pub girders: Vec<RectDef>,
    #[serde(default)]
    pub ladders: Vec<RectDef>,
    pub win_area: RectDef,
    #[serde(default)]
    pub spawner: Option<SpawnerDef>,
}

impl Default for LevelDefinition {
    /// Four stacked girders with a ladder between each pair, the goal top right.
    fn default() -> Self {
        Self {
            name: "Girders".to_string(),
            player_start: (140.0, -84.0),
            kill_plane: default_kill_plane(),
            girders: vec![
                RectDef::new((0.0, -96.0), (360.0, 8.0)),
                RectDef::new((20.0, -40.0), (280.0, 8.0)),
                RectDef::new((20.0, 16.0), (280.0, 8.0)),
                RectDef::new((20.0, 72.0), (280.0, 8.0)),
            ],
            // Each ladder runs exactly from one girder top to the next
            ladders: vec![
                RectDef::new((100.0, -64.0), (10.0, 56.0)),
                RectDef::new((-60.0, -8.0), (10.0, 56.0)),
                RectDef::new((120.0, 48.0), (10.0, 56.0)),
            ],
            win_area: RectDef::new((145.0, 90.0), (24.0, 24.0)),
            spawner: Some(SpawnerDef {
                position: (60.0, 88.0),
                interval: (2.0, 4.0),
                roll_velocity: -40.0,
                barrel_radius: default_barrel_radius(),
            }),
        }
    }
}

impl LevelDefinition {
    pub const PATH: &'static str = "assets/data/levels/stage.ron";

    /// Parse a stage from RON text and check it is playable.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let level: Self = ron::from_str(contents).map_err(|e| DataLoadError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        level.validate(path)?;
        Ok(level)
    }

    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let invalid = |details: String| DataLoadError::Invalid {
            path: path.to_string(),
            details,
        };

        if self.girders.is_empty() {
            return Err(invalid("stage has no girders".to_string()));
        }

        let rects = self
            .girders
            .iter()
            .map(|r| ("girder", r))
            .chain(self.ladders.iter().map(|r| ("ladder", r)))
            .chain(std::iter::once(("win_area", &self.win_area)));
        for (kind, rect) in rects {
            if !(rect.size.0 > 0.0 && rect.size.1 > 0.0) {
                return Err(invalid(format!(
                    "{kind} at {:?} has non-positive size {:?}",
                    rect.center, rect.size
                )));
            }
        }

        if let Some(spawner) = &self.spawner {
            let (min, max) = spawner.interval;
            if min < 0.0 || max < min || !(max > 0.0) {
                return Err(invalid(format!("spawner interval {:?} is not a valid range", spawner.interval)));
            }
            if !(spawner.barrel_radius > 0.0) {
                return Err(invalid(format!("barrel radius {} must be positive", spawner.barrel_radius)));
            }
        }

        if self.player_start.1 < self.kill_plane {
            return Err(invalid("player starts below the kill plane".to_string()));
        }

        Ok(())
    }

    /// Read and parse a stage file.
    pub fn read(path: &str) -> Result<Self, DataLoadError> {
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(path, &contents)
    }

    /// Load the stage file, falling back to the built-in stage.
    pub fn load() -> Self {
        match Self::read(Self::PATH) {
            Ok(level) => {
                info!("Loaded level: {}", level.name);
                level
            }
            Err(e @ DataLoadError::Read { .. }) => {
                warn!("{}. Using built-in stage.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using built-in stage.", e);
                Self::default()
            }
        }
    }
}

/// The stage currently being played.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentLevel(pub LevelDefinition);

/// Load the stage definition at startup.
pub fn load_level_definition(mut commands: Commands) {
    commands.insert_resource(CurrentLevel(LevelDefinition::load()));
}
