//! Stage construction from a level definition.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::data::{LevelDefinition, RectDef};
use super::layers;
use crate::hazards::{spawn_hazard_spawner, HazardSpawner};

/// Marker for every entity that belongs to the current stage and is
/// despawned when the stage is torn down.
#[derive(Component)]
pub struct LevelEntity;

/// Reaching this region wins the stage.
#[derive(Component)]
pub struct WinArea;

/// Build all stage geometry. Returns where the player should spawn.
pub fn build_level_from_data(commands: &mut Commands, level: &LevelDefinition) -> Vec2 {
    for girder in &level.girders {
        spawn_girder(commands, girder);
    }

    for ladder in &level.ladders {
        spawn_ladder(commands, ladder);
    }

    spawn_win_area(commands, &level.win_area);

    if let Some(def) = &level.spawner {
        let spawner = HazardSpawner::new(def.interval, def.barrel_radius, def.roll_velocity);
        spawn_hazard_spawner(commands, Vec2::new(def.position.0, def.position.1), spawner);
    }

    Vec2::new(level.player_start.0, level.player_start.1)
}

fn spawn_girder(commands: &mut Commands, rect: &RectDef) {
    let half = rect.half_extents();
    commands.spawn((
        Name::new("Girder"),
        Sprite::from_color(Color::srgb(0.85, 0.15, 0.3), rect.size()),
        Transform::from_translation(rect.center().extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(half.x, half.y),
        CollisionGroups::new(layers::GROUND, Group::ALL),
        Friction::coefficient(0.6),
        LevelEntity,
    ));
}

fn spawn_ladder(commands: &mut Commands, rect: &RectDef) {
    let half = rect.half_extents();
    commands.spawn((
        Name::new("Ladder"),
        Sprite::from_color(Color::srgb(0.2, 0.8, 0.9), rect.size()),
        // Behind girders so the rungs don't cover the floor
        Transform::from_translation(rect.center().extend(-0.5)),
        Collider::cuboid(half.x, half.y),
        Sensor,
        CollisionGroups::new(layers::LADDER, layers::PLAYER),
        LevelEntity,
    ));
}

fn spawn_win_area(commands: &mut Commands, rect: &RectDef) {
    let half = rect.half_extents();
    commands.spawn((
        WinArea,
        Sprite::from_color(Color::srgba(1.0, 0.85, 0.2, 0.4), rect.size()),
        Transform::from_translation(rect.center().extend(-0.5)),
        Collider::cuboid(half.x, half.y),
        Sensor,
        CollisionGroups::new(layers::GOAL, layers::PLAYER),
        LevelEntity,
    ));
}
