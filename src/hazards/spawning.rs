//! Barrel spawning and cleanup.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Hazard, HazardSpawner, KillPlane};
use crate::world::{layers, LevelEntity};

/// Spawn the barrel thrower at `position`.
pub fn spawn_hazard_spawner(commands: &mut Commands, position: Vec2, spawner: HazardSpawner) -> Entity {
    commands
        .spawn((
            spawner,
            Sprite::from_color(Color::srgb(0.55, 0.3, 0.1), Vec2::new(24.0, 24.0)),
            Transform::from_translation(position.extend(1.0)),
            LevelEntity,
        ))
        .id()
}

/// Release a barrel whenever a spawner's timer fires.
pub fn tick_hazard_spawners(
    mut commands: Commands,
    time: Res<Time>,
    mut spawners: Query<(&mut HazardSpawner, &Transform)>,
) {
    for (mut spawner, transform) in spawners.iter_mut() {
        if !spawner.tick(time.delta()) {
            continue;
        }

        let radius = spawner.barrel_radius;
        let start = transform.translation.truncate();
        debug!("Releasing barrel at {:?}", start);

        commands.spawn((
            Hazard,
            Name::new("Barrel"),
            Sprite::from_color(Color::srgb(0.6, 0.35, 0.15), Vec2::splat(radius * 2.0)),
            Transform::from_translation(start.extend(2.0)),
            RigidBody::Dynamic,
            Collider::ball(radius),
            CollisionGroups::new(layers::HAZARD, layers::GROUND | layers::PLAYER | layers::HAZARD),
            Friction::coefficient(0.3),
            Restitution::coefficient(0.1),
            Velocity::linear(Vec2::new(spawner.roll_velocity, 0.0)),
            LevelEntity,
        ));
    }
}

/// Remove barrels that rolled off the bottom of the stage.
pub fn despawn_fallen_hazards(
    mut commands: Commands,
    kill_plane: Res<KillPlane>,
    hazards: Query<(Entity, &Transform), With<Hazard>>,
) {
    for (entity, transform) in hazards.iter() {
        if transform.translation.y < kill_plane.0 {
            commands.entity(entity).despawn_recursive();
        }
    }
}
