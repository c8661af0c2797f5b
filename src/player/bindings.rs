//! Bevy and Rapier implementations of the controller's collaborator traits.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::controller::{GameOverVisual, PlayerBody, Surface, SurfaceProbe};
use crate::world::layers;

/// Ray and point queries against the Rapier world, ignoring the player's own collider.
pub struct RapierProbe<'a> {
    pub context: &'a RapierContext,
    pub player: Entity,
}

impl RapierProbe<'_> {
    fn filter(&self, surface: Surface) -> QueryFilter<'static> {
        let category = match surface {
            Surface::Ground => layers::GROUND,
            Surface::Ladder => layers::LADDER,
        };
        QueryFilter::new()
            .groups(CollisionGroups::new(Group::ALL, category))
            .exclude_collider(self.player)
    }
}

impl SurfaceProbe for RapierProbe<'_> {
    fn cast(&self, origin: Vec2, direction: Vec2, max_distance: f32, surface: Surface) -> Option<Entity> {
        let filter = self.filter(surface);

        if direction == Vec2::ZERO {
            let mut found = None;
            self.context
                .intersections_with_point(origin, filter, |entity| {
                    found = Some(entity);
                    false
                });
            return found;
        }

        // Solid so a probe starting inside a ladder volume still reports it
        self.context
            .cast_ray(origin, direction, max_distance, true, filter)
            .map(|(entity, _toi)| entity)
    }
}

/// The player's rigid body components and sprite.
pub struct RapierBody<'a> {
    pub transform: &'a mut Transform,
    pub sprite: &'a mut Sprite,
    pub velocity: &'a mut Velocity,
    pub impulse: &'a mut ExternalImpulse,
    pub body: &'a mut RigidBody,
    pub mass: &'a mut AdditionalMassProperties,
}

impl PlayerBody for RapierBody<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.linvel
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.linvel = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulse.impulse += impulse;
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        *self.body = if kinematic {
            RigidBody::KinematicVelocityBased
        } else {
            RigidBody::Dynamic
        };
    }

    fn set_mass(&mut self, mass: f32) {
        *self.mass = AdditionalMassProperties::Mass(mass);
    }

    fn flip_x(&mut self) {
        // Sprite only; the collider keeps its orientation
        self.sprite.flip_x = !self.sprite.flip_x;
    }
}

impl GameOverVisual for Visibility {
    fn set_enabled(&mut self, enabled: bool) {
        *self = if enabled {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
