//! Player spawning and the systems that drive the platformer controller.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::animation::{animate_player, AnimatorParams, PlayerAnimation, PlayerClip};
use super::bindings::{RapierBody, RapierProbe};
use super::components::*;
use super::controller::{
    AnimationSink, FrameInput, GameOverVisual, HazardEmitter, PlayerController, StepInput,
};
use crate::audio::PlayerAudio;
use crate::core::{GameState, LevelCompletedEvent, PlayerDiedEvent};
use crate::hazards::{Hazard, HazardSpawner};
use crate::ui::GameOverBanner;
use crate::world::{layers, LevelEntity, WinArea};

/// Components the controller drives through [`RapierBody`].
type BodyParts = (
    &'static mut Transform,
    &'static mut Sprite,
    &'static mut Velocity,
    &'static mut ExternalImpulse,
    &'static mut RigidBody,
    &'static mut AdditionalMassProperties,
);

/// Player sprite sheet: one row of 16x16 frames, see [`PlayerClip::frames`].
pub const PLAYER_SHEET: &str = "sprites/player.png";

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(Startup, load_player_config)
        .add_systems(
            Update,
            (player_frame_phase, animate_player)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            player_physics_step
                .before(PhysicsSet::SyncBackend)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            handle_player_contacts
                .after(PhysicsSet::Writeback)
                .run_if(in_state(GameState::InGame)),
        );
}

fn rapier_body<'a>(
    (transform, sprite, velocity, impulse, body, mass): &'a mut (
        Mut<'_, Transform>,
        Mut<'_, Sprite>,
        Mut<'_, Velocity>,
        Mut<'_, ExternalImpulse>,
        Mut<'_, RigidBody>,
        Mut<'_, AdditionalMassProperties>,
    ),
) -> RapierBody<'a> {
    RapierBody {
        transform,
        sprite,
        velocity,
        impulse,
        body,
        mass,
    }
}

/// Per-frame phase: ground probe, jump latch, ladder grab.
pub fn player_frame_phase(
    keyboard: Res<ButtonInput<KeyCode>>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<(Entity, &mut PlayerController, BodyParts), With<Player>>,
) {
    let Ok((player_entity, mut controller, mut parts)) = player_query.get_single_mut() else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    let input = FrameInput::from_keyboard(&keyboard);
    let probe = RapierProbe {
        context,
        player: player_entity,
    };
    let mut body = rapier_body(&mut parts);

    controller.frame_update(&input, &mut body, &probe);
}

/// Fixed-step phase: velocities, jump impulse, sounds, animation parameters.
pub fn player_physics_step(
    keyboard: Res<ButtonInput<KeyCode>>,
    rapier_context: Query<&RapierContext>,
    mut audio: PlayerAudio,
    mut player_query: Query<
        (Entity, &mut PlayerController, &mut AnimatorParams, BodyParts),
        With<Player>,
    >,
) {
    let Ok((player_entity, mut controller, mut animator, mut parts)) =
        player_query.get_single_mut()
    else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    let input = StepInput::from_keyboard(&keyboard);
    let probe = RapierProbe {
        context,
        player: player_entity,
    };
    let mut body = rapier_body(&mut parts);
    let mut sounds = audio.sound_effects();

    controller.physics_step(
        &input,
        &mut body,
        &probe,
        &mut sounds,
        Some(&mut *animator as &mut dyn AnimationSink),
    );
}

/// Route Rapier contact events to the controller's hazard and goal handlers.
#[allow(clippy::too_many_arguments)]
pub fn handle_player_contacts(
    mut collision_events: EventReader<CollisionEvent>,
    mut player_query: Query<
        (Entity, &mut PlayerController, &mut AnimatorParams, BodyParts),
        With<Player>,
    >,
    hazards: Query<(), With<Hazard>>,
    win_areas: Query<(), With<WinArea>>,
    mut spawners: Query<&mut HazardSpawner>,
    mut banners: Query<&mut Visibility, With<GameOverBanner>>,
    mut audio: PlayerAudio,
    mut died_events: EventWriter<PlayerDiedEvent>,
    mut completed_events: EventWriter<LevelCompletedEvent>,
) {
    let Ok((player, mut controller, mut animator, mut parts)) = player_query.get_single_mut()
    else {
        collision_events.clear();
        return;
    };

    for event in collision_events.read() {
        let &CollisionEvent::Started(a, b, _) = event else {
            continue;
        };
        let other = if a == player {
            b
        } else if b == player {
            a
        } else {
            continue;
        };

        let mut spawner = spawners.get_single_mut().ok();
        let spawner = spawner
            .as_deref_mut()
            .map(|s| s as &mut dyn HazardEmitter);
        let mut sounds = audio.sound_effects();

        if hazards.contains(other) {
            let mut banner = banners.get_single_mut().ok();
            let banner = banner.as_deref_mut().map(|v| v as &mut dyn GameOverVisual);
            let mut body = rapier_body(&mut parts);

            let died = controller.hit_hazard(
                &mut body,
                &mut sounds,
                Some(&mut *animator as &mut dyn AnimationSink),
                spawner,
                banner,
            );
            if died {
                info!("Player hit by {:?}", other);
                died_events.send(PlayerDiedEvent {
                    player,
                    hazard: other,
                });
            }
        } else if win_areas.contains(other) {
            if controller.enter_win_area(&mut sounds, spawner) {
                info!("You win!");
                completed_events.send(LevelCompletedEvent { player });
            }
        }
    }
}

/// Spawn the player entity at `position` (center of the body).
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    config: &PlayerConfig,
    asset_server: &AssetServer,
    atlas_layouts: &mut Assets<TextureAtlasLayout>,
) -> Entity {
    let layout = atlas_layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(16),
        PlayerClip::SHEET_COLUMNS,
        1,
        None,
        None,
    ));
    let mut sprite = Sprite::from_atlas_image(
        asset_server.load(PLAYER_SHEET),
        TextureAtlas { layout, index: 0 },
    );
    sprite.custom_size = Some(Vec2::new(config.body_height, config.body_height));

    commands
        .spawn((
            Player,
            Name::new("Player"),
            PlayerController::new(config.clone()),
            AnimatorParams::default(),
            PlayerAnimation::default(),
            sprite,
            Transform::from_translation(position.extend(3.0)),
            player_physics(config),
            LevelEntity,
        ))
        .id()
}

/// Rapier components for the player body.
fn player_physics(config: &PlayerConfig) -> impl Bundle {
    let half = Vec2::new(config.body_width, config.body_height) * 0.5;
    (
        RigidBody::Dynamic,
        Collider::cuboid(half.x, half.y),
        CollisionGroups::new(layers::PLAYER, Group::ALL),
        ActiveEvents::COLLISION_EVENTS,
        // Climbing switches the body to kinematic; sensors must still report it
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
        LockedAxes::ROTATION_LOCKED,
        Friction {
            coefficient: 0.0,
            combine_rule: CoefficientCombineRule::Min,
        },
        Velocity::zero(),
        ExternalImpulse::default(),
        AdditionalMassProperties::Mass(1.0),
    )
}
