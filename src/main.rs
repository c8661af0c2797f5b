//! Barrel Climb - Entry Point
//!
//! Controls:
//! - A/D or Left/Right: Run
//! - W/S or Up/Down: Climb ladders
//! - Space: Jump
//! - R: Restart after the run ends

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins; Kira replaces Bevy's own audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Barrel Climb".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest())
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Physics, stepped in FixedUpdate alongside the controller's physics step
        .add_plugins(
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0).in_fixed_schedule(),
        )

        // Our game plugin
        .add_plugins(barrel_climb::BarrelClimbPlugin)

        .run();
}
