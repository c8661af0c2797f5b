//! World plugin - stage loading, setup, and teardown.

use bevy::prelude::*;

use super::builder::{build_level_from_data, LevelEntity};
use super::data::{load_level_definition, CurrentLevel};
use crate::core::GameState;
use crate::hazards::KillPlane;
use crate::player::{spawn_player, PlayerConfig};

/// World plugin - handles stage loading and setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_level_definition, spawn_camera))
            .add_systems(OnEnter(GameState::InGame), setup_level)
            .add_systems(OnExit(GameState::InGame), cleanup_level);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 0.3,
            ..OrthographicProjection::default_2d()
        },
    ));
}

/// Set up the stage from data.
pub fn setup_level(
    mut commands: Commands,
    current_level: Res<CurrentLevel>,
    player_config: Res<PlayerConfig>,
    asset_server: Res<AssetServer>,
    mut atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let level = &current_level.0;
    info!("Building level: {}", level.name);

    commands.insert_resource(KillPlane(level.kill_plane));

    let player_pos = build_level_from_data(&mut commands, level);
    spawn_player(
        &mut commands,
        player_pos,
        &player_config,
        &asset_server,
        &mut atlas_layouts,
    );
}

/// Clean up stage entities when leaving InGame state.
fn cleanup_level(mut commands: Commands, level_query: Query<Entity, With<LevelEntity>>) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
