//! Audio plugin - Kira channels, sound handles, and background music.

use bevy::prelude::*;
use bevy_kira_audio::prelude::{AudioApp, AudioChannel, AudioControl, AudioPlugin, AudioSource};

use super::effects::WalkLoop;
use crate::core::GameState;

/// Looping background music.
#[derive(Resource)]
pub struct MusicChannel;

/// Looping footsteps, started and stopped by the player controller.
#[derive(Resource)]
pub struct WalkChannel;

/// One-shot jump, death and win effects.
#[derive(Resource)]
pub struct EffectsChannel;

/// Handles to every sound the game plays.
#[derive(Resource)]
pub struct SoundLibrary {
    pub music: Handle<AudioSource>,
    pub walk: Handle<AudioSource>,
    pub jump: Handle<AudioSource>,
    pub die: Handle<AudioSource>,
    pub win: Handle<AudioSource>,
}

impl SoundLibrary {
    pub const MUSIC: &'static str = "audio/background.wav";
    pub const WALK: &'static str = "audio/walking.wav";
    pub const JUMP: &'static str = "audio/jump.wav";
    pub const DIE: &'static str = "audio/death.wav";
    pub const WIN: &'static str = "audio/win.wav";

    fn load(asset_server: &AssetServer) -> Self {
        Self {
            music: asset_server.load(Self::MUSIC),
            walk: asset_server.load(Self::WALK),
            jump: asset_server.load(Self::JUMP),
            die: asset_server.load(Self::DIE),
            win: asset_server.load(Self::WIN),
        }
    }
}

/// Audio plugin - owns Kira setup and the music lifecycle.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .add_audio_channel::<MusicChannel>()
            .add_audio_channel::<WalkChannel>()
            .add_audio_channel::<EffectsChannel>()
            .init_resource::<WalkLoop>()
            .add_systems(Startup, load_sounds)
            .add_systems(OnEnter(GameState::InGame), start_music)
            .add_systems(OnExit(GameState::InGame), stop_all_sounds);
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundLibrary::load(&asset_server));
}

fn start_music(library: Res<SoundLibrary>, music: Res<AudioChannel<MusicChannel>>) {
    music.play(library.music.clone()).looped();
}

/// Silence everything when the stage is torn down.
fn stop_all_sounds(
    music: Res<AudioChannel<MusicChannel>>,
    walk: Res<AudioChannel<WalkChannel>>,
    effects: Res<AudioChannel<EffectsChannel>>,
    mut walk_loop: ResMut<WalkLoop>,
) {
    music.stop();
    walk.stop();
    effects.stop();
    walk_loop.playing = false;
}
