//! Kira-backed implementation of the controller's sound cues.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_kira_audio::prelude::{AudioChannel, AudioControl};

use super::plugin::{EffectsChannel, MusicChannel, SoundLibrary, WalkChannel};
use crate::player::SoundEffects;

/// Whether the footstep loop is currently playing.
#[derive(Resource, Debug, Default)]
pub struct WalkLoop {
    pub playing: bool,
}

impl WalkLoop {
    /// Record a start/stop request. Returns true when it changes the loop.
    pub fn request(&mut self, playing: bool) -> bool {
        let changed = self.playing != playing;
        self.playing = playing;
        changed
    }
}

/// Everything a system needs to hand the controller a [`ChannelSoundEffects`].
#[derive(SystemParam)]
pub struct PlayerAudio<'w> {
    library: Res<'w, SoundLibrary>,
    music: Res<'w, AudioChannel<MusicChannel>>,
    walk: Res<'w, AudioChannel<WalkChannel>>,
    effects: Res<'w, AudioChannel<EffectsChannel>>,
    walk_loop: ResMut<'w, WalkLoop>,
}

impl PlayerAudio<'_> {
    pub fn sound_effects(&mut self) -> ChannelSoundEffects<'_> {
        ChannelSoundEffects {
            library: &self.library,
            music: &self.music,
            walk: &self.walk,
            effects: &self.effects,
            walk_loop: &mut self.walk_loop,
        }
    }
}

/// Routes controller sound cues to the Kira channels.
pub struct ChannelSoundEffects<'a> {
    pub library: &'a SoundLibrary,
    pub music: &'a AudioChannel<MusicChannel>,
    pub walk: &'a AudioChannel<WalkChannel>,
    pub effects: &'a AudioChannel<EffectsChannel>,
    pub walk_loop: &'a mut WalkLoop,
}

impl SoundEffects for ChannelSoundEffects<'_> {
    fn play_walk(&mut self, playing: bool) {
        if !self.walk_loop.request(playing) {
            return;
        }
        if playing {
            self.walk.play(self.library.walk.clone()).looped();
        } else {
            self.walk.stop();
        }
    }

    fn play_jump(&mut self) {
        self.effects.play(self.library.jump.clone());
    }

    fn play_die(&mut self) {
        self.effects.play(self.library.die.clone());
    }

    fn play_win(&mut self) {
        self.effects.play(self.library.win.clone());
    }

    fn stop_background_music(&mut self) {
        self.music.stop();
    }
}
