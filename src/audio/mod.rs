//! Audio module - background music and player sound effects.

mod effects;
mod plugin;

pub use effects::{ChannelSoundEffects, PlayerAudio, WalkLoop};
pub use plugin::{EffectsChannel, GameAudioPlugin, MusicChannel, SoundLibrary, WalkChannel};
