//! Player module - the platformer controller and its Bevy wiring.

mod animation;
mod bindings;
mod components;
mod controller;
mod input;
mod movement;
mod plugin;

pub use animation::{AnimatorParams, PlayerAnimation, PlayerClip};
pub use bindings::{RapierBody, RapierProbe};
pub use components::*;
pub use controller::{
    anim_params, AnimationSink, FrameInput, GameOverVisual, HazardEmitter, PlayerBody,
    PlayerController, PlayerState, SoundEffects, StepInput, Surface, SurfaceProbe,
};
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
