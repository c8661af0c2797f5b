//! Sprite animation driven by the controller's animation parameters.

use bevy::prelude::*;
use std::time::Duration;

use super::controller::{anim_params, AnimationSink};

/// Last values the controller forwarded, read by [`animate_player`].
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimatorParams {
    pub speed: f32,
    pub jumping: bool,
    pub climbing: bool,
    pub death: bool,
}

impl AnimationSink for AnimatorParams {
    fn set_float(&mut self, name: &str, value: f32) {
        match name {
            anim_params::SPEED => self.speed = value,
            _ => warn!("Unknown float animation parameter '{}'", name),
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        match name {
            anim_params::JUMPING => self.jumping = value,
            anim_params::CLIMBING => self.climbing = value,
            anim_params::DEATH => self.death = value,
            _ => warn!("Unknown bool animation parameter '{}'", name),
        }
    }
}

/// Animation clips in the player sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerClip {
    Idle,
    Walk,
    Jump,
    Climb,
    Death,
}

impl PlayerClip {
    /// Pick the clip for the current parameters. Earlier checks win.
    pub fn select(params: &AnimatorParams) -> Self {
        if params.death {
            PlayerClip::Death
        } else if params.climbing {
            PlayerClip::Climb
        } else if params.jumping {
            PlayerClip::Jump
        } else if params.speed > 0.0 {
            PlayerClip::Walk
        } else {
            PlayerClip::Idle
        }
    }

    /// First atlas index and frame count.
    pub fn frames(&self) -> (usize, usize) {
        match self {
            PlayerClip::Idle => (0, 1),
            PlayerClip::Walk => (1, 3),
            PlayerClip::Jump => (4, 1),
            PlayerClip::Climb => (5, 2),
            PlayerClip::Death => (7, 1),
        }
    }

    /// Number of columns in the sprite sheet.
    pub const SHEET_COLUMNS: u32 = 8;
}

/// Current clip and frame timer for the player sprite.
#[derive(Component)]
pub struct PlayerAnimation {
    pub clip: PlayerClip,
    pub frame: usize,
    pub timer: Timer,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            clip: PlayerClip::Idle,
            frame: 0,
            timer: Timer::new(Self::FRAME_TIME, TimerMode::Repeating),
        }
    }
}

impl PlayerAnimation {
    pub const FRAME_TIME: Duration = Duration::from_millis(120);

    /// Advance by `delta` and return the atlas index to show.
    pub fn advance(&mut self, params: &AnimatorParams, delta: Duration) -> usize {
        let clip = PlayerClip::select(params);
        if clip != self.clip {
            self.clip = clip;
            self.frame = 0;
            self.timer.reset();
        }

        let (first, count) = clip.frames();
        if self.timer.tick(delta).just_finished() {
            self.frame = (self.frame + 1) % count;
        }

        first + self.frame
    }
}

/// Advance the player's sprite atlas from its animator parameters.
pub fn animate_player(
    time: Res<Time>,
    mut query: Query<(&AnimatorParams, &mut PlayerAnimation, &mut Sprite)>,
) {
    for (params, mut animation, mut sprite) in query.iter_mut() {
        let index = animation.advance(params, time.delta());
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            if atlas.index != index {
                atlas.index = index;
            }
        }
    }
}
