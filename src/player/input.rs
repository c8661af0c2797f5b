//! Keyboard mapping for the controller's input snapshots.

use bevy::prelude::*;

use super::controller::{FrameInput, StepInput};

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const JUMP: KeyCode = KeyCode::Space;

/// Digital axis in {-1, 0, 1}; opposing keys cancel out.
fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

impl FrameInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            jump_pressed: keyboard.just_pressed(JUMP),
            vertical: axis(keyboard, DOWN, UP),
        }
    }
}

impl StepInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            horizontal: axis(keyboard, LEFT, RIGHT),
            vertical: axis(keyboard, DOWN, UP),
        }
    }
}
