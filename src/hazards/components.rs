//! Hazard-related components.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::player::HazardEmitter;

/// Marker for anything that kills the player on contact.
#[derive(Component)]
pub struct Hazard;

/// Periodically releases barrels until stopped.
#[derive(Component)]
pub struct HazardSpawner {
    active: bool,
    timer: Timer,
    /// Shortest and longest wait between barrels, in seconds
    pub interval: (f32, f32),
    pub barrel_radius: f32,
    /// Initial horizontal velocity; the sign picks the rolling direction
    pub roll_velocity: f32,
    rng: StdRng,
}

impl HazardSpawner {
    pub fn new(interval: (f32, f32), barrel_radius: f32, roll_velocity: f32) -> Self {
        Self::with_rng(interval, barrel_radius, roll_velocity, StdRng::from_entropy())
    }

    /// Spawner with a fixed seed, for reproducible barrel timing.
    #[cfg(test)]
    pub fn seeded(interval: (f32, f32), barrel_radius: f32, roll_velocity: f32, seed: u64) -> Self {
        Self::with_rng(interval, barrel_radius, roll_velocity, StdRng::seed_from_u64(seed))
    }

    fn with_rng(interval: (f32, f32), barrel_radius: f32, roll_velocity: f32, rng: StdRng) -> Self {
        let mut spawner = Self {
            active: true,
            timer: Timer::default(),
            interval,
            barrel_radius,
            roll_velocity,
            rng,
        };
        spawner.rearm();
        spawner
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn rearm(&mut self) {
        let (min, max) = self.interval;
        let wait = if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        };
        self.timer = Timer::from_seconds(wait.max(0.0), TimerMode::Once);
    }

    /// Advance the timer. Returns true when a barrel should be released now.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.active {
            return false;
        }
        if self.timer.tick(delta).finished() {
            self.rearm();
            return true;
        }
        false
    }

    /// Time left until the next barrel.
    #[cfg(test)]
    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }
}

impl HazardEmitter for HazardSpawner {
    fn stop(&mut self) {
        if self.active {
            info!("Hazard spawner stopped");
        }
        self.active = false;
    }
}

/// Despawns a barrel once it falls below this height.
#[derive(Resource, Debug, Clone, Copy)]
pub struct KillPlane(pub f32);

impl Default for KillPlane {
    fn default() -> Self {
        Self(-200.0)
    }
}
