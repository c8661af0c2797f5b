//! Platformer controller logic: running, jumping, ladder climbing, death and win.
//!
//! The controller is independent of the ECS. Bevy systems build input
//! snapshots and collaborator bindings (see `bindings.rs`) and call into it:
//!
//! - [`PlayerController::frame_update`] once per rendered frame
//! - [`PlayerController::physics_step`] once per fixed physics step
//! - [`PlayerController::hit_hazard`] / [`PlayerController::enter_win_area`] on contacts

use bevy::prelude::*;

use super::components::PlayerConfig;

/// Animation parameter names understood by an [`AnimationSink`].
pub mod anim_params {
    pub const SPEED: &str = "Speed";
    pub const JUMPING: &str = "Jumping";
    pub const CLIMBING: &str = "Climbing";
    pub const DEATH: &str = "Death";
}

/// Surface categories a probe can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Ground,
    Ladder,
}

/// Short-range physics queries.
pub trait SurfaceProbe {
    /// Cast a ray from `origin` along `direction` (unit length or zero) for at most
    /// `max_distance`, returning the first collider of the given category.
    ///
    /// A zero `direction` tests whether `origin` itself lies inside such a collider.
    fn cast(&self, origin: Vec2, direction: Vec2, max_distance: f32, surface: Surface) -> Option<Entity>;
}

/// The rigid body the controller drives.
pub trait PlayerBody {
    /// Center of the body in world space.
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
    /// Kinematic bodies ignore gravity and contacts.
    fn set_kinematic(&mut self, kinematic: bool);
    fn set_mass(&mut self, mass: f32);
    /// Mirror the visual horizontally.
    fn flip_x(&mut self);
}

/// Receives named animation parameters.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Sound cues triggered by the player.
pub trait SoundEffects {
    /// Start (`true`) or stop (`false`) the looping footstep sound.
    fn play_walk(&mut self, playing: bool);
    fn play_jump(&mut self);
    fn play_die(&mut self);
    fn play_win(&mut self);
    fn stop_background_music(&mut self);
}

/// Something that keeps spawning hazards until told to stop.
pub trait HazardEmitter {
    fn stop(&mut self);
}

/// The visual shown when the player dies.
pub trait GameOverVisual {
    fn set_enabled(&mut self, enabled: bool);
}

/// Input read once per rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Jump was pressed this frame (not held)
    pub jump_pressed: bool,
    /// Vertical axis in [-1, 1]
    pub vertical: f32,
}

/// Input read once per physics step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepInput {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// Vertical axis in [-1, 1]
    pub vertical: f32,
}

/// Flags describing what the player is doing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub facing_right: bool,
    /// Latched by the frame phase, consumed by the next physics step
    pub should_jump: bool,
    pub is_jumping: bool,
    pub is_dead: bool,
    pub has_won: bool,
    pub grounded: bool,
    /// The ladder currently held, if any
    pub climbing_ladder: Option<Entity>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            facing_right: true,
            should_jump: false,
            is_jumping: false,
            is_dead: false,
            has_won: false,
            grounded: false,
            climbing_ladder: None,
        }
    }
}

/// Drives a single player character.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    config: PlayerConfig,
    state: PlayerState,
}

/// -1, 0 or 1; unlike `f32::signum`, zero maps to zero.
fn axis_sign(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value.signum()
    }
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            state: PlayerState::default(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    fn feet(&self, body: &dyn PlayerBody) -> Vec2 {
        body.position() - Vec2::new(0.0, self.config.body_height * 0.5)
    }

    fn find_ladder(
        &self,
        body: &dyn PlayerBody,
        probe: &dyn SurfaceProbe,
        direction: f32,
        distance: f32,
    ) -> Option<Entity> {
        probe.cast(
            self.feet(body),
            Vec2::new(0.0, direction),
            distance,
            Surface::Ladder,
        )
    }

    /// Per-frame phase: ground check, jump latch and ladder grab.
    pub fn frame_update(
        &mut self,
        input: &FrameInput,
        body: &mut dyn PlayerBody,
        probe: &dyn SurfaceProbe,
    ) {
        if self.state.is_dead {
            return;
        }

        self.state.grounded = probe
            .cast(
                self.feet(body),
                Vec2::NEG_Y,
                self.config.ground_probe_distance,
                Surface::Ground,
            )
            .is_some();

        if input.jump_pressed && self.state.grounded && !self.state.is_jumping {
            self.state.should_jump = true;
        } else if input.vertical != 0.0 && self.state.climbing_ladder.is_none() {
            let direction = axis_sign(input.vertical);
            let reach = if direction > 0.0 {
                self.config.ladder_reach_up
            } else {
                self.config.ladder_reach_down
            };
            let distance = self.config.body_height * reach;

            self.state.climbing_ladder = self.find_ladder(body, probe, direction, distance);
            if let Some(ladder) = self.state.climbing_ladder {
                debug!("Grabbed ladder {:?}", ladder);
                body.set_kinematic(true);
            }
        }
    }

    /// Fixed-step phase: velocity, facing, jump impulse, sounds and animation.
    pub fn physics_step(
        &mut self,
        input: &StepInput,
        body: &mut dyn PlayerBody,
        probe: &dyn SurfaceProbe,
        sounds: &mut dyn SoundEffects,
        animator: Option<&mut dyn AnimationSink>,
    ) {
        if self.state.is_dead {
            return;
        }

        if self.state.is_jumping && self.state.grounded && body.velocity().y <= 0.0 {
            self.state.is_jumping = false;
        }

        let h = input.horizontal;

        if let Some(held) = self.state.climbing_ladder {
            let direction = axis_sign(input.vertical);
            let distance = self.config.body_height * self.config.ladder_reach_down;

            if self.find_ladder(body, probe, direction, distance) != Some(held) {
                if self.state.grounded {
                    debug!("Released ladder {:?}", held);
                    self.state.climbing_ladder = None;
                    body.set_kinematic(false);
                } else {
                    // Hold still at the ladder edge until the feet touch ground
                    body.set_velocity(Vec2::ZERO);
                }
            } else {
                let climb_speed = self.config.max_speed * self.config.climb_speed_factor;
                body.set_velocity(Vec2::new(0.0, direction * climb_speed));
            }

            sounds.play_walk(body.velocity().y.abs() > self.config.walk_sound_threshold);
        } else {
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(axis_sign(h) * self.config.max_speed, velocity.y));

            if (h > 0.0 && !self.state.facing_right) || (h < 0.0 && self.state.facing_right) {
                self.flip(body);
            }

            if self.state.should_jump {
                sounds.play_jump();
                body.apply_impulse(Vec2::new(0.0, self.config.jump_impulse));
                self.state.should_jump = false;
                self.state.is_jumping = true;
            }

            sounds.play_walk(
                !self.state.is_jumping
                    && body.velocity().x.abs() > self.config.walk_sound_threshold,
            );
        }

        if let Some(animator) = animator {
            animator.set_float(anim_params::SPEED, h.abs());
            animator.set_bool(anim_params::JUMPING, self.state.is_jumping);
            animator.set_bool(anim_params::CLIMBING, self.state.climbing_ladder.is_some());
        }
    }

    fn flip(&mut self, body: &mut dyn PlayerBody) {
        self.state.facing_right = !self.state.facing_right;
        body.flip_x();
    }

    /// Contact with a hazard. Returns true if this contact killed the player.
    pub fn hit_hazard(
        &mut self,
        body: &mut dyn PlayerBody,
        sounds: &mut dyn SoundEffects,
        animator: Option<&mut dyn AnimationSink>,
        spawner: Option<&mut dyn HazardEmitter>,
        game_over: Option<&mut dyn GameOverVisual>,
    ) -> bool {
        if self.state.is_dead {
            return false;
        }

        self.state.is_dead = true;

        if let Some(animator) = animator {
            animator.set_bool(anim_params::DEATH, true);
        }

        body.set_velocity(Vec2::ZERO);
        body.set_mass(self.config.dead_mass);

        sounds.stop_background_music();
        sounds.play_walk(false);
        sounds.play_die();

        if let Some(spawner) = spawner {
            spawner.stop();
        }
        if let Some(game_over) = game_over {
            game_over.set_enabled(true);
        }

        true
    }

    /// Entered the goal region. Returns true on the first entry of a living player only.
    pub fn enter_win_area(
        &mut self,
        sounds: &mut dyn SoundEffects,
        spawner: Option<&mut dyn HazardEmitter>,
    ) -> bool {
        if self.state.is_dead || self.state.has_won {
            return false;
        }

        self.state.has_won = true;

        sounds.stop_background_music();
        sounds.play_win();

        if let Some(spawner) = spawner {
            spawner.stop();
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const LADDER: Entity = Entity::from_raw(7);
    const GROUND: Entity = Entity::from_raw(1);

    #[derive(Default)]
    struct FakeBody {
        position: Vec2,
        velocity: Vec2,
        impulses: Vec<Vec2>,
        kinematic: bool,
        mass: f32,
        flips: u32,
    }

    impl PlayerBody for FakeBody {
        fn position(&self) -> Vec2 {
            self.position
        }
        fn velocity(&self) -> Vec2 {
            self.velocity
        }
        fn set_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
        }
        fn apply_impulse(&mut self, impulse: Vec2) {
            self.impulses.push(impulse);
        }
        fn set_kinematic(&mut self, kinematic: bool) {
            self.kinematic = kinematic;
        }
        fn set_mass(&mut self, mass: f32) {
            self.mass = mass;
        }
        fn flip_x(&mut self) {
            self.flips += 1;
        }
    }

    /// One recorded `cast` call: origin, direction, max distance, category.
    type Cast = (Vec2, Vec2, f32, Surface);

    /// Answers probes from fixed lookup tables keyed by category and direction,
    /// and records every query it receives.
    #[derive(Default)]
    struct FakeProbe {
        ground: bool,
        /// Ladder hit for upward, downward and zero-direction probes
        ladder_up: Option<Entity>,
        ladder_down: Option<Entity>,
        ladder_here: Option<Entity>,
        casts: RefCell<Vec<Cast>>,
    }

    impl FakeProbe {
        fn ladder_casts(&self) -> Vec<Cast> {
            self.casts
                .borrow()
                .iter()
                .copied()
                .filter(|cast| cast.3 == Surface::Ladder)
                .collect()
        }
    }

    impl SurfaceProbe for FakeProbe {
        fn cast(&self, origin: Vec2, direction: Vec2, max: f32, surface: Surface) -> Option<Entity> {
            self.casts.borrow_mut().push((origin, direction, max, surface));
            match surface {
                Surface::Ground => self.ground.then_some(GROUND),
                Surface::Ladder if direction.y > 0.0 => self.ladder_up,
                Surface::Ladder if direction.y < 0.0 => self.ladder_down,
                Surface::Ladder => self.ladder_here,
            }
        }
    }

    #[derive(Default)]
    struct FakeSounds {
        walking: bool,
        jumps: u32,
        deaths: u32,
        wins: u32,
        music_stops: u32,
    }

    impl SoundEffects for FakeSounds {
        fn play_walk(&mut self, playing: bool) {
            self.walking = playing;
        }
        fn play_jump(&mut self) {
            self.jumps += 1;
        }
        fn play_die(&mut self) {
            self.deaths += 1;
        }
        fn play_win(&mut self) {
            self.wins += 1;
        }
        fn stop_background_music(&mut self) {
            self.music_stops += 1;
        }
    }

    #[derive(Default)]
    struct FakeAnimator {
        floats: HashMap<String, f32>,
        bools: HashMap<String, bool>,
    }

    impl AnimationSink for FakeAnimator {
        fn set_float(&mut self, name: &str, value: f32) {
            self.floats.insert(name.to_string(), value);
        }
        fn set_bool(&mut self, name: &str, value: bool) {
            self.bools.insert(name.to_string(), value);
        }
    }

    #[derive(Default)]
    struct FakeSpawner {
        stops: u32,
    }

    impl HazardEmitter for FakeSpawner {
        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[derive(Default)]
    struct FakeBanner {
        enabled: bool,
    }

    impl GameOverVisual for FakeBanner {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    struct Rig {
        controller: PlayerController,
        body: FakeBody,
        probe: FakeProbe,
        sounds: FakeSounds,
        animator: FakeAnimator,
    }

    impl Rig {
        fn grounded() -> Self {
            Self {
                controller: PlayerController::new(PlayerConfig::default()),
                body: FakeBody {
                    mass: 1.0,
                    ..default()
                },
                probe: FakeProbe {
                    ground: true,
                    ..default()
                },
                sounds: FakeSounds::default(),
                animator: FakeAnimator::default(),
            }
        }

        fn frame(&mut self, jump_pressed: bool, vertical: f32) {
            let input = FrameInput {
                jump_pressed,
                vertical,
            };
            self.controller
                .frame_update(&input, &mut self.body, &self.probe);
        }

        fn step(&mut self, horizontal: f32, vertical: f32) {
            let input = StepInput {
                horizontal,
                vertical,
            };
            self.controller.physics_step(
                &input,
                &mut self.body,
                &self.probe,
                &mut self.sounds,
                Some(&mut self.animator),
            );
        }

        fn hit(&mut self, spawner: &mut FakeSpawner, banner: &mut FakeBanner) -> bool {
            self.controller.hit_hazard(
                &mut self.body,
                &mut self.sounds,
                Some(&mut self.animator),
                Some(spawner),
                Some(banner),
            )
        }

        fn state(&self) -> &PlayerState {
            self.controller.state()
        }
    }

    #[test]
    fn grounded_jump_applies_single_impulse() {
        let mut rig = Rig::grounded();

        rig.frame(true, 0.0);
        assert!(rig.state().should_jump);

        rig.step(0.0, 0.0);
        assert_eq!(rig.body.impulses, vec![Vec2::new(0.0, 180.0)]);
        assert!(rig.state().is_jumping);
        assert!(!rig.state().should_jump);
        assert_eq!(rig.sounds.jumps, 1);
        assert_eq!(rig.animator.bools.get(anim_params::JUMPING), Some(&true));

        // Still holding the latch state: a second step must not jump again
        rig.body.velocity.y = 90.0;
        rig.step(0.0, 0.0);
        assert_eq!(rig.body.impulses.len(), 1);
        assert_eq!(rig.sounds.jumps, 1);
    }

    #[test]
    fn jump_is_not_latched_while_airborne() {
        let mut rig = Rig::grounded();
        rig.probe.ground = false;

        rig.frame(true, 0.0);
        assert!(!rig.state().grounded);
        assert!(!rig.state().should_jump);
    }

    #[test]
    fn jump_is_not_latched_while_already_jumping() {
        let mut rig = Rig::grounded();
        rig.frame(true, 0.0);
        rig.step(0.0, 0.0);

        // Still rising: grounded probe hits but the jump has not ended
        rig.body.velocity.y = 50.0;
        rig.frame(true, 0.0);
        assert!(!rig.state().should_jump);
    }

    #[test]
    fn landing_while_descending_ends_jump() {
        let mut rig = Rig::grounded();
        rig.frame(true, 0.0);
        rig.step(0.0, 0.0);

        rig.body.velocity.y = 40.0;
        rig.step(0.0, 0.0);
        assert!(rig.state().is_jumping, "ascending jump must not end");

        rig.body.velocity.y = 0.0;
        rig.step(0.0, 0.0);
        assert!(!rig.state().is_jumping);
    }

    #[test]
    fn horizontal_input_sets_signed_max_speed_and_keeps_vertical() {
        let mut rig = Rig::grounded();
        rig.body.velocity = Vec2::new(0.0, -30.0);

        rig.step(0.3, 0.0);
        assert_eq!(rig.body.velocity, Vec2::new(50.0, -30.0));

        rig.step(-1.0, 0.0);
        assert_eq!(rig.body.velocity, Vec2::new(-50.0, -30.0));

        rig.step(0.0, 0.0);
        assert_eq!(rig.body.velocity.x, 0.0);
    }

    #[test]
    fn facing_flips_once_per_direction_change() {
        let mut rig = Rig::grounded();

        for _ in 0..5 {
            rig.step(1.0, 0.0);
        }
        assert_eq!(rig.body.flips, 0);
        assert!(rig.state().facing_right);

        for _ in 0..5 {
            rig.step(-1.0, 0.0);
        }
        assert_eq!(rig.body.flips, 1);
        assert!(!rig.state().facing_right);

        rig.step(0.0, 0.0);
        assert_eq!(rig.body.flips, 1);

        rig.step(1.0, 0.0);
        assert_eq!(rig.body.flips, 2);
        assert!(rig.state().facing_right);
    }

    #[test]
    fn walk_sound_follows_ground_movement() {
        let mut rig = Rig::grounded();

        rig.step(1.0, 0.0);
        assert!(rig.sounds.walking);

        rig.step(0.0, 0.0);
        assert!(!rig.sounds.walking);

        rig.frame(true, 0.0);
        rig.step(1.0, 0.0);
        assert!(!rig.sounds.walking, "no footsteps mid-jump");
    }

    #[test]
    fn speed_parameter_reports_axis_magnitude() {
        let mut rig = Rig::grounded();
        rig.step(-0.75, 0.0);
        assert_eq!(rig.animator.floats.get(anim_params::SPEED), Some(&0.75));
        assert_eq!(rig.animator.bools.get(anim_params::CLIMBING), Some(&false));
    }

    #[test]
    fn pressing_up_at_ladder_grabs_it() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);

        rig.frame(false, 1.0);
        assert_eq!(rig.state().climbing_ladder, Some(LADDER));
        assert!(rig.body.kinematic);
    }

    #[test]
    fn no_ladder_in_pressed_direction_means_no_grab() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);

        rig.frame(false, -1.0);
        assert_eq!(rig.state().climbing_ladder, None);
        assert!(!rig.body.kinematic);
    }

    #[test]
    fn jump_takes_priority_over_ladder_grab() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);

        rig.frame(true, 1.0);
        assert!(rig.state().should_jump);
        assert_eq!(rig.state().climbing_ladder, None);
    }

    #[test]
    fn climbing_moves_vertically_at_half_speed() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);
        rig.frame(false, 1.0);

        rig.step(1.0, 1.0);
        assert_eq!(rig.body.velocity, Vec2::new(0.0, 25.0));
        assert!(rig.sounds.walking);
        assert_eq!(rig.animator.bools.get(anim_params::CLIMBING), Some(&true));
        assert_eq!(rig.body.flips, 0, "no flipping while on a ladder");
    }

    #[test]
    fn idle_on_ladder_holds_position_silently() {
        let mut rig = Rig::grounded();
        rig.probe.ground = false;
        rig.probe.ladder_up = Some(LADDER);
        rig.probe.ladder_here = Some(LADDER);
        rig.frame(false, 1.0);

        rig.step(0.0, 0.0);
        assert_eq!(rig.body.velocity, Vec2::ZERO);
        assert!(!rig.sounds.walking);
        assert_eq!(rig.state().climbing_ladder, Some(LADDER));
    }

    #[test]
    fn losing_ladder_midair_freezes_until_landing() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);
        rig.frame(false, 1.0);

        // Top of the ladder, feet off the ground
        rig.probe.ground = false;
        rig.probe.ladder_up = None;
        rig.frame(false, 1.0);
        rig.body.velocity = Vec2::new(0.0, 25.0);
        rig.step(0.0, 1.0);

        assert_eq!(rig.body.velocity, Vec2::ZERO);
        assert_eq!(rig.state().climbing_ladder, Some(LADDER));
        assert!(rig.body.kinematic);

        rig.probe.ground = true;
        rig.frame(false, 1.0);
        rig.step(0.0, 1.0);
        assert_eq!(rig.state().climbing_ladder, None);
        assert!(!rig.body.kinematic);
    }

    #[test]
    fn different_ladder_counts_as_lost() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);
        rig.frame(false, 1.0);

        rig.probe.ladder_up = Some(Entity::from_raw(8));
        rig.step(0.0, 1.0);
        assert_eq!(rig.state().climbing_ladder, None);
    }

    #[test]
    fn hazard_contact_kills_once() {
        let mut rig = Rig::grounded();
        rig.body.velocity = Vec2::new(50.0, 0.0);
        rig.step(1.0, 0.0);
        let mut spawner = FakeSpawner::default();
        let mut banner = FakeBanner::default();

        assert!(rig.hit(&mut spawner, &mut banner));
        assert!(rig.state().is_dead);
        assert_eq!(rig.body.velocity, Vec2::ZERO);
        assert_eq!(rig.body.mass, 1000.0);
        assert_eq!(spawner.stops, 1);
        assert!(banner.enabled);
        assert!(!rig.sounds.walking);
        assert_eq!(rig.sounds.music_stops, 1);
        assert_eq!(rig.sounds.deaths, 1);
        assert_eq!(rig.animator.bools.get(anim_params::DEATH), Some(&true));

        assert!(!rig.hit(&mut spawner, &mut banner));
        assert_eq!(spawner.stops, 1);
        assert_eq!(rig.sounds.deaths, 1);
    }

    #[test]
    fn hazard_contact_without_optional_collaborators() {
        let mut rig = Rig::grounded();
        let died = rig
            .controller
            .hit_hazard(&mut rig.body, &mut rig.sounds, None, None, None);
        assert!(died);
        assert!(rig.state().is_dead);
        assert_eq!(rig.sounds.deaths, 1);
    }

    #[test]
    fn dead_player_ignores_input() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);
        rig.hit(&mut FakeSpawner::default(), &mut FakeBanner::default());
        let before = rig.state().clone();
        let animator_before = (rig.animator.floats.clone(), rig.animator.bools.clone());

        rig.probe.ground = false;
        rig.frame(true, 1.0);
        rig.step(-1.0, 1.0);

        assert_eq!(rig.state(), &before);
        assert_eq!(rig.body.velocity, Vec2::ZERO);
        assert!(rig.body.impulses.is_empty());
        assert_eq!(rig.body.flips, 0);
        assert!(!rig.body.kinematic);
        assert_eq!((rig.animator.floats.clone(), rig.animator.bools.clone()), animator_before);
    }

    #[test]
    fn win_after_death_is_ignored() {
        let mut rig = Rig::grounded();
        rig.hit(&mut FakeSpawner::default(), &mut FakeBanner::default());
        let before = rig.state().clone();
        let mut spawner = FakeSpawner::default();

        assert!(!rig
            .controller
            .enter_win_area(&mut rig.sounds, Some(&mut spawner)));
        assert_eq!(rig.state(), &before);
        assert!(!rig.state().has_won);
        assert_eq!(rig.sounds.wins, 0);
        assert_eq!(rig.sounds.music_stops, 1);
        assert_eq!(spawner.stops, 0);
    }

    #[test]
    fn surface_queries_start_at_the_feet() {
        let mut rig = Rig::grounded();
        rig.body.position = Vec2::new(30.0, 40.0);
        rig.probe.ladder_up = Some(LADDER);

        rig.frame(false, 1.0);

        let casts = rig.probe.casts.borrow();
        let feet = Vec2::new(30.0, 32.0);
        assert_eq!(casts[0], (feet, Vec2::NEG_Y, 1.5, Surface::Ground));
        assert!(casts.iter().all(|cast| cast.0 == feet));
    }

    #[test]
    fn ladder_grab_reaches_further_up_than_down() {
        let mut rig = Rig::grounded();
        rig.frame(false, 1.0);
        assert_eq!(rig.probe.ladder_casts(), vec![(Vec2::new(0.0, -8.0), Vec2::Y, 8.0, Surface::Ladder)]);

        let mut rig = Rig::grounded();
        rig.frame(false, -1.0);
        assert_eq!(
            rig.probe.ladder_casts(),
            vec![(Vec2::new(0.0, -8.0), Vec2::NEG_Y, 3.2, Surface::Ladder)]
        );
    }

    #[test]
    fn climbing_recheck_uses_short_reach() {
        let mut rig = Rig::grounded();
        rig.probe.ladder_up = Some(LADDER);
        rig.frame(false, 1.0);
        rig.probe.casts.borrow_mut().clear();

        rig.step(0.0, 1.0);
        rig.step(0.0, 0.0);

        let casts = rig.probe.ladder_casts();
        assert_eq!(casts.len(), 2);
        assert_eq!((casts[0].1, casts[0].2), (Vec2::Y, 3.2));
        assert_eq!((casts[1].1, casts[1].2), (Vec2::ZERO, 3.2));
    }

    #[test]
    fn win_is_handled_once() {
        let mut rig = Rig::grounded();
        let mut spawner = FakeSpawner::default();

        assert!(rig
            .controller
            .enter_win_area(&mut rig.sounds, Some(&mut spawner)));
        assert!(rig.state().has_won);
        assert_eq!(rig.sounds.wins, 1);
        assert_eq!(rig.sounds.music_stops, 1);
        assert_eq!(spawner.stops, 1);

        assert!(!rig
            .controller
            .enter_win_area(&mut rig.sounds, Some(&mut spawner)));
        assert_eq!(rig.sounds.wins, 1);
        assert_eq!(spawner.stops, 1);
    }

    #[test]
    fn win_without_spawner() {
        let mut rig = Rig::grounded();
        assert!(rig.controller.enter_win_area(&mut rig.sounds, None));
        assert_eq!(rig.sounds.wins, 1);
    }

    #[test]
    fn axis_sign_maps_zero_to_zero() {
        assert_eq!(axis_sign(0.0), 0.0);
        assert_eq!(axis_sign(0.2), 1.0);
        assert_eq!(axis_sign(-0.2), -1.0);
    }
}
