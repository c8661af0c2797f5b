//! Core plugin that sets up game states, events, and run flow systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the run sub-state
/// - Global events (PlayerDiedEvent, LevelCompletedEvent)
/// - Run outcome and restart handling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<RunState>()

            // Register global events
            .add_event::<PlayerDiedEvent>()
            .add_event::<LevelCompletedEvent>()

            // Loading state - data is read synchronously at startup, so go straight in
            .add_systems(OnEnter(GameState::Loading), transition_to_game)

            .add_systems(
                Update,
                end_run_on_outcome.run_if(in_state(RunState::Playing)),
            )
            .add_systems(
                Update,
                handle_restart_input
                    .run_if(in_state(RunState::GameOver).or(in_state(RunState::Victory))),
            );
    }
}

/// Immediately transition from Loading to InGame.
fn transition_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Move the run into its terminal sub-state when the player dies or wins.
fn end_run_on_outcome(
    mut died: EventReader<PlayerDiedEvent>,
    mut completed: EventReader<LevelCompletedEvent>,
    mut next_run: ResMut<NextState<RunState>>,
) {
    // Death takes precedence over a win reported in the same frame
    if died.read().last().is_some() {
        completed.clear();
        info!("Run over: player died");
        next_run.set(RunState::GameOver);
    } else if completed.read().last().is_some() {
        info!("Run over: level completed");
        next_run.set(RunState::Victory);
    }
}

/// Handle R key to restart once the run has ended.
fn handle_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        info!("Restarting stage");
        next_state.set(GameState::Loading);
    }
}
