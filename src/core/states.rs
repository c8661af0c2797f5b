//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Player control and
//! barrel spawning only run while a run is in progress; the restart key is
//! only read once the run has ended.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to read data files
/// - Enter `InGame` once the stage is ready
/// - Going back to `Loading` tears the stage down and rebuilds it
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Reading config and level data
    #[default]
    Loading,
    /// The stage is built and visible
    InGame,
}

/// Sub-states for a run - only active when GameState::InGame.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum RunState {
    /// Player is alive and has not reached the goal
    #[default]
    Playing,
    /// Player was hit by a barrel
    GameOver,
    /// Player reached the win area
    Victory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_states() {
        assert_eq!(GameState::default(), GameState::Loading);
        assert_eq!(RunState::default(), RunState::Playing);
    }
}
