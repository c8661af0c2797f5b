//! Collision layers shared by the level, the player and the hazards.

use bevy_rapier2d::prelude::Group;

/// Girders the player stands on.
pub const GROUND: Group = Group::GROUP_1;
/// Climbable ladder volumes (sensors).
pub const LADDER: Group = Group::GROUP_2;
/// Barrels.
pub const HAZARD: Group = Group::GROUP_3;
pub const PLAYER: Group = Group::GROUP_4;
/// The win area (sensor).
pub const GOAL: Group = Group::GROUP_5;
