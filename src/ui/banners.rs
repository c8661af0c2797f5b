//! End-of-run banners.
//!
//! Both banners are spawned hidden with the stage. The player controller
//! reveals the game-over banner itself when it dies; the victory banner is
//! revealed when the run enters `RunState::Victory`.

use bevy::prelude::*;

use crate::core::{GameState, RunState};
use crate::world::LevelEntity;

/// "GAME OVER" text, shown by the player controller on death.
#[derive(Component)]
pub struct GameOverBanner;

/// "YOU WIN!" text.
#[derive(Component)]
pub struct VictoryBanner;

/// "Press R to restart" hint under either banner.
#[derive(Component)]
struct RestartHint;

/// Setup banner systems.
pub fn setup_banner_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_banners)
        .add_systems(OnEnter(RunState::Victory), show_victory_banner)
        .add_systems(OnEnter(RunState::GameOver), show_restart_hint)
        .add_systems(OnEnter(RunState::Victory), show_restart_hint);
}

/// Spawn the hidden banners.
fn spawn_banners(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            LevelEntity,
        ))
        .with_children(|parent| {
            spawn_banner_text(parent, "GAME OVER", Color::srgb(0.9, 0.15, 0.15), GameOverBanner);
            spawn_banner_text(parent, "YOU WIN!", Color::srgb(1.0, 0.85, 0.2), VictoryBanner);

            parent.spawn((
                Text::new("Press R to restart"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
                Visibility::Hidden,
                RestartHint,
            ));
        });
}

/// Helper to spawn a hidden banner line.
fn spawn_banner_text<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, marker: M) {
    parent.spawn((
        Text::new(label),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(color),
        Visibility::Hidden,
        marker,
    ));
}

fn show_victory_banner(mut banners: Query<&mut Visibility, With<VictoryBanner>>) {
    for mut visibility in banners.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

fn show_restart_hint(mut hints: Query<&mut Visibility, With<RestartHint>>) {
    for mut visibility in hints.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}
