//! UI plugin - handles the start menu, game over screen, and game flow.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::engine::GRID_SIZE;
use crate::game::{
    ARENA_BORDER_COLOR, CELL_SIZE, Game, GameOverUI, GamePhase, MenuUI,
};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                start_game_from_menu,
                restart_game,
                spawn_game_over_screen_system,
            )
                .chain(),
        );
    }
}

/// Initial setup system - camera, arena border, start menu.
fn setup_system(mut commands: Commands, game: Res<Game>, asset_server: Res<AssetServer>) {
    commands.spawn(Camera2d);

    // Arena border around the board
    let arena_size = GRID_SIZE as f32 * CELL_SIZE;
    commands.spawn(ShapeBundle::rect(
        &ShapeConfig {
            color: ARENA_BORDER_COLOR,
            hollow: true,
            thickness: 4.0,
            corner_radii: Vec4::splat(0.02),
            transform: Transform::from_xyz(0.0, 0.0, 0.1),
            ..ShapeConfig::default_2d()
        },
        Vec2::new(arena_size + 8.0, arena_size + 8.0),
    ));

    if game.phase == GamePhase::Menu {
        spawn_start_menu(&mut commands, &asset_server);
    }
}

/// Spawns the start menu UI.
fn spawn_start_menu(commands: &mut Commands, asset_server: &Res<AssetServer>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            MenuUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("SNAKE"),
                TextFont {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 80.0,
                    ..default()
                },
                TextColor(Color::srgba(0.3, 1.0, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Arrow Keys or WASD to move"),
                TextFont {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Eat apples, avoid the walls and yourself"),
                TextFont {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Press SPACE to start"),
                TextFont {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 0.3, 1.0)),
            ));
        });
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, asset_server: &Res<AssetServer>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("GAME OVER"),
                TextFont {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 60.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 0.3, 0.3, 1.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Press SPACE to restart"),
                TextFont {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to spawn the game over screen when a run ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    game: Res<Game>,
    asset_server: Res<AssetServer>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game.is_changed() && game.phase == GamePhase::GameOver && game_over_ui.is_empty() {
        spawn_game_over_screen(&mut commands, &asset_server);
    }
}

/// System to start the game from the menu.
fn start_game_from_menu(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<Game>,
    menu_ui: Query<Entity, With<MenuUI>>,
) {
    if game.phase == GamePhase::Menu && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in menu_ui.iter() {
            commands.entity(entity).despawn_children();
            commands.entity(entity).despawn();
        }

        game.restart(&mut rand::rng());
    }
}

/// System to restart the game from the game over screen.
fn restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<Game>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game.phase == GamePhase::GameOver && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn_children();
            commands.entity(entity).despawn();
        }

        game.restart(&mut rand::rng());
    }
}
