use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

mod engine;
mod game;
mod rendering;
mod snake;
mod ui;

use game::{AppleEaten, BACKGROUND_COLOR, CELL_SIZE, Game};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

use engine::GRID_SIZE;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        (GRID_SIZE as f32 * CELL_SIZE + 40.0) as u32,
                        (GRID_SIZE as f32 * CELL_SIZE + 40.0) as u32,
                    ),
                    title: "Snake".to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Game::new(&mut rand::rng()))
        .add_message::<AppleEaten>()
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .run();
}
