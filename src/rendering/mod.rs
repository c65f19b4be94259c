//! Rendering plugin - paints the fixed board of cell sprites from the engine
//! state and runs the apple/effect animations.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::engine::{Cell, GRID_SIZE};
use crate::game::{
    APPLE_COLOR, Apple, AppleEaten, ApplePulse, BOARD_CELL_COLOR, CELL_SIZE, CELL_SPRITE_SIZE,
    Game, GridCell, PulseEffect, SNAKE_BODY_COLOR, SNAKE_HEAD_COLOR, Z_APPLE, Z_BOARD, Z_EFFECT,
};

/// Plugin for board rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_board).add_systems(
            Update,
            (
                paint_cells,
                place_apple,
                apple_pulse_animation,
                spawn_eaten_effect,
                pulse_effect_system,
            )
                .chain(),
        );
    }
}

/// World-space center of a logical cell, with the grid centered on the
/// origin.
pub fn cell_to_world(cell: Cell, z: f32) -> Vec3 {
    Vec3::new(
        (cell.x as f32 - GRID_SIZE as f32 / 2.0 + 0.5) * CELL_SIZE,
        (cell.y as f32 - GRID_SIZE as f32 / 2.0 + 0.5) * CELL_SIZE,
        z,
    )
}

/// Spawns one sprite per logical cell plus the apple shape. The sprites are
/// never moved; each frame they are recolored from the engine state.
fn spawn_board(mut commands: Commands) {
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            let cell = Cell { x, y };
            commands.spawn((
                Sprite {
                    color: BOARD_CELL_COLOR,
                    custom_size: Some(Vec2::splat(CELL_SPRITE_SIZE)),
                    ..default()
                },
                Transform::from_translation(cell_to_world(cell, Z_BOARD)),
                GridCell { cell },
            ));
        }
    }

    commands.spawn((
        ShapeBundle::circle(
            &ShapeConfig {
                color: APPLE_COLOR,
                ..ShapeConfig::default_2d()
            },
            CELL_SIZE * 0.45,
        ),
        Apple,
        ApplePulse {
            timer: Timer::from_seconds(0.8, TimerMode::Repeating),
        },
    ));
}

/// System to recolor every board cell by membership: head color, then body
/// color, then board background. The apple shape sits above the cells, so
/// its cell keeps the apple color regardless.
fn paint_cells(game: Res<Game>, mut cells: Query<(&GridCell, &mut Sprite)>) {
    for (grid_cell, mut sprite) in cells.iter_mut() {
        sprite.color = if game.engine.head() == grid_cell.cell {
            SNAKE_HEAD_COLOR
        } else if game.engine.contains(grid_cell.cell) {
            SNAKE_BODY_COLOR
        } else {
            BOARD_CELL_COLOR
        };
    }
}

/// System to keep the apple shape on the engine's apple cell.
fn place_apple(game: Res<Game>, mut apples: Query<&mut Transform, With<Apple>>) {
    if let Ok(mut transform) = apples.single_mut() {
        transform.translation = cell_to_world(game.engine.apple(), Z_APPLE);
    }
}

/// System to animate the apple with a pulsing effect.
fn apple_pulse_animation(
    time: Res<Time>,
    mut apples: Query<(&mut Transform, &mut ApplePulse), With<Apple>>,
) {
    for (mut transform, mut pulse) in apples.iter_mut() {
        pulse.timer.tick(time.delta());

        // Use sine wave for smooth pulsing
        let progress = pulse.timer.fraction();
        let scale = 1.0 + (progress * std::f32::consts::PI * 2.0).sin() * 0.15;

        transform.scale = Vec3::splat(scale);
    }
}

/// System to spawn a flash where the apple was eaten.
fn spawn_eaten_effect(mut commands: Commands, mut eaten_reader: MessageReader<AppleEaten>) {
    for event in eaten_reader.read() {
        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: Color::srgba(1.0, 1.0, 0.3, 0.8),
                    transform: Transform::from_translation(cell_to_world(event.cell, Z_EFFECT)),
                    ..ShapeConfig::default_2d()
                },
                CELL_SIZE * 0.5,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to run one-shot expanding flashes and despawn them when done.
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}
