//! Snake plugin - translates keyboard input into direction requests and
//! drives the engine at a fixed tick rate.

use bevy::{prelude::*, time::common_conditions::on_timer};

use crate::engine::{Direction, TickOutcome};
use crate::game::{AppleEaten, Game, GamePhase, TICK_INTERVAL};

/// Plugin for input handling and the fixed-interval game tick.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                direction_input,
                engine_tick.run_if(on_timer(TICK_INTERVAL)),
            )
                .chain(),
        );
    }
}

/// Maps the pressed arrow/WASD keys to a logical direction, if any.
fn requested_direction(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
    if keyboard_input.pressed(KeyCode::ArrowLeft) || keyboard_input.pressed(KeyCode::KeyA) {
        Some(Direction::Left)
    } else if keyboard_input.pressed(KeyCode::ArrowRight) || keyboard_input.pressed(KeyCode::KeyD) {
        Some(Direction::Right)
    } else if keyboard_input.pressed(KeyCode::ArrowUp) || keyboard_input.pressed(KeyCode::KeyW) {
        Some(Direction::Up)
    } else if keyboard_input.pressed(KeyCode::ArrowDown) || keyboard_input.pressed(KeyCode::KeyS) {
        Some(Direction::Down)
    } else {
        None
    }
}

/// System to forward keyboard input to the engine between ticks. The engine
/// keeps only the latest valid request and rejects reversals itself.
fn direction_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game: ResMut<Game>) {
    if game.phase != GamePhase::Playing {
        return;
    }

    if let Some(direction) = requested_direction(&keyboard_input) {
        game.engine.set_direction(direction);
    }
}

/// System to advance the engine by one step on the fixed interval.
fn engine_tick(mut game: ResMut<Game>, mut eaten_writer: MessageWriter<AppleEaten>) {
    if game.phase != GamePhase::Playing {
        return;
    }

    match game.engine.tick(&mut rand::rng()) {
        Ok(TickOutcome::Moved) => {}
        Ok(TickOutcome::Ate) => {
            eaten_writer.write(AppleEaten {
                cell: game.engine.head(),
            });
        }
        Ok(TickOutcome::GameOver) => {
            game.phase = GamePhase::GameOver;
            info!("game over at snake length {}", game.engine.len());
        }
        Err(err) => {
            // Growth could not allocate; the body is unchanged but the run
            // cannot continue.
            game.phase = GamePhase::GameOver;
            error!("snake growth failed: {err}");
        }
    }
}
