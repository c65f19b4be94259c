//! ECS components for the snake game.

use bevy::prelude::*;

use crate::engine::Cell;

/// Marks one of the fixed board sprites and remembers which logical cell it
/// renders.
#[derive(Component, Clone, Copy, Debug)]
pub struct GridCell {
    pub cell: Cell,
}

/// Marks the apple shape entity.
#[derive(Component)]
pub struct Apple;

/// Component for apple pulsing animation.
#[derive(Component)]
pub struct ApplePulse {
    pub timer: Timer,
}

/// Component for one-shot expanding flash effects.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;
