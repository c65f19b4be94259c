//! Game constants for cell geometry, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Visual settings
pub const CELL_SIZE: f32 = 25.0;
pub const CELL_SPRITE_SIZE: f32 = CELL_SIZE * 0.92;

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(125);

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(0.9, 0.9, 0.9, 1.0);
pub const SNAKE_BODY_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
pub const APPLE_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const BOARD_CELL_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.9, 0.4, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_BOARD: f32 = 0.5;
pub const Z_APPLE: f32 = 1.0;
pub const Z_EFFECT: f32 = 1.5;
