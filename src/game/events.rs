//! Game events (messages).

use bevy::prelude::*;

use crate::engine::Cell;

/// Message sent when the snake eats the apple (for visual effects).
#[derive(Message)]
pub struct AppleEaten {
    pub cell: Cell,
}
