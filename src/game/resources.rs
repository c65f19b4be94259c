//! Game resources (singleton state).

use bevy::prelude::*;
use rand::Rng;

use crate::engine::SnakeEngine;

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Main game resource: the snake engine plus the app-level phase. The engine
/// is the only holder of the snake body and apple; everything else reads
/// them through its queries.
#[derive(Resource)]
pub struct Game {
    pub engine: SnakeEngine,
    pub phase: GamePhase,
}

impl Game {
    /// Creates the resource in the menu phase with a freshly set up engine.
    pub fn new(rng: &mut impl Rng) -> Self {
        Game {
            engine: SnakeEngine::new(rng),
            phase: GamePhase::Menu,
        }
    }

    /// Discards the current engine and starts a new run.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.engine = SnakeEngine::new(rng);
        self.phase = GamePhase::Playing;
    }
}
