//! Core domain: game state definitions for the start gate.

use bevy::prelude::*;

/// `MainMenu` moves to `Run` once, on the start trigger, and never returns.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    Run,
}
