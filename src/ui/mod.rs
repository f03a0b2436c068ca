//! UI domain: the start gate.

mod menu;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::menu::{despawn_start_screen, spawn_start_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_start_screen)
            .add_systems(OnExit(GameState::MainMenu), despawn_start_screen);
    }
}
