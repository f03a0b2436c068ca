//! Debug overlays for terrain and hitboxes (dev-tools feature).
//!
//! Hotkeys:
//! - F1: terrain lines
//! - F2: hitbox outlines
//! - F3: room and player readout
//! - Ctrl+E: spawn an enemy
//! - Ctrl+N / Ctrl+P: warp to the next / previous room

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_hitboxes, draw_terrain_lines, handle_debug_hotkeys};
use crate::debug::ui::{spawn_debug_info_overlay, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_info_overlay)
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    draw_terrain_lines,
                    draw_hitboxes,
                    update_debug_info_overlay,
                ),
            );
    }
}
