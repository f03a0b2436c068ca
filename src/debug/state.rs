//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Terrain segments drawn as lines
    pub show_terrain: bool,
    /// Actor hitbox outlines
    pub show_hitboxes: bool,
    /// Text readout of room and player state
    pub show_info: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_terrain: true,
            show_hitboxes: false,
            show_info: false,
        }
    }
}
